// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod actions;
pub mod login_state;
pub mod create_user_flow_state;
pub mod calendar_state;
pub mod store;
pub mod app_state;

pub use reactivity::*;
pub use actions::*;
pub use login_state::*;
pub use create_user_flow_state::*;
pub use calendar_state::*;
pub use store::*;
pub use app_state::*;
