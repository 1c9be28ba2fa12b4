// ============================================================================
// CONTAINERS - Conectan el store con las vistas puras
// ============================================================================

pub mod login_logout_container;

pub use login_logout_container::*;
