pub mod app;
pub mod header;
pub mod login_logout;
pub mod calendar;

pub use app::render_app;
pub use header::render_header;
pub use login_logout::render_login_logout;
pub use calendar::render_calendar;
