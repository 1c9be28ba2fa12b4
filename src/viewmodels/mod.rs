pub mod session_viewmodel;
pub mod calendar_viewmodel;

#[cfg(test)]
pub(crate) mod testing;

pub use session_viewmodel::SessionViewModel;
pub use calendar_viewmodel::CalendarViewModel;
