pub mod auth;
pub mod booking;
pub mod period;

pub use auth::{Credentials, CurrentUserResponse, LoginResponse};
pub use booking::{Booking, Usage};
pub use period::BookingPeriod;
