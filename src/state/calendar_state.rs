// ============================================================================
// CALENDAR STATE - Reservas y consumo del periodo mostrado
// ============================================================================

use crate::models::{Booking, BookingPeriod, Usage};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarState {
    /// Periodo para el que se pidieron datos por última vez
    pub period: Option<BookingPeriod>,
    pub bookings: Vec<Booking>,
    pub usage: Vec<Usage>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id de la última petición; solo sus respuestas se aplican
    pub request: u64,
}

impl CalendarState {
    /// Número de reservas que empiezan en `date`
    pub fn bookings_on(&self, date: NaiveDate) -> usize {
        self.bookings.iter().filter(|b| b.start_date() == date).count()
    }

    /// ¿Alguna reserva de `username` empieza en `date`?
    pub fn has_own_booking_on(&self, date: NaiveDate, username: &str) -> bool {
        self.bookings
            .iter()
            .any(|b| b.start_date() == date && b.is_owned_by(username))
    }

    pub fn is_showing(&self, period: BookingPeriod) -> bool {
        self.period == Some(period)
    }

    pub fn is_current_request(&self, request: u64) -> bool {
        self.period.is_some() && self.request == request
    }
}
