// ============================================================================
// ACTIONS - Conjunto cerrado de transiciones del store
// ============================================================================
// Las acciones con red (login, createUser, restore) viven en los viewmodels:
// allí se lanza la llamada y al terminar se despacha una de estas acciones.
// ============================================================================

use crate::models::{Booking, BookingPeriod, Usage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Se envió un intento de login
    LoginRequested,
    /// El backend aceptó las credenciales
    LoginSucceeded { username: String },
    /// Login rechazado; el payload solo se usa para logs
    LoginFailed { error: String },
    /// Sesión recuperada a partir del token guardado
    SessionRestored { username: String },
    Logout,
    StartCreateUserFlow,
    EndCreateUserFlow,
    /// Se envió el alta de usuario; el modal se cierra sin esperar respuesta
    CreateUserRequested { username: String },
    /// Nueva carga del calendario; el reducer le asigna un id de petición
    BookingsRequested { period: BookingPeriod },
    /// Las respuestas llevan el id de su petición; las de una anterior se ignoran
    BookingsLoaded { request: u64, bookings: Vec<Booking> },
    BookingsFailed { request: u64, error: String },
    UsageLoaded { request: u64, usage: Vec<Usage> },
}

impl Action {
    /// Nombre corto para logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::LoginRequested => "LOGIN_REQUESTED",
            Action::LoginSucceeded { .. } => "LOGIN_SUCCEEDED",
            Action::LoginFailed { .. } => "LOGIN_FAILED",
            Action::SessionRestored { .. } => "SESSION_RESTORED",
            Action::Logout => "LOGOUT",
            Action::StartCreateUserFlow => "START_CREATE_USER_FLOW",
            Action::EndCreateUserFlow => "END_CREATE_USER_FLOW",
            Action::CreateUserRequested { .. } => "CREATE_USER_REQUESTED",
            Action::BookingsRequested { .. } => "BOOKINGS_REQUESTED",
            Action::BookingsLoaded { .. } => "BOOKINGS_LOADED",
            Action::BookingsFailed { .. } => "BOOKINGS_FAILED",
            Action::UsageLoaded { .. } => "USAGE_LOADED",
        }
    }
}
