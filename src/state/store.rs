// ============================================================================
// STORE - Único dueño de la sesión, el flujo de registro y el calendario
// ============================================================================
// dispatch(action) = reducer puro (estado, acción) -> estado + notificación.
// Las respuestas asíncronas llevan un SessionTicket; si hubo logout desde
// que se emitió la petición, la respuesta se descarta.
// ============================================================================

use crate::models::BookingPeriod;
use crate::state::actions::Action;
use crate::state::calendar_state::CalendarState;
use crate::state::create_user_flow_state::CreateUserFlowState;
use crate::state::login_state::LoginState;
use crate::state::reactivity::ReactiveState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    pub login: LoginState,
    pub create_user_flow: CreateUserFlowState,
    pub calendar: CalendarState,
    /// Se incrementa en cada logout
    pub session_epoch: u64,
}

/// Identifica la generación de sesión en la que se lanzó una petición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTicket {
    epoch: u64,
}

/// Transición pura: nunca rechaza una acción
pub fn reduce(state: &RootState, action: &Action) -> RootState {
    let mut next = state.clone();

    match action {
        Action::LoginRequested => {
            next.login.attempt += 1;
        }
        Action::LoginSucceeded { username } | Action::SessionRestored { username } => {
            next.login.username = Some(username.clone());
            next.login.has_login_failed = false;
            next.login.attempt += 1;
            // Volver a pedir el calendario con los detalles del usuario
            next.calendar.period = None;
        }
        Action::LoginFailed { .. } => {
            next.login.has_login_failed = true;
        }
        Action::Logout => {
            next.login.username = None;
            next.session_epoch += 1;
            next.calendar = CalendarState {
                request: state.calendar.request,
                ..CalendarState::default()
            };
        }
        Action::StartCreateUserFlow => {
            next.create_user_flow.show_create_user_modal = true;
        }
        Action::EndCreateUserFlow | Action::CreateUserRequested { .. } => {
            next.create_user_flow.show_create_user_modal = false;
        }
        Action::BookingsRequested { period } => {
            next.calendar.request += 1;
            next.calendar.period = Some(*period);
            next.calendar.loading = true;
            next.calendar.error = None;
            next.calendar.bookings.clear();
            next.calendar.usage.clear();
        }
        Action::BookingsLoaded { request, bookings } => {
            if next.calendar.is_current_request(*request) {
                next.calendar.bookings = bookings.clone();
                next.calendar.loading = false;
            }
        }
        Action::BookingsFailed { request, error } => {
            if next.calendar.is_current_request(*request) {
                next.calendar.error = Some(error.clone());
                next.calendar.loading = false;
            }
        }
        Action::UsageLoaded { request, usage } => {
            if next.calendar.is_current_request(*request) {
                next.calendar.usage = usage.clone();
            }
        }
    }

    next
}

/// Store compartido (clonar = otra referencia al mismo estado)
#[derive(Clone)]
pub struct Store {
    state: ReactiveState<RootState>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(initial: RootState) -> Self {
        Self {
            state: ReactiveState::new(initial),
        }
    }

    /// Copia inmutable del estado actual
    pub fn snapshot(&self) -> RootState {
        self.state.get()
    }

    pub fn with<R>(&self, reader: impl FnOnce(&RootState) -> R) -> R {
        self.state.with(reader)
    }

    pub fn dispatch(&self, action: Action) {
        log::debug!("📨 [STORE] {}", action.name());
        self.state.update(|current| *current = reduce(current, &action));
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }

    /// Ticket para una petición que debe ignorarse si antes llega un logout
    pub fn ticket(&self) -> SessionTicket {
        SessionTicket {
            epoch: self.with(|s| s.session_epoch),
        }
    }

    pub fn is_current(&self, ticket: SessionTicket) -> bool {
        self.with(|s| s.session_epoch) == ticket.epoch
    }

    /// Empieza un intento de login y devuelve su número
    pub fn begin_login_attempt(&self) -> u64 {
        self.dispatch(Action::LoginRequested);
        self.with(|s| s.login.attempt)
    }

    /// `false` si otro intento empezó o un login terminó desde `attempt`
    pub fn is_latest_login_attempt(&self, attempt: u64) -> bool {
        self.with(|s| s.login.attempt) == attempt
    }

    /// Empieza una carga del calendario y devuelve el id de la petición
    pub fn begin_bookings_request(&self, period: BookingPeriod) -> u64 {
        self.dispatch(Action::BookingsRequested { period });
        self.with(|s| s.calendar.request)
    }

    /// Despacha solo si no hubo logout desde que se emitió el ticket
    pub fn dispatch_if_current(&self, ticket: SessionTicket, action: Action) -> bool {
        if self.is_current(ticket) {
            self.dispatch(action);
            true
        } else {
            log::info!("🗑️ [STORE] Respuesta obsoleta descartada: {}", action.name());
            false
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
