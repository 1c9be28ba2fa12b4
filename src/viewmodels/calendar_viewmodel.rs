// ============================================================================
// CALENDAR VIEWMODEL - Carga de reservas y consumo por periodo
// ============================================================================

use std::rc::Rc;

use crate::models::BookingPeriod;
use crate::services::{BookingApi, TokenStorage};
use crate::state::{Action, Store};

pub struct CalendarViewModel<B, T> {
    api: Rc<B>,
    tokens: Rc<T>,
    store: Store,
}

impl<B, T> Clone for CalendarViewModel<B, T> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            tokens: Rc::clone(&self.tokens),
            store: self.store.clone(),
        }
    }
}

impl<B: BookingApi, T: TokenStorage> CalendarViewModel<B, T> {
    pub fn new(api: Rc<B>, tokens: Rc<T>, store: Store) -> Self {
        Self { api, tokens, store }
    }

    /// Pide las reservas del periodo y, con sesión, el consumo del usuario.
    pub async fn load_period(&self, period: BookingPeriod) {
        let ticket = self.store.ticket();
        let request = self.store.begin_bookings_request(period);

        let (start, end) = period.interval();
        let logged_in = self.store.with(|s| s.login.is_logged_in());
        let token = if logged_in { self.tokens.load_token() } else { None };

        log::info!(
            "📅 [CALENDAR] Cargando {}-{:02} ({})",
            period.year(),
            period.month(),
            if token.is_some() { "con sesión" } else { "anónimo" }
        );

        match self.api.bookings(token.as_deref(), start, end).await {
            Ok(bookings) => {
                self.store
                    .dispatch_if_current(ticket, Action::BookingsLoaded { request, bookings });
            }
            Err(e) => {
                log::error!("❌ [CALENDAR] Error cargando reservas: {}", e);
                self.store.dispatch_if_current(
                    ticket,
                    Action::BookingsFailed {
                        request,
                        error: e.to_string(),
                    },
                );
                return;
            }
        }

        let Some(token) = token else {
            return;
        };

        match self.api.usage(&token, start, end).await {
            Ok(usage) => {
                self.store
                    .dispatch_if_current(ticket, Action::UsageLoaded { request, usage });
            }
            Err(e) => log::warn!("⚠️ [CALENDAR] No se pudo cargar el consumo: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Booking, Usage};
    use crate::viewmodels::testing::{FakeApi, MemoryTokenStorage};
    use chrono::{TimeZone, Utc};

    fn march() -> BookingPeriod {
        BookingPeriod::new(2024, 3).unwrap()
    }

    fn booking(id: i64, owner: &str) -> Booking {
        Booking {
            id,
            start_time: Utc.with_ymd_and_hms(2024, 3, 12, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 3, 12, 12, 0, 0).unwrap(),
            owner: owner.to_string(),
            number_of_washing_machine_uses: 0,
            number_of_tumble_dry_uses: 0,
        }
    }

    fn usage() -> Usage {
        Usage {
            month: "Mar".to_string(),
            year: 2024,
            sum_of_washing_machine_uses: 4,
            sum_of_tumble_dry_uses: 2,
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn anonymous_load_fetches_bookings_without_token_or_usage() {
        let store = Store::new();
        let api = Rc::new(FakeApi::new().bookings(Ok(vec![booking(1, "")])));
        // Token residual sin sesión en el store: no se envía
        let vm = CalendarViewModel::new(Rc::clone(&api), Rc::new(MemoryTokenStorage::with_token("tok")), store.clone());

        vm.load_period(march()).await;

        let calendar = store.snapshot().calendar;
        assert!(calendar.is_showing(march()));
        assert!(!calendar.loading);
        assert_eq!(calendar.bookings.len(), 1);
        assert!(calendar.usage.is_empty());
        assert_eq!(api.calls(), vec!["bookings:-"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn logged_in_load_sends_token_and_fetches_usage() {
        let store = Store::new();
        store.dispatch(Action::LoginSucceeded {
            username: "anna".to_string(),
        });
        let api = Rc::new(
            FakeApi::new()
                .bookings(Ok(vec![booking(1, "anna"), booking(2, "")]))
                .usage(Ok(vec![usage()])),
        );
        let vm = CalendarViewModel::new(Rc::clone(&api), Rc::new(MemoryTokenStorage::with_token("tok")), store.clone());

        vm.load_period(march()).await;

        let calendar = store.snapshot().calendar;
        assert_eq!(calendar.bookings.len(), 2);
        assert_eq!(calendar.usage, vec![usage()]);
        assert_eq!(api.calls(), vec!["bookings:tok", "usage:tok"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_load_records_error() {
        let store = Store::new();
        let api = Rc::new(FakeApi::new().bookings(Err(ApiError::from_status(500, "boom"))));
        let vm = CalendarViewModel::new(api, Rc::new(MemoryTokenStorage::default()), store.clone());

        vm.load_period(march()).await;

        let calendar = store.snapshot().calendar;
        assert!(!calendar.loading);
        assert!(calendar.error.is_some());
        assert!(calendar.bookings.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn usage_failure_keeps_bookings() {
        let store = Store::new();
        store.dispatch(Action::LoginSucceeded {
            username: "anna".to_string(),
        });
        let api = Rc::new(
            FakeApi::new()
                .bookings(Ok(vec![booking(1, "anna")]))
                .usage(Err(ApiError::Network("offline".to_string()))),
        );
        let vm = CalendarViewModel::new(api, Rc::new(MemoryTokenStorage::with_token("tok")), store.clone());

        vm.load_period(march()).await;

        let calendar = store.snapshot().calendar;
        assert_eq!(calendar.bookings.len(), 1);
        assert!(calendar.usage.is_empty());
        assert_eq!(calendar.error, None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn load_superseded_by_a_newer_request_is_discarded() {
        // Mientras la carga anónima está en vuelo, un login dispara otra carga
        let store = Store::new();
        let newer_store = store.clone();
        let api = Rc::new(
            FakeApi::new()
                .bookings(Ok(vec![booking(1, "")]))
                .while_in_flight(move || {
                    newer_store.dispatch(Action::LoginSucceeded {
                        username: "anna".to_string(),
                    });
                    newer_store.dispatch(Action::BookingsRequested { period: march() });
                }),
        );
        let vm = CalendarViewModel::new(api, Rc::new(MemoryTokenStorage::default()), store.clone());

        vm.load_period(march()).await;

        let calendar = store.snapshot().calendar;
        assert!(calendar.is_showing(march()));
        assert!(calendar.loading);
        assert!(calendar.bookings.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn bookings_arriving_after_logout_are_discarded() {
        let store = Store::new();
        store.dispatch(Action::LoginSucceeded {
            username: "anna".to_string(),
        });
        let logout_store = store.clone();
        let api = Rc::new(
            FakeApi::new()
                .bookings(Ok(vec![booking(1, "anna")]))
                .while_in_flight(move || logout_store.dispatch(Action::Logout)),
        );
        let vm = CalendarViewModel::new(Rc::clone(&api), Rc::new(MemoryTokenStorage::with_token("tok")), store.clone());

        vm.load_period(march()).await;

        let calendar = store.snapshot().calendar;
        assert_eq!(calendar.period, None);
        assert!(calendar.bookings.is_empty());
        // La carga del consumo sigue su curso pero su resultado se descarta
        assert!(calendar.usage.is_empty());
    }
}
