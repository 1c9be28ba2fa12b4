// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Store (sesión, registro, calendario) + estado de UI que no pasa por el
// reducer: ruta actual, idioma y el guard de setup.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::CONFIG;
use crate::router::{self, Route};
use crate::state::store::Store;
use crate::utils::{load_from_storage, normalize_language, save_to_storage, LANGUAGE_KEY};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub route: Rc<RefCell<Route>>,
    pub language: Rc<RefCell<String>>,
    /// `setup` de LoginLogout ya se ejecutó en esta carga de página
    pub setup_done: Rc<Cell<bool>>,

    // Reactivity: callbacks para cambios de UI fuera del store
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Estado inicial a partir de la URL y las preferencias guardadas
    pub fn new() -> Self {
        let language = load_from_storage(LANGUAGE_KEY)
            .unwrap_or_else(|| CONFIG.default_language.clone());
        Self::from_parts(router::current_route(), &language)
    }

    pub fn from_parts(route: Route, language: &str) -> Self {
        Self {
            store: Store::new(),
            route: Rc::new(RefCell::new(route)),
            language: Rc::new(RefCell::new(normalize_language(language))),
            setup_done: Rc::new(Cell::new(false)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn language(&self) -> String {
        self.language.borrow().clone()
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Establecer language y guardar en localStorage
    pub fn set_language(&self, lang: &str) {
        let lang = normalize_language(lang);
        if let Err(e) = save_to_storage(LANGUAGE_KEY, &lang) {
            log::warn!("⚠️ [APP-STATE] No se pudo guardar el idioma: {}", e);
        }
        *self.language.borrow_mut() = lang;
        self.notify_subscribers();
    }

    /// Navegar: pushState + re-render
    pub fn navigate(&self, route: Route) {
        router::push_route(&route);
        self.set_route(route);
    }

    /// Cambiar la ruta sin tocar la History API (p.ej. en popstate)
    pub fn set_route(&self, route: Route) {
        if *self.route.borrow() == route {
            return;
        }
        *self.route.borrow_mut() = route;
        self.notify_subscribers();
    }

    /// Suscribirse a cambios de estado de UI
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        let subscribers: Vec<_> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouteParams;

    #[test]
    fn language_is_normalized() {
        assert_eq!(AppState::from_parts(Route::parse("/"), "en").language(), "EN");
        assert_eq!(AppState::from_parts(Route::parse("/"), "xx").language(), "DA");
    }

    #[test]
    fn set_route_notifies_only_on_change() {
        let state = AppState::from_parts(Route::Calendar(RouteParams::default()), "DA");
        let calls = Rc::new(Cell::new(0));
        {
            let calls = Rc::clone(&calls);
            state.subscribe_to_changes(move || calls.set(calls.get() + 1));
        }

        state.set_route(Route::parse("/booking/2024/03"));
        state.set_route(Route::parse("/booking/2024/03"));

        assert_eq!(calls.get(), 1);
        assert_eq!(state.current_route(), Route::parse("/booking/2024/03"));
    }

    #[test]
    fn clones_share_the_same_state() {
        let state = AppState::from_parts(Route::parse("/"), "DA");
        let other = state.clone();
        other.setup_done.set(true);
        other.set_route(Route::parse("/nowhere"));

        assert!(state.setup_done.get());
        assert_eq!(state.current_route(), Route::NotFound("/nowhere".to_string()));
    }
}
