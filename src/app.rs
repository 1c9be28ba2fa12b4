// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Dueña del AppState y de los viewmodels concretos del navegador.
// Cualquier cambio (store o UI) programa un re-render completo del árbol.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::containers::{browser_spawner, Spawner};
use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::router;
use crate::services::{ApiClient, LocalStorageTokenStorage};
use crate::state::AppState;
use crate::utils::ROOT_ELEMENT_ID;
use crate::viewmodels::{CalendarViewModel, SessionViewModel};
use crate::views::render_app;

pub type BrowserSession = SessionViewModel<ApiClient, LocalStorageTokenStorage>;
pub type BrowserCalendar = CalendarViewModel<ApiClient, LocalStorageTokenStorage>;

/// Todo lo que necesitan las vistas para renderizar y emitir eventos
#[derive(Clone)]
pub struct AppContext {
    pub state: AppState,
    pub session: BrowserSession,
    pub calendar: BrowserCalendar,
    pub spawner: Spawner,
}

/// Aplicación principal
pub struct App {
    context: AppContext,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let api = Rc::new(ApiClient::new());
        let tokens = Rc::new(LocalStorageTokenStorage);

        let context = AppContext {
            session: SessionViewModel::new(Rc::clone(&api), Rc::clone(&tokens), state.store.clone()),
            calendar: CalendarViewModel::new(api, tokens, state.store.clone()),
            spawner: browser_spawner(),
            state,
        };

        // Un único re-render por tick aunque lleguen varias notificaciones
        let scheduled = Rc::new(Cell::new(false));
        let schedule_render = move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = Rc::clone(&scheduled);
            Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        };
        let schedule_render = Rc::new(schedule_render);
        {
            let schedule_render = Rc::clone(&schedule_render);
            context.state.store.subscribe(move || schedule_render());
        }
        context.state.subscribe_to_changes(move || schedule_render());

        Ok(Self { context, root })
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render()");
        clear_children(&self.root);
        let app_view = render_app(&self.context)?;
        append_child(&self.root, &app_view)
    }

    /// Back/forward del navegador
    pub fn sync_route_with_location(&self) {
        self.context.state.set_route(router::current_route());
    }
}
