// ============================================================================
// VASKEMASKINE BOOKING - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM a partir de props (sin lógica)
// - Containers: store -> props / callbacks
// - ViewModels: efectos asíncronos (login, restore, createUser, reservas)
// - Services: SOLO comunicación API + persistencia del token
// - State: store con reducer puro + Rc<RefCell> + notificaciones
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod config;
mod containers;
mod dom;
mod error;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la App
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Vaskemaskine booking ({}) - backend {}", CONFIG.environment, CONFIG.backend_url());

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Back/forward del navegador. Se registra una sola vez aquí.
    dom::on_window_event("popstate", |_| {
        APP.with(|app_cell| {
            if let Some(app) = app_cell.borrow().as_ref() {
                app.sync_route_with_location();
            }
        });
    })?;

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}
