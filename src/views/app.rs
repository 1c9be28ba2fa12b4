// ============================================================================
// APP VIEW - Layout: header + vista de la ruta actual
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::containers::{map_dispatch_to_props, map_state_to_props};
use crate::dom::{append_child, ElementBuilder};
use crate::router::{Route, RouteParams};
use crate::views::{render_calendar, render_header, render_login_logout};

pub fn render_app(context: &AppContext) -> Result<Element, JsValue> {
    let state = &context.state;
    let lang = state.language();

    // Contenedor LoginLogout
    let props = state.store.with(map_state_to_props);
    let events = map_dispatch_to_props(&state.store, &context.session, &context.spawner, &state.setup_done);
    let login_logout = render_login_logout(&props, &events, &lang)?;

    let on_home: Rc<dyn Fn()> = {
        let state = state.clone();
        Rc::new(move || state.navigate(Route::Calendar(RouteParams::default())))
    };
    let on_language: Rc<dyn Fn(&str)> = {
        let state = state.clone();
        Rc::new(move |lang: &str| state.set_language(lang))
    };

    let layout = ElementBuilder::new("div")?
        .class("app-layout")
        .child(render_header(&lang, login_logout, on_home, on_language)?)?
        .build();

    match state.current_route() {
        Route::Calendar(params) => {
            let main = ElementBuilder::new("main")?
                .class("app-content")
                .child(render_calendar(context, &params)?)?
                .build();
            append_child(&layout, &main)?;
        }
        Route::NotFound(path) => {
            log::warn!("🧭 [ROUTER] Ruta desconocida: {}", path);
        }
    }

    Ok(layout)
}
