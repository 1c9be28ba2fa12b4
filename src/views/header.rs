// ============================================================================
// HEADER VIEW - Barra de navegación fija (sin estado propio)
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::utils::{t, SUPPORTED_LANGUAGES};

/// Renderizar header: marca + contenedor de login + selector de idioma
pub fn render_header(
    lang: &str,
    login_logout: Element,
    on_home: Rc<dyn Fn()>,
    on_language: Rc<dyn Fn(&str)>,
) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?
        .class("navbar navbar-fixed-top")
        .build();

    let container = ElementBuilder::new("div")?
        .class("container")
        .build();

    let brand = ElementBuilder::new("a")?
        .class("navbar-brand")
        .attr("href", "/")?
        .text(&t("frontpage_title", lang))
        .build();
    on_click(&brand, move |e| {
        e.prevent_default();
        on_home();
    })?;

    append_child(&container, &brand)?;
    append_child(&container, &login_logout)?;
    append_child(&container, &render_language_toggle(lang, on_language)?)?;
    append_child(&nav, &container)?;

    Ok(nav)
}

fn render_language_toggle(lang: &str, on_language: Rc<dyn Fn(&str)>) -> Result<Element, JsValue> {
    let toggle = ElementBuilder::new("div")?
        .class("language-toggle")
        .attr("title", &t("language", lang))?
        .build();

    for &code in SUPPORTED_LANGUAGES {
        let button = ElementBuilder::new("button")?
            .class("toggle-btn")
            .class_if("active", code == lang)?
            .attr("type", "button")?
            .text(code)
            .build();

        let on_language = Rc::clone(&on_language);
        on_click(&button, move |_| on_language(code))?;
        append_child(&toggle, &button)?;
    }

    Ok(toggle)
}
