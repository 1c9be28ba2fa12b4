// ============================================================================
// LOGIN/LOGOUT VIEW - Función pura de (props, events)
// ============================================================================
// Sin estado propio: el contenido de los campos vive solo en el DOM y se lee
// al enviar el formulario.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::containers::{LoginLogoutEvents, LoginLogoutProps};
use crate::dom::{append_child, input_value, on_click, on_submit, ElementBuilder};
use crate::utils::t;

pub fn render_login_logout(
    props: &LoginLogoutProps,
    events: &LoginLogoutEvents,
    lang: &str,
) -> Result<Element, JsValue> {
    // Montaje: el propio callback ignora las llamadas repetidas
    (events.setup)();

    let wrapper = ElementBuilder::new("div")?
        .class("login-logout")
        .build();

    if props.is_logged_in {
        append_child(&wrapper, &render_logged_in(props, events, lang)?)?;
        return Ok(wrapper);
    }

    append_child(&wrapper, &render_login_form(events, lang)?)?;

    if props.has_login_failed {
        let error = ElementBuilder::new("div")?
            .class("login-error")
            .attr("role", "alert")?
            .text(&t("login_failed", lang))
            .build();
        append_child(&wrapper, &error)?;
    }

    if props.show_create_user_modal {
        append_child(&wrapper, &render_create_user_modal(events, lang)?)?;
    }

    Ok(wrapper)
}

fn render_logged_in(
    props: &LoginLogoutProps,
    events: &LoginLogoutEvents,
    lang: &str,
) -> Result<Element, JsValue> {
    let username = props.username.as_deref().unwrap_or_default();
    let text = ElementBuilder::new("span")?
        .class("navbar-text")
        .text(&format!("{} {}", t("logged_in_as", lang), username))
        .build();

    let logout = ElementBuilder::new("button")?
        .class("btn btn-default")
        .attr("type", "button")?
        .text(&t("logout", lang))
        .build();
    let on_logout = Rc::clone(&events.on_logout);
    on_click(&logout, move |_| on_logout())?;

    ElementBuilder::new("div")?
        .class("logged-in")
        .child(text)?
        .child(logout)
        .map(ElementBuilder::build)
}

fn render_login_form(events: &LoginLogoutEvents, lang: &str) -> Result<Element, JsValue> {
    let form = credentials_form("navbar-form login-form", lang)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(&t("login", lang))
        .build();
    append_child(&form, &submit)?;

    let create_user = ElementBuilder::new("button")?
        .class("btn btn-link")
        .attr("type", "button")?
        .text(&t("create_user", lang))
        .build();
    let on_start = Rc::clone(&events.on_start_create_user_flow);
    on_click(&create_user, move |_| on_start())?;
    append_child(&form, &create_user)?;

    {
        let form_ref = form.clone();
        let on_login = Rc::clone(&events.on_login);
        let on_login_failed = Rc::clone(&events.on_login_failed);
        on_submit(&form, move || {
            let (username, password) = read_credentials(&form_ref);
            if username.is_empty() || password.is_empty() {
                on_login_failed("empty username or password".to_string());
            } else {
                on_login(username, password);
            }
        })?;
    }

    Ok(form)
}

fn render_create_user_modal(events: &LoginLogoutEvents, lang: &str) -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?
        .class("modal create-user-modal")
        .attr("role", "dialog")?
        .build();

    let title = ElementBuilder::new("h4")?
        .class("modal-title")
        .text(&t("create_user_title", lang))
        .build();

    let form = credentials_form("create-user-form", lang)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(&t("create_user", lang))
        .build();
    let cancel = ElementBuilder::new("button")?
        .class("btn btn-default")
        .attr("type", "button")?
        .text(&t("cancel", lang))
        .build();
    let on_end = Rc::clone(&events.on_end_create_user_flow);
    on_click(&cancel, move |_| on_end())?;

    append_child(&form, &submit)?;
    append_child(&form, &cancel)?;

    {
        let form_ref = form.clone();
        let on_create_user = Rc::clone(&events.on_create_user);
        on_submit(&form, move || {
            let (username, password) = read_credentials(&form_ref);
            on_create_user(username, password);
        })?;
    }

    append_child(&modal, &title)?;
    append_child(&modal, &form)?;
    Ok(modal)
}

/// `<form>` con los campos usuario y contraseña
fn credentials_form(class: &str, lang: &str) -> Result<Element, JsValue> {
    let username = ElementBuilder::new("input")?
        .class("form-control")
        .attr("type", "text")?
        .attr("name", "username")?
        .attr("autocomplete", "username")?
        .attr("placeholder", &t("username", lang))?
        .build();

    let password = ElementBuilder::new("input")?
        .class("form-control")
        .attr("type", "password")?
        .attr("name", "password")?
        .attr("placeholder", &t("password", lang))?
        .build();

    ElementBuilder::new("form")?
        .class(class)
        .child(username)?
        .child(password)
        .map(ElementBuilder::build)
}

fn read_credentials(form: &Element) -> (String, String) {
    (
        input_value(form, "input[name=username]").trim().to_string(),
        input_value(form, "input[name=password]"),
    )
}
