// ============================================================================
// CALENDAR VIEW - Mes de reservas
// ============================================================================
// Resuelve el periodo a partir de los segmentos de la ruta y, si el store no
// tiene datos para ese periodo, lanza la carga.
// ============================================================================

use chrono::{Datelike, NaiveDate, Utc};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::booking::total_usage;
use crate::models::period::{is_weekend, Week};
use crate::models::BookingPeriod;
use crate::router::{Route, RouteParams};
use crate::state::CalendarState;
use crate::utils::t;

pub fn render_calendar(context: &AppContext, params: &RouteParams) -> Result<Element, JsValue> {
    let today = Utc::now().date_naive();
    let period = BookingPeriod::from_segments(params.year.as_deref(), params.month.as_deref(), today);
    let lang = context.state.language();
    let (calendar, username) = context
        .state
        .store
        .with(|s| (s.calendar.clone(), s.login.username.clone()));

    if !calendar.is_showing(period) {
        let vm = context.calendar.clone();
        (context.spawner)(Box::pin(async move { vm.load_period(period).await }));
    }

    let section = ElementBuilder::new("section")?
        .class("calendar container")
        .build();

    append_child(&section, &render_navigation(context, period, &lang)?)?;

    if calendar.loading {
        let loading = ElementBuilder::new("p")?
            .class("calendar-loading")
            .text(&t("loading_bookings", &lang))
            .build();
        append_child(&section, &loading)?;
    }
    if calendar.error.is_some() {
        let error = ElementBuilder::new("p")?
            .class("calendar-error")
            .text(&t("bookings_error", &lang))
            .build();
        append_child(&section, &error)?;
    }

    append_child(&section, &render_grid(period, &calendar, username.as_deref(), &lang)?)?;

    if username.is_some() {
        append_child(&section, &render_usage(&calendar, &lang)?)?;
    }

    Ok(section)
}

fn render_navigation(context: &AppContext, period: BookingPeriod, lang: &str) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("div")?
        .class("calendar-nav")
        .build();

    let title = ElementBuilder::new("h2")?
        .class("calendar-title")
        .text(&format!("{} {}", t(&format!("month_{}", period.month()), lang), period.year()))
        .build();

    // En los extremos del rango de fechas no hay enlace
    if let Some(previous) = period.previous() {
        append_child(&nav, &period_link(context, previous, &t("previous_month", lang))?)?;
    }
    append_child(&nav, &title)?;
    if let Some(next) = period.next() {
        append_child(&nav, &period_link(context, next, &t("next_month", lang))?)?;
    }
    Ok(nav)
}

/// `<a href="/booking/:year/:month">` que navega sin recargar
fn period_link(context: &AppContext, target: BookingPeriod, label: &str) -> Result<Element, JsValue> {
    let route = Route::booking(target);
    let link = ElementBuilder::new("a")?
        .class("calendar-link")
        .attr("href", &route.to_path())?
        .text(label)
        .build();

    let state = context.state.clone();
    on_click(&link, move |e| {
        e.prevent_default();
        state.navigate(route.clone());
    })?;
    Ok(link)
}

fn render_grid(
    period: BookingPeriod,
    calendar: &CalendarState,
    username: Option<&str>,
    lang: &str,
) -> Result<Element, JsValue> {
    let table = ElementBuilder::new("table")?
        .class("calendar-grid")
        .build();

    let head = ElementBuilder::new("tr")?.build();
    for weekday in 0..7 {
        let th = ElementBuilder::new("th")?
            .text(&t(&format!("weekday_{}", weekday), lang))
            .build();
        append_child(&head, &th)?;
    }
    append_child(&table, &head)?;

    for week in period.month_grid() {
        append_child(&table, &render_week(&week, calendar, username)?)?;
    }

    Ok(table)
}

fn render_week(week: &Week, calendar: &CalendarState, username: Option<&str>) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();

    for day in week {
        let cell = match day {
            None => ElementBuilder::new("td")?.class("day other-month").build(),
            Some(date) => {
                let count = calendar.bookings_on(*date);
                let cell = ElementBuilder::new("td")?
                    .class("day")
                    .class_if("weekend", is_weekend(*date))?
                    .class_if("has-bookings", count > 0)?
                    .class_if("own-booking", has_own_booking(calendar, *date, username))?
                    .child(ElementBuilder::new("span")?.class("day-number").text(&date.day().to_string()).build())?
                    .build();
                if count > 0 {
                    let badge = ElementBuilder::new("span")?
                        .class("booking-count")
                        .text(&count.to_string())
                        .build();
                    append_child(&cell, &badge)?;
                }
                cell
            }
        };
        append_child(&row, &cell)?;
    }

    Ok(row)
}

fn has_own_booking(calendar: &CalendarState, date: NaiveDate, username: Option<&str>) -> bool {
    username.is_some_and(|user| calendar.has_own_booking_on(date, user))
}

fn render_usage(calendar: &CalendarState, lang: &str) -> Result<Element, JsValue> {
    let (washing, drying) = total_usage(&calendar.usage);

    let usage = ElementBuilder::new("div")?
        .class("usage")
        .child(ElementBuilder::new("h3")?.text(&t("usage_title", lang)).build())?
        .build();

    for (key, value) in [("washing_machine_uses", washing), ("tumble_dry_uses", drying)] {
        let line = ElementBuilder::new("p")?
            .text(&format!("{}: {}", t(key, lang), value))
            .build();
        append_child(&usage, &line)?;
    }

    Ok(usage)
}
