// ============================================================================
// ROUTER - Árbol de rutas: "/" y "/booking/:year/:month"
// ============================================================================
// No hay guards ni redirects: los segmentos se pasan crudos al calendario,
// que es quien decide qué hacer con valores inválidos.
// ============================================================================

use crate::models::BookingPeriod;

/// Segmentos opcionales de la ruta del calendario
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Header + calendario (por defecto o con periodo explícito)
    Calendar(RouteParams),
    /// Ruta desconocida: solo se renderiza el header
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Calendar(RouteParams::default()),
            ["booking", year, month] => Route::Calendar(RouteParams {
                year: Some((*year).to_string()),
                month: Some((*month).to_string()),
            }),
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Ruta explícita para un periodo
    pub fn booking(period: BookingPeriod) -> Self {
        Route::Calendar(RouteParams {
            year: Some(period.year().to_string()),
            month: Some(format!("{:02}", period.month())),
        })
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Calendar(RouteParams {
                year: Some(year),
                month: Some(month),
            }) => format!("/booking/{}/{}", year, month),
            Route::Calendar(_) => "/".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

/// Ruta actual según `window.location`
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::parse(&path)
}

/// Navega con la History API (sin recargar la página)
pub fn push_route(route: &Route) {
    let path = route.to_path();
    let pushed = web_sys::window()
        .and_then(|w| w.history().ok())
        .map(|history| history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)));

    match pushed {
        Some(Ok(())) => log::debug!("🧭 [ROUTER] Navegando a {}", path),
        _ => log::warn!("⚠️ [ROUTER] No se pudo navegar a {}", path),
    }
}
