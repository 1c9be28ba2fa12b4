// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Los traits AuthApi / BookingApi son la costura que usan los viewmodels
// (y los fakes de los tests).
// ============================================================================

use chrono::{DateTime, Utc};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::{ApiError, ApiResult};
use crate::models::{Booking, Credentials, CurrentUserResponse, LoginResponse, Usage};

/// Autenticación y cuentas de usuario
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Login con usuario + contraseña: devuelve usuario y token
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;

    /// Alta de una cuenta nueva
    async fn create_user(&self, credentials: &Credentials) -> ApiResult<()>;

    /// Usuario al que pertenece un token guardado
    async fn current_user(&self, token: &str) -> ApiResult<String>;
}

/// Reservas y consumo
#[allow(async_fn_in_trait)]
pub trait BookingApi {
    /// Reservas en `[start, end)`. Con token, las propias llegan con detalle.
    async fn bookings(
        &self,
        token: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<Vec<Booking>>;

    /// Consumo del usuario del token en `[start, end)`
    async fn usage(&self, token: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> ApiResult<Vec<Usage>>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn interval_query(start: DateTime<Utc>, end: DateTime<Utc>) -> [(&'static str, String); 2] {
    [
        ("startTime", start.timestamp_millis().to_string()),
        ("endTime", end.timestamp_millis().to_string()),
    ]
}

/// Error HTTP a partir de una respuesta no exitosa
async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| response.status_text());
    ApiError::from_status(status, body)
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        log::info!("🔐 [API] Login para usuario: {}", credentials.username);

        let response = Request::post(&self.url("/login"))
            .json(credentials)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_json(response).await
    }

    async fn create_user(&self, credentials: &Credentials) -> ApiResult<()> {
        log::info!("👤 [API] Creando usuario: {}", credentials.username);

        let response = Request::post(&self.url("/users"))
            .json(credentials)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(error_from(response).await)
        }
    }

    async fn current_user(&self, token: &str) -> ApiResult<String> {
        let response = Request::get(&self.url("/users/me"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_json::<CurrentUserResponse>(response)
            .await
            .map(|user| user.username)
    }
}

impl BookingApi for ApiClient {
    async fn bookings(
        &self,
        token: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<Vec<Booking>> {
        let mut request = Request::get(&self.url("/bookings")).query(interval_query(start, end));
        if let Some(token) = token {
            request = request.header("Authorization", &bearer(token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let bookings: Vec<Booking> = parse_json(response).await?;
        log::info!("📅 [API] {} reservas entre {} y {}", bookings.len(), start, end);
        Ok(bookings)
    }

    async fn usage(&self, token: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> ApiResult<Vec<Usage>> {
        let response = Request::get(&self.url("/usage"))
            .query(interval_query(start, end))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_json(response).await
    }
}
