//! Fakes en memoria del backend y del almacenamiento del token.

use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::error::{ApiError, ApiResult};
use crate::models::{Booking, Credentials, LoginResponse, Usage};
use crate::services::{AuthApi, BookingApi, TokenStorage};

type Hook = Box<dyn Fn()>;

#[derive(Default)]
pub struct FakeApi {
    pub login_results: RefCell<VecDeque<ApiResult<LoginResponse>>>,
    pub create_user_results: RefCell<VecDeque<ApiResult<()>>>,
    pub current_user_results: RefCell<VecDeque<ApiResult<String>>>,
    pub booking_results: RefCell<VecDeque<ApiResult<Vec<Booking>>>>,
    pub usage_results: RefCell<VecDeque<ApiResult<Vec<Usage>>>>,
    /// Se ejecuta mientras la petición está "en vuelo"
    pub during_call: RefCell<Option<Hook>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_ok(self, username: &str, token: &str) -> Self {
        self.login_results.borrow_mut().push_back(Ok(LoginResponse {
            username: username.to_string(),
            token: token.to_string(),
        }));
        self
    }

    pub fn login_err(self, error: ApiError) -> Self {
        self.login_results.borrow_mut().push_back(Err(error));
        self
    }

    pub fn current_user(self, result: ApiResult<String>) -> Self {
        self.current_user_results.borrow_mut().push_back(result);
        self
    }

    pub fn create_user(self, result: ApiResult<()>) -> Self {
        self.create_user_results.borrow_mut().push_back(result);
        self
    }

    pub fn bookings(self, result: ApiResult<Vec<Booking>>) -> Self {
        self.booking_results.borrow_mut().push_back(result);
        self
    }

    pub fn usage(self, result: ApiResult<Vec<Usage>>) -> Self {
        self.usage_results.borrow_mut().push_back(result);
        self
    }

    pub fn while_in_flight(self, hook: impl Fn() + 'static) -> Self {
        *self.during_call.borrow_mut() = Some(Box::new(hook));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
        if let Some(hook) = self.during_call.borrow().as_ref() {
            hook();
        }
    }

    fn next<T>(queue: &RefCell<VecDeque<ApiResult<T>>>) -> ApiResult<T> {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        self.record(format!("login:{}", credentials.username));
        Self::next(&self.login_results)
    }

    async fn create_user(&self, credentials: &Credentials) -> ApiResult<()> {
        self.record(format!("create_user:{}", credentials.username));
        Self::next(&self.create_user_results)
    }

    async fn current_user(&self, token: &str) -> ApiResult<String> {
        self.record(format!("current_user:{}", token));
        Self::next(&self.current_user_results)
    }
}

impl BookingApi for FakeApi {
    async fn bookings(
        &self,
        token: Option<&str>,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> ApiResult<Vec<Booking>> {
        self.record(format!("bookings:{}", token.unwrap_or("-")));
        Self::next(&self.booking_results)
    }

    async fn usage(&self, token: &str, _start: DateTime<Utc>, _end: DateTime<Utc>) -> ApiResult<Vec<Usage>> {
        self.record(format!("usage:{}", token));
        Self::next(&self.usage_results)
    }
}

#[derive(Default)]
pub struct MemoryTokenStorage {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save_token(&self, token: &str) -> ApiResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> ApiResult<()> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}
