// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Parte asíncrona de login / logout / createUser / restore.
// Llama al backend y despacha la acción resultante en el store.
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::Credentials;
use crate::services::{AuthApi, TokenStorage};
use crate::state::{Action, Store};

pub struct SessionViewModel<A, T> {
    api: Rc<A>,
    tokens: Rc<T>,
    store: Store,
}

impl<A, T> Clone for SessionViewModel<A, T> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            tokens: Rc::clone(&self.tokens),
            store: self.store.clone(),
        }
    }
}

impl<A: AuthApi, T: TokenStorage> SessionViewModel<A, T> {
    pub fn new(api: Rc<A>, tokens: Rc<T>, store: Store) -> Self {
        Self { api, tokens, store }
    }

    /// login(username, password)
    pub async fn login(&self, username: String, password: String) {
        let ticket = self.store.ticket();
        let attempt = self.store.begin_login_attempt();
        let credentials = Credentials::new(username, password);

        match self.api.login(&credentials).await {
            Ok(response) => {
                if !self.store.is_current(ticket) {
                    log::info!("🗑️ [SESSION] Login de {} completado después de un logout, se ignora", response.username);
                    return;
                }
                if let Err(e) = self.tokens.save_token(&response.token) {
                    log::warn!("⚠️ [SESSION] No se pudo guardar el token: {}", e);
                }
                log::info!("✅ [SESSION] Login exitoso: {}", response.username);
                self.store.dispatch(Action::LoginSucceeded {
                    username: response.username,
                });
            }
            Err(error) => {
                log::warn!("❌ [SESSION] Login fallido para {}: {}", credentials.username, error);
                if !self.store.is_latest_login_attempt(attempt) {
                    log::info!("🗑️ [SESSION] Fallo de un intento de login ya superado, se ignora");
                    return;
                }
                self.store
                    .dispatch_if_current(ticket, Action::LoginFailed { error: error.to_string() });
            }
        }
    }

    /// logout(): borra el token y limpia la sesión
    pub fn logout(&self) {
        log::info!("👋 [SESSION] Logout");
        if let Err(e) = self.tokens.clear_token() {
            log::warn!("⚠️ [SESSION] No se pudo borrar el token: {}", e);
        }
        self.store.dispatch(Action::Logout);
    }

    /// fetchUsernameIfUserAccessTokenIsPresent()
    pub async fn fetch_username_if_token_present(&self) {
        let Some(token) = self.tokens.load_token() else {
            log::debug!("🔍 [SESSION] Sin token guardado, no hay sesión que restaurar");
            return;
        };

        let ticket = self.store.ticket();
        let result = self.api.current_user(&token).await;

        // Si entretanto hubo otro login o un logout, el token ya no es el mismo
        let token_unchanged = self.tokens.load_token().as_deref() == Some(token.as_str());

        match result {
            Ok(username) if token_unchanged => {
                log::info!("💾 [SESSION] Sesión restaurada para {}", username);
                self.store
                    .dispatch_if_current(ticket, Action::SessionRestored { username });
            }
            Ok(username) => {
                log::info!("🗑️ [SESSION] Restauración de {} obsoleta, se ignora", username);
            }
            Err(ApiError::Unauthorized) => {
                log::warn!("⚠️ [SESSION] Token guardado rechazado por el backend");
                if token_unchanged {
                    if let Err(e) = self.tokens.clear_token() {
                        log::warn!("⚠️ [SESSION] No se pudo borrar el token: {}", e);
                    }
                }
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] No se pudo restaurar la sesión: {}", e);
            }
        }
    }

    /// createUser(username, password)
    ///
    /// El modal se cierra al invocar, antes de que el future se ejecute;
    /// el future devuelto solo hace la llamada al backend.
    pub fn create_user(&self, username: String, password: String) -> impl Future<Output = ()> + 'static
    where
        A: 'static,
        T: 'static,
    {
        self.store.dispatch(Action::CreateUserRequested {
            username: username.clone(),
        });

        let api = Rc::clone(&self.api);
        let credentials = Credentials::new(username, password);
        async move {
            match api.create_user(&credentials).await {
                Ok(()) => log::info!("✅ [SESSION] Usuario {} creado", credentials.username),
                Err(e) => log::error!("❌ [SESSION] Error creando usuario: {}", e),
            }
        }
    }
}
