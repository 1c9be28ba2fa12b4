// ============================================================================
// TOKEN STORAGE - Persistencia del token de acceso entre recargas
// ============================================================================

use crate::error::ApiResult;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, ACCESS_TOKEN_KEY};

pub trait TokenStorage {
    fn load_token(&self) -> Option<String>;
    fn save_token(&self, token: &str) -> ApiResult<()>;
    fn clear_token(&self) -> ApiResult<()>;
}

/// Token en `localStorage`
#[derive(Clone, Debug, Default)]
pub struct LocalStorageTokenStorage;

impl TokenStorage for LocalStorageTokenStorage {
    fn load_token(&self) -> Option<String> {
        load_from_storage(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn save_token(&self, token: &str) -> ApiResult<()> {
        save_to_storage(ACCESS_TOKEN_KEY, token)
    }

    fn clear_token(&self) -> ApiResult<()> {
        remove_from_storage(ACCESS_TOKEN_KEY)
    }
}
