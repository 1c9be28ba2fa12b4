use crate::error::ApiError;
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage(key: &str, value: &str) -> Result<(), ApiError> {
    let storage = get_local_storage()
        .ok_or_else(|| ApiError::Storage("localStorage no disponible".to_string()))?;
    storage
        .set_item(key, value)
        .map_err(|_| ApiError::Storage(format!("no se pudo guardar '{}'", key)))
}

pub fn load_from_storage(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), ApiError> {
    let storage = get_local_storage()
        .ok_or_else(|| ApiError::Storage("localStorage no disponible".to_string()))?;
    storage
        .remove_item(key)
        .map_err(|_| ApiError::Storage(format!("no se pudo eliminar '{}'", key)))
}
