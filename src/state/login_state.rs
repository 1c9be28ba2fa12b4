// ============================================================================
// LOGIN STATE - Sesión del usuario en el cliente
// ============================================================================

/// `username` presente ⇔ sesión iniciada
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub username: Option<String>,
    pub has_login_failed: bool,
    /// Sube con cada intento y con cada login exitoso; un fallo solo
    /// cuenta si nada ha pasado desde que empezó su intento
    pub attempt: u64,
}

impl LoginState {
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}
