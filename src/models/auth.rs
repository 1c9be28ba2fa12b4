use serde::{Deserialize, Serialize};

/// Cuerpo de `POST /login` y `POST /users`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// La contraseña nunca debe acabar en los logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Respuesta de `POST /login`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub token: String,
}

/// Respuesta de `GET /users/me`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let credentials = Credentials::new("anna", "hunter2");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("anna"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn login_response_parses_backend_json() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"username":"anna","token":"abc123"}"#).unwrap();
        assert_eq!(response.username, "anna");
        assert_eq!(response.token, "abc123");
    }
}
