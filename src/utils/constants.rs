/// Clave de localStorage con el token de acceso del usuario
pub const ACCESS_TOKEN_KEY: &str = "userAccessToken";

/// Clave de localStorage con el idioma elegido
pub const LANGUAGE_KEY: &str = "language";

/// Id del elemento raíz en index.html
pub const ROOT_ELEMENT_ID: &str = "app";
