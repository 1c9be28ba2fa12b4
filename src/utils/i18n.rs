// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

pub const SUPPORTED_LANGUAGES: &[&str] = &["DA", "EN"];

/// Obtener diccionario de traducciones para un idioma (DA por defecto)
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang.to_uppercase().as_str() {
        "EN" => {
            // Header
            translations.insert("frontpage_title", "Washing machine booking");
            translations.insert("language", "Language");

            // Login / logout
            translations.insert("username", "Username");
            translations.insert("password", "Password");
            translations.insert("login", "Log in");
            translations.insert("logout", "Log out");
            translations.insert("logged_in_as", "Logged in as");
            translations.insert("login_failed", "Wrong username or password");
            translations.insert("create_user", "Create user");
            translations.insert("create_user_title", "New user");
            translations.insert("cancel", "Cancel");

            // Calendar
            translations.insert("previous_month", "‹ Previous");
            translations.insert("next_month", "Next ›");
            translations.insert("loading_bookings", "Loading bookings...");
            translations.insert("bookings_error", "Could not load bookings");
            translations.insert("usage_title", "Your usage this month");
            translations.insert("washing_machine_uses", "Washing machine");
            translations.insert("tumble_dry_uses", "Tumble dryer");

            translations.insert("month_1", "January");
            translations.insert("month_2", "February");
            translations.insert("month_3", "March");
            translations.insert("month_4", "April");
            translations.insert("month_5", "May");
            translations.insert("month_6", "June");
            translations.insert("month_7", "July");
            translations.insert("month_8", "August");
            translations.insert("month_9", "September");
            translations.insert("month_10", "October");
            translations.insert("month_11", "November");
            translations.insert("month_12", "December");

            translations.insert("weekday_0", "Mon");
            translations.insert("weekday_1", "Tue");
            translations.insert("weekday_2", "Wed");
            translations.insert("weekday_3", "Thu");
            translations.insert("weekday_4", "Fri");
            translations.insert("weekday_5", "Sat");
            translations.insert("weekday_6", "Sun");
        }
        _ => {
            // Header
            translations.insert("frontpage_title", "Vaskemaskine booking");
            translations.insert("language", "Sprog");

            // Login / logout
            translations.insert("username", "Brugernavn");
            translations.insert("password", "Adgangskode");
            translations.insert("login", "Log ind");
            translations.insert("logout", "Log ud");
            translations.insert("logged_in_as", "Logget ind som");
            translations.insert("login_failed", "Forkert brugernavn eller adgangskode");
            translations.insert("create_user", "Opret bruger");
            translations.insert("create_user_title", "Ny bruger");
            translations.insert("cancel", "Annuller");

            // Calendar
            translations.insert("previous_month", "‹ Forrige");
            translations.insert("next_month", "Næste ›");
            translations.insert("loading_bookings", "Henter bookinger...");
            translations.insert("bookings_error", "Kunne ikke hente bookinger");
            translations.insert("usage_title", "Dit forbrug denne måned");
            translations.insert("washing_machine_uses", "Vaskemaskine");
            translations.insert("tumble_dry_uses", "Tørretumbler");

            translations.insert("month_1", "Januar");
            translations.insert("month_2", "Februar");
            translations.insert("month_3", "Marts");
            translations.insert("month_4", "April");
            translations.insert("month_5", "Maj");
            translations.insert("month_6", "Juni");
            translations.insert("month_7", "Juli");
            translations.insert("month_8", "August");
            translations.insert("month_9", "September");
            translations.insert("month_10", "Oktober");
            translations.insert("month_11", "November");
            translations.insert("month_12", "December");

            translations.insert("weekday_0", "Man");
            translations.insert("weekday_1", "Tir");
            translations.insert("weekday_2", "Ons");
            translations.insert("weekday_3", "Tor");
            translations.insert("weekday_4", "Fre");
            translations.insert("weekday_5", "Lør");
            translations.insert("weekday_6", "Søn");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("DA" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Normaliza un código de idioma; los no soportados pasan a DA
pub fn normalize_language(lang: &str) -> String {
    let upper = lang.trim().to_uppercase();
    if SUPPORTED_LANGUAGES.contains(&upper.as_str()) {
        upper
    } else {
        "DA".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys_case_insensitively() {
        assert_eq!(t("frontpage_title", "da"), "Vaskemaskine booking");
        assert_eq!(t("frontpage_title", "EN"), "Washing machine booking");
        assert_eq!(t("month_3", "da"), "Marts");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("does_not_exist", "EN"), "does_not_exist");
    }

    #[test]
    fn both_tables_have_the_same_keys() {
        let mut da: Vec<_> = get_translations("DA").into_keys().collect();
        let mut en: Vec<_> = get_translations("EN").into_keys().collect();
        da.sort_unstable();
        en.sort_unstable();
        assert_eq!(da, en);
    }

    #[test]
    fn unsupported_languages_normalize_to_danish() {
        assert_eq!(normalize_language(" en "), "EN");
        assert_eq!(normalize_language("fr"), "DA");
    }
}
