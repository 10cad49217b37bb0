use tracing::warn;

/// Locale used when the requested one has no translations
pub const FALLBACK_LOCALE: &str = "en";

/// Return `locale` if translations exist for it, otherwise the fallback
pub fn resolve_locale(locale: &str) -> &str {
    if rust_i18n::available_locales!().iter().any(|l| *l == locale) {
        locale
    } else {
        warn!("Unknown locale '{}', using '{}'", locale, FALLBACK_LOCALE);
        FALLBACK_LOCALE
    }
}

/// Set the process-wide locale for translated output
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(resolve_locale(locale));
}
