use super::Config;

pub const SUPPORTED_LOCALES: [&str; 2] = ["es", "en"];
pub const DEFAULT_LOCALE: &str = "es";

fn detect_system_locale() -> Option<String> {
    std::env::var("LANG")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .ok()
        .map(|lang| lang.trim().to_lowercase())
        .filter(|lang| !lang.is_empty() && lang != "c" && lang != "posix")
}

/// Detect locale: `INSIGHT_LANG` env -> config value -> system `LANG` -> `"es"`.
fn detect_locale(config_locale: Option<&str>) -> String {
    if let Ok(lang) = std::env::var("INSIGHT_LANG") {
        let lang = lang.trim().to_lowercase();
        if !lang.is_empty() {
            return supported_or_default(&normalise_locale(&lang));
        }
    }

    if let Some(locale) = config_locale.map(str::trim).filter(|l| !l.is_empty()) {
        return supported_or_default(&normalise_locale(&locale.to_lowercase()));
    }

    if let Some(system_locale) = detect_system_locale() {
        return supported_or_default(&normalise_locale(&system_locale));
    }

    DEFAULT_LOCALE.into()
}

/// Normalise `"es_ES.UTF-8"` -> `"es"`, `"en_US"` -> `"en"`, passthrough `"es"`.
fn normalise_locale(raw: &str) -> String {
    let base = raw.split('.').next().unwrap_or(raw);
    let lang = base.split(['_', '-']).next().unwrap_or(base);
    lang.to_string()
}

fn supported_or_default(locale: &str) -> String {
    if SUPPORTED_LOCALES.contains(&locale) {
        locale.to_string()
    } else {
        DEFAULT_LOCALE.to_string()
    }
}

impl Config {
    /// Locale every catalog lookup of this run uses.
    pub fn effective_locale(&self) -> String {
        detect_locale(self.locale.as_deref())
    }
}
