mod env_overrides;
mod loader;
mod locale;
mod schema;
#[cfg(test)]
mod test_env;

pub use locale::{DEFAULT_LOCALE, SUPPORTED_LOCALES};
pub use schema::Config;
