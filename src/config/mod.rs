pub mod locale;

pub use locale::{DatePatterns, LocaleConfig, LocaleRegistry, DEFAULT_LOCALE_ID};
