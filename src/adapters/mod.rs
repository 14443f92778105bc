// Adapters layer: concrete implementations of the domain ports.

pub mod locale_formatter;

pub use locale_formatter::LocaleFormatter;
