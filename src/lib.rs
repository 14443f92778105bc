pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocaleFormatter;
pub use config::{LocaleConfig, LocaleRegistry};
pub use domain::model::{
    DateFormatOptions, DateStyle, DateUnit, NumberFormatOptions, NumberStyle, Optional, Symbol,
    TimeStyle,
};
pub use utils::error::{Result, UtilError};
