pub mod array;
pub mod date;
pub mod number;
pub mod object;
pub mod predicates;
pub mod string;

pub use crate::domain::model::{DateUnit, NumberFormatOptions};
pub use crate::utils::error::Result;
