pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod parse;
pub mod scan;
pub mod suffix;

pub use config::{Config, ParseMode};
pub use convert::convert;
pub use error::{ConvError, UsageError};
pub use parse::{parse_float, parse_integer};
