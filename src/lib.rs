pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{Settings, Strategy, TomlConfig};

pub use core::adder::{add, RomanAdder};
pub use domain::model::{Symbol, SYMBOL_ORDER};
pub use utils::error::{Result, RomanError};
