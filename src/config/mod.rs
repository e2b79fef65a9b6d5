#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule set collapses the ordered sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Carry to a fixed point, then introduce subtractive pairs.
    #[default]
    Convergent,
    /// One pass of the collapse chain plus the exact-match corrections.
    SinglePass,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Convergent => write!(f, "convergent"),
            Strategy::SinglePass => write!(f, "single-pass"),
        }
    }
}

/// Effective settings after layering CLI flags over the optional TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub strategy: Strategy,
    pub verify: bool,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Settings {
    /// 命令列參數優先於設定檔
    pub fn resolve(
        strategy: Option<Strategy>,
        verify: bool,
        file: Option<&TomlConfig>,
    ) -> Self {
        let mut settings = file.map(TomlConfig::settings).unwrap_or_default();
        if let Some(strategy) = strategy {
            settings.strategy = strategy;
        }
        settings.verify |= verify;
        settings
    }
}

impl ConfigProvider for Settings {
    fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn verify(&self) -> bool {
        self.verify
    }
}
