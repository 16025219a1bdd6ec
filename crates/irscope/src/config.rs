use serde::Deserialize;

use crate::layout::LayoutMethod;

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Layout configuration section
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Layout strategy used when none is requested explicitly
    #[serde(default)]
    pub method: LayoutMethod,

    /// Seed for every random draw; fresh entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Replace the configured layout method.
    pub fn with_layout_method(mut self, method: LayoutMethod) -> Self {
        self.layout.method = method;
        self
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.layout.seed = Some(seed);
        self
    }
}
