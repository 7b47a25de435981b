// config.rs

use rustyline::{CompletionType, Config};

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub completion_type: CompletionType,
    /// Lines kept for arrow-up recall. Never written to disk.
    pub max_history_size: usize,
    pub ignore_duplicate_lines: bool,
    pub show_menu_each_time: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            completion_type: CompletionType::List,
            max_history_size: 100,
            ignore_duplicate_lines: true,
            show_menu_each_time: true,
        }
    }
}

impl ShellConfig {
    pub fn editor_config(&self) -> rustyline::Result<Config> {
        Ok(Config::builder()
            .completion_type(self.completion_type)
            .max_history_size(self.max_history_size)?
            .history_ignore_dups(self.ignore_duplicate_lines)?
            .auto_add_history(false)
            .build())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
}

impl LogConfig {
    pub const DEFAULT_FILTER: &'static str = "warn";

    pub fn from_env() -> Self {
        Self::from_value(std::env::var("RUST_LOG").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let filter = value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_FILTER.to_string());
        Self { filter }
    }
}
