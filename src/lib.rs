//! Menu-driven integer calculator with a per-session operation history.

pub mod calculator;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod menu;
pub mod parser;
pub mod repl;
pub mod util;
