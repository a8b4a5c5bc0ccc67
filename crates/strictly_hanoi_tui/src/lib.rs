//! Strictly Hanoi terminal front end
//!
//! Mouse-driven Tower of Hanoi on top of [`strictly_hanoi`].
//!
//! # Architecture
//!
//! - **Config**: TOML configuration for the tower and logging
//! - **TUI**: ratatui screen that turns mouse gestures into pick-up, drag and release
//! - **Demo**: scripted replay of the classic solution through the same validator
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::TowerConfig;
//! use strictly_hanoi_tui::run_demo;
//!
//! let mut out = Vec::new();
//! let outcomes = run_demo(&TowerConfig::of_size(3), false, &mut out)?;
//! assert_eq!(outcomes.len(), 7);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod demo;
pub mod logging;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, LogConfig};
pub use demo::{gesture, run_demo, solution};
