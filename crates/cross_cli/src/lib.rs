//! Terminal front end for the cross engine.
//!
//! - **cli**: argument parsing
//! - **config**: TOML settings
//! - **play**: the interactive game loop
//! - **scores**: score listings for a replayed position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;
mod scores;

pub use cli::{Cli, Command};
pub use config::{ConfigError, CrossConfig};
pub use play::run_game;
pub use scores::{render_candidates, replay, score_report};
