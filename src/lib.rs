// Tab Session Library Entry Point
// This file exposes all modules so they can be imported by main.rs
// and tested independently.

pub mod error;
pub mod settings;

// Shared state
pub mod state;

// Pure logic modules
pub mod modules;

pub use error::{Error, Result};
pub use modules::manager::TabsSessionManager;
pub use state::{SessionState, Tab};

use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs the terminal logger. Safe to call more than once; later calls are ignored.
pub fn init_logging(level: log::LevelFilter) {
    let config = ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();

    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        log::debug!("logger already installed");
    }
}
