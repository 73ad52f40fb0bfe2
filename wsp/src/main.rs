// External crates
use clap::Parser;
use tracing::{debug, info_span};
use uuid::Uuid;

// Local modules
mod cli;
mod commands;
mod error;

use cli::Args;
use commands::execute_command;

fn main() {
    let args = Args::parse();

    // Held until exit so buffered file logs are flushed
    let log_settings = wsp_logging::LogSettings::from_env(
        args.verbose,
        wsp_core::user_paths::default_log_path(),
    );
    let _log_guard = wsp_logging::init_subscriber(&log_settings);

    let request_id = Uuid::new_v4().to_string();
    let span = info_span!("wsp", request_id = %request_id, command = args.command.name());
    let _enter = span.enter();
    debug!("starting wsp command");

    if let Err(e) = execute_command(args) {
        error::report(&e);
        std::process::exit(1);
    }
}
