use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn handle_completion(shell: Shell) {
    let mut cmd = crate::cli::Args::command();
    generate(shell, &mut cmd, "wsp", &mut io::stdout());
}
