//! Shell completion generation.

use std::io::Write;

use clap_complete::{generate, Shell};

/// Generate a completion script for `shell` into `out`.
pub fn generate_completion(cmd: &mut clap::Command, shell: Shell, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}
