#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a configured `pagegen` command suitable for integration tests.
/// Strips ambient credentials so tests never hit a real endpoint.
#[allow(dead_code)]
pub fn pagegen_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pagegen"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("PAGEGEN_CONFIG");
    cmd.env("NO_COLOR", "1");
    cmd
}
