//! Process-level startup checks.

use std::fs;
use std::process::Command;

/// Tests the fatal-startup path for a missing bot token.
///
/// Runs the compiled binary in a scratch directory holding a valid
/// `config.json` but with `TOKEN` removed from the environment.
///
/// Expected: exit status 1, before any server is started
#[test]
fn missing_token_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{
            "CLIENT_ID": "123456789012345678",
            "GUILD_ID": "234567890123456789",
            "VOICE_CHANNEL_ID": "0",
            "WELCOME_CHANNEL_ID": "456789012345678901"
        }"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_guildbot"))
        .current_dir(dir.path())
        .env_remove("TOKEN")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
