//! Account display command.

use shopfront_core::AppConfig;

use crate::session;

/// Shows the signed-in greeting or the signed-out line; `--clear` drops the
/// stored session first.
pub(crate) fn run_account(config: &AppConfig, clear: bool) -> anyhow::Result<()> {
    if clear {
        session::clear(&config.state_dir)?;
        println!("Session cleared.");
        return Ok(());
    }

    match session::load(&config.state_dir).and_then(|s| s.display_name) {
        Some(name) => println!("Hi, {name}"),
        None => println!("Not signed in."),
    }
    Ok(())
}
