//! Terminal focus dispatch with strict locator validation.
//!
//! Locator strings come from an external, potentially adversarial event
//! source and end up as arguments to the multiplexer binary. Validation
//! is the gate: anything that fails is silently skipped. Arguments are
//! always passed as a vector — never interpolated into a shell line — so
//! the validator is defense-in-depth, not the only layer.

use std::time::Duration;

use tokio::process::Command;
use tokio::time::sleep;

use crate::config::HubConfig;
use crate::ingest::NO_LOCATOR;

/// Delay between raising the terminal and issuing multiplexer actions,
/// letting window-manager focus settle first.
const FOCUS_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// A locator is valid iff non-empty, not the `"none"` sentinel, and every
/// character is alphanumeric or one of `_ : % . -`.
pub fn is_valid_locator(locator: &str) -> bool {
    if locator.is_empty() || locator == NO_LOCATOR {
        return false;
    }
    locator
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '%' | '.' | '-'))
}

/// The session-switch argument is a prefix substring of the full locator,
/// so it passes a stricter check: alphanumeric or `_ . -` only.
pub fn is_valid_session(session: &str) -> bool {
    !session.is_empty()
        && session
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Session name extracted from a `session:window` target.
pub fn session_of(session_target: &str) -> &str {
    session_target
        .split_once(':')
        .map(|(session, _)| session)
        .unwrap_or(session_target)
}

/// Bring the terminal to the foreground and, when the config enables the
/// multiplexer and both locators validate, switch session, window and
/// pane in that order. Entirely best-effort.
pub async fn dispatch(config: &HubConfig, session_target: &str, pane_id: &str) {
    raise_terminal(&config.terminal_app).await;
    sleep(FOCUS_SETTLE_DELAY).await;

    if !config.multiplexer_enabled {
        return;
    }
    if !is_valid_locator(session_target) || !is_valid_locator(pane_id) {
        tracing::debug!(
            session_target,
            pane_id,
            "Locator failed validation, skipping multiplexer actions"
        );
        return;
    }
    let session = session_of(session_target);
    if !is_valid_session(session) {
        tracing::debug!(session, "Session prefix failed validation, skipping");
        return;
    }

    let mux = &config.multiplexer_path;
    run_mux(mux, &["switch-client", "-t", session]).await;
    run_mux(mux, &["select-window", "-t", session_target]).await;
    run_mux(mux, &["select-pane", "-t", pane_id]).await;
}

/// Raise the terminal application (macOS host).
async fn raise_terminal(app: &str) {
    let _ = Command::new("open").args(["-a", app]).output().await;
}

async fn run_mux(path: &str, args: &[&str]) {
    let _ = Command::new(path).args(args).output().await;
}
