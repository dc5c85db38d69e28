// src/control/signals.rs

//! OS signal wiring for a [`ControlToken`].
//!
//! - `SIGUSR1` → request stop
//! - `SIGUSR2` → enable single-step
//! - Ctrl-C    → request stop
//!
//! The listener runs as a Tokio task; it only flips flags, the surveyor
//! notices them at its next round boundary.

use tokio::task::JoinHandle;
use tracing::warn;

use crate::control::ControlToken;

/// Spawn the signal listener on the current Tokio runtime.
///
/// Fails if a signal handler cannot be registered.
#[cfg(unix)]
pub fn spawn_signal_listener(control: ControlToken) -> std::io::Result<JoinHandle<()>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut usr1 = signal(SignalKind::user_defined1())?;
    let mut usr2 = signal(SignalKind::user_defined2())?;
    let mut int = signal(SignalKind::interrupt())?;

    Ok(tokio::spawn(async move {
        loop {
            tokio::select! {
                Some(()) = usr1.recv() => {
                    warn!("SIGUSR1 received; requesting stop");
                    control.request_stop();
                }
                Some(()) = usr2.recv() => {
                    warn!("SIGUSR2 received; enabling single-step");
                    control.enable_single_step();
                }
                Some(()) = int.recv() => {
                    warn!("interrupt received; requesting stop");
                    control.request_stop();
                }
                else => break,
            }
        }
    }))
}

#[cfg(not(unix))]
pub fn spawn_signal_listener(control: ControlToken) -> std::io::Result<JoinHandle<()>> {
    Ok(tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for Ctrl+C: {e}");
                return;
            }
            warn!("interrupt received; requesting stop");
            control.request_stop();
        }
    }))
}
