//! Termination trigger installation.
//!
//! # Responsibilities
//! - Register OS signal handlers (SIGTERM, ctrl-c)
//! - Route escaped panics to the termination channel
//! - Translate each trigger into a [`TerminationEvent`]
//!
//! # Design Decisions
//! - Uses tokio's async-safe signal handling
//! - The previous panic hook still runs, so panic backtraces are preserved
//! - Signal listeners are themselves monitored tasks: if one dies, that is
//!   a termination trigger too

use crate::lifecycle::shutdown::{spawn_monitored, ShutdownHandle, TerminationEvent};

/// Install every termination trigger.
///
/// Must run inside the tokio runtime (the signal listeners are spawned).
pub fn install(handle: ShutdownHandle) {
    install_panic_hook(handle.clone());

    let ctrl_c_handle = handle.clone();
    spawn_monitored(handle.clone(), "ctrl-c-listener", async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupt received");
                ctrl_c_handle.raise(TerminationEvent::ShutdownRequested);
            }
            Err(err) => {
                tracing::error!(error = %err, "Interrupt handler could not be installed");
                ctrl_c_handle.raise(TerminationEvent::FailedTask);
            }
        }
    });

    #[cfg(unix)]
    {
        let sigterm_handle = handle.clone();
        spawn_monitored(handle, "sigterm-listener", async move {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                    tracing::info!("SIGTERM received");
                    sigterm_handle.raise(TerminationEvent::ShutdownRequested);
                }
                Err(err) => {
                    tracing::error!(error = %err, "SIGTERM handler could not be installed");
                    sigterm_handle.raise(TerminationEvent::FailedTask);
                }
            }
        });
    }
}

fn install_panic_hook(handle: ShutdownHandle) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        previous(info);
        handle.raise(TerminationEvent::UnhandledError);
    }));
}
