//! Best-effort window fullscreen handling.
//!
//! Requests are issued by the GUI as window tasks; afterwards the window
//! reports the mode it actually ended up in. Failures are logged and never
//! propagated, the clock keeps working in whatever mode the window is in.
//!
//! Some backends apply mode changes asynchronously, so the first report can
//! still show the old mode. A mismatch is only a warning; the mode queried
//! after the next resize has the final word.

use iced::window::Mode;
use log::{error, info, warn};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

impl FullscreenRequest {
    pub fn operation(self) -> &'static str {
        match self {
            FullscreenRequest::Enter => "enter fullscreen",
            FullscreenRequest::Exit => "exit fullscreen",
        }
    }

    pub fn target_mode(self) -> Mode {
        match self {
            FullscreenRequest::Enter => Mode::Fullscreen,
            FullscreenRequest::Exit => Mode::Windowed,
        }
    }
}

/// Reasons a fullscreen request did not take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FullscreenError {
    #[error("cannot {operation}: no window is available")]
    NoWindow { operation: &'static str },
    #[error("{operation} was rejected, window is in {actual:?} mode")]
    Rejected {
        operation: &'static str,
        actual:    Mode,
    },
}

/// Checks the mode reported after `request`.
///
/// Returns whether the window is fullscreen now.
pub fn check(request: FullscreenRequest, reported: Option<Mode>) -> Result<bool, FullscreenError> {
    let operation = request.operation();
    let actual = reported.ok_or(FullscreenError::NoWindow { operation })?;

    if actual != request.target_mode() {
        return Err(FullscreenError::Rejected { operation, actual });
    }

    Ok(actual == Mode::Fullscreen)
}

/// Logs the outcome of `request` and returns the fullscreen state when the
/// window confirmed it.
pub fn settle(request: FullscreenRequest, reported: Option<Mode>) -> Option<bool> {
    match check(request, reported) {
        Ok(is_fullscreen) => {
            info!("Window {}", if is_fullscreen { "entered fullscreen" } else { "left fullscreen" });
            Some(is_fullscreen)
        }
        Err(err @ FullscreenError::Rejected { .. }) => {
            warn!("{err}, waiting for the window to report its mode");
            None
        }
        Err(err @ FullscreenError::NoWindow { .. }) => {
            error!("Error attempting to {}: {err}", request.operation());
            None
        }
    }
}
