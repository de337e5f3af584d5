//! Switching between the settings screen and the immersive view.

use glowclock_proto::config::ClockSize;
use log::debug;

use crate::fullscreen::FullscreenRequest;

/// Tracks whether the immersive view is shown and whether the window is
/// currently in native fullscreen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presentation {
    view_mode:         bool,
    native_fullscreen: bool,
}

impl Presentation {
    pub fn is_view_mode(&self) -> bool {
        self.view_mode
    }

    pub fn is_native_fullscreen(&self) -> bool {
        self.native_fullscreen
    }

    /// Enters the immersive view for `size`.
    ///
    /// The fullscreen size asks the window to go fullscreen; the other sizes
    /// make sure a previous native fullscreen is left.
    pub fn request_view(&mut self, size: ClockSize) -> Option<FullscreenRequest> {
        self.view_mode = true;

        match size {
            ClockSize::Fullscreen => Some(FullscreenRequest::Enter),
            ClockSize::Small | ClockSize::Medium if self.native_fullscreen => {
                Some(FullscreenRequest::Exit)
            }
            ClockSize::Small | ClockSize::Medium => None,
        }
    }

    /// Records the window mode reported after a fullscreen change.
    ///
    /// Leaving native fullscreen while the fullscreen size is selected also
    /// leaves the immersive view so the settings come back.
    pub fn fullscreen_changed(&mut self, is_fullscreen: bool, size: ClockSize) {
        self.native_fullscreen = is_fullscreen;

        if !is_fullscreen && size == ClockSize::Fullscreen && self.view_mode {
            debug!("Native fullscreen left, returning to settings");
            self.view_mode = false;
        }
    }

    /// Handles the Escape key.
    pub fn escape(&mut self) -> Option<FullscreenRequest> {
        if !self.view_mode {
            return None;
        }

        self.view_mode = false;

        self.native_fullscreen.then_some(FullscreenRequest::Exit)
    }
}
