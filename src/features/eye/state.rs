//! The login icon's view state as an explicit state object. Every DOM event and
//! timer tick maps to exactly one transition method, so the whole animation can
//! be driven from tests without rendering.

use super::blink::{BlinkTarget, EYELID_CLOSED, EYELID_OPEN, LENS_BRIGHT, LENS_DIMMED};
use super::gaze::{self, PupilPosition};
use crate::features::auth::visibility::Visibility;

/// Which login field currently has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    None,
    Username,
    Password,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EyeState {
    focus: Focus,
    username_len: usize,
    password_len: usize,
    visibility: Visibility,
    pupil: PupilPosition,
    blinking: Option<BlinkTarget>,
}

impl EyeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn pupil(&self) -> PupilPosition {
        self.pupil
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Part closed by the blink currently in flight, if any.
    #[must_use]
    pub fn blinking(&self) -> Option<BlinkTarget> {
        self.blinking
    }

    #[must_use]
    pub fn eyelid_opacity(&self) -> f64 {
        match self.blinking {
            Some(BlinkTarget::Eyelid) => EYELID_CLOSED,
            _ => EYELID_OPEN,
        }
    }

    /// Brightness factor for both lenses; the icon scales it per layer.
    #[must_use]
    pub fn lens_opacity(&self) -> f64 {
        match self.blinking {
            Some(BlinkTarget::Lenses) => LENS_DIMMED,
            _ => LENS_BRIGHT,
        }
    }

    pub fn focus_username(&mut self) {
        self.focus = Focus::Username;
        self.pupil.cy = gaze::LOOK_UP_Y;
        self.pupil.cx = if self.username_len == 0 {
            gaze::CENTER
        } else {
            gaze::username_cx(self.username_len)
        };
    }

    pub fn input_username(&mut self, len: usize) {
        self.username_len = len;
        self.pupil = PupilPosition {
            cx: gaze::username_cx(len),
            cy: gaze::LOOK_UP_Y,
        };
    }

    pub fn blur_username(&mut self) {
        if self.focus == Focus::Username {
            self.focus = Focus::None;
        }
        self.pupil.cy = gaze::CENTER;
        if self.username_len == 0 || self.password_len == 0 {
            self.pupil.cx = gaze::CENTER;
        }
    }

    pub fn focus_password(&mut self) {
        self.focus = Focus::Password;
        self.pupil.cy = gaze::CENTER;
    }

    pub fn input_password(&mut self, len: usize) {
        self.password_len = len;
        self.pupil = PupilPosition {
            cx: gaze::password_cx(len),
            cy: gaze::CENTER,
        };
    }

    pub fn blur_password(&mut self) {
        if self.focus == Focus::Password {
            self.focus = Focus::None;
        }
        self.pupil.cy = gaze::CENTER;
        if self.password_len == 0 {
            self.pupil.cx = gaze::CENTER;
        }
    }

    /// Flips password visibility. A blink in flight keeps its target.
    pub fn toggle_visibility(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    /// Closes the part matching the current visibility. Returns `None` while
    /// another blink is still in flight.
    pub fn begin_blink(&mut self) -> Option<BlinkTarget> {
        if self.blinking.is_some() {
            return None;
        }
        let target = if self.visibility.is_shown() {
            BlinkTarget::Lenses
        } else {
            BlinkTarget::Eyelid
        };
        self.blinking = Some(target);
        Some(target)
    }

    /// Reopens whatever the in-flight blink closed.
    pub fn end_blink(&mut self) -> Option<BlinkTarget> {
        self.blinking.take()
    }
}
