//! Pure mappings from field length to pupil coordinates inside the 24x24 icon
//! viewBox. Nothing here touches the DOM, so every curve is testable on the host.

/// Resting pupil coordinate on both axes.
pub const CENTER: f64 = 12.0;
/// Vertical coordinate while the username field has attention.
pub const LOOK_UP_Y: f64 = 9.0;

/// Horizontal sweep while typing a username, left to right.
pub const USERNAME_BOUNDS: Bounds = Bounds {
    start: 10.0,
    end: 14.0,
};
/// Username length at which the pupil reaches the right edge.
pub const USERNAME_MAX_LEN: usize = 16;

/// Horizontal sweep while typing a password, from center toward the lower left.
pub const PASSWORD_BOUNDS: Bounds = Bounds {
    start: CENTER,
    end: 6.0,
};
/// Password length at which the pupil settles on the left edge.
pub const PASSWORD_MAX_LEN: usize = 12;
/// Ease-out exponent applied to password progress.
pub const PASSWORD_EASE_EXPONENT: f64 = 1.5;

/// Endpoints of a one-dimensional interpolation. `start` is reached at zero
/// progress and `end` at full progress; either may be the larger value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub start: f64,
    pub end: f64,
}

impl Bounds {
    /// Linear interpolation between the endpoints for `progress` in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, progress: f64) -> f64 {
        self.start + progress.clamp(0.0, 1.0) * (self.end - self.start)
    }
}

/// Pupil coordinates in viewBox units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PupilPosition {
    pub cx: f64,
    pub cy: f64,
}

impl PupilPosition {
    pub const CENTER: Self = Self {
        cx: CENTER,
        cy: CENTER,
    };
}

impl Default for PupilPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Length of a field value as the browser reports it: UTF-16 code units, so
/// characters outside the Basic Multilingual Plane count twice.
#[must_use]
pub fn field_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Fraction of `max_len` covered by `len`, clamped to `[0, 1]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress(len: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 1.0;
    }
    len.min(max_len) as f64 / max_len as f64
}

/// Ease-out power curve: `1 - (1 - p)^exponent`.
#[must_use]
pub fn ease_out(progress: f64, exponent: f64) -> f64 {
    1.0 - (1.0 - progress.clamp(0.0, 1.0)).powf(exponent)
}

/// Linear interpolation of `len` across `bounds`, saturating at `max_len`.
#[must_use]
pub fn linear_offset(len: usize, max_len: usize, bounds: Bounds) -> f64 {
    bounds.lerp(progress(len, max_len))
}

/// Eased interpolation of `len` across `bounds`, saturating at `max_len`.
#[must_use]
pub fn eased_offset(len: usize, max_len: usize, bounds: Bounds, exponent: f64) -> f64 {
    bounds.lerp(ease_out(progress(len, max_len), exponent))
}

/// Horizontal pupil position while the username holds `len` characters.
#[must_use]
pub fn username_cx(len: usize) -> f64 {
    linear_offset(len, USERNAME_MAX_LEN, USERNAME_BOUNDS)
}

/// Horizontal pupil position while the password holds `len` characters.
#[must_use]
pub fn password_cx(len: usize) -> f64 {
    eased_offset(
        len,
        PASSWORD_MAX_LEN,
        PASSWORD_BOUNDS,
        PASSWORD_EASE_EXPONENT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn username_cx_is_monotonic_and_bounded() {
        let mut previous = f64::MIN;
        for len in 0..64 {
            let cx = username_cx(len);
            assert!((10.0..=14.0).contains(&cx), "len {len} gave {cx}");
            assert!(cx >= previous, "len {len} moved left");
            previous = cx;
        }
    }

    #[test]
    fn username_cx_hits_endpoints() {
        assert!((username_cx(0) - 10.0).abs() < EPSILON);
        assert!((username_cx(8) - 12.0).abs() < EPSILON);
        assert!((username_cx(16) - 14.0).abs() < EPSILON);
        assert!((username_cx(40) - 14.0).abs() < EPSILON);
    }

    #[test]
    fn password_cx_moves_left_and_is_bounded() {
        let mut previous = f64::MAX;
        for len in 0..64 {
            let cx = password_cx(len);
            assert!((6.0..=12.0).contains(&cx), "len {len} gave {cx}");
            assert!(cx <= previous, "len {len} moved right");
            previous = cx;
        }
        assert!((password_cx(0) - 12.0).abs() < EPSILON);
        assert!((password_cx(12) - 6.0).abs() < EPSILON);
        assert!((password_cx(100) - 6.0).abs() < EPSILON);
    }

    #[test]
    fn password_cx_follows_ease_out_curve() {
        // Half progress covers 1 - 0.5^1.5 of the sweep.
        let expected = 12.0 - (1.0 - 0.5_f64.powf(1.5)) * 6.0;
        assert!((password_cx(6) - expected).abs() < EPSILON);
        // Ease-out front-loads the motion compared to a linear sweep.
        assert!(password_cx(3) < 12.0 - 0.25 * 6.0);
    }

    #[test]
    fn field_len_counts_utf16_units() {
        assert_eq!(field_len(""), 0);
        assert_eq!(field_len("alice"), 5);
        assert_eq!(field_len("é"), 1);
        assert_eq!(field_len("😀"), 2);
        // Six astral characters saturate the password sweep.
        let locks = "🔒".repeat(6);
        assert_eq!(field_len(&locks), PASSWORD_MAX_LEN);
        assert!((password_cx(field_len(&locks)) - 6.0).abs() < EPSILON);
    }

    #[test]
    fn progress_handles_zero_max_len() {
        assert!((progress(0, 0) - 1.0).abs() < EPSILON);
        assert!((progress(5, 10) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn ease_out_clamps_progress() {
        assert!(ease_out(-1.0, 1.5).abs() < EPSILON);
        assert!((ease_out(2.0, 1.5) - 1.0).abs() < EPSILON);
    }
}
