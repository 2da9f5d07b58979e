//! 8.8 fixed-point time base for animation runs.
//!
//! Progress and fade are fractions where `FP_ONE` (256) encodes 1.0. Integer
//! math keeps every frame bit-exact across platforms, so a given base seed
//! and progress always produce the same picture.
//!
//! # Timeline
//!
//! ```text
//! progress  0 ─────────────── 179 ──────────── 256
//!           │   animating     │   fading out   │ stop
//! fade      256 ............. 256 ──────────▶ 0
//! ```

/// Fixed-point scalar (8.8). Signed so intermediate differences may go negative.
pub type Fixed = i32;

/// 1.0
pub const FP_ONE: Fixed = 256;

/// 0.5
pub const FP_HALF: Fixed = 128;

/// Progress added per scheduled tick (~0.0195).
pub const ANIM_FP_STEP: Fixed = 5;

/// Progress at which the fade-out phase begins (0.7).
pub const FP_FADE_START: Fixed = 179;

/// Length of the fade-out phase (0.3). Also the visibility cutoff for `fade`.
pub const FP_FADE_SPAN: Fixed = 77;

/// Fade for a given progress value.
///
/// Fully opaque before [`FP_FADE_START`], then falls linearly and is clamped
/// to `0..=FP_ONE`.
#[inline]
pub const fn fade_for_progress(progress: Fixed) -> Fixed {
    if progress < FP_FADE_START {
        return FP_ONE;
    }
    let over = progress - FP_FADE_START;
    let fade = FP_ONE - over * FP_ONE / FP_FADE_SPAN;
    if fade < 0 {
        0
    } else if fade > FP_ONE {
        FP_ONE
    } else {
        fade
    }
}

/// Whether a frame at this fade level is drawn at all.
#[inline]
pub const fn is_visible(fade: Fixed) -> bool { fade >= FP_FADE_SPAN }

/// Fixed-point multiply (`a * b`, both 8.8), flooring toward negative infinity.
#[inline]
pub const fn fp_mul(
    a: Fixed,
    b: Fixed,
) -> Fixed {
    (a * b) >> 8
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_opaque_before_threshold() {
        for p in 0..FP_FADE_START {
            assert_eq!(fade_for_progress(p), FP_ONE);
        }
    }

    #[test]
    fn test_fade_reaches_zero_by_end() {
        assert_eq!(fade_for_progress(FP_FADE_START), FP_ONE);
        assert_eq!(fade_for_progress(FP_FADE_START + FP_FADE_SPAN), 0);
        assert_eq!(fade_for_progress(FP_ONE), 0);
        assert_eq!(fade_for_progress(FP_ONE + 50), 0);
    }

    #[test]
    fn test_fade_monotone_non_increasing() {
        let mut prev = FP_ONE;
        for p in 0..=FP_ONE {
            let f = fade_for_progress(p);
            assert!(f <= prev, "fade rose at progress {p}");
            prev = f;
        }
    }

    #[test]
    fn test_visibility_cutoff() {
        assert!(is_visible(FP_ONE));
        assert!(is_visible(FP_FADE_SPAN));
        assert!(!is_visible(FP_FADE_SPAN - 1));
        assert!(!is_visible(0));
    }

    #[test]
    fn test_fp_mul_floors_negative() {
        assert_eq!(fp_mul(FP_ONE, FP_HALF), FP_HALF);
        assert_eq!(fp_mul(-1, 205), -1);
        assert_eq!(fp_mul(10, 256), 10);
    }
}
