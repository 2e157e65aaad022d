// easing/curve.rs
//
// The curve catalog. Each CurveKind names one pure f(t) over [0, 1].
// No time or range handling here; see engine.rs for that.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::error::EaseError;

const ELASTIC_AMPLITUDE: f32 = 1.0;
const ELASTIC_PERIOD: f32 = 0.4;

const BACK_C1: f32 = 1.70158;
const BACK_C3: f32 = 2.70158;

const BOUNCE_N: f32 = 7.5625;
const BOUNCE_1: f32 = 1.0 / 2.75;
const BOUNCE_2: f32 = 2.0 / 2.75;
const BOUNCE_3: f32 = 1.5 / 2.75;
const BOUNCE_4: f32 = 2.5 / 2.75;
const BOUNCE_5: f32 = 2.25 / 2.75;
const BOUNCE_6: f32 = 2.625 / 2.75;

/// Named easing curve.
///
/// Variant order is stable: hosts that pass curves as integers use
/// [`CurveKind::ordinal`] / `TryFrom<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveKind {
    /// No curve chosen. Evaluates as [`CurveKind::CubicInOut`].
    #[default]
    None,
    /// Constant velocity.
    Linear,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    SinusoidalIn,
    SinusoidalOut,
    SinusoidalInOut,
    /// Steepest of the non-overshooting curves.
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
    CircularIn,
    CircularOut,
    CircularInOut,
    /// Pulls back below 0 before starting.
    BackIn,
    /// Overshoots past 1 before settling.
    BackOut,
    BackInOut,
    /// Springs well outside [0, 1] at the start.
    ElasticIn,
    /// Springs well outside [0, 1] at the end.
    ElasticOut,
    ElasticInOut,
    /// Bounces inside [0, 1] at the start.
    BounceIn,
    /// Bounces inside [0, 1] at the end.
    BounceOut,
    BounceInOut,
}

impl CurveKind {
    /// Every curve, in ordinal order.
    pub const ALL: [CurveKind; 32] = [
        CurveKind::None,
        CurveKind::Linear,
        CurveKind::CubicIn,
        CurveKind::CubicOut,
        CurveKind::CubicInOut,
        CurveKind::QuadraticIn,
        CurveKind::QuadraticOut,
        CurveKind::QuadraticInOut,
        CurveKind::QuarticIn,
        CurveKind::QuarticOut,
        CurveKind::QuarticInOut,
        CurveKind::QuinticIn,
        CurveKind::QuinticOut,
        CurveKind::QuinticInOut,
        CurveKind::SinusoidalIn,
        CurveKind::SinusoidalOut,
        CurveKind::SinusoidalInOut,
        CurveKind::ExponentialIn,
        CurveKind::ExponentialOut,
        CurveKind::ExponentialInOut,
        CurveKind::CircularIn,
        CurveKind::CircularOut,
        CurveKind::CircularInOut,
        CurveKind::BackIn,
        CurveKind::BackOut,
        CurveKind::BackInOut,
        CurveKind::ElasticIn,
        CurveKind::ElasticOut,
        CurveKind::ElasticInOut,
        CurveKind::BounceIn,
        CurveKind::BounceOut,
        CurveKind::BounceInOut,
    ];

    /// Evaluate the curve at normalized time `t`.
    ///
    /// `t` is clamped to [0, 1]. The result is usually in [0, 1] too, but
    /// Back and Elastic curves overshoot by design.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            CurveKind::None => cubic_in_out(t),
            CurveKind::Linear => t,

            CurveKind::CubicIn => t * t * t,
            CurveKind::CubicOut => cubic_out(t),
            CurveKind::CubicInOut => cubic_in_out(t),

            CurveKind::QuadraticIn => t * t,
            CurveKind::QuadraticOut => -t * (t - 2.0),
            CurveKind::QuadraticInOut => quadratic_in_out(t),

            CurveKind::QuarticIn => t * t * t * t,
            CurveKind::QuarticOut => quartic_out(t),
            CurveKind::QuarticInOut => quartic_in_out(t),

            CurveKind::QuinticIn => t * t * t * t * t,
            CurveKind::QuinticOut => quintic_out(t),
            CurveKind::QuinticInOut => quintic_in_out(t),

            CurveKind::SinusoidalIn => 1.0 - (t * (PI / 2.0)).cos(),
            CurveKind::SinusoidalOut => (t * (PI / 2.0)).sin(),
            CurveKind::SinusoidalInOut => -0.5 * ((PI * t).cos() - 1.0),

            CurveKind::ExponentialIn => exponential_in(t),
            CurveKind::ExponentialOut => exponential_out(t),
            CurveKind::ExponentialInOut => exponential_in_out(t),

            CurveKind::CircularIn => -((1.0 - t * t).sqrt() - 1.0),
            CurveKind::CircularOut => circular_out(t),
            CurveKind::CircularInOut => circular_in_out(t),

            CurveKind::BackIn => back_in(t),
            CurveKind::BackOut => back_out(t),
            CurveKind::BackInOut => back_in_out(t),

            CurveKind::ElasticIn => elastic_in(t),
            CurveKind::ElasticOut => elastic_out(t),
            CurveKind::ElasticInOut => elastic_in_out(t),

            CurveKind::BounceIn => 1.0 - bounce_out(1.0 - t),
            CurveKind::BounceOut => bounce_out(t),
            CurveKind::BounceInOut => bounce_in_out(t),
        }
    }

    /// Position of this curve in [`CurveKind::ALL`].
    #[inline]
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// True for curves that never decrease over [0, 1]
    /// (everything except the Back, Elastic and Bounce families).
    pub fn is_monotonic(self) -> bool {
        !matches!(
            self,
            CurveKind::BackIn
                | CurveKind::BackOut
                | CurveKind::BackInOut
                | CurveKind::ElasticIn
                | CurveKind::ElasticOut
                | CurveKind::ElasticInOut
                | CurveKind::BounceIn
                | CurveKind::BounceOut
                | CurveKind::BounceInOut
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::None => "None",
            CurveKind::Linear => "Linear",
            CurveKind::CubicIn => "CubicIn",
            CurveKind::CubicOut => "CubicOut",
            CurveKind::CubicInOut => "CubicInOut",
            CurveKind::QuadraticIn => "QuadraticIn",
            CurveKind::QuadraticOut => "QuadraticOut",
            CurveKind::QuadraticInOut => "QuadraticInOut",
            CurveKind::QuarticIn => "QuarticIn",
            CurveKind::QuarticOut => "QuarticOut",
            CurveKind::QuarticInOut => "QuarticInOut",
            CurveKind::QuinticIn => "QuinticIn",
            CurveKind::QuinticOut => "QuinticOut",
            CurveKind::QuinticInOut => "QuinticInOut",
            CurveKind::SinusoidalIn => "SinusoidalIn",
            CurveKind::SinusoidalOut => "SinusoidalOut",
            CurveKind::SinusoidalInOut => "SinusoidalInOut",
            CurveKind::ExponentialIn => "ExponentialIn",
            CurveKind::ExponentialOut => "ExponentialOut",
            CurveKind::ExponentialInOut => "ExponentialInOut",
            CurveKind::CircularIn => "CircularIn",
            CurveKind::CircularOut => "CircularOut",
            CurveKind::CircularInOut => "CircularInOut",
            CurveKind::BackIn => "BackIn",
            CurveKind::BackOut => "BackOut",
            CurveKind::BackInOut => "BackInOut",
            CurveKind::ElasticIn => "ElasticIn",
            CurveKind::ElasticOut => "ElasticOut",
            CurveKind::ElasticInOut => "ElasticInOut",
            CurveKind::BounceIn => "BounceIn",
            CurveKind::BounceOut => "BounceOut",
            CurveKind::BounceInOut => "BounceInOut",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for CurveKind {
    type Error = EaseError;

    fn try_from(ordinal: u32) -> Result<Self, Self::Error> {
        CurveKind::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(EaseError::InvalidCurveKind(ordinal))
    }
}

impl FromStr for CurveKind {
    type Err = EaseError;

    /// Case-insensitive; `_` and `-` separators are ignored,
    /// so `"cubic_out"`, `"cubic-out"` and `"CubicOut"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();
        CurveKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| EaseError::UnknownCurveName(s.to_string()))
    }
}

// ── Formulas ─────────────────────────────────────────────────────────────
//
// InOut variants rescale t to [0, 2], run the In half below 1 and the
// Out half above it. Constants must stay as-is for visual parity.

fn quadratic_in_out(t: f32) -> f32 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t * t
    } else {
        let t = t - 1.0;
        -0.5 * (t * (t - 2.0) - 1.0)
    }
}

fn cubic_out(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t + 1.0
}

fn cubic_in_out(t: f32) -> f32 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t * t * t
    } else {
        let t = t - 2.0;
        0.5 * (t * t * t + 2.0)
    }
}

fn quartic_out(t: f32) -> f32 {
    let t = t - 1.0;
    -(t * t * t * t - 1.0)
}

fn quartic_in_out(t: f32) -> f32 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t * t * t * t
    } else {
        let t = t - 2.0;
        -0.5 * (t * t * t * t - 2.0)
    }
}

fn quintic_out(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t * t * t + 1.0
}

fn quintic_in_out(t: f32) -> f32 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t * t * t * t * t
    } else {
        let t = t - 2.0;
        0.5 * (t * t * t * t * t + 2.0)
    }
}

// The raw exponential formulas miss their endpoints by 2^-10,
// so 0 and 1 are pinned.

fn exponential_in(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        2.0_f32.powf(10.0 * (t - 1.0))
    }
}

fn exponential_out(t: f32) -> f32 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

fn exponential_in_out(t: f32) -> f32 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * 2.0_f32.powf(10.0 * (t - 1.0))
    } else {
        let t = t - 1.0;
        0.5 * (2.0 - 2.0_f32.powf(-10.0 * t))
    }
}

fn circular_out(t: f32) -> f32 {
    let t = t - 1.0;
    (1.0 - t * t).sqrt()
}

fn circular_in_out(t: f32) -> f32 {
    let t = t * 2.0;
    if t < 1.0 {
        -0.5 * ((1.0 - t * t).sqrt() - 1.0)
    } else {
        let t = t - 2.0;
        0.5 * ((1.0 - t * t).sqrt() + 1.0)
    }
}

#[inline]
fn back_in(t: f32) -> f32 {
    t * t * (BACK_C3 * t - BACK_C1)
}

#[inline]
fn back_out(t: f32) -> f32 {
    let u = t - 1.0;
    1.0 - u * u * (-BACK_C3 * u - BACK_C1)
}

fn back_in_out(t: f32) -> f32 {
    let t = t * 2.0;
    if t < 1.0 {
        back_in(t) / 2.0
    } else {
        back_out(t - 1.0) / 2.0 + 0.5
    }
}

/// Phase shift that makes the single-sided elastic curves start on a zero crossing.
#[inline]
fn elastic_shift() -> f32 {
    ELASTIC_PERIOD / (2.0 * PI) * (1.0 / ELASTIC_AMPLITUDE).asin()
}

fn elastic_in(t: f32) -> f32 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let t = t - 1.0;
    -(ELASTIC_AMPLITUDE
        * 2.0_f32.powf(10.0 * t)
        * ((t - elastic_shift()) * (2.0 * PI) / ELASTIC_PERIOD).sin())
}

fn elastic_out(t: f32) -> f32 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    ELASTIC_AMPLITUDE
        * 2.0_f32.powf(-10.0 * t)
        * ((t - elastic_shift()) * (2.0 * PI) / ELASTIC_PERIOD).sin()
        + 1.0
}

fn elastic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        let t = t - 0.5;
        -0.5 * (2.0_f32.powf(10.0 * t) * ((t - ELASTIC_PERIOD / 4.0) * (2.0 * PI) / ELASTIC_PERIOD).sin())
    } else {
        let t = t - 0.5;
        2.0_f32.powf(-10.0 * t) * ((t - ELASTIC_PERIOD / 4.0) * (2.0 * PI) / ELASTIC_PERIOD).sin() * 0.5
            + 1.0
    }
}

/// Four parabolic arcs, each lower than the last. Thresholds are tested in order.
#[inline]
fn bounce_out(t: f32) -> f32 {
    if t < BOUNCE_1 {
        BOUNCE_N * t * t
    } else if t < BOUNCE_2 {
        BOUNCE_N * (t - BOUNCE_3) * (t - BOUNCE_3) + 0.75
    } else if t < BOUNCE_4 {
        BOUNCE_N * (t - BOUNCE_5) * (t - BOUNCE_5) + 0.9375
    } else {
        BOUNCE_N * (t - BOUNCE_6) * (t - BOUNCE_6) + 0.984375
    }
}

fn bounce_in_out(t: f32) -> f32 {
    if t < 0.5 {
        (1.0 - bounce_out(1.0 - t * 2.0)) / 2.0
    } else {
        bounce_out(t * 2.0 - 1.0) / 2.0 + 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    /// (In, Out) pairs for every family that has both.
    const DUALS: [(CurveKind, CurveKind); 10] = [
        (CurveKind::QuadraticIn, CurveKind::QuadraticOut),
        (CurveKind::CubicIn, CurveKind::CubicOut),
        (CurveKind::QuarticIn, CurveKind::QuarticOut),
        (CurveKind::QuinticIn, CurveKind::QuinticOut),
        (CurveKind::SinusoidalIn, CurveKind::SinusoidalOut),
        (CurveKind::ExponentialIn, CurveKind::ExponentialOut),
        (CurveKind::CircularIn, CurveKind::CircularOut),
        (CurveKind::BackIn, CurveKind::BackOut),
        (CurveKind::ElasticIn, CurveKind::ElasticOut),
        (CurveKind::BounceIn, CurveKind::BounceOut),
    ];

    fn close(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn every_curve_hits_its_endpoints() {
        for kind in CurveKind::ALL {
            let start = kind.apply(0.0);
            let end = kind.apply(1.0);
            assert!(close(start, 0.0, EPS), "{} at t=0 gave {}", kind, start);
            assert!(close(end, 1.0, EPS), "{} at t=1 gave {}", kind, end);
        }
    }

    #[test]
    fn none_is_cubic_in_out() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert_eq!(CurveKind::None.apply(t), CurveKind::CubicInOut.apply(t));
        }
        assert_eq!(CurveKind::default(), CurveKind::None);
    }

    #[test]
    fn out_mirrors_in() {
        for (ease_in, ease_out) in DUALS {
            for i in 0..=100 {
                let t = i as f32 / 100.0;
                let mirrored = 1.0 - ease_in.apply(1.0 - t);
                let out = ease_out.apply(t);
                assert!(
                    close(out, mirrored, 1e-4),
                    "{} vs mirrored {} at t={}: {} != {}",
                    ease_out, ease_in, t, out, mirrored
                );
            }
        }
    }

    #[test]
    fn monotonic_curves_never_decrease() {
        for kind in CurveKind::ALL.into_iter().filter(|k| k.is_monotonic()) {
            let mut prev = kind.apply(0.0);
            for i in 1..=1000 {
                let v = kind.apply(i as f32 / 1000.0);
                assert!(v >= prev - 1e-6, "{} decreased at step {}: {} < {}", kind, i, v, prev);
                prev = v;
            }
        }
    }

    #[test]
    fn cubic_out_midpoint() {
        assert!(close(CurveKind::CubicOut.apply(0.5), 0.875, EPS));
    }

    #[test]
    fn bounce_out_midpoint_uses_second_arc() {
        // 1/2.75 <= 0.5 < 2/2.75
        let expected = 7.5625 * (0.5 - 1.5 / 2.75) * (0.5 - 1.5 / 2.75) + 0.75;
        let v = CurveKind::BounceOut.apply(0.5);
        assert!(close(v, expected, EPS));
        assert!(close(v, 0.765625, EPS));
    }

    #[test]
    fn bounce_stays_in_range() {
        for kind in [CurveKind::BounceIn, CurveKind::BounceOut, CurveKind::BounceInOut] {
            for i in 0..=200 {
                let v = kind.apply(i as f32 / 200.0);
                assert!((-EPS..=1.0 + EPS).contains(&v), "{} left [0,1]: {}", kind, v);
            }
        }
    }

    #[test]
    fn back_and_elastic_overshoot() {
        assert!(CurveKind::BackIn.apply(0.2) < 0.0);
        assert!(CurveKind::BackOut.apply(0.8) > 1.0);
        let peak = (1..100)
            .map(|i| CurveKind::ElasticOut.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "ElasticOut peak {}", peak);
    }

    #[test]
    fn in_out_variants_cross_half_at_midpoint() {
        for kind in [
            CurveKind::QuadraticInOut,
            CurveKind::CubicInOut,
            CurveKind::QuarticInOut,
            CurveKind::QuinticInOut,
            CurveKind::SinusoidalInOut,
            CurveKind::ExponentialInOut,
            CurveKind::CircularInOut,
            CurveKind::BackInOut,
            CurveKind::ElasticInOut,
            CurveKind::BounceInOut,
        ] {
            let mid = kind.apply(0.5);
            assert!(close(mid, 0.5, 1e-4), "{} at 0.5 gave {}", kind, mid);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(CurveKind::QuadraticIn.apply(-3.0), 0.0);
        assert_eq!(CurveKind::QuadraticIn.apply(7.0), 1.0);
    }

    #[test]
    fn ordinals_follow_all() {
        for (i, kind) in CurveKind::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal() as usize, i);
            assert_eq!(CurveKind::try_from(i as u32).unwrap(), *kind);
        }
        assert!(matches!(
            CurveKind::try_from(32),
            Err(EaseError::InvalidCurveKind(32))
        ));
    }

    #[test]
    fn parse_names() {
        assert_eq!("CubicOut".parse::<CurveKind>().unwrap(), CurveKind::CubicOut);
        assert_eq!("bounce_in_out".parse::<CurveKind>().unwrap(), CurveKind::BounceInOut);
        assert_eq!("elastic-in".parse::<CurveKind>().unwrap(), CurveKind::ElasticIn);
        assert!(matches!(
            "wobble".parse::<CurveKind>(),
            Err(EaseError::UnknownCurveName(name)) if name == "wobble"
        ));
    }

    #[test]
    fn serializes_by_variant_name() {
        let json = serde_json::to_string(&CurveKind::CircularOut).unwrap();
        assert_eq!(json, "\"CircularOut\"");
        let kind: CurveKind = serde_json::from_str("\"BackInOut\"").unwrap();
        assert_eq!(kind, CurveKind::BackInOut);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn any_curve() -> impl Strategy<Value = CurveKind> {
            (0u32..32).prop_map(|i| CurveKind::try_from(i).unwrap())
        }

        proptest! {
            #[test]
            fn prop_monotonic_curves_stay_in_unit_range(kind in any_curve(), t in 0.0f32..=1.0) {
                prop_assume!(kind.is_monotonic());
                let v = kind.apply(t);
                prop_assert!((-EPS..=1.0 + EPS).contains(&v), "{} at {} gave {}", kind, t, v);
            }

            #[test]
            fn prop_duality(pair in 0usize..DUALS.len(), t in 0.0f32..=1.0) {
                let (ease_in, ease_out) = DUALS[pair];
                let mirrored = 1.0 - ease_in.apply(1.0 - t);
                prop_assert!(close(ease_out.apply(t), mirrored, 1e-4));
            }

            #[test]
            fn prop_output_is_finite(kind in any_curve(), t in -10.0f32..10.0) {
                prop_assert!(kind.apply(t).is_finite());
            }
        }
    }
}
