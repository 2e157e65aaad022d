// easing/engine.rs
//
// Evaluation on top of the curve catalog: time normalization,
// range remapping and curve baking. Stateless, safe from any thread.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::curve::CurveKind;

/// Normalized progress of `current_time` through `total_time`, clamped to [0, 1].
///
/// A zero, negative or NaN duration counts as already complete and yields `1.0`.
/// A NaN `current_time` yields `0.0`.
#[inline]
pub fn progress(current_time: f32, total_time: f32) -> f32 {
    if total_time.is_nan() || total_time <= 0.0 {
        return 1.0;
    }
    let t = current_time / total_time;
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Curve value at `current_time` of a `total_time` long transition.
#[inline]
pub fn evaluate_normalized(current_time: f32, total_time: f32, kind: CurveKind) -> f32 {
    kind.apply(progress(current_time, total_time))
}

/// Value between `start` and `end` at `current_time`, shaped by `kind`.
#[inline]
pub fn evaluate_range(current_time: f32, total_time: f32, start: f32, end: f32, kind: CurveKind) -> f32 {
    lerp(start, end, evaluate_normalized(current_time, total_time, kind))
}

/// 2D version of [`evaluate_range`]. Both axes share one curve sample.
#[inline]
pub fn evaluate_range_2d(current_time: f32, total_time: f32, start: Vec2, end: Vec2, kind: CurveKind) -> Vec2 {
    lerp_vec2(start, end, evaluate_normalized(current_time, total_time, kind))
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

// ── Baking ───────────────────────────────────────────────────────────────

/// One point of a baked curve. Laid out as two floats so a whole table
/// can be handed to a host buffer without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CurveSample {
    pub t: f32,
    pub value: f32,
}

impl CurveSample {
    pub const FLOATS: usize = 2;

    /// View a baked table as interleaved `t, value` floats.
    pub fn as_floats(samples: &[CurveSample]) -> &[f32] {
        bytemuck::cast_slice(samples)
    }
}

/// Sample `kind` at `samples` equally spaced points over [0, 1], ends included.
pub fn bake(kind: CurveKind, samples: usize) -> Vec<CurveSample> {
    match samples {
        0 => Vec::new(),
        1 => vec![CurveSample { t: 0.0, value: kind.apply(0.0) }],
        n => {
            let last = (n - 1) as f32;
            (0..n)
                .map(|i| {
                    let t = i as f32 / last;
                    CurveSample { t, value: kind.apply(t) }
                })
                .collect()
        }
    }
}
