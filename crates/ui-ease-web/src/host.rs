use ui_ease::{CurveKind, CurveSample, EaseError};

/// Curve for a host-side ordinal (`CurveKind::ALL` order).
/// An unknown ordinal is an error, never a fallback curve.
pub fn curve_from_host(kind: u32) -> Result<CurveKind, EaseError> {
    CurveKind::try_from(kind)
}

/// Baked table for `kind` flattened to `[t0, v0, t1, v1, ...]`.
pub fn bake_interleaved(kind: u32, samples: usize) -> Result<Vec<f32>, EaseError> {
    let table = ui_ease::bake(curve_from_host(kind)?, samples);
    Ok(CurveSample::as_floats(&table).to_vec())
}
