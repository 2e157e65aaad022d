// easing/mod.rs
//
// Pure easing math. No dependencies on elements or transitions.

pub mod curve;
pub mod engine;

pub use curve::CurveKind;
pub use engine::{
    bake, evaluate_normalized, evaluate_range, evaluate_range_2d, lerp, lerp_vec2, progress,
    CurveSample,
};
