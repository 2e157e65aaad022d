pub mod api;
pub mod config;
pub mod easing;
pub mod ui;

// Re-export key types at crate root for convenience
pub use api::error::EaseError;
pub use api::types::{ElementId, TransitionEvent};
pub use config::{EffectConfig, EffectKind, TransitionConfig};
pub use easing::{
    bake, evaluate_normalized, evaluate_range, evaluate_range_2d, lerp, lerp_vec2, progress,
    CurveKind, CurveSample,
};
pub use ui::{
    ElementStore, Transition, Tween, TweenId, TweenLoop, TweenState, TweenTarget, UiElement,
};

// Vec2 is part of the public API (2D ranges, element positions).
pub use glam::Vec2;
