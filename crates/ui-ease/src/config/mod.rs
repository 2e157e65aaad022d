pub mod transition;

pub use transition::{EffectConfig, EffectKind, TransitionConfig};
