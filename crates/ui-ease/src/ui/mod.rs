// ui/mod.rs
//
// Per-frame drivers that sample the easing engine and write into UI elements.
// The caller owns the clock: nothing here sleeps, spawns or caches curve values.

pub mod element;
pub mod transition;
pub mod tween;

pub use element::{ElementStore, UiElement};
pub use transition::Transition;
pub use tween::{Tween, TweenId, TweenLoop, TweenState, TweenTarget};
