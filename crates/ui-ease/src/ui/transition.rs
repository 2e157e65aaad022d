//! Show/hide transition controller.
//!
//! Drives a list of effects from a single value, 0 = hidden, 1 = shown.
//! The caller steps it once per frame with [`Transition::tick`]; it never
//! sleeps or spawns, so pausing is simply not ticking.
//!
//! ```ignore
//! let mut window = Transition::new(config).with_value(0.0);
//! window.attach(&mut element);
//! window.show(&mut element);
//! // every frame:
//! window.tick(dt, &mut element);
//! for event in window.drain_events() { ... }
//! ```

use log::{debug, warn};

use crate::api::error::EaseError;
use crate::api::types::TransitionEvent;
use crate::config::transition::{EffectConfig, EffectKind, TransitionConfig};
use crate::easing::{evaluate_normalized, evaluate_range, progress, CurveKind};
use crate::ui::element::UiElement;

/// Past this much progress a showing element already accepts input.
const INPUT_UNBLOCK_PROGRESS: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Show,
    Hide,
}

impl Direction {
    fn target(self) -> f32 {
        match self {
            Direction::Show => 1.0,
            Direction::Hide => 0.0,
        }
    }
}

/// An in-flight show or hide.
#[derive(Debug, Clone, Copy)]
struct Run {
    direction: Direction,
    /// Delay left before the value starts moving.
    delay: f32,
    elapsed: f32,
    start_value: f32,
}

/// Show/hide state for one element.
#[derive(Debug, Clone)]
pub struct Transition {
    config: TransitionConfig,
    value: f32,
    run: Option<Run>,
    events: Vec<TransitionEvent>,
}

impl Transition {
    /// New transition, fully shown.
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            value: 1.0,
            run: None,
            events: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EaseError> {
        Ok(Self::new(TransitionConfig::from_json(json)?))
    }

    /// Start at `value` instead of fully shown. Clamped to [0, 1].
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = if value.is_nan() { 1.0 } else { value.clamp(0.0, 1.0) };
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn effects(&self) -> &[EffectConfig] {
        &self.config.effects
    }

    /// Effects can be retuned between runs, e.g. a different slide curve per entry.
    pub fn effects_mut(&mut self) -> &mut Vec<EffectConfig> {
        &mut self.config.effects
    }

    pub fn is_showing(&self) -> bool {
        matches!(self.run, Some(Run { direction: Direction::Show, .. }))
    }

    pub fn is_hiding(&self) -> bool {
        matches!(self.run, Some(Run { direction: Direction::Hide, .. }))
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Bring the element in line with the current value: apply effects,
    /// then sync `active` / `blocks_input` if the config manages them.
    pub fn attach(&self, element: &mut UiElement) {
        self.apply(element);
        let shown = self.value > 0.0 || self.is_showing();
        if self.config.auto_activate {
            element.active = shown;
        }
        if self.config.auto_block_input {
            element.blocks_input = shown;
        }
    }

    /// Animate towards fully shown. Cancels a running hide.
    pub fn show(&mut self, element: &mut UiElement) {
        if self.is_hiding() {
            self.run = None;
        }
        if self.value == 1.0 || self.is_showing() {
            return;
        }

        if self.config.auto_activate {
            element.active = true;
        }
        if self.config.auto_block_input {
            // Input comes back once the element is mostly in.
            element.blocks_input = false;
        }

        if !element.active {
            self.set_value(1.0, element);
            return;
        }

        debug!(
            "transition: show from {:.2} (delay {:.2}s)",
            self.value, self.config.delay_before_show
        );
        self.run = Some(Run {
            direction: Direction::Show,
            delay: self.config.delay_before_show,
            elapsed: 0.0,
            start_value: self.value,
        });
    }

    /// Animate towards fully hidden. Cancels a running show.
    pub fn hide(&mut self, element: &mut UiElement) {
        if self.is_showing() {
            self.run = None;
        }
        if self.value == 0.0 || self.is_hiding() {
            return;
        }

        if self.config.auto_block_input {
            element.blocks_input = false;
        }

        if !element.active {
            self.set_value(0.0, element);
            return;
        }

        debug!(
            "transition: hide from {:.2} (delay {:.2}s)",
            self.value, self.config.delay_before_hide
        );
        self.run = Some(Run {
            direction: Direction::Hide,
            delay: self.config.delay_before_hide,
            elapsed: 0.0,
            start_value: self.value,
        });
    }

    /// Jump straight to `value`, cancelling any animation.
    ///
    /// Landing on 1 (or interrupting a show) counts as shown; landing on 0
    /// (or interrupting a hide) counts as hidden.
    pub fn set_value(&mut self, value: f32, element: &mut UiElement) {
        if value.is_nan() {
            warn!("transition: ignoring NaN value");
            return;
        }
        let value = if (0.0..=1.0).contains(&value) {
            value
        } else {
            warn!("transition: value {} clamped to [0, 1]", value);
            value.clamp(0.0, 1.0)
        };
        if self.value == value {
            return;
        }

        if value == 1.0 || self.is_showing() {
            self.finish_show(element);
        } else if value == 0.0 || self.is_hiding() {
            self.finish_hide(element);
        }

        self.run = None;
        self.value = value;
        self.apply(element);
    }

    /// Advance a running show/hide by `dt` seconds and write the result into `element`.
    /// A NaN, infinite or negative `dt` is dropped with a warning.
    pub fn tick(&mut self, dt: f32, element: &mut UiElement) {
        if !dt.is_finite() || dt < 0.0 {
            warn!("transition: ignoring frame delta {}", dt);
            return;
        }
        let Some(mut run) = self.run else {
            return;
        };

        let mut dt = dt;
        if run.delay > 0.0 {
            run.delay -= dt;
            if run.delay > 0.0 {
                self.run = Some(run);
                return;
            }
            dt = -run.delay;
            run.delay = 0.0;
        }

        run.elapsed += dt;
        let p = progress(run.elapsed, self.config.total_time);
        let target = run.direction.target();
        self.value = (run.start_value + (target - run.start_value) * p).clamp(0.0, 1.0);
        self.apply(element);

        if run.direction == Direction::Show
            && self.config.auto_block_input
            && p >= INPUT_UNBLOCK_PROGRESS
        {
            element.blocks_input = true;
        }

        if p < 1.0 {
            self.run = Some(run);
            return;
        }

        self.run = None;
        match run.direction {
            Direction::Show => self.finish_show(element),
            Direction::Hide => self.finish_hide(element),
        }
    }

    /// Drain settled events (`Shown` / `Hidden`) in the order they happened.
    pub fn drain_events(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain(..)
    }

    /// Write every effect for the current value into `element`.
    pub fn apply(&self, element: &mut UiElement) {
        let v = self.value;
        for effect in &self.config.effects {
            match effect.kind {
                // Fade always follows the default curve.
                EffectKind::Fade => element.alpha = evaluate_normalized(v, 1.0, CurveKind::None),
                _ if effect.ease == CurveKind::None => {}
                EffectKind::MoveX => {
                    let hidden = effect.pos + element.size.x * effect.ratio;
                    element.position.x = evaluate_range(v, 1.0, hidden, effect.pos, effect.ease);
                }
                EffectKind::MoveY => {
                    let hidden = effect.pos + element.size.y * effect.ratio;
                    element.position.y = evaluate_range(v, 1.0, hidden, effect.pos, effect.ease);
                }
                EffectKind::ScaleX => {
                    element.scale.x =
                        evaluate_range(v, 1.0, effect.pos + effect.ratio, effect.pos, effect.ease);
                }
                EffectKind::ScaleY => {
                    element.scale.y =
                        evaluate_range(v, 1.0, effect.pos + effect.ratio, effect.pos, effect.ease);
                }
                EffectKind::RotateZ => {
                    element.rotation =
                        evaluate_range(v, 1.0, effect.pos + effect.ratio, effect.pos, effect.ease);
                }
            }
        }
    }

    fn finish_show(&mut self, element: &mut UiElement) {
        debug!("transition: shown");
        self.events.push(TransitionEvent::Shown);
        if self.config.auto_activate {
            element.active = true;
        }
        if self.config.auto_block_input {
            element.blocks_input = true;
        }
    }

    fn finish_hide(&mut self, element: &mut UiElement) {
        debug!("transition: hidden");
        self.events.push(TransitionEvent::Hidden);
        if self.config.auto_activate {
            element.active = false;
        }
        if self.config.auto_block_input {
            element.blocks_input = false;
        }
    }
}
