use serde::{Deserialize, Serialize};

use crate::api::error::EaseError;
use crate::easing::CurveKind;

/// Allowed range for `total_time`, in seconds.
pub const TOTAL_TIME_RANGE: (f32, f32) = (0.05, 10.0);
/// Allowed range for show/hide delays, in seconds.
pub const DELAY_RANGE: (f32, f32) = (0.0, 10.0);

/// Which element property an effect drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Alpha fade.
    #[default]
    Fade,
    /// Horizontal slide.
    MoveX,
    /// Vertical slide.
    MoveY,
    ScaleX,
    ScaleY,
    /// Rotation about Z.
    RotateZ,
}

/// One effect of a show/hide transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    /// Resting value: where the property ends up when fully shown.
    pub pos: f32,
    /// Offset of the hidden state from `pos`. For moves this is in element
    /// widths/heights (`-1` slides in from the left or bottom), otherwise in
    /// property units.
    pub ratio: f32,
    /// Curve for this effect. `None` disables every effect except `Fade`.
    pub ease: CurveKind,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            kind: EffectKind::Fade,
            pos: 0.0,
            ratio: -1.0,
            ease: CurveKind::CubicOut,
        }
    }
}

impl EffectConfig {
    pub fn new(kind: EffectKind, pos: f32, ratio: f32, ease: CurveKind) -> Self {
        Self { kind, pos, ratio, ease }
    }

    pub fn fade() -> Self {
        Self::default()
    }
}

/// Configuration of a show/hide transition.
/// Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Seconds to go fully in or fully out (default: 0.3).
    pub total_time: f32,
    pub effects: Vec<EffectConfig>,
    /// Seconds to wait after `show()` before animating.
    pub delay_before_show: f32,
    /// Seconds to wait after `hide()` before animating.
    pub delay_before_hide: f32,
    /// Toggle `active` along with show/hide.
    pub auto_activate: bool,
    /// Toggle `blocks_input` along with show/hide.
    pub auto_block_input: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            total_time: 0.3,
            effects: Vec::new(),
            delay_before_show: 0.0,
            delay_before_hide: 0.0,
            auto_activate: false,
            auto_block_input: true,
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EaseError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, EaseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_effect(mut self, effect: EffectConfig) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_total_time(mut self, total_time: f32) -> Self {
        self.total_time = total_time;
        self
    }

    pub fn with_delays(mut self, before_show: f32, before_hide: f32) -> Self {
        self.delay_before_show = before_show;
        self.delay_before_hide = before_hide;
        self
    }

    pub fn with_auto_activate(mut self, on: bool) -> Self {
        self.auto_activate = on;
        self
    }

    pub fn with_auto_block_input(mut self, on: bool) -> Self {
        self.auto_block_input = on;
        self
    }

    /// Check ranges. Called by `from_json`; call it yourself for configs built in code.
    pub fn validate(&self) -> Result<(), EaseError> {
        check_range("total_time", self.total_time, TOTAL_TIME_RANGE)?;
        check_range("delay_before_show", self.delay_before_show, DELAY_RANGE)?;
        check_range("delay_before_hide", self.delay_before_hide, DELAY_RANGE)?;
        for (i, effect) in self.effects.iter().enumerate() {
            if !effect.pos.is_finite() || !effect.ratio.is_finite() {
                return Err(EaseError::InvalidConfig(format!(
                    "effect {} ({:?}) has a non-finite pos or ratio",
                    i, effect.kind
                )));
            }
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f32, (min, max): (f32, f32)) -> Result<(), EaseError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(EaseError::InvalidConfig(format!(
            "{} = {} is outside [{}, {}]",
            field, value, min, max
        )))
    }
}
