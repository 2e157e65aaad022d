pub mod host;
pub mod runner;

pub use runner::TransitionRunner;

use js_sys::Array;
use wasm_bindgen::prelude::*;

use ui_ease::{CurveKind, TransitionEvent, Vec2};

// Curves cross the boundary as u32 ordinals; see `host` for the lookup.

fn curve(kind: u32) -> Result<CurveKind, JsError> {
    Ok(host::curve_from_host(kind)?)
}

fn event_names(events: &[TransitionEvent]) -> Array {
    events.iter().map(|e| JsValue::from_str(e.name())).collect()
}

/// Install the panic hook and console logger. Call once at startup.
#[wasm_bindgen]
pub fn ease_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("ui-ease: initialized ({} curves)", CurveKind::ALL.len());
}

/// Curve value at `time` of an `end_time` long transition.
#[wasm_bindgen]
pub fn ease_get(time: f32, end_time: f32, kind: u32) -> Result<f32, JsError> {
    Ok(ui_ease::evaluate_normalized(time, end_time, curve(kind)?))
}

#[wasm_bindgen]
pub fn ease_get_range(time: f32, end_time: f32, start: f32, end: f32, kind: u32) -> Result<f32, JsError> {
    Ok(ui_ease::evaluate_range(time, end_time, start, end, curve(kind)?))
}

/// Returns `[x, y]`.
#[wasm_bindgen]
pub fn ease_get_vector2(
    time: f32,
    end_time: f32,
    start_x: f32,
    start_y: f32,
    end_x: f32,
    end_y: f32,
    kind: u32,
) -> Result<Vec<f32>, JsError> {
    let v = ui_ease::evaluate_range_2d(
        time,
        end_time,
        Vec2::new(start_x, start_y),
        Vec2::new(end_x, end_y),
        curve(kind)?,
    );
    Ok(vec![v.x, v.y])
}

/// Baked curve table as interleaved `t, value` floats.
#[wasm_bindgen]
pub fn ease_bake(kind: u32, samples: usize) -> Result<Vec<f32>, JsError> {
    Ok(host::bake_interleaved(kind, samples)?)
}

/// Curve names indexed by ordinal.
#[wasm_bindgen]
pub fn curve_names() -> Array {
    CurveKind::ALL
        .iter()
        .map(|k| JsValue::from_str(k.name()))
        .collect()
}

/// Ordinal for a curve name ("CubicOut", "cubic_out", ...).
#[wasm_bindgen]
pub fn curve_ordinal(name: &str) -> Result<u32, JsError> {
    Ok(name.parse::<CurveKind>()?.ordinal())
}

/// A show/hide transition bound to one element, driven from JS.
///
/// Commands return the names of events that settled (`"shown"`, `"hidden"`).
#[wasm_bindgen]
pub struct UiTransition {
    runner: TransitionRunner,
}

#[wasm_bindgen]
impl UiTransition {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, value: f32) -> Result<UiTransition, JsError> {
        let runner = TransitionRunner::from_json(config_json, value)?;
        Ok(UiTransition { runner })
    }

    pub fn show(&mut self) -> Array {
        event_names(self.runner.show())
    }

    pub fn hide(&mut self) -> Array {
        event_names(self.runner.hide())
    }

    pub fn set_value(&mut self, value: f32) -> Array {
        event_names(self.runner.set_value(value))
    }

    pub fn tick(&mut self, dt: f32) -> Array {
        event_names(self.runner.tick(dt))
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.runner.element_mut().size = Vec2::new(width, height);
        self.runner.refresh();
    }

    pub fn set_active(&mut self, active: bool) {
        self.runner.element_mut().active = active;
    }

    // ---- Element accessors (read by JS after each tick) ----

    pub fn value(&self) -> f32 {
        self.runner.transition().value()
    }

    pub fn is_animating(&self) -> bool {
        self.runner.transition().is_animating()
    }

    pub fn x(&self) -> f32 {
        self.runner.element().position.x
    }

    pub fn y(&self) -> f32 {
        self.runner.element().position.y
    }

    pub fn scale_x(&self) -> f32 {
        self.runner.element().scale.x
    }

    pub fn scale_y(&self) -> f32 {
        self.runner.element().scale.y
    }

    pub fn rotation(&self) -> f32 {
        self.runner.element().rotation
    }

    pub fn alpha(&self) -> f32 {
        self.runner.element().alpha
    }

    pub fn active(&self) -> bool {
        self.runner.element().active
    }

    pub fn blocks_input(&self) -> bool {
        self.runner.element().blocks_input
    }
}
