use ui_ease::{EaseError, ElementId, Transition, TransitionConfig, TransitionEvent, UiElement};

/// One element plus its show/hide transition, owned together.
///
/// The browser side cannot hold Rust borrows across calls, so the runner
/// keeps the element and hands back plain values. `UiTransition` in
/// `lib.rs` wraps this for `#[wasm_bindgen]`.
pub struct TransitionRunner {
    transition: Transition,
    element: UiElement,
    /// Events settled during the last tick or command.
    events: Vec<TransitionEvent>,
}

impl TransitionRunner {
    /// Build a runner starting at `value` (0 hidden, 1 shown) and sync the element to it.
    pub fn new(config: TransitionConfig, value: f32) -> Self {
        let transition = Transition::new(config).with_value(value);
        let mut element = UiElement::new(ElementId(0));
        transition.attach(&mut element);
        Self {
            transition,
            element,
            events: Vec::new(),
        }
    }

    pub fn from_json(json: &str, value: f32) -> Result<Self, EaseError> {
        Ok(Self::new(TransitionConfig::from_json(json)?, value))
    }

    pub fn show(&mut self) -> &[TransitionEvent] {
        self.transition.show(&mut self.element);
        self.collect_events()
    }

    pub fn hide(&mut self) -> &[TransitionEvent] {
        self.transition.hide(&mut self.element);
        self.collect_events()
    }

    pub fn set_value(&mut self, value: f32) -> &[TransitionEvent] {
        self.transition.set_value(value, &mut self.element);
        self.collect_events()
    }

    /// Run one frame. Returns the events that settled during it.
    pub fn tick(&mut self, dt: f32) -> &[TransitionEvent] {
        self.transition.tick(dt, &mut self.element);
        self.collect_events()
    }

    /// Re-apply effects after the element was resized from outside.
    pub fn refresh(&mut self) {
        self.transition.apply(&mut self.element);
    }

    pub fn element(&self) -> &UiElement {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut UiElement {
        &mut self.element
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    fn collect_events(&mut self) -> &[TransitionEvent] {
        self.events.clear();
        self.events.extend(self.transition.drain_events());
        &self.events
    }
}
