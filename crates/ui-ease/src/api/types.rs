/// Unique identifier for a UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Emitted by a transition when it settles at one end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// Value reached 1: fully shown.
    Shown,
    /// Value reached 0: fully hidden.
    Hidden,
}

impl TransitionEvent {
    pub fn name(self) -> &'static str {
        match self {
            TransitionEvent::Shown => "shown",
            TransitionEvent::Hidden => "hidden",
        }
    }
}
