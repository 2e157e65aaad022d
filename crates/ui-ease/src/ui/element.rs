use glam::Vec2;
use crate::api::types::ElementId;

/// A menu element as the transition code sees it.
///
/// Plain data: tweens and transitions write into it, the caller copies the
/// result onto whatever actually draws the UI.
#[derive(Debug, Clone)]
pub struct UiElement {
    /// Unique identifier.
    pub id: ElementId,
    /// Name for lookups ("window1", "back_button", ...).
    pub name: String,
    /// Local position.
    pub position: Vec2,
    /// Width and height. Move effects slide by multiples of this.
    pub size: Vec2,
    /// Local scale.
    pub scale: Vec2,
    /// Rotation about Z, in degrees.
    pub rotation: f32,
    /// Opacity, 0 transparent to 1 opaque.
    pub alpha: f32,
    /// Whether the element is active (shown in the hierarchy at all).
    pub active: bool,
    /// Whether the element currently accepts pointer input.
    pub blocks_input: bool,
}

impl UiElement {
    /// Create a new 100x100 element at the origin, fully visible.
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            name: String::new(),
            position: Vec2::ZERO,
            size: Vec2::splat(100.0),
            scale: Vec2::ONE,
            rotation: 0.0,
            alpha: 1.0,
            active: true,
            blocks_input: true,
        }
    }

    // -- Builder pattern --

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Flat element storage. Menus hold tens of elements, not thousands.
pub struct ElementStore {
    elements: Vec<UiElement>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(32),
        }
    }

    /// Add an element.
    pub fn spawn(&mut self, element: UiElement) {
        self.elements.push(element);
    }

    /// Remove an element by ID. Returns the removed element if found.
    pub fn despawn(&mut self, id: ElementId) -> Option<UiElement> {
        let idx = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.swap_remove(idx))
    }

    pub fn get(&self, id: ElementId) -> Option<&UiElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut UiElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// First element with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&UiElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UiElement> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut UiElement> {
        self.elements.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}
