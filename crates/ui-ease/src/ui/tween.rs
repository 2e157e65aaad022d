// ui/tween.rs
//
// Tween scheduler: animated value transitions by ElementId.
// Samples the easing engine once per tick; holds no curve state of its own.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(element_id, Tween::position(from, to, 0.5, CurveKind::QuadraticOut));
//   tweens.tick(dt, &mut store);  // Advances all tweens, updates elements

use std::collections::HashMap;
use glam::Vec2;
use crate::api::types::ElementId;
use crate::easing::{evaluate_range, evaluate_range_2d, CurveKind};
use crate::ui::element::{ElementStore, UiElement};

/// What property a tween animates.
#[derive(Debug, Clone, Copy)]
pub enum TweenTarget {
    Position { from: Vec2, to: Vec2 },
    PositionX { from: f32, to: f32 },
    PositionY { from: f32, to: f32 },
    /// Degrees about Z.
    Rotation { from: f32, to: f32 },
    Scale { from: Vec2, to: Vec2 },
    ScaleX { from: f32, to: f32 },
    ScaleY { from: f32, to: f32 },
    Alpha { from: f32, to: f32 },
}

impl TweenTarget {
    /// Write the value at `elapsed` of `duration` into the element.
    fn write(&self, element: &mut UiElement, elapsed: f32, duration: f32, curve: CurveKind) {
        let at = |from: f32, to: f32| evaluate_range(elapsed, duration, from, to, curve);
        match *self {
            TweenTarget::Position { from, to } => {
                element.position = evaluate_range_2d(elapsed, duration, from, to, curve);
            }
            TweenTarget::PositionX { from, to } => element.position.x = at(from, to),
            TweenTarget::PositionY { from, to } => element.position.y = at(from, to),
            TweenTarget::Rotation { from, to } => element.rotation = at(from, to),
            TweenTarget::Scale { from, to } => {
                element.scale = evaluate_range_2d(elapsed, duration, from, to, curve);
            }
            TweenTarget::ScaleX { from, to } => element.scale.x = at(from, to),
            TweenTarget::ScaleY { from, to } => element.scale.y = at(from, to),
            TweenTarget::Alpha { from, to } => element.alpha = at(from, to),
        }
    }
}

/// What happens when a tween completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenLoop {
    /// Stop and remove the tween.
    #[default]
    Once,
    /// Restart from the beginning.
    Loop,
    /// Reverse direction (ping-pong).
    PingPong,
}

/// A single tween animation.
#[derive(Debug, Clone)]
pub struct Tween {
    pub target: TweenTarget,
    /// Duration in seconds.
    pub duration: f32,
    /// Seconds to wait before the first sample.
    pub delay: f32,
    /// Elapsed time, not counting the delay.
    pub elapsed: f32,
    pub curve: CurveKind,
    pub loop_mode: TweenLoop,
    /// Whether currently playing (can be paused).
    pub playing: bool,
    /// For ping-pong: current direction (true = forward).
    forward: bool,
    /// Optional callback ID reported by `drain_completed`.
    pub on_complete: Option<u32>,
}

impl Tween {
    pub fn new(target: TweenTarget, duration: f32, curve: CurveKind) -> Self {
        Self {
            target,
            duration,
            delay: 0.0,
            elapsed: 0.0,
            curve,
            loop_mode: TweenLoop::Once,
            playing: true,
            forward: true,
            on_complete: None,
        }
    }

    pub fn position(from: Vec2, to: Vec2, duration: f32, curve: CurveKind) -> Self {
        Self::new(TweenTarget::Position { from, to }, duration, curve)
    }

    pub fn position_x(from: f32, to: f32, duration: f32, curve: CurveKind) -> Self {
        Self::new(TweenTarget::PositionX { from, to }, duration, curve)
    }

    pub fn position_y(from: f32, to: f32, duration: f32, curve: CurveKind) -> Self {
        Self::new(TweenTarget::PositionY { from, to }, duration, curve)
    }

    pub fn rotation(from: f32, to: f32, duration: f32, curve: CurveKind) -> Self {
        Self::new(TweenTarget::Rotation { from, to }, duration, curve)
    }

    pub fn scale(from: Vec2, to: Vec2, duration: f32, curve: CurveKind) -> Self {
        Self::new(TweenTarget::Scale { from, to }, duration, curve)
    }

    pub fn scale_uniform(from: f32, to: f32, duration: f32, curve: CurveKind) -> Self {
        Self::scale(Vec2::splat(from), Vec2::splat(to), duration, curve)
    }

    pub fn scale_x(from: f32, to: f32, duration: f32, curve: CurveKind) -> Self {
        Self::new(TweenTarget::ScaleX { from, to }, duration, curve)
    }

    pub fn scale_y(from: f32, to: f32, duration: f32, curve: CurveKind) -> Self {
        Self::new(TweenTarget::ScaleY { from, to }, duration, curve)
    }

    pub fn alpha(from: f32, to: f32, duration: f32, curve: CurveKind) -> Self {
        Self::new(TweenTarget::Alpha { from, to }, duration, curve)
    }

    /// Fade in from transparent.
    pub fn fade_in(duration: f32, curve: CurveKind) -> Self {
        Self::alpha(0.0, 1.0, duration, curve)
    }

    /// Fade out to transparent.
    pub fn fade_out(duration: f32, curve: CurveKind) -> Self {
        Self::alpha(1.0, 0.0, duration, curve)
    }

    // -- Builder methods --

    pub fn with_loop(mut self, mode: TweenLoop) -> Self {
        self.loop_mode = mode;
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_on_complete(mut self, event_id: u32) -> Self {
        self.on_complete = Some(event_id);
        self
    }

    pub fn paused(mut self) -> Self {
        self.playing = false;
        self
    }

    /// Normalized progress [0, 1]. Zero duration counts as done.
    pub fn progress(&self) -> f32 {
        crate::easing::progress(self.elapsed, self.duration)
    }

    /// Whether the tween has completed (for Once mode).
    pub fn is_complete(&self) -> bool {
        self.loop_mode == TweenLoop::Once && self.elapsed >= self.duration
    }

    /// Advance by `dt`, eating into the delay first. Returns false while still delayed.
    fn advance(&mut self, dt: f32) -> bool {
        if self.delay > 0.0 {
            self.delay -= dt;
            if self.delay > 0.0 {
                return false;
            }
            // Carry the overshoot into the tween proper.
            self.elapsed += -self.delay;
            self.delay = 0.0;
            return true;
        }
        self.elapsed += dt;
        true
    }
}

/// Handle to a tween for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

/// Manages all active tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: HashMap<TweenId, (ElementId, Tween)>,
    next_id: u32,
    /// Completed tween events to be polled.
    completed_events: Vec<u32>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween for an element. Returns a handle for later control.
    pub fn add(&mut self, element: ElementId, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, (element, tween));
        id
    }

    /// Remove a tween by handle.
    pub fn remove(&mut self, id: TweenId) -> bool {
        self.tweens.remove(&id).is_some()
    }

    /// Remove all tweens for an element.
    pub fn remove_element(&mut self, element: ElementId) {
        self.tweens.retain(|_, (e, _)| *e != element);
    }

    pub fn pause(&mut self, id: TweenId) {
        if let Some((_, tween)) = self.tweens.get_mut(&id) {
            tween.playing = false;
        }
    }

    pub fn resume(&mut self, id: TweenId) {
        if let Some((_, tween)) = self.tweens.get_mut(&id) {
            tween.playing = true;
        }
    }

    pub fn pause_all(&mut self) {
        for (_, tween) in self.tweens.values_mut() {
            tween.playing = false;
        }
    }

    pub fn resume_all(&mut self) {
        for (_, tween) in self.tweens.values_mut() {
            tween.playing = true;
        }
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(&id).map(|(_, t)| t)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.tweens.get_mut(&id).map(|(_, t)| t)
    }

    /// Advance all tweens and apply them to elements in the store.
    /// Returns the number of tweens that completed this tick.
    /// A NaN, infinite or negative `dt` is dropped with a warning.
    pub fn tick(&mut self, dt: f32, store: &mut ElementStore) -> usize {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("tweens: ignoring frame delta {}", dt);
            return 0;
        }
        let mut completed = Vec::new();

        for (&id, (element_id, tween)) in self.tweens.iter_mut() {
            if !tween.playing || !tween.advance(dt) {
                continue;
            }

            // Reversed ping-pong legs sample the curve backwards in time.
            let sample_time = if tween.forward {
                tween.elapsed
            } else {
                tween.duration - tween.elapsed
            };

            if let Some(element) = store.get_mut(*element_id) {
                tween.target.write(element, sample_time, tween.duration, tween.curve);
            }

            if tween.elapsed >= tween.duration {
                match tween.loop_mode {
                    TweenLoop::Once => {
                        if let Some(event_id) = tween.on_complete {
                            self.completed_events.push(event_id);
                        }
                        completed.push(id);
                    }
                    TweenLoop::Loop => {
                        tween.elapsed = 0.0;
                    }
                    TweenLoop::PingPong => {
                        tween.elapsed = 0.0;
                        tween.forward = !tween.forward;
                    }
                }
            }
        }

        let count = completed.len();
        for id in completed {
            self.tweens.remove(&id);
        }
        if count > 0 {
            log::debug!("tweens: {} completed, {} active", count, self.tweens.len());
        }

        count
    }

    /// Drain completed tween events.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = u32> + '_ {
        self.completed_events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
        self.completed_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(id: ElementId) -> ElementStore {
        let mut store = ElementStore::new();
        store.spawn(UiElement::new(id));
        store
    }

    #[test]
    fn tween_position() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);
        let mut store = store_with(id);

        tweens.add(id, Tween::position(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0, CurveKind::Linear));

        tweens.tick(0.5, &mut store);
        assert!((store.get(id).unwrap().position.x - 50.0).abs() < 0.01);

        tweens.tick(0.5, &mut store);
        assert!((store.get(id).unwrap().position.x - 100.0).abs() < 0.01);

        assert!(tweens.is_empty());
    }

    #[test]
    fn tween_samples_curve() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);
        let mut store = store_with(id);

        tweens.add(id, Tween::alpha(0.0, 1.0, 0.3, CurveKind::CubicOut));
        tweens.tick(0.15, &mut store);
        assert!((store.get(id).unwrap().alpha - 0.875).abs() < 1e-4);
    }

    #[test]
    fn zero_duration_lands_on_target() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);
        let mut store = store_with(id);

        tweens.add(id, Tween::rotation(0.0, 90.0, 0.0, CurveKind::ElasticOut));
        assert_eq!(tweens.tick(0.016, &mut store), 1);
        assert_eq!(store.get(id).unwrap().rotation, 90.0);
    }

    #[test]
    fn delay_holds_then_carries_over() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);
        let mut store = store_with(id);

        let handle = tweens.add(
            id,
            Tween::position_x(0.0, 10.0, 1.0, CurveKind::Linear).with_delay(0.5),
        );
        tweens.tick(0.25, &mut store);
        assert_eq!(store.get(id).unwrap().position.x, 0.0);
        assert_eq!(tweens.get(handle).unwrap().elapsed, 0.0);

        tweens.tick(0.5, &mut store);
        assert!((tweens.get(handle).unwrap().elapsed - 0.25).abs() < 1e-6);
        assert!((store.get(id).unwrap().position.x - 2.5).abs() < 1e-4);
    }

    #[test]
    fn bad_frame_delta_is_skipped() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);
        let mut store = store_with(id);

        let handle = tweens.add(
            id,
            Tween::position_x(0.0, 10.0, 1.0, CurveKind::Linear).with_delay(0.5),
        );
        assert_eq!(tweens.tick(f32::NAN, &mut store), 0);
        assert_eq!(tweens.tick(-0.25, &mut store), 0);
        assert_eq!(tweens.get(handle).unwrap().delay, 0.5);
        assert_eq!(tweens.get(handle).unwrap().elapsed, 0.0);

        assert_eq!(tweens.tick(2.0, &mut store), 1);
        assert_eq!(store.get(id).unwrap().position.x, 10.0);
        assert!(tweens.is_empty());
    }

    #[test]
    fn tween_loop() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);
        let mut store = store_with(id);

        tweens.add(
            id,
            Tween::position(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0, CurveKind::Linear)
                .with_loop(TweenLoop::Loop),
        );
        tweens.tick(1.0, &mut store);
        assert_eq!(tweens.len(), 1);
    }

    #[test]
    fn tween_ping_pong() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);
        let mut store = store_with(id);

        tweens.add(
            id,
            Tween::position(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0, CurveKind::Linear)
                .with_loop(TweenLoop::PingPong),
        );

        tweens.tick(1.0, &mut store);
        assert!((store.get(id).unwrap().position.x - 100.0).abs() < 0.01);

        tweens.tick(1.0, &mut store);
        assert!(store.get(id).unwrap().position.x.abs() < 0.01);
    }

    #[test]
    fn paused_tween_does_not_advance() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);
        let mut store = store_with(id);

        let handle = tweens.add(id, Tween::fade_out(1.0, CurveKind::Linear).paused());
        tweens.tick(0.5, &mut store);
        assert_eq!(store.get(id).unwrap().alpha, 1.0);

        tweens.resume(handle);
        tweens.tick(0.5, &mut store);
        assert!((store.get(id).unwrap().alpha - 0.5).abs() < 1e-4);
    }

    #[test]
    fn completion_events_drain() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);
        let mut store = store_with(id);

        tweens.add(id, Tween::fade_in(0.1, CurveKind::Linear).with_on_complete(7));
        tweens.add(id, Tween::scale_uniform(1.0, 2.0, 0.1, CurveKind::BackOut));
        assert_eq!(tweens.tick(0.2, &mut store), 2);
        assert_eq!(tweens.drain_completed().collect::<Vec<_>>(), vec![7]);
        assert_eq!(store.get(id).unwrap().scale, Vec2::splat(2.0));
    }

    #[test]
    fn remove_element_tweens() {
        let mut tweens = TweenState::new();
        let id = ElementId(1);

        tweens.add(id, Tween::position(Vec2::ZERO, Vec2::ONE, 1.0, CurveKind::Linear));
        tweens.add(id, Tween::rotation(0.0, 1.0, 1.0, CurveKind::Linear));
        tweens.add(ElementId(2), Tween::fade_in(1.0, CurveKind::Linear));

        assert_eq!(tweens.len(), 3);
        tweens.remove_element(id);
        assert_eq!(tweens.len(), 1);
    }
}
