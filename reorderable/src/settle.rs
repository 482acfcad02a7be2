use alloc::vec::Vec;

use crate::{BoundingBox, ViewHandle};

/// Plays FLIP settle transitions for nodes displaced by someone else's drag.
///
/// `play` applies the inverted offset right away; the host then calls `on_animation_frame` on
/// its next paint, which enables the transition and releases the offset so the node glides
/// into its new slot. Animations are not tied to a drag session and finish on their own.
#[derive(Clone, Debug)]
pub struct SettleAnimator<V> {
    duration_ms: u32,
    pending: Vec<V>,
}

impl<V: ViewHandle> SettleAnimator<V> {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            pending: Vec::new(),
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    /// Nodes waiting for the next animation frame.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Inverts `view` back to `before` while it is laid out at `after`.
    ///
    /// Returns `false` (and queues nothing) when the node did not move.
    pub fn play(&mut self, view: &V, before: BoundingBox, after: BoundingBox) -> bool {
        let invert = after.displacement_from(&before);
        if invert.is_zero() {
            return false;
        }
        rtrace!(dx = invert.dx, dy = invert.dy, "SettleAnimator::play");
        view.set_transition_duration(None);
        view.set_transform(invert.dx, invert.dy);
        self.pending.push(view.clone());
        true
    }

    /// Releases every queued node towards zero offset with the settle transition enabled.
    ///
    /// Returns the number of nodes released.
    pub fn on_animation_frame(&mut self) -> usize {
        let released = self.pending.len();
        for view in self.pending.drain(..) {
            view.set_transition_duration(Some(self.duration_ms));
            view.clear_transform();
        }
        released
    }
}
