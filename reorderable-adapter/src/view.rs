use alloc::rc::Rc;
use core::cell::RefCell;

use reorderable::{BoundingBox, Offset, ViewHandle};

use crate::{Easing, Tween};

#[derive(Clone, Debug, Default)]
struct NodeState {
    layout: Option<BoundingBox>,
    /// The transform most recently written.
    target: Offset,
    /// The transform currently painted.
    displayed: Offset,
    transition_ms: Option<u32>,
    elevated: bool,
    /// A transitioned write waiting for the next `advance` to learn its start time.
    pending_ms: Option<u32>,
    tween: Option<Tween>,
}

/// An in-memory view node for hosts that paint items themselves (TUI, canvas, immediate-mode
/// GUIs).
///
/// The host writes the laid-out slot with [`SoftwareView::set_layout`], calls
/// [`SoftwareView::advance`] once per frame, and paints the item at
/// [`SoftwareView::paint_box`]. Transform writes made while a transition duration is set glide
/// there with a tween; writes without one apply immediately, like a style change with
/// `transition: none`.
///
/// Clones share the same node.
#[derive(Clone, Debug)]
pub struct SoftwareView {
    state: Rc<RefCell<NodeState>>,
    easing: Easing,
}

impl SoftwareView {
    pub fn new(layout: BoundingBox) -> Self {
        Self {
            state: Rc::new(RefCell::new(NodeState {
                layout: Some(layout),
                ..NodeState::default()
            })),
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn set_layout(&self, layout: BoundingBox) {
        self.state.borrow_mut().layout = Some(layout);
    }

    /// Marks the node as removed by the host; it stops reporting a box.
    pub fn detach(&self) {
        self.state.borrow_mut().layout = None;
    }

    pub fn is_attached(&self) -> bool {
        self.state.borrow().layout.is_some()
    }

    pub fn layout(&self) -> Option<BoundingBox> {
        self.state.borrow().layout
    }

    /// The painted translation.
    pub fn offset(&self) -> Offset {
        self.state.borrow().displayed
    }

    /// The translation the node is heading to.
    pub fn target_offset(&self) -> Offset {
        self.state.borrow().target
    }

    pub fn paint_box(&self) -> Option<BoundingBox> {
        let s = self.state.borrow();
        s.layout.map(|b| b.translated(s.displayed))
    }

    pub fn is_elevated(&self) -> bool {
        self.state.borrow().elevated
    }

    pub fn transition_ms(&self) -> Option<u32> {
        self.state.borrow().transition_ms
    }

    pub fn is_animating(&self) -> bool {
        let s = self.state.borrow();
        s.pending_ms.is_some() || s.tween.is_some()
    }

    /// Advances any running transition to `now_ms`.
    ///
    /// Returns `true` while the node is still animating.
    pub fn advance(&self, now_ms: u64) -> bool {
        let mut s = self.state.borrow_mut();
        if let Some(duration_ms) = s.pending_ms.take() {
            let target = s.target;
            let tween = match s.tween {
                Some(mut running) => {
                    running.retarget(now_ms, target, duration_ms as u64);
                    running
                }
                None => Tween::new(s.displayed, target, now_ms, duration_ms as u64, self.easing),
            };
            s.tween = Some(tween);
        }

        let Some(tween) = s.tween else {
            return false;
        };
        if tween.is_done(now_ms) {
            s.displayed = tween.to;
            s.tween = None;
            return false;
        }
        s.displayed = tween.sample(now_ms);
        true
    }

    fn write_transform(&self, offset: Offset) {
        let mut s = self.state.borrow_mut();
        s.target = offset;
        match s.transition_ms {
            Some(duration_ms) if duration_ms > 0 => s.pending_ms = Some(duration_ms),
            _ => {
                s.displayed = offset;
                s.pending_ms = None;
                s.tween = None;
            }
        }
    }
}

impl ViewHandle for SoftwareView {
    fn bounding_box(&self) -> Option<BoundingBox> {
        self.paint_box()
    }

    fn set_transform(&self, dx: f32, dy: f32) {
        self.write_transform(Offset::new(dx, dy));
    }

    fn clear_transform(&self) {
        self.write_transform(Offset::ZERO);
    }

    fn set_transition_duration(&self, duration_ms: Option<u32>) {
        let mut s = self.state.borrow_mut();
        s.transition_ms = duration_ms;
        if duration_ms.is_none() {
            // Dropping the transition snaps to the target.
            s.displayed = s.target;
            s.pending_ms = None;
            s.tween = None;
        }
    }

    fn set_elevated(&self, elevated: bool) {
        self.state.borrow_mut().elevated = elevated;
    }
}
