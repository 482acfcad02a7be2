use alloc::vec::Vec;

use reorderable::{
    DragController, Item, ItemId, MoveOutcome, Point, ReorderError, ReorderOptions, ViewHandle,
    item_at,
};

use crate::SoftwareView;

/// A raw pointer event, before the host knows which item (if any) was pressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

/// What a [`PointerEvent`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    /// A drag session started on this item.
    Pressed(ItemId),
    /// The press hit no item, or a session is already live.
    Missed,
    Moved(MoveOutcome),
    /// `true` if a session ended.
    Released(bool),
}

/// What one [`Controller::frame`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The reorder gate reopened on this frame.
    pub gate_reopened: bool,
    /// Neighbors whose settle transition started on this frame.
    pub settles_started: usize,
}

/// A framework-neutral controller that wraps a [`DragController`] for hosts without native
/// pointer targeting or timers.
///
/// Adapters drive it by calling:
/// - `on_pointer(event, now_ms)` for every raw pointer event (presses are hit-tested against
///   the registered boxes)
/// - `frame(now_ms)` once per frame, which runs both the cool-down timer and the
///   animation-frame callback
#[derive(Debug)]
pub struct Controller<V> {
    inner: DragController<V>,
}

impl<V: ViewHandle> Controller<V> {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            inner: DragController::new(items),
        }
    }

    pub fn with_options(items: Vec<Item>, options: ReorderOptions) -> Self {
        Self {
            inner: DragController::with_options(items, options),
        }
    }

    pub fn from_drag_controller(inner: DragController<V>) -> Self {
        Self { inner }
    }

    pub fn with_on_commit(mut self, on_commit: impl FnMut(&[Item]) + 'static) -> Self {
        self.inner.set_on_commit(on_commit);
        self
    }

    pub fn drag_controller(&self) -> &DragController<V> {
        &self.inner
    }

    pub fn drag_controller_mut(&mut self) -> &mut DragController<V> {
        &mut self.inner
    }

    pub fn into_drag_controller(self) -> DragController<V> {
        self.inner
    }

    pub fn items(&self) -> &[Item] {
        self.inner.items()
    }

    pub fn register(&mut self, item: Item, view: V) -> bool {
        self.inner.register(item, view)
    }

    /// The item whose last captured box strictly contains `(x, y)`.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<ItemId> {
        item_at(self.inner.registry().elements(), Point::new(x, y)).map(|hit| hit.id)
    }

    pub fn on_pointer(
        &mut self,
        event: PointerEvent,
        now_ms: u64,
    ) -> Result<PointerOutcome, ReorderError> {
        match event {
            PointerEvent::Down { x, y } => {
                let pressed = self
                    .hit_test(x, y)
                    .filter(|&id| self.inner.on_pointer_down(id, x, y));
                Ok(pressed.map_or(PointerOutcome::Missed, PointerOutcome::Pressed))
            }
            PointerEvent::Move { x, y } => {
                let outcome = self.inner.on_pointer_move(x, y, now_ms)?;
                Ok(PointerOutcome::Moved(outcome))
            }
            PointerEvent::Up => Ok(PointerOutcome::Released(self.inner.on_pointer_up())),
        }
    }

    /// Runs the cool-down timer and the animation-frame callback for `now_ms`.
    pub fn frame(&mut self, now_ms: u64) -> FrameReport {
        let gate_reopened = self.inner.tick(now_ms);
        let settles_started = if self.inner.needs_animation_frame() {
            self.inner.on_animation_frame()
        } else {
            0
        };
        FrameReport {
            gate_reopened,
            settles_started,
        }
    }
}

impl Controller<SoftwareView> {
    /// Advances every registered [`SoftwareView`] to `now_ms`.
    ///
    /// Returns `true` while any of them is still animating.
    pub fn advance_views(&self, now_ms: u64) -> bool {
        self.inner
            .registry()
            .iter()
            .fold(false, |animating, e| e.view.advance(now_ms) | animating)
    }
}
