use alloc::vec::Vec;

use crate::collision::{Overlap, find_overlap};
use crate::{
    BoundingBox, DragSession, GeometryRegistry, Item, ItemId, Offset, Point, Registration,
    ReorderError, ReorderGate, ReorderModel, ReorderOptions, SettleAnimator, ViewHandle,
};

/// The drag state machine: `Idle` or `Dragging` with exactly one live session.
#[derive(Clone, Debug)]
pub enum DragState<V> {
    Idle,
    Dragging(DragSession<V>),
}

impl<V> Default for DragState<V> {
    fn default() -> Self {
        Self::Idle
    }
}

/// A committed reorder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reorder {
    /// The dragged item.
    pub id: ItemId,
    pub from: usize,
    pub to: usize,
    /// The neighbor whose box the pointer entered.
    pub target: ItemId,
    /// The neighbor's box before the move.
    pub target_box: BoundingBox,
    /// Neighbors that started a settle animation.
    pub settled: usize,
}

/// Result of a pointer-move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No drag session is live.
    Ignored,
    /// The dragged node followed the pointer; no reorder fired.
    Tracked { offset: Offset, gate_open: bool },
    Reordered(Reorder),
}

impl MoveOutcome {
    pub fn reorder(&self) -> Option<&Reorder> {
        match self {
            Self::Reordered(r) => Some(r),
            _ => None,
        }
    }
}

/// Owns the drag session and wires pointer input to the registry, collision scan, model and
/// settle animator.
///
/// This type does not talk to any UI toolkit directly. Adapters drive it by calling:
/// - `register` / `unregister` whenever item nodes are (re)built or removed
/// - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` for pointer input
/// - `tick(now_ms)` when the cool-down deadline (`next_deadline_ms`) passes
/// - `on_animation_frame` on the next paint when `needs_animation_frame` is set
#[derive(Debug)]
pub struct DragController<V> {
    options: ReorderOptions,
    model: ReorderModel,
    registry: GeometryRegistry<V>,
    animator: SettleAnimator<V>,
    state: DragState<V>,
}

impl<V: ViewHandle> DragController<V> {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_options(items, ReorderOptions::default())
    }

    pub fn with_options(items: Vec<Item>, options: ReorderOptions) -> Self {
        rdebug!(
            count = items.len(),
            cooldown_ms = options.cooldown_ms,
            "DragController::new"
        );
        Self {
            model: ReorderModel::new(items),
            registry: GeometryRegistry::new(),
            animator: SettleAnimator::new(options.settle_duration_ms),
            state: DragState::Idle,
            options,
        }
    }

    pub fn with_on_commit(mut self, on_commit: impl FnMut(&[Item]) + 'static) -> Self {
        self.model.set_on_commit(on_commit);
        self
    }

    pub fn set_on_commit(&mut self, on_commit: impl FnMut(&[Item]) + 'static) {
        self.model.set_on_commit(on_commit);
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ReorderOptions) {
        self.animator.set_duration_ms(options.settle_duration_ms);
        self.options = options;
    }

    pub fn items(&self) -> &[Item] {
        self.model.items()
    }

    pub fn model(&self) -> &ReorderModel {
        &self.model
    }

    pub fn registry(&self) -> &GeometryRegistry<V> {
        &self.registry
    }

    pub fn animator(&self) -> &SettleAnimator<V> {
        &self.animator
    }

    pub fn state(&self) -> &DragState<V> {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession<V>> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Whether pointer move/up events should be routed to this controller.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Attach hook: the host rendered (or re-rendered) `item` as `view`.
    ///
    /// While dragging, the dragged item only swaps its node: the session re-applies its drag
    /// styling to the new node and keeps it under the pointer, and the registry keeps the
    /// drag-time box. Any other item whose box changed settles into its new slot.
    ///
    /// Returns `false` if `item` is not part of the list.
    pub fn register(&mut self, item: Item, view: V) -> bool {
        if !self.model.contains(item.id) {
            rwarn!(id = item.id, "register: item is not in the list");
            return false;
        }

        if let DragState::Dragging(session) = &mut self.state {
            if session.id() == item.id {
                let slot = session.slot();
                session.rebind(view.clone());
                if !self.registry.rebind_view(item.id, view.clone()) {
                    // Re-attached after a detach: carry the session's box instead of measuring.
                    self.registry.insert(item, view, slot);
                    self.registry.resync(self.model.items());
                }
                return true;
            }
        }

        let dragging = self.is_dragging();
        let handle = view.clone();
        match self.registry.register(item, view) {
            Registration::Inserted { .. } => {
                self.registry.resync(self.model.items());
            }
            registration @ Registration::Updated { .. } => {
                if let Some((before, after)) = registration.displacement() {
                    if dragging && self.options.settle {
                        self.animator.play(&handle, before, after);
                    }
                }
            }
        }
        true
    }

    /// Detach hook. The dragged item keeps its session; pointer-up still cleans it up.
    pub fn unregister(&mut self, id: ItemId) -> bool {
        self.registry.unregister(id).is_some()
    }

    /// The host replaced its list. Elements of removed items are forgotten, and a session whose
    /// item was removed ends.
    pub fn sync_items(&mut self, items: Vec<Item>) {
        self.model.set_items(items);
        self.registry.resync(self.model.items());

        let orphaned = self
            .session()
            .is_some_and(|session| !self.model.contains(session.id()));
        if orphaned {
            rdebug!("sync_items: dragged item removed, ending session");
            self.end_session();
        }
    }

    /// `Idle → Dragging`. A press on an item that is not rendered yet, or while a session is
    /// already live, is ignored.
    pub fn on_pointer_down(&mut self, id: ItemId, x: f32, y: f32) -> bool {
        if self.is_dragging() {
            return false;
        }
        if !self.registry.contains(id) {
            return false;
        }
        self.registry.snapshot_all();
        let Some(element) = self.registry.get(id) else {
            return false;
        };
        let session = DragSession::start(
            element.item.clone(),
            element.view.clone(),
            Point::new(x, y),
            element.bounds,
        );
        self.state = DragState::Dragging(session);
        rdebug!(id, x, y, "drag session started");
        true
    }

    /// Tracks the pointer and, when the gate is open, commits at most one reorder.
    ///
    /// An `Err` is an internal-consistency fault; the session has already been torn down.
    pub fn on_pointer_move(
        &mut self,
        x: f32,
        y: f32,
        now_ms: u64,
    ) -> Result<MoveOutcome, ReorderError> {
        let DragState::Dragging(session) = core::mem::take(&mut self.state) else {
            return Ok(MoveOutcome::Ignored);
        };

        let (session, outcome) = self.drag_move(session, Point::new(x, y), now_ms);
        match outcome {
            Ok(outcome) => {
                self.state = DragState::Dragging(session);
                Ok(outcome)
            }
            Err(err) => {
                rwarn!(error = %err, "drag session aborted");
                session.finish();
                Err(err)
            }
        }
    }

    /// `Dragging → Idle`. Always clears the dragged node's overrides.
    pub fn on_pointer_up(&mut self) -> bool {
        self.end_session()
    }

    /// Ends the session without a drop (focus loss, escape, ...). Same effect as pointer-up.
    pub fn cancel(&mut self) -> bool {
        self.end_session()
    }

    /// Cool-down timer callback. Returns `true` if the reorder gate reopened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match &mut self.state {
            DragState::Dragging(session) => session.poll_gate(now_ms),
            DragState::Idle => false,
        }
    }

    /// When the host should call `tick`, if a cool-down is running.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.session().and_then(|s| s.gate().reopen_at_ms())
    }

    /// The gate of the live session, if any.
    pub fn gate(&self) -> Option<ReorderGate> {
        self.session().map(|s| s.gate())
    }

    pub fn needs_animation_frame(&self) -> bool {
        self.animator.pending() > 0
    }

    /// Animation-frame callback: starts the queued settle transitions.
    pub fn on_animation_frame(&mut self) -> usize {
        self.animator.on_animation_frame()
    }

    fn end_session(&mut self) -> bool {
        match core::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                rdebug!(
                    id = session.id(),
                    commits = session.commits(),
                    "drag session ended"
                );
                session.finish();
                true
            }
            DragState::Idle => false,
        }
    }

    fn drag_move(
        &mut self,
        mut session: DragSession<V>,
        pointer: Point,
        now_ms: u64,
    ) -> (DragSession<V>, Result<MoveOutcome, ReorderError>) {
        session.poll_gate(now_ms);
        let offset = session.track(pointer);
        rtrace!(x = pointer.x, y = pointer.y, dx = offset.dx, dy = offset.dy, "drag move");

        if !session.gate().is_open() {
            return (
                session,
                Ok(MoveOutcome::Tracked {
                    offset,
                    gate_open: false,
                }),
            );
        }

        let dragged = session.id();
        if self.options.resnapshot_before_scan {
            self.registry.refresh_except(dragged);
        }
        let Some(hit) = find_overlap(self.registry.elements(), dragged, pointer) else {
            return (
                session,
                Ok(MoveOutcome::Tracked {
                    offset,
                    gate_open: true,
                }),
            );
        };

        let result = self.commit_reorder(&mut session, hit, now_ms);
        (session, result.map(MoveOutcome::Reordered))
    }

    fn commit_reorder(
        &mut self,
        session: &mut DragSession<V>,
        hit: Overlap,
        now_ms: u64,
    ) -> Result<Reorder, ReorderError> {
        let id = session.id();
        let from = self.model.index_of(id).ok_or(ReorderError::UnknownItem(id))?;
        let to = self
            .model
            .index_of(hit.id)
            .ok_or(ReorderError::UnknownItem(hit.id))?;

        session.close_gate(now_ms, self.options.cooldown_ms);
        self.model.move_to(id, to)?;

        let untracked = self.registry.resync(self.model.items());
        if untracked > 0 {
            return Err(ReorderError::RegistryOutOfSync {
                registry: self.registry.len(),
                list: self.model.len(),
            });
        }

        session.reanchor();
        let settled = self.settle_neighbors(id);
        rdebug!(id, from, to, target = hit.id, settled, "reorder committed");

        Ok(Reorder {
            id,
            from,
            to,
            target: hit.id,
            target_box: hit.bounds,
            settled,
        })
    }

    /// Re-measures everything but the dragged node and animates the ones that moved.
    fn settle_neighbors(&mut self, dragged: ItemId) -> usize {
        let changes = self.registry.refresh_except(dragged);
        if !self.options.settle {
            return 0;
        }
        let mut settled = 0usize;
        for change in &changes {
            if let Some((before, after)) = change.displacement() {
                if self.animator.play(&change.view, before, after) {
                    settled += 1;
                }
            }
        }
        settled
    }
}
