use crate::{BoundingBox, Item, ItemId, Offset, Point, ViewHandle};

/// Rate limit on collision-triggered commits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReorderGate {
    #[default]
    Open,
    CoolingDown {
        reopen_at_ms: u64,
    },
}

impl ReorderGate {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn reopen_at_ms(&self) -> Option<u64> {
        match *self {
            Self::Open => None,
            Self::CoolingDown { reopen_at_ms } => Some(reopen_at_ms),
        }
    }

    fn close(&mut self, now_ms: u64, cooldown_ms: u64) {
        *self = Self::CoolingDown {
            reopen_at_ms: now_ms.saturating_add(cooldown_ms),
        };
    }

    /// Reopens the gate once its deadline passed. Returns `true` if it just reopened.
    fn poll(&mut self, now_ms: u64) -> bool {
        match *self {
            Self::CoolingDown { reopen_at_ms } if now_ms >= reopen_at_ms => {
                *self = Self::Open;
                true
            }
            _ => false,
        }
    }
}

/// State of one press-drag-release interaction.
///
/// The session owns a handle to the dragged node and is the only writer of its manual
/// overrides (translation, elevation); [`DragSession::finish`] removes them.
#[derive(Clone, Debug)]
pub struct DragSession<V> {
    item: Item,
    view: V,
    origin: Point,
    pointer: Point,
    /// Untransformed box of the dragged node; the translation is relative to it.
    slot: Option<BoundingBox>,
    gate: ReorderGate,
    tracking: bool,
    commits: usize,
}

impl<V: ViewHandle> DragSession<V> {
    pub(crate) fn start(item: Item, view: V, pointer: Point, slot: Option<BoundingBox>) -> Self {
        Self {
            item,
            view,
            origin: pointer,
            pointer,
            slot,
            gate: ReorderGate::Open,
            tracking: false,
            commits: 0,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// The anchor the drag translation is measured from.
    pub fn pointer_origin(&self) -> Point {
        self.origin
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// The laid-out box of the dragged node, without the drag translation.
    pub fn slot(&self) -> Option<BoundingBox> {
        self.slot
    }

    /// Where the dragged node is drawn.
    pub fn visual_box(&self) -> Option<BoundingBox> {
        self.slot.map(|slot| slot.translated(self.offset()))
    }

    pub fn gate(&self) -> ReorderGate {
        self.gate
    }

    /// Reorders committed during this session.
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Current translation of the dragged node.
    pub fn offset(&self) -> Offset {
        self.pointer - self.origin
    }

    pub(crate) fn poll_gate(&mut self, now_ms: u64) -> bool {
        self.gate.poll(now_ms)
    }

    pub(crate) fn close_gate(&mut self, now_ms: u64, cooldown_ms: u64) {
        self.gate.close(now_ms, cooldown_ms);
        self.commits += 1;
    }

    /// Moves the dragged node 1:1 with the pointer.
    pub(crate) fn track(&mut self, pointer: Point) -> Offset {
        self.pointer = pointer;
        self.tracking = true;
        self.apply_overrides();
        self.offset()
    }

    /// Re-measures the dragged node's slot and shifts the anchor by however far the slot moved,
    /// so the node stays where it is drawn, under the pointer.
    pub(crate) fn reanchor(&mut self) {
        self.view.set_transition_duration(None);
        self.view.clear_transform();
        let laid_out = self.view.bounding_box();

        if let (Some(before), Some(after)) = (self.slot, laid_out) {
            let shift = after.displacement_from(&before);
            self.origin = Point::new(self.origin.x - shift.dx, self.origin.y - shift.dy);
        }
        if laid_out.is_some() {
            self.slot = laid_out;
        }
        if self.tracking {
            self.apply_overrides();
        }
    }

    /// Adopts a node the host rebuilt for the dragged item.
    pub(crate) fn rebind(&mut self, view: V) {
        self.view = view;
        self.reanchor();
    }

    /// Removes every manual override from the dragged node and ends the session.
    pub(crate) fn finish(self) -> Item {
        self.view.clear_transform();
        self.view.set_elevated(false);
        self.item
    }

    fn apply_overrides(&self) {
        let offset = self.offset();
        self.view.set_transition_duration(None);
        self.view.set_transform(offset.dx, offset.dy);
        self.view.set_elevated(true);
    }
}
