use crate::BoundingBox;

/// The capability a host grants the engine for each rendered item.
///
/// A `ViewHandle` is a cheap, clonable reference to a node owned by the host (a DOM element,
/// a retained widget, or the in-memory `SoftwareView` from `reorderable-adapter`). The
/// engine never assumes a handle outlives a host re-render: hosts re-`register` items whenever
/// they rebuild their nodes.
///
/// All methods take `&self`; implementations on detached nodes should silently ignore writes.
pub trait ViewHandle: Clone {
    /// The node's current screen-space box, including any transform the engine applied.
    ///
    /// Returns `None` when the node is no longer attached.
    fn bounding_box(&self) -> Option<BoundingBox>;

    /// Translates the node by `(dx, dy)` relative to its laid-out position.
    fn set_transform(&self, dx: f32, dy: f32);

    /// Resets the node's translation to none.
    fn clear_transform(&self);

    /// Sets how long subsequent transform changes take to play, or `None` for instant.
    fn set_transition_duration(&self, duration_ms: Option<u32>);

    /// Raises the node above its siblings (and positions it so it can move freely), or
    /// restores default stacking.
    fn set_elevated(&self, elevated: bool);
}
