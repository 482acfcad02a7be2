use crate::{BoundingBox, ItemId, Point, TrackedElement};

/// A tracked element hit by the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    /// Position in the scanned slice.
    pub index: usize,
    pub id: ItemId,
    pub bounds: BoundingBox,
}

/// Finds the first element, in list order, whose box strictly contains `pointer`, skipping the
/// dragged item.
///
/// Elements without a measured box never match. The slice is borrowed for the whole scan, so
/// the caller performs any reorder afterwards.
pub fn find_overlap<V>(
    elements: &[TrackedElement<V>],
    dragged: ItemId,
    pointer: Point,
) -> Option<Overlap> {
    scan(elements, Some(dragged), pointer)
}

/// Finds the element under `pointer` (strict containment), e.g. to resolve a raw press.
pub fn item_at<V>(elements: &[TrackedElement<V>], pointer: Point) -> Option<Overlap> {
    scan(elements, None, pointer)
}

fn scan<V>(
    elements: &[TrackedElement<V>],
    skip: Option<ItemId>,
    pointer: Point,
) -> Option<Overlap> {
    elements
        .iter()
        .enumerate()
        .filter(|(_, e)| Some(e.item.id) != skip)
        .find_map(|(index, e)| {
            let bounds = e.bounds?;
            bounds.contains(pointer).then_some(Overlap {
                index,
                id: e.item.id,
                bounds,
            })
        })
}
