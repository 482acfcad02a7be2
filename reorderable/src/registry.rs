use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{BoundingBox, Item, ItemId, ViewHandle};

/// A rendered item: its data, the host node showing it, and the node's last captured box.
#[derive(Clone, Debug)]
pub struct TrackedElement<V> {
    pub item: Item,
    pub view: V,
    /// `None` until measured, or when the node reported itself detached.
    pub bounds: Option<BoundingBox>,
}

impl<V> TrackedElement<V> {
    pub fn id(&self) -> ItemId {
        self.item.id
    }
}

/// What [`GeometryRegistry::register`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Registration {
    Inserted {
        bounds: Option<BoundingBox>,
    },
    Updated {
        before: Option<BoundingBox>,
        after: Option<BoundingBox>,
    },
}

impl Registration {
    /// The `(before, after)` boxes when an already tracked element moved.
    pub fn displacement(&self) -> Option<(BoundingBox, BoundingBox)> {
        match *self {
            Self::Updated {
                before: Some(before),
                after: Some(after),
            } if before != after => Some((before, after)),
            _ => None,
        }
    }
}

/// An element whose box changed during [`GeometryRegistry::refresh_except`].
#[derive(Clone, Debug)]
pub struct BoxChange<V> {
    pub id: ItemId,
    pub view: V,
    pub before: Option<BoundingBox>,
    pub after: Option<BoundingBox>,
}

impl<V> BoxChange<V> {
    pub fn displacement(&self) -> Option<(BoundingBox, BoundingBox)> {
        match (self.before, self.after) {
            (Some(before), Some(after)) => Some((before, after)),
            _ => None,
        }
    }
}

/// Last-known geometry of every rendered item, in logical list order.
///
/// The registry only learns about nodes through `register`; it never walks the host's tree.
#[derive(Clone, Debug)]
pub struct GeometryRegistry<V> {
    elements: Vec<TrackedElement<V>>,
}

impl<V> Default for GeometryRegistry<V> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<V: ViewHandle> GeometryRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Tracked elements in logical order.
    pub fn elements(&self) -> &[TrackedElement<V>] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedElement<V>> {
        self.elements.iter()
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.elements.iter().position(|e| e.item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&TrackedElement<V>> {
        self.elements.iter().find(|e| e.item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// The last captured box, or `None` if the item is not (yet) rendered.
    pub fn box_of(&self, id: ItemId) -> Option<BoundingBox> {
        self.get(id).and_then(|e| e.bounds)
    }

    /// Records the node for `item`, measuring it now.
    ///
    /// New elements are appended; callers that care about order follow up with `resync`.
    pub fn register(&mut self, item: Item, view: V) -> Registration {
        let after = view.bounding_box();
        match self.elements.iter_mut().find(|e| e.item.id == item.id) {
            Some(element) => {
                let before = element.bounds;
                element.item = item;
                element.view = view;
                element.bounds = after;
                Registration::Updated { before, after }
            }
            None => {
                rtrace!(id = item.id, "GeometryRegistry::register inserted");
                self.elements.push(TrackedElement {
                    item,
                    view,
                    bounds: after,
                });
                Registration::Inserted { bounds: after }
            }
        }
    }

    /// Records `view` for `item` with an already known box instead of measuring it.
    ///
    /// Returns `false` if `item` is already tracked.
    pub fn insert(&mut self, item: Item, view: V, bounds: Option<BoundingBox>) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.elements.push(TrackedElement { item, view, bounds });
        true
    }

    /// Swaps the node for `id` without touching its stored box.
    ///
    /// Returns `false` if `id` is not tracked.
    pub fn rebind_view(&mut self, id: ItemId, view: V) -> bool {
        match self.elements.iter_mut().find(|e| e.item.id == id) {
            Some(element) => {
                element.view = view;
                true
            }
            None => false,
        }
    }

    pub fn unregister(&mut self, id: ItemId) -> Option<TrackedElement<V>> {
        let index = self.index_of(id)?;
        Some(self.elements.remove(index))
    }

    /// Re-measures every tracked node.
    pub fn snapshot_all(&mut self) {
        for element in &mut self.elements {
            element.bounds = element.view.bounding_box();
        }
    }

    /// Re-measures every node except `skip` and returns the elements whose box changed.
    pub fn refresh_except(&mut self, skip: ItemId) -> Vec<BoxChange<V>> {
        let mut changes = Vec::new();
        for element in self.elements.iter_mut().filter(|e| e.item.id != skip) {
            let after = element.view.bounding_box();
            if after == element.bounds {
                continue;
            }
            changes.push(BoxChange {
                id: element.item.id,
                view: element.view.clone(),
                before: element.bounds,
                after,
            });
            element.bounds = after;
        }
        changes
    }

    /// Reorders the elements to follow `order` and refreshes their item data.
    ///
    /// Elements whose item is no longer listed are dropped. Returns the number of listed items
    /// that have no tracked element.
    pub fn resync(&mut self, order: &[Item]) -> usize {
        let mut by_id: BTreeMap<ItemId, TrackedElement<V>> =
            self.elements.drain(..).map(|e| (e.item.id, e)).collect();

        let mut untracked = 0usize;
        for item in order {
            match by_id.remove(&item.id) {
                Some(mut element) => {
                    element.item = item.clone();
                    self.elements.push(element);
                }
                None => untracked += 1,
            }
        }

        if !by_id.is_empty() {
            rdebug!(
                dropped = by_id.len(),
                "GeometryRegistry::resync dropped stale elements"
            );
        }
        untracked
    }
}
