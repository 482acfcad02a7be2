use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{Item, ItemId, ReorderError};

/// The host's `commit(new_order)` hook, called once per successful move with the full order.
pub type CommitCallback = Box<dyn FnMut(&[Item])>;

/// The engine's mirror of the host-owned item list.
pub struct ReorderModel {
    items: Vec<Item>,
    on_commit: Option<CommitCallback>,
    commits: u64,
}

impl ReorderModel {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            on_commit: None,
            commits: 0,
        }
    }

    pub fn with_on_commit(mut self, on_commit: impl FnMut(&[Item]) + 'static) -> Self {
        self.on_commit = Some(Box::new(on_commit));
        self
    }

    pub fn set_on_commit(&mut self, on_commit: impl FnMut(&[Item]) + 'static) {
        self.on_commit = Some(Box::new(on_commit));
    }

    pub fn clear_on_commit(&mut self) {
        self.on_commit = None;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|it| it.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index_of(id).is_some()
    }

    /// Number of commits issued since creation.
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    /// Replaces the mirrored list (the host added, removed or replaced items). Does not commit.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Moves `id` to `target`, shifting every item in between by one slot, then commits.
    ///
    /// Returns `Ok(false)` without committing when the item is already at `target`.
    pub fn move_to(&mut self, id: ItemId, target: usize) -> Result<bool, ReorderError> {
        let from = self.index_of(id).ok_or(ReorderError::UnknownItem(id))?;
        let len = self.items.len();
        if target >= len {
            return Err(ReorderError::TargetOutOfRange { target, len });
        }
        if from == target {
            return Ok(false);
        }

        if from < target {
            self.items[from..=target].rotate_left(1);
        } else {
            self.items[target..=from].rotate_right(1);
        }
        debug_assert_eq!(self.items.len(), len, "move_to changed the list length");

        self.commits = self.commits.saturating_add(1);
        rdebug!(id, from, to = target, "ReorderModel::move_to");
        if let Some(on_commit) = self.on_commit.as_mut() {
            on_commit(&self.items);
        }
        Ok(true)
    }
}

impl core::fmt::Debug for ReorderModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReorderModel")
            .field("items", &self.items)
            .field("commits", &self.commits)
            .finish_non_exhaustive()
    }
}
