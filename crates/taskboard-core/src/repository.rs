use std::collections::BTreeMap;

use crate::error::TaskboardError;
use crate::result::TaskboardResult;
use crate::traits::Entity;

/// Generic in-memory store keyed by [`Entity::id`].
///
/// Backed by a `BTreeMap` so [`get_all`](Repository::get_all) iterates in a
/// stable, id-sorted order across calls. Single-threaded use only.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    items: BTreeMap<String, T>,
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Inserts an item, rejecting colliding ids.
    pub fn add(&mut self, item: T) -> TaskboardResult<()> {
        let id = item.id().to_string();
        if self.items.contains_key(&id) {
            return Err(TaskboardError::DuplicateId(T::KIND, id));
        }
        self.items.insert(id, item);
        Ok(())
    }

    /// Removes and returns the item with the given id.
    pub fn remove(&mut self, id: &str) -> TaskboardResult<T> {
        self.items
            .remove(id)
            .ok_or_else(|| TaskboardError::NotFound(T::KIND, id.to_string()))
    }

    pub fn get_all(&self) -> Vec<&T> {
        self.items.values().collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}
