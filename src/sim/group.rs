//! Ordered entity collection with lazy deletion
//!
//! Dead entities are not removed when they are killed. The next
//! [`Group::update`] pass drops them, so nothing is removed from the live
//! sequence while another entity is being updated.

use super::entity::{Entity, TickContext};
use crate::renderer::RenderTarget;

#[derive(Debug, Clone)]
pub struct Group<E> {
    items: Vec<E>,
}

impl<E> Default for Group<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Entity> Group<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: E) {
        self.items.push(entity);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&E> {
        self.items.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut E> {
        self.items.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Remove every entity matching `pred`, keeping the order of the rest
    pub fn remove_where(&mut self, mut pred: impl FnMut(&E) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|e| !pred(e));
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Update alive entities in order and drop the ones that were already dead
    pub fn update(&mut self, ctx: &TickContext) {
        self.items.retain_mut(|entity| {
            if entity.is_alive() {
                entity.update(ctx);
                true
            } else {
                false
            }
        });
    }

    pub fn render(&self, target: &mut dyn RenderTarget) {
        for entity in &self.items {
            entity.render(target);
        }
    }
}

impl<E: Entity> Extend<E> for Group<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, E> IntoIterator for &'a Group<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
