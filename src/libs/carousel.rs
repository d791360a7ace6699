//! Bounded one-at-a-time view over per-child datasets.
//!
//! The index never wraps: `previous` at the first item and `next` at the last
//! item leave it unchanged. A single-item carousel is permanently inert.

use super::attendance::ChildAttendanceDataset;
use super::error::StateError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

/// Carousel over children's attendance datasets.
pub type ChildCarousel = Carousel<ChildAttendanceDataset>;

impl<T> Carousel<T> {
    /// Starts at the first item; an empty list is rejected.
    pub fn new(items: Vec<T>) -> Result<Self, StateError> {
        if items.is_empty() {
            return Err(StateError::EmptyCarousel);
        }
        Ok(Carousel { items, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    /// Steps back; returns whether the index moved.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        tracing::trace!(index = self.index, "carousel moved back");
        true
    }

    /// Steps forward; returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        tracing::trace!(index = self.index, "carousel moved forward");
        true
    }

    /// Jumps to `index`, clamped to the last item.
    pub fn select(&mut self, index: usize) -> usize {
        self.index = index.min(self.items.len() - 1);
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(Carousel::<u8>::new(vec![]), Err(StateError::EmptyCarousel));
    }

    #[test]
    fn transitions_clamp_without_wrapping() {
        let mut carousel = Carousel::new(vec!["ada", "ben", "cleo"]).unwrap();
        assert!(!carousel.previous());
        assert_eq!(carousel.index(), 0);
        assert!(carousel.next());
        assert!(carousel.next());
        assert!(!carousel.next());
        assert_eq!(carousel.index(), 2);
        assert_eq!(*carousel.current(), "cleo");
        assert!(carousel.previous());
        assert_eq!(*carousel.current(), "ben");
    }

    #[test]
    fn single_item_is_inert() {
        let mut carousel = Carousel::new(vec![1]).unwrap();
        assert!(!carousel.has_previous());
        assert!(!carousel.has_next());
        assert!(!carousel.next());
        assert!(!carousel.previous());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn select_clamps_to_last_item() {
        let mut carousel = Carousel::new(vec!['a', 'b', 'c']).unwrap();
        assert_eq!(carousel.select(1), 1);
        assert_eq!(carousel.select(10), 2);
        assert_eq!(*carousel.current(), 'c');
    }
}
