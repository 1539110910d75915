use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::model::MemberId;

/// Min-ordered frontier of free identities.
///
/// Seeded with 1; popping the minimum pushes `popped + 1` when the heap would
/// otherwise run dry, so the frontier always holds a next candidate. Released
/// identities go back into the heap, which makes the smallest currently-unused
/// positive integer the next one issued.
#[derive(Debug)]
pub struct IdAllocator {
    free: BinaryHeap<Reverse<u32>>,
}

impl IdAllocator {
    pub fn new() -> Self {
        let mut free = BinaryHeap::new();
        free.push(Reverse(1));
        Self { free }
    }

    /// Take the smallest free identity.
    pub fn allocate(&mut self) -> MemberId {
        // The frontier is never empty, so the pop cannot fail.
        let Reverse(id) = self.free.pop().unwrap_or(Reverse(1));
        if self.free.is_empty() {
            self.free.push(Reverse(id + 1));
        }
        MemberId(id)
    }

    /// Return a removed member's identity for reuse.
    pub fn release(&mut self, id: MemberId) {
        self.free.push(Reverse(id.0));
    }

    /// Back to the initial state: next issued identity is 1.
    pub fn reset(&mut self) {
        self.free.clear();
        self.free.push(Reverse(1));
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_sequential_ids_from_one() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.allocate(), MemberId(1));
        assert_eq!(alloc.allocate(), MemberId(2));
        assert_eq!(alloc.allocate(), MemberId(3));
    }

    #[test]
    fn released_id_is_reused_first() {
        let mut alloc = IdAllocator::new();
        for _ in 0..4 {
            alloc.allocate();
        }
        alloc.release(MemberId(2));
        assert_eq!(alloc.allocate(), MemberId(2));
        assert_eq!(alloc.allocate(), MemberId(5));
    }

    #[test]
    fn smallest_of_several_released_wins() {
        let mut alloc = IdAllocator::new();
        for _ in 0..5 {
            alloc.allocate();
        }
        alloc.release(MemberId(4));
        alloc.release(MemberId(1));
        alloc.release(MemberId(3));
        assert_eq!(alloc.allocate(), MemberId(1));
        assert_eq!(alloc.allocate(), MemberId(3));
        assert_eq!(alloc.allocate(), MemberId(4));
        assert_eq!(alloc.allocate(), MemberId(6));
    }

    #[test]
    fn reset_starts_over_at_one() {
        let mut alloc = IdAllocator::new();
        alloc.allocate();
        alloc.allocate();
        alloc.reset();
        assert_eq!(alloc.allocate(), MemberId(1));
    }
}
