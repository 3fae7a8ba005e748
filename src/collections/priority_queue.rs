use std::cmp::Ordering;
use std::fmt;

/// Orders two priorities. `Less` means the first is dequeued earlier.
pub type Comparator = Box<dyn Fn(f64, f64) -> Ordering + Send + Sync>;

/// A binary min-heap of items keyed by `f64` priorities.
///
/// The heap is a flat array where the parent of slot `i` is `(i - 1) / 2`,
/// and no child orders before its parent under the comparator. The
/// comparator is fixed at construction; the default orders ascending, so
/// the lowest priority value comes out first. Ties dequeue in no
/// particular order.
pub struct PriorityQueue<T> {
    heap: Vec<(T, f64)>,
    comparator: Comparator,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue ordered by ascending priority.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(|a: f64, b: f64| a.total_cmp(&b))
    }

    /// Creates an empty queue ordered by `comparator`.
    ///
    /// ```
    /// use vecpath::collections::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::with_comparator(|a: f64, b: f64| b.total_cmp(&a));
    /// queue.enqueue("low", 1.0);
    /// queue.enqueue("high", 9.0);
    /// assert_eq!(queue.dequeue(), Some("high"));
    /// ```
    #[must_use]
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: Fn(f64, f64) -> Ordering + Send + Sync + 'static,
    {
        Self {
            heap: Vec::new(),
            comparator: Box::new(comparator),
        }
    }

    /// Adds `item` with `priority`. O(log n).
    pub fn enqueue(&mut self, item: T, priority: f64) {
        self.heap.push((item, priority));
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the item that orders first. O(log n).
    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let (item, _) = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(item)
    }

    /// Returns the item that would be dequeued next, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|(item, _)| item)
    }

    /// Returns the priority of the item at the front.
    #[must_use]
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.first().map(|&(_, priority)| priority)
    }

    /// Returns `true` if the queue holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn before(&self, a: usize, b: usize) -> bool {
        (self.comparator)(self.heap[a].1, self.heap[b].1) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.before(i, parent) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut first = i;
            if left < n && self.before(left, first) {
                first = left;
            }
            if right < n && self.before(right, first) {
                first = right;
            }
            if first == i {
                break;
            }
            self.heap.swap(i, first);
            i = first;
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_holds<T>(queue: &PriorityQueue<T>) -> bool {
        (1..queue.heap.len()).all(|i| !queue.before(i, (i - 1) / 2))
    }

    fn drain<T>(queue: &mut PriorityQueue<T>) -> Vec<T> {
        std::iter::from_fn(|| queue.dequeue()).collect()
    }

    #[test]
    fn lowest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('A', 5.0);
        queue.enqueue('B', 1.0);
        queue.enqueue('C', 3.0);
        assert_eq!(drain(&mut queue), vec!['B', 'C', 'A']);
    }

    #[test]
    fn empty_queue_is_absent_not_error() {
        let mut queue: PriorityQueue<u32> = PriorityQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.peek_priority(), None);
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("x", 2.0);
        queue.enqueue("y", -1.0);
        assert_eq!(queue.peek(), Some(&"y"));
        assert_eq!(queue.peek_priority(), Some(-1.0));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn invariant_after_every_operation() {
        let mut queue = PriorityQueue::new();
        let priorities = [9.0, 4.0, 7.0, 1.0, 8.0, 2.0, 2.0, 6.0, 3.0, 5.0, 0.5];
        for (i, p) in priorities.iter().enumerate() {
            queue.enqueue(i, *p);
            assert!(heap_holds(&queue));
        }
        let mut last = f64::NEG_INFINITY;
        while let Some(p) = queue.peek_priority() {
            assert!(p >= last, "{p} came after {last}");
            last = p;
            queue.dequeue();
            assert!(heap_holds(&queue));
        }
    }

    #[test]
    fn custom_comparator_makes_max_heap() {
        let mut queue = PriorityQueue::with_comparator(|a: f64, b: f64| b.total_cmp(&a));
        for p in [3.0, 10.0, -2.0, 7.0] {
            queue.enqueue(p, p);
        }
        assert_eq!(drain(&mut queue), vec![10.0, 7.0, 3.0, -2.0]);
    }

    #[test]
    fn clear_resets() {
        let mut queue = PriorityQueue::new();
        queue.enqueue((), 1.0);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn debug_lists_heap() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(1u8, 0.0);
        assert!(format!("{queue:?}").starts_with("PriorityQueue { heap: [(1, 0.0)]"));
    }
}
