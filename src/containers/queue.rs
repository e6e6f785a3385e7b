//! FIFO queues.

use std::collections::{LinkedList, VecDeque};

use crate::optional::Optional;

/// A first-in, first-out queue.
///
/// The trait is object safe, so different backings can sit behind
/// `Box<dyn Queue<T>>`.
///
/// # Examples
///
/// ```rust
/// use satchel::containers::{LinkedListQueue, Queue, SliceQueue};
/// use satchel::optional::Optional;
///
/// let mut queues: Vec<Box<dyn Queue<i32>>> = vec![
///     Box::new(SliceQueue::new()),
///     Box::new(LinkedListQueue::new()),
/// ];
/// for queue in &mut queues {
///     queue.enqueue(1);
///     queue.enqueue(2);
///     assert_eq!(queue.dequeue(), Optional::some(1));
///     assert_eq!(queue.peek(), Optional::some(&2));
/// }
/// ```
pub trait Queue<T> {
    /// Adds `value` at the back.
    fn enqueue(&mut self, value: T);

    /// Removes and returns the front element.
    fn dequeue(&mut self) -> Optional<T>;

    /// Returns the front element without removing it.
    fn peek(&self) -> Optional<&T>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the queue has no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Calls `function` on every element, front to back, in the order
    /// [`dequeue`](Self::dequeue) would return them.
    fn for_each(&self, function: &mut dyn FnMut(&T));
}

// =============================================================================
// SliceQueue
// =============================================================================

/// A [`Queue`] backed by a ring buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceQueue<T> {
    elements: VecDeque<T>,
}

impl<T> SliceQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }
}

impl<T> Default for SliceQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Enqueues the elements in iteration order.
impl<T> FromIterator<T> for SliceQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for SliceQueue<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into(),
        }
    }
}

impl<T> Queue<T> for SliceQueue<T> {
    fn enqueue(&mut self, value: T) {
        self.elements.push_back(value);
    }

    fn dequeue(&mut self) -> Optional<T> {
        self.elements.pop_front().into()
    }

    fn peek(&self) -> Optional<&T> {
        self.elements.front().into()
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn for_each(&self, function: &mut dyn FnMut(&T)) {
        self.elements.iter().for_each(function);
    }
}

// =============================================================================
// LinkedListQueue
// =============================================================================

/// A [`Queue`] backed by a doubly linked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedListQueue<T> {
    elements: LinkedList<T>,
}

impl<T> LinkedListQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: LinkedList::new(),
        }
    }
}

impl<T> Default for LinkedListQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedListQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Queue<T> for LinkedListQueue<T> {
    fn enqueue(&mut self, value: T) {
        self.elements.push_back(value);
    }

    fn dequeue(&mut self) -> Optional<T> {
        self.elements.pop_front().into()
    }

    fn peek(&self) -> Optional<&T> {
        self.elements.front().into()
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn for_each(&self, function: &mut dyn FnMut(&T)) {
        self.elements.iter().for_each(function);
    }
}
