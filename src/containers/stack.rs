//! LIFO stacks.

use crate::optional::Optional;

/// A last-in, first-out stack.
pub trait Stack<T> {
    /// Pushes `value` on top.
    fn push(&mut self, value: T);

    /// Removes and returns the top element.
    fn pop(&mut self) -> Optional<T>;

    /// Returns the top element without removing it.
    fn peek(&self) -> Optional<&T>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the stack has no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Calls `function` on every element, top to bottom, in the order
    /// [`pop`](Self::pop) would return them.
    fn for_each(&self, function: &mut dyn FnMut(&T));
}

/// A [`Stack`] backed by a vector; the top is the end of the vector.
///
/// # Examples
///
/// ```rust
/// use satchel::containers::{SliceStack, Stack};
/// use satchel::optional::Optional;
///
/// let mut stack = SliceStack::from(vec![1, 2]);
/// stack.push(3);
/// assert_eq!(stack.pop(), Optional::some(3));
/// assert_eq!(stack.peek(), Optional::some(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceStack<T> {
    elements: Vec<T>,
}

impl<T> SliceStack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T> Default for SliceStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes the elements in order, so the last one ends up on top.
impl<T> From<Vec<T>> for SliceStack<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for SliceStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Stack<T> for SliceStack<T> {
    fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    fn pop(&mut self) -> Optional<T> {
        self.elements.pop().into()
    }

    fn peek(&self) -> Optional<&T> {
        self.elements.last().into()
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn for_each(&self, function: &mut dyn FnMut(&T)) {
        self.elements.iter().rev().for_each(function);
    }
}
