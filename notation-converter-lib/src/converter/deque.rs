use std::collections::VecDeque;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// A double-ended queue with constant-time pushes and pops at both ends.
///
/// Popping an empty deque is not an error: [`Deque::pop_front`] and [`Deque::pop_back`]
/// hand back `T::default()` and leave the deque empty. Use [`Deque::try_pop_front`] or
/// [`Deque::try_pop_back`] to observe emptiness instead.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::deque::Deque;
///
/// let mut deque: Deque<String> = Deque::new();
/// deque.push_front("b".to_string());
/// deque.push_front("a".to_string());
///
/// assert_eq!(deque.pop_front(), "a");
/// assert_eq!(deque.pop_back(), "b");
/// assert_eq!(deque.pop_back(), "");
/// assert!(deque.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Deque<T> {
    elements: VecDeque<T>,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Deque {
            elements: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Deque {
            elements: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push_front(&mut self, value: T) {
        self.elements.push_front(value);
    }

    pub fn push_back(&mut self, value: T) {
        self.elements.push_back(value);
    }

    pub fn try_pop_front(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    pub fn try_pop_back(&mut self) -> Option<T> {
        self.elements.pop_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.elements.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.elements.back()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Default> Deque<T> {
    /// Removes the front element, or returns `T::default()` if there is none.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().unwrap_or_default()
    }

    /// Removes the back element, or returns `T::default()` if there is none.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().unwrap_or_default()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}
