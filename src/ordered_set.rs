use std::collections::HashSet;
use std::hash::Hash;
use std::slice;

/// Set that remembers the order in which values were first inserted.
#[derive(Clone, Debug)]
pub struct OrderedSet<T> {
    order: Vec<T>,
    seen: HashSet<T>,
}

impl<T: Copy + Eq + Hash> OrderedSet<T> {
    pub fn new() -> OrderedSet<T> {
        OrderedSet {
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Returns `true` if the value was not present before.
    pub fn insert(&mut self, value: T) -> bool {
        if self.seen.insert(value) {
            self.order.push(value);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.order
    }
}

impl<T: Copy + Eq + Hash> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Order matters, unlike for HashSet.
impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: Copy + Eq + Hash> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        for x in iter {
            set.insert(x);
        }
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}
