use std::cmp::max;

/// Column for the list header.
#[derive(Clone)]
pub struct Column {
    pub name: &'static str,
    pub data_len: usize,
    min_len: usize,
    max_len: usize,
}

impl Column {
    /// Creates new [`Column`] instance that always keeps the width of its name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            data_len: name.chars().count(),
            min_len: name.chars().count(),
            max_len: name.chars().count(),
        }
    }

    /// Creates new [`Column`] instance bound with provided lengths.
    pub fn bound(name: &'static str, min_len: usize, max_len: usize) -> Self {
        Self {
            name,
            data_len: name.chars().count(),
            min_len: max(name.chars().count(), min_len),
            max_len: max(name.chars().count(), max_len),
        }
    }

    /// Returns the current width of the column, that is its data length respecting bounds.
    #[inline]
    pub fn len(&self) -> usize {
        self.data_len.clamp(self.min_len, self.max_len)
    }
}
