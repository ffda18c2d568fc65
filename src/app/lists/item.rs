use std::{borrow::Cow, marker::PhantomData};

use crate::utils::truncate;

use super::{FilterContext, Filterable, Header};

#[cfg(test)]
#[path = "./item.tests.rs"]
mod item_tests;

/// Contract for item with columns.
pub trait Row {
    /// Returns `name` of the item.
    fn name(&self) -> &str;

    /// Returns text value for the specified column number.
    fn column_text(&self, column: usize) -> Cow<'_, str>;
}

/// Filterable list item.
pub struct Item<T: Row + Filterable<Fc>, Fc: FilterContext> {
    pub data: T,
    pub is_active: bool,
    _marker: PhantomData<Fc>,
}

impl<T: Row + Filterable<Fc>, Fc: FilterContext> Item<T, Fc> {
    /// Creates new instance of a filterable list item.
    pub fn new(data: T) -> Self {
        Self {
            data,
            is_active: false,
            _marker: PhantomData,
        }
    }

    /// Builds and returns the whole row of values for this item.
    pub fn get_text(&self, header: &Header, width: usize) -> String {
        let widths = header.get_widths(width);
        let mut row = String::with_capacity(width + 2);
        for (i, column_width) in widths.iter().enumerate() {
            if i > 0 {
                row.push(' ');
            }

            row.push_cell(self.data.column_text(i).as_ref(), *column_width);
        }

        if row.chars().count() > width {
            truncate(row.as_str(), width).to_owned()
        } else {
            row
        }
    }
}

impl<T: Row + Filterable<Fc>, Fc: FilterContext> Filterable<Fc> for Item<T, Fc> {
    #[inline]
    fn get_context(pattern: &str) -> Fc {
        T::get_context(pattern)
    }

    #[inline]
    fn is_matching(&self, context: &mut Fc) -> bool {
        self.data.is_matching(context)
    }
}

/// Extension methods for string.
pub trait RowStringExt {
    /// Appends a given cell text onto the end of this `String`.
    fn push_cell(&mut self, s: &str, len: usize);
}

impl RowStringExt for String {
    fn push_cell(&mut self, s: &str, len: usize) {
        if len == 0 {
            return;
        }

        self.push_str(truncate(s, len));

        let padding_len = len.saturating_sub(s.chars().count());
        (0..padding_len).for_each(|_| self.push(' '));
    }
}
