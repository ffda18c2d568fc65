use crate::utils::{add_padding, truncate};

use super::Column;

#[cfg(test)]
#[path = "./header.tests.rs"]
mod header_tests;

/// Header for the list.
/// One of the columns is a stretch column, it absorbs all the width left over by the other ones.
pub struct Header {
    columns: Box<[Column]>,
    stretch: usize,
}

impl Header {
    /// Creates new [`Header`] instance with provided columns.
    pub fn from(columns: Box<[Column]>, stretch: usize) -> Self {
        Self { columns, stretch }
    }

    /// Returns number of columns in the header.
    pub fn get_columns_count(&self) -> usize {
        self.columns.len()
    }

    /// Resets `data_len` in each column.
    pub fn reset_data_lengths(&mut self) {
        for column in &mut self.columns {
            column.data_len = 0;
        }
    }

    /// Returns current data length of the provided column.
    pub fn get_data_length(&self, column: usize) -> usize {
        self.columns.get(column).map(|c| c.data_len).unwrap_or_default()
    }

    /// Sets data length for the provided column.
    pub fn set_data_length(&mut self, column: usize, new_data_len: usize) {
        if let Some(column) = self.columns.get_mut(column) {
            column.data_len = new_data_len;
        }
    }

    /// Returns widths for all columns calculated for the provided terminal width.
    /// Every column gets its data length respecting bounds, the stretch column gets the rest.
    pub fn get_widths(&self, terminal_width: usize) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(Column::len).collect();
        let used = widths.iter().sum::<usize>() + self.columns.len().saturating_sub(1);
        if terminal_width > used {
            widths[self.stretch] += terminal_width - used;
        }

        widths
    }

    /// Gets header text for the provided `width`.
    pub fn get_text(&self, width: usize) -> String {
        let widths = self.get_widths(width);
        let mut text = String::with_capacity(width + 2);
        text.push(' ');
        for (i, column_width) in widths.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }

            text.push_str(&add_padding(self.columns[i].name, *column_width));
        }

        if text.chars().count() > width + 1 {
            truncate(text.as_str(), width + 1).to_owned()
        } else {
            text
        }
    }
}
