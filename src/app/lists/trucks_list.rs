use delegate::delegate;

use crate::{
    app::fleet::{CellsFilterContext, Truck},
    ui::{ResponseEvent, Responsive, Table, colors::TextColors, theme::Theme},
};

use super::{Header, Row, ScrollableList};

#[cfg(test)]
#[path = "./trucks_list.tests.rs"]
mod trucks_list_tests;

/// Tow trucks list.
pub struct TrucksList {
    pub header: Header,
    pub list: ScrollableList<Truck, CellsFilterContext>,
}

impl Default for TrucksList {
    fn default() -> Self {
        TrucksList {
            header: Truck::header(),
            list: ScrollableList::default(),
        }
    }
}

impl TrucksList {
    /// Creates new [`TrucksList`] instance from the fleet roster.
    pub fn from(trucks: Vec<Truck>) -> Self {
        let mut list = TrucksList {
            header: Truck::header(),
            list: ScrollableList::from(trucks),
        };
        list.update_data_lengths();
        list.list.highlight_first_item();

        list
    }

    /// Updates max widths for all columns basing on current data in the list.
    fn update_data_lengths(&mut self) {
        self.header.reset_data_lengths();
        let Some(list) = &self.list.items else {
            return;
        };

        let columns_no = self.header.get_columns_count();
        for item in list.full_iter() {
            for column in 0..columns_no {
                let column_width = std::cmp::max(
                    self.header.get_data_length(column),
                    item.data.column_text(column).chars().count(),
                );
                self.header.set_data_length(column, column_width);
            }
        }
    }
}

impl Responsive for TrucksList {
    fn process_key(&mut self, key: crossterm::event::KeyEvent) -> ResponseEvent {
        self.list.process_key(key)
    }
}

impl Table for TrucksList {
    delegate! {
        to self.list {
            fn len(&self) -> usize;
            fn full_len(&self) -> usize;
            fn is_filtered(&self) -> bool;
            fn filter(&mut self, filter: Option<String>) -> bool;
            fn get_filter(&self) -> Option<&str>;
            fn get_highlighted_item_index(&self) -> Option<usize>;
            fn get_highlighted_item_name(&self) -> Option<&str>;
            fn highlight_first_item(&mut self) -> bool;
            fn update_page(&mut self, new_height: u16);
        }
    }

    fn get_paged_items(&self, theme: &Theme, width: usize) -> Option<Vec<(String, TextColors)>> {
        if let Some(list) = self.list.get_page() {
            let mut result = Vec::with_capacity(self.list.page_height.into());
            for item in list {
                result.push((
                    item.get_text(&self.header, width),
                    theme.colors.line.get_colors(item.data.status).get_specific(item.is_active),
                ));
            }

            return Some(result);
        }

        None
    }

    fn get_header(&self, width: usize) -> String {
        self.header.get_text(width)
    }
}
