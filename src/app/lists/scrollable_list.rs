use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::ResponseEvent;

use super::{FilterContext, FilterData, Filterable, FilterableList, Item, Row};

#[cfg(test)]
#[path = "./scrollable_list.tests.rs"]
mod scrollable_list_tests;

/// Scrollable UI list.
pub struct ScrollableList<T: Row + Filterable<Fc>, Fc: FilterContext> {
    pub items: Option<FilterableList<Item<T, Fc>, Fc>>,
    pub highlighted: Option<usize>,
    pub page_start: usize,
    pub page_height: u16,
    filter: FilterData<Fc>,
}

impl<T: Row + Filterable<Fc>, Fc: FilterContext> Default for ScrollableList<T, Fc> {
    fn default() -> Self {
        ScrollableList {
            items: None,
            highlighted: None,
            page_start: 0,
            page_height: 0,
            filter: FilterData::default(),
        }
    }
}

impl<T: Row + Filterable<Fc>, Fc: FilterContext> ScrollableList<T, Fc> {
    /// Creates new [`ScrollableList`] with initial items.
    pub fn from(items: Vec<T>) -> Self {
        let list = items.into_iter().map(Item::new).collect::<Vec<_>>();

        ScrollableList {
            items: Some(FilterableList::from(list)),
            ..Default::default()
        }
    }

    /// Appends an element to the back of the list.\
    /// **Note** that it may be immediately filtered out by the currently applied filter.
    pub fn push(&mut self, value: T) {
        if let Some(items) = &mut self.items {
            items.push(Item::new(value));
            self.apply_filter();
        } else {
            self.items = Some(FilterableList::from(vec![Item::new(value)]));
        }
    }

    /// Clears the [`ScrollableList`], removing all values.
    pub fn clear(&mut self) {
        if let Some(items) = &mut self.items {
            items.clear();
        }

        self.filter.set_pattern(None::<String>);
    }

    /// Returns the number of elements in the filtered out scrollable list.
    pub fn len(&self) -> usize {
        self.items.as_ref().map(FilterableList::len).unwrap_or_default()
    }

    /// Returns the number of all elements in the scrollable list.
    pub fn full_len(&self) -> usize {
        self.items.as_ref().map(FilterableList::full_len).unwrap_or_default()
    }

    /// Returns `true` if the scrollable list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if list is filtered.
    pub fn is_filtered(&self) -> bool {
        self.filter.has_pattern()
    }

    /// Filters items in the list by calling `is_matching` on each [`Filterable`] row.\
    /// Returns `true` if pattern was updated.
    pub fn filter(&mut self, filter: Option<String>) -> bool {
        if !self.filter.set_pattern(filter) {
            return false;
        }

        if self.filter.has_pattern() {
            self.apply_filter();
        } else if let Some(list) = &mut self.items {
            list.filter_reset();
        }

        self.highlighted = self.recover_highlighted_item_index();
        if let Some(list) = &mut self.items {
            list.full_iter_mut().for_each(|i| i.is_active = false);
            if let Some(highlighted) = self.highlighted {
                list[highlighted].is_active = true;
            } else if !list.is_empty() {
                list[0].is_active = true;
                self.highlighted = Some(0);
            }
        }

        true
    }

    /// Returns currently applied filter value.
    pub fn get_filter(&self) -> Option<&str> {
        self.filter.pattern()
    }

    /// Process [`KeyEvent`] to move over the list.
    pub fn process_key(&mut self, key: KeyEvent) -> ResponseEvent {
        match key.code {
            KeyCode::Home => self.move_highlighted(i32::MIN),
            KeyCode::Up => self.move_highlighted(-1),
            KeyCode::PageUp => self.move_highlighted(-i32::from(self.page_height)),
            KeyCode::Down => self.move_highlighted(1),
            KeyCode::PageDown => self.move_highlighted(i32::from(self.page_height)),
            KeyCode::End => self.move_highlighted(i32::MAX),
            _ => return ResponseEvent::NotHandled,
        }

        ResponseEvent::Handled
    }

    /// Updates page start for the current page size and highlighted list item.
    pub fn update_page(&mut self, new_height: u16) {
        self.page_height = new_height;
        let highlighted_item = self.highlighted.unwrap_or(0);

        if self.page_start >= highlighted_item {
            self.page_start = highlighted_item;
        } else if self.page_start + usize::from(self.page_height) - 1 < highlighted_item {
            self.page_start = highlighted_item - usize::from(self.page_height) + 1;
        }

        if let Some(items) = &self.items {
            if items.len() < usize::from(self.page_height) {
                self.page_start = 0;
            } else if items.len() < self.page_start + usize::from(self.page_height) {
                self.page_start = items.len() - usize::from(self.page_height);
            }
        }
    }

    /// Returns list items iterator for the current page.
    pub fn get_page(&self) -> Option<impl Iterator<Item = &Item<T, Fc>>> {
        self.items
            .as_ref()
            .map(|list| list.iter().skip(self.page_start).take(self.page_height.into()))
    }

    /// Gets highlighted element index.
    pub fn get_highlighted_item_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Gets highlighted element name.
    pub fn get_highlighted_item_name(&self) -> Option<&str> {
        self.get_highlighted_item().map(|i| i.data.name())
    }

    /// Gets highlighted element.
    pub fn get_highlighted_item(&self) -> Option<&Item<T, Fc>> {
        if let Some(items) = &self.items
            && let Some(highlighted) = self.highlighted
            && highlighted < items.len()
        {
            Some(&items[highlighted])
        } else {
            None
        }
    }

    /// Gets the highlighted item index from the `is_active` property.
    pub fn recover_highlighted_item_index(&self) -> Option<usize> {
        if let Some(items) = &self.items {
            items.iter().position(|i| i.is_active)
        } else {
            None
        }
    }

    /// Highlights first item on the list, returns `true` on success.
    pub fn highlight_first_item(&mut self) -> bool {
        let Some(items) = &mut self.items else {
            return false;
        };
        if items.is_empty() {
            return false;
        }

        if let Some(highlighted) = self.highlighted
            && highlighted < items.len()
        {
            items[highlighted].is_active = false;
        }

        items[0].is_active = true;
        self.highlighted = Some(0);
        true
    }

    /// Adds `rows_to_move` to the currently highlighted item index.
    fn move_highlighted(&mut self, rows_to_move: i32) {
        if let Some(items) = &mut self.items {
            if items.is_empty() || rows_to_move == 0 {
                return;
            }

            if self.highlighted.is_none() && rows_to_move == 1 {
                items[0].is_active = true;
                self.highlighted = Some(0);
            } else {
                let highlighted = self.highlighted.unwrap_or(0);
                let new_highlighted = std::cmp::max(highlighted as isize + rows_to_move as isize, 0) as usize;
                let new_highlighted = std::cmp::min(new_highlighted, items.len() - 1);

                items[highlighted].is_active = false;
                items[new_highlighted].is_active = true;
                self.highlighted = Some(new_highlighted);
            }
        }
    }

    /// Re-applies remembered text filter to the list.
    /// The filter always runs over the full list, so the result depends only on the current
    /// pattern and items.
    fn apply_filter(&mut self) {
        if let Some(list) = &mut self.items {
            if self.filter.has_context() {
                if let Some(context) = self.filter.context_mut() {
                    context.restart();
                    list.filter(context);
                }
            } else if let Some(filter) = self.filter.pattern() {
                let mut context = T::get_context(filter);
                list.filter(&mut context);
                self.filter.set_context(Some(context));
            }
        }
    }
}
