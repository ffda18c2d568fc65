use colors::TextColors;
use crossterm::event::KeyEvent;
use theme::Theme;

pub use self::tui::*;

pub mod colors;
pub mod panes;
pub mod theme;
pub mod utils;
pub mod views;
pub mod widgets;

mod tui;

/// UI object that is responsive and can process key events.
pub trait Responsive {
    /// Process UI key event.
    fn process_key(&mut self, key: KeyEvent) -> ResponseEvent;
}

/// UI object that behaves like table.
pub trait Table: Responsive {
    /// Returns the number of elements in the filtered list.
    fn len(&self) -> usize;

    /// Returns the number of all elements in the list.
    fn full_len(&self) -> usize;

    /// Returns `true` if list is filtered.
    fn is_filtered(&self) -> bool;

    /// Filters list, returns `true` if the filter value was updated.
    fn filter(&mut self, filter: Option<String>) -> bool;

    /// Returns filter value.
    fn get_filter(&self) -> Option<&str>;

    /// Gets highlighted element index.
    fn get_highlighted_item_index(&self) -> Option<usize>;

    /// Gets highlighted element name.
    fn get_highlighted_item_name(&self) -> Option<&str>;

    /// Highlights first item on list, returns `true` on success.
    fn highlight_first_item(&mut self) -> bool;

    /// Updates page start for the current page size and highlighted list item.
    fn update_page(&mut self, new_height: u16);

    /// Returns items from the current page in a form of text lines to display and colors for that lines.
    fn get_paged_items(&self, theme: &Theme, width: usize) -> Option<Vec<(String, TextColors)>>;

    /// Returns header text for the list.
    fn get_header(&self, width: usize) -> String;
}
