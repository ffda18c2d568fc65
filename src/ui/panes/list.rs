use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::SharedAppData,
    ui::{ResponseEvent, Responsive, Table, colors::TextColors},
};

/// List pane for table items.
pub struct ListPane<T: Table> {
    pub items: T,
    app_data: SharedAppData,
}

impl<T: Table> ListPane<T> {
    /// Creates new [`ListPane`] instance.
    pub fn new(app_data: SharedAppData, list: T) -> Self {
        ListPane { items: list, app_data }
    }

    /// Draws [`ListPane`] on the provided frame area.\
    /// It draws only the visible elements respecting the height of the `area`.
    pub fn draw(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1), Constraint::Fill(1)])
            .split(area);

        let area = layout[1].inner(Margin::new(1, 0));

        frame.render_widget(Paragraph::new(self.get_header(usize::from(area.width))), layout[0]);

        self.items.update_page(area.height);
        if let Some(list) = self
            .items
            .get_paged_items(&self.app_data.borrow().config.theme, usize::from(area.width))
        {
            frame.render_widget(Paragraph::new(get_items(list)), area);
        }
    }

    /// Returns formatted header line.
    fn get_header<'a>(&self, width: usize) -> Line<'a> {
        let colors = self.app_data.borrow().config.theme.colors.header;

        Line::from(vec![
            Span::styled("", Style::new().fg(colors.bg).bg(Color::Reset)),
            Span::styled(self.items.get_header(width), Style::new().fg(colors.fg).bg(colors.bg)),
            Span::styled("", Style::new().fg(colors.bg).bg(Color::Reset)),
        ])
    }
}

impl<T: Table> Responsive for ListPane<T> {
    fn process_key(&mut self, key: KeyEvent) -> ResponseEvent {
        self.items.process_key(key)
    }
}

/// Returns formatted items rows.
fn get_items<'a>(items: Vec<(String, TextColors)>) -> Vec<Line<'a>> {
    let mut result = Vec::with_capacity(items.len());

    for (text, colors) in items {
        result.push(Line::styled(format!(" {text}"), &colors));
    }

    result
}
