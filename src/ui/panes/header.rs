use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::SharedAppData;

/// Header pane that shows the roster source and trucks count as breadcrumbs.
pub struct HeaderPane {
    app_data: SharedAppData,
    is_filtered: bool,
}

impl HeaderPane {
    /// Creates new UI header pane.
    pub fn new(app_data: SharedAppData) -> Self {
        Self {
            app_data,
            is_filtered: false,
        }
    }

    /// Sets if the filtered icon should be drawn next to the trucks count.
    pub fn show_filtered_icon(&mut self, is_filtered: bool) {
        self.is_filtered = is_filtered;
    }

    /// Draws [`HeaderPane`] on the provided frame area.
    pub fn draw(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let path = self.get_path();
        let count = self.get_count();

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Fill(1), Constraint::Length(count.width() as u16)])
            .split(area);

        frame.render_widget(Paragraph::new(path), layout[0]);
        frame.render_widget(Paragraph::new(count), layout[1]);
    }

    /// Returns formatted fleet path as breadcrumbs:
    /// > `application name` > `roster source` >
    fn get_path(&self) -> Line<'_> {
        let data = self.app_data.borrow();
        let colors = &data.config.theme.colors;

        Line::from(vec![
            Span::styled("", Style::new().fg(colors.name.bg)),
            Span::styled(
                format!(" {} ", env!("CARGO_CRATE_NAME")),
                Style::default().fg(colors.name.fg).bg(colors.name.bg),
            ),
            Span::styled("", Style::new().fg(colors.name.bg).bg(colors.source.bg)),
            Span::styled(
                format!(" {} ", data.current.source),
                Style::new().fg(colors.source.fg).bg(colors.source.bg),
            ),
            Span::styled("", Style::new().fg(colors.source.bg)),
        ])
    }

    /// Returns formatted trucks count as breadcrumbs:
    /// < [ `filtered icon` ] `shown` / `total` <
    fn get_count(&self) -> Line<'_> {
        let data = self.app_data.borrow();
        let colors = &data.config.theme.colors;
        let text = if self.is_filtered {
            format!(" 󰈲 {}/{} ", data.current.shown, data.current.total)
        } else {
            format!(" {} ", data.current.total)
        };

        Line::from(vec![
            Span::styled("", Style::new().fg(colors.count.bg)),
            Span::styled(text, Style::new().fg(colors.count.fg).bg(colors.count.bg)),
            Span::styled("", Style::new().fg(colors.count.bg)),
        ])
        .right_aligned()
    }
}
