use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};

use crate::{
    app::{SharedAppData, fleet::Truck, lists::TrucksList},
    ui::{
        ResponseEvent, Responsive, Table, TuiEvent,
        panes::{FooterPane, HeaderPane, ListPane},
        widgets::Filter,
    },
};

/// Fleet view that shows the filterable list of tow trucks.
pub struct FleetView {
    app_data: SharedAppData,
    header: HeaderPane,
    list: ListPane<TrucksList>,
    footer: FooterPane,
    filter: Filter,
}

impl FleetView {
    /// Creates new [`FleetView`] instance.
    pub fn new(app_data: SharedAppData, trucks: Vec<Truck>) -> Self {
        let header = HeaderPane::new(app_data.clone());
        let list = ListPane::new(app_data.clone(), TrucksList::from(trucks));
        let footer = FooterPane::new(app_data.clone());
        let filter = Filter::new(app_data.clone(), 60);

        Self {
            app_data,
            header,
            list,
            footer,
            filter,
        }
    }

    /// Sets the initial filter value.
    pub fn set_filter_value(&mut self, value: String) {
        self.filter.set_value(value);
    }

    /// Processes a single [`TuiEvent`].
    pub fn process_event(&mut self, event: TuiEvent) -> ResponseEvent {
        let TuiEvent::Key(key) = event;

        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            return ResponseEvent::ExitApplication;
        }

        if self.filter.is_visible {
            self.filter.process_key(key);
            return ResponseEvent::Handled;
        }

        self.process_view_key(key)
    }

    /// Draws [`FleetView`] on the provided frame.\
    /// The filter value is re-applied on every frame, so typing in the filter widget
    /// immediately narrows down the list.
    pub fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        self.apply_filter();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)])
            .split(frame.area());

        self.header.draw(frame, layout[0]);
        self.list.draw(frame, layout[1]);
        self.footer.draw(frame, layout[2]);
        self.filter.draw(frame, frame.area());
    }

    fn process_view_key(&mut self, key: KeyEvent) -> ResponseEvent {
        match key.code {
            KeyCode::Char('q') => ResponseEvent::ExitApplication,
            KeyCode::Char('/') => {
                self.filter.show();
                ResponseEvent::Handled
            },
            KeyCode::Esc if !self.filter.value().is_empty() => {
                self.filter.reset();
                ResponseEvent::Handled
            },
            _ => self.list.process_key(key),
        }
    }

    /// Applies the current filter value to the trucks list and updates the shown count.
    fn apply_filter(&mut self) {
        let value = self.filter.value();
        if value.is_empty() {
            if self.list.items.is_filtered() {
                self.list.items.filter(None);
            }
        } else if self.list.items.get_filter() != Some(value) {
            let value = value.to_owned();
            self.list.items.filter(Some(value));
        }

        self.header.show_filtered_icon(self.list.items.is_filtered());
        self.app_data.borrow_mut().current.shown = self.list.items.len();
    }
}
