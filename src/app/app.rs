use anyhow::Result;
use std::{cell::RefCell, rc::Rc};
use tokio::runtime::Handle;

use crate::ui::{ResponseEvent, Tui, views::FleetView};

use super::{AppData, Config, FleetInfo, fleet::Truck};

/// Application execution flow.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutionFlow {
    Continue,
    Stop,
}

/// Main application object that orchestrates terminal and UI widgets.
pub struct App {
    tui: Tui,
    runtime: Handle,
    view: FleetView,
}

impl App {
    /// Creates new [`App`] instance.
    pub fn new(runtime: Handle, config: Config, trucks: Vec<Truck>, source: String) -> Result<Self> {
        let data = Rc::new(RefCell::new(AppData::new(config)));
        data.borrow_mut().current = FleetInfo::from(source, trucks.len());
        let view = FleetView::new(data, trucks);

        Ok(Self {
            tui: Tui::new()?,
            runtime,
            view,
        })
    }

    /// Starts app with an optional initial filter.
    pub fn start(&mut self, filter: Option<String>) -> Result<()> {
        if let Some(filter) = filter {
            self.view.set_filter_value(filter);
        }

        self.tui.enter_terminal(&self.runtime)?;

        Ok(())
    }

    /// Stops app.
    pub fn stop(&mut self) -> Result<()> {
        self.tui.exit_terminal()?;

        Ok(())
    }

    /// Process all waiting events.
    pub fn process_events(&mut self) -> Result<ExecutionFlow> {
        while let Ok(event) = self.tui.event_rx.try_recv() {
            if self.view.process_event(event) == ResponseEvent::ExitApplication {
                return Ok(ExecutionFlow::Stop);
            }
        }

        Ok(ExecutionFlow::Continue)
    }

    /// Draws UI view on a terminal frame.
    pub fn draw_frame(&mut self) -> Result<()> {
        self.tui.terminal.draw(|frame| {
            self.view.draw(frame);
        })?;

        Ok(())
    }
}
