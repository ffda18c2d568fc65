use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::app::fleet::TruckStatus;

use super::colors::{LineColors, TextColors};

/// Represents colors for the filter widget.
#[derive(Default, Serialize, Deserialize, Copy, Clone)]
pub struct FilterColors {
    pub input: TextColors,
    pub prompt: TextColors,
}

/// Represents colors for tow truck rows grouped by truck status.
#[derive(Default, Serialize, Deserialize, Copy, Clone)]
pub struct StatusColors {
    pub available: LineColors,
    pub busy: LineColors,
    pub maintenance: LineColors,
}

impl StatusColors {
    /// Returns [`LineColors`] for the provided truck status.
    pub fn get_colors(&self, status: TruckStatus) -> &LineColors {
        match status {
            TruckStatus::Available => &self.available,
            TruckStatus::Busy => &self.busy,
            TruckStatus::Maintenance => &self.maintenance,
        }
    }
}

/// All colors in theme.
#[derive(Serialize, Deserialize, Copy, Clone)]
pub struct ThemeColors {
    pub name: TextColors,
    pub source: TextColors,
    pub count: TextColors,
    pub header: TextColors,
    pub filter: FilterColors,
    pub line: StatusColors,
}

/// Theme used in the application.
#[derive(Serialize, Deserialize, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
}

impl Default for Theme {
    /// Returns TUI default theme for the application.
    fn default() -> Self {
        Theme {
            colors: ThemeColors {
                name: TextColors::new(Color::White, Color::Rgb(216, 0, 96)),
                source: TextColors::new(Color::DarkGray, Color::Rgb(253, 202, 79)),
                count: TextColors::new(Color::DarkGray, Color::Rgb(170, 217, 46)),
                header: TextColors::new(Color::Gray, Color::DarkGray),
                filter: FilterColors {
                    input: TextColors::new(Color::Blue, Color::DarkGray),
                    prompt: TextColors::new(Color::Blue, Color::DarkGray),
                },
                line: StatusColors {
                    available: LineColors {
                        normal: TextColors::new(Color::LightBlue, Color::Reset),
                        normal_hl: TextColors::new(Color::DarkGray, Color::LightBlue),
                    },
                    busy: LineColors {
                        normal: TextColors::new(Color::Yellow, Color::Reset),
                        normal_hl: TextColors::new(Color::DarkGray, Color::LightYellow),
                    },
                    maintenance: LineColors {
                        normal: TextColors::new(Color::Magenta, Color::Reset),
                        normal_hl: TextColors::new(Color::DarkGray, Color::LightMagenta),
                    },
                },
            },
        }
    }
}
