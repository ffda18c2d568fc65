use std::{borrow::Cow, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncReadExt;

use crate::app::lists::{Column, FilterContext, Filterable, Header, Row};

#[cfg(test)]
#[path = "./fleet.tests.rs"]
mod fleet_tests;

/// Possible errors from reading the fleet roster.
#[derive(Error, Debug)]
pub enum FleetError {
    /// Cannot read the fleet roster file.
    #[error("cannot read fleet roster file")]
    IoError(#[from] std::io::Error),

    /// Cannot deserialize the fleet roster.
    #[error("cannot deserialize fleet roster")]
    SerializationError(#[from] serde_yaml::Error),
}

/// Current status of a tow truck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruckStatus {
    #[default]
    Available,
    Busy,
    Maintenance,
}

impl TruckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruckStatus::Available => "available",
            TruckStatus::Busy => "busy",
            TruckStatus::Maintenance => "maintenance",
        }
    }
}

/// Single tow truck from the fleet roster.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Truck {
    pub plate: String,
    pub model: String,
    pub driver: String,
    pub phone: String,
    #[serde(default)]
    pub status: TruckStatus,
}

impl Truck {
    /// Returns the [`Header`] for the trucks list, the `DRIVER` column stretches.
    pub fn header() -> Header {
        Header::from(
            Box::new([
                Column::bound("PLATE", 9, 12),
                Column::bound("MODEL", 14, 24),
                Column::bound("DRIVER", 14, 28),
                Column::bound("PHONE", 15, 18),
                Column::bound("STATUS", 6, 11),
            ]),
            2,
        )
    }
}

impl Row for Truck {
    fn name(&self) -> &str {
        &self.plate
    }

    fn column_text(&self, column: usize) -> Cow<'_, str> {
        match column {
            0 => Cow::Borrowed(&self.plate),
            1 => Cow::Borrowed(&self.model),
            2 => Cow::Borrowed(&self.driver),
            3 => Cow::Borrowed(&self.phone),
            4 => Cow::Borrowed(self.status.as_str()),
            _ => Cow::Borrowed(""),
        }
    }
}

/// Filter context that remembers the lowercased pattern, so every row comparison
/// folds only its own cells.
pub struct CellsFilterContext {
    pub pattern: String,
}

impl FilterContext for CellsFilterContext {
    fn restart(&mut self) {
        // Empty implementation.
    }
}

impl Filterable<CellsFilterContext> for Truck {
    fn get_context(pattern: &str) -> CellsFilterContext {
        CellsFilterContext {
            pattern: pattern.to_lowercase(),
        }
    }

    /// A truck matches when any of its cells contains the pattern, case-insensitively.
    fn is_matching(&self, context: &mut CellsFilterContext) -> bool {
        (0..5).any(|column| self.column_text(column).to_lowercase().contains(&context.pattern))
    }
}

/// Reads the fleet roster from a YAML file.
pub async fn load_fleet(path: &Path) -> Result<Vec<Truck>, FleetError> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut roster = String::new();
    file.read_to_string(&mut roster).await?;

    Ok(serde_yaml::from_str(&roster)?)
}
