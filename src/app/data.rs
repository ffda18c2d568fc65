use std::{cell::RefCell, rc::Rc};

use super::Config;

/// Application data shared between UI elements.
pub type SharedAppData = Rc<RefCell<AppData>>;

/// Information about the currently displayed fleet roster.
#[derive(Default)]
pub struct FleetInfo {
    pub source: String,
    pub total: usize,
    pub shown: usize,
}

impl FleetInfo {
    /// Creates new [`FleetInfo`] instance, initially all trucks are shown.
    pub fn from(source: String, total: usize) -> Self {
        Self {
            source,
            total,
            shown: total,
        }
    }
}

/// Contains all data that application needs to run.
#[derive(Default)]
pub struct AppData {
    /// Application configuration read from file.
    pub config: Config,

    /// Information about the currently displayed fleet roster.
    pub current: FleetInfo,
}

impl AppData {
    /// Creates new [`AppData`] instance.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            current: FleetInfo::default(),
        }
    }
}
