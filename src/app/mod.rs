pub use self::app::{App, ExecutionFlow};
pub use self::config::{APP_NAME, APP_VERSION, Config, ConfigError, Persistable};
pub use self::data::{AppData, FleetInfo, SharedAppData};

pub mod fleet;
pub mod lists;
pub mod utils;

mod app;
mod config;
mod data;
