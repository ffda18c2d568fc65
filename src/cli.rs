use std::path::PathBuf;

use clap::Parser;

use crate::app::APP_NAME;

/// Simple program to view and filter a tow-truck fleet roster.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the fleet roster file.
    #[arg()]
    pub fleet: Option<PathBuf>,

    /// Initial filter for the trucks list.
    #[arg(long, short)]
    pub filter: Option<String>,
}

impl Args {
    /// Returns path to the fleet roster file or the default one if not provided.
    pub fn fleet_path(&self) -> PathBuf {
        if let Some(path) = &self.fleet {
            return path.clone();
        }

        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("fleet.yaml"),
            None => PathBuf::from("fleet.yaml"),
        }
    }
}
