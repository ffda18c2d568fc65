use anyhow::{Context, Result};
use app::{App, Config, ExecutionFlow};
use clap::Parser;
use std::thread::sleep;
use std::time::{Duration, Instant};
use tokio::runtime::Builder;
use tracing::{error, info};

pub mod app;
pub mod cli;
pub mod logging;
pub mod ui;
pub mod utils;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = logging::initialize()?;
    info!("{} v{} started", app::APP_NAME, app::APP_VERSION);

    if let Err(error) = run_application(args) {
        error!(
            "{} v{} terminated with an error: {}",
            app::APP_NAME,
            app::APP_VERSION,
            error
        );
        Err(error)
    } else {
        info!("{} v{} stopped", app::APP_NAME, app::APP_VERSION);
        Ok(())
    }
}

fn run_application(args: cli::Args) -> Result<()> {
    let rt = Builder::new_multi_thread().enable_all().build()?;

    let fleet_path = args.fleet_path();
    let trucks = rt
        .block_on(app::fleet::load_fleet(&fleet_path))
        .with_context(|| format!("cannot load fleet roster from '{}'", fleet_path.display()))?;
    let source = fleet_path.display().to_string();

    let config = rt.block_on(Config::load_or_create())?;
    let mut app = App::new(rt.handle().clone(), config, trucks, source)?;

    app.start(args.filter)?;
    application_loop(&mut app)?;
    app.stop()?;

    Ok(())
}

fn application_loop(app: &mut App) -> Result<(), anyhow::Error> {
    const FPS: u64 = 20;
    const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FPS);

    loop {
        let frame_start = Instant::now();
        if app.process_events()? == ExecutionFlow::Stop {
            break;
        }

        app.draw_frame()?;

        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_DURATION {
            sleep(FRAME_DURATION - frame_time);
        }
    }

    Ok(())
}
