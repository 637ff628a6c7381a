//! Chapter 1: a window showing "Hello world" and a Quit button.
//!
//! `main` owns the root graphics context and the application context for the
//! whole run. The state and render engines get their own threads; the UI
//! engine runs here, on the main thread, and sets `join_now` when the user
//! quits.

mod context;
mod hello;

use std::process::ExitCode;

use anyhow::Result;
use gusteau_engine::core::ApplicationContext;
use gusteau_engine::device::{create_root_graphics_context, GraphicsConfig};
use gusteau_engine::engines::{EngineConfig, Engines};
use gusteau_engine::logging::{init_logging, LoggingConfig};
use gusteau_engine::window::ui_engine;

use context::create_application_context;
use hello::create_ui_context;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("unexpected termination: {e:#}");
            eprintln!("unexpected termination due to {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let graphics = create_root_graphics_context(GraphicsConfig::default())?;
    let ui = create_ui_context(&graphics);
    let app = create_application_context(&graphics);

    let engines = Engines::spawn(app.clone(), EngineConfig::default())?;
    log::info!(
        "engines running on {}",
        app.graphics().adapter_info().name
    );

    // Make sure the engines are told to stop even if the UI engine fails.
    let ui_result = ui_engine(app.clone(), ui);
    app.join_flag().request();

    let join_result = engines.join();
    ui_result?;
    join_result?;

    log::info!("shut down cleanly");
    Ok(())
}
