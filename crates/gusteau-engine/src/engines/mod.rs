//! State and render engines.
//!
//! Both run on their own thread and share the application context with the
//! UI engine (see [`crate::window::ui_engine`]). They loop until `join_now` is
//! set; in this chapter an iteration only records that it happened.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::core::ApplicationContext;
use crate::time::DEFAULT_RATE_HZ;

/// Engine thread configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Longest an engine sleeps between iterations while `join_now` is unset.
    pub tick_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs_f32(1.0 / DEFAULT_RATE_HZ),
        }
    }
}

/// Updates the application state until `join_now` is set.
pub fn state_engine(app: Arc<dyn ApplicationContext>, config: &EngineConfig) {
    log::debug!("state engine started");
    while !app.join_flag().wait_timeout(config.tick_interval) {
        app.state().tick();
    }
    log::debug!("state engine stopped after {} ticks", app.state().ticks());
}

/// Drives rendering until `join_now` is set.
pub fn render_engine(app: Arc<dyn ApplicationContext>, config: &EngineConfig) {
    log::debug!("render engine started");
    while !app.join_flag().wait_timeout(config.tick_interval) {
        app.render().tick();
    }
    log::debug!("render engine stopped after {} ticks", app.render().ticks());
}

/// The state and render engine threads.
pub struct Engines {
    jobs: Vec<(&'static str, JoinHandle<()>)>,
}

impl Engines {
    /// Spawns the state and render engines on named threads.
    ///
    /// If a spawn fails, `join_now` is set so any engine already running stops.
    pub fn spawn(app: Arc<dyn ApplicationContext>, config: EngineConfig) -> Result<Self> {
        type EngineFn = fn(Arc<dyn ApplicationContext>, &EngineConfig);
        let engines: [(&'static str, EngineFn); 2] =
            [("state-engine", state_engine), ("render-engine", render_engine)];

        let mut jobs = Vec::with_capacity(engines.len());
        for (name, engine) in engines {
            let engine_app = Arc::clone(&app);
            let config = config.clone();
            let spawned = thread::Builder::new()
                .name(name.to_string())
                .spawn(move || engine(engine_app, &config));

            match spawned {
                Ok(handle) => jobs.push((name, handle)),
                Err(e) => {
                    app.join_flag().request();
                    return Err(e).with_context(|| format!("failed to spawn {name}"));
                }
            }
        }

        Ok(Self { jobs })
    }

    /// Waits for every engine to exit. A panicked engine is reported as an error
    /// after all others have been joined.
    pub fn join(self) -> Result<()> {
        let mut panicked = Vec::new();
        for (name, handle) in self.jobs {
            if handle.join().is_err() {
                log::error!("{name} panicked");
                panicked.push(name);
            }
        }

        anyhow::ensure!(panicked.is_empty(), "engine(s) panicked: {}", panicked.join(", "));
        Ok(())
    }
}
