//! Asteroids headless runner
//!
//! Runs one session with the demo pilot at the helm, no window. Rendering goes
//! to a null surface; telemetry goes to the log.
//!
//! Environment:
//! - `ASTEROIDS_CONFIG`: path to a JSON config (missing fields use defaults)
//! - `ASTEROIDS_SEED`: RNG seed (defaults to the current time)
//! - `ASTEROIDS_FRAMES`: quit after this many frames (defaults to 3600)
//! - `ASTEROIDS_FAST`: when set, skip real-time pacing and use a fixed dt
//! - `RUST_LOG`: log filter (defaults to `info`)
//!
//! Exit codes: 0 on quit, 2 on game over, 1 on a config or simulation error.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use asteroids::platform::{Clock, DemoPilot, FixedClock, NullSurface, WallClock};
use asteroids::sim::{Session, SessionEnd};
use asteroids::telemetry::LogTelemetry;
use asteroids::{Config, Error};

const DEFAULT_FRAMES: u64 = 3600;

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Invalid {name} '{raw}', using default");
            None
        }
    }
}

fn load_config() -> Result<Config, Error> {
    match std::env::var("ASTEROIDS_CONFIG") {
        Ok(path) => Ok(Config::load(path)?),
        Err(_) => Ok(Config::default()),
    }
}

fn run() -> Result<SessionEnd, Error> {
    let config = load_config()?;
    let seed = env_parse::<u64>("ASTEROIDS_SEED").unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let frames = env_parse::<u64>("ASTEROIDS_FRAMES").unwrap_or(DEFAULT_FRAMES);

    let mut clock: Box<dyn Clock> = if std::env::var_os("ASTEROIDS_FAST").is_some() {
        Box::new(FixedClock::at_fps(config.target_fps))
    } else {
        Box::new(WallClock::new())
    };
    let mut telemetry = LogTelemetry::new(config.state_log_interval);
    let mut pilot = DemoPilot::new(Some(frames));
    let mut session = Session::new(config, seed)?;

    log::info!("Starting asteroids: seed={seed}, frame budget={frames}");
    let end = session.run(&mut pilot, clock.as_mut(), &mut NullSurface, &mut telemetry)?;

    let stats = session.stats();
    log::info!(
        "Session ended ({end:?}) after {} frames / {:.1}s: {} asteroids destroyed, {} shots fired",
        session.frame_count(),
        session.elapsed(),
        stats.asteroids_destroyed,
        stats.shots_fired
    );
    Ok(end)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(end) => ExitCode::from(end.exit_code()),
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
