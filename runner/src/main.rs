//! Headless host loop driving the orrery engine
//!
//! Assembles the built-in star system, derives the temporal configuration
//! from a user-supplied reference-year duration and steps the simulation at
//! a fixed frame rate, periodically logging each body's state. Rendering is
//! someone else's job; this host only produces the kinematic state a
//! renderer would consume.

use orrery::config::{apply_temporal_config, TemporalBindings, TemporalConfig};
use orrery::core::entity::{Name, Transform, World};
use orrery::io::SystemDefinition;
use orrery::orbital::update_orbital_system;
use orrery::time::SimClock;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Target frame duration (~60 Hz)
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Reference year used when no valid value is supplied
const DEFAULT_YEAR_MINUTES: f64 = 1.0;

/// Number of frames to run when no count is supplied
const DEFAULT_FRAME_COUNT: u64 = 600;

/// Frames between state readouts
const READOUT_INTERVAL: u64 = 60;

fn main() {
    orrery::init_logging();
    info!("Starting orrery runner");

    let mut args = std::env::args().skip(1);
    let year_minutes = parse_year(args.next());
    let frame_count = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FRAME_COUNT);

    let mut world = World::new();
    let bodies = SystemDefinition::solar_system()
        .instantiate(&mut world)
        .expect("built-in definition is valid");
    let bindings = TemporalBindings {
        earth: bodies["Earth"],
        moon: bodies["Moon"],
        satellite: bodies["Satellite"],
        mars: bodies["Mars"],
    };

    let config = TemporalConfig::derive(year_minutes);
    apply_temporal_config(&mut world, &bindings, &config);
    info!(
        earth_year_minutes = config.earth_year,
        earth_day_minutes = config.earth_day,
        moon_month_minutes = config.moon_month,
        satellite_minutes = config.satellite_period,
        time_scale = config.time_scale,
        "Derived temporal configuration"
    );

    // Place every body at time zero before the first real frame.
    update_orbital_system(&mut world, 0.0);

    let mut clock = SimClock::new();
    for frame in 0..frame_count {
        let elapsed_minutes = clock.tick();
        update_orbital_system(&mut world, elapsed_minutes);

        if frame % READOUT_INTERVAL == 0 {
            log_body_states(&world);
        }

        thread::sleep(FRAME_TIME);
    }

    info!(frames = frame_count, "Runner finished");
}

/// Read the reference-year duration, ignoring non-finite or non-positive
/// values in favor of the default.
fn parse_year(arg: Option<String>) -> f64 {
    match arg.and_then(|arg| arg.parse::<f64>().ok()) {
        Some(value) if value.is_finite() && value > 0.0 => value,
        Some(value) => {
            warn!(value, "Ignoring invalid reference year");
            DEFAULT_YEAR_MINUTES
        }
        None => DEFAULT_YEAR_MINUTES,
    }
}

fn log_body_states(world: &World) {
    for (_, (name, transform)) in world.query::<(&Name, &Transform)>().iter() {
        info!(
            body = %name.0,
            x = transform.position.x,
            y = transform.position.y,
            z = transform.position.z,
            yaw = transform.yaw,
            "Body state"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_accepts_positive_finite() {
        assert_eq!(parse_year(Some("2.5".into())), 2.5);
    }

    #[test]
    fn test_parse_year_rejects_invalid() {
        assert_eq!(parse_year(Some("-1".into())), DEFAULT_YEAR_MINUTES);
        assert_eq!(parse_year(Some("0".into())), DEFAULT_YEAR_MINUTES);
        assert_eq!(parse_year(Some("inf".into())), DEFAULT_YEAR_MINUTES);
        assert_eq!(parse_year(Some("NaN".into())), DEFAULT_YEAR_MINUTES);
        assert_eq!(parse_year(None), DEFAULT_YEAR_MINUTES);
    }
}
