//! Temporal configuration derived from one reference duration
//!
//! The whole system is paced by a single user-adjustable value, the duration
//! of one simulated Earth year. Every other period is derived from it through
//! fixed astronomical ratios; this module is the only place real astronomy
//! enters the engine.

use crate::core::entity::World;
use hecs::Entity;
use tracing::debug;

/// Real minutes in an actual Earth year, for the speed-up readout
pub const EARTH_YEAR_REAL_MINUTES: f64 = 365.24 * 24.0 * 60.0;

/// Earth days per Earth year
pub const EARTH_DAYS_PER_YEAR: f64 = 365.24;

/// Sidereal Moon orbit, in Earth days
pub const MOON_ORBIT_DAYS: f64 = 27.3;

/// Mars year, in Earth days
pub const MARS_YEAR_DAYS: f64 = 686.98;

/// Mars solar day relative to an Earth day
pub const MARS_DAY_RATIO: f64 = 1.027491;

/// The satellite completes three orbits per Moon month
pub const SATELLITE_ORBITS_PER_MONTH: f64 = 3.0;

/// All derived periods, recomputed in full whenever the reference duration
/// changes
///
/// Durations are simulated minutes. The bundle is a plain value; applying it
/// to a world is a separate, explicit step (see [`apply_temporal_config`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalConfig {
    /// One Earth year, the user-supplied reference duration
    pub earth_year: f64,
    /// One Earth day
    pub earth_day: f64,
    /// One Moon orbit around the Earth
    pub moon_month: f64,
    /// One satellite orbit around the Moon
    pub satellite_period: f64,
    /// One Mars year
    pub mars_year: f64,
    /// One Mars day
    pub mars_day: f64,
    /// How many times faster than real time the simulation runs
    pub time_scale: f64,
}

impl TemporalConfig {
    /// Derive all dependent periods from the reference Earth-year duration.
    ///
    /// `earth_year_minutes` must be finite and positive; callers validate
    /// before handing the value in.
    pub fn derive(earth_year_minutes: f64) -> Self {
        let earth_day = earth_year_minutes / EARTH_DAYS_PER_YEAR;
        let moon_month = earth_year_minutes * (MOON_ORBIT_DAYS / EARTH_DAYS_PER_YEAR);

        Self {
            earth_year: earth_year_minutes,
            earth_day,
            moon_month,
            satellite_period: moon_month / SATELLITE_ORBITS_PER_MONTH,
            mars_year: earth_year_minutes * (MARS_YEAR_DAYS / EARTH_DAYS_PER_YEAR),
            mars_day: earth_day * MARS_DAY_RATIO,
            time_scale: EARTH_YEAR_REAL_MINUTES / earth_year_minutes,
        }
    }
}

/// Entity handles of the bodies whose periods follow the temporal config
#[derive(Debug, Clone, Copy)]
pub struct TemporalBindings {
    pub earth: Entity,
    pub moon: Entity,
    pub satellite: Entity,
    pub mars: Entity,
}

/// Write all derived periods into the bound bodies in one pass.
///
/// Runs between ticks, so no update ever observes a mixed old/new period
/// set. Phases are preserved; only the angular rates change, starting with
/// the next update.
pub fn apply_temporal_config(world: &mut World, bodies: &TemporalBindings, config: &TemporalConfig) {
    world.set_orbit_period(bodies.earth, Some(config.earth_year));
    world.set_rotation_period(bodies.earth, Some(config.earth_day));

    world.set_orbit_period(bodies.moon, Some(config.moon_month));
    world.set_rotation_period(bodies.moon, Some(config.moon_month));

    world.set_orbit_period(bodies.satellite, Some(config.satellite_period));
    world.set_rotation_period(bodies.satellite, Some(config.satellite_period));

    world.set_orbit_period(bodies.mars, Some(config.mars_year));
    world.set_rotation_period(bodies.mars, Some(config.mars_day));

    debug!(
        earth_year = config.earth_year,
        time_scale = config.time_scale,
        "Applied temporal configuration"
    );
}
