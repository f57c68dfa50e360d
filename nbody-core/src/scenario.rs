//! The reference Jovian planets configuration
//!
//! Positions are heliocentric, in AU. Raw velocities are in AU/day and are
//! scaled to AU/year on construction; masses are in solar masses and scaled
//! by `SOLAR_MASS` so that G = 1.

use crate::engine::Body;
use glam::DVec3;
use std::f64::consts::PI;
use std::fmt;

pub const SOLAR_MASS: f64 = 4.0 * PI * PI;
pub const DAYS_PER_YEAR: f64 = 365.24;
/// Step used by the reference benchmark, in years
pub const DEFAULT_DT: f64 = 0.01;

/// Bodies of the reference configuration, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyName {
    Sun,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyName {
    pub const ALL: [BodyName; 5] = [
        BodyName::Sun,
        BodyName::Jupiter,
        BodyName::Saturn,
        BodyName::Uranus,
        BodyName::Neptune,
    ];
}

impl fmt::Display for BodyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyName::Sun => "sun",
            BodyName::Jupiter => "jupiter",
            BodyName::Saturn => "saturn",
            BodyName::Uranus => "uranus",
            BodyName::Neptune => "neptune",
        };
        f.write_str(name)
    }
}

impl Body {
    /// Build a body from ephemeris units (AU, AU/day, solar masses)
    pub fn from_ephemeris(pos: [f64; 3], vel_per_day: [f64; 3], solar_masses: f64) -> Self {
        Body::new(
            DVec3::from_array(pos),
            DVec3::from_array(vel_per_day) * DAYS_PER_YEAR,
            solar_masses * SOLAR_MASS,
        )
    }
}

/// Sun, Jupiter, Saturn, Uranus and Neptune, in that order
pub fn jovian_system() -> Vec<Body> {
    vec![
        // sun
        Body::new(DVec3::ZERO, DVec3::ZERO, SOLAR_MASS),
        // jupiter
        Body::from_ephemeris(
            [
                4.84143144246472090e+00,
                -1.16032004402742839e+00,
                -1.03622044471123109e-01,
            ],
            [
                1.66007664274403694e-03,
                7.69901118419740425e-03,
                -6.90460016972063023e-05,
            ],
            9.54791938424326609e-04,
        ),
        // saturn
        Body::from_ephemeris(
            [
                8.34336671824457987e+00,
                4.12479856412430479e+00,
                -4.03523417114321381e-01,
            ],
            [
                -2.76742510726862411e-03,
                4.99852801234917238e-03,
                2.30417297573763929e-05,
            ],
            2.85885980666130812e-04,
        ),
        // uranus
        Body::from_ephemeris(
            [
                1.28943695621391310e+01,
                -1.51111514016986312e+01,
                -2.23307578892655734e-01,
            ],
            [
                2.96460137564761618e-03,
                2.37847173959480950e-03,
                -2.96589568540237556e-05,
            ],
            4.36624404335156298e-05,
        ),
        // neptune
        Body::from_ephemeris(
            [
                1.53796971148509165e+01,
                -2.59193146099879641e+01,
                1.79258772950371181e-01,
            ],
            [
                2.68067772490389322e-03,
                1.62824170038242295e-03,
                -9.51592254519715870e-05,
            ],
            5.15138902046611451e-05,
        ),
    ]
}
