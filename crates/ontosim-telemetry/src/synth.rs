//! One synthetic reading per call.
//!
//! | bounds      | normal draw          | violation (5%)       |
//! |-------------|----------------------|----------------------|
//! | max and min | `[min, max]`         | draw × 1.1           |
//! | max only    | `[0, max]`           | exactly `max × 1.1`  |
//! | min only    | `[min, min + 2.0]`   | exactly `min − 0.1`  |
//! | neither     | `[0, 100]`           | none                 |

use ontosim_constraints::SensorDefinition;
use rand::Rng;

/// Chance that a reading is pushed outside its nominal bounds.
pub const VIOLATION_PROBABILITY: f64 = 0.05;

/// Factor applied above the nominal maximum on a violation.
pub const OVERSHOOT_FACTOR: f64 = 1.1;

/// Width of the synthetic window above a min-only bound.
pub const MIN_ONLY_SPAN: f64 = 2.0;

/// Distance below a min-only bound on a violation.
pub const UNDERSHOOT: f64 = 0.1;

/// Range used when a sensor has no bounds at all.
pub const UNBOUNDED_RANGE: (f64, f64) = (0.0, 100.0);

/// Sample with the thread-local generator.
pub fn sample(sensor: &SensorDefinition) -> f64 {
    sample_with(sensor, &mut rand::rng())
}

/// Sample with an explicit generator (seed it for reproducible series).
pub fn sample_with<R: Rng + ?Sized>(sensor: &SensorDefinition, rng: &mut R) -> f64 {
    match (sensor.max_value, sensor.min_value) {
        (Some(max), Some(min)) => {
            let value = uniform(rng, min, max);
            if violates(rng) {
                value * OVERSHOOT_FACTOR
            } else {
                value
            }
        }
        (Some(max), None) => {
            let value = uniform(rng, 0.0, max);
            if violates(rng) {
                max * OVERSHOOT_FACTOR
            } else {
                value
            }
        }
        (None, Some(min)) => {
            let value = uniform(rng, min, min + MIN_ONLY_SPAN);
            if violates(rng) {
                min - UNDERSHOOT
            } else {
                value
            }
        }
        (None, None) => uniform(rng, UNBOUNDED_RANGE.0, UNBOUNDED_RANGE.1),
    }
}

/// `a + (b - a) * u` with `u` in `[0, 1)`; inverted bounds are allowed.
fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + (b - a) * rng.random::<f64>()
}

fn violates<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random::<f64>() < VIOLATION_PROBABILITY
}
