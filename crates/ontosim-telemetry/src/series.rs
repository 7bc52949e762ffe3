//! Evenly spaced synthetic readings over a set of sensors.

use crate::synth::sample_with;
use crate::time::timestamp;
use crate::Result;
use chrono::NaiveDateTime;
use ontosim_constraints::SensorDefinition;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: String,
    pub component: String,
    pub sensor_name: String,
    pub value: f64,
}

/// `samples` ticks, one minute apart; every sensor is read once per tick.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    base: NaiveDateTime,
    samples: usize,
    sensors: Vec<(String, SensorDefinition)>,
}

impl TimeSeries {
    pub fn new(base: NaiveDateTime, samples: usize) -> Self {
        Self {
            base,
            samples,
            sensors: Vec::new(),
        }
    }

    pub fn with_component(
        mut self,
        component: impl Into<String>,
        sensors: impl IntoIterator<Item = SensorDefinition>,
    ) -> Self {
        let component = component.into();
        let before = self.sensors.len();
        self.sensors
            .extend(sensors.into_iter().map(|s| (component.clone(), s)));
        tracing::debug!(
            component = component.as_str(),
            sensors = self.sensors.len() - before,
            "added component to series"
        );
        self
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Total number of readings [`TimeSeries::readings`] yields.
    pub fn len(&self) -> usize {
        self.samples * self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn readings<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> Readings<'a, R> {
        Readings {
            series: self,
            rng,
            tick: 0,
            sensor: 0,
        }
    }
}

/// Iterator over the readings of a [`TimeSeries`], tick-major. Ends after the
/// first tick whose timestamp cannot be represented.
pub struct Readings<'a, R: ?Sized> {
    series: &'a TimeSeries,
    rng: &'a mut R,
    tick: usize,
    sensor: usize,
}

impl<R: Rng + ?Sized> Iterator for Readings<'_, R> {
    type Item = Result<Reading>;

    fn next(&mut self) -> Option<Result<Reading>> {
        let series = self.series;
        if series.sensors.is_empty() || self.tick >= series.samples {
            return None;
        }
        let offset = i64::try_from(self.tick).unwrap_or(i64::MAX);
        let timestamp = match timestamp(series.base, offset) {
            Ok(t) => t,
            Err(e) => {
                self.tick = series.samples;
                return Some(Err(e));
            }
        };
        let (component, def) = &series.sensors[self.sensor];
        let reading = Reading {
            timestamp,
            component: component.clone(),
            sensor_name: def.sensor_name.clone(),
            value: sample_with(def, &mut *self.rng),
        };

        self.sensor += 1;
        if self.sensor == series.sensors.len() {
            self.sensor = 0;
            self.tick += 1;
        }
        Some(Ok(reading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_base_time;
    use crate::TelemetryError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn series(samples: usize) -> TimeSeries {
        TimeSeries::new(parse_base_time("2025-03-01 08:00:00").unwrap(), samples)
            .with_component(
                "urn:x#Pump1",
                [SensorDefinition::new("maxFlowRate", "flowrate", Some(266.0), Some(0.0))],
            )
            .with_component(
                "urn:x#Track",
                [SensorDefinition::new("minClearance", "clearance", None, Some(0.4))],
            )
    }

    #[test]
    fn every_sensor_is_read_once_per_tick() {
        let series = series(3);
        let mut rng = StdRng::seed_from_u64(9);
        let readings: Vec<Reading> = series.readings(&mut rng).collect::<Result<_>>().unwrap();

        assert_eq!(readings.len(), series.len());
        assert_eq!(readings.len(), 6);
        assert_eq!(readings[0].timestamp, "2025-03-01 08:00:00");
        assert_eq!(readings[1].timestamp, "2025-03-01 08:00:00");
        assert_eq!(readings[2].timestamp, "2025-03-01 08:01:00");
        assert_eq!(readings[5].timestamp, "2025-03-01 08:02:00");
        assert_eq!(readings[0].sensor_name, "flowrate");
        assert_eq!(readings[1].component, "urn:x#Track");
    }

    #[test]
    fn no_sensors_means_no_readings() {
        let series = TimeSeries::new(parse_base_time("2025-03-01 08:00:00").unwrap(), 10);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(series.is_empty());
        assert_eq!(series.readings(&mut rng).count(), 0);
    }

    #[test]
    fn zero_samples_means_no_readings() {
        let series = series(0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(series.readings(&mut rng).count(), 0);
    }

    #[test]
    fn stops_at_the_first_unrepresentable_timestamp() {
        let near_end = NaiveDateTime::MAX - chrono::TimeDelta::minutes(1);
        let series = TimeSeries::new(near_end, 5).with_component(
            "urn:x#Pump1",
            [SensorDefinition::new("maxFlowRate", "flowrate", Some(266.0), Some(0.0))],
        );
        let mut rng = StdRng::seed_from_u64(3);
        let results: Vec<Result<Reading>> = series.readings(&mut rng).collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(
            results[2],
            Err(TelemetryError::TimestampOutOfRange { offset: 2, .. })
        ));
    }
}
