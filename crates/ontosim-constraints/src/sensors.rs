//! Naming heuristics: constraint keys → sensor definitions.
//!
//! | key shape               | sensor name                         | max     | min     |
//! |-------------------------|-------------------------------------|---------|---------|
//! | `max…` (any case)       | rest, lowercased, `_` removed       | value   | `0.0`   |
//! | `min…` (any case)       | rest, lowercased                    | `None`  | value   |
//! | contains `capacity`     | `Capacity`→`Level`, lowercased      | value   | `0.0`   |
//!
//! Rules are tried in that order; keys that match none are not sensors.

use crate::{ComponentConstraints, ConstraintMap};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDefinition {
    pub raw_key: String,
    pub sensor_name: String,
    pub max_value: Option<f64>,
    pub min_value: Option<f64>,
}

impl SensorDefinition {
    pub fn new(
        raw_key: impl Into<String>,
        sensor_name: impl Into<String>,
        max_value: Option<f64>,
        min_value: Option<f64>,
    ) -> Self {
        Self {
            raw_key: raw_key.into(),
            sensor_name: sensor_name.into(),
            max_value,
            min_value,
        }
    }
}

/// Sensors for one component, in key order. Duplicated names are kept.
pub fn derive(entry: &ComponentConstraints) -> Vec<SensorDefinition> {
    let mut out = Vec::new();
    for (key, constraint) in entry {
        let lower = key.to_lowercase();
        let value = constraint.value;

        let sensor = if lower.starts_with("max") {
            let name = lower[3..].replace('_', "");
            SensorDefinition::new(key, name, value, Some(0.0))
        } else if lower.starts_with("min") {
            SensorDefinition::new(key, &lower[3..], None, value)
        } else if lower.contains("capacity") {
            let name = key.replace("Capacity", "Level").to_lowercase();
            SensorDefinition::new(key, name, value, Some(0.0))
        } else {
            continue;
        };
        out.push(sensor);
    }
    out
}

/// [`derive`] for every component; components without sensors are left out.
pub fn derive_all(map: &ConstraintMap) -> Vec<(String, Vec<SensorDefinition>)> {
    map.iter()
        .filter_map(|(component, entry)| {
            let sensors = derive(entry);
            (!sensors.is_empty()).then(|| (component.clone(), sensors))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Constraint;

    fn entry(items: &[(&str, Option<f64>)]) -> ComponentConstraints {
        items
            .iter()
            .map(|(k, v)| {
                (
                    k.to_string(),
                    Constraint {
                        value: *v,
                        unit: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn max_key_has_zero_floor() {
        let sensors = derive(&entry(&[("maxFoo", Some(10.0))]));
        assert_eq!(sensors, vec![SensorDefinition::new("maxFoo", "foo", Some(10.0), Some(0.0))]);
    }

    #[test]
    fn max_strips_underscores_and_lowercases() {
        let sensors = derive(&entry(&[("maxEngine_Rpm", Some(2000.0))]));
        assert_eq!(sensors[0].sensor_name, "enginerpm");
    }

    #[test]
    fn prefixes_are_case_insensitive() {
        let sensors = derive(&entry(&[("MaxLoad", Some(5.0)), ("MINClearance", Some(0.3))]));
        let by_key = |key: &str| sensors.iter().find(|s| s.raw_key == key).unwrap();
        assert_eq!(sensors.len(), 2);
        assert_eq!(by_key("MaxLoad").sensor_name, "load");
        assert_eq!(by_key("MaxLoad").min_value, Some(0.0));
        assert_eq!(by_key("MINClearance").sensor_name, "clearance");
        assert_eq!(by_key("MINClearance").max_value, None);
    }

    #[test]
    fn min_key_has_no_ceiling() {
        let sensors = derive(&entry(&[("minCarbody_Clearance", Some(0.5))]));
        assert_eq!(
            sensors,
            vec![SensorDefinition::new(
                "minCarbody_Clearance",
                "carbody_clearance",
                None,
                Some(0.5)
            )]
        );
    }

    #[test]
    fn capacity_becomes_level() {
        let sensors = derive(&entry(&[("fuelTankCapacity", Some(400.0))]));
        assert_eq!(
            sensors,
            vec![SensorDefinition::new(
                "fuelTankCapacity",
                "fueltanklevel",
                Some(400.0),
                Some(0.0)
            )]
        );
    }

    #[test]
    fn max_wins_over_capacity() {
        let sensors = derive(&entry(&[("maxCapacity", Some(8.0))]));
        assert_eq!(sensors[0].sensor_name, "capacity");
        assert_eq!(sensors[0].min_value, Some(0.0));
    }

    #[test]
    fn unrelated_keys_are_dropped() {
        let sensors = derive(&entry(&[
            ("maintenanceIntervalCheck", Some(1000.0)),
            ("weight", Some(50.0)),
        ]));
        assert!(sensors.is_empty());
    }

    #[test]
    fn unit_only_entries_keep_a_missing_value() {
        let sensors = derive(&entry(&[("maxPressure", None)]));
        assert_eq!(sensors[0].max_value, None);
        assert_eq!(sensors[0].min_value, Some(0.0));
    }

    #[test]
    fn same_sensor_name_is_not_merged() {
        let sensors = derive(&entry(&[("maxFlow", Some(1.0)), ("max_flow", Some(2.0))]));
        assert_eq!(sensors.len(), 2);
        assert!(sensors.iter().all(|s| s.sensor_name == "flow"));
    }

    #[test]
    fn derive_all_skips_components_without_sensors() {
        let mut map = ConstraintMap::new();
        map.insert("urn:x#A".to_string(), entry(&[("weight", Some(1.0))]));
        map.insert("urn:x#B".to_string(), entry(&[("maxLoad", Some(2.0))]));
        let all = derive_all(&map);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].0, "urn:x#B");
    }
}
