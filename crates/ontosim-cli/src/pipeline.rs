//! Stage wiring shared by the subcommands.

use crate::config::SimulationConfig;
use crate::recorder::CsvRecorder;
use anyhow::{Context, Result};
use ontosim_constraints::{derive_all, extract_file, ConstraintMap, SensorDefinition};
use ontosim_graph::{build, Record};
use ontosim_telemetry::{parse_base_time, TimeSeries};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub struct BuildSummary {
    pub triples: usize,
}

pub struct SimulationSummary {
    pub sensors: usize,
    pub readings: usize,
}

/// Record JSON → Turtle file.
pub fn build_graph(input: &Path, out: &Path, namespace: &str) -> Result<BuildSummary> {
    let record = Record::from_path(input)
        .with_context(|| format!("failed to load record {}", input.display()))?;
    let graph = build(&record, namespace)?;
    graph
        .write_turtle(out)
        .with_context(|| format!("failed to write graph {}", out.display()))?;
    Ok(BuildSummary {
        triples: graph.len(),
    })
}

pub fn load_constraints(graph: &Path, namespace: &str) -> Result<ConstraintMap> {
    extract_file(graph, namespace)
        .with_context(|| format!("failed to extract constraints from {}", graph.display()))
}

pub fn load_sensors(graph: &Path, namespace: &str) -> Result<Vec<(String, Vec<SensorDefinition>)>> {
    let constraints = load_constraints(graph, namespace)?;
    Ok(derive_all(&constraints))
}

/// Graph file → CSV of readings.
pub fn simulate(graph: &Path, out: &Path, config: &SimulationConfig) -> Result<SimulationSummary> {
    let base = parse_base_time(&config.base_time)?;
    let series = load_sensors(graph, &config.namespace)?
        .into_iter()
        .fold(TimeSeries::new(base, config.samples), |series, (component, sensors)| {
            series.with_component(component, sensors)
        });
    if series.sensor_count() == 0 {
        tracing::warn!(graph = %graph.display(), "no sensors derived; output will only hold a header");
    }

    let file = File::create(out).with_context(|| format!("failed to create {}", out.display()))?;
    let mut recorder = CsvRecorder::new(BufWriter::new(file))?;

    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            for reading in series.readings(&mut rng) {
                recorder.record(&reading?)?;
            }
        }
        None => {
            let mut rng = rand::rng();
            for reading in series.readings(&mut rng) {
                recorder.record(&reading?)?;
            }
        }
    }

    let readings = recorder.rows();
    recorder.finish()?;
    tracing::info!(
        sensors = series.sensor_count(),
        readings,
        out = %out.display(),
        "recorded telemetry"
    );
    Ok(SimulationSummary {
        sensors: series.sensor_count(),
        readings,
    })
}
