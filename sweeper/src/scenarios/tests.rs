use seal_sweep::{FlagValue, SweepError};
use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::sweep_registry::SweepRegistry;

use super::run_all::run_all_sweeps;
use super::sweep_backbone_dim::sweep_backbone_dim;
use super::sweep_ferro::sweep_ferro;
use super::sweep_granular::sweep_granular;
use super::sweep_granular_v2::sweep_granular_v2;
use super::sweep_seals_basic::sweep_seals_basic;
use super::sweep_seals_branching::sweep_seals_branching;
use super::sweep_seals_neighbour::sweep_seals_neighbour;
use super::utils::RunOptions;

fn seals() -> &'static Path {
    Path::new("./seals")
}

#[test]
fn test_ferro_command_line() {
    let spec = sweep_ferro(seals()).expect("Ferro sweep should be valid");
    assert_eq!((spec.start_index(), spec.count()), (1, 100));
    assert_eq!(
        spec.command_line(42).to_string(),
        "./seals -overdamped -particles 500 -iter 120000 -growth 6 -magnitude 0.004 \
         -pressure 0.001 -surface-tension 1.3 -seed 42"
    );
}

#[test]
fn test_granular_v2_command_line() {
    let spec = sweep_granular_v2(seals()).expect("Granular v2 sweep should be valid");
    assert_eq!((spec.start_index(), spec.count()), (1, 20));
    assert_eq!(
        spec.command_line(20).to_string(),
        "./seals -overdamped -iter 120000 -particles 600 -magnitude 0.005 -growth 5 \
         -repulsion 1.8 -final-target-volume 0.01 -pressure 0.00005 -seed 20"
    );
}

#[test]
fn test_granular_command_line() {
    let spec = sweep_granular(seals()).expect("Granular sweep should be valid");
    assert_eq!((spec.start_index(), spec.count()), (1, 100));
    assert_eq!(
        spec.command_line(1).to_string(),
        "./seals -overdamped -iter 40000 -particles 200 -magnitude 0.005 -growth 2 -repulsion 1.8 -seed 1"
    );
}

#[test]
fn test_seals_branching_command_line() {
    let spec = sweep_seals_branching(seals()).expect("Branching sweep should be valid");
    assert_eq!(
        spec.command_line(7).to_string(),
        "./seals -seals -rep-max-neighbour -stop-branching-after 0.678714859437751 -max-leaf-distance 2 -seed 7"
    );
}

#[test]
fn test_seals_neighbour_and_basic() {
    let neighbour = sweep_seals_neighbour(seals()).expect("Neighbour sweep should be valid");
    assert_eq!(neighbour.command_line(3).to_string(), "./seals -seals -rep-max-neighbour -seed 3");
    assert_eq!(neighbour.run_count(), 100);

    let basic = sweep_seals_basic(seals()).expect("Basic sweep should be valid");
    assert_eq!((basic.start_index(), basic.count()), (12, 100));
    assert_eq!(basic.run_count(), 89);
    assert_eq!(basic.command_line(12).to_string(), "./seals -seals -seed 12");
}

#[test]
fn test_backbone_dim_values() {
    let spec = sweep_backbone_dim(seals()).expect("Backbone sweep should be valid");
    assert_eq!(spec.running_variable(), "scale");
    assert_eq!(spec.run_count(), 1);

    let point = spec.point(5);
    assert_eq!(point.value_of("magnitude"), Some(FlagValue::Float(0.002)));
    assert_eq!(point.value_of("boundary-radius"), Some(FlagValue::Float(0.01)));
    assert_eq!(point.value_of("boundary-target-density"), Some(FlagValue::Int(250)));
    assert_eq!(point.value_of("iter"), Some(FlagValue::Int(223607)));
    assert_eq!(
        spec.command_line(5).to_string(),
        "./seals -seals -rep-max-neighbour -compute-backbone-dim -magnitude 0.002 \
         -boundary-radius 0.01 -boundary-target-density 250 -iter 223607"
    );
}

fn run_all_options(executable: &Path) -> RunOptions {
    RunOptions {
        executable: executable.to_path_buf(),
        ..RunOptions::from_config(&Config::default())
    }
}

#[tokio::test]
async fn test_run_all_stops_at_first_launch_failure() {
    let result = run_all_sweeps(&run_all_options(Path::new("/nonexistent/seals"))).await;
    match result {
        Err(ConfigError::Sweep(SweepError::Launch(e))) => {
            // ferro comes first in the registry, and its first seed is the one that fails
            let ferro = sweep_ferro(Path::new("/nonexistent/seals")).expect("Ferro sweep should be valid");
            assert_eq!(e.command, ferro.command_line(1).to_string());
        }
        other => panic!("expected a launch failure, got {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_all_walks_registry_in_order() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log = dir.path().join("calls.log");
    let stub = dir.path().join("seals");
    std::fs::write(&stub, format!("#!/bin/sh\necho \"$@\" >> '{}'\nexit 1\n", log.display()))
        .expect("Failed to write stub");
    let mut permissions = std::fs::metadata(&stub).expect("Failed to stat stub").permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&stub, permissions).expect("Failed to chmod stub");

    let reports = run_all_sweeps(&run_all_options(&stub)).await.expect("Every sweep should run");

    let expected: Vec<String> = SweepRegistry::global()
        .definitions()
        .flat_map(|definition| {
            let spec = (definition.build)(stub.as_path()).expect("Registered sweep should be valid");
            spec.points()
                .map(|point| spec.command_line(point.index).args().join(" "))
                .collect::<Vec<_>>()
        })
        .collect();
    let calls = std::fs::read_to_string(&log).expect("Stub should have been called");
    assert_eq!(calls.lines().collect::<Vec<_>>(), expected);

    assert_eq!(reports.len(), 7);
    assert_eq!(reports.iter().map(|report| report.results.len()).sum::<usize>(), 510);
    // the stub always exits 1; no sweep stops early because of it
    assert!(reports.iter().all(|report| report.failures().len() == report.results.len()));
}
