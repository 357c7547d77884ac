//! Central registry for every sweep the driver knows.
//! Maps sweep kinds to their display name and definition for menu, CLI and run-all lookup.

use clap::ValueEnum;
use seal_sweep::{ConfigError, SweepSpec};
use std::collections::HashMap;
use std::path::Path;

use crate::scenarios::{
    sweep_backbone_dim::sweep_backbone_dim, sweep_ferro::sweep_ferro, sweep_granular::sweep_granular,
    sweep_granular_v2::sweep_granular_v2, sweep_seals_basic::sweep_seals_basic,
    sweep_seals_branching::sweep_seals_branching, sweep_seals_neighbour::sweep_seals_neighbour,
};

/// The observed sweep campaigns. Each one is an independent configuration, not a mode of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SweepKind {
    Ferro,
    GranularV2,
    Granular,
    SealsBranching,
    SealsNeighbour,
    SealsBasic,
    BackboneDim,
}

impl SweepKind {
    /// Menu order.
    pub const ALL: [SweepKind; 7] = [
        SweepKind::Ferro,
        SweepKind::GranularV2,
        SweepKind::Granular,
        SweepKind::SealsBranching,
        SweepKind::SealsNeighbour,
        SweepKind::SealsBasic,
        SweepKind::BackboneDim,
    ];

    /// Name accepted on the command line, e.g. `granular-v2`.
    pub fn key(&self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }
}

/// Builds a sweep against the given executable.
pub type BuildFn = fn(&Path) -> Result<SweepSpec, ConfigError>;

/// Configuration for a sweep kind
pub struct SweepDefinition {
    pub kind: SweepKind,
    pub name: &'static str,
    pub build: BuildFn,
}

/// Registry that holds all sweep definitions
pub struct SweepRegistry {
    sweeps: HashMap<SweepKind, SweepDefinition>,
}

impl SweepRegistry {
    pub fn new() -> Self {
        let mut sweeps = HashMap::new();
        let mut register = |kind: SweepKind, name: &'static str, build: BuildFn| {
            sweeps.insert(kind, SweepDefinition { kind, name, build });
        };

        register(SweepKind::Ferro, "Ferrofluid (overdamped), seeds 1-100", sweep_ferro);
        register(SweepKind::GranularV2, "Granular v2 (overdamped), seeds 1-20", sweep_granular_v2);
        register(SweepKind::Granular, "Granular (overdamped), seeds 1-100", sweep_granular);
        register(SweepKind::SealsBranching, "Seals, bounded branching, seeds 1-100", sweep_seals_branching);
        register(SweepKind::SealsNeighbour, "Seals, neighbour-limited repulsion, seeds 1-100", sweep_seals_neighbour);
        register(SweepKind::SealsBasic, "Seals, basic, seeds 12-100", sweep_seals_basic);
        register(SweepKind::BackboneDim, "Seals backbone dimension, scale 5", sweep_backbone_dim);

        Self { sweeps }
    }

    pub fn get(&self, kind: &SweepKind) -> Option<&SweepDefinition> {
        self.sweeps.get(kind)
    }

    /// Definitions in menu order.
    pub fn definitions(&self) -> impl Iterator<Item = &SweepDefinition> + '_ {
        SweepKind::ALL.iter().filter_map(move |kind| self.sweeps.get(kind))
    }

    pub fn build(&self, kind: &SweepKind, executable: &Path) -> Option<Result<SweepSpec, ConfigError>> {
        self.get(kind).map(|definition| (definition.build)(executable))
    }

    /// Global registry instance
    pub fn global() -> &'static SweepRegistry {
        &REGISTRY
    }
}

impl Default for SweepRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    static ref REGISTRY: SweepRegistry = SweepRegistry::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_is_registered_and_valid() {
        let registry = SweepRegistry::global();
        assert_eq!(registry.definitions().count(), SweepKind::ALL.len());
        for kind in SweepKind::ALL {
            let spec = registry
                .build(&kind, Path::new("./seals"))
                .expect("Kind should be registered")
                .expect("Registered sweep should be valid");
            assert_eq!(spec.executable(), Path::new("./seals"));
        }
    }

    #[test]
    fn test_keys() {
        assert_eq!(SweepKind::GranularV2.key(), "granular-v2");
        assert_eq!(SweepKind::BackboneDim.key(), "backbone-dim");
        assert_eq!(SweepKind::from_str("seals-basic", false), Ok(SweepKind::SealsBasic));
    }
}
