pub mod sweep_ferro;
pub mod sweep_granular_v2;
pub mod sweep_granular;
pub mod sweep_seals_branching;
pub mod sweep_seals_neighbour;
pub mod sweep_seals_basic;
pub mod sweep_backbone_dim;
pub mod run_all;
pub mod utils;

#[cfg(test)]
mod tests;
