pub mod classifier;
pub mod generator;
pub mod simulator;
