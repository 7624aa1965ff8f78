pub mod board;
pub mod config;
pub mod consts;
pub mod harness;
pub mod rng;
pub mod simulation;
pub mod types;
