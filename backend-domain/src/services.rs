// Pure domain services

pub mod inventory_joiner;

pub use inventory_joiner::*;
