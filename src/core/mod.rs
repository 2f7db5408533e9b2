pub mod consumer;
pub mod delay;
pub mod producer;
pub mod shutdown;
pub mod simulation;
pub mod stats;
pub mod types;
pub mod warehouse;
