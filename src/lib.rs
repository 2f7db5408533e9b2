pub mod config;
pub mod core;

// Re-export commonly used types
pub use crate::config::{FactoryConfig, SimulationConfig};
pub use crate::core::consumer::Truck;
pub use crate::core::delay::{InstantSleeper, Sleeper, SystemSleeper};
pub use crate::core::producer::Factory;
pub use crate::core::shutdown::ShutdownCoordinator;
pub use crate::core::simulation::{Simulation, SimulationOutcome};
pub use crate::core::stats::{StatisticsCollector, TransportReport};
pub use crate::core::types::{Lot, Product, TransportRecord};
pub use crate::core::warehouse::{DrainResult, Warehouse};
