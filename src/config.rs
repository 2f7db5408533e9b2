use crate::core::types::Product;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One producer in the scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryConfig {
    pub name: String,
    pub product: Product,
    /// Units produced per tick; the amount pushed is `floor(rate)`.
    pub rate: f64,
}

/// Scenario parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub factories: Vec<FactoryConfig>,
    /// One truck per entry, each with its own per-drain capacity.
    pub truck_capacities: Vec<u32>,
    /// Advisory warehouse size multiplier applied to the summed production
    /// rates. Reported only; the buffer is never bounded by it.
    pub capacity_multiplier: f64,
    pub tick_ms: u64,
    pub transit_ms: u64,
    pub run_duration_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // The reference scenario: three factories around a base rate of 50,
        // two trucks, one minute of wall-clock production.
        let base_rate = 50.0;
        Self {
            factories: vec![
                FactoryConfig {
                    name: "Factory A".to_string(),
                    product: Product::new("A".to_string(), 1.0, "Box".to_string()),
                    rate: base_rate,
                },
                FactoryConfig {
                    name: "Factory B".to_string(),
                    product: Product::new("B".to_string(), 1.2, "Bag".to_string()),
                    rate: 1.1 * base_rate,
                },
                FactoryConfig {
                    name: "Factory C".to_string(),
                    product: Product::new("C".to_string(), 0.8, "Container".to_string()),
                    rate: 1.2 * base_rate,
                },
            ],
            truck_capacities: vec![50, 100],
            capacity_multiplier: 100.0,
            tick_ms: 1000,
            transit_ms: 2000,
            run_duration_ms: 60_000,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_factories(mut self, factories: Vec<FactoryConfig>) -> Self {
        self.factories = factories;
        self
    }

    pub fn with_factory(mut self, name: String, product: Product, rate: f64) -> Self {
        self.factories.push(FactoryConfig {
            name,
            product,
            rate,
        });
        self
    }

    pub fn with_truck_capacities(mut self, capacities: Vec<u32>) -> Self {
        self.truck_capacities = capacities;
        self
    }

    pub fn with_capacity_multiplier(mut self, multiplier: f64) -> Self {
        self.capacity_multiplier = multiplier;
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub fn with_transit_ms(mut self, transit_ms: u64) -> Self {
        self.transit_ms = transit_ms;
        self
    }

    pub fn with_run_duration_ms(mut self, run_duration_ms: u64) -> Self {
        self.run_duration_ms = run_duration_ms;
        self
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn transit(&self) -> Duration {
        Duration::from_millis(self.transit_ms)
    }

    pub fn run_duration(&self) -> Duration {
        Duration::from_millis(self.run_duration_ms)
    }

    /// Summed production rate across all factories, in units per tick.
    pub fn total_production_rate(&self) -> f64 {
        self.factories.iter().map(|factory| factory.rate).sum()
    }

    /// Advisory warehouse capacity: multiplier times the summed rates.
    /// Computed for reporting only, never enforced on push.
    pub fn warehouse_capacity(&self) -> u64 {
        (self.capacity_multiplier * self.total_production_rate()).floor() as u64
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.factories.is_empty() {
            return Err("At least one factory is required".to_string());
        }

        for factory in &self.factories {
            if factory.name.is_empty() {
                return Err("Factory names must not be empty".to_string());
            }
            if factory.product.name.is_empty() {
                return Err(format!("Factory '{}' has an unnamed product", factory.name));
            }
            if factory.rate <= 0.0 {
                return Err(format!(
                    "Factory '{}' must have a positive production rate",
                    factory.name
                ));
            }
        }

        if self.truck_capacities.is_empty() {
            return Err("At least one truck is required".to_string());
        }

        if self.truck_capacities.iter().any(|&capacity| capacity == 0) {
            return Err("Truck capacities must be greater than 0".to_string());
        }

        if self.capacity_multiplier <= 0.0 {
            return Err("Capacity multiplier must be greater than 0".to_string());
        }

        if self.tick_ms == 0 {
            return Err("Tick duration must be greater than 0".to_string());
        }

        if self.run_duration_ms == 0 {
            return Err("Run duration must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.factories.len(), 3);
        assert_eq!(config.factories[0].rate, 50.0);
        assert_eq!(config.factories[1].rate, 55.0);
        assert_eq!(config.factories[2].rate, 60.0);
        assert_eq!(config.truck_capacities, vec![50, 100]);
        assert_eq!(config.tick_ms, 1000);
        assert_eq!(config.transit_ms, 2000);
        assert_eq!(config.run_duration_ms, 60_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_warehouse_capacity_is_multiplier_times_rates() {
        let config = SimulationConfig::default();
        assert_eq!(config.total_production_rate(), 165.0);
        assert_eq!(config.warehouse_capacity(), 16_500);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimulationConfig::new()
            .with_factories(Vec::new())
            .with_factory(
                "Mill".to_string(),
                Product::new("Flour".to_string(), 25.0, "Sack".to_string()),
                12.0,
            )
            .with_truck_capacities(vec![40])
            .with_tick_ms(10)
            .with_transit_ms(5)
            .with_run_duration_ms(100);

        assert_eq!(config.factories.len(), 1);
        assert_eq!(config.factories[0].name, "Mill");
        assert_eq!(config.truck_capacities, vec![40]);
        assert_eq!(config.tick(), Duration::from_millis(10));
        assert_eq!(config.transit(), Duration::from_millis(5));
        assert_eq!(config.run_duration(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_scenarios() {
        let config = SimulationConfig::default().with_factories(Vec::new());
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_truck_capacities(Vec::new());
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_truck_capacities(vec![50, 0]);
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.factories[0].rate = -1.0;
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_tick_ms(0);
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_run_duration_ms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_transit_is_allowed() {
        let config = SimulationConfig::default().with_transit_ms(0);
        assert!(config.validate().is_ok());
    }
}
