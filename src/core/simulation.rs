use crate::config::SimulationConfig;
use crate::core::consumer::Truck;
use crate::core::delay::{Sleeper, SystemSleeper};
use crate::core::producer::Factory;
use crate::core::shutdown::ShutdownCoordinator;
use crate::core::stats::{StatisticsCollector, TransportReport};
use crate::core::warehouse::Warehouse;
use log::{debug, info};
use std::sync::Arc;
use std::thread;

/// Everything a finished run reports back to the caller.
///
/// The conservation property holds over these fields: units produced equals
/// units transported plus units left in the warehouse. A producer that beats
/// the shutdown check by one cycle can leave lots behind after the trucks
/// have already exited, so the leftover count is part of the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub report: TransportReport,
    pub units_produced: u64,
    pub units_left_in_warehouse: u64,
}

/// Orchestrates one complete run: spawns one thread per factory and per
/// truck, lets them work for the configured duration, triggers cooperative
/// shutdown with a broadcast wake, joins everything and aggregates the
/// transport statistics.
pub struct Simulation {
    config: SimulationConfig,
    sleeper: Arc<dyn Sleeper>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            sleeper: Arc::new(SystemSleeper),
        }
    }

    /// Replaces the wall-clock sleeper. Tests use this to run whole
    /// simulations without real delays.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run(&self) -> Result<SimulationOutcome, String> {
        self.config.validate()?;

        let warehouse = Arc::new(Warehouse::new());
        let stats = Arc::new(StatisticsCollector::new());
        let stop = Arc::new(ShutdownCoordinator::new());

        info!(
            "starting run: {} factories, {} trucks, advisory warehouse capacity {} units",
            self.config.factories.len(),
            self.config.truck_capacities.len(),
            self.config.warehouse_capacity()
        );

        let tick = self.config.tick();
        let transit = self.config.transit();

        let mut producer_handles = Vec::new();
        for factory_config in &self.config.factories {
            let factory = Factory::new(
                factory_config.name.clone(),
                factory_config.product.clone(),
                factory_config.rate,
            );
            let warehouse = Arc::clone(&warehouse);
            let stop = Arc::clone(&stop);
            let sleeper = Arc::clone(&self.sleeper);
            let handle = thread::Builder::new()
                .name(format!("factory-{}", factory.product.name))
                .spawn(move || factory.run(&warehouse, &stop, sleeper.as_ref(), tick))
                .map_err(|e| format!("Failed to spawn producer thread: {}", e))?;
            producer_handles.push(handle);
        }

        let mut consumer_handles = Vec::new();
        for (id, &capacity) in self.config.truck_capacities.iter().enumerate() {
            let truck = Truck::new(id, capacity);
            let warehouse = Arc::clone(&warehouse);
            let stats = Arc::clone(&stats);
            let stop = Arc::clone(&stop);
            let sleeper = Arc::clone(&self.sleeper);
            let handle = thread::Builder::new()
                .name(format!("truck-{}", id))
                .spawn(move || truck.run(&warehouse, &stats, &stop, sleeper.as_ref(), transit))
                .map_err(|e| format!("Failed to spawn consumer thread: {}", e))?;
            consumer_handles.push(handle);
        }

        // Let the pipeline work for the configured duration, then stop it.
        // The broadcast wake after the flag guarantees parked consumers
        // re-evaluate their exit condition.
        self.sleeper.sleep(self.config.run_duration());
        stop.trigger();
        warehouse.wake_all();
        debug!("shutdown triggered, joining tasks");

        let mut units_produced = 0u64;
        for handle in producer_handles {
            units_produced += handle
                .join()
                .map_err(|_| "Producer thread panicked".to_string())?;
        }
        for handle in consumer_handles {
            handle
                .join()
                .map_err(|_| "Consumer thread panicked".to_string())?;
        }

        let outcome = SimulationOutcome {
            report: stats.report(),
            units_produced,
            units_left_in_warehouse: warehouse.queued_units(),
        };
        info!(
            "run complete: {} units produced, {} transported over {} trips, {} left in warehouse",
            outcome.units_produced,
            outcome.report.total_units,
            outcome.report.trips,
            outcome.units_left_in_warehouse
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::delay::InstantSleeper;

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = SimulationConfig::default().with_truck_capacities(Vec::new());
        let result = Simulation::new(config).run();
        assert!(result.is_err());
    }

    #[test]
    fn test_run_with_no_production_reports_no_trips() {
        // Rates below 1.0 floor to zero units per tick, so the trucks never
        // see work and the average must come out as "no data".
        let config = SimulationConfig::new()
            .with_factories(Vec::new())
            .with_factory(
                "Idle".to_string(),
                crate::core::types::Product::new("X".to_string(), 1.0, "Box".to_string()),
                0.5,
            )
            .with_truck_capacities(vec![10])
            .with_tick_ms(1)
            .with_transit_ms(1)
            .with_run_duration_ms(1);

        let outcome = Simulation::new(config)
            .with_sleeper(Arc::new(InstantSleeper))
            .run()
            .expect("run should succeed");

        assert_eq!(outcome.units_produced, 0);
        assert_eq!(outcome.report.trips, 0);
        assert_eq!(outcome.report.average_per_trip, None);
        assert_eq!(outcome.units_left_in_warehouse, 0);
    }
}
