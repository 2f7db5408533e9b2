use super::delay::Sleeper;
use super::shutdown::ShutdownCoordinator;
use super::types::{Lot, Product};
use super::warehouse::Warehouse;
use log::{debug, info};
use std::time::Duration;

/// Producer identity: a factory with a fixed product and a production rate
/// in units per tick.
#[derive(Debug, Clone)]
pub struct Factory {
    pub name: String,
    pub product: Product,
    pub rate: f64,
}

impl Factory {
    pub fn new(name: String, product: Product, rate: f64) -> Self {
        Self {
            name,
            product,
            rate,
        }
    }

    /// Units pushed per tick. The fractional part of the rate is dropped to
    /// match the integer lot granularity; a rate below 1.0 produces nothing.
    pub fn units_per_tick(&self) -> u32 {
        self.rate.floor() as u32
    }

    /// Production loop: one lot per tick until shutdown is triggered.
    ///
    /// The stop flag is checked only at cycle boundaries, so shutdown
    /// latency is bounded by one tick. A zero-unit tick pushes nothing and
    /// is a normal state, not an error. Returns the total units pushed.
    pub fn run(
        &self,
        warehouse: &Warehouse,
        stop: &ShutdownCoordinator,
        sleeper: &dyn Sleeper,
        tick: Duration,
    ) -> u64 {
        let mut pushed = 0u64;
        while !stop.is_triggered() {
            let amount = self.units_per_tick();
            if amount > 0 {
                warehouse.push(Lot::new(self.product.name.clone(), amount));
                pushed += u64::from(amount);
                info!(
                    "[Factory:{}] produced {} units of {}",
                    self.name, amount, self.product.name
                );
            } else {
                debug!(
                    "[Factory:{}] nothing produced this tick (rate {})",
                    self.name, self.rate
                );
            }
            sleeper.sleep(tick);
        }
        debug!("[Factory:{}] stopped after {} units", self.name, pushed);
        pushed
    }
}
