use super::delay::Sleeper;
use super::shutdown::ShutdownCoordinator;
use super::stats::StatisticsCollector;
use super::warehouse::Warehouse;
use log::{debug, info};
use std::time::Duration;

/// Consumer identity: a truck with a fixed per-drain capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truck {
    pub id: usize,
    pub capacity: u32,
}

impl Truck {
    pub fn new(id: usize, capacity: u32) -> Self {
        Self { id, capacity }
    }

    /// Consumer loop: wait for work, drain up to capacity, ride out the
    /// transit delay with no lock held, then record the trip and go back to
    /// waiting. Exits once shutdown is triggered and the buffer is empty,
    /// draining any leftovers first. Returns the number of completed trips.
    pub fn run(
        &self,
        warehouse: &Warehouse,
        stats: &StatisticsCollector,
        stop: &ShutdownCoordinator,
        sleeper: &dyn Sleeper,
        transit: Duration,
    ) -> u64 {
        let mut trips = 0u64;
        loop {
            let drain = match warehouse.wait_and_drain(self.capacity, stop) {
                Some(drain) => drain,
                None => break,
            };
            debug!(
                "[Truck:{}] loaded {} units across {} lot fragments",
                self.id,
                drain.total_units,
                drain.records.len()
            );
            sleeper.sleep(transit);

            let total = drain.total_units;
            stats.record_trip(drain.records);
            trips += 1;
            info!("[Truck:{}] transported {} units", self.id, total);
        }
        debug!("[Truck:{}] stopped after {} trips", self.id, trips);
        trips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::delay::InstantSleeper;
    use crate::core::types::Lot;

    #[test]
    fn test_drains_leftovers_in_capacity_batches() {
        let warehouse = Warehouse::new();
        let stats = StatisticsCollector::new();
        let stop = ShutdownCoordinator::new();

        warehouse.push(Lot::new("A".to_string(), 30));
        stop.trigger();

        let truck = Truck::new(0, 25);
        let trips = truck.run(&warehouse, &stats, &stop, &InstantSleeper, Duration::ZERO);

        // 30 units against capacity 25: a full first load and a 5-unit second.
        assert_eq!(trips, 2);
        assert_eq!(stats.completed_trips(), 2);
        assert_eq!(stats.recorded_units(), 30);
        assert!(warehouse.is_empty());

        let (records, _) = stats.snapshot();
        assert_eq!(records[0].amount, 25);
        assert_eq!(records[1].amount, 5);
    }

    #[test]
    fn test_each_trip_respects_capacity() {
        let warehouse = Warehouse::new();
        let stats = StatisticsCollector::new();
        let stop = ShutdownCoordinator::new();

        for quantity in [10, 10, 10] {
            warehouse.push(Lot::new("B".to_string(), quantity));
        }
        stop.trigger();

        let truck = Truck::new(1, 25);
        truck.run(&warehouse, &stats, &stop, &InstantSleeper, Duration::ZERO);

        let (records, trips) = stats.snapshot();
        assert_eq!(trips, 2);
        // First trip spans three lots (10 + 10 + 5), second takes the rest.
        let first_trip: u32 = records[..3].iter().map(|r| r.amount).sum();
        assert_eq!(first_trip, 25);
        let second_trip: u32 = records[3..].iter().map(|r| r.amount).sum();
        assert_eq!(second_trip, 5);
    }

    #[test]
    fn test_exits_without_trips_when_stopped_and_empty() {
        let warehouse = Warehouse::new();
        let stats = StatisticsCollector::new();
        let stop = ShutdownCoordinator::new();
        stop.trigger();

        let truck = Truck::new(2, 50);
        let trips = truck.run(&warehouse, &stats, &stop, &InstantSleeper, Duration::ZERO);

        assert_eq!(trips, 0);
        assert_eq!(stats.completed_trips(), 0);
    }
}
