use super::types::TransportRecord;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Mutex;

/// Append-only log of everything the trucks carried, plus the number of
/// completed trips. Written by consumers during the run, read once at
/// teardown after all tasks have joined.
#[derive(Debug, Default)]
pub struct StatisticsCollector {
    inner: Mutex<StatsInner>,
}

#[derive(Debug, Default)]
struct StatsInner {
    records: Vec<TransportRecord>,
    trips: u64,
}

impl StatisticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every record of one completed drain and counts the trip,
    /// under a single lock acquisition.
    pub fn record_trip(&self, records: Vec<TransportRecord>) {
        let mut inner = self.inner.lock().unwrap();
        inner.records.extend(records);
        inner.trips += 1;
    }

    pub fn completed_trips(&self) -> u64 {
        self.inner.lock().unwrap().trips
    }

    /// Sum of all recorded amounts.
    pub fn recorded_units(&self) -> u64 {
        self.inner
            .lock()
            .unwrap()
            .records
            .iter()
            .map(|record| u64::from(record.amount))
            .sum()
    }

    /// Copy of the log and trip count for the teardown reporter.
    pub fn snapshot(&self) -> (Vec<TransportRecord>, u64) {
        let inner = self.inner.lock().unwrap();
        (inner.records.clone(), inner.trips)
    }

    pub fn report(&self) -> TransportReport {
        let (records, trips) = self.snapshot();
        TransportReport::from_records(&records, trips)
    }
}

/// Aggregated end-of-run statistics: per-product totals, grand total,
/// completed trips and the average load per trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportReport {
    pub per_product: BTreeMap<String, u64>,
    pub total_units: u64,
    pub trips: u64,
    /// `None` when no trip completed; the division is undefined then and is
    /// reported as "no data" rather than failing.
    pub average_per_trip: Option<f64>,
}

impl TransportReport {
    pub fn from_records(records: &[TransportRecord], trips: u64) -> Self {
        let mut per_product: BTreeMap<String, u64> = BTreeMap::new();
        let mut total_units = 0u64;
        for record in records {
            *per_product.entry(record.product.clone()).or_insert(0) += u64::from(record.amount);
            total_units += u64::from(record.amount);
        }
        let average_per_trip = if trips > 0 {
            Some(total_units as f64 / trips as f64)
        } else {
            None
        };
        Self {
            per_product,
            total_units,
            trips,
            average_per_trip,
        }
    }
}

impl fmt::Display for TransportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transport Statistics:")?;
        for (product, units) in &self.per_product {
            writeln!(f, "Product {}: {} units transported", product, units)?;
        }
        writeln!(f, "Completed trips: {}", self.trips)?;
        match self.average_per_trip {
            Some(average) => writeln!(f, "Average units per trip: {:.2}", average),
            None => writeln!(f, "Average units per trip: no completed trips"),
        }
    }
}
