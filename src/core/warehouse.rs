use super::shutdown::ShutdownCoordinator;
use super::types::{Lot, TransportRecord};
use log::debug;
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// Result of a single drain: the lot fragments taken, in buffer order, and
/// their total. The total never exceeds the `max_units` passed to the drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrainResult {
    pub records: Vec<TransportRecord>,
    pub total_units: u32,
}

impl DrainResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Shared FIFO buffer of lots, guarded by one mutex with a condvar that
/// wakes consumers when work arrives.
///
/// The buffer is unbounded: the advisory warehouse capacity computed from
/// configuration is reported but never checked on push.
pub struct Warehouse {
    lots: Mutex<VecDeque<Lot>>,
    not_empty: Condvar,
}

impl Warehouse {
    pub fn new() -> Self {
        Self {
            lots: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
        }
    }

    /// Appends a lot to the tail and wakes one waiting consumer.
    pub fn push(&self, lot: Lot) {
        debug_assert!(lot.quantity > 0, "buffered lots must hold units");
        {
            let mut lots = self.lots.lock().unwrap();
            lots.push_back(lot);
        }
        self.not_empty.notify_one();
    }

    /// Takes up to `max_units` from the head of the buffer without blocking.
    ///
    /// Walks the buffer front to back, taking `min(remaining budget,
    /// head.quantity)` per lot: a fully taken head is removed, a partially
    /// taken one stays in place with its quantity reduced. Deterministic
    /// given the buffer state and `max_units`.
    pub fn drain_up_to(&self, max_units: u32) -> DrainResult {
        let mut lots = self.lots.lock().unwrap();
        Self::drain_locked(&mut lots, max_units)
    }

    fn drain_locked(lots: &mut VecDeque<Lot>, max_units: u32) -> DrainResult {
        let mut records = Vec::new();
        let mut total = 0u32;
        while total < max_units {
            let exhausted = match lots.front_mut() {
                Some(head) => {
                    let take = (max_units - total).min(head.quantity);
                    head.quantity -= take;
                    total += take;
                    records.push(TransportRecord::new(head.product.clone(), take));
                    head.quantity == 0
                }
                None => break,
            };
            if exhausted {
                lots.pop_front();
            }
        }
        DrainResult {
            records,
            total_units: total,
        }
    }

    /// Blocks until the buffer is non-empty or shutdown has been triggered,
    /// then drains up to `max_units`. Returns `None` once shutdown is
    /// triggered and the buffer is empty, the consumer's exit condition.
    pub fn wait_and_drain(
        &self,
        max_units: u32,
        stop: &ShutdownCoordinator,
    ) -> Option<DrainResult> {
        let mut lots = self.lots.lock().unwrap();
        while lots.is_empty() && !stop.is_triggered() {
            debug!("buffer empty, waiting for work");
            lots = self.not_empty.wait(lots).unwrap();
        }
        if stop.is_triggered() && lots.is_empty() {
            return None;
        }
        Some(Self::drain_locked(&mut lots, max_units))
    }

    pub fn is_empty(&self) -> bool {
        self.lots.lock().unwrap().is_empty()
    }

    /// Number of buffered lots.
    pub fn len(&self) -> usize {
        self.lots.lock().unwrap().len()
    }

    /// Total units across all buffered lots.
    pub fn queued_units(&self) -> u64 {
        self.lots
            .lock()
            .unwrap()
            .iter()
            .map(|lot| u64::from(lot.quantity))
            .sum()
    }

    /// Wakes every waiting consumer. Taking the mutex first means a consumer
    /// between its predicate check and its wait cannot miss the broadcast.
    pub fn wake_all(&self) {
        let _lots = self.lots.lock().unwrap();
        self.not_empty.notify_all();
    }
}

impl Default for Warehouse {
    fn default() -> Self {
        Self::new()
    }
}
