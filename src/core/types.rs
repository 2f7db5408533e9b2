use serde::{Deserialize, Serialize};

/// Product metadata carried by a factory. Only the name participates in the
/// core pipeline; weight and packaging ride along for configuration and
/// reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub weight: f64,
    pub packaging: String,
}

impl Product {
    pub fn new(name: String, weight: f64, packaging: String) -> Self {
        Self {
            name,
            weight,
            packaging,
        }
    }
}

/// One buffered unit of production: a product name and a strictly positive
/// quantity. Lots are never merged; the warehouse holds them exactly as
/// pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    pub product: String,
    pub quantity: u32,
}

impl Lot {
    pub fn new(product: String, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

/// One lot fragment carried by a truck on a single trip. Appended to the
/// statistics log once per distinct lot touched by a drain, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRecord {
    pub product: String,
    pub amount: u32,
}

impl TransportRecord {
    pub fn new(product: String, amount: u32) -> Self {
        Self { product, amount }
    }
}
