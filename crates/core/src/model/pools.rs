//! Entity identifier pools and fixed location labels.
//!
//! Pools are built once per run from the size preset and never change
//! afterwards. Identifiers are 1-based ordinals rendered with three-digit
//! zero padding (`prod_001`, `ship_042`, `trans_150`); pools larger than 999
//! simply grow a fourth digit (`prod_1000`).

use serde::{Deserialize, Serialize};

use crate::config::SizePreset;

/// Warehouse location labels used by storage, assembly, and loading events.
pub const WAREHOUSES: [&str; 4] = [
    "Warehouse_A",
    "Warehouse_B",
    "Warehouse_C",
    "Warehouse_D",
];

/// Destination city labels used by delivery events.
pub const DESTINATIONS: [&str; 3] = ["City_X", "City_Y", "City_Z"];

/// Location stamped on product creation events.
pub const FACTORY: &str = "Factory";

/// Location stamped on transport departure events.
pub const ON_ROAD: &str = "On Road";

/// Identifier of a product, e.g. `prod_001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Build the identifier for a 1-based ordinal.
    pub fn from_ordinal(ordinal: usize) -> Self {
        ProductId(format!("prod_{:03}", ordinal))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a shipment, e.g. `ship_001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(String);

impl ShipmentId {
    /// Build the identifier for a 1-based ordinal.
    pub fn from_ordinal(ordinal: usize) -> Self {
        ShipmentId(format!("ship_{:03}", ordinal))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a transport, e.g. `trans_001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportId(String);

impl TransportId {
    /// Build the identifier for a 1-based ordinal.
    pub fn from_ordinal(ordinal: usize) -> Self {
        TransportId(format!("trans_{:03}", ordinal))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed identifier pools for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPools {
    products: Vec<ProductId>,
    shipments: Vec<ShipmentId>,
    transports: Vec<TransportId>,
}

impl EntityPools {
    /// Build all three pools from a size preset.
    pub fn from_preset(preset: &SizePreset) -> Self {
        Self {
            products: (1..=preset.products).map(ProductId::from_ordinal).collect(),
            shipments: (1..=preset.shipments).map(ShipmentId::from_ordinal).collect(),
            transports: (1..=preset.transports).map(TransportId::from_ordinal).collect(),
        }
    }

    /// All product identifiers, in ordinal order.
    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    /// All shipment identifiers, in ordinal order.
    pub fn shipments(&self) -> &[ShipmentId] {
        &self.shipments
    }

    /// All transport identifiers, in ordinal order.
    pub fn transports(&self) -> &[TransportId] {
        &self.transports
    }
}
