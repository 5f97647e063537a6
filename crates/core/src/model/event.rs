//! Event records emitted by the simulation.
//!
//! An [`Event`] is one timestamped occurrence of an [`Activity`], carrying
//! optional references to the entities involved, a location label, and an
//! anomaly [`EventStatus`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::pools::{ProductId, ShipmentId, TransportId};

/// The eight process steps of the simulated logistics flow, in phase order.
///
/// Serialized forms use the canonical human-readable labels, e.g.
/// `Activity::CreateProduct` is `"Create Product"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    /// A product comes into existence at the factory.
    #[serde(rename = "Create Product")]
    CreateProduct,
    /// The product is moved into a warehouse.
    #[serde(rename = "Store Product")]
    StoreProduct,
    /// A shipment is opened at a warehouse.
    #[serde(rename = "Create Shipment")]
    CreateShipment,
    /// A product is assigned to a shipment.
    #[serde(rename = "Assign Product to Shipment")]
    AssignProductToShipment,
    /// A transport order is opened for a transport.
    #[serde(rename = "Create Transport Order")]
    CreateTransportOrder,
    /// A shipment is loaded onto a transport.
    #[serde(rename = "Load Shipment on Transport")]
    LoadShipmentOnTransport,
    /// A transport departs. Delay-eligible.
    #[serde(rename = "Start Transport")]
    StartTransport,
    /// A product reaches its destination city. Delay-eligible.
    #[serde(rename = "Deliver Product")]
    DeliverProduct,
}

impl Activity {
    /// All activities in phase order.
    pub const ALL: [Activity; 8] = [
        Activity::CreateProduct,
        Activity::StoreProduct,
        Activity::CreateShipment,
        Activity::AssignProductToShipment,
        Activity::CreateTransportOrder,
        Activity::LoadShipmentOnTransport,
        Activity::StartTransport,
        Activity::DeliverProduct,
    ];

    /// The canonical label written to the output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::CreateProduct => "Create Product",
            Activity::StoreProduct => "Store Product",
            Activity::CreateShipment => "Create Shipment",
            Activity::AssignProductToShipment => "Assign Product to Shipment",
            Activity::CreateTransportOrder => "Create Transport Order",
            Activity::LoadShipmentOnTransport => "Load Shipment on Transport",
            Activity::StartTransport => "Start Transport",
            Activity::DeliverProduct => "Deliver Product",
        }
    }

    /// Whether this activity may be flagged [`EventStatus::Delayed`].
    ///
    /// Only transport departures and deliveries can run late; every other
    /// activity is always `Normal`.
    pub fn is_delay_eligible(&self) -> bool {
        matches!(self, Activity::StartTransport | Activity::DeliverProduct)
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anomaly flag carried by every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    /// The event happened on schedule.
    Normal,
    /// The event was flagged as late by the anomaly draw.
    Delayed,
}

impl EventStatus {
    /// The label written to the output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Normal => "Normal",
            EventStatus::Delayed => "Delayed",
        }
    }

    /// True for [`EventStatus::Delayed`].
    pub fn is_delayed(&self) -> bool {
        matches!(self, EventStatus::Delayed)
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamped occurrence of an activity.
///
/// Events are only produced by the generator, which guarantees that
/// `event_id` values form a contiguous 1-based sequence and that timestamps
/// strictly increase in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Position in the emission order, starting at 1.
    pub event_id: u64,
    /// Which process step happened.
    pub activity: Activity,
    /// Simulated instant of the event.
    pub timestamp: NaiveDateTime,
    /// Product involved, if any.
    pub product: Option<ProductId>,
    /// Shipment involved, if any.
    pub shipment: Option<ShipmentId>,
    /// Transport involved, if any.
    pub transport: Option<TransportId>,
    /// Where the event took place (factory, warehouse, road, or city).
    pub location: String,
    /// Anomaly flag for this event.
    pub status: EventStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_labels() {
        assert_eq!(Activity::CreateProduct.as_str(), "Create Product");
        assert_eq!(
            Activity::AssignProductToShipment.as_str(),
            "Assign Product to Shipment"
        );
        assert_eq!(
            Activity::LoadShipmentOnTransport.as_str(),
            "Load Shipment on Transport"
        );
        assert_eq!(Activity::DeliverProduct.as_str(), "Deliver Product");
    }

    #[test]
    fn test_activity_labels_are_unique() {
        for (i, a) in Activity::ALL.iter().enumerate() {
            for b in &Activity::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_delay_eligibility() {
        let eligible: Vec<Activity> = Activity::ALL
            .iter()
            .copied()
            .filter(Activity::is_delay_eligible)
            .collect();
        assert_eq!(
            eligible,
            vec![Activity::StartTransport, Activity::DeliverProduct],
            "only transport departure and delivery may be delayed"
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(EventStatus::Normal.as_str(), "Normal");
        assert_eq!(EventStatus::Delayed.as_str(), "Delayed");
        assert!(EventStatus::Delayed.is_delayed());
        assert!(!EventStatus::Normal.is_delayed());
    }
}
