//! Seven-phase logistics event generation.
//!
//! ## Phase order
//!
//! 1. Create & store products (two events per product)
//! 2. Create shipments
//! 3. Assign products to shipments
//! 4. Create transport orders
//! 5. Load shipments on transports
//! 6. Start transports (delay-eligible)
//! 7. Deliver products (delay-eligible)
//!
//! Every emission stamps the current clock instant and then advances the
//! clock by a fresh uniform gap draw, so timestamps strictly increase across
//! the whole log. After the last phase the log is truncated to the preset's
//! event cap, keeping the emission-order prefix.
//!
//! All randomness flows through one seeded RNG owned by the generator, which
//! makes a run a pure function of its [`GeneratorConfig`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::model::event::{Activity, Event, EventStatus};
use crate::model::pools::{
    EntityPools, ProductId, ShipmentId, TransportId, DESTINATIONS, FACTORY, ON_ROAD, WAREHOUSES,
};
use crate::sim::clock::SimClock;

/// Smallest gap between consecutive events, in minutes.
const MIN_GAP_MINUTES: i64 = 5;

/// Largest gap between consecutive events, in minutes (inclusive).
const MAX_GAP_MINUTES: i64 = 30;

/// Counters for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorStats {
    /// Events produced by the seven phases before truncation.
    pub total_generated: usize,
    /// Events kept in the final log.
    pub emitted: usize,
    /// Events dropped by the event cap.
    pub truncated: usize,
    /// Events in the final log flagged `Delayed`.
    pub delayed: usize,
}

/// A finished, ordered event sequence plus its run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
    stats: GeneratorStats,
}

impl EventLog {
    /// The events in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the log holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over the events in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Counters recorded while generating this log.
    pub fn stats(&self) -> &GeneratorStats {
        &self.stats
    }

    /// Consume the log, returning the owned event vector.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

/// Entity references attached to one emission.
#[derive(Debug, Default)]
struct EventRefs {
    product: Option<ProductId>,
    shipment: Option<ShipmentId>,
    transport: Option<TransportId>,
}

/// Deterministic generator for one logistics event log.
///
/// Construction validates the configuration and seeds the RNG; [`generate`]
/// consumes the generator and runs the seven phases.
///
/// [`generate`]: EventLogGenerator::generate
///
/// # Examples
///
/// ```
/// use freightlog_core::config::{GeneratorConfig, LogSize};
/// use freightlog_core::sim::generator::EventLogGenerator;
///
/// let config = GeneratorConfig::new(LogSize::Small);
/// let log = EventLogGenerator::new(config).unwrap().generate();
/// assert_eq!(log.len(), 490);
/// ```
#[derive(Debug)]
pub struct EventLogGenerator {
    config: GeneratorConfig,
    pools: EntityPools,
    rng: StdRng,
    clock: SimClock,
    next_event_id: u64,
    events: Vec<Event>,
    stats: GeneratorStats,
}

impl EventLogGenerator {
    /// Create a generator, rejecting out-of-range delay probabilities.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.delay_probability) {
            return Err(Error::InvalidConfiguration(format!(
                "delay probability {} is outside [0, 1]",
                config.delay_probability
            )));
        }

        let preset = config.size.preset();
        Ok(Self {
            pools: EntityPools::from_preset(&preset),
            rng: StdRng::seed_from_u64(config.seed),
            clock: SimClock::new(config.start_time),
            next_event_id: 1,
            events: Vec::with_capacity(preset.raw_event_count()),
            stats: GeneratorStats::default(),
            config,
        })
    }

    /// Run all seven phases and finish the log.
    pub fn generate(mut self) -> EventLog {
        self.create_and_store_products();
        self.create_shipments();
        self.assign_products_to_shipments();
        self.create_transport_orders();
        self.load_shipments_on_transports();
        self.start_transports();
        self.deliver_products();
        self.finish()
    }

    /// Phase 1: a creation event at the factory and a storage event at a
    /// random warehouse, for every product.
    fn create_and_store_products(&mut self) {
        let products = self.pools.products().to_vec();
        debug!(count = products.len(), "phase 1: create and store products");
        for product in products {
            self.emit(
                Activity::CreateProduct,
                EventRefs {
                    product: Some(product.clone()),
                    ..EventRefs::default()
                },
                FACTORY.to_string(),
            );
            let warehouse = self.pick_warehouse();
            self.emit(
                Activity::StoreProduct,
                EventRefs {
                    product: Some(product),
                    ..EventRefs::default()
                },
                warehouse,
            );
        }
    }

    /// Phase 2: open every shipment at a random warehouse.
    fn create_shipments(&mut self) {
        let shipments = self.pools.shipments().to_vec();
        debug!(count = shipments.len(), "phase 2: create shipments");
        for shipment in shipments {
            let warehouse = self.pick_warehouse();
            self.emit(
                Activity::CreateShipment,
                EventRefs {
                    shipment: Some(shipment),
                    ..EventRefs::default()
                },
                warehouse,
            );
        }
    }

    /// Phase 3: assign every product to a uniformly chosen shipment.
    fn assign_products_to_shipments(&mut self) {
        let products = self.pools.products().to_vec();
        debug!(count = products.len(), "phase 3: assign products to shipments");
        for product in products {
            let shipment = self.pick_shipment();
            let warehouse = self.pick_warehouse();
            self.emit(
                Activity::AssignProductToShipment,
                EventRefs {
                    product: Some(product),
                    shipment: Some(shipment),
                    ..EventRefs::default()
                },
                warehouse,
            );
        }
    }

    /// Phase 4: open a transport order for every transport.
    fn create_transport_orders(&mut self) {
        let transports = self.pools.transports().to_vec();
        debug!(count = transports.len(), "phase 4: create transport orders");
        for transport in transports {
            let warehouse = self.pick_warehouse();
            self.emit(
                Activity::CreateTransportOrder,
                EventRefs {
                    transport: Some(transport),
                    ..EventRefs::default()
                },
                warehouse,
            );
        }
    }

    /// Phase 5: load every shipment on a uniformly chosen transport.
    fn load_shipments_on_transports(&mut self) {
        let shipments = self.pools.shipments().to_vec();
        debug!(count = shipments.len(), "phase 5: load shipments on transports");
        for shipment in shipments {
            let transport = self.pick_transport();
            let warehouse = self.pick_warehouse();
            self.emit(
                Activity::LoadShipmentOnTransport,
                EventRefs {
                    shipment: Some(shipment),
                    transport: Some(transport),
                    ..EventRefs::default()
                },
                warehouse,
            );
        }
    }

    /// Phase 6: every transport departs. Delay-eligible.
    fn start_transports(&mut self) {
        let transports = self.pools.transports().to_vec();
        debug!(count = transports.len(), "phase 6: start transports");
        for transport in transports {
            self.emit(
                Activity::StartTransport,
                EventRefs {
                    transport: Some(transport),
                    ..EventRefs::default()
                },
                ON_ROAD.to_string(),
            );
        }
    }

    /// Phase 7: every product is delivered to a random destination city.
    ///
    /// The shipment and transport attached here are fresh uniform draws,
    /// independent of the assignments made in phases 3 and 5. Delay-eligible.
    fn deliver_products(&mut self) {
        let products = self.pools.products().to_vec();
        debug!(count = products.len(), "phase 7: deliver products");
        for product in products {
            let shipment = self.pick_shipment();
            let transport = self.pick_transport();
            let destination = self.pick_destination();
            self.emit(
                Activity::DeliverProduct,
                EventRefs {
                    product: Some(product),
                    shipment: Some(shipment),
                    transport: Some(transport),
                },
                destination,
            );
        }
    }

    /// Append one event at the current clock instant, then advance the clock
    /// by a fresh uniform gap draw.
    fn emit(&mut self, activity: Activity, refs: EventRefs, location: String) {
        let status = if activity.is_delay_eligible()
            && self.rng.gen_bool(self.config.delay_probability)
        {
            EventStatus::Delayed
        } else {
            EventStatus::Normal
        };

        self.events.push(Event {
            event_id: self.next_event_id,
            activity,
            timestamp: self.clock.now(),
            product: refs.product,
            shipment: refs.shipment,
            transport: refs.transport,
            location,
            status,
        });
        self.next_event_id += 1;
        self.stats.total_generated += 1;

        let gap = self.rng.gen_range(MIN_GAP_MINUTES..=MAX_GAP_MINUTES);
        self.clock.advance_minutes(gap);
    }

    /// Truncate to the event cap and seal the log.
    fn finish(mut self) -> EventLog {
        let target = self.config.size.preset().target_events;
        if self.events.len() > target {
            self.events.truncate(target);
        }

        self.stats.emitted = self.events.len();
        self.stats.truncated = self.stats.total_generated - self.stats.emitted;
        self.stats.delayed = self
            .events
            .iter()
            .filter(|e| e.status.is_delayed())
            .count();

        info!(
            size = %self.config.size,
            seed = self.config.seed,
            total = self.stats.total_generated,
            emitted = self.stats.emitted,
            truncated = self.stats.truncated,
            delayed = self.stats.delayed,
            "event log generated"
        );

        EventLog {
            events: self.events,
            stats: self.stats,
        }
    }

    fn pick_warehouse(&mut self) -> String {
        WAREHOUSES[self.rng.gen_range(0..WAREHOUSES.len())].to_string()
    }

    fn pick_destination(&mut self) -> String {
        DESTINATIONS[self.rng.gen_range(0..DESTINATIONS.len())].to_string()
    }

    fn pick_shipment(&mut self) -> ShipmentId {
        let idx = self.rng.gen_range(0..self.pools.shipments().len());
        self.pools.shipments()[idx].clone()
    }

    fn pick_transport(&mut self) -> TransportId {
        let idx = self.rng.gen_range(0..self.pools.transports().len());
        self.pools.transports()[idx].clone()
    }
}
