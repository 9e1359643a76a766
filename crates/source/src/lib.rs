//! Where shipments and their item lines come from.
//!
//! ## Available Sources
//!
//! - [`VecShipmentSource`]: in-memory list of shipments
//! - [`load_shipments`]: a JSON export (bare array or `{"shipments": [...]}`)
//! - [`InMemoryOrderItemRepository`] / [`InMemoryCustomerGroupRepository`]:
//!   repository implementations backed by loaded data

mod json;
mod repository;

pub use json::{SourceError, load_shipments, load_shipments_from_str};
pub use repository::{InMemoryCustomerGroupRepository, InMemoryOrderItemRepository};

use packslip_types::Shipment;

/// Feeds shipments to the renderer in print order.
pub trait ShipmentSource {
    /// Returns `None` when the source is exhausted.
    fn next(&mut self) -> Option<Shipment>;

    /// Total number of shipments, when known (for progress logging).
    fn size_hint(&self) -> Option<usize> {
        None
    }
}

/// A shipment source backed by an in-memory vector.
pub struct VecShipmentSource {
    shipments: std::vec::IntoIter<Shipment>,
    total: usize,
}

impl VecShipmentSource {
    pub fn new(shipments: Vec<Shipment>) -> Self {
        Self {
            total: shipments.len(),
            shipments: shipments.into_iter(),
        }
    }

    /// Number of shipments not yet handed out.
    pub fn remaining(&self) -> usize {
        self.shipments.len()
    }
}

impl ShipmentSource for VecShipmentSource {
    fn next(&mut self) -> Option<Shipment> {
        self.shipments.next()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.total)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use packslip_types::{Address, Order, OrderItem, Payment, ProductType, Shipment, StoreId};

    pub fn item(item_id: u64, order_id: u64, sku: &str) -> OrderItem {
        OrderItem {
            item_id,
            order_id,
            parent_item_id: None,
            product_type: ProductType::Simple,
            sku: sku.to_string(),
            name: format!("Product {}", sku),
            qty_ordered: 1.0,
            product: None,
        }
    }

    pub fn shipment(entity_id: u64, order_id: u64, items: Vec<OrderItem>) -> Shipment {
        Shipment {
            entity_id,
            increment_id: format!("S{}", entity_id),
            store_id: StoreId(1),
            order: Order {
                entity_id: order_id,
                increment_id: format!("{:09}", order_id),
                created_at: Default::default(),
                shipping_description: "Flat Rate - Fixed".into(),
                payment: Payment::default(),
                customer_email: "klant@example.com".into(),
                customer_group_id: None,
                billing_address: Address::default(),
                shipping_address: Address::default(),
                bold_order_comment: None,
                items,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_shipment_source() {
        let mut source = VecShipmentSource::new(vec![
            fixtures::shipment(1, 10, vec![]),
            fixtures::shipment(2, 11, vec![]),
        ]);

        assert_eq!(source.size_hint(), Some(2));
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next().map(|s| s.entity_id), Some(1));
        assert_eq!(source.next().map(|s| s.entity_id), Some(2));
        assert_eq!(source.remaining(), 0);
        assert!(source.next().is_none());
        // the hint describes the whole source, not what is left
        assert_eq!(source.size_hint(), Some(2));
    }
}
