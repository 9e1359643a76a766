//! Read access to order data owned by the order platform.

use packslip_types::OrderItem;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("{entity} with id {id} does not exist")]
    NotFound { entity: &'static str, id: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Selects the item lines of one order, optionally ordered by SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCriteria {
    pub order_id: u64,
    pub sku_order: Option<SortDirection>,
}

impl ItemCriteria {
    pub fn for_order(order_id: u64) -> Self {
        Self {
            order_id,
            sku_order: None,
        }
    }

    pub fn sort_by_sku(mut self, direction: SortDirection) -> Self {
        self.sku_order = Some(direction);
        self
    }
}

pub trait OrderItemRepository {
    /// Every item line matching `criteria`, in the requested order. Lines
    /// with equal SKUs keep their stored order.
    fn list(&self, criteria: &ItemCriteria) -> Result<Vec<OrderItem>, RepositoryError>;
}

pub trait CustomerGroupRepository {
    /// The group code (e.g. `Wholesale`) for a customer group id.
    fn code(&self, group_id: u32) -> Result<String, RepositoryError>;
}
