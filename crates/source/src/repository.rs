use itertools::Itertools;
use packslip_traits::{
    CustomerGroupRepository, ItemCriteria, OrderItemRepository, RepositoryError, SortDirection,
};
use packslip_types::{OrderItem, Shipment};
use std::collections::HashMap;

/// Item lines held in memory, queried like the platform's item table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderItemRepository {
    items: Vec<OrderItem>,
}

impl InMemoryOrderItemRepository {
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self { items }
    }

    /// Collects the item lines of every order referenced by `shipments`.
    /// An order shipped twice contributes its lines once.
    pub fn from_shipments<'a>(shipments: impl IntoIterator<Item = &'a Shipment>) -> Self {
        let items = shipments
            .into_iter()
            .unique_by(|s| s.order.entity_id)
            .flat_map(|s| s.order.items.iter().cloned())
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl OrderItemRepository for InMemoryOrderItemRepository {
    fn list(&self, criteria: &ItemCriteria) -> Result<Vec<OrderItem>, RepositoryError> {
        let matching = self
            .items
            .iter()
            .filter(|item| item.order_id == criteria.order_id)
            .cloned();

        // SKU ordering is case-insensitive, like the platform's collation.
        let items = match criteria.sku_order {
            None => matching.collect(),
            Some(SortDirection::Ascending) => matching
                .sorted_by(|a, b| a.sku.to_lowercase().cmp(&b.sku.to_lowercase()))
                .collect(),
            Some(SortDirection::Descending) => matching
                .sorted_by(|a, b| b.sku.to_lowercase().cmp(&a.sku.to_lowercase()))
                .collect(),
        };
        Ok(items)
    }
}

/// Customer group codes keyed by group id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerGroupRepository {
    codes: HashMap<u32, String>,
}

impl InMemoryCustomerGroupRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, id: u32, code: impl Into<String>) -> Self {
        self.codes.insert(id, code.into());
        self
    }
}

impl FromIterator<(u32, String)> for InMemoryCustomerGroupRepository {
    fn from_iter<T: IntoIterator<Item = (u32, String)>>(iter: T) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl CustomerGroupRepository for InMemoryCustomerGroupRepository {
    fn code(&self, group_id: u32) -> Result<String, RepositoryError> {
        self.codes
            .get(&group_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "customer group",
                id: group_id.to_string(),
            })
    }
}
