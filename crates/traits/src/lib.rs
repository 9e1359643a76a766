pub mod repository;
pub mod resource;
pub mod store;

pub use repository::{
    CustomerGroupRepository, ItemCriteria, OrderItemRepository, RepositoryError, SortDirection,
};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
pub use store::{ScopeConfig, StoreEnvironment, StoreError};
