pub mod color;
pub mod geometry;
pub mod order;

pub use color::Color;
pub use geometry::{PageSize, Rect};
pub use order::{Address, Order, OrderItem, Payment, Product, ProductType, Shipment, StoreId};
