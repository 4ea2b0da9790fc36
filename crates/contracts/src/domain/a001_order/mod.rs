pub mod aggregate;

pub use aggregate::{Order, OrderId, OrderStatus};
