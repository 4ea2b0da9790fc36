pub mod aggregate;

pub use aggregate::{ReturnItem, ReturnItemId, ReturnStatus};
