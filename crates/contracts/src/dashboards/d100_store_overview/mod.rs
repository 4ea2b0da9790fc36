pub mod dto;

pub use dto::StoreOverview;
