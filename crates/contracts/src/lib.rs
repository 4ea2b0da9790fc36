pub mod dashboards;
pub mod domain;
pub mod metrics;
pub mod shared;
pub mod usecases;
