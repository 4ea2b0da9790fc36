pub mod dashboard;
pub mod tabs;

pub use dashboard::StoreOverviewDashboard;
