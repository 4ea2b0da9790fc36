pub mod page_header;
pub mod stat_card;
pub mod tab_bar;
pub mod ui;

pub use page_header::PageHeader;
pub use stat_card::StatCard;
pub use tab_bar::{TabBar, TabItem, TabPanel};
