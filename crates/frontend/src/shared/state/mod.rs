pub mod tab_state;

pub use tab_state::TabState;
