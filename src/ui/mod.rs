pub mod actions;
pub mod app;
pub mod filter_panel;
pub mod table;
pub mod toolbar;
