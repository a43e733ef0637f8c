pub mod columns;
pub mod data_model;
pub mod filter;
pub mod i18n;
pub mod sort;
pub mod viewer;
