pub mod bill;
pub mod comparison;
pub mod error;
pub mod explorer;
pub mod form;
pub mod format;
pub mod page;
