pub mod use_dataset;
pub mod use_request;
pub mod use_theme;
