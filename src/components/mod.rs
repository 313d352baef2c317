pub mod bill_form;
pub mod bill_table;
pub mod chart;
pub mod compare_form;
pub mod field;
pub mod footer;
pub mod navbar;
pub mod status;
pub mod summary;
pub mod theme_toggle;

pub use footer::Footer;
pub use navbar::Navbar;
