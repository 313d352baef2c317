pub mod about;
pub mod explorer;
pub mod home;

pub use about::AboutPage;
pub use explorer::ExplorerPage;
pub use home::HomePage;
