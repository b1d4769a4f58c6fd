//! Page components, one per routed view.

pub mod about;
pub mod apply;
pub mod contact;
pub mod destination;
pub mod home;
pub mod info;
pub mod resources;

pub use about::AboutPage;
pub use apply::ApplyPage;
pub use contact::ContactPage;
pub use destination::DestinationPage;
pub use home::HomePage;
pub use info::InfoPage;
pub use resources::ResourcesPage;
