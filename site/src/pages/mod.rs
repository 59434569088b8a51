// Routed pages
// Roche Pharmaceutical web team (c)2025

mod home;
mod placeholder;

pub use home::HomePage;
pub use placeholder::{NotFound, PlaceholderPage};
