// Chrome shared by every page
// Roche Pharmaceutical web team (c)2025

mod footer;
mod nav;

pub use footer::Footer;
pub use nav::Nav;
