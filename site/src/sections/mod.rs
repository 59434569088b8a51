// Home page sections
// Roche Pharmaceutical web team (c)2025

mod cta;
mod featured;
mod hero;
mod stats;
mod why_us;

pub use cta::CallToAction;
pub use featured::FeaturedProducts;
pub use hero::Hero;
pub use stats::Stats;
pub use why_us::WhyChooseUs;
