// Roche Pharmaceutical site - Leptos 0.8 Edition
// Roche Pharmaceutical web team (c)2025

mod components;
mod content;
mod host;
mod layout;
mod pages;
mod routes;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use roche_motion::MotionConfig;

use host::provide_scroll_position;
use layout::{Footer, Nav};
use pages::{HomePage, NotFound, PlaceholderPage};
use routes::Page;

/// Motion tunables baked into the bundle.
const MOTION_TOML: &str = include_str!("../motion.toml");

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(MotionConfig::load_or_default(MOTION_TOML));
    provide_scroll_position();

    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=|| view! { <PlaceholderPage page=Page::About /> } />
                    <Route path=path!("/products") view=|| view! { <PlaceholderPage page=Page::Products /> } />
                    <Route path=path!("/services") view=|| view! { <PlaceholderPage page=Page::Services /> } />
                    <Route path=path!("/why-us") view=|| view! { <PlaceholderPage page=Page::WhyUs /> } />
                    <Route path=path!("/contact") view=|| view! { <PlaceholderPage page=Page::Contact /> } />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_motion_config_is_valid() {
        let config = MotionConfig::from_toml_str(MOTION_TOML).unwrap();
        assert!(config.parallax("hero-primary").is_ok());
        assert!(config.parallax("hero-secondary").is_ok());
    }
}
