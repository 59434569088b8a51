// Home page - hero, figures, catalogue teaser and call to action
use crate::sections::{CallToAction, FeaturedProducts, Hero, Stats, WhyChooseUs};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <Hero />
            <Stats />
            <FeaturedProducts />
            <WhyChooseUs />
            <CallToAction />
        </div>
    }
}
