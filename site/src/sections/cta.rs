use leptos::prelude::*;

use crate::components::FadeIn;
use crate::routes::Page;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="cta-pattern"></div>
            <div class="cta-glow"></div>
            <div class="container cta-inner">
                <FadeIn>
                    <h2 class="cta-title">"Ready to Upgrade Your Medical Facility?"</h2>
                    <p class="cta-lead">
                        "Get in touch with our expert team for a consultation and customized quote \
                         for your specific needs."
                    </p>
                    <div class="cta-actions">
                        <a href=Page::Contact.path() class="btn btn--light btn--large">"Request Quote"</a>
                        <a href=Page::Contact.path() class="btn btn--ghost btn--large">"Call Our Hotline"</a>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}
