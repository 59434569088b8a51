use leptos::prelude::*;
use roche_motion::Direction;

use crate::components::icons::ICON_ARROW_RIGHT;
use crate::components::{FadeIn, Icon, ParallaxLayer, ScaleIn};
use crate::content::HERO_IMAGE;
use crate::routes::Page;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <div class="hero-wash hero-wash--top"></div>
                <div class="hero-wash hero-wash--bottom"></div>
                <ParallaxLayer layer="hero-primary" class="hero-orb hero-orb--primary" />
                <ParallaxLayer layer="hero-secondary" class="hero-orb hero-orb--secondary" />
            </div>

            <div class="container hero-grid">
                <div class="hero-copy">
                    <FadeIn delay=0.2 direction=Direction::Right>
                        <span class="badge">"PREMIER MEDICAL SOLUTIONS"</span>
                    </FadeIn>

                    <FadeIn delay=0.4>
                        <h1 class="hero-title">
                            "Trusted Medical " <br />
                            <span class="text-gradient">"Equipment Supplier"</span>
                            <br />
                            "in Sri Lanka"
                        </h1>
                    </FadeIn>

                    <FadeIn delay=0.6>
                        <p class="hero-lead">
                            "Delivering reliable, high-quality medical equipment and healthcare solutions \
                             to hospitals, clinics, and laboratories across the nation."
                        </p>
                    </FadeIn>

                    <FadeIn delay=0.8 class="hero-actions">
                        <a href=Page::Contact.path() class="btn btn--primary btn--large">
                            "Contact Us"
                            <Icon path=ICON_ARROW_RIGHT size="20" />
                        </a>
                        <a href=Page::Products.path() class="btn btn--outline btn--large">
                            "View Products"
                        </a>
                    </FadeIn>
                </div>

                <ScaleIn delay=0.5 class="hero-visual">
                    <div class="hero-frame">
                        <img src=HERO_IMAGE alt="Medical Equipment" />
                    </div>
                    <div class="hero-ring"></div>
                    <div class="hero-shadow"></div>
                </ScaleIn>
            </div>
        </section>
    }
}
