use leptos::prelude::*;

use crate::components::icons::ICON_ARROW_RIGHT;
use crate::components::{FadeIn, Icon};
use crate::content::CATEGORIES;
use crate::routes::Page;

#[component]
pub fn FeaturedProducts() -> impl IntoView {
    let cards = CATEGORIES
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            view! {
                <FadeIn delay={index as f64 * 0.2}>
                    <a href=Page::Products.path() class="category-card">
                        <div class="category-image">
                            <img src=category.image alt=category.title />
                        </div>
                        <div class="category-overlay">
                            <h3 class="category-title">{category.title}</h3>
                            <p class="category-count">{category.count}</p>
                        </div>
                    </a>
                </FadeIn>
            }
        })
        .collect_view();

    view! {
        <section class="featured">
            <div class="container">
                <div class="section-header">
                    <FadeIn>
                        <h2 class="section-title">"Premium Medical Equipment"</h2>
                        <div class="section-rule"></div>
                    </FadeIn>
                    <FadeIn delay=0.2>
                        <p class="section-lead">
                            "Explore our wide range of certified diagnostic, surgical, and laboratory \
                             equipment from world-class manufacturers."
                        </p>
                    </FadeIn>
                </div>

                <div class="category-grid">{cards}</div>

                <div class="featured-more">
                    <a href=Page::Products.path() class="link-arrow">
                        "View All Categories"
                        <Icon path=ICON_ARROW_RIGHT size="20" />
                    </a>
                </div>
            </div>
        </section>
    }
}
