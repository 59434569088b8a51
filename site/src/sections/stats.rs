use leptos::prelude::*;

use crate::components::{Counter, FadeIn, Icon};
use crate::content::STATS;

/// Headline figures, each counting up when it scrolls into view.
#[component]
pub fn Stats() -> impl IntoView {
    let cards = STATS
        .into_iter()
        .enumerate()
        .map(|(index, stat)| {
            view! {
                <FadeIn delay={index as f64 * 0.1}>
                    <div class="stat-card">
                        <div class="stat-icon">
                            <Icon path=stat.icon size="32" />
                        </div>
                        <div class="stat-value">
                            <Counter to=stat.value />
                            {stat.suffix}
                        </div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                </FadeIn>
            }
        })
        .collect_view();

    view! {
        <section class="stats">
            <div class="container stats-grid">{cards}</div>
        </section>
    }
}
