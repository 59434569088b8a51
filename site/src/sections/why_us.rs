use leptos::prelude::*;
use roche_motion::Direction;

use crate::components::icons::ICON_CHECK_CIRCLE;
use crate::components::{FadeIn, Icon};
use crate::content::{COMPANY, TILE_COLUMNS, TRUST_POINTS, Tile};
use crate::routes::Page;

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    let points = TRUST_POINTS
        .into_iter()
        .map(|point| {
            view! {
                <div class="trust-point">
                    <div class="trust-check">
                        <Icon path=ICON_CHECK_CIRCLE size="16" />
                    </div>
                    <span>{point}</span>
                </div>
            }
        })
        .collect_view();

    let columns = TILE_COLUMNS
        .into_iter()
        .enumerate()
        .map(|(index, column)| {
            // The first column starts lower so the grid staggers.
            let class = if index == 0 { "tile-column tile-column--offset" } else { "tile-column" };
            view! { <div class=class>{column.into_iter().map(tile).collect_view()}</div> }
        })
        .collect_view();

    view! {
        <section class="why-us">
            <div class="why-us-slant"></div>
            <div class="container why-us-grid">
                <FadeIn direction=Direction::Right>
                    <div class="why-us-copy">
                        <h2 class="section-title">{format!("Why Healthcare Professionals Trust {COMPANY}")}</h2>
                        <p class="why-us-lead">
                            "We are committed to excellence in healthcare distribution. Our ethical \
                             business practices and strict quality assurance ensure that you receive \
                             only the best."
                        </p>
                        <div class="trust-grid">{points}</div>
                        <a href=Page::WhyUs.path() class="btn btn--dark">"Learn More About Us"</a>
                    </div>
                </FadeIn>

                <FadeIn direction=Direction::Left delay=0.3>
                    <div class="tile-grid">{columns}</div>
                </FadeIn>
            </div>
        </section>
    }
}

fn tile(tile: Tile) -> impl IntoView {
    let class = if tile.tall {
        format!("{} tile--tall", tile.tone.class())
    } else {
        tile.tone.class().to_string()
    };
    view! {
        <div class=class>
            <Icon path=tile.icon size="40" class="tile-icon" />
            <h4 class="tile-title">{tile.title}</h4>
        </div>
    }
}
