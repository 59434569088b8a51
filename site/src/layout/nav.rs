use leptos::prelude::*;
use leptos_router::hooks::use_location;
use roche_motion::{NavAppearance, NavState};

use crate::components::icons::{ICON_HEART, ICON_MENU, ICON_PHONE, ICON_X};
use crate::components::{Icon, use_motion_config};
use crate::host::use_scroll_position;
use crate::routes::Page;

#[component]
pub fn Nav() -> impl IntoView {
    let scroll_y = use_scroll_position();
    let pathname = use_location().pathname;

    let nav = RwSignal::new({
        let mut state = use_motion_config().nav_state();
        state.on_scroll(scroll_y.get_untracked());
        state
    });
    // Only notify when the bar actually crosses the threshold.
    Effect::new(move || {
        let y = scroll_y.get();
        nav.maybe_update(|state| state.on_scroll(y));
    });
    // Any route change closes the menu: links, the brand, back and forward.
    Effect::new(move || {
        pathname.track();
        nav.maybe_update(NavState::on_navigate);
    });

    let current = move || Page::from_path(&pathname.get());
    let solid = move || nav.get().appearance() == NavAppearance::Solid;

    let desktop_links = Page::ALL
        .into_iter()
        .map(|page| {
            let active = move || current() == Some(page);
            view! {
                <a href=page.path() class=move || nav.get().link_tone(active()).class()>
                    {page.label()}
                    <span class=move || {
                        if active() { "nav-underline nav-underline--active" } else { "nav-underline" }
                    }></span>
                </a>
            }
        })
        .collect_view();

    let mobile_links = move || {
        Page::ALL
            .into_iter()
            .map(|page| {
                let class = if current() == Some(page) {
                    "mobile-link mobile-link--active"
                } else {
                    "mobile-link"
                };
                view! {
                    <a href=page.path() class=class>
                        {page.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || nav.get().appearance().class()>
            <div class="container nav-inner">
                <a href="/" class="brand">
                    <div class="brand-mark">
                        <div class="brand-logo">
                            <Icon path=ICON_HEART size="24" filled=true />
                        </div>
                        <span class="brand-pulse"></span>
                    </div>
                    <div class="brand-text">
                        <span class=move || {
                            if solid() { "brand-name brand-name--solid" } else { "brand-name" }
                        }>"ROCHE"</span>
                        <span class=move || {
                            if solid() { "brand-tagline brand-tagline--solid" } else { "brand-tagline" }
                        }>"PHARMACEUTICAL"</span>
                    </div>
                </a>

                <div class="nav-links">
                    {desktop_links}
                    <a href=Page::Contact.path() class="btn btn--gradient btn--pill">
                        <Icon path=ICON_PHONE size="16" />
                        "Get Quote"
                    </a>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.get().is_open().to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || {
                        let path = if nav.get().is_open() { ICON_X } else { ICON_MENU };
                        view! { <Icon path=path size="28" /> }
                    }}
                </button>
            </div>

            <Show when=move || nav.get().is_open()>
                // Tapping the link for the page already shown changes no route.
                <div class="mobile-menu" on:click=move |_| { nav.maybe_update(NavState::on_navigate); }>
                    <div class="container mobile-menu-inner">
                        {mobile_links}
                        <a href=Page::Contact.path() class="btn btn--primary btn--block">
                            <Icon path=ICON_PHONE size="16" />
                            "Request a Quote"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
