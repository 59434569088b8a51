use leptos::prelude::*;

use crate::components::Icon;
use crate::components::icons::{ICON_HEART, ICON_MAIL, ICON_MAP_PIN, ICON_PHONE};
use crate::content::{
    ADDRESS_LINES, COMPANY, COMPANY_BLURB, EMAIL, PHONE, PRODUCT_LINES, QUICK_LINKS, SOCIALS,
};
use crate::routes::Page;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer-stripe"></div>
            <div class="footer-glow footer-glow--primary"></div>
            <div class="footer-glow footer-glow--secondary"></div>

            <div class="container footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <div class="brand-logo brand-logo--small">
                                <Icon path=ICON_HEART size="20" filled=true />
                            </div>
                            <div class="brand-text">
                                <span class="footer-brand-name">"ROCHE"</span>
                                <span class="footer-brand-tagline">"PHARMACEUTICAL"</span>
                            </div>
                        </div>
                        <p class="footer-blurb">{COMPANY_BLURB}</p>
                        <div class="footer-socials">
                            {SOCIALS
                                .into_iter()
                                .map(|(label, icon)| {
                                    view! {
                                        <a href="#" class="social-link" aria-label=label>
                                            <Icon path=icon size="20" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="footer-heading">"Quick Links"</h3>
                        <ul class="footer-list">
                            {QUICK_LINKS
                                .into_iter()
                                .map(|page| {
                                    view! {
                                        <li>
                                            <a href=page.path() class="footer-link">
                                                <span class="footer-dot"></span>
                                                {page.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="footer-heading">"Our Products"</h3>
                        <ul class="footer-list">
                            {PRODUCT_LINES
                                .into_iter()
                                .map(|line| {
                                    view! {
                                        <li>
                                            <a href=Page::Products.path() class="footer-link footer-link--secondary">
                                                {line}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="footer-heading">"Contact Us"</h3>
                        <ul class="footer-contact">
                            <li>
                                <Icon path=ICON_MAP_PIN size="20" class="footer-contact-icon" />
                                <span>{ADDRESS_LINES[0]}<br />{ADDRESS_LINES[1]}</span>
                            </li>
                            <li>
                                <Icon path=ICON_PHONE size="20" class="footer-contact-icon" />
                                <span>{PHONE}</span>
                            </li>
                            <li>
                                <Icon path=ICON_MAIL size="20" class="footer-contact-icon" />
                                <span>{EMAIL}</span>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("© {year} {COMPANY}. All rights reserved.")}
                    </p>
                    <div class="footer-legal">
                        <a href="#">"Privacy Policy"</a>
                        <a href="#">"Terms of Service"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
