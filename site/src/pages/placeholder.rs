use leptos::prelude::*;

use crate::components::FadeIn;
use crate::content::placeholder_intro;
use crate::routes::Page;

/// Header plus a "coming soon" panel for pages without real content yet.
#[component]
pub fn PlaceholderPage(page: Page) -> impl IntoView {
    let (title, description) = placeholder_intro(page).unwrap_or((page.label(), ""));

    view! {
        <div class="page">
            <header class="page-header">
                <div class="container">
                    <FadeIn>
                        <h1 class="page-title">{title}</h1>
                        <p class="page-lead">{description}</p>
                    </FadeIn>
                </div>
            </header>
            <section class="container page-body">
                <FadeIn delay=0.2>
                    <div class="coming-soon">
                        <h2>"Coming Soon"</h2>
                        <p>"We are preparing this page. Please check back shortly."</p>
                        <a href=Page::Contact.path() class="btn btn--primary">"Contact Us"</a>
                    </div>
                </FadeIn>
            </section>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page-header">
                <div class="container">
                    <h1 class="page-title">"Page Not Found"</h1>
                    <p class="page-lead">"The page you are looking for does not exist."</p>
                    <a href=Page::Home.path() class="btn btn--primary">"Back to Home"</a>
                </div>
            </header>
        </div>
    }
}
