mod browser;
mod contact;
mod footer;
mod header;
mod hero;
mod portfolio;
mod pricing;
mod services;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_throttle_fn, use_window};

use crate::{
    config::{FAVICON, SITE_CONFIG},
    view_state::{NavigationController, ScrollTracker, SectionId},
};

use browser::{DomLayout, WindowScroller};
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use portfolio::Portfolio;
use pricing::Pricing;
use services::Services;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/boxicons@2.1.4/css/boxicons.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/brand-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let brand = SITE_CONFIG.brand.clone();

    view! {
        <Title formatter=move |title| format!("{brand} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=LandingPage />
            </Routes>
        </Router>
    }
}

/// Owns the page-wide state and hands slices of it to each section.
#[component]
fn LandingPage() -> impl IntoView {
    let config = &*SITE_CONFIG;

    let nav = RwSignal::new(NavigationController::new(
        config.sections.clone(),
        config.header_offset,
    ));
    let tracker = StoredValue::new(ScrollTracker::new(config.sections.clone(), config.scroll));
    let (scroll, set_scroll) = signal(tracker.with_value(|t| t.state()));

    let observe = move || {
        let offset = browser::scroll_y();
        let mut changed = None;
        tracker.update_value(|t| changed = t.observe(offset, &DomLayout));
        if let Some(state) = changed {
            set_scroll.set(state);
        }
    };

    let throttled = use_throttle_fn(observe, config.scroll_throttle_ms);
    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| {
        throttled();
    });
    // page may be restored mid-scroll
    Effect::new(move |_| observe());

    let on_navigate = Callback::new(move |id: SectionId| {
        nav.update(|n| {
            n.navigate(id, &WindowScroller);
        });
    });
    let on_top = Callback::new(move |_: ()| {
        nav.update(|n| n.scroll_to_top(&WindowScroller));
    });

    view! {
        <Title text="Home" />
        <Header scroll nav on_navigate />
        <main class="flex flex-col w-full">
            <Hero on_navigate />
            <Services />
            <Portfolio />
            <Pricing on_navigate />
            <Contact />
        </main>
        <Footer on_navigate on_top />
    }
}
