use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    catalog::GLOBAL_CATALOG,
    config::SITE_CONFIG,
    view_state::{CatalogFilter, SectionId, TextRotator},
};

#[component]
pub fn Hero(on_navigate: Callback<SectionId>) -> impl IntoView {
    let config = &*SITE_CONFIG;
    let rotator = config.rotator().unwrap_or_else(|e| {
        log::error!("headline rotation disabled: {e}");
        TextRotator::single(config.tagline.clone())
    });
    let interval_ms = rotator.interval().as_millis() as u64;
    let rotator = RwSignal::new(rotator);

    let _ = use_interval_fn(
        move || {
            rotator.update(|r| {
                r.tick();
            })
        },
        interval_ms,
    );

    let stats = CatalogFilter::new(GLOBAL_CATALOG.clone()).stats();

    view! {
        <section id=SectionId::Home.as_str() class="hero min-h-screen flex items-center pt-24">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl md:text-6xl font-bold mb-6">{config.brand.clone()}</h1>
                <p class="text-2xl md:text-3xl mb-4 h-10 text-accent">
                    <span class="rotating-text">
                        {move || rotator.with(|r| r.current().to_string())}
                    </span>
                </p>
                <p class="text-lg text-muted mb-10">{config.tagline.clone()}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-16">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| on_navigate.run(SectionId::Portfolio)
                    >
                        <i class="bx bx-briefcase"></i>
                        " View my work"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| on_navigate.run(SectionId::Contact)
                    >
                        <i class="bx bx-message-dots"></i>
                        " Let's talk"
                    </button>
                </div>
                <div class="grid grid-cols-3 gap-6 max-w-xl mx-auto">
                    <Stat value=stats.projects label="Projects" />
                    <Stat value=stats.live_projects label="Live sites" />
                    <Stat value=stats.certificates label="Certificates" />
                </div>
                <button
                    class="scroll-indicator mt-16 text-3xl text-muted animate-bounce"
                    aria-label="Scroll to services"
                    on:click=move |_| on_navigate.run(SectionId::Services)
                >
                    <i class="bx bx-chevron-down"></i>
                </button>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: usize, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="block text-3xl font-bold text-accent">{value}</span>
            <span class="text-sm text-muted">{label}</span>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_hero_renders_scroll_indicator() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let on_navigate = Callback::new(|_: SectionId| {});
            view! { <Hero on_navigate /> }.to_html()
        });
        assert!(html.contains("scroll-indicator"));
        assert!(html.contains(r#"aria-label="Scroll to services""#));
        assert!(html.contains(r#"id="home""#));
    }
}
