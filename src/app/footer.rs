use leptos::prelude::*;

use crate::{
    config::{build_year, SITE_CONFIG},
    view_state::SectionId,
};

#[component]
pub fn Footer(on_navigate: Callback<SectionId>, on_top: Callback<()>) -> impl IntoView {
    let config = &*SITE_CONFIG;
    let sections = config.sections.iter().collect::<Vec<_>>();

    view! {
        <footer class="footer border-t border-muted/30 py-10">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-6">
                <div>
                    <span class="font-bold">{config.brand.clone()}</span>
                    <p class="text-sm text-muted">{config.tagline.clone()}</p>
                </div>
                <nav class="flex flex-wrap gap-4">
                    {sections
                        .into_iter()
                        .map(|id| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="text-muted hover:text-accent"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_navigate.run(id);
                                    }
                                >
                                    {id.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <p class="text-sm text-muted">
                    {format!("© {} {}. All rights reserved.", build_year(), config.brand)}
                </p>
            </div>
            <button
                class="scroll-top fixed bottom-6 right-6 rounded-full p-3"
                aria-label="Back to top"
                on:click=move |_| on_top.run(())
            >
                <i class="bx bx-up-arrow-alt text-2xl"></i>
            </button>
        </footer>
    }
}
