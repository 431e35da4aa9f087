use leptos::{html, prelude::*};
use leptos_use::on_click_outside;

use crate::{
    config::SITE_CONFIG,
    view_state::{NavigationController, ScrollState, SectionId},
};

#[component]
pub fn Header(
    scroll: ReadSignal<ScrollState>,
    nav: RwSignal<NavigationController>,
    on_navigate: Callback<SectionId>,
) -> impl IntoView {
    let navbar_ref = NodeRef::<html::Nav>::new();
    let sections = nav.with_untracked(|n| n.sections().iter().collect::<Vec<_>>());
    let menu_open = move || nav.with(|n| n.menu().is_open);

    let _ = on_click_outside(navbar_ref, move |_| {
        if nav.with_untracked(|n| n.menu().is_open) {
            nav.update(|n| n.close_menu());
        }
    });

    view! {
        <header
            class="header fixed top-0 inset-x-0 z-50 transition-all duration-300"
            class:scrolled=move || scroll.get().scrolled_past_threshold
        >
            <nav
                node_ref=navbar_ref
                class="flex items-center justify-between mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4"
            >
                <a
                    href="#home"
                    class="flex items-center gap-2 text-xl font-bold"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_navigate.run(SectionId::Home);
                    }
                >
                    <i class="bx bx-code-alt text-accent"></i>
                    <span>{SITE_CONFIG.brand.clone()}</span>
                </a>
                <div class="nav-menu" class:active=menu_open>
                    {sections
                        .into_iter()
                        .map(|id| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="nav-link flex items-center gap-2 px-3 py-2 rounded-md"
                                    class:active=move || scroll.get().active_section == id
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_navigate.run(id);
                                    }
                                >
                                    <i class=format!("bx {}", id.icon())></i>
                                    <span>{id.label()}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="menu-toggle md:hidden"
                    class:active=menu_open
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| nav.update(|n| n.toggle_menu())
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}
