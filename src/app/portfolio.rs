use leptos::{either::Either, prelude::*};

use crate::{
    catalog::{CatalogItem, GLOBAL_CATALOG},
    view_state::{CatalogFilter, CategoryFilter, SectionId},
};

#[component]
pub fn Portfolio() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::new(GLOBAL_CATALOG.clone()));
    let categories = filter.with_untracked(|f| f.categories());
    let visible = Memo::new(move |_| {
        filter.with(|f| f.visible_items().cloned().collect::<Vec<_>>())
    });

    view! {
        <section id=SectionId::Portfolio.as_str() class="py-24">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <h2 class="section-title">"Portfolio"</h2>
                <div class="flex flex-wrap justify-center gap-3 mb-10">
                    {categories
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class="filter-btn"
                                    class:active=move || filter.with(|f| f.active() == category)
                                    data-filter=category.as_str()
                                    on:click=move |_| filter.update(|f| f.set_category(category))
                                >
                                    <i class=format!("bx {}", category.icon())></i>
                                    " "
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || visible.get()
                        key=|item| item.id
                        children=move |item| view! { <PortfolioCard item /> }
                    />
                </div>
                <Show when=move || visible.with(|items| items.is_empty())>
                    <p class="text-center text-muted">"Nothing here yet."</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(item: CatalogItem) -> impl IntoView {
    let category = CategoryFilter::Only(item.category);
    let badges = view! {
        {item.featured.then(|| view! { <span class="badge badge-featured">"⭐ Featured"</span> })}
        {item
            .is_coming_soon()
            .then(|| view! { <span class="badge badge-soon">"Coming soon"</span> })}
        {item
            .is_certificate()
            .then(|| view! { <span class="badge badge-certificate">"🎓 Certificate"</span> })}
    };

    let footer = if item.is_certificate() {
        Either::Left(view! {
            <div class="text-sm text-muted">
                {item.issuer.clone().map(|issuer| view! { <span>{issuer}</span> })}
                {item.date.clone().map(|date| view! { <span class="ml-2">{date}</span> })}
            </div>
            {item
                .link
                .clone()
                .map(|link| {
                    view! {
                        <a href=link target="_blank" rel="noopener noreferrer" class="card-link">
                            <i class="bx bx-award"></i>
                            " View certificate"
                        </a>
                    }
                })}
        })
    } else {
        let (target, rel) = if item.external {
            ("_blank", "noopener noreferrer")
        } else {
            ("_self", "")
        };
        Either::Right(view! {
            <div class="flex gap-4">
                {item
                    .link
                    .clone()
                    .filter(|_| !item.is_coming_soon())
                    .map(|link| {
                        view! {
                            <a href=link target=target rel=rel class="card-link">
                                <i class="bx bx-link-external"></i>
                                " Visit"
                            </a>
                        }
                    })}
                {item
                    .github
                    .clone()
                    .map(|github| {
                        view! {
                            <a href=github target="_blank" rel="noopener noreferrer" class="card-link">
                                <i class="bx bxl-github"></i>
                                " Code"
                            </a>
                        }
                    })}
            </div>
        })
    };

    view! {
        <article class="card overflow-hidden" data-category=category.as_str()>
            <div class="relative">
                <img src=item.image.clone() alt=item.title.clone() loading="lazy" class="w-full h-48 object-cover" />
                <div class="absolute top-2 left-2 flex gap-2">{badges}</div>
            </div>
            <div class="p-6">
                <span class="text-xs uppercase text-accent">
                    <i class=format!("bx {}", category.icon())></i>
                    " "
                    {category.label()}
                </span>
                <h3 class="text-xl font-bold my-2">{item.title.clone()}</h3>
                <p class="text-muted mb-4">{item.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {item
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
                {footer}
            </div>
        </article>
    }
}
