use leptos::{either::Either, prelude::*};

use crate::{
    pricing::{self, PricingTrack, QuoteDetail, TRACKS},
    view_state::{QuoteSelector, QuoteView, SectionId},
};

#[component]
pub fn Pricing(on_navigate: Callback<SectionId>) -> impl IntoView {
    let quote = RwSignal::new(QuoteSelector::new(TRACKS));
    let tracks = quote.with_untracked(|q| q.tracks());

    view! {
        <section id=SectionId::Pricing.as_str() class="py-24">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <h2 class="section-title">"Pricing"</h2>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4 mb-12">
                    {tracks.iter().map(|track| view! { <TrackCard track quote /> }).collect_view()}
                </div>
                {move || {
                    quote
                        .with(|q| q.view())
                        .map(|panel| match panel {
                            QuoteView::Detail(detail) => {
                                Either::Left(view! { <QuotePanel detail on_navigate /> })
                            }
                            QuoteView::ComingSoon(id) => {
                                let title = pricing::track(id).map(|t| t.title).unwrap_or_default();
                                Either::Right(
                                    view! {
                                        <div class="card p-8 text-center">
                                            <h3 class="text-2xl font-bold mb-2">{title}</h3>
                                            <p class="text-muted mb-6">"A detailed quote is on its way."</p>
                                            <button
                                                class="btn btn-primary"
                                                on:click=move |_| on_navigate.run(SectionId::Contact)
                                            >
                                                "Ask for a quote"
                                            </button>
                                        </div>
                                    },
                                )
                            }
                        })
                }}
            </div>
        </section>
    }
}

#[component]
fn TrackCard(track: &'static PricingTrack, quote: RwSignal<QuoteSelector>) -> impl IntoView {
    let id = track.id;
    view! {
        <div
            class="card pricing-card p-6 cursor-pointer"
            class:highlight=track.highlight
            class:disabled=!track.available
            class:selected=move || quote.with(|q| q.selected() == Some(id))
            data-project=id.as_str()
            on:click=move |_| {
                quote.update(|q| {
                    q.select(id);
                })
            }
        >
            <i class=format!("bx {} text-4xl text-accent", track.icon)></i>
            <h3 class="text-xl font-bold my-3">{track.title}</h3>
            <p class="text-muted mb-4">{track.description}</p>
            <ul class="space-y-1 text-sm mb-4">
                {track
                    .features
                    .iter()
                    .map(|f| view! { <li><i class="bx bx-check text-accent"></i>" "{*f}</li> })
                    .collect_view()}
            </ul>
            {(!track.available).then(|| view! { <span class="badge badge-soon">"Coming soon"</span> })}
        </div>
    }
}

#[component]
fn QuotePanel(detail: &'static QuoteDetail, on_navigate: Callback<SectionId>) -> impl IntoView {
    view! {
        <div class="card quote-panel p-8">
            <div class="text-center mb-8">
                <h3 class="text-3xl font-bold">{detail.title}</h3>
                <p class="text-muted">{detail.subtitle}</p>
            </div>
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3 mb-8">
                {detail
                    .modules
                    .iter()
                    .map(|m| {
                        view! {
                            <div class="p-4 rounded-md border border-muted/30">
                                <h4 class="font-bold mb-1">{m.name}</h4>
                                <p class="text-sm text-muted mb-2">{m.description}</p>
                                <ul class="text-sm space-y-1">
                                    {m.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-col md:flex-row items-center justify-center gap-8 mb-8">
                <div class="text-center">
                    <span class="block text-sm text-muted">"Total"</span>
                    <span class="text-4xl font-bold text-accent">{detail.total_price}</span>
                </div>
                <div class="text-center">
                    <span class="block text-sm text-muted">"Timeline"</span>
                    <span class="text-xl font-bold">{detail.timeline}</span>
                </div>
            </div>
            <h4 class="text-xl font-bold mb-4">"Maintenance"</h4>
            <div class="grid gap-6 md:grid-cols-3 mb-8">
                {detail
                    .maintenance
                    .iter()
                    .map(|plan| {
                        view! {
                            <div class="p-4 rounded-md bg-brightBlack/30">
                                <h5 class="font-bold mb-2">{plan.name}</h5>
                                <ul class="text-sm space-y-1">
                                    {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <h4 class="text-xl font-bold mb-4">"Payment terms"</h4>
            <ul class="list-disc pl-6 mb-8">
                {detail.payment_terms.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
            </ul>
            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                <button class="btn btn-primary" on:click=move |_| on_navigate.run(SectionId::Contact)>
                    <i class="bx bx-message-dots"></i>
                    " Get started"
                </button>
            </div>
        </div>
    }
}
