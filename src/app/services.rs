use leptos::prelude::*;

use crate::view_state::SectionId;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "bx-globe",
        title: "Websites",
        description: "Fast, responsive sites for businesses and personal brands.",
    },
    Service {
        icon: "bx-mobile-alt",
        title: "Applications",
        description: "Web and mobile apps built around the way your team works.",
    },
    Service {
        icon: "bx-joystick",
        title: "Games",
        description: "Small browser games and interactive experiences.",
    },
    Service {
        icon: "bx-wrench",
        title: "Maintenance",
        description: "Hosting, updates and support once the project is live.",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=SectionId::Services.as_str() class="py-24">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <h2 class="section-title">"What I do"</h2>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    {SERVICES
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="card p-6 text-center">
                                    <i class=format!("bx {} text-4xl text-accent mb-4", s.icon)></i>
                                    <h3 class="text-xl font-bold mb-2">{s.title}</h3>
                                    <p class="text-muted">{s.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
