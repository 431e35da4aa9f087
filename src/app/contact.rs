use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::{
    config::SITE_CONFIG,
    view_state::{ContactFormController, DispatchOutcome, Field, SectionId},
};

use super::browser::BrowserHandoff;

const QUICK_MESSAGE: &str = "Hi! I'd like to hear more about your development services.";

#[derive(Debug, Clone, PartialEq)]
enum FormNotice {
    Error(String),
    Info(&'static str),
}

impl FormNotice {
    fn from_outcome(outcome: DispatchOutcome) -> Option<Self> {
        match outcome {
            DispatchOutcome::Declined => None,
            DispatchOutcome::Sent { .. } => Some(FormNotice::Info("✅ WhatsApp opened")),
            DispatchOutcome::Copied => Some(FormNotice::Info("📋 Details copied to clipboard")),
            DispatchOutcome::ManualFallback => {
                let reasons = outcome
                    .failures()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(FormNotice::Error(format!(
                    "Please reach out directly ({reasons})."
                )))
            }
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let settings = SITE_CONFIG.contact.clone();
    let form = RwSignal::new(ContactFormController::new(settings.clone()));
    let (notice, set_notice) = signal(None::<FormNotice>);
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let submission = match form.with_untracked(|c| c.prepare()) {
            Ok(submission) => submission,
            Err(e) => {
                set_notice.set(Some(FormNotice::Error(e.to_string())));
                return;
            }
        };
        set_notice.set(None);
        set_sending.set(true);
        spawn_local(async move {
            let outcome = submission.dispatch(&BrowserHandoff).await;
            form.update(|c| c.apply(outcome));
            set_notice.set(FormNotice::from_outcome(outcome));
            set_sending.set(false);
        });
    };

    let quick_link = settings.deep_link(QUICK_MESSAGE);
    let phone = format!("+{}", settings.number());

    view! {
        <section id=SectionId::Contact.as_str() class="py-24">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <h2 class="section-title">"Let's work together"</h2>
                <div class="grid gap-10 lg:grid-cols-2">
                    <form class="card p-6 space-y-4" novalidate=true on:submit=on_submit>
                        <FormInput form field=Field::Name input_type="text" placeholder="Full name *" />
                        <FormInput form field=Field::Email input_type="email" placeholder="Email *" />
                        <FormInput form field=Field::Phone input_type="tel" placeholder="Phone" />
                        <FormInput form field=Field::Subject input_type="text" placeholder="Subject *" />
                        <textarea
                            name=Field::Message.label()
                            rows="5"
                            placeholder="Tell me about your project *"
                            class="form-control"
                            prop:value=move || form.with(|c| c.field(Field::Message).to_string())
                            on:input=move |ev| {
                                form.update(|c| c.set_field(Field::Message, event_target_value(&ev)))
                            }
                        ></textarea>
                        {move || {
                            notice
                                .get()
                                .map(|n| {
                                    let (class, msg) = match n {
                                        FormNotice::Error(msg) => ("form-notice text-red-500", msg),
                                        FormNotice::Info(msg) => {
                                            ("form-notice text-green-500", msg.to_string())
                                        }
                                    };
                                    view! { <p class=class>{msg}</p> }
                                })
                        }}
                        <button type="submit" class="btn btn-primary w-full" disabled=move || sending.get()>
                            <i class="bx bxl-whatsapp"></i>
                            {move || if sending.get() { " Sending..." } else { " Send on WhatsApp" }}
                        </button>
                    </form>
                    <div class="grid gap-4 content-start">
                        <ContactMethod
                            icon="bxl-whatsapp"
                            title="WhatsApp"
                            detail=phone.clone()
                            href=quick_link
                            external=true
                        />
                        <ContactMethod
                            icon="bx-phone"
                            title="Phone"
                            detail=phone.clone()
                            href=format!("tel:{phone}")
                            external=false
                        />
                        <ContactMethod
                            icon="bx-envelope"
                            title="Email"
                            detail=settings.email.clone()
                            href=format!("mailto:{}", settings.email)
                            external=false
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormInput(
    form: RwSignal<ContactFormController>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            name=field.label()
            placeholder=placeholder
            required=field.is_required()
            class="form-control"
            prop:value=move || form.with(|c| c.field(field).to_string())
            on:input=move |ev| form.update(|c| c.set_field(field, event_target_value(&ev)))
        />
    }
}

#[component]
fn ContactMethod(
    icon: &'static str,
    title: &'static str,
    detail: String,
    href: String,
    external: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=if external { "_blank" } else { "_self" }
            rel=if external { "noopener noreferrer" } else { "" }
            class="card contact-method flex items-center gap-4 p-4"
        >
            <i class=format!("bx {icon} text-3xl text-accent")></i>
            <div>
                <h4 class="font-bold">{title}</h4>
                <span class="text-muted">{detail}</span>
            </div>
        </a>
    }
}
