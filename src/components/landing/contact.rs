//! Contact section with a local-only message form.
//!
//! Nothing is sent anywhere: submitting waits briefly, shows an
//! acknowledgement, then clears the form.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::{CONTACT_ACK_MS, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_SEND_MS};

stylance::import_crate_style!(css, "src/components/landing/contact.module.css");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Label of the first empty required field.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("Full Name", &self.name),
            ("Email", &self.email),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactStatus {
    Editing,
    Sending,
    Sent,
}

/// Text input bound to one field of the form.
fn text_field(
    form: RwSignal<ContactForm>,
    label: &'static str,
    input_type: &'static str,
    get: fn(&ContactForm) -> &String,
    set: fn(&mut ContactForm, String),
) -> impl IntoView {
    view! {
        <label class=css::label>
            {label}
            <input
                class=css::input
                type=input_type
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(ContactStatus::Editing);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() != ContactStatus::Editing {
            return;
        }
        if let Some(field) = form.with_untracked(|f| f.missing_field()) {
            error.set(Some(format!("{} is required.", field)));
            return;
        }

        error.set(None);
        status.set(ContactStatus::Sending);
        spawn_local(async move {
            TimeoutFuture::new(CONTACT_SEND_MS).await;
            status.set(ContactStatus::Sent);
            TimeoutFuture::new(CONTACT_ACK_MS).await;
            form.set(ContactForm::default());
            status.set(ContactStatus::Editing);
        });
    };

    view! {
        <section id="contact" class=css::section>
            <div class=css::heading>
                <h2 class=css::title>"Get in Touch"</h2>
                <p class=css::subtitle>
                    "Questions about migrations, pricing or security? We're happy to help."
                </p>
            </div>

            <div class=css::grid>
                <div class=css::card>
                    <Show
                        when=move || status.get() == ContactStatus::Sent
                        fallback=move || view! {
                            <form class=css::form on:submit=on_submit>
                                <div class=css::row>
                                    {text_field(form, "Full Name", "text", |f| &f.name, |f, v| f.name = v)}
                                    {text_field(form, "Email", "email", |f| &f.email, |f, v| f.email = v)}
                                </div>
                                <div class=css::row>
                                    {text_field(form, "Company", "text", |f| &f.company, |f, v| f.company = v)}
                                    {text_field(form, "Subject", "text", |f| &f.subject, |f, v| f.subject = v)}
                                </div>
                                <label class=css::label>
                                    "Message"
                                    <textarea
                                        class=css::textarea
                                        rows="5"
                                        prop:value=move || form.with(|f| f.message.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.message = value);
                                        }
                                    ></textarea>
                                </label>
                                {move || error.get().map(|msg| view! {
                                    <p class=css::error role="alert">{msg}</p>
                                })}
                                <button
                                    class=css::submit
                                    type="submit"
                                    disabled=move || status.get() == ContactStatus::Sending
                                >
                                    <Icon icon=ic::MAIL />
                                    {move || {
                                        if status.get() == ContactStatus::Sending {
                                            "Sending..."
                                        } else {
                                            "Send Message"
                                        }
                                    }}
                                </button>
                            </form>
                        }
                    >
                        <div class=css::sent>
                            <span class=css::sentIcon><Icon icon=ic::COMPLETED /></span>
                            <h3>"Message Sent!"</h3>
                            <p>"We'll get back to you soon."</p>
                        </div>
                    </Show>
                </div>

                <div class=css::channels>
                    <h3 class=css::channelsTitle>"Other Ways to Reach Us"</h3>
                    <div class=css::channel>
                        <span class=css::channelIcon><Icon icon=ic::MAIL /></span>
                        <div>
                            <div class=css::channelName>"Email"</div>
                            <div class=css::channelValue>{CONTACT_EMAIL}</div>
                            <div class=css::channelHours>"24/7"</div>
                        </div>
                    </div>
                    <div class=css::channel>
                        <span class=css::channelIcon><Icon icon=ic::USER /></span>
                        <div>
                            <div class=css::channelName>"Phone"</div>
                            <div class=css::channelValue>{CONTACT_PHONE}</div>
                            <div class=css::channelHours>"Mon-Fri 9AM-6PM EST"</div>
                        </div>
                    </div>
                    <div class=css::channel>
                        <span class=css::channelIcon><Icon icon=ic::ACTIVITY /></span>
                        <div>
                            <div class=css::channelName>"Live Chat"</div>
                            <div class=css::channelValue>"Available in app"</div>
                            <div class=css::channelHours>"Mon-Fri 9AM-6PM EST"</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
