use super::scroll_animation::ScrollAnimation;
use crate::config::SiteConfig;
use crate::contact::{ContactField, ContactForm, FieldError, INSTAGRAM_HANDLE, INSTAGRAM_URL};
use crate::logging::{log_event, LogLevel};
use crate::reveal::Animation;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

impl Reducible for ContactForm {
    type Action = (ContactField, String);

    fn reduce(self: Rc<Self>, (field, value): Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.set(field, value);
        Rc::new(next)
    }
}

fn input_value(event: &InputEvent) -> Option<String> {
    let target = event.target()?;

    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }

    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

fn field_error(errors: &[(ContactField, FieldError)], field: ContactField) -> Option<&'static str> {
    errors
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, error)| error.message(field))
}

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub on_back: Callback<()>,
}

#[function_component(ContactPage)]
pub fn contact_page(props: &ContactPageProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let form = use_reducer(ContactForm::default);
    let errors = use_state(Vec::<(ContactField, FieldError)>::new);
    let sent = use_state(|| false);

    let on_input = |field: ContactField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                dispatcher.dispatch((field, value));
            }
        })
    };

    let log_level = config.log_level;
    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let sent = sent.clone();
        let contact_email = config.contact_email.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(to) = contact_email.as_deref() else {
                return;
            };

            match form.validate() {
                Ok(message) => {
                    let href = message.mailto_href(to);
                    if let Some(win) = window() {
                        let _ = win.location().set_href(&href);
                    }
                    errors.set(Vec::new());
                    sent.set(true);
                    log_event(
                        log_level,
                        LogLevel::Info,
                        "contact_mailto_opened",
                        serde_json::json!({}),
                    );
                }
                Err(found) => {
                    log_event(
                        log_level,
                        LogLevel::Debug,
                        "contact_validation_failed",
                        serde_json::json!({ "errors": found.len() }),
                    );
                    errors.set(found);
                    sent.set(false);
                }
            }
        })
    };

    let on_back = props.on_back.reform(|_: MouseEvent| ());
    let name_error = field_error(&errors, ContactField::Name);
    let email_error = field_error(&errors, ContactField::Email);
    let message_error = field_error(&errors, ContactField::Message);

    html! {
        <div class="contact-page">
            <header class="contact-header">
                <button class="btn btn-secondary back-button" type="button" onclick={on_back}>
                    <span aria-hidden="true">{"← "}</span>{"Back to portfolio"}
                </button>
            </header>

            <main class="section-inner narrow">
                <ScrollAnimation animation={Animation::FadeUp}>
                    <div class="glass-panel">
                        <h1>{"Let's Create Something Amazing"}</h1>
                        <p class="muted">{"Tell me about the story you want to tell. I usually reply within two working days."}</p>

                        <ul class="contact-channels">
                            if let Some(email) = config.contact_email.clone() {
                                <li>
                                    <span class="muted">{"Email"}</span>
                                    <a class="link" href={format!("mailto:{email}")}>{email}</a>
                                </li>
                            }
                            <li>
                                <span class="muted">{"Instagram"}</span>
                                <a class="link" href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                                    {INSTAGRAM_HANDLE}
                                    <span class="external-mark" aria-hidden="true">{"↗"}</span>
                                    <span class="sr-only">{" (opens in a new tab)"}</span>
                                </a>
                            </li>
                        </ul>
                    </div>
                </ScrollAnimation>

                if config.contact_email.is_some() {
                    <ScrollAnimation animation={Animation::FadeUp} delay={75}>
                        <form class="glass-panel contact-form" novalidate={true} onsubmit={on_submit}>
                            <label class="form-field">
                                <span>{"Name"}</span>
                                <input
                                    type="text"
                                    name="name"
                                    autocomplete="name"
                                    value={form.name.clone()}
                                    aria-invalid={name_error.is_some().to_string()}
                                    oninput={on_input(ContactField::Name)}
                                />
                                if let Some(error) = name_error {
                                    <span class="field-error" role="alert">{error}</span>
                                }
                            </label>
                            <label class="form-field">
                                <span>{"Email"}</span>
                                <input
                                    type="email"
                                    name="email"
                                    autocomplete="email"
                                    value={form.email.clone()}
                                    aria-invalid={email_error.is_some().to_string()}
                                    oninput={on_input(ContactField::Email)}
                                />
                                if let Some(error) = email_error {
                                    <span class="field-error" role="alert">{error}</span>
                                }
                            </label>
                            <label class="form-field">
                                <span>{"Project details"}</span>
                                <textarea
                                    name="message"
                                    rows="6"
                                    value={form.message.clone()}
                                    aria-invalid={message_error.is_some().to_string()}
                                    oninput={on_input(ContactField::Message)}
                                />
                                if let Some(error) = message_error {
                                    <span class="field-error" role="alert">{error}</span>
                                }
                            </label>
                            <button class="btn btn-cta" type="submit">{"Send message"}</button>
                            if *sent {
                                <p class="form-notice" role="status">{"Your mail app should open with the message ready to send."}</p>
                            }
                        </form>
                    </ScrollAnimation>
                } else {
                    <p class="form-notice">{"The quickest way to reach me is a message on Instagram."}</p>
                }
            </main>
        </div>
    }
}
