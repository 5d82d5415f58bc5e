use std::collections::HashMap;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use rand::{SeedableRng, rngs::SmallRng};

use api::contact::{ContactDraft, SimulatedSubmitter};
use common::form::{ContactForm, Field, FieldMark, SubmitDecision};

use crate::{state::AppState, util::dom};

const FORM_ID: &str = "contactForm";

type Marks = HashMap<Field, FieldMark>;

#[derive(Clone, PartialEq, Props)]
struct TextFieldProps {
    field: Field,
    label: &'static str,
    input_type: &'static str,
    draft: Signal<ContactDraft>,
    marks: Signal<Marks>,
    max_chars: usize,
}

#[component]
fn TextField(props: TextFieldProps) -> Element {
    let field = props.field;
    let max_chars = props.max_chars;
    let mut draft = props.draft;
    let mut marks = props.marks;

    let value = field.value(&draft.read()).to_owned();
    let mark = marks.read().get(&field).copied().unwrap_or_default();
    let id = field.name();

    rsx! {
        label { class: "form-label", r#for: "{id}", "{props.label}" }
        input {
            class: "form-control {mark.class()}",
            id: "{id}",
            name: "{id}",
            r#type: "{props.input_type}",
            required: field.required(),
            value: "{value}",
            oninput: move |evt| {
                field.set(&mut draft.write(), evt.value());
                marks.write().remove(&field);
            },
            onblur: move |_| {
                let mark = FieldMark::on_blur(field, field.value(&draft.read()), max_chars);
                marks.write().insert(field, mark);
            },
        }
        div { class: "invalid-feedback",
            if field == Field::Email {
                "Please enter a valid email address."
            } else {
                "This field is required."
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ChoiceFieldProps {
    field: Field,
    label: &'static str,
    options: Vec<&'static str>,
    draft: Signal<ContactDraft>,
}

#[component]
fn ChoiceField(props: ChoiceFieldProps) -> Element {
    let field = props.field;
    let mut draft = props.draft;
    let value = field.value(&draft.read()).to_owned();
    let id = field.name();

    rsx! {
        label { class: "form-label", r#for: "{id}", "{props.label}" }
        select {
            class: "form-select",
            id: "{id}",
            name: "{id}",
            value: "{value}",
            onchange: move |evt| field.set(&mut draft.write(), evt.value()),
            option { value: "", "Not sure yet" }
            for choice in props.options.iter() {
                option { key: "{choice}", value: "{choice}", "{choice}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MessageFieldProps {
    draft: Signal<ContactDraft>,
    marks: Signal<Marks>,
    form: Signal<ContactForm>,
}

// the message box, with its running character count
#[component]
fn MessageField(props: MessageFieldProps) -> Element {
    let mut draft = props.draft;
    let mut marks = props.marks;
    let counter = props.form.read().counter();

    let value = draft.read().message.clone();
    let status = counter.status(&value);
    let mark = marks
        .read()
        .get(&Field::Message)
        .copied()
        .unwrap_or_default();

    rsx! {
        label { class: "form-label", r#for: "message", "Message" }
        textarea {
            class: "form-control {mark.class()}",
            id: "message",
            name: "message",
            rows: "6",
            required: true,
            maxlength: "{counter.max()}",
            value: "{value}",
            oninput: move |evt| {
                Field::Message.set(&mut draft.write(), counter.clamp(&evt.value()));
                marks.write().remove(&Field::Message);
            },
            onblur: move |_| {
                let mark = FieldMark::on_blur(Field::Message, &draft.read().message, counter.max());
                marks.write().insert(Field::Message, mark);
            },
        }
        div { class: "invalid-feedback", "Please tell me a little about your project." }
        div {
            class: if status.warning { "character-counter text-muted text-end mt-1 text-warning" } else { "character-counter text-muted text-end mt-1" },
            small { "{status.text}" }
        }
    }
}

#[component]
pub fn ContactPage() -> Element {
    let state = use_context::<AppState>();
    let config = state.config.read().contact.clone();
    let max_chars = config.message_max_chars;
    let dismiss_ms = config.banner_dismiss_ms;

    let mut submitter = use_signal({
        let config = config.clone();
        move || {
            let seed = js_sys::Date::now() as u64;
            SimulatedSubmitter::new(
                config.submit_delay_ms,
                config.success_rate,
                SmallRng::seed_from_u64(seed),
            )
        }
    });
    let mut form = use_signal(move || ContactForm::new(config));
    let mut draft = use_signal(ContactDraft::default);
    let mut marks = use_signal(Marks::new);
    let mut scrolled = use_signal(|| 0u64);

    // bring a fresh success banner into view once it has rendered
    use_effect(move || {
        let Some(generation) = form.read().banner().pending_scroll(*scrolled.peek()) else {
            return;
        };

        scrolled.set(generation);
        dom::scroll_into_view(".contact-alert");
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let current = draft.read().clone();
        let browser_valid = dom::form_is_valid(FORM_ID);
        let decision = form
            .write()
            .submit(&current, browser_valid, &mut *submitter.write());

        match decision {
            SubmitDecision::Rejected(errors) => {
                let mut marks = marks.write();
                for (field, _) in errors {
                    marks.insert(field, FieldMark::Invalid);
                }
            }
            SubmitDecision::Busy => {}
            SubmitDecision::Sent(pending) => {
                spawn(async move {
                    let result = pending.await;
                    let settled = form.write().settle(result);

                    if settled.reset_form {
                        draft.set(ContactDraft::default());
                        marks.write().clear();
                    }

                    if let Some(generation) = settled.dismiss {
                        // the page may be gone by the time this fires
                        Timeout::new(dismiss_ms, move || {
                            if let Ok(mut form) = form.try_write() {
                                form.banner_mut().dismiss_generation(generation);
                            }
                        })
                        .forget();
                    }
                });
            }
        }
    };

    let busy = form.read().busy();
    let validated = form.read().was_validated();
    let banner = form.read().banner().current().cloned();

    rsx! {
        section { class: "contact-section py-4",
            h2 { class: "section-title", "Get in touch" }
            p { class: "text-muted mb-4",
                "Have a project in mind or just want to say hello? Drop me a message."
            }

            form {
                id: FORM_ID,
                class: if validated { "contact-form needs-validation was-validated" } else { "contact-form needs-validation" },
                "novalidate": "true",
                onsubmit: handle_submit,

                div { class: "row g-3",
                    div { class: "col-md-6",
                        TextField {
                            field: Field::FirstName,
                            label: "First name",
                            input_type: "text",
                            draft,
                            marks,
                            max_chars,
                        }
                    }
                    div { class: "col-md-6",
                        TextField {
                            field: Field::LastName,
                            label: "Last name",
                            input_type: "text",
                            draft,
                            marks,
                            max_chars,
                        }
                    }
                    div { class: "col-md-6",
                        TextField {
                            field: Field::Email,
                            label: "Email",
                            input_type: "email",
                            draft,
                            marks,
                            max_chars,
                        }
                    }
                    div { class: "col-md-6",
                        TextField {
                            field: Field::Subject,
                            label: "Subject",
                            input_type: "text",
                            draft,
                            marks,
                            max_chars,
                        }
                    }
                    div { class: "col-md-6",
                        ChoiceField {
                            field: Field::Budget,
                            label: "Budget",
                            options: vec!["< $1k", "$1k - $5k", "$5k - $10k", "$10k+"],
                            draft,
                        }
                    }
                    div { class: "col-md-6",
                        ChoiceField {
                            field: Field::Timeline,
                            label: "Timeline",
                            options: vec!["ASAP", "1 - 3 months", "3 - 6 months", "Flexible"],
                            draft,
                        }
                    }
                    div { class: "col-12",
                        MessageField { draft, marks, form }
                    }
                }

                button {
                    r#type: "submit",
                    class: if busy { "btn btn-primary btn-loading mt-3" } else { "btn btn-primary mt-3" },
                    disabled: busy,
                    if busy {
                        span {
                            class: "spinner-border spinner-border-sm me-2",
                            role: "status",
                            aria_hidden: "true",
                        }
                        "Sending..."
                    } else {
                        i { class: "fas fa-paper-plane me-2" }
                        "Send Message"
                    }
                }
            }

            if let Some(banner) = banner {
                div {
                    key: "{banner.generation}",
                    class: "alert {banner.kind.alert_class()} alert-dismissible fade show contact-alert mt-3",
                    role: "alert",
                    i { class: "fas {banner.kind.icon()} me-2" }
                    "{banner.message}"
                    button {
                        r#type: "button",
                        class: "btn-close",
                        aria_label: "Close",
                        onclick: move |_| form.write().banner_mut().dismiss(),
                    }
                }
            }
        }
    }
}
