//! Contact form with required-field validation. Submission is a stub: the
//! site has no backend, a valid submit just logs and thanks the visitor.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Clone, Copy, PartialEq, Default)]
struct FieldErrors {
    name: bool,
    email: bool,
    message: bool,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let school = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let sent = use_state(|| false);

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_school = {
        let school = school.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            school.set(input.value());
        })
    };
    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let school = school.clone();
        let message = message.clone();
        let errors = errors.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let next = FieldErrors {
                name: is_blank(&name),
                email: is_blank(&email),
                message: is_blank(&message),
            };
            errors.set(next);
            if next.name || next.email || next.message {
                return;
            }
            log::info!("contact request from {} ({})", *name, *email);
            name.set(String::new());
            email.set(String::new());
            school.set(String::new());
            message.set(String::new());
            sent.set(true);
        })
    };

    html! {
        <form class="contact-form" novalidate=true {onsubmit}>
            <div class="form-row">
                <input
                    class={classes!("form-field", errors.name.then_some("error"))}
                    type="text"
                    placeholder="Your name"
                    required=true
                    value={(*name).clone()}
                    oninput={oninput_name}
                />
                <input
                    class={classes!("form-field", errors.email.then_some("error"))}
                    type="email"
                    placeholder="Work email"
                    required=true
                    value={(*email).clone()}
                    oninput={oninput_email}
                />
            </div>
            <input
                class="form-field"
                type="text"
                placeholder="School or district (optional)"
                value={(*school).clone()}
                oninput={oninput_school}
            />
            <textarea
                class={classes!("form-field", errors.message.then_some("error"))}
                placeholder="How many classrooms are you running?"
                required=true
                rows="4"
                value={(*message).clone()}
                oninput={oninput_message}
            />
            <button class="btn-hero" type="submit">{"Request a Demo"}</button>
            if *sent {
                <p class="form-sent">{"Thanks! We'll be in touch within one school day."}</p>
            }
        </form>
    }
}
