use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{ContactDraft, ServiceKind};

/// Contact form. Validation is local; there is no delivery backend, a valid
/// request is only logged and acknowledged.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let service = service.clone();
        let message = message.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = ContactDraft {
                name: (*name).clone(),
                email: (*email).clone(),
                service: (*service).clone(),
                message: (*message).clone(),
            };
            match draft.validate() {
                Ok(request) => {
                    log!(
                        "Contact request ready:",
                        request.service.value(),
                        request.email.clone(),
                        format!("{} chars", request.message.chars().count())
                    );
                    error_setter.set(None);
                    success_setter.set(Some(format!(
                        "Merci {} ! Nous revenons vers vous très vite.",
                        request.name
                    )));
                }
                Err(err) => {
                    log::debug!("contact form rejected: {:?}", err);
                    success_setter.set(None);
                    error_setter.set(Some(err.to_string()));
                }
            }
        })
    };

    html! {
        <form class="contact-form premium-card" onsubmit={onsubmit}>
            {
                if let Some(error_message) = (*error).as_ref() {
                    html! { <div class="form-error">{error_message}</div> }
                } else if let Some(success_message) = (*success).as_ref() {
                    html! { <div class="form-success">{success_message}</div> }
                } else {
                    html! {}
                }
            }
            <div class="form-row">
                <label for="contact-name">{"Nom"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Votre nom"
                    value={(*name).clone()}
                    onchange={let name = name.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
            </div>
            <div class="form-row">
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="vous@exemple.fr"
                    value={(*email).clone()}
                    onchange={let email = email.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
            </div>
            <div class="form-row">
                <label for="contact-service">{"Prestation"}</label>
                <select
                    id="contact-service"
                    onchange={let service = service.clone(); move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        service.set(select.value());
                    }}
                >
                    <option value="" selected={service.is_empty()}>{"Choisissez une prestation"}</option>
                    { for ServiceKind::ALL.iter().map(|kind| html! {
                        <option value={kind.value()} selected={*service == kind.value()}>{ kind.label() }</option>
                    }) }
                </select>
            </div>
            <div class="form-row">
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    placeholder="Décrivez votre projet"
                    value={(*message).clone()}
                    onchange={let message = message.clone(); move |e: Event| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        message.set(input.value());
                    }}
                />
            </div>
            <button type="submit" class="premium-button">{"Envoyer"}</button>
        </form>
    }
}
