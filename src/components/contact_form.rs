use gloo_net::http::Request;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::contact::{
    failure_reason, sanitize_phone, ErrorResponse, Inquiry, SubmissionOutcome, CONNECTION_FAILURE,
    GENERIC_FAILURE,
};

/// Contact form. One outbound POST per submit; the disabled submit control
/// is the only guard against overlapping attempts, and every branch of the
/// round trip leaves the `Submitting` state.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let outcome = use_state(|| SubmissionOutcome::Idle);

    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let oninput_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(sanitize_phone(&input.value()));
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
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // A new attempt wipes the previous attempt's banner.
            outcome.set(SubmissionOutcome::Submitting);

            let inquiry = Inquiry {
                email: (*email).clone(),
                phone_number: (*phone).clone(),
                message: (*message).clone(),
            };
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let outcome = outcome.clone();
            spawn_local(async move {
                match Request::post(&format!("{}/pass/contact-inquiry", config::get_api_url()))
                    .header("Content-Type", "application/json")
                    .json(&inquiry)
                    .expect("Failed to serialize inquiry")
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            email.set(String::new());
                            phone.set(String::new());
                            message.set(String::new());
                            outcome.set(SubmissionOutcome::Success);
                        } else {
                            warn!("Contact inquiry failed with status: {}", response.status());
                            match response.json::<ErrorResponse>().await {
                                Ok(body) => {
                                    outcome.set(SubmissionOutcome::Failure(failure_reason(
                                        body.error,
                                    )));
                                }
                                Err(_) => {
                                    outcome.set(SubmissionOutcome::Failure(
                                        GENERIC_FAILURE.to_string(),
                                    ));
                                }
                            }
                        }
                    }
                    Err(_) => {
                        outcome.set(SubmissionOutcome::Failure(CONNECTION_FAILURE.to_string()));
                    }
                }
            });
        })
    };

    let submitting = (*outcome).is_submitting();

    html! {
        <div class="contact-card">
            <form {onsubmit}>
                {
                    match &*outcome {
                        SubmissionOutcome::Success => html! {
                            <div class="form-banner success">
                                <p>{"✓ Message sent successfully! We'll get back to you soon."}</p>
                            </div>
                        },
                        SubmissionOutcome::Failure(reason) => html! {
                            <div class="form-banner error">
                                <p>{ reason.clone() }</p>
                            </div>
                        },
                        _ => html! {},
                    }
                }

                <div class="form-field">
                    <label for="contact-email">{"Email Address"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        required={true}
                        value={(*email).clone()}
                        oninput={oninput_email}
                        disabled={submitting}
                        placeholder="your.email@example.com"
                    />
                </div>

                <div class="form-field">
                    <label for="contact-phone">{"Phone Number"}</label>
                    <input
                        id="contact-phone"
                        type="tel"
                        required={true}
                        value={(*phone).clone()}
                        oninput={oninput_phone}
                        disabled={submitting}
                        inputmode="numeric"
                        pattern="[0-9]*"
                        placeholder="1234567890"
                    />
                </div>

                <div class="form-field">
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        required={true}
                        rows="6"
                        value={(*message).clone()}
                        oninput={oninput_message}
                        disabled={submitting}
                        placeholder="Tell us what you need help with..."
                    />
                </div>

                <button type="submit" class="submit-button" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Send Message" } }
                </button>
            </form>

            <style>
                {r#"
                .contact-card {
                    background: rgba(15, 10, 31, 0.6);
                    backdrop-filter: blur(10px);
                    border: 2px solid rgba(127, 32, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                }

                .contact-card form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .form-banner {
                    padding: 1rem;
                    border-radius: 12px;
                }

                .form-banner p {
                    margin: 0;
                    font-size: 0.9rem;
                    font-weight: 500;
                }

                .form-banner.success {
                    background: rgba(34, 197, 94, 0.1);
                    border: 1px solid rgba(34, 197, 94, 0.3);
                }

                .form-banner.success p {
                    color: #4ADE80;
                }

                .form-banner.error {
                    background: rgba(239, 68, 68, 0.1);
                    border: 1px solid rgba(239, 68, 68, 0.3);
                }

                .form-banner.error p {
                    color: #F87171;
                }

                .form-field label {
                    display: block;
                    color: #fff;
                    font-size: 0.9rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }

                .form-field input,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    background: #0F0A1F;
                    border: 1px solid rgba(127, 32, 255, 0.3);
                    border-radius: 12px;
                    color: #fff;
                    font-size: 1rem;
                    font-family: inherit;
                    transition: border-color 0.3s ease;
                    resize: none;
                }

                .form-field input::placeholder,
                .form-field textarea::placeholder {
                    color: #9CA3AF;
                }

                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #2DB6FF;
                }

                .form-field input:disabled,
                .form-field textarea:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .submit-button {
                    padding: 1rem 1.5rem;
                    background: linear-gradient(to right, #2DB6FF, #9A3BFF);
                    border: none;
                    border-radius: 12px;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                    box-shadow: 0 8px 24px rgba(45, 182, 255, 0.2);
                }

                .submit-button:hover:not(:disabled) {
                    transform: scale(1.03);
                }

                .submit-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                    transform: none;
                }
                "#}
            </style>
        </div>
    }
}
