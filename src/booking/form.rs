use std::collections::HashMap;

use chrono::Local;
use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::components::Link;

use crate::booking::submit::{send_booking, BookingPayload};
use crate::booking::validation::{validate, BookingFields, Field, FieldState, REQUIRED_FIELDS};
use crate::components::notification::{Notification, NotificationToast};
use crate::Route;

const SUBMIT_LABEL: &str = "Erstgespräch anfragen";
const SUBMIT_PENDING_LABEL: &str = "Wird gesendet...";
const AGGREGATE_ERROR: &str = "Bitte korrigieren Sie die markierten Felder.";
const SUCCESS_MESSAGE: &str =
    "Vielen Dank für Ihre Buchungsanfrage! Wir melden uns innerhalb von 4 Stunden bei Ihnen.";
const FAILURE_MESSAGE: &str =
    "Es gab einen Fehler beim Senden Ihrer Anfrage. Bitte versuchen Sie es erneut.";

/// The booking form: inline validation on blur, optimistic clearing
/// while typing, one webhook POST per submit attempt.
#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let fields = use_state(BookingFields::default);
    let states = use_state(HashMap::<Field, FieldState>::new);
    let submitting = use_state(|| false);
    let notification = use_state(|| None::<Notification>);
    let notification_seq = use_mut_ref(|| 0u32);

    // The picker must not offer past slots; local clock, not UTC.
    let min_date = Local::now().format("%Y-%m-%dT%H:%M").to_string();

    let oninput_for = {
        let fields = fields.clone();
        let states = states.clone();
        move |field: Field| {
            let fields = fields.clone();
            let states = states.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let value = input.value();
                let mut next = (*fields).clone();
                next.set(field, value.clone());
                fields.set(next);
                // optimistic clear while typing; blur or submit re-validates
                if !value.trim().is_empty() {
                    let mut map = (*states).clone();
                    map.insert(field, FieldState::Editing);
                    states.set(map);
                }
            })
        }
    };

    let onblur_for = {
        let states = states.clone();
        move |field: Field| {
            let states = states.clone();
            Callback::from(move |e: FocusEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let verdict = validate(field.kind(), &input.value());
                let mut map = (*states).clone();
                map.insert(field, FieldState::from(verdict));
                states.set(map);
            })
        }
    };

    let on_select_change = {
        let fields = fields.clone();
        move |field: Field| {
            let fields = fields.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                let mut next = (*fields).clone();
                next.set(field, select.value());
                fields.set(next);
            })
        }
    };

    let on_message_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.message = area.value();
            fields.set(next);
        })
    };

    let on_privacy_change = {
        let fields = fields.clone();
        let states = states.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.privacy = input.checked();
            fields.set(next);
            let mut map = (*states).clone();
            map.insert(Field::Privacy, FieldState::Editing);
            states.set(map);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let states = states.clone();
        let submitting = submitting.clone();
        let notification = notification.clone();
        let notification_seq = notification_seq.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let snapshot = (*fields).clone();
            let mut map = (*states).clone();
            let mut all_valid = true;
            for field in REQUIRED_FIELDS {
                let verdict = validate(field.kind(), &snapshot.value_of(field));
                if !verdict.is_valid() {
                    all_valid = false;
                }
                map.insert(field, FieldState::from(verdict));
            }
            states.set(map);

            if !all_valid {
                // no request goes out while any required field is invalid
                let id = {
                    let mut seq = notification_seq.borrow_mut();
                    *seq += 1;
                    *seq
                };
                notification.set(Some(Notification::error(id, AGGREGATE_ERROR)));
                return;
            }

            submitting.set(true);

            let payload = BookingPayload::from_fields(&snapshot);
            let fields = fields.clone();
            let states = states.clone();
            let submitting = submitting.clone();
            let notification = notification.clone();
            let notification_seq = notification_seq.clone();
            spawn_local(async move {
                let result = send_booking(&payload).await;

                // the button comes back no matter how the request went
                submitting.set(false);

                let id = {
                    let mut seq = notification_seq.borrow_mut();
                    *seq += 1;
                    *seq
                };
                match result {
                    Ok(()) => {
                        notification.set(Some(Notification::success(id, SUCCESS_MESSAGE)));
                        fields.set(BookingFields::default());
                        states.set(HashMap::new());
                    }
                    Err(err) => {
                        error!("Webhook error:", err.to_string());
                        // keep the input so the user can retry
                        notification.set(Some(Notification::error(id, FAILURE_MESSAGE)));
                    }
                }
            });
        })
    };

    let on_dismiss = {
        let notification = notification.clone();
        Callback::from(move |_id: u32| {
            notification.set(None);
        })
    };

    let field_style = |field: Field| -> String {
        let state = states.get(&field).copied().unwrap_or(FieldState::Pristine);
        format!("border-color: {};", state.border_color())
    };

    let field_message = |field: Field| -> Html {
        let state = states.get(&field).copied().unwrap_or(FieldState::Pristine);
        match state.message() {
            Some(msg) => html! {
                <div class="field-message" data-field-message={field.name()}>{msg}</div>
            },
            None => html! {},
        }
    };

    html! {
        <>
            <style>
                {r#"
                .booking-form {
                    display: grid;
                    gap: 1.25rem;
                }
                .booking-form .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }
                .booking-form label {
                    display: block;
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 0.9rem;
                    margin-bottom: 0.4rem;
                }
                .booking-form input,
                .booking-form select,
                .booking-form textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid #ffffff;
                    border-radius: 8px;
                    color: #ffffff;
                    font-size: 1rem;
                }
                .booking-form input:focus,
                .booking-form select:focus,
                .booking-form textarea:focus {
                    outline: none;
                }
                .field-message {
                    color: #ef4444;
                    font-size: 0.85rem;
                    margin-top: 0.25rem;
                }
                .privacy-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.6rem;
                }
                .privacy-row input {
                    width: auto;
                    margin-top: 0.25rem;
                }
                .privacy-row label {
                    margin-bottom: 0;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .privacy-row a {
                    color: #7EB2FF;
                }
                .submit-button {
                    padding: 0.9rem 2rem;
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #ffffff;
                    border: none;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .submit-button:hover {
                    transform: translateY(-2px);
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                    transform: none;
                }
                @media (max-width: 768px) {
                    .booking-form .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <form class="booking-form" onsubmit={onsubmit}>
                <div class="form-row">
                    <div>
                        <label for="firstName">{"Vorname*"}</label>
                        <input
                            id="firstName"
                            name="firstName"
                            type="text"
                            placeholder="Max"
                            value={fields.first_name.clone()}
                            style={field_style(Field::FirstName)}
                            oninput={oninput_for(Field::FirstName)}
                            onblur={onblur_for(Field::FirstName)}
                        />
                        {field_message(Field::FirstName)}
                    </div>
                    <div>
                        <label for="lastName">{"Nachname*"}</label>
                        <input
                            id="lastName"
                            name="lastName"
                            type="text"
                            placeholder="Mustermann"
                            value={fields.last_name.clone()}
                            style={field_style(Field::LastName)}
                            oninput={oninput_for(Field::LastName)}
                            onblur={onblur_for(Field::LastName)}
                        />
                        {field_message(Field::LastName)}
                    </div>
                </div>
                <div class="form-row">
                    <div>
                        <label for="email">{"E-Mail-Adresse*"}</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            placeholder="max@musterfirma.de"
                            value={fields.email.clone()}
                            style={field_style(Field::Email)}
                            oninput={oninput_for(Field::Email)}
                            onblur={onblur_for(Field::Email)}
                        />
                        {field_message(Field::Email)}
                    </div>
                    <div>
                        <label for="phone">{"Telefonnummer*"}</label>
                        <input
                            id="phone"
                            name="phone"
                            type="tel"
                            placeholder="+49 170 1234567"
                            value={fields.phone.clone()}
                            style={field_style(Field::Phone)}
                            oninput={oninput_for(Field::Phone)}
                            onblur={onblur_for(Field::Phone)}
                        />
                        {field_message(Field::Phone)}
                    </div>
                </div>
                <div class="form-row">
                    <div>
                        <label for="company">{"Unternehmen*"}</label>
                        <input
                            id="company"
                            name="company"
                            type="text"
                            placeholder="Musterfirma GmbH"
                            value={fields.company.clone()}
                            style={field_style(Field::Company)}
                            oninput={oninput_for(Field::Company)}
                            onblur={onblur_for(Field::Company)}
                        />
                        {field_message(Field::Company)}
                    </div>
                    <div>
                        <label for="website">{"Website"}</label>
                        <input
                            id="website"
                            name="website"
                            type="text"
                            placeholder="https://musterfirma.de"
                            value={fields.website.clone()}
                            style={field_style(Field::Website)}
                            oninput={oninput_for(Field::Website)}
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div>
                        <label for="preferredDate">{"Wunschtermin"}</label>
                        <input
                            id="preferredDate"
                            name="preferredDate"
                            type="datetime-local"
                            min={min_date}
                            value={fields.preferred_date.clone()}
                            style={field_style(Field::PreferredDate)}
                            oninput={oninput_for(Field::PreferredDate)}
                        />
                    </div>
                    <div>
                        <label for="timePreference">{"Bevorzugte Uhrzeit"}</label>
                        <select
                            id="timePreference"
                            name="timePreference"
                            value={fields.time_preference.clone()}
                            onchange={on_select_change(Field::TimePreference)}
                        >
                            <option value="" selected={fields.time_preference.is_empty()}>{"Bitte wählen"}</option>
                            <option value="vormittag" selected={fields.time_preference == "vormittag"}>{"Vormittag"}</option>
                            <option value="nachmittag" selected={fields.time_preference == "nachmittag"}>{"Nachmittag"}</option>
                            <option value="flexibel" selected={fields.time_preference == "flexibel"}>{"Flexibel"}</option>
                        </select>
                    </div>
                </div>
                <div>
                    <label for="leadSource">{"Wie haben Sie von uns erfahren?"}</label>
                    <select
                        id="leadSource"
                        name="leadSource"
                        value={fields.lead_source.clone()}
                        onchange={on_select_change(Field::LeadSource)}
                    >
                        <option value="" selected={fields.lead_source.is_empty()}>{"Bitte wählen"}</option>
                        <option value="google" selected={fields.lead_source == "google"}>{"Google"}</option>
                        <option value="linkedin" selected={fields.lead_source == "linkedin"}>{"LinkedIn"}</option>
                        <option value="empfehlung" selected={fields.lead_source == "empfehlung"}>{"Empfehlung"}</option>
                        <option value="sonstiges" selected={fields.lead_source == "sonstiges"}>{"Sonstiges"}</option>
                    </select>
                </div>
                <div>
                    <label for="message">{"Ihre Nachricht"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        placeholder="Worum geht es in Ihrem Vorhaben?"
                        value={fields.message.clone()}
                        oninput={on_message_input}
                    />
                </div>
                <div class="privacy-row">
                    <input
                        id="privacy"
                        name="privacy"
                        type="checkbox"
                        checked={fields.privacy}
                        style={field_style(Field::Privacy)}
                        onchange={on_privacy_change}
                    />
                    <label for="privacy">
                        {"Ich habe die "}
                        <Link<Route> to={Route::Privacy}>{"Datenschutzerklärung"}</Link<Route>>
                        {" gelesen und bin mit der Verarbeitung meiner Daten einverstanden.*"}
                    </label>
                </div>
                {field_message(Field::Privacy)}
                <button type="submit" class="submit-button" disabled={*submitting}>
                    { if *submitting { SUBMIT_PENDING_LABEL } else { SUBMIT_LABEL } }
                </button>
            </form>
            {
                if let Some(current) = (*notification).clone() {
                    html! { <NotificationToast notification={current} on_dismiss={on_dismiss} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
