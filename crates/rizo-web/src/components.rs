//! UI Components

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use rizo_core::{BillingPeriod, FormField, LeadForm, TIME_ZONES};

/// Labelled text input bound to one form field
#[component]
pub fn FieldInput(
    form: RwSignal<LeadForm>,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.values().get(field).to_string());
    let has_error = move || form.with(|f| f.error(field).is_some());
    let error_text = move || form.with(|f| f.error(field).map(str::to_string));
    let (marker_class, marker) = if required {
        ("required", " *")
    } else {
        ("optional", " (optional)")
    };

    view! {
        <div class="field">
            <label for=field.as_str() class="field-label">
                {label}
                <span class=marker_class>{marker}</span>
            </label>
            <input
                id=field.as_str()
                type=input_type
                placeholder=placeholder
                prop:value=value
                class="field-input"
                class:invalid=has_error
                on:input=move |ev| {
                    form.update(|f| f.set_field(field, event_target_value(&ev)));
                }
            />
            {move || error_text().map(|msg| view! { <p class="field-message">{msg}</p> })}
        </div>
    }
}

/// Closed-choice select over the six supported time zones
#[component]
pub fn TimeZoneSelect(form: RwSignal<LeadForm>) -> impl IntoView {
    let value = move || form.with(|f| f.values().time_zone.clone());
    let has_error = move || form.with(|f| f.error(FormField::TimeZone).is_some());

    view! {
        <div class="field">
            <label for=FormField::TimeZone.as_str() class="field-label">
                "Time Zone" <span class="required">" *"</span>
            </label>
            <select
                id=FormField::TimeZone.as_str()
                prop:value=value
                class="field-input"
                class:invalid=has_error
                on:change=move |ev| {
                    form.update(|f| f.set_field(FormField::TimeZone, event_target_value(&ev)));
                }
            >
                <option value="">"Select your time zone"</option>
                {TIME_ZONES
                    .iter()
                    .map(|tz| view! { <option value=tz.value>{tz.label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Monthly/annual switch controlling price display and payment link
#[component]
pub fn BillingToggle(period: RwSignal<BillingPeriod>) -> impl IntoView {
    view! {
        <div class="billing-toggle">
            <button
                class="toggle"
                class:active=move || period.get() == BillingPeriod::Monthly
                on:click=move |_| period.set(BillingPeriod::Monthly)
            >
                {BillingPeriod::Monthly.price_label()}
            </button>
            <button
                class="toggle"
                class:active=move || period.get() == BillingPeriod::Annual
                on:click=move |_| period.set(BillingPeriod::Annual)
            >
                {BillingPeriod::Annual.price_label()}
                <span class="badge">"Save 10%"</span>
            </button>
        </div>
    }
}

/// One step in the automation workflow strip
#[component]
pub fn WorkflowStep(label: &'static str) -> impl IntoView {
    view! {
        <div class="workflow-step">
            <span class="workflow-label">{label}</span>
        </div>
    }
}

/// Static site footer
#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="footer">
            <p class="footer-brand">"RIZO"</p>
            <p class="footer-copyright">{format!("© {year} RIZO. All rights reserved.")}</p>
            <p class="footer-note">
                "RIZO is a managed automation service. Platform access is provided as part of \
                 service delivery. SMS and API fees may apply when messaging or AI agents are used."
            </p>
        </footer>
    }
}
