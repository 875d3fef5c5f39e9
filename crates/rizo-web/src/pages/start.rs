//! Start Page
//!
//! The single landing page: hero, lead form with billing toggle, feature
//! list, workflow strip, footer. The form owns one [`LeadForm`] signal and
//! derives validity from it on every read.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use rizo_core::{is_valid, BillingPeriod, ConfirmOutcome, FormField, LeadForm};

use crate::components::{BillingToggle, FieldInput, Footer, TimeZoneSelect, WorkflowStep};
use crate::submit::submit_lead;

const FEATURES: [&str; 7] = [
    "Built for coaches managing 5+ clients who need systems that actually work",
    "Full access to GoHighLevel platform - the #1 automation tool for coaches",
    "One custom workflow built specifically for your coaching business",
    "CRM, Email, SMS, Bookings, and Follow-ups in one central system",
    "Setup completed within 24 hours",
    "Ongoing support and guidance as you scale",
    "Video tutorials to help you customize and expand your workflows",
];

const WORKFLOW_STEPS: [&str; 5] = [
    "Lead Capture",
    "GoHighLevel CRM",
    "Automated Follow-ups",
    "Bookings",
    "Long-term Nurture",
];

#[component]
pub fn StartPage() -> impl IntoView {
    let form = RwSignal::new(LeadForm::new());
    let period = RwSignal::new(BillingPeriod::default());

    let form_valid = move || form.with(|f| is_valid(f.values()));

    // Gate runs on the click itself: suppress navigation while invalid,
    // otherwise fire the one-shot submit and let the browser follow the
    // payment link.
    let on_confirm = move |ev: MouseEvent| {
        let outcome = form.with_untracked(|f| f.confirm(period.get_untracked()));
        match outcome {
            ConfirmOutcome::Proceed { .. } => {
                form.with_untracked(|f| submit_lead(f.values(), period.get_untracked()));
            }
            ConfirmOutcome::Blocked => ev.prevent_default(),
        }
    };

    view! {
        <div class="start-page">
            <header class="hero">
                <h1>"Get Your Time Back - Setup in 24 Hours"</h1>
                <p class="hero-subtitle">
                    "Stop manually scheduling calls, sending follow-ups, and tracking leads. \
                     We'll automate the busywork so you can focus on coaching."
                </p>
            </header>

            <section class="form-card">
                <BillingToggle period=period />

                <h2>"Your Business Information"</h2>
                <p class="form-intro">
                    "We need these details to create your GoHighLevel account and customize \
                     your automation workflows"
                </p>

                <div class="form-fields">
                    <div class="field-row">
                        <FieldInput
                            form=form
                            field=FormField::FirstName
                            label="First Name"
                            placeholder="First"
                            required=true
                        />
                        <FieldInput
                            form=form
                            field=FormField::LastName
                            label="Last Name"
                            placeholder="Last"
                            required=true
                        />
                    </div>
                    <FieldInput
                        form=form
                        field=FormField::Email
                        label="Email"
                        placeholder="you@example.com"
                        input_type="email"
                        required=true
                    />
                    <FieldInput
                        form=form
                        field=FormField::Phone
                        label="Phone"
                        placeholder="(555) 123-4567"
                        input_type="tel"
                        required=true
                    />
                    <FieldInput
                        form=form
                        field=FormField::BusinessNiche
                        label="Business Niche"
                        placeholder="e.g., Life Coaching, Business Consulting, Fitness Coaching"
                        required=true
                    />
                    <FieldInput
                        form=form
                        field=FormField::BusinessName
                        label="Business Name"
                        placeholder="Your Business LLC"
                    />
                    <FieldInput
                        form=form
                        field=FormField::Website
                        label="Website"
                        placeholder="https://yourwebsite.com"
                        input_type="url"
                    />
                    <TimeZoneSelect form=form />
                </div>

                <div class="purchase">
                    <p class="purchase-note">
                        "After completing your purchase, you'll be redirected to book your \
                         onboarding call"
                    </p>
                    <a
                        href=move || period.get().payment_url()
                        class="btn-purchase"
                        class:disabled=move || !form_valid()
                        on:click=on_confirm
                    >
                        "Complete Purchase"
                    </a>
                    <p class="form-hint" class:invisible=form_valid>
                        "Please fill out all required fields to continue"
                    </p>
                </div>
            </section>

            <section class="features-card">
                <h2>"Everything You Need to Scale Without the Overwhelm:"</h2>
                <ul class="features">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <li class="feature">{*feature}</li> })
                        .collect_view()}
                </ul>
            </section>

            <section class="workflow-card">
                <h2>"Your Automation Workflow"</h2>
                <p class="workflow-intro">
                    "Handles the repetitive work so you can focus on what you do best"
                </p>
                <div class="workflow">
                    {WORKFLOW_STEPS
                        .iter()
                        .map(|step| view! { <WorkflowStep label=*step /> })
                        .collect_view()}
                </div>
            </section>

            <Footer />
        </div>
    }
}
