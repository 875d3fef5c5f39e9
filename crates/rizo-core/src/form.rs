//! Form State
//!
//! Single source of truth for what the user has typed: the eight field
//! values plus a per-field error map. Mutation goes through
//! [`LeadForm::set_field`], which is a pure assignment step; validation
//! happens outside, on read.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::billing::BillingPeriod;
use crate::validate::is_valid;

/// Field names of the lead form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    BusinessNiche,
    BusinessName,
    Website,
    TimeZone,
}

impl FormField {
    /// Wire name, matching the payload key for this field
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::BusinessNiche => "businessNiche",
            Self::BusinessName => "businessName",
            Self::Website => "website",
            Self::TimeZone => "timeZone",
        }
    }
}

/// Current values of all form inputs.
///
/// An absent value is always the empty string, never an `Option`, so
/// comparisons stay uniform across required and optional fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub business_niche: String,
    pub business_name: String,
    pub website: String,
    pub time_zone: String,
}

impl FormValues {
    /// Current value of one field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::BusinessNiche => &self.business_niche,
            FormField::BusinessName => &self.business_name,
            FormField::Website => &self.website,
            FormField::TimeZone => &self.time_zone,
        }
    }
}

/// Per-field error messages, keyed by field
pub type ErrorMap = HashMap<FormField, String>;

/// Outcome of activating the confirm control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Validation passed: fire the submitter, then follow this URL
    Proceed { payment_url: &'static str },
    /// Validation failed: suppress navigation, keep editing
    Blocked,
}

/// The lead form: values plus the error map, created empty at page load
/// and discarded when navigation tears the page down.
#[derive(Clone, Debug, Default)]
pub struct LeadForm {
    values: FormValues,
    errors: ErrorMap,
}

impl LeadForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current field values
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Error message for a field, if one is set
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Replace exactly one field's value, clearing any error recorded for
    /// that field. No validation happens here.
    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FirstName => &mut self.values.first_name,
            FormField::LastName => &mut self.values.last_name,
            FormField::Email => &mut self.values.email,
            FormField::Phone => &mut self.values.phone,
            FormField::BusinessNiche => &mut self.values.business_niche,
            FormField::BusinessName => &mut self.values.business_name,
            FormField::Website => &mut self.values.website,
            FormField::TimeZone => &mut self.values.time_zone,
        };
        *slot = value;
        self.errors.remove(&field);
    }

    /// Record a field-level error message.
    ///
    /// The confirm flow only ever clears entries (via [`Self::set_field`]);
    /// nothing populates this automatically today.
    pub fn set_error(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Decide what a confirm click does under the current values.
    ///
    /// This is the only gate in front of submission and navigation; callers
    /// must not fire the submitter on [`ConfirmOutcome::Blocked`].
    pub fn confirm(&self, period: BillingPeriod) -> ConfirmOutcome {
        if is_valid(&self.values) {
            ConfirmOutcome::Proceed { payment_url: period.payment_url() }
        } else {
            ConfirmOutcome::Blocked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> LeadForm {
        let mut form = LeadForm::new();
        form.set_field(FormField::FirstName, "Ana".into());
        form.set_field(FormField::LastName, "Lee".into());
        form.set_field(FormField::Email, "ana@lee.com".into());
        form.set_field(FormField::Phone, "5551234567".into());
        form.set_field(FormField::BusinessNiche, "Life Coaching".into());
        form.set_field(FormField::TimeZone, "America/Chicago".into());
        form
    }

    #[test]
    fn test_set_field_touches_only_that_field() {
        let mut form = valid_form();
        let before = form.values().clone();

        form.set_field(FormField::Email, "new@addr.io".into());

        let after = form.values();
        assert_eq!(after.email, "new@addr.io");
        assert_eq!(after.first_name, before.first_name);
        assert_eq!(after.last_name, before.last_name);
        assert_eq!(after.phone, before.phone);
        assert_eq!(after.business_niche, before.business_niche);
        assert_eq!(after.business_name, before.business_name);
        assert_eq!(after.website, before.website);
        assert_eq!(after.time_zone, before.time_zone);
    }

    #[test]
    fn test_set_field_clears_only_that_fields_error() {
        let mut form = LeadForm::new();
        form.set_error(FormField::Email, "Invalid email");
        form.set_error(FormField::Phone, "Required");

        form.set_field(FormField::Email, "a@b.co".into());

        assert_eq!(form.error(FormField::Email), None);
        assert_eq!(form.error(FormField::Phone), Some("Required"));
    }

    #[test]
    fn test_get_round_trips_set_field() {
        let mut form = LeadForm::new();
        for field in [
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
            FormField::Phone,
            FormField::BusinessNiche,
            FormField::BusinessName,
            FormField::Website,
            FormField::TimeZone,
        ] {
            form.set_field(field, format!("value for {}", field.as_str()));
            assert_eq!(
                form.values().get(field),
                format!("value for {}", field.as_str())
            );
        }
    }

    #[test]
    fn test_confirm_blocked_while_invalid() {
        let form = LeadForm::new();
        assert_eq!(form.confirm(BillingPeriod::Monthly), ConfirmOutcome::Blocked);
        assert_eq!(form.confirm(BillingPeriod::Annual), ConfirmOutcome::Blocked);
    }

    #[test]
    fn test_confirm_proceeds_to_selected_plan_url() {
        let form = valid_form();

        let monthly = form.confirm(BillingPeriod::Monthly);
        assert_eq!(
            monthly,
            ConfirmOutcome::Proceed { payment_url: BillingPeriod::Monthly.payment_url() }
        );

        let annual = form.confirm(BillingPeriod::Annual);
        assert_eq!(
            annual,
            ConfirmOutcome::Proceed { payment_url: BillingPeriod::Annual.payment_url() }
        );
    }

    #[test]
    fn test_confirm_blocked_after_email_loses_domain_dot() {
        let mut form = valid_form();
        form.set_field(FormField::Email, "ana@lee".into());
        assert_eq!(form.confirm(BillingPeriod::Monthly), ConfirmOutcome::Blocked);
    }
}
