//! Submission Payload
//!
//! The URL-encoded body posted to the lead webhook: all eight form values
//! (empty strings for unset optionals) plus the billing period tag.

use serde::Serialize;

use crate::billing::BillingPeriod;
use crate::error::Result;
use crate::form::FormValues;

/// Fixed lead-capture webhook endpoint. No authentication; the response is
/// never inspected.
pub const WEBHOOK_URL: &str = "https://services.leadconnectorhq.com/hooks/saiPIHsElD7qIIVgrvxR/webhook-trigger/3097fba7-b6ae-4a91-bb56-63f97ce78b91";

/// Borrowed view of one submission, in wire key order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: &'a str,
    business_niche: &'a str,
    business_name: &'a str,
    website: &'a str,
    time_zone: &'a str,
    billing_period: &'static str,
}

impl<'a> SubmissionPayload<'a> {
    /// Capture the current values and billing period
    pub fn new(values: &'a FormValues, period: BillingPeriod) -> Self {
        Self {
            first_name: &values.first_name,
            last_name: &values.last_name,
            email: &values.email,
            phone: &values.phone,
            business_niche: &values.business_niche,
            business_name: &values.business_name,
            website: &values.website,
            time_zone: &values.time_zone,
            billing_period: period.as_str(),
        }
    }

    /// Serialize to an `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormValues {
        FormValues {
            first_name: "Ana".into(),
            last_name: "Lee".into(),
            email: "ana@lee.com".into(),
            phone: "5551234567".into(),
            business_niche: "Life Coaching".into(),
            business_name: String::new(),
            website: String::new(),
            time_zone: "America/Chicago".into(),
        }
    }

    #[test]
    fn test_encodes_exactly_nine_keys() {
        let values = filled();
        let body = SubmissionPayload::new(&values, BillingPeriod::Annual)
            .encode()
            .unwrap();

        let keys: Vec<&str> = body
            .split('&')
            .map(|pair| pair.split('=').next().unwrap())
            .collect();
        assert_eq!(
            keys,
            [
                "firstName",
                "lastName",
                "email",
                "phone",
                "businessNiche",
                "businessName",
                "website",
                "timeZone",
                "billingPeriod",
            ]
        );
        assert!(body.ends_with("billingPeriod=annual"));
    }

    #[test]
    fn test_optionals_present_as_empty_strings() {
        let values = filled();
        let body = SubmissionPayload::new(&values, BillingPeriod::Monthly)
            .encode()
            .unwrap();

        assert!(body.contains("businessName=&"));
        assert!(body.contains("website=&"));
        assert!(body.ends_with("billingPeriod=monthly"));
    }

    #[test]
    fn test_values_are_form_urlencoded() {
        let mut values = filled();
        values.business_niche = "Life Coaching".into();
        values.website = "https://ana.example/?ref=ad".into();
        let body = SubmissionPayload::new(&values, BillingPeriod::Monthly)
            .encode()
            .unwrap();

        assert!(body.contains("businessNiche=Life+Coaching"));
        assert!(body.contains("website=https%3A%2F%2Fana.example%2F%3Fref%3Dad"));
        assert!(body.contains("email=ana%40lee.com"));
        assert!(body.contains("timeZone=America%2FChicago"));
    }
}
