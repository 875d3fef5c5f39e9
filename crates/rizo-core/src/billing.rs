//! Billing Period
//!
//! The two-valued plan choice driving the displayed price and the payment
//! link followed on a successful confirm.

use serde::{Deserialize, Serialize};

/// Stripe payment link for the monthly plan
const MONTHLY_PAYMENT_URL: &str = "https://buy.stripe.com/4gM14o8QlcSM4fR7vofIs02";

/// Stripe payment link for the annual plan
const ANNUAL_PAYMENT_URL: &str = "https://buy.stripe.com/dRmeVefeJ4mgfYzaHAfIs03";

/// Billing period selected by the pricing toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    /// $79/month, the initial selection
    #[default]
    Monthly,
    /// $853/year (10% off the monthly rate)
    Annual,
}

impl BillingPeriod {
    /// Wire tag used verbatim in the outbound payload
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }

    /// Toggle label shown in the pricing switch
    pub const fn price_label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly - $79/month",
            Self::Annual => "Annual - $853/year",
        }
    }

    /// External checkout page followed when validation passes
    pub const fn payment_url(self) -> &'static str {
        match self {
            Self::Monthly => MONTHLY_PAYMENT_URL,
            Self::Annual => ANNUAL_PAYMENT_URL,
        }
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_monthly() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
    }

    #[test]
    fn test_wire_tags() {
        assert_eq!(BillingPeriod::Monthly.as_str(), "monthly");
        assert_eq!(BillingPeriod::Annual.as_str(), "annual");
    }

    #[test]
    fn test_payment_urls_differ_by_period() {
        assert_ne!(
            BillingPeriod::Monthly.payment_url(),
            BillingPeriod::Annual.payment_url()
        );
        assert!(BillingPeriod::Monthly.payment_url().starts_with("https://buy.stripe.com/"));
        assert!(BillingPeriod::Annual.payment_url().starts_with("https://buy.stripe.com/"));
    }
}
