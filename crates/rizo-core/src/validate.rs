//! Form Validation
//!
//! A pure boolean gate over a [`FormValues`] snapshot. Recomputed on every
//! read; there is deliberately no cached validity field to go stale.

use crate::form::FormValues;

/// Whether all six required fields satisfy their constraints.
///
/// `business_name` and `website` are optional and never affect the result.
pub fn is_valid(values: &FormValues) -> bool {
    let has_first_name = !values.first_name.trim().is_empty();
    let has_last_name = !values.last_name.trim().is_empty();
    let has_valid_email = email_shape_ok(&values.email);
    let has_phone = !values.phone.trim().is_empty();
    let has_business_niche = !values.business_niche.trim().is_empty();
    let has_time_zone = !values.time_zone.is_empty();

    has_first_name
        && has_last_name
        && has_valid_email
        && has_phone
        && has_business_niche
        && has_time_zone
}

/// Minimal `local@domain.tld` shape check, equivalent to the pattern
/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// Intentionally permissive: it accepts addresses like `a@b..c` and rejects
/// anything without a dot in the domain. Do not tighten it; the webhook
/// receiver does its own verification.
pub fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on each side of it.
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}
