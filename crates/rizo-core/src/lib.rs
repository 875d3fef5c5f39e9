//! # rizo-core
//!
//! Domain logic for the RIZO lead-capture landing page, kept free of any
//! DOM or framework types so it compiles for both native (tests) and WASM.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       LeadForm                           │
//! │  ┌────────────┐  ┌─────────────┐  ┌───────────────────┐  │
//! │  │ FormValues │──│  Validator  │──│ SubmissionPayload │  │
//! │  │ + ErrorMap │  │ (is_valid)  │  │  (urlencoded)     │  │
//! │  └────────────┘  └─────────────┘  └───────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The frontend owns a single [`LeadForm`] and recomputes validity from a
//! snapshot on every read; nothing here is cached or memoized.

pub mod billing;
pub mod error;
pub mod form;
pub mod payload;
pub mod timezone;
pub mod validate;

pub use billing::BillingPeriod;
pub use error::{LeadError, Result};
pub use form::{ConfirmOutcome, FormField, FormValues, LeadForm};
pub use payload::{SubmissionPayload, WEBHOOK_URL};
pub use timezone::{TimeZoneOption, TIME_ZONES};
pub use validate::is_valid;
