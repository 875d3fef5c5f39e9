//! Time Zone Choices
//!
//! The closed set of IANA identifiers offered by the time-zone select. The
//! stored form value is the identifier string, used verbatim in the payload;
//! validation only checks that something was chosen.

/// One entry in the time-zone select
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeZoneOption {
    /// IANA identifier stored as the form value
    pub value: &'static str,
    /// Human-readable label shown to the user
    pub label: &'static str,
}

/// The six US time zones offered, in display order
pub const TIME_ZONES: [TimeZoneOption; 6] = [
    TimeZoneOption { value: "America/New_York", label: "Eastern Time (ET)" },
    TimeZoneOption { value: "America/Chicago", label: "Central Time (CT)" },
    TimeZoneOption { value: "America/Denver", label: "Mountain Time (MT)" },
    TimeZoneOption { value: "America/Los_Angeles", label: "Pacific Time (PT)" },
    TimeZoneOption { value: "America/Anchorage", label: "Alaska Time (AK)" },
    TimeZoneOption { value: "Pacific/Honolulu", label: "Hawaii Time (HI)" },
];
