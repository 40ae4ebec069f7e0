//! Local-time lookup by destination country
//!
//! Mirrors the original widget behaviour: a fixed country-to-timezone
//! table, the country extracted from a `"City, Country"` name, and the
//! current time rendered in 12-hour format. Any lookup or formatting
//! miss yields `None` so the display simply omits the time.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Map a country name to its display timezone.
#[must_use]
pub fn timezone_for_country(country: &str) -> Option<Tz> {
    match country {
        "Australia" => Some(chrono_tz::Australia::Sydney),
        "Japan" => Some(chrono_tz::Asia::Tokyo),
        "Brazil" => Some(chrono_tz::America::Sao_Paulo),
        "Cambodia" => Some(chrono_tz::Asia::Phnom_Penh),
        "India" => Some(chrono_tz::Asia::Kolkata),
        "Indonesia" => Some(chrono_tz::Asia::Jakarta),
        "French Polynesia" => Some(chrono_tz::Pacific::Tahiti),
        _ => None,
    }
}

/// Extract the country from a `"City, Country"` name: the segment after
/// the first comma, trimmed. Names without a comma have no country.
#[must_use]
pub fn country_from_name(name: &str) -> Option<&str> {
    name.split(',')
        .nth(1)
        .map(str::trim)
        .filter(|country| !country.is_empty())
}

/// Current local time for a destination name, or `None` when the
/// country is unknown or the name carries no country.
#[must_use]
pub fn local_time_for(name: &str) -> Option<String> {
    local_time_at(Utc::now(), name)
}

/// Local time at a given instant, 12-hour clock with AM/PM.
#[must_use]
pub fn local_time_at(instant: DateTime<Utc>, name: &str) -> Option<String> {
    let country = country_from_name(name)?;
    let tz = timezone_for_country(country)?;
    Some(
        instant
            .with_timezone(&tz)
            .format("%-I:%M:%S %p")
            .to_string(),
    )
}
