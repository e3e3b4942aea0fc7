//! Hand-off from a chosen date to the external scheduling page.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use url::Url;

/// The scheduling link for `date`, with `month` and `date` query parameters
/// so the page opens on the right day.
pub fn booking_link(base: &str, date: NaiveDate) -> Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("Invalid booking_url '{}'", base))?;

    url.query_pairs_mut()
        .append_pair("month", &date.format("%Y-%m").to_string())
        .append_pair("date", &date.format("%Y-%m-%d").to_string());

    Ok(url)
}

/// Build the link and optionally open it in the default browser.
///
/// Returns `None` when no booking page is configured.
pub fn hand_off(base: Option<&str>, date: NaiveDate, open_browser: bool) -> Result<Option<Url>> {
    let Some(base) = base else {
        tracing::warn!(%date, "no booking_url configured");
        return Ok(None);
    };

    let url = booking_link(base, date)?;

    if open_browser {
        tracing::info!(%url, "opening booking page");
        open::that(url.as_str()).with_context(|| format!("Could not open browser for {}", url))?;
    }

    Ok(Some(url))
}
