//! Elapsed-time normalisation.
//!
//! GNU `time` prints wall-clock time as `M:SS.ss` below one hour and
//! `H:MM:SS` above it. [`normalize`] folds every accepted shape
//! (`MM:SS`, `MM:SS.fff`, `H:MM:SS`, `H:MM:SS.fff`) into seconds.
//!
//! The caller guarantees at least one colon. Input without one does not reach
//! the three-field shape and is reported as [`MalformedDuration`].

/// The elapsed string did not normalise to `H:MM:SS.fff`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed duration {0:?}")]
pub struct MalformedDuration(pub String);

const MAX_MINUTES: u64 = 59;
// 60 and 61 are accepted as leap seconds.
const MAX_SECONDS: u64 = 61;

/// Convert an elapsed duration string into total seconds.
///
/// ```
/// use repbench_core::duration::normalize;
///
/// assert_eq!(normalize("1:02:03.50").unwrap(), 3723.5);
/// assert_eq!(normalize("02:03").unwrap(), 123.0);
/// ```
pub fn normalize(text: &str) -> Result<f64, MalformedDuration> {
    let malformed = || MalformedDuration(text.to_owned());

    let mut clock = text.to_owned();
    if !clock.contains('.') {
        clock.push_str(".0");
    }
    if clock.matches(':').count() == 1 {
        clock.insert_str(0, "0:");
    }

    let (hms, fraction) = clock.split_once('.').ok_or_else(malformed)?;
    let mut fields = hms.split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    let hours = whole(hours).ok_or_else(malformed)?;
    let minutes = whole(minutes)
        .filter(|m| *m <= MAX_MINUTES)
        .ok_or_else(malformed)?;
    let seconds = whole(seconds)
        .filter(|s| *s <= MAX_SECONDS)
        .ok_or_else(malformed)?;
    let fraction = fractional(fraction).ok_or_else(malformed)?;

    Ok(seconds as f64 + minutes as f64 * 60.0 + hours as f64 * 3600.0 + fraction)
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

fn whole(field: &str) -> Option<u64> {
    if !is_digits(field) {
        return None;
    }
    field.parse().ok()
}

/// `"50"` → `0.5`.
fn fractional(field: &str) -> Option<f64> {
    if !is_digits(field) {
        return None;
    }
    format!("0.{field}").parse().ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
