//! Interpretation of the string values renderers report
//!
//! Action responses and event notifications carry every value as a string.
//! Both paths go through the same parsers so a value means the same thing
//! regardless of how it arrived.

use crate::error::{BindingError, Result};

/// Highest volume the presentation accepts
pub const MAX_VOLUME: u8 = 100;

/// Parse a mute flag
///
/// UPnP booleans are integer strings where any non-zero value is true.
/// `true`/`false` and `yes`/`no` are accepted as well, case-insensitively.
pub fn parse_mute(field: &'static str, raw: &str) -> Result<bool> {
    let value = raw.trim();
    if ["true", "yes"].iter().any(|t| value.eq_ignore_ascii_case(t)) {
        return Ok(true);
    }
    if ["false", "no"].iter().any(|f| value.eq_ignore_ascii_case(f)) {
        return Ok(false);
    }
    value
        .parse::<i64>()
        .map(|n| n != 0)
        .map_err(|_| BindingError::parse(field, raw))
}

/// Parse a volume level, clamping to `0..=MAX_VOLUME`
pub fn parse_volume(field: &'static str, raw: &str) -> Result<u8> {
    let value = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| BindingError::parse(field, raw))?;
    Ok(value.min(u32::from(MAX_VOLUME)) as u8)
}

/// Encode a mute flag the way UPnP expects it in action arguments
pub fn encode_mute(muted: bool) -> &'static str {
    if muted {
        "1"
    } else {
        "0"
    }
}
