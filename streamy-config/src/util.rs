use std::time::Duration;

/// Treat unset and whitespace-only variables the same.
pub fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse a human duration (`"6s"`, `"250ms"`, `"1m 30s"`); bare integers
/// are read as milliseconds.
pub fn parse_duration(raw: &str) -> anyhow::Result<Duration> {
    let trimmed = raw.trim();
    if let Ok(ms) = trimmed.parse::<u64>() {
        return Ok(Duration::from_millis(ms));
    }
    humantime::parse_duration(trimmed)
        .map_err(|err| anyhow::anyhow!("invalid duration {trimmed:?}: {err}"))
}

/// Saturating conversion for config fields stored as milliseconds.
pub fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_accept_human_and_bare_forms() {
        assert_eq!(parse_duration("6s").unwrap(), Duration::from_secs(6));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration(" 400 ").unwrap(), Duration::from_millis(400));
        assert!(parse_duration("soon").is_err());
    }

    #[test]
    fn blank_values_are_unset() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" x ".into())), Some("x".into()));
        assert_eq!(non_blank(None), None);
    }
}
