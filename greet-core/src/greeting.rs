//! Greeting composition: visitor-name normalization and the response text.

/// Resolve the display name for the greeting.
///
/// A non-empty visitor name is URL-decoded (decode failures fall back to
/// the raw value) and stripped of exactly one matching pair of surrounding
/// double quotes; otherwise the configured default name is used.
pub fn effective_name(visitor_name: Option<&str>, default_name: &str) -> String {
    match visitor_name {
        Some(raw) if !raw.is_empty() => {
            let decoded = urlencoding::decode(raw)
                .map(|name| name.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            strip_quote_pair(&decoded).to_string()
        }
        _ => default_name.to_string(),
    }
}

/// Strip one pair of literal `"` characters wrapping the whole value.
/// A lone leading or trailing quote is kept as-is.
fn strip_quote_pair(name: &str) -> &str {
    name.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(name)
}

/// Format the greeting returned to the caller. The temperature is always
/// rendered with one decimal digit.
pub fn compose_greeting(name: &str, temperature_c: f64, city: &str) -> String {
    format!("Hello, {name}! The temperature is {temperature_c:.1} degrees Celsius in {city}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_name_loses_one_pair_of_quotes() {
        assert_eq!(effective_name(Some("\"Ada\""), "fallback"), "Ada");
        assert_eq!(effective_name(Some("\"\"Ada\"\""), "fallback"), "\"Ada\"");
    }

    #[test]
    fn lone_edge_quote_is_kept() {
        assert_eq!(effective_name(Some("\"Ada"), "fallback"), "\"Ada");
        assert_eq!(effective_name(Some("Ada\""), "fallback"), "Ada\"");
        assert_eq!(effective_name(Some("\""), "fallback"), "\"");
    }

    #[test]
    fn url_encoded_name_is_decoded_before_stripping() {
        assert_eq!(effective_name(Some("%22Ada%22"), "fallback"), "Ada");
        assert_eq!(effective_name(Some("Grace%20Hopper"), "fallback"), "Grace Hopper");
    }

    #[test]
    fn empty_or_absent_name_falls_back_to_default() {
        assert_eq!(effective_name(None, "six-shot"), "six-shot");
        assert_eq!(effective_name(Some(""), "six-shot"), "six-shot");
    }

    #[test]
    fn plain_name_passes_through() {
        assert_eq!(effective_name(Some("Ada"), "fallback"), "Ada");
    }

    #[test]
    fn greeting_matches_template_with_one_decimal() {
        assert_eq!(
            compose_greeting("Ada", 18.04, "Paris"),
            "Hello, Ada! The temperature is 18.0 degrees Celsius in Paris"
        );
        assert_eq!(
            compose_greeting("Ada", -3.25, "Oslo"),
            "Hello, Ada! The temperature is -3.2 degrees Celsius in Oslo"
        );
        assert_eq!(
            compose_greeting("Ada", 20.0, "Lima"),
            "Hello, Ada! The temperature is 20.0 degrees Celsius in Lima"
        );
    }
}
