//! Field checks applied to restaurant payloads before create and replace
//! operations. Partial updates bypass this module entirely.

use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::models::NewRestaurant;

/// Upper bound on the stored name, measured after escaping.
pub const NAME_MAX_LEN: usize = 50;

/// Schemes an image URL may carry.
const IMAGE_URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Body accepted by create and replace endpoints. Both fields must survive
/// validation for the write to proceed.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RestaurantPayload {
    pub name: Option<String>,
    pub image: Option<String>,
}

/// One violated rule, reported with the value as it was checked.
#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>, value: Option<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
            value,
        }
    }
}

/// Runs the restaurant rule set and returns the sanitized record on success.
///
/// Rules run in a fixed order and every violation is collected, never just
/// the first:
/// 1. `name` must be non-empty once surrounding whitespace is trimmed; the
///    kept value has HTML-unsafe characters escaped.
/// 2. `image` must parse as an absolute URL carrying an http, https, or
///    ftp scheme; it is stored verbatim.
/// 3. the escaped `name` must not exceed [`NAME_MAX_LEN`] characters, so a
///    name can pass rule 1 and still fail here once escaping inflates it.
pub fn validate_restaurant(payload: &RestaurantPayload) -> Result<NewRestaurant, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = match payload.name.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push(FieldError::new(
                "name",
                "name must not be empty",
                payload.name.clone(),
            ));
            None
        }
        Some(trimmed) => Some(escape_html(trimmed)),
    };

    let image = match payload.image.as_deref() {
        Some(raw) if is_valid_image_url(raw) => Some(raw.to_string()),
        other => {
            errors.push(FieldError::new(
                "image",
                "image must be a valid URL",
                other.map(str::to_string),
            ));
            None
        }
    };

    if let Some(escaped) = &name {
        if escaped.chars().count() > NAME_MAX_LEN {
            errors.push(FieldError::new(
                "name",
                format!("name must be at most {NAME_MAX_LEN} characters"),
                Some(escaped.clone()),
            ));
        }
    }

    match (name, image) {
        (Some(name), Some(image)) if errors.is_empty() => Ok(NewRestaurant { name, image }),
        _ => Err(errors),
    }
}

fn is_valid_image_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| IMAGE_URL_SCHEMES.contains(&url.scheme()))
}

/// Replaces the characters that break out of HTML text content with their
/// entity forms. The stored name may therefore differ from the raw input.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, image: Option<&str>) -> RestaurantPayload {
        RestaurantPayload {
            name: name.map(str::to_string),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn valid_payload_is_trimmed_and_escaped() {
        let record = validate_restaurant(&payload(
            Some("  Cafe <script>  "),
            Some("http://x.test/i.png"),
        ))
        .unwrap();
        assert_eq!(record.name, "Cafe &lt;script&gt;");
        assert_eq!(record.image, "http://x.test/i.png");
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let errors = validate_restaurant(&payload(Some("   "), Some("http://x.test/i.png")))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].value.as_deref(), Some("   "));
    }

    #[test]
    fn missing_fields_collect_every_violation_in_rule_order() {
        let errors = validate_restaurant(&payload(None, None)).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "image"]);
        assert!(errors.iter().all(|e| e.value.is_none()));
    }

    #[test]
    fn relative_or_garbled_image_is_rejected() {
        for bad in ["not-a-url", "/img.png", "http//missing.colon"] {
            let errors = validate_restaurant(&payload(Some("Fine"), Some(bad))).unwrap_err();
            assert_eq!(errors.len(), 1, "{bad} should fail");
            assert_eq!(errors[0].field, "image");
            assert_eq!(errors[0].value.as_deref(), Some(bad));
        }
    }

    #[test]
    fn image_schemes_outside_the_allowlist_are_rejected() {
        for bad in ["javascript:alert(1)", "data:image/png;base64,AAAA"] {
            let errors = validate_restaurant(&payload(Some("Fine"), Some(bad))).unwrap_err();
            assert_eq!(errors.len(), 1, "{bad} should fail");
            assert_eq!(errors[0].field, "image");
        }

        let ok = validate_restaurant(&payload(Some("Fine"), Some("ftp://files.test/menu.png")));
        assert!(ok.is_ok());
    }

    #[test]
    fn name_length_is_measured_after_escaping() {
        // 13 raw characters, 52 once each becomes a four-character entity.
        let inflated = "<".repeat(13);
        let errors =
            validate_restaurant(&payload(Some(&inflated), Some("http://x.test/i.png")))
                .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert!(errors[0].message.contains("50"));

        let plain = "a".repeat(51);
        let errors = validate_restaurant(&payload(Some(&plain), Some("http://x.test/i.png")))
            .unwrap_err();
        assert_eq!(errors[0].field, "name");

        let at_limit = "a".repeat(50);
        let ok = validate_restaurant(&payload(Some(&at_limit), Some("http://x.test/i.png")));
        assert!(ok.is_ok());
    }

    #[test]
    fn bad_name_and_bad_image_are_both_reported() {
        let errors = validate_restaurant(&payload(Some(""), Some("nope"))).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[1].field, "image");
    }

    #[test]
    fn escape_html_covers_the_full_character_set() {
        assert_eq!(
            escape_html(r#"&"'<>/\`"#),
            "&amp;&quot;&#x27;&lt;&gt;&#x2F;&#x5C;&#96;"
        );
        assert_eq!(escape_html("plain name"), "plain name");
    }

    #[test]
    fn field_errors_serialize_without_null_values() {
        let with_value = serde_json::to_value(FieldError::new(
            "image",
            "image must be a valid URL",
            Some("nope".to_string()),
        ))
        .unwrap();
        assert_eq!(with_value["value"], "nope");

        let without = serde_json::to_value(FieldError::new("name", "name must not be empty", None))
            .unwrap();
        assert!(without.get("value").is_none());
    }
}
