use serde_json::{Map, Value};

/// Parse a request body based on Content-Type header.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let ct = content_type
        .unwrap_or("application/json")
        .to_ascii_lowercase();

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        // Try JSON first, then form-urlencoded
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| format!("Unable to parse body: {e}"))
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    // Later duplicates win, as browsers send the last checked value last.
    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_body() {
        let value = parse_body(Some("application/json; charset=utf-8"), br#"{"fullName":"Ana"}"#).unwrap();
        assert_eq!(value, json!({ "fullName": "Ana" }));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = parse_body(Some("application/json"), b"{oops").unwrap_err();
        assert!(err.starts_with("Invalid JSON"));
    }

    #[test]
    fn form_body() {
        let value = parse_body(
            Some("application/x-www-form-urlencoded"),
            b"fullName=Ana+Ruiz&phone=612%20345%20678&privacyAccepted=on",
        )
        .unwrap();
        assert_eq!(value["fullName"], "Ana Ruiz");
        assert_eq!(value["phone"], "612 345 678");
        assert_eq!(value["privacyAccepted"], "on");
    }

    #[test]
    fn content_type_is_case_insensitive() {
        let err = parse_body(Some("Application/JSON"), b"fullName=Ana").unwrap_err();
        assert!(err.starts_with("Invalid JSON"));

        let value = parse_body(Some("Application/X-WWW-Form-Urlencoded"), b"fullName=Ana").unwrap();
        assert_eq!(value["fullName"], "Ana");
    }

    #[test]
    fn missing_content_type_defaults_to_json() {
        let value = parse_body(None, br#"{"phone":"612345678"}"#).unwrap();
        assert_eq!(value["phone"], "612345678");
    }

    #[test]
    fn unknown_content_type_falls_back_to_form() {
        let value = parse_body(Some("text/plain"), b"fullName=Ana").unwrap();
        assert_eq!(value["fullName"], "Ana");
    }
}
