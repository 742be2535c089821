use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, warn, error};
use crate::models::Coordinate;
use crate::storage::debug::write_debug_payload;

/// Section id the provider sends instead of a listing when it does not deliver to a point.
pub const UNSERVICEABLE_CARD_ID: &str = "swiggy_not_present";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCheck {
    Valid,
    /// Well-formed, but the provider does not operate at the coordinate.
    Unserviceable,
    Malformed(&'static str),
}

impl ResponseCheck {
    /// True when the document has the expected top-level shape.
    pub fn is_valid(&self) -> bool {
        !matches!(self, ResponseCheck::Malformed(_))
    }

    pub fn is_unserviceable(&self) -> bool {
        matches!(self, ResponseCheck::Unserviceable)
    }
}

/// Section list of a listing or menu document: an object whose `data` object holds a
/// `cards` array.
pub fn sections(doc: &Value) -> Result<&[Value], &'static str> {
    let root = doc.as_object().ok_or("response is not a JSON object")?;
    let data = root
        .get("data")
        .and_then(Value::as_object)
        .ok_or("missing or invalid 'data'")?;
    data.get("cards")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or("missing or invalid 'cards'")
}

/// `card.card` body of a section, where the provider puts the section id and payload.
pub fn section_body(section: &Value) -> Option<&Value> {
    section.pointer("/card/card")
}

pub fn section_id(section: &Value) -> Option<&str> {
    section_body(section)?.get("id")?.as_str()
}

#[derive(Debug, Clone, Default)]
pub struct ResponseValidator {
    debug_payload: Option<PathBuf>,
}

impl ResponseValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Malformed payloads are also written to `path`, replacing the previous one.
    pub fn with_debug_payload(path: impl Into<PathBuf>) -> Self {
        Self {
            debug_payload: Some(path.into()),
        }
    }

    pub fn check(&self, doc: &Value, at: Coordinate, offset: u32) -> ResponseCheck {
        let sections = match sections(doc) {
            Ok(sections) => sections,
            Err(reason) => {
                warn!(
                    lat = at.lat,
                    lng = at.lng,
                    offset = offset,
                    reason = reason,
                    "Unexpected listing response structure"
                );
                self.dump(doc);
                return ResponseCheck::Malformed(reason);
            }
        };

        if sections.iter().any(|section| section_id(section) == Some(UNSERVICEABLE_CARD_ID)) {
            info!(lat = at.lat, lng = at.lng, "Location is not serviceable");
            return ResponseCheck::Unserviceable;
        }

        ResponseCheck::Valid
    }

    fn dump(&self, doc: &Value) {
        let Some(path) = &self.debug_payload else {
            return;
        };
        if let Err(e) = write_debug_payload(path, doc) {
            error!(
                error = %e,
                path = %path.display(),
                "Failed to write debug payload"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const AT: Coordinate = Coordinate { lat: 12.97, lng: 77.59 };

    #[test]
    fn accepts_empty_card_list() {
        let check = ResponseValidator::new().check(&json!({ "data": { "cards": [] } }), AT, 0);
        assert_eq!(check, ResponseCheck::Valid);
    }

    #[test]
    fn detects_unserviceable_sentinel() {
        let doc = json!({
            "data": { "cards": [
                { "card": { "card": { "id": "banner" } } },
                { "card": { "card": { "id": UNSERVICEABLE_CARD_ID } } }
            ] }
        });
        let check = ResponseValidator::new().check(&doc, AT, 0);
        assert!(check.is_unserviceable());
        assert!(check.is_valid());
    }

    #[test]
    fn malformed_shapes_degrade_to_invalid() {
        let validator = ResponseValidator::new();
        for doc in [
            json!([1, 2, 3]),
            json!({ "statusCode": 1 }),
            json!({ "data": [] }),
            json!({ "data": { "cards": null } }),
            json!({ "data": { "cards": {} } }),
        ] {
            assert!(!validator.check(&doc, AT, 16).is_valid(), "{doc}");
        }
    }

    #[test]
    fn sections_ignore_odd_entries_when_scanning_for_sentinel() {
        let doc = json!({ "data": { "cards": [ 7, { "card": null }, { "card": { "card": { "id": 3 } } } ] } });
        assert_eq!(ResponseValidator::new().check(&doc, AT, 0), ResponseCheck::Valid);
    }

    #[test]
    fn writes_last_malformed_payload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("debug.json");
        let validator = ResponseValidator::with_debug_payload(&path);

        validator.check(&json!({ "first": true }), AT, 0);
        validator.check(&json!({ "second": true }), AT, 16);
        validator.check(&json!({ "data": { "cards": [] } }), AT, 32);

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(written, json!({ "second": true }));
    }
}
