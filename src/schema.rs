//! Response Validation
//!
//! Every body coming back from the API passes through here before it can
//! reach the store.

use std::collections::HashSet;

use crate::error::SchemaError;
use crate::models::{Dare, LikeResponse};

/// Parse a collection response, keeping server order
pub fn parse_collection(body: &str) -> Result<Vec<Dare>, SchemaError> {
    let dares: Vec<Dare> = serde_json::from_str(body)?;
    ensure_unique_ids(&dares)?;
    Ok(dares)
}

/// Parse the response to liking dare `id` (full collection or that dare)
pub fn parse_like_response(body: &str, id: u32) -> Result<LikeResponse, SchemaError> {
    let response: LikeResponse = serde_json::from_str(body)?;
    match &response {
        LikeResponse::Collection(dares) => ensure_unique_ids(dares)?,
        LikeResponse::Item(dare) if dare.id != id => {
            return Err(SchemaError::IdMismatch { expected: id, got: dare.id });
        }
        LikeResponse::Item(_) => {}
    }
    Ok(response)
}

fn ensure_unique_ids(dares: &[Dare]) -> Result<(), SchemaError> {
    let mut seen = HashSet::with_capacity(dares.len());
    for dare in dares {
        if !seen.insert(dare.id) {
            return Err(SchemaError::DuplicateId(dare.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keeps_response_order() {
        let body = r#"[
            {"id": 7, "title": "Sing", "dare": "Sing in public", "likes": 3},
            {"id": 2, "title": "Run", "dare": "Run a mile", "likes": 0}
        ]"#;

        let dares = parse_collection(body).unwrap();

        assert_eq!(dares.len(), 2);
        assert_eq!(dares[0].id, 7);
        assert_eq!(dares[0].dare, "Sing in public");
        assert_eq!(dares[1].id, 2);
        assert_eq!(dares[1].likes, 0);
    }

    #[test]
    fn test_collection_accepts_text_alias_and_extra_fields() {
        let body = r#"[{"id": 1, "title": "t", "text": "body", "likes": 4,
            "seen": false, "addedBy": "kim", "createdAt": "2024-01-01T00:00:00Z"}]"#;

        let dares = parse_collection(body).unwrap();

        assert_eq!(dares[0].dare, "body");
        assert_eq!(dares[0].added_by.as_deref(), Some("kim"));
    }

    #[test]
    fn test_collection_rejects_negative_likes() {
        let body = r#"[{"id": 1, "title": "t", "dare": "d", "likes": -1}]"#;
        assert!(matches!(parse_collection(body), Err(SchemaError::Json(_))));
    }

    #[test]
    fn test_collection_rejects_missing_title() {
        let body = r#"[{"id": 1, "dare": "d", "likes": 1}]"#;
        assert!(matches!(parse_collection(body), Err(SchemaError::Json(_))));
    }

    #[test]
    fn test_collection_rejects_object_body() {
        let body = r#"{"id": 1, "title": "t", "dare": "d", "likes": 1}"#;
        assert!(parse_collection(body).is_err());
    }

    #[test]
    fn test_collection_rejects_duplicate_ids() {
        let body = r#"[
            {"id": 5, "title": "a", "dare": "a", "likes": 1},
            {"id": 5, "title": "b", "dare": "b", "likes": 2}
        ]"#;
        assert!(matches!(parse_collection(body), Err(SchemaError::DuplicateId(5))));
    }

    #[test]
    fn test_like_response_shapes() {
        let collection = r#"[{"id": 1, "title": "t", "dare": "d", "likes": 2}]"#;
        let item = r#"{"id": 1, "title": "t", "dare": "d", "likes": 2}"#;

        assert!(matches!(
            parse_like_response(collection, 1).unwrap(),
            LikeResponse::Collection(ref dares) if dares.len() == 1
        ));
        assert!(matches!(
            parse_like_response(item, 1).unwrap(),
            LikeResponse::Item(ref dare) if dare.likes == 2
        ));
    }

    #[test]
    fn test_like_response_for_other_dare_is_rejected() {
        let item = r#"{"id": 2, "title": "t", "dare": "d", "likes": 99}"#;

        assert!(matches!(
            parse_like_response(item, 1),
            Err(SchemaError::IdMismatch { expected: 1, got: 2 })
        ));
    }

    #[test]
    fn test_like_response_rejects_garbage() {
        assert!(parse_like_response("\"ok\"", 1).is_err());
        assert!(parse_like_response("", 1).is_err());
    }
}
