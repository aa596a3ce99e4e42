//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::response::ValidationErrorDetail;

/// Body of a create or update request.
///
/// Unknown fields, including `id`, are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub rating: Option<i64>,
}

fn default_published() -> bool {
    true
}

impl PostRequest {
    /// Build a request from a raw JSON body, reporting every rejected field
    /// rather than stopping at the first one.
    pub fn from_json(body: Value) -> Result<Self, Vec<ValidationErrorDetail>> {
        let Some(fields) = body.as_object() else {
            return Err(vec![ValidationErrorDetail::new(
                vec!["body".to_string()],
                "Input should be a valid dictionary or object to extract fields from",
                "model_attributes_type",
            )]);
        };

        let errors = field_errors(fields);
        if !errors.is_empty() {
            return Err(errors);
        }

        serde_json::from_value(body).map_err(|e| {
            vec![ValidationErrorDetail::new(
                vec!["body".to_string()],
                e.to_string(),
                "invalid_type",
            )]
        })
    }
}

fn field_errors(fields: &Map<String, Value>) -> Vec<ValidationErrorDetail> {
    let mut errors = Vec::new();

    for name in ["title", "content"] {
        match fields.get(name) {
            None => errors.push(field_error(name, "Field required", "missing")),
            Some(Value::String(_)) => {}
            Some(_) => errors.push(field_error(
                name,
                "Input should be a valid string",
                "string_type",
            )),
        }
    }

    if let Some(published) = fields.get("published") {
        if !published.is_boolean() {
            errors.push(field_error(
                "published",
                "Input should be a valid boolean",
                "bool_type",
            ));
        }
    }

    if let Some(rating) = fields.get("rating") {
        if !rating.is_null() && rating.as_i64().is_none() {
            errors.push(field_error(
                "rating",
                "Input should be a valid integer",
                "int_type",
            ));
        }
    }

    errors
}

fn field_error(field: &str, msg: &str, kind: &str) -> ValidationErrorDetail {
    ValidationErrorDetail::new(vec!["body".to_string(), field.to_string()], msg, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn locs(errors: &[ValidationErrorDetail]) -> Vec<Vec<String>> {
        errors.iter().map(|e| e.loc.clone()).collect()
    }

    #[test]
    fn optional_fields_take_defaults() {
        let req = PostRequest::from_json(json!({"title": "t", "content": "c"})).unwrap();
        assert!(req.published);
        assert_eq!(req.rating, None);
    }

    #[test]
    fn id_in_body_is_ignored() {
        let body = json!({"id": 9, "title": "t", "content": "c", "rating": -3});
        let req = PostRequest::from_json(body).unwrap();
        assert_eq!(req.rating, Some(-3));
    }

    #[test]
    fn empty_object_reports_both_required_fields() {
        let errors = PostRequest::from_json(json!({})).unwrap_err();
        assert_eq!(
            locs(&errors),
            vec![vec!["body", "title"], vec!["body", "content"]]
        );
        assert!(errors.iter().all(|e| e.kind == "missing"));
    }

    #[test]
    fn wrong_types_are_reported_per_field() {
        let body = json!({"title": 1, "content": "c", "published": "yes", "rating": 2.5});
        let errors = PostRequest::from_json(body).unwrap_err();
        let kinds: Vec<&str> = errors.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["string_type", "bool_type", "int_type"]);
        assert_eq!(errors[0].loc, vec!["body", "title"]);
    }

    #[test]
    fn null_published_is_rejected_but_null_rating_is_not() {
        let body = json!({"title": "t", "content": "c", "published": null, "rating": null});
        let errors = PostRequest::from_json(body).unwrap_err();
        assert_eq!(locs(&errors), vec![vec!["body", "published"]]);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errors = PostRequest::from_json(json!(["t", "c"])).unwrap_err();
        assert_eq!(errors[0].loc, vec!["body"]);
        assert_eq!(errors[0].kind, "model_attributes_type");
    }
}
