//! Response envelope shared by every JSON success response

use super::middleware::RequestContext;
use serde::Serialize;

/// Request-derived metadata echoed in every envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Correlation id of the request
    pub request_id: String,
    /// Request path as received
    pub path: String,
    /// Absolute API root used to build links
    pub base_url: String,
}

impl From<&RequestContext> for Meta {
    fn from(ctx: &RequestContext) -> Self {
        Self {
            request_id: ctx.request_id.clone(),
            path: ctx.path.clone(),
            base_url: ctx.base_url.clone(),
        }
    }
}

/// `{ title, count?, data, meta }`
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    /// Human readable title of the payload
    pub title: String,
    /// Item count, present for list payloads only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Payload
    pub data: T,
    /// Request metadata
    pub meta: Meta,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a single resource
    pub fn item(ctx: &RequestContext, title: &str, data: T) -> Self {
        Self {
            title: title.to_string(),
            count: None,
            data,
            meta: Meta::from(ctx),
        }
    }
}

impl<E: Serialize> Envelope<Vec<E>> {
    /// Wrap a list; `count` is the list length
    pub fn list(ctx: &RequestContext, title: &str, data: Vec<E>) -> Self {
        Self {
            title: title.to_string(),
            count: Some(data.len()),
            data,
            meta: Meta::from(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RequestContext {
        RequestContext {
            request_id: "req-1".to_string(),
            path: "/api/v1/products".to_string(),
            base_url: "http://localhost:3010/api/v1".to_string(),
        }
    }

    #[test]
    fn test_list_envelope_has_count() {
        let envelope = Envelope::list(&ctx(), "All products", vec!["a", "b"]);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["title"], "All products");
        assert_eq!(json["count"], 2);
        assert_eq!(json["meta"]["requestId"], "req-1");
        assert_eq!(json["meta"]["baseUrl"], "http://localhost:3010/api/v1");
    }

    #[test]
    fn test_item_envelope_omits_count() {
        let envelope = Envelope::item(&ctx(), "Course by id", "x");
        let json = serde_json::to_value(&envelope).unwrap();

        assert!(json.get("count").is_none());
        assert_eq!(json["data"], "x");
        assert_eq!(json["meta"]["path"], "/api/v1/products");
    }
}
