//! Decoding of Cloudify list responses.
//!
//! Only the number of returned items is used. Pagination metadata is parsed so
//! that responses stay wire compatible and so a short page can be detected.

use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;

/// A listed entity. Only its presence is counted, so the id may be any JSON value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<Value>,
}

/// Pagination values arrive as numbers from the REST API but some proxies and
/// older releases render them as strings. Anything else is kept as raw JSON so
/// an odd value never hides the item count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PaginationValue {
    Number(u64),
    Text(String),
    Other(Value),
}

impl PaginationValue {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            PaginationValue::Number(n) => Some(*n),
            PaginationValue::Text(s) => s.trim().parse().ok(),
            PaginationValue::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: Option<PaginationValue>,
    #[serde(default)]
    pub offset: Option<PaginationValue>,
    #[serde(default)]
    pub size: Option<PaginationValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CfyResponse {
    pub items: Vec<Item>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CfyResponse {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// True when the server reports more matching items than this page holds.
    /// Only the first page is ever fetched, so the published count is low.
    pub fn is_truncated(&self) -> bool {
        self.metadata
            .pagination
            .total
            .as_ref()
            .and_then(PaginationValue::as_u64)
            .is_some_and(|total| total > self.items.len() as u64)
    }
}

/// Parse a raw response body into a [`CfyResponse`].
pub fn decode(body: &[u8]) -> Result<CfyResponse> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_decode_counts_items() {
        let body = br#"{"items":[{"id":"a"},{"id":"b"}],"metadata":{"pagination":{"total":2,"offset":0,"size":1000}}}"#;
        let response = decode(body).unwrap();
        assert_eq!(response.item_count(), 2);
        assert!(!response.is_truncated());
    }

    #[test]
    fn test_decode_empty_items() {
        let response = decode(br#"{"items":[],"metadata":{}}"#).unwrap();
        assert_eq!(response.item_count(), 0);
    }

    #[test]
    fn test_decode_ignores_item_content() {
        let body = br#"{"items":[{"id":"x","tenant_name":"t"},{},{"id":"y"}]}"#;
        assert_eq!(decode(body).unwrap().item_count(), 3);
    }

    #[test]
    fn test_decode_string_pagination() {
        let body = br#"{"items":[{"id":"a"}],"metadata":{"pagination":{"total":"5","offset":"0","size":"1"}}}"#;
        let response = decode(body).unwrap();
        let pagination = &response.metadata.pagination;
        assert_eq!(pagination.total.as_ref().and_then(PaginationValue::as_u64), Some(5));
        assert_eq!(pagination.offset.as_ref().and_then(PaginationValue::as_u64), Some(0));
        assert_eq!(pagination.size.as_ref().and_then(PaginationValue::as_u64), Some(1));
        assert!(response.is_truncated());
    }

    #[test]
    fn test_decode_mixed_id_types() {
        let body = br#"{"items":[{"id":1},{"id":"b"},{"id":null},{"id":{"nested":true}}]}"#;
        assert_eq!(decode(body).unwrap().item_count(), 4);
    }

    #[test]
    fn test_decode_unexpected_pagination_values() {
        let body = br#"{"items":[{"id":"a"},{"id":"b"}],"metadata":{"pagination":{"total":-1,"offset":2.0,"size":true}}}"#;
        let response = decode(body).unwrap();
        assert_eq!(response.item_count(), 2);
        assert!(!response.is_truncated());

        let pagination = &response.metadata.pagination;
        assert_eq!(pagination.total.as_ref().and_then(PaginationValue::as_u64), None);
        assert_eq!(pagination.offset.as_ref().and_then(PaginationValue::as_u64), None);
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode(b"{not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_decode_wrong_shape() {
        let err = decode(br#"{"items":"nope"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);

        let err = decode(br#"[1,2,3]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
