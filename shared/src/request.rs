//! Request bodies and query parameters of the order-intake API

use serde::Deserialize;

/// `POST /submit` body
///
/// Every field is optional at the decoding layer so a missing `message`
/// surfaces as a validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitEntry {
    pub name: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub message: Option<String>,
}

/// `PUT /entries/{id}/status` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEntryStatus {
    pub status: Option<String>,
}

/// `GET /entries` query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntriesQuery {
    pub status: Option<String>,
}

impl EntriesQuery {
    /// Status filter; an empty `?status=` means no filter
    pub fn status_filter(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_entry_reads_camel_case() {
        let body: SubmitEntry = serde_json::from_str(
            r#"{"name":"Alice","phoneNumber":"555-1234","message":"2 everything bagels"}"#,
        )
        .unwrap();
        assert_eq!(body.phone_number.as_deref(), Some("555-1234"));
        assert_eq!(body.message.as_deref(), Some("2 everything bagels"));
    }

    #[test]
    fn test_submit_entry_without_message_still_decodes() {
        let body: SubmitEntry = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert!(body.message.is_none());
    }

    #[test]
    fn test_empty_status_query_is_no_filter() {
        let query = EntriesQuery {
            status: Some(String::new()),
        };
        assert_eq!(query.status_filter(), None);

        let query = EntriesQuery {
            status: Some("New".into()),
        };
        assert_eq!(query.status_filter(), Some("New"));
    }
}
