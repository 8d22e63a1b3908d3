use serde::{Deserialize, Serialize};

/// Payload of a scan submission, as a query string, form body or JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct ScanRequest {
    pub qr_code: Option<String>,
}

impl ScanRequest {
    /// Decodes a query string or form body. Only the first `qr_code` pair
    /// counts; repeats and unrelated keys are ignored.
    pub fn from_urlencoded(input: &[u8]) -> Self {
        let qr_code = form_urlencoded::parse(input)
            .find(|(key, _)| key == "qr_code")
            .map(|(_, value)| value.into_owned());
        Self { qr_code }
    }

    /// The submitted identifier, if present and not empty.
    pub fn identifier(self) -> Option<String> {
        self.qr_code.filter(|code| !code.is_empty())
    }
}

/// Structured error body returned to scanning clients.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_identifiers_are_absent() {
        let empty = ScanRequest {
            qr_code: Some(String::new()),
        };
        assert_eq!(empty.identifier(), None);
        assert_eq!(ScanRequest::default().identifier(), None);

        let spaces = ScanRequest {
            qr_code: Some("  ".to_string()),
        };
        assert_eq!(spaces.identifier().as_deref(), Some("  "));

        let present = ScanRequest {
            qr_code: Some("Checkpoint_7".to_string()),
        };
        assert_eq!(present.identifier().as_deref(), Some("Checkpoint_7"));
    }

    #[test]
    fn urlencoded_takes_first_qr_code() {
        let repeated = ScanRequest::from_urlencoded(b"qr_code=A&qr_code=B");
        assert_eq!(repeated.qr_code.as_deref(), Some("A"));

        let decoded = ScanRequest::from_urlencoded(b"x=1&qr_code=gate%204%265&x=2");
        assert_eq!(decoded.qr_code.as_deref(), Some("gate 4&5"));

        assert_eq!(ScanRequest::from_urlencoded(b"other=1").qr_code, None);
        assert_eq!(ScanRequest::from_urlencoded(b"").qr_code, None);
    }
}
