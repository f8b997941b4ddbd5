use serde::Serialize;

/// Display-layer error taxonomy, derived by case-insensitive substring
/// inspection of the propagated error message. The upstream vocabulary is
/// not a contract, so this stays a best-effort heuristic; anything
/// unrecognized falls through to [`ErrorKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ApiKey,
    RateLimit,
    Network,
    EmptyResponse,
    Unknown,
}

impl ErrorKind {
    pub fn title(self) -> &'static str {
        match self {
            ErrorKind::ApiKey => "API Key Error",
            ErrorKind::RateLimit => "Rate Limit Exceeded",
            ErrorKind::Network => "Network Error",
            ErrorKind::EmptyResponse => "Empty Response",
            ErrorKind::Unknown => "Error Generating Playbook",
        }
    }

    /// Fixed remediation hint shown under the title.
    pub fn advice(self) -> &'static str {
        match self {
            ErrorKind::ApiKey => {
                "There seems to be an issue with your Gemini API key. Please ensure it's correctly configured and has the necessary permissions."
            }
            ErrorKind::RateLimit => {
                "You've made too many requests in a short period. Please wait a moment before trying again."
            }
            ErrorKind::Network => {
                "Could not connect to the Gemini API. Please check your internet connection."
            }
            ErrorKind::EmptyResponse => {
                "The API returned no data. This might be a temporary issue or a problem with the request. Please try again."
            }
            ErrorKind::Unknown => "An unexpected error occurred. Please try again.",
        }
    }
}

pub fn classify(message: &str) -> ErrorKind {
    let lower = message.to_lowercase();
    if lower.contains("api key") {
        ErrorKind::ApiKey
    } else if lower.contains("rate limit") {
        ErrorKind::RateLimit
    } else if lower.contains("network") || lower.contains("fetch") {
        ErrorKind::Network
    } else if lower.contains("empty response") {
        ErrorKind::EmptyResponse
    } else {
        ErrorKind::Unknown
    }
}

/// What the error panel renders: classified kind, fixed copy, and the raw
/// message for the expandable detail view and the copy action.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub title: &'static str,
    pub advice: &'static str,
    pub detail: String,
}

pub fn report(message: String) -> ErrorReport {
    let kind = classify(&message);
    ErrorReport {
        kind,
        title: kind.title(),
        advice: kind.advice(),
        detail: message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_api_key() {
        assert_eq!(classify("Invalid API key"), ErrorKind::ApiKey);
        assert_eq!(classify("Gemini API key not set"), ErrorKind::ApiKey);
    }

    #[test]
    fn test_classify_rate_limit() {
        assert_eq!(classify("rate limit exceeded, try later"), ErrorKind::RateLimit);
    }

    #[test]
    fn test_classify_network() {
        assert_eq!(classify("Failed to fetch"), ErrorKind::Network);
        assert_eq!(
            classify("Network error while contacting the Gemini API: dns error"),
            ErrorKind::Network
        );
    }

    #[test]
    fn test_classify_empty_response() {
        assert_eq!(
            classify("The API returned an empty response."),
            ErrorKind::EmptyResponse
        );
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("something exploded"), ErrorKind::Unknown);
        assert_eq!(classify(""), ErrorKind::Unknown);
    }

    #[test]
    fn test_report_keeps_raw_detail() {
        let report = report("Invalid API key".to_string());
        assert_eq!(report.kind, ErrorKind::ApiKey);
        assert_eq!(report.title, "API Key Error");
        assert_eq!(report.detail, "Invalid API key");
        assert!(!report.advice.is_empty());
    }
}
