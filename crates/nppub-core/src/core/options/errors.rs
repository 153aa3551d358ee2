use serde_json::{json, Value};

use crate::UserError;

/// Classifies a publish option that failed validation.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("token must be a non-empty string")]
    InvalidToken,
    #[error("registry must be an absolute URL (got '{value}')")]
    InvalidRegistryUrl { value: String },
    #[error("tag must be a non-empty string without characters that need URL encoding (got '{value}')")]
    InvalidTag { value: String },
    #[error("access must be \"public\" or \"restricted\" (got '{value}')")]
    InvalidAccess { value: String },
    #[error("strategy must be \"all\" or \"upgrade\" (got '{value}')")]
    InvalidStrategy { value: String },
}

impl OptionsError {
    /// The option that was rejected.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidToken => "token",
            Self::InvalidRegistryUrl { .. } => "registry",
            Self::InvalidTag { .. } => "tag",
            Self::InvalidAccess { .. } => "access",
            Self::InvalidStrategy { .. } => "strategy",
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "NPP101",
            Self::InvalidRegistryUrl { .. } => "NPP102",
            Self::InvalidTag { .. } => "NPP103",
            Self::InvalidAccess { .. } => "NPP104",
            Self::InvalidStrategy { .. } => "NPP105",
        }
    }

    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidToken => "invalid_token",
            Self::InvalidRegistryUrl { .. } => "invalid_registry_url",
            Self::InvalidTag { .. } => "invalid_tag",
            Self::InvalidAccess { .. } => "invalid_access",
            Self::InvalidStrategy { .. } => "invalid_strategy",
        }
    }

    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self {
            Self::InvalidToken => "Pass --token or export NPM_TOKEN with an npm access token.",
            Self::InvalidRegistryUrl { .. } => {
                "Use a full URL such as https://registry.npmjs.org/."
            }
            Self::InvalidTag { .. } => {
                "Use a plain dist-tag like 'latest' or 'next' (no spaces, slashes, or '@')."
            }
            Self::InvalidAccess { .. } => "Use --access public or --access restricted.",
            Self::InvalidStrategy { .. } => "Use --strategy all or --strategy upgrade.",
        }
    }

    /// The raw value that was rejected, when one was supplied.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidToken => None,
            Self::InvalidRegistryUrl { value }
            | Self::InvalidTag { value }
            | Self::InvalidAccess { value }
            | Self::InvalidStrategy { value } => Some(value),
        }
    }

    #[must_use]
    pub fn details(&self) -> Value {
        let mut details = json!({
            "code": self.code(),
            "reason": self.reason(),
            "field": self.field(),
            "hint": self.hint(),
        });
        if let (Value::Object(map), Some(value)) = (&mut details, self.value()) {
            map.insert("value".into(), json!(value));
        }
        details
    }

    #[must_use]
    pub fn into_user_error(self) -> UserError {
        UserError::new(self.to_string(), self.details())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_carry_the_rejected_value() {
        let issue = OptionsError::InvalidAccess {
            value: "invalid".to_string(),
        };
        let details = issue.details();
        assert_eq!(details["code"], "NPP104");
        assert_eq!(details["reason"], "invalid_access");
        assert_eq!(details["field"], "access");
        assert_eq!(details["value"], "invalid");
        assert!(details["hint"].as_str().is_some_and(|hint| hint.contains("restricted")));
    }

    #[test]
    fn token_details_never_echo_a_value() {
        let details = OptionsError::InvalidToken.details();
        assert_eq!(details["reason"], "invalid_token");
        assert!(details.get("value").is_none());
    }

    #[test]
    fn user_error_keeps_message_and_details() {
        let issue = OptionsError::InvalidStrategy {
            value: "sometimes".to_string(),
        };
        let message = issue.to_string();
        let error = issue.clone().into_user_error();
        assert_eq!(error.message(), message);
        assert_eq!(error.details(), &issue.details());
        assert!(message.contains("sometimes"));
    }
}
