use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use super::{Access, OptionsError, RegistryInput, Strategy, ACCESS_PUBLIC, ACCESS_RESTRICTED};
use super::{STRATEGY_ALL, STRATEGY_UPGRADE};

/// Characters a URI component may carry without escaping.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whitespace and line terminators as JavaScript's `String.prototype.trim` sees them.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Accepts any non-empty token and returns it unchanged.
pub fn validate_token(token: Option<&str>) -> Result<&str, OptionsError> {
    match token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(OptionsError::InvalidToken),
    }
}

/// Parses the registry as an absolute URL.
pub fn validate_registry(registry: &RegistryInput) -> Result<Url, OptionsError> {
    match registry {
        RegistryInput::Url(url) => Ok(url.clone()),
        RegistryInput::Text(text) => {
            Url::parse(text).map_err(|_| OptionsError::InvalidRegistryUrl {
                value: text.clone(),
            })
        }
    }
}

/// Checks a dist-tag and returns it exactly as given.
///
/// The trimmed tag must be non-empty and survive URI-component encoding
/// untouched; surrounding whitespace is not part of the check.
pub fn validate_tag(tag: &str) -> Result<&str, OptionsError> {
    let trimmed = tag.trim_matches(is_js_whitespace);
    if !trimmed.is_empty() && utf8_percent_encode(trimmed, URI_COMPONENT).to_string() == trimmed {
        Ok(tag)
    } else {
        Err(OptionsError::InvalidTag {
            value: tag.to_string(),
        })
    }
}

/// Absent access stays absent so the registry applies its own default.
pub fn validate_access(access: Option<&str>) -> Result<Option<Access>, OptionsError> {
    match access {
        None => Ok(None),
        Some(ACCESS_PUBLIC) => Ok(Some(Access::Public)),
        Some(ACCESS_RESTRICTED) => Ok(Some(Access::Restricted)),
        Some(other) => Err(OptionsError::InvalidAccess {
            value: other.to_string(),
        }),
    }
}

pub fn validate_strategy(strategy: &str) -> Result<Strategy, OptionsError> {
    match strategy {
        STRATEGY_ALL => Ok(Strategy::All),
        STRATEGY_UPGRADE => Ok(Strategy::Upgrade),
        other => Err(OptionsError::InvalidStrategy {
            value: other.to_string(),
        }),
    }
}
