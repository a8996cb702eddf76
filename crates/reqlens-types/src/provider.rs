use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider the captured exchange conforms to. The tag governs which
/// shape `request`/`response` bodies carry; variant-specific fields are
/// only reachable through a match on this discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderType {
    #[serde(rename = "OpenAI")]
    OpenAi,
    #[serde(rename = "AzureOpenAI")]
    AzureOpenAi,
    #[serde(rename = "Anthropic")]
    Anthropic,
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderType::OpenAi => "OpenAI",
            ProviderType::AzureOpenAi => "AzureOpenAI",
            ProviderType::Anthropic => "Anthropic",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_tag_round_trip() {
        let json = serde_json::to_string(&ProviderType::OpenAi).unwrap();
        assert_eq!(json, "\"OpenAI\"");
        let back: ProviderType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProviderType::OpenAi);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result: std::result::Result<ProviderType, _> = serde_json::from_str("\"Cohere\"");
        assert!(result.is_err());
    }
}
