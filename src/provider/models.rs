//! Static model catalog for Amazon Bedrock.
//!
//! The single source of truth for known model ids, display labels, and
//! token limits. Ids outside this list are still accepted by the provider.

/// Information about a known Bedrock model.
#[derive(Debug, PartialEq, Eq)]
pub struct ModelInfo {
    /// The Bedrock model or inference-profile id.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Maximum tokens allowed for this model.
    pub max_tokens: usize,
}

/// Known Bedrock models.
pub const BEDROCK_MODELS: &[ModelInfo] = &[
    ModelInfo {
        name: "us.anthropic.claude-sonnet-4-20250514-v1:0",
        label: "Claude 4 Sonnet (Bedrock)",
        max_tokens: 200_000,
    },
    ModelInfo {
        name: "us.anthropic.claude-opus-4-20250514-v1:0",
        label: "Claude 4 Opus (Bedrock)",
        max_tokens: 200_000,
    },
    ModelInfo {
        name: "us.anthropic.claude-3-7-sonnet-20250219-v1:0",
        label: "Claude 3.7 Sonnet v1 (Bedrock)",
        max_tokens: 200_000,
    },
    ModelInfo {
        name: "us.anthropic.claude-3-5-sonnet-20241022-v2:0",
        label: "Claude 3.5 Sonnet v2 (Bedrock)",
        max_tokens: 200_000,
    },
    ModelInfo {
        name: "us.anthropic.claude-3-5-sonnet-20240620-v1:0",
        label: "Claude 3.5 Sonnet (Bedrock)",
        max_tokens: 4_096,
    },
    ModelInfo {
        name: "amazon.nova-pro-v1:0",
        label: "Amazon Nova Pro (Bedrock)",
        max_tokens: 5_120,
    },
    ModelInfo {
        name: "amazon.nova-lite-v1:0",
        label: "Amazon Nova Lite (Bedrock)",
        max_tokens: 5_120,
    },
    ModelInfo {
        name: "mistral.mistral-large-2402-v1:0",
        label: "Mistral Large 24.02 (Bedrock)",
        max_tokens: 8_192,
    },
];

/// Looks up a catalog entry by exact model id.
pub fn find_model(name: &str) -> Option<&'static ModelInfo> {
    BEDROCK_MODELS.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_model() {
        let info = find_model("amazon.nova-lite-v1:0").unwrap();
        assert_eq!(info.label, "Amazon Nova Lite (Bedrock)");
        assert_eq!(info.max_tokens, 5_120);
    }

    #[test]
    fn test_find_unknown_model() {
        assert!(find_model("amazon.titan-text-express-v1").is_none());
    }

    #[test]
    fn test_default_model_is_in_catalog() {
        assert!(find_model(crate::constants::DEFAULT_MODEL).is_some());
    }

    #[test]
    fn test_catalog_names_are_unique() {
        for (i, a) in BEDROCK_MODELS.iter().enumerate() {
            assert!(BEDROCK_MODELS[i + 1..].iter().all(|b| b.name != a.name));
        }
    }
}
