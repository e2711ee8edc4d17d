//! Client Configuration
//!
//! Defaults plus optional overrides from `<meta>` tags in the host page.

pub const DEFAULT_API_BASE: &str = "/api/todos";

const META_API_BASE: &str = "todo-api-base";
const META_LOAD_POLICY: &str = "todo-load-policy";

/// What to do with a list response when a newer load was started after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Render every response; the last one to resolve wins
    #[default]
    LastWriteWins,
    /// Render only the response of the newest load
    DiscardStale,
}

impl LoadPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "last-write-wins" => Some(LoadPolicy::LastWriteWins),
            "discard-stale" => Some(LoadPolicy::DiscardStale),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Collection endpoint; items live at `{api_base}/{id}`
    pub api_base: String,
    pub load_policy: LoadPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            load_policy: LoadPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Read overrides from the current document, falling back to defaults.
    pub fn from_document() -> Self {
        let meta = |name: &str| -> Option<String> {
            let document = web_sys::window()?.document()?;
            let element = document
                .query_selector(&format!(r#"meta[name="{}"]"#, name))
                .ok()
                .flatten()?;
            element.get_attribute("content")
        };
        Self::from_overrides(meta(META_API_BASE), meta(META_LOAD_POLICY))
    }

    pub fn from_overrides(api_base: Option<String>, load_policy: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = api_base.map(|b| b.trim().to_string()).filter(|b| !b.is_empty()) {
            config.api_base = base;
        }

        if let Some(raw) = load_policy {
            match LoadPolicy::parse(&raw) {
                Some(policy) => config.load_policy = policy,
                None => log::warn!("Unknown {} value {:?}, using {:?}", META_LOAD_POLICY, raw, config.load_policy),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "/api/todos");
        assert_eq!(config.load_policy, LoadPolicy::LastWriteWins);
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_overrides(
            Some(" /v2/todos ".to_string()),
            Some("discard-stale".to_string()),
        );
        assert_eq!(config.api_base, "/v2/todos");
        assert_eq!(config.load_policy, LoadPolicy::DiscardStale);
    }

    #[test]
    fn test_blank_or_unknown_overrides_fall_back() {
        let config = ClientConfig::from_overrides(Some("   ".to_string()), Some("newest".to_string()));
        assert_eq!(config, ClientConfig::default());
    }
}
