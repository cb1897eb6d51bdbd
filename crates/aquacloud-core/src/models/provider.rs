//! Cloud provider registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Label used when a pane has no (known) provider.
pub const NOT_SELECTED: &str = "Not Selected";

/// A cloud storage service the user can pick as a transfer endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable identifier (e.g., "google-drive")
    pub id: String,
    /// Human-readable name (e.g., "Google Drive")
    #[serde(rename = "name")]
    pub display_name: String,
    /// Whether the account is authorized; disconnected providers cannot be browsed
    pub connected: bool,
}

impl Provider {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, connected: bool) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            connected,
        }
    }

    /// Status label shown next to the provider name.
    pub fn status_label(&self) -> &'static str {
        if self.connected {
            "Connected"
        } else {
            "Disconnected"
        }
    }
}

// ============================================================================
// ProviderRegistry
// ============================================================================

/// Read-only registry of providers, iterated in registration order.
#[derive(Clone, Debug, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Provider>,
    order: Vec<String>,
}

impl ProviderRegistry {
    /// Create a registry from a list of providers.
    ///
    /// A later provider with a duplicate id replaces the earlier one but keeps
    /// its position.
    pub fn from_providers(providers: Vec<Provider>) -> Self {
        let mut registry = Self::default();
        for provider in providers {
            if !registry.providers.contains_key(&provider.id) {
                registry.order.push(provider.id.clone());
            }
            registry.providers.insert(provider.id.clone(), provider);
        }
        registry
    }

    /// Look up a provider by id.
    pub fn get(&self, id: &str) -> Option<&Provider> {
        self.providers.get(id)
    }

    /// Whether `id` names a registered, connected provider.
    pub fn is_browsable(&self, id: &str) -> bool {
        self.get(id).is_some_and(|p| p.connected)
    }

    /// Display name for `id`, or "Not Selected" for empty/unknown ids.
    pub fn display_name(&self, id: Option<&str>) -> String {
        id.and_then(|id| self.get(id))
            .map(|p| p.display_name.clone())
            .unwrap_or_else(|| NOT_SELECTED.to_string())
    }

    /// All providers in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Provider> {
        self.order.iter().filter_map(|id| self.providers.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ProviderRegistry {
        ProviderRegistry::from_providers(vec![
            Provider::new("google-drive", "Google Drive", true),
            Provider::new("onedrive", "OneDrive", false),
        ])
    }

    #[test]
    fn test_lookup_and_order() {
        let registry = registry();
        let ids: Vec<_> = registry.all().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["google-drive", "onedrive"]);
        assert_eq!(registry.get("onedrive").map(|p| p.connected), Some(false));
        assert!(registry.get("dropbox").is_none());
    }

    #[test]
    fn test_browsable() {
        let registry = registry();
        assert!(registry.is_browsable("google-drive"));
        assert!(!registry.is_browsable("onedrive"));
        assert!(!registry.is_browsable("nonexistent"));
    }

    #[test]
    fn test_display_name_fallback() {
        let registry = registry();
        assert_eq!(registry.display_name(Some("google-drive")), "Google Drive");
        assert_eq!(registry.display_name(Some("nonexistent")), NOT_SELECTED);
        assert_eq!(registry.display_name(None), NOT_SELECTED);
    }

    #[test]
    fn test_duplicate_id_replaces() {
        let registry = ProviderRegistry::from_providers(vec![
            Provider::new("a", "First", false),
            Provider::new("b", "B", true),
            Provider::new("a", "Second", true),
        ]);
        assert_eq!(registry.len(), 2);
        let first = registry.all().next().unwrap();
        assert_eq!(first.display_name, "Second");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(Provider::new("x", "X", true).status_label(), "Connected");
        assert_eq!(Provider::new("x", "X", false).status_label(), "Disconnected");
    }
}
