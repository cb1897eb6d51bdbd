//! Provider registry plus directory listing lookup.
//!
//! The file browser only ever asks the catalog for "the listing at this key".
//! Where listings come from is behind [`ListingSource`]; today that is a
//! static table bundled into the binary, later it can be a provider API.
//!
//! Lookup policy (fail-soft, never an error):
//! - unknown provider → empty listing
//! - disconnected provider → empty listing, even if data is registered
//! - no listing registered at the key → empty listing

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::log;
use crate::models::{DirectoryKey, Entry, Provider, ProviderRegistry};

/// Mock provider table shipped with the app.
const BUNDLED_TABLE: &str = include_str!("../assets/mock/listings.json");

/// Source of directory listings.
pub trait ListingSource {
    /// Listing registered at `key`, or `None` if nothing is registered.
    fn listing(&self, key: &DirectoryKey) -> Option<Vec<Entry>>;
}

// ============================================================================
// StaticListings
// ============================================================================

/// In-memory listing table keyed by [`DirectoryKey`].
#[derive(Clone, Debug, Default)]
pub struct StaticListings {
    listings: HashMap<DirectoryKey, Vec<Entry>>,
}

impl StaticListings {
    /// Build from serialized keys (`"provider/seg/..."`).
    pub fn from_table(table: HashMap<String, Vec<Entry>>) -> Result<Self, CatalogError> {
        let mut listings = HashMap::with_capacity(table.len());
        for (raw_key, entries) in table {
            let key = DirectoryKey::parse(&raw_key).ok_or(CatalogError::EmptyKey(raw_key))?;
            listings.insert(key, entries);
        }
        Ok(Self { listings })
    }

    pub fn insert(&mut self, key: DirectoryKey, entries: Vec<Entry>) {
        self.listings.insert(key, entries);
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingSource for StaticListings {
    fn listing(&self, key: &DirectoryKey) -> Option<Vec<Entry>> {
        self.listings.get(key).cloned()
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Deserialize)]
struct CatalogTable {
    providers: Vec<Provider>,
    #[serde(default)]
    listings: HashMap<String, Vec<Entry>>,
}

/// Provider registry paired with a listing source.
#[derive(Clone, Debug, Default)]
pub struct Catalog<L = StaticListings> {
    providers: ProviderRegistry,
    source: L,
}

impl<L: ListingSource> Catalog<L> {
    pub fn new(providers: ProviderRegistry, source: L) -> Self {
        Self { providers, source }
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    pub fn source(&self) -> &L {
        &self.source
    }

    /// Resolve a listing under the connected and empty-on-miss policies.
    ///
    /// Returned entries always start unselected.
    pub fn listing(&self, key: &DirectoryKey) -> Vec<Entry> {
        if !self.providers.is_browsable(&key.provider_id) {
            return Vec::new();
        }

        let mut entries = self.source.listing(key).unwrap_or_default();
        for entry in &mut entries {
            entry.selected = false;
        }
        entries
    }

    /// Listing at `provider_id` and `path`.
    pub fn listing_at(&self, provider_id: &str, path: &[String]) -> Vec<Entry> {
        self.listing(&DirectoryKey::new(provider_id, path.to_vec()))
    }

    /// Root listing of a provider.
    pub fn root_listing(&self, provider_id: &str) -> Vec<Entry> {
        self.listing(&DirectoryKey::root(provider_id))
    }
}

impl Catalog<StaticListings> {
    /// Parse a JSON table with `providers` and `listings` sections.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let table: CatalogTable = serde_json::from_str(json)?;
        let providers = ProviderRegistry::from_providers(table.providers);
        let source = StaticListings::from_table(table.listings)?;
        Ok(Self::new(providers, source))
    }

    /// The mock catalog bundled with the app.
    ///
    /// A malformed table degrades to an empty catalog.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_TABLE).unwrap_or_else(|e| {
            log::warn(&format!("Mock catalog unavailable: {}", e));
            Self::default()
        })
    }
}
