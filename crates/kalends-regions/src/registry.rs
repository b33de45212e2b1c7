//! Provider registry.
//!
//! Maps region codes and names onto rule providers. The registry is built
//! once on first access and is read-only afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use kalends_core::rules::RegionProvider;
use kalends_core::{HolidayError, HolidayResult};

use crate::regions::ALL_REGIONS;

/// Global singleton registry.
static GLOBAL_REGISTRY: OnceLock<ProviderRegistry> = OnceLock::new();

/// Lookup table of region providers.
///
/// Lookups are case-insensitive and accept either the ISO code
/// (`GB-SCT`) or the display name (`Scotland`).
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn RegionProvider>>,
    index: HashMap<String, usize>,
}

impl ProviderRegistry {
    /// Returns the global registry holding every shipped region.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kalends_regions::ProviderRegistry;
    ///
    /// let registry = ProviderRegistry::global();
    /// assert_eq!(registry.get("netherlands").unwrap().code(), "NL");
    /// assert_eq!(registry.get("gb-sct").unwrap().name(), "Scotland");
    /// ```
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::with_builtin_regions)
    }

    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every shipped region.
    #[must_use]
    pub fn with_builtin_regions() -> Self {
        let mut registry = Self::new();
        for region in ALL_REGIONS {
            registry.register(Arc::new(region));
        }
        registry
    }

    /// Registers `provider` under its code and name.
    ///
    /// Returns false, leaving the registry unchanged, if either is taken.
    pub fn register(&mut self, provider: Arc<dyn RegionProvider>) -> bool {
        let code = normalise(provider.code());
        let name = normalise(provider.name());
        if self.index.contains_key(&code) || self.index.contains_key(&name) {
            tracing::warn!(code = provider.code(), "region already registered");
            return false;
        }

        let slot = self.providers.len();
        self.index.insert(code, slot);
        self.index.insert(name, slot);
        self.providers.push(provider);
        true
    }

    /// Looks up a provider by code or name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn RegionProvider>> {
        self.index
            .get(&normalise(name))
            .map(|&slot| Arc::clone(&self.providers[slot]))
    }

    /// Looks up a provider by code or name.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::ProviderNotFound` if nothing is registered
    /// under `name`.
    pub fn provider(&self, name: &str) -> HolidayResult<Arc<dyn RegionProvider>> {
        self.get(name)
            .ok_or_else(|| HolidayError::provider_not_found(name))
    }

    /// Every registered provider, in registration order.
    pub fn providers(&self) -> impl Iterator<Item = &Arc<dyn RegionProvider>> {
        self.providers.iter()
    }

    /// Region codes, in registration order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.code()).collect()
    }

    /// Number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if no provider is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

fn normalise(name: &str) -> String {
    name.trim().to_lowercase().replace('_', "-")
}

/// Looks up a provider in the global registry.
///
/// # Errors
///
/// Returns `HolidayError::ProviderNotFound` for an unknown region.
pub fn provider(name: &str) -> HolidayResult<Arc<dyn RegionProvider>> {
    ProviderRegistry::global().provider(name)
}

/// Every provider in the global registry.
pub fn providers() -> Vec<Arc<dyn RegionProvider>> {
    ProviderRegistry::global().providers().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::NETHERLANDS;

    #[test]
    fn test_lookup_by_code_and_name() {
        let registry = ProviderRegistry::global();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.provider("NL").unwrap().name(), "Netherlands");
        assert_eq!(registry.provider("united kingdom").unwrap().code(), "GB");
        assert_eq!(registry.provider(" gb_eng ").unwrap().code(), "GB-ENG");
        assert_eq!(registry.provider("SOUTH KOREA").unwrap().code(), "KR");
    }

    #[test]
    fn test_unknown_region() {
        assert_eq!(
            provider("Atlantis").unwrap_err(),
            HolidayError::provider_not_found("Atlantis")
        );
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register(Arc::new(NETHERLANDS)));
        assert!(!registry.register(Arc::new(NETHERLANDS)));
        assert_eq!(registry.codes(), vec!["NL"]);
    }

    #[test]
    fn test_providers_lists_all() {
        let codes: Vec<String> = providers().iter().map(|p| p.code().to_string()).collect();
        assert_eq!(codes, ["NL", "GB", "GB-ENG", "GB-SCT", "US", "JP", "KR"]);
    }
}
