//! Embedded holiday names.
//!
//! The global translation table ships inside the binary as JSON and is
//! parsed once per process on first use.

use std::sync::{Arc, OnceLock};

use kalends_core::{HolidayResult, TranslationCatalog};

const EMBEDDED_TRANSLATIONS: &str = include_str!("../data/translations.json");

static CATALOG: OnceLock<HolidayResult<Arc<TranslationCatalog>>> = OnceLock::new();

/// The embedded translation catalog.
///
/// # Errors
///
/// Returns the parse error of the embedded table, on every call, if it is
/// malformed.
pub fn embedded() -> HolidayResult<Arc<TranslationCatalog>> {
    CATALOG
        .get_or_init(|| {
            let catalog = TranslationCatalog::from_json(EMBEDDED_TRANSLATIONS)?;
            tracing::debug!(keys = catalog.len(), "parsed embedded translations");
            Ok(Arc::new(catalog))
        })
        .clone()
}
