//! The site registry: the full set of configured site probe definitions.
//!
//! Loaded once at startup from the bundled JSON table (or any caller-provided
//! JSON document), validated record by record, and then shared read-only by
//! every concurrent probe.

mod category;
mod filter;
mod load;
mod site;

use std::sync::Arc;

pub use category::Category;
pub use filter::{apply as filter, FilterRules};
pub use load::from_json;
pub use site::SiteDefinition;

use crate::error_handling::RegistryError;

/// The bundled site table, embedded at compile time.
const BUILTIN_SITES: &str = include_str!("../../data/sites.json");

/// An immutable, ordered collection of site probe definitions.
///
/// Definitions are held behind `Arc` so probe results can keep a cheap
/// back-reference to their originating site without cloning patterns.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sites: Vec<Arc<SiteDefinition>>,
}

impl Registry {
    /// Loads the site table bundled with the binary.
    pub fn builtin() -> Result<Self, RegistryError> {
        from_json(BUILTIN_SITES)
    }

    pub(crate) fn from_sites(sites: Vec<SiteDefinition>) -> Self {
        Self {
            sites: sites.into_iter().map(Arc::new).collect(),
        }
    }

    pub(crate) fn from_shared(sites: Vec<Arc<SiteDefinition>>) -> Self {
        Self { sites }
    }

    /// Number of site definitions.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// True when the registry holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterates over the definitions in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<SiteDefinition>> {
        self.sites.iter()
    }
}
