//! Filterable model picker state.

use crate::catalog::CatalogEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorAction {
    Select(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorRow<'a> {
    pub entry: &'a CatalogEntry,
    pub short_path: String,
    pub is_current: bool,
}

/// Holds only the search query. The active selection is owned by the
/// coordinator and passed in when rows are built.
#[derive(Debug, Clone, Default)]
pub struct ModelSelector {
    query: String,
}

impl ModelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Text-edit binding for the search box.
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn visible<'a>(&self, catalog: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        filter_catalog(catalog, &self.query)
    }

    pub fn rows<'a>(&self, catalog: &'a [CatalogEntry], current: Option<&str>) -> Vec<SelectorRow<'a>> {
        self.visible(catalog)
            .into_iter()
            .map(|entry| SelectorRow {
                entry,
                short_path: entry.short_path(),
                is_current: current == Some(entry.resource_path),
            })
            .collect()
    }

    pub fn pick(&self, entry: &CatalogEntry) -> SelectorAction {
        SelectorAction::Select(entry.resource_path.to_string())
    }
}

/// Entries whose display name contains `query`, ignoring case, in catalog
/// order.
pub fn filter_catalog<'a>(catalog: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| entry.display_name.to_lowercase().contains(&needle))
        .collect()
}
