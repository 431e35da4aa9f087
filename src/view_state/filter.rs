use std::{fmt, str::FromStr, sync::Arc};

use crate::catalog::{CatalogError, CatalogItem, Category};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "bx-grid-alt",
            CategoryFilter::Only(c) => c.icon(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Items matching `filter`, in catalog order.
pub fn filter_items<'a>(
    items: &'a [CatalogItem],
    filter: CategoryFilter,
) -> impl Iterator<Item = &'a CatalogItem> + 'a {
    items.iter().filter(move |item| filter.matches(item))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub projects: usize,
    pub certificates: usize,
    pub live_projects: usize,
}

#[derive(Debug, Clone)]
pub struct CatalogFilter {
    catalog: Arc<[CatalogItem]>,
    active: CategoryFilter,
}

impl CatalogFilter {
    pub fn new(catalog: Arc<[CatalogItem]>) -> Self {
        Self {
            catalog,
            active: CategoryFilter::All,
        }
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        if self.active != filter {
            log::debug!("portfolio filter {} -> {}", self.active, filter);
        }
        self.active = filter;
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        filter_items(&self.catalog, self.active)
    }

    /// `All` followed by each category present in the catalog, in order of first appearance.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut out = vec![CategoryFilter::All];
        for item in self.catalog.iter() {
            let filter = CategoryFilter::Only(item.category);
            if !out.contains(&filter) {
                out.push(filter);
            }
        }
        out
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog
            .iter()
            .fold(CatalogStats::default(), |mut stats, item| {
                if item.is_certificate() {
                    stats.certificates += 1;
                } else {
                    stats.projects += 1;
                    if !item.is_coming_soon() && item.link.is_some() {
                        stats.live_projects += 1;
                    }
                }
                stats
            })
    }
}
