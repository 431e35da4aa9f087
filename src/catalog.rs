use std::{
    collections::HashSet,
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock},
};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub static GLOBAL_CATALOG: LazyLock<Arc<[CatalogItem]>> = LazyLock::new(|| match load_catalog() {
    Ok(items) => items.into(),
    Err(e) => {
        log::error!("couldn't load catalog, rendering an empty gallery: {e}");
        Arc::from([])
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Websites,
    Applications,
    Games,
    Certificates,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Websites,
        Category::Applications,
        Category::Games,
        Category::Certificates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Websites => "websites",
            Category::Applications => "applications",
            Category::Games => "games",
            Category::Certificates => "certificates",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Websites => "Websites",
            Category::Applications => "Apps",
            Category::Games => "Games",
            Category::Certificates => "Certificates",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Websites => "bx-world",
            Category::Applications => "bx-mobile",
            Category::Games => "bx-joystick",
            Category::Certificates => "bx-medal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Project,
    Certificate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub kind: ItemKind,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: Option<ItemStatus>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    pub fn is_certificate(&self) -> bool {
        self.kind == ItemKind::Certificate
    }

    pub fn is_coming_soon(&self) -> bool {
        self.status == Some(ItemStatus::ComingSoon)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("content file `{0}` not found")]
    NotFound(String),
    #[error("couldn't parse catalog: {0}")]
    ParseError(String),
    #[error("catalog id {0} is used more than once")]
    DuplicateId(u32),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}

pub fn parse_catalog(json: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let items: Vec<CatalogItem> =
        serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }
    }
    Ok(items)
}

pub fn load_catalog() -> Result<Vec<CatalogItem>, CatalogError> {
    let file = Content::get("catalog.json")
        .ok_or_else(|| CatalogError::NotFound("catalog.json".to_string()))?;
    let json = std::str::from_utf8(&file.data)
        .map_err(|e| CatalogError::ParseError(e.to_string()))?;
    parse_catalog(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let items = load_catalog().expect("embedded catalog should parse");
        assert!(!items.is_empty());
        assert!(items.iter().any(CatalogItem::is_certificate));
        assert!(items.iter().any(|i| i.category == Category::Games));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 1, "title": "A", "category": "games", "kind": "project", "image": "a.png", "description": ""},
            {"id": 1, "title": "B", "category": "websites", "kind": "project", "image": "b.png", "description": ""}
        ]"#;
        assert_eq!(parse_catalog(json), Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_unknown_category_fails_to_parse() {
        let json = r#"[{"id": 1, "title": "A", "category": "websites , applications", "kind": "project", "image": "a.png", "description": ""}]"#;
        assert!(matches!(parse_catalog(json), Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"[{"id": 7, "title": "Pacman", "category": "games", "kind": "project", "image": "p.png", "description": "d", "status": "coming-soon"}]"#;
        let items = parse_catalog(json).unwrap();
        assert!(items[0].is_coming_soon());
        assert!(items[0].tags.is_empty());
        assert_eq!(items[0].github, None);
        assert!(!items[0].external);
    }

    #[test]
    fn test_local_assets_ship_in_public() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let local = load_catalog()
            .unwrap()
            .into_iter()
            .map(|item| item.image)
            .chain([crate::config::FAVICON.to_string()])
            .filter_map(|path| path.strip_prefix('/').map(str::to_string))
            .collect::<Vec<_>>();
        assert!(!local.is_empty());
        for path in local {
            assert!(public.join(&path).is_file(), "missing public/{path}");
        }
    }
}
