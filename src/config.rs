use std::{sync::LazyLock, time::Duration};

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::Content,
    view_state::{
        ContactSettings, InvalidNumber, RotatorError, ScrollConfig, SectionList, TextRotator,
        HEADER_OFFSET, ROTATION_INTERVAL,
    },
};

pub const FAVICON: &str = "/favicon.svg";

pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| match load_site_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("couldn't load site config, using defaults: {e}");
        SiteConfig::default()
    }
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("content file `{0}` not found")]
    NotFound(String),
    #[error("couldn't parse site config: {0}")]
    ParseError(String),
    #[error(transparent)]
    Rotator(#[from] RotatorError),
    #[error(transparent)]
    Contact(#[from] InvalidNumber),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub sections: SectionList,
    pub scroll: ScrollConfig,
    pub header_offset: f64,
    /// Minimum time between two scroll recomputations.
    pub scroll_throttle_ms: f64,
    pub headlines: Vec<String>,
    pub rotation_interval_ms: u64,
    pub contact: ContactSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Lumen Dev Studio".to_string(),
            tagline: "Advanced digital development solutions".to_string(),
            sections: SectionList::default(),
            scroll: ScrollConfig::default(),
            header_offset: HEADER_OFFSET,
            scroll_throttle_ms: 50.0,
            headlines: vec![
                "Advanced development solutions".to_string(),
                "Responsive websites".to_string(),
                "Custom-built applications".to_string(),
                "Memorable digital experiences".to_string(),
            ],
            rotation_interval_ms: ROTATION_INTERVAL.as_millis() as u64,
            contact: ContactSettings::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        // surface an unusable headline list at load time rather than at mount
        config.rotator()?;
        config.contact.validate()?;
        Ok(config)
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn rotator(&self) -> Result<TextRotator, RotatorError> {
        TextRotator::with_interval(self.headlines.clone(), self.rotation_interval())
    }
}

pub fn load_site_config() -> Result<SiteConfig, ConfigError> {
    let file = Content::get("site.json")
        .ok_or_else(|| ConfigError::NotFound("site.json".to_string()))?;
    let json =
        std::str::from_utf8(&file.data).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    SiteConfig::from_json(json)
}

/// Year the site was built, shown in the footer.
///
/// Taken from the build stamp so the server render and the hydrated page agree.
pub fn build_year() -> i32 {
    year_of(env!("BUILD_TIME"))
}

fn year_of(stamp: &str) -> i32 {
    match DateTime::parse_from_rfc3339(stamp) {
        Ok(dt) => dt.year(),
        Err(e) => {
            log::warn!("bad build stamp `{stamp}`: {e}");
            Utc::now().year()
        }
    }
}
