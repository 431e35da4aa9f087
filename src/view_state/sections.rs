use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Services,
    Portfolio,
    Pricing,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Pricing,
        SectionId::Contact,
    ];

    /// The element id the section is rendered under.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Pricing => "pricing",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Services => "Services",
            SectionId::Portfolio => "Projects",
            SectionId::Pricing => "Get a Quote",
            SectionId::Contact => "Contact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SectionId::Home => "bx-home",
            SectionId::Services => "bx-briefcase",
            SectionId::Portfolio => "bx-folder",
            SectionId::Pricing => "bx-calculator",
            SectionId::Contact => "bx-message",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionListError {
    #[error("section list must not be empty")]
    Empty,
    #[error("section `{0}` appears more than once")]
    Duplicate(SectionId),
    #[error("unknown section `{0}`")]
    Unknown(String),
}

impl FromStr for SectionId {
    type Err = SectionListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SectionListError::Unknown(s.to_string()))
    }
}

/// Ordered, non-empty, duplicate-free list of the sections present on the page.
///
/// Shared by scroll tracking (scan order for the activation line) and navigation
/// (the set of valid targets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SectionId>", into = "Vec<SectionId>")]
pub struct SectionList(Arc<[SectionId]>);

impl SectionList {
    pub fn new(ids: Vec<SectionId>) -> Result<Self, SectionListError> {
        if ids.is_empty() {
            return Err(SectionListError::Empty);
        }
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(SectionListError::Duplicate(*id));
            }
        }
        Ok(Self(ids.into()))
    }

    pub fn first(&self) -> SectionId {
        // non-empty by construction
        self.0[0]
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for SectionList {
    fn default() -> Self {
        Self(SectionId::ALL.into())
    }
}

impl TryFrom<Vec<SectionId>> for SectionList {
    type Error = SectionListError;

    fn try_from(value: Vec<SectionId>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionList> for Vec<SectionId> {
    fn from(value: SectionList) -> Self {
        value.0.to_vec()
    }
}

/// Viewport-relative vertical extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn crosses(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Read access to where sections currently sit in the viewport.
pub trait SectionLayout {
    /// `None` when the section is not rendered.
    fn section_box(&self, id: SectionId) -> Option<SectionBox>;
}

impl<F> SectionLayout for F
where
    F: Fn(SectionId) -> Option<SectionBox>,
{
    fn section_box(&self, id: SectionId) -> Option<SectionBox> {
        self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_list_rejects_empty_and_duplicates() {
        assert_eq!(SectionList::new(vec![]), Err(SectionListError::Empty));
        assert_eq!(
            SectionList::new(vec![SectionId::Home, SectionId::Pricing, SectionId::Home]),
            Err(SectionListError::Duplicate(SectionId::Home))
        );
        let list = SectionList::new(vec![SectionId::Contact, SectionId::Home]).unwrap();
        assert_eq!(list.first(), SectionId::Contact);
        assert!(!list.contains(SectionId::Services));
    }

    #[test]
    fn test_section_list_deserializes_through_validation() {
        let list: SectionList = serde_json::from_str(r#"["home","portfolio"]"#).unwrap();
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec![SectionId::Home, SectionId::Portfolio]
        );
        assert!(serde_json::from_str::<SectionList>("[]").is_err());
        assert!(serde_json::from_str::<SectionList>(r#"["home","home"]"#).is_err());
    }

    #[test]
    fn test_section_id_round_trips_through_dom_id() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert!("about".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_box_crossing_is_inclusive() {
        assert!(SectionBox::new(100.0, 400.0).crosses(100.0));
        assert!(SectionBox::new(-300.0, 100.0).crosses(100.0));
        assert!(!SectionBox::new(101.0, 400.0).crosses(100.0));
        assert!(!SectionBox::new(-300.0, 99.5).crosses(100.0));
    }
}
