use serde::{Deserialize, Serialize};

use super::sections::{SectionId, SectionLayout, SectionList};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Vertical offset past which the header switches to its scrolled style.
    pub scrolled_threshold: f64,
    /// Viewport line a section has to straddle to count as active.
    pub activation_line: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            activation_line: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
    pub active_section: SectionId,
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: SectionList,
    config: ScrollConfig,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(sections: SectionList, config: ScrollConfig) -> Self {
        let state = ScrollState {
            scrolled_past_threshold: false,
            active_section: sections.first(),
        };
        Self {
            sections,
            config,
            state,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn config(&self) -> ScrollConfig {
        self.config
    }

    /// Recomputes the scroll state for a new vertical offset.
    ///
    /// Returns the new state only if it differs from the previous one. When no section
    /// straddles the activation line the previous active section is kept.
    pub fn observe(&mut self, offset: f64, layout: &impl SectionLayout) -> Option<ScrollState> {
        let next = ScrollState {
            scrolled_past_threshold: offset > self.config.scrolled_threshold,
            active_section: self
                .active_under_line(layout)
                .unwrap_or(self.state.active_section),
        };
        if next == self.state {
            return None;
        }
        if next.active_section != self.state.active_section {
            log::debug!(
                "active section {} -> {}",
                self.state.active_section,
                next.active_section
            );
        }
        self.state = next;
        Some(next)
    }

    fn active_under_line(&self, layout: &impl SectionLayout) -> Option<SectionId> {
        let line = self.config.activation_line;
        self.sections.iter().find(|id| {
            layout
                .section_box(*id)
                .is_some_and(|section| section.crosses(line))
        })
    }
}
