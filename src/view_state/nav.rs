use thiserror::Error;

use super::sections::{SectionId, SectionList};

/// Default height of the fixed header the scroll target is offset by.
pub const HEADER_OFFSET: f64 = 80.0;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("section `{0}` is not on the page")]
    TargetMissing(SectionId),
}

/// Window scrolling capability.
pub trait Scroller {
    /// Document-relative top of the section, `None` if it is not rendered.
    fn section_top(&self, id: SectionId) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    sections: SectionList,
    header_offset: f64,
    menu: MenuState,
}

impl NavigationController {
    pub fn new(sections: SectionList, header_offset: f64) -> Self {
        Self {
            sections,
            header_offset,
            menu: MenuState::default(),
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn toggle_menu(&mut self) {
        self.menu.is_open = !self.menu.is_open;
    }

    pub fn close_menu(&mut self) {
        self.menu.is_open = false;
    }

    /// Smooth-scrolls to `id` and closes the menu.
    ///
    /// A section that is not on the page is ignored; the menu closes either way.
    /// Returns the scroll target when one was found.
    pub fn navigate(&mut self, id: SectionId, scroller: &impl Scroller) -> Option<f64> {
        let target = match self.scroll_target(id, scroller) {
            Ok(top) => {
                scroller.smooth_scroll_to(top);
                Some(top)
            }
            Err(e) => {
                log::debug!("navigation ignored: {e}");
                None
            }
        };
        self.close_menu();
        target
    }

    pub fn scroll_to_top(&mut self, scroller: &impl Scroller) {
        scroller.smooth_scroll_to(0.0);
        self.close_menu();
    }

    pub fn scroll_target(
        &self,
        id: SectionId,
        scroller: &impl Scroller,
    ) -> Result<f64, NavigationError> {
        if !self.sections.contains(id) {
            return Err(NavigationError::TargetMissing(id));
        }
        let top = scroller
            .section_top(id)
            .ok_or(NavigationError::TargetMissing(id))?;
        Ok((top - self.header_offset).max(0.0))
    }
}
