use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::view_state::{Handoff, Scroller, SectionBox, SectionId, SectionLayout};

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Reads section boxes from the rendered document.
#[derive(Debug, Clone, Copy)]
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn section_box(&self, id: SectionId) -> Option<SectionBox> {
        let rect = document()
            .get_element_by_id(id.as_str())?
            .get_bounding_client_rect();
        Some(SectionBox::new(rect.top(), rect.bottom()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WindowScroller;

impl Scroller for WindowScroller {
    fn section_top(&self, id: SectionId) -> Option<f64> {
        let rect = document()
            .get_element_by_id(id.as_str())?
            .get_bounding_client_rect();
        Some(rect.top() + scroll_y())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BrowserHandoff;

impl Handoff for BrowserHandoff {
    fn confirm(&self, prompt: &str) -> bool {
        window().confirm_with_message(prompt).unwrap_or(false)
    }

    fn open(&self, url: &str) -> bool {
        matches!(window().open_with_url_and_target(url, "_blank"), Ok(Some(_)))
    }

    async fn copy_to_clipboard(&self, text: &str) -> bool {
        let clipboard = window().navigator().clipboard();
        // navigator.clipboard is undefined outside secure contexts
        if clipboard.is_undefined() {
            return false;
        }
        JsFuture::from(clipboard.write_text(text)).await.is_ok()
    }

    fn notify(&self, message: &str) {
        if window().alert_with_message(message).is_err() {
            log::warn!("couldn't show alert: {message}");
        }
    }
}
