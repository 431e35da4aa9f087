//! Client-side view state, kept free of the DOM.
//!
//! Each controller owns one slice of state. Browser access comes in through the
//! [`SectionLayout`], [`Scroller`] and [`Handoff`] capabilities so the logic runs
//! the same under `cargo test` as in the hydrated page.

pub mod contact;
pub mod filter;
pub mod nav;
pub mod quote;
pub mod rotator;
pub mod scroll;
pub mod sections;

pub use contact::{
    ContactForm, ContactFormController, ContactSettings, DispatchOutcome, Field, Handoff,
    HandoffFailure, InvalidNumber, Submission, ValidationError,
};
pub use filter::{CatalogFilter, CatalogStats, CategoryFilter};
pub use nav::{MenuState, NavigationController, NavigationError, Scroller, HEADER_OFFSET};
pub use quote::{QuoteSelector, QuoteView};
pub use rotator::{RotatorError, TextRotator, ROTATION_INTERVAL};
pub use scroll::{ScrollConfig, ScrollState, ScrollTracker};
pub use sections::{SectionBox, SectionId, SectionLayout, SectionList, SectionListError};
