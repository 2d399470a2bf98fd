//! Host environments a [`CssCreator`](crate::CssCreator) mirrors its rules into.
//!
//! A host is split in two: [`StyleHost`] owns the document side (creating,
//! attaching and detaching `<style>` elements) and [`RuleSheet`] is the
//! stylesheet behind one such element.
//!
//! - [`HeadlessDocument`] keeps everything in memory.
//! - `WebDocument` (feature `web`) drives a browser document through `web-sys`.

mod headless;

#[cfg(feature = "web")]
mod web;

pub use headless::{ElementId, HeadlessDocument, HeadlessRule, HeadlessSheet};

#[cfg(feature = "web")]
pub use web::{WebDocument, WebSheet};

use crate::Result;
use crate::config::StyleConfig;

/// Document-side operations needed to mount a stylesheet.
pub trait StyleHost {
    /// Handle to a `<style>` element.
    type Element: Clone;
    /// The stylesheet behind an attached element.
    type Sheet: RuleSheet;

    /// Create a detached `<style>` element carrying the configured attributes.
    fn create_style_element(&self, config: &StyleConfig) -> Result<Self::Element>;

    /// Attach the element as the last child of the document head.
    fn append_to_head(&self, element: &Self::Element) -> Result<()>;

    /// Give the element an empty text child if it has no children.
    ///
    /// Some engines only create the sheet once the element has content.
    fn ensure_text_child(&self, element: &Self::Element) -> Result<()>;

    /// Remove the element from the document head.
    fn remove_from_head(&self, element: &Self::Element) -> Result<()>;

    /// Forget a detached element that will not be attached again.
    ///
    /// Hosts whose elements are garbage collected need not do anything.
    fn release_element(&self, _element: &Self::Element) -> Result<()> {
        Ok(())
    }

    /// Resolve the stylesheet of an attached element.
    fn sheet(&self, element: &Self::Element) -> Result<Self::Sheet>;
}

/// The rule list of a live stylesheet.
pub trait RuleSheet {
    /// Number of rules currently in the sheet.
    fn rule_count(&self) -> Result<usize>;

    /// Insert `rule` (`selector{block}`) at `index`, returning the index.
    fn insert_rule(&self, rule: &str, index: usize) -> Result<usize>;

    /// Delete the rule at `index`.
    fn delete_rule(&self, index: usize) -> Result<()>;
}
