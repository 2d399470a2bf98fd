//! Browser document host over `web-sys`.
//!
//! This module is only available with the `web` feature.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleSheet, Document, Element, HtmlHeadElement, HtmlStyleElement};

use super::{RuleSheet, StyleHost};
use crate::config::StyleConfig;
use crate::{Error, Result};

fn js_error(operation: &'static str, value: JsValue) -> Error {
    Error::host(operation, format!("{value:?}"))
}

/// A browser document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// Wrap an existing document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window.
    pub fn from_window() -> Result<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or(Error::NoDocument)
    }

    /// The wrapped document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn head(&self) -> Result<HtmlHeadElement> {
        self.document.head().ok_or(Error::MissingHead)
    }
}

impl StyleHost for WebDocument {
    type Element = Element;
    type Sheet = WebSheet;

    fn create_style_element(&self, config: &StyleConfig) -> Result<Element> {
        let element = self
            .document
            .create_element("style")
            .map_err(|e| js_error("createElement", e))?;
        for (name, value) in config.attributes() {
            element
                .set_attribute(name, value)
                .map_err(|e| js_error("setAttribute", e))?;
        }
        Ok(element)
    }

    fn append_to_head(&self, element: &Element) -> Result<()> {
        self.head()?
            .append_child(element)
            .map_err(|e| js_error("appendChild", e))?;
        Ok(())
    }

    fn ensure_text_child(&self, element: &Element) -> Result<()> {
        if element.first_child().is_none() {
            let text = self.document.create_text_node("");
            element
                .append_child(&text)
                .map_err(|e| js_error("appendChild", e))?;
        }
        Ok(())
    }

    fn remove_from_head(&self, element: &Element) -> Result<()> {
        self.head()?
            .remove_child(element)
            .map_err(|e| js_error("removeChild", e))?;
        Ok(())
    }

    fn sheet(&self, element: &Element) -> Result<WebSheet> {
        let style = element
            .dyn_ref::<HtmlStyleElement>()
            .ok_or(Error::NoSheet)?;
        let sheet = style
            .sheet()
            .ok_or(Error::NoSheet)?
            .dyn_into::<CssStyleSheet>()
            .map_err(|_| Error::NoSheet)?;
        Ok(WebSheet { sheet })
    }
}

/// The `CSSStyleSheet` of an attached `<style>` element.
#[derive(Debug, Clone)]
pub struct WebSheet {
    sheet: CssStyleSheet,
}

impl RuleSheet for WebSheet {
    fn rule_count(&self) -> Result<usize> {
        let rules = self
            .sheet
            .css_rules()
            .map_err(|e| js_error("cssRules", e))?;
        Ok(rules.length() as usize)
    }

    fn insert_rule(&self, rule: &str, index: usize) -> Result<usize> {
        let index = u32::try_from(index).map_err(|_| Error::index_size(index, u32::MAX as usize))?;
        let inserted = self
            .sheet
            .insert_rule_with_index(rule, index)
            .map_err(|e| js_error("insertRule", e))?;
        Ok(inserted as usize)
    }

    fn delete_rule(&self, index: usize) -> Result<()> {
        let index = u32::try_from(index).map_err(|_| Error::index_size(index, u32::MAX as usize))?;
        self.sheet
            .delete_rule(index)
            .map_err(|e| js_error("deleteRule", e))
    }
}
