//! In-memory document host.
//!
//! Behaves like a browser document for everything a manager does: sheets
//! exist only while their element is attached, detaching discards the
//! rules, and inserted rule text is checked to be exactly one style rule.
//! Useful for tests and for rendering styles on a server.

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::Arc;

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};
use parking_lot::Mutex;

use super::{RuleSheet, StyleHost};
use crate::config::StyleConfig;
use crate::{Error, Result};

/// Handle to a `<style>` element of a [`HeadlessDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "style#{}", self.0)
    }
}

/// A rule as stored by a headless sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessRule {
    /// The selector, trimmed.
    pub selector_text: String,
    /// The declaration block without braces, trimmed.
    pub style_text: String,
}

impl HeadlessRule {
    /// Serialized form of the rule.
    pub fn css_text(&self) -> String {
        format!("{} {{ {} }}", self.selector_text, self.style_text)
    }
}

#[derive(Debug, Default)]
struct StyleElement {
    attributes: Vec<(String, String)>,
    text_children: usize,
    rules: Vec<HeadlessRule>,
}

#[derive(Debug, Default)]
struct DocumentState {
    next_id: u64,
    head: Vec<ElementId>,
    elements: HashMap<ElementId, StyleElement>,
}

impl DocumentState {
    fn element(&self, id: ElementId) -> Result<&StyleElement> {
        self.elements
            .get(&id)
            .ok_or_else(|| Error::UnknownElement(id.to_string()))
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut StyleElement> {
        self.elements
            .get_mut(&id)
            .ok_or_else(|| Error::UnknownElement(id.to_string()))
    }

    fn is_attached(&self, id: ElementId) -> bool {
        self.head.contains(&id)
    }

    /// Rules of an attached element's sheet.
    fn sheet_rules_mut(&mut self, id: ElementId) -> Result<&mut Vec<HeadlessRule>> {
        if !self.is_attached(id) {
            self.element(id)?;
            return Err(Error::NoSheet);
        }
        Ok(&mut self.element_mut(id)?.rules)
    }
}

/// An in-memory document with a head of `<style>` elements.
///
/// Clones share the same document.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    state: Arc<Mutex<DocumentState>>,
}

impl HeadlessDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements attached to head, in document order.
    pub fn head_elements(&self) -> Vec<ElementId> {
        self.state.lock().head.clone()
    }

    /// Whether the element is attached to head.
    pub fn is_attached(&self, id: ElementId) -> bool {
        self.state.lock().is_attached(id)
    }

    /// Rules of the element's sheet. Empty for detached or unknown elements.
    pub fn rules(&self, id: ElementId) -> Vec<HeadlessRule> {
        let state = self.state.lock();
        if !state.is_attached(id) {
            return vec![];
        }
        state
            .elements
            .get(&id)
            .map(|el| el.rules.clone())
            .unwrap_or_default()
    }

    /// Number of text children of the element.
    pub fn text_children(&self, id: ElementId) -> usize {
        self.state
            .lock()
            .elements
            .get(&id)
            .map_or(0, |el| el.text_children)
    }

    /// Value of an attribute on the element.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<String> {
        let state = self.state.lock();
        let el = state.elements.get(&id)?;
        el.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.clone())
    }

    /// Number of elements the document knows about, attached or not.
    pub fn element_count(&self) -> usize {
        self.state.lock().elements.len()
    }

    /// Render every attached sheet as `<style>` markup, in head order.
    ///
    /// Attribute values are HTML-escaped and any `</style` inside a rule is
    /// CSS-escaped, so the output cannot close the element early.
    pub fn render_head(&self) -> String {
        let state = self.state.lock();
        let mut out = String::new();
        for id in &state.head {
            let Some(el) = state.elements.get(id) else {
                continue;
            };
            out.push_str("<style");
            for (name, value) in &el.attributes {
                let _ = write!(out, " {name}=\"");
                escape_attribute(value, &mut out);
                out.push('"');
            }
            out.push('>');
            for rule in &el.rules {
                escape_style_text(&rule.css_text(), &mut out);
                out.push('\n');
            }
            out.push_str("</style>\n");
        }
        out
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
}

/// Copy `text` into `out`, writing the `<` of every `</style` as `\3c `.
fn escape_style_text(text: &str, out: &mut String) {
    let bytes = text.as_bytes();
    let mut last = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let closes = b == b'<'
            && bytes
                .get(i..i + 7)
                .is_some_and(|s| s.eq_ignore_ascii_case(b"</style"));
        if closes {
            out.push_str(&text[last..i]);
            out.push_str("\\3c ");
            last = i + 1;
        }
    }
    out.push_str(&text[last..]);
}

impl StyleHost for HeadlessDocument {
    type Element = ElementId;
    type Sheet = HeadlessSheet;

    fn create_style_element(&self, config: &StyleConfig) -> Result<ElementId> {
        let mut state = self.state.lock();
        let id = ElementId(state.next_id);
        state.next_id += 1;

        let attributes = config
            .attributes()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        state.elements.insert(
            id,
            StyleElement {
                attributes,
                ..StyleElement::default()
            },
        );
        Ok(id)
    }

    fn append_to_head(&self, element: &ElementId) -> Result<()> {
        let mut state = self.state.lock();
        // The sheet is rebuilt from the element's (empty) text on attach.
        state.element_mut(*element)?.rules.clear();
        state.head.retain(|id| id != element);
        state.head.push(*element);
        Ok(())
    }

    fn ensure_text_child(&self, element: &ElementId) -> Result<()> {
        let mut state = self.state.lock();
        let el = state.element_mut(*element)?;
        if el.text_children == 0 {
            el.text_children = 1;
        }
        Ok(())
    }

    fn remove_from_head(&self, element: &ElementId) -> Result<()> {
        let mut state = self.state.lock();
        let Some(pos) = state.head.iter().position(|id| id == element) else {
            state.element(*element)?;
            return Err(Error::host("removeChild", "element is not a child of head"));
        };
        state.head.remove(pos);
        state.element_mut(*element)?.rules.clear();
        Ok(())
    }

    fn release_element(&self, element: &ElementId) -> Result<()> {
        let mut state = self.state.lock();
        if state.is_attached(*element) {
            return Err(Error::host("release", "element is still attached to head"));
        }
        state
            .elements
            .remove(element)
            .map(|_| ())
            .ok_or_else(|| Error::UnknownElement(element.to_string()))
    }

    fn sheet(&self, element: &ElementId) -> Result<HeadlessSheet> {
        let state = self.state.lock();
        state.element(*element)?;
        if !state.is_attached(*element) {
            return Err(Error::NoSheet);
        }
        Ok(HeadlessSheet {
            state: Arc::clone(&self.state),
            element: *element,
        })
    }
}

/// The sheet of an attached headless `<style>` element.
#[derive(Debug, Clone)]
pub struct HeadlessSheet {
    state: Arc<Mutex<DocumentState>>,
    element: ElementId,
}

impl HeadlessSheet {
    /// The element owning this sheet.
    pub fn element(&self) -> ElementId {
        self.element
    }
}

impl RuleSheet for HeadlessSheet {
    fn rule_count(&self) -> Result<usize> {
        let mut state = self.state.lock();
        Ok(state.sheet_rules_mut(self.element)?.len())
    }

    fn insert_rule(&self, rule: &str, index: usize) -> Result<usize> {
        let mut state = self.state.lock();
        let rules = state.sheet_rules_mut(self.element)?;
        if index > rules.len() {
            return Err(Error::index_size(index, rules.len()));
        }
        let parsed = parse_style_rule(rule)?;
        rules.insert(index, parsed);
        Ok(index)
    }

    fn delete_rule(&self, index: usize) -> Result<()> {
        let mut state = self.state.lock();
        let rules = state.sheet_rules_mut(self.element)?;
        if index >= rules.len() {
            return Err(Error::index_size(index, rules.len()));
        }
        rules.remove(index);
        Ok(())
    }
}

/// Check that `text` is exactly one `selector { block }` rule and split it.
fn parse_style_rule(text: &str) -> Result<HeadlessRule> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);

    parser.skip_whitespace();
    let start = parser.position();
    parser
        .parse_until_before(cssparser::Delimiter::CurlyBracketBlock, |p| {
            while p.next().is_ok() {}
            Ok::<_, CssParseError<'_, ()>>(())
        })
        .map_err(|_| Error::invalid_rule(text, "malformed selector"))?;

    let selector_text = parser.slice_from(start).trim().to_string();
    if selector_text.is_empty() {
        return Err(Error::invalid_rule(text, "missing selector"));
    }
    if selector_text.starts_with('@') {
        return Err(Error::invalid_rule(text, "at-rules are not supported"));
    }

    match parser.next() {
        Ok(Token::CurlyBracketBlock) => {}
        _ => return Err(Error::invalid_rule(text, "expected '{' after selector")),
    }

    let style_text = parser
        .parse_nested_block(|p| {
            let block_start = p.position();
            while p.next().is_ok() {}
            Ok::<_, CssParseError<'_, ()>>(p.slice_from(block_start).trim().to_string())
        })
        .map_err(|_| Error::invalid_rule(text, "malformed declaration block"))?;

    if !parser.is_exhausted() {
        return Err(Error::invalid_rule(text, "unexpected content after rule"));
    }

    Ok(HeadlessRule {
        selector_text,
        style_text,
    })
}
