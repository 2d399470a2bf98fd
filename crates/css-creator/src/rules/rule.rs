//! Stored rule definition.

/// A selector paired with its flattened declaration block.
///
/// Rules are only produced from a [`RuleSpec`](super::RuleSpec) with at
/// least one non-blank declaration, so the block is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    selector: String,
    declarations: String,
}

impl Rule {
    pub(crate) fn new(selector: String, declarations: String) -> Self {
        debug_assert!(!declarations.is_empty());
        Self {
            selector,
            declarations,
        }
    }

    /// The selector text.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The declaration block, one `property:value;` line per declaration.
    pub fn declarations(&self) -> &str {
        &self.declarations
    }

    /// The text handed to a sheet's insert interface: `selector{block}`.
    pub fn css_text(&self) -> String {
        format!("{}{{{}}}", self.selector, self.declarations)
    }
}
