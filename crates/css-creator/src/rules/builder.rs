//! Rule specifications, the input to [`CssCreator::add_rules`].
//!
//! [`CssCreator::add_rules`]: crate::CssCreator::add_rules

use super::{Declaration, Rule};

/// A selector with an ordered list of declarations, not yet flattened.
///
/// There are two ways to build one:
///
/// ```
/// use css_creator::RuleSpec;
///
/// // One declaration at a time
/// let heading = RuleSpec::new("h2")
///     .declare("color", "red")
///     .declare_important("background-color", "green");
///
/// // From an existing list
/// let class = RuleSpec::from_declarations(".my-class", [("background-color", "yellow")]);
/// # let _ = (heading, class);
/// ```
///
/// Declaration order is kept: CSS is order dependent, so a later declaration
/// of the same property wins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct RuleSpec {
    selector: String,
    declarations: Vec<Declaration>,
}

impl RuleSpec {
    /// Create a specification with no declarations.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: vec![],
        }
    }

    /// Create a specification from a list of declarations.
    pub fn from_declarations<I, D>(selector: impl Into<String>, declarations: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Declaration>,
    {
        Self {
            selector: selector.into(),
            declarations: declarations.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a declaration.
    pub fn declaration(mut self, declaration: impl Into<Declaration>) -> Self {
        self.declarations.push(declaration.into());
        self
    }

    /// Add a `property:value` declaration.
    pub fn declare(self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declaration(Declaration::new(property, value))
    }

    /// Add a `property:value !important` declaration.
    pub fn declare_important(
        self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.declaration(Declaration::important(property, value))
    }

    /// Add a declaration whose value may be absent. An absent value is
    /// skipped just like an empty one.
    pub fn declare_opt<V: Into<String>>(
        self,
        property: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        let value = value.map(Into::into).unwrap_or_default();
        self.declaration(Declaration::new(property, value))
    }

    /// The selector text.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The declarations in input order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Build the flattened declaration block, skipping blank values.
    pub fn declaration_block(&self) -> String {
        let mut block = String::new();
        for decl in &self.declarations {
            decl.write_line(&mut block);
        }
        block
    }

    /// Convert into a stored rule, or `None` when every value is blank.
    pub fn into_rule(self) -> Option<Rule> {
        let block = self.declaration_block();
        if block.is_empty() {
            return None;
        }
        Some(Rule::new(self.selector, block))
    }
}
