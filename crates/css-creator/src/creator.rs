//! The rule set manager.

use crate::Result;
use crate::config::StyleConfig;
use crate::host::{RuleSheet, StyleHost};
use crate::rules::{Rule, RuleSpec};

/// An ordered set of CSS rules, optionally mirrored into a live stylesheet.
///
/// Rules are kept in insertion order, which is also their cascade order.
/// While mounted, every mutation is applied to the host sheet immediately;
/// while detached, only the in-memory rules change and they are pushed on
/// the next [`mount`](Self::mount).
///
/// # Example
///
/// ```
/// use css_creator::prelude::*;
///
/// let document = HeadlessDocument::new();
/// let mut creator = CssCreator::new(document.clone());
///
/// creator
///     .add_rules([
///         RuleSpec::new("h2")
///             .declare("color", "red")
///             .declare_important("background-color", "green"),
///         RuleSpec::new(".my-class").declare("background-color", "yellow"),
///     ])?
///     .mount()?;
///
/// assert!(creator.is_mounted());
/// assert_eq!(document.head_elements().len(), 1);
/// # Ok::<(), css_creator::Error>(())
/// ```
#[derive(Debug)]
pub struct CssCreator<H: StyleHost> {
    host: H,
    config: StyleConfig,
    rules: Vec<Rule>,
    element: Option<H::Element>,
    /// Whether `element` was created by `mount` and is released on unmount.
    owns_element: bool,
}

impl<H: StyleHost> CssCreator<H> {
    /// Create a detached manager with no rules.
    pub fn new(host: H) -> Self {
        Self::with_config(host, StyleConfig::default())
    }

    /// Create a detached manager whose style elements carry `config`.
    pub fn with_config(host: H, config: StyleConfig) -> Self {
        Self {
            host,
            config,
            rules: vec![],
            element: None,
            owns_element: false,
        }
    }

    /// Create a manager bound to an existing, already attached style element.
    ///
    /// The manager counts as mounted; new rules go into that element's sheet
    /// and [`unmount`](Self::unmount) removes it from the head. The element
    /// stays known to the host so the caller can attach it again.
    pub fn with_element(host: H, element: H::Element) -> Self {
        Self {
            element: Some(element),
            ..Self::new(host)
        }
    }

    /// Whether the rules are mirrored into a live stylesheet.
    pub fn is_mounted(&self) -> bool {
        self.element.is_some()
    }

    /// Attach a new stylesheet to the document and push every rule into it.
    ///
    /// Does nothing when already mounted.
    pub fn mount(&mut self) -> Result<&mut Self> {
        if self.is_mounted() {
            return Ok(self);
        }

        let element = self.host.create_style_element(&self.config)?;
        if let Err(err) = self.host.append_to_head(&element) {
            self.host.release_element(&element).ok();
            return Err(err);
        }
        // Attached from here on, so a later unmount can take it out again.
        self.owns_element = true;
        let element = self.element.insert(element);
        self.host.ensure_text_child(element)?;

        tracing::debug!(rules = self.rules.len(), "mounting stylesheet");
        self.push_rules(&self.rules)?;
        Ok(self)
    }

    /// Remove the stylesheet from the document. The rules are kept.
    ///
    /// Does nothing when not mounted.
    pub fn unmount(&mut self) -> Result<&mut Self> {
        let Some(element) = &self.element else {
            return Ok(self);
        };
        self.host.remove_from_head(element)?;

        // Detached: the manager is unmounted even if releasing fails.
        if let Some(element) = self.element.take()
            && std::mem::take(&mut self.owns_element)
        {
            self.host.release_element(&element)?;
        }
        tracing::debug!(rules = self.rules.len(), "unmounted stylesheet");
        Ok(self)
    }

    /// Append rules built from `specs`, in order.
    ///
    /// Specifications whose declarations all have empty values are dropped.
    /// When mounted, only the newly appended rules are inserted, each at
    /// the end of the sheet.
    pub fn add_rules<I>(&mut self, specs: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = RuleSpec>,
    {
        let start = self.rules.len();
        for spec in specs {
            let selector = spec.selector().to_string();
            match spec.into_rule() {
                Some(rule) => self.rules.push(rule),
                None => tracing::trace!(%selector, "dropping rule with no declarations"),
            }
        }

        self.push_rules(&self.rules[start..])?;
        Ok(self)
    }

    /// Append a single rule. See [`add_rules`](Self::add_rules).
    pub fn add_rule(&mut self, spec: RuleSpec) -> Result<&mut Self> {
        self.add_rules([spec])
    }

    /// Remove every rule, from memory and from the mounted sheet.
    pub fn clear(&mut self) -> Result<&mut Self> {
        self.rules.clear();
        self.remove_all_rules()?;
        Ok(self)
    }

    /// Replace every rule with a copy of `other`'s rules.
    ///
    /// When mounted, the sheet ends up holding exactly the copied rules.
    pub fn replace_from<O: StyleHost>(&mut self, other: &CssCreator<O>) -> Result<&mut Self> {
        self.clear()?;
        self.rules = other.rules.clone();
        tracing::debug!(rules = self.rules.len(), "replaced rules");
        self.push_rules(&self.rules)?;
        Ok(self)
    }

    /// The rules in cascade order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The mounted style element, if any.
    pub fn element(&self) -> Option<&H::Element> {
        self.element.as_ref()
    }

    /// The host environment.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The style element configuration.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Render all rules as stylesheet text, one `selector{block}` per rule.
    pub fn to_css(&self) -> String {
        self.rules.iter().map(Rule::css_text).collect()
    }

    /// Insert `rules` at the end of the mounted sheet, in order.
    fn push_rules(&self, rules: &[Rule]) -> Result<()> {
        let Some(element) = &self.element else {
            return Ok(());
        };
        if rules.is_empty() {
            return Ok(());
        }

        let sheet = self.host.sheet(element)?;
        for rule in rules {
            let index = sheet.rule_count()?;
            sheet.insert_rule(&rule.css_text(), index)?;
            tracing::trace!(selector = rule.selector(), index, "inserted rule");
        }
        Ok(())
    }

    /// Delete every rule from the mounted sheet.
    fn remove_all_rules(&self) -> Result<()> {
        let Some(element) = &self.element else {
            return Ok(());
        };

        let sheet = self.host.sheet(element)?;
        let count = sheet.rule_count()?;
        for _ in 0..count {
            sheet.delete_rule(0)?;
        }
        tracing::debug!(removed = count, "cleared stylesheet");
        Ok(())
    }
}
