//! Build CSS rules in code and mirror them into a live stylesheet.
//!
//! A [`CssCreator`] holds an ordered list of rules, each a selector with a
//! block of `property:value;` declarations. It can be mounted into a
//! document, which attaches a `<style>` element and keeps its sheet in sync
//! as rules are added, cleared or replaced.
//!
//! The document is injected as a [`StyleHost`](host::StyleHost):
//!
//! - [`HeadlessDocument`](host::HeadlessDocument): in memory, for tests and
//!   server-side rendering
//! - `WebDocument` (feature `web`): a browser document through `web-sys`
//!
//! # Example
//!
//! ```
//! use css_creator::prelude::*;
//!
//! let document = HeadlessDocument::new();
//! let mut creator = CssCreator::new(document.clone());
//! creator.mount()?;
//!
//! creator.add_rules([
//!     RuleSpec::new("h2")
//!         .declare("color", "red")
//!         .declare_important("background-color", "green"),
//!     RuleSpec::from_declarations(".my-class", [("background-color", "yellow")]),
//! ])?;
//!
//! let element = *creator.element().unwrap();
//! assert_eq!(document.rules(element).len(), 2);
//! # Ok::<(), css_creator::Error>(())
//! ```

pub mod config;
pub mod host;
pub mod rules;

mod creator;
mod error;

pub use config::StyleConfig;
pub use creator::CssCreator;
pub use error::{Error, Result};
pub use rules::{Declaration, Rule, RuleSpec};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::StyleConfig;
    pub use crate::creator::CssCreator;
    pub use crate::host::{HeadlessDocument, RuleSheet, StyleHost};
    pub use crate::rules::{Declaration, Rule, RuleSpec};

    #[cfg(feature = "web")]
    pub use crate::host::WebDocument;
}
