//! Rule specifications and stored rules.

mod builder;
mod declaration;
mod rule;

pub use builder::RuleSpec;
pub use declaration::Declaration;
pub use rule::Rule;
