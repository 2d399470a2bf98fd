//! Single property declaration.

use std::fmt;

/// A `property: value` pair, optionally flagged `!important`.
///
/// Neither the property nor the value is validated; both are emitted as
/// given. A declaration with an empty value is skipped when a declaration
/// block is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property name.
    pub property: String,
    /// The property value.
    pub value: String,
    /// Whether the declaration carries `!important`.
    pub important: bool,
}

impl Declaration {
    /// Create a normal declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Create an `!important` declaration.
    pub fn important(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            important: true,
            ..Self::new(property, value)
        }
    }

    /// Whether this declaration contributes nothing to a block.
    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
    }

    /// Append this declaration's block line to `out`, unless it is blank.
    pub(crate) fn write_line(&self, out: &mut String) {
        if self.is_blank() {
            return;
        }
        out.push_str(&self.to_string());
        out.push('\n');
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

impl<P: Into<String>, V: Into<String>> From<(P, V)> for Declaration {
    fn from((property, value): (P, V)) -> Self {
        Self::new(property, value)
    }
}

impl<P: Into<String>, V: Into<String>> From<(P, V, bool)> for Declaration {
    fn from((property, value, important): (P, V, bool)) -> Self {
        Self {
            important,
            ..Self::new(property, value)
        }
    }
}
