//! Options for the style element created on mount.

/// Attributes applied to the `<style>` element each time a manager mounts.
///
/// # Example
///
/// ```
/// use css_creator::StyleConfig;
///
/// let config = StyleConfig::new().id("app-theme").nonce("r4nd0m");
/// assert_eq!(config.id.as_deref(), Some("app-theme"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleConfig {
    /// Value for the element's `id` attribute.
    pub id: Option<String>,
    /// Value for the element's `nonce` attribute, for pages with a
    /// Content-Security-Policy on styles.
    pub nonce: Option<String>,
}

impl StyleConfig {
    /// Create a config with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the CSP nonce.
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// The attributes to set, in a stable order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("id", self.id.as_deref()), ("nonce", self.nonce.as_deref())]
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}
