//! Application identity used to parameterize every directory computation.

/// Immutable description of an application.
///
/// Built once with [`Application::new`] and the `with_*` methods, then passed
/// by reference to the resolvers.
///
/// # Example
///
/// ```
/// use appdirs_core::Application;
///
/// let app = Application::new("Editor").with_author("Acme").with_version("2.0");
/// assert_eq!(app.author(), "Acme");
/// assert_eq!(app.version(), Some("2.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Application {
    name: String,
    author: Option<String>,
    version: Option<String>,
    roaming: bool,
}

impl Application {
    /// Create an identity with no author, no version and roaming disabled.
    ///
    /// `name` is not validated; an empty name yields a meaningless path.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: None,
            version: None,
            roaming: false,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub const fn with_roaming(mut self, roaming: bool) -> Self {
        self.roaming = roaming;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vendor directory used on Windows. Falls back to the name.
    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or(&self.name)
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Whether Windows data/config should use the roaming profile.
    pub const fn roaming(&self) -> bool {
        self.roaming
    }
}
