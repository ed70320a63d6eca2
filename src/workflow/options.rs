//! Options for a renumbering run

/// Options controlling a single renumbering run
///
/// Use [`RenumberOptions::builder`] to create instances; the default
/// renumbers only unprefixed files and skips no extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenumberOptions {
    force: bool,
    skip_extensions: Vec<String>,
    dry_run: bool,
}

impl RenumberOptions {
    /// Creates a new RenumberOptionsBuilder with default values
    pub fn builder() -> RenumberOptionsBuilder {
        RenumberOptionsBuilder::new()
    }

    /// Whether existing prefixes are stripped and every file renumbered
    pub fn force(&self) -> bool {
        self.force
    }

    /// Lowercased extensions, including their dot, that are left alone
    pub fn skip_extensions(&self) -> &[String] {
        &self.skip_extensions
    }

    /// Whether the plan is only reported and no file is renamed
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Checks whether files with the given lowercased extension are skipped
    ///
    /// Skip entries without a leading dot never match anything.
    pub fn skips_extension(&self, extension: &str) -> bool {
        self.skip_extensions
            .iter()
            .any(|skip| skip.starts_with('.') && skip == extension)
    }
}

/// Builder for creating RenumberOptions instances
#[derive(Debug, Clone, Default)]
pub struct RenumberOptionsBuilder {
    force: bool,
    skip_extensions: Vec<String>,
    dry_run: bool,
}

impl RenumberOptionsBuilder {
    pub fn new() -> RenumberOptionsBuilder {
        RenumberOptionsBuilder::default()
    }

    /// Sets force mode
    pub fn force(mut self, force: bool) -> RenumberOptionsBuilder {
        self.force = force;
        self
    }

    /// Adds extensions to skip; matching is case-insensitive
    ///
    /// # Arguments
    /// * `extensions` - Extensions including their leading dot, e.g. `.log`
    pub fn skip_extensions<I, S>(mut self, extensions: I) -> RenumberOptionsBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skip_extensions.extend(
            extensions
                .into_iter()
                .map(|extension| extension.as_ref().to_lowercase()),
        );
        self
    }

    /// Sets dry-run mode
    pub fn dry_run(mut self, dry_run: bool) -> RenumberOptionsBuilder {
        self.dry_run = dry_run;
        self
    }

    pub fn build(self) -> RenumberOptions {
        RenumberOptions {
            force: self.force,
            skip_extensions: self.skip_extensions,
            dry_run: self.dry_run,
        }
    }
}
