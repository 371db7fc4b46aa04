//! Runtime and dev package lists built up across the prompts

use super::specifier::{Package, Specifier};

/// Which list a specifier is installed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Runtime,
    Dev,
}

impl Target {
    /// Routing rule for known packages
    pub fn for_package(package: Package) -> Self {
        if package.is_dev_only() {
            Target::Dev
        } else {
            Target::Runtime
        }
    }
}

/// Packages chosen during setup, in selection order
///
/// A package identifier appears at most once across both lists. Adding an
/// identifier that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    runtime: Vec<Specifier>,
    dev: Vec<Specifier>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `spec` appended to `target`
    #[must_use]
    pub fn with(mut self, spec: Specifier, target: Target) -> Self {
        if self.contains_name(spec.name()) {
            return self;
        }
        match target {
            Target::Runtime => self.runtime.push(spec),
            Target::Dev => self.dev.push(spec),
        }
        self
    }

    /// Returns a copy with a known package routed to its list
    #[must_use]
    pub fn with_package(self, package: Package) -> Self {
        self.with(package.specifier(), Target::for_package(package))
    }

    pub fn runtime(&self) -> &[Specifier] {
        &self.runtime
    }

    pub fn dev(&self) -> &[Specifier] {
        &self.dev
    }

    pub fn list(&self, target: Target) -> &[Specifier] {
        match target {
            Target::Runtime => &self.runtime,
            Target::Dev => &self.dev,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.dev.is_empty()
    }

    /// Runtime specifiers followed by dev specifiers
    pub fn iter(&self) -> impl Iterator<Item = &Specifier> {
        self.runtime.iter().chain(self.dev.iter())
    }

    pub fn contains(&self, package: Package) -> bool {
        self.contains_name(package.name())
    }

    fn contains_name(&self, name: &str) -> bool {
        self.iter().any(|s| s.name() == name)
    }
}
