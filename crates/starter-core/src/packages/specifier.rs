//! Package specifiers and the closed set of packages the setup knows about

use crate::error::SetupError;
use std::fmt;
use std::str::FromStr;

/// A composer package identifier with an optional version constraint
///
/// Parsed from `vendor/name` or `vendor/name:constraint`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specifier {
    name: String,
    constraint: Option<String>,
}

impl Specifier {
    pub fn new(name: impl Into<String>, constraint: Option<String>) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }

    /// Parse `name[:constraint]`, trimming both parts
    pub fn parse(input: &str) -> Result<Self, SetupError> {
        let (name, constraint) = match input.split_once(':') {
            Some((name, constraint)) => (name.trim(), Some(constraint.trim())),
            None => (input.trim(), None),
        };

        if name.is_empty() {
            return Err(SetupError::InvalidSpecifier(input.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            constraint: constraint.filter(|c| !c.is_empty()).map(str::to_string),
        })
    }

    /// Bare package identifier, without any version constraint
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    /// The known package this specifier refers to, if any
    pub fn package(&self) -> Option<Package> {
        Package::from_name(&self.name)
    }
}

impl FromStr for Specifier {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{}:{}", self.name, constraint),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Packages offered by the setup prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Package {
    Filament,
    MoonShine,
    L5Swagger,
    LaravelData,
    ApiResponder,
    Telegraph,
    Ray,
    MediaLibrary,
    Permission,
}

impl Package {
    pub const ALL: [Package; 9] = [
        Package::Filament,
        Package::MoonShine,
        Package::L5Swagger,
        Package::LaravelData,
        Package::ApiResponder,
        Package::Telegraph,
        Package::Ray,
        Package::MediaLibrary,
        Package::Permission,
    ];

    /// Composer identifier
    pub fn name(&self) -> &'static str {
        match self {
            Package::Filament => "filament/filament",
            Package::MoonShine => "moonshine/moonshine",
            Package::L5Swagger => "darkaonline/l5-swagger",
            Package::LaravelData => "spatie/laravel-data",
            Package::ApiResponder => "pepperfm/api-responder-for-laravel",
            Package::Telegraph => "defstudio/telegraph",
            Package::Ray => "spatie/laravel-ray",
            Package::MediaLibrary => "spatie/laravel-medialibrary",
            Package::Permission => "spatie/laravel-permission",
        }
    }

    /// Version constraint pinned when the package is selected from a prompt
    fn default_constraint(&self) -> Option<&'static str> {
        match self {
            Package::Filament => Some("^4.0"),
            _ => None,
        }
    }

    pub fn specifier(&self) -> Specifier {
        Specifier::new(self.name(), self.default_constraint().map(str::to_string))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Package::Filament => "Filament v4",
            Package::MoonShine => "MoonShine",
            Package::L5Swagger => "L5 Swagger",
            Package::LaravelData => "Laravel Data",
            Package::ApiResponder => "API Responder",
            Package::Telegraph => "Telegram Bot Integration (Telegraph)",
            Package::Ray => "Ray Debugger",
            Package::MediaLibrary => "Spatie MediaLibrary",
            Package::Permission => "Spatie Permissions",
        }
    }

    /// One-line hint shown next to the option in prompts
    pub fn hint(&self) -> &'static str {
        match self {
            Package::Filament => "Panel builder (admin panel)",
            Package::MoonShine => "Admin panel",
            Package::L5Swagger => "Swagger UI for API documentation",
            Package::LaravelData => "Data objects / DTOs",
            Package::ApiResponder => "Lightweight response helpers",
            Package::Telegraph => "Telegram bots",
            Package::Ray => "Requires license [dev]",
            Package::MediaLibrary => "File uploads",
            Package::Permission => "Roles & permissions",
        }
    }

    /// Installed with `--dev`
    pub fn is_dev_only(&self) -> bool {
        matches!(self, Package::Ray)
    }

    pub fn from_name(name: &str) -> Option<Package> {
        Package::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
