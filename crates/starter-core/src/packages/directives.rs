//! Post-install artisan commands for each known package

use super::specifier::Package;

/// One `php artisan` invocation run after a package is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// Artisan command name, e.g. `migrate`
    pub command: &'static str,
    /// Flags passed on every invocation
    pub flags: &'static [&'static str],
    /// Extra flags only passed when running through the container wrapper
    pub container_flags: &'static [&'static str],
}

impl Directive {
    const fn new(command: &'static str, flags: &'static [&'static str]) -> Self {
        Self {
            command,
            flags,
            container_flags: &[],
        }
    }

    const fn with_container_flags(self, flags: &'static [&'static str]) -> Self {
        Self {
            container_flags: flags,
            ..self
        }
    }

    /// Artisan arguments for this directive
    pub fn args(&self, in_container: bool) -> Vec<String> {
        let mut args = vec![self.command.to_string()];
        args.extend(self.flags.iter().map(|f| f.to_string()));
        if in_container {
            args.extend(self.container_flags.iter().map(|f| f.to_string()));
        }
        args
    }
}

const FILAMENT: &[Directive] = &[Directive::new("filament:install", &["--panels"])];

const MOONSHINE: &[Directive] = &[Directive::new("moonshine:install", &[])];

const L5_SWAGGER: &[Directive] = &[
    Directive::new(
        "vendor:publish",
        &["--provider=L5Swagger\\L5SwaggerServiceProvider"],
    ),
    Directive::new("l5-swagger:generate", &[]),
];

const TELEGRAPH: &[Directive] = &[
    Directive::new("vendor:publish", &["--tag=telegraph-migrations"]),
    Directive::new("migrate", &[]),
];

const RAY: &[Directive] =
    &[Directive::new("ray:publish-config", &[]).with_container_flags(&["--docker"])];

const MEDIA_LIBRARY: &[Directive] = &[
    Directive::new(
        "vendor:publish",
        &[
            "--provider=Spatie\\MediaLibrary\\MediaLibraryServiceProvider",
            "--tag=medialibrary-migrations",
        ],
    ),
    Directive::new("migrate", &[]),
];

const PERMISSION: &[Directive] = &[
    Directive::new(
        "vendor:publish",
        &["--provider=Spatie\\Permission\\PermissionServiceProvider"],
    ),
    Directive::new("optimize:clear", &[]),
    Directive::new("migrate", &[]),
];

/// Artisan command that creates a Filament admin user
pub const FILAMENT_USER_COMMAND: &str = "make:filament-user";

impl Package {
    /// Commands to run, in order, once the package is installed
    pub fn directives(&self) -> &'static [Directive] {
        match self {
            Package::Filament => FILAMENT,
            Package::MoonShine => MOONSHINE,
            Package::L5Swagger => L5_SWAGGER,
            Package::Telegraph => TELEGRAPH,
            Package::Ray => RAY,
            Package::MediaLibrary => MEDIA_LIBRARY,
            Package::Permission => PERMISSION,
            Package::LaravelData | Package::ApiResponder => &[],
        }
    }

    /// Whether to offer creating an admin user after the directives run
    pub fn offers_admin_user(&self) -> bool {
        matches!(self, Package::Filament)
    }
}
