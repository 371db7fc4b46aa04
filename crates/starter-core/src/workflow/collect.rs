//! Package selection prompts

use crate::packages::{Package, Selection, Specifier, Target};
use crate::prompt::{Choice, Prompter};
use anyhow::Result;

const ADMIN_PANELS: [Package; 2] = [Package::Filament, Package::MoonShine];
const API_HELPERS: [Package; 2] = [Package::LaravelData, Package::ApiResponder];
const EXTRAS: [Package; 4] = [
    Package::Telegraph,
    Package::Ray,
    Package::MediaLibrary,
    Package::Permission,
];

/// Installed whenever API support is requested
const API_DOCS: Package = Package::L5Swagger;

fn choices(packages: &[Package]) -> Vec<Choice<Package>> {
    packages
        .iter()
        .map(|p| Choice::new(*p, p.display_name(), p.hint()))
        .collect()
}

pub fn ask_admin_panel<P: Prompter>(prompter: &mut P, selection: Selection) -> Result<Selection> {
    if !prompter.confirm("Will this app use an Admin Panel?", true)? {
        prompter.info("Skipping Admin Panel installation.")?;
        return Ok(selection);
    }

    let panel = prompter.select(
        "Which Admin Panel would you like to install?",
        &choices(&ADMIN_PANELS),
        &Package::Filament,
    )?;

    Ok(selection.with_package(panel))
}

pub fn ask_api_support<P: Prompter>(prompter: &mut P, selection: Selection) -> Result<Selection> {
    if !prompter.confirm("Will this app be used as an API?", false)? {
        prompter.info("Skipping API support installation.")?;
        return Ok(selection);
    }

    prompter.info(&format!(
        "API support: installing {} for documentation.",
        API_DOCS.display_name()
    ))?;
    let selection = selection.with_package(API_DOCS);

    let helper = prompter.select(
        "Which additional API helper package would you like to install?",
        &choices(&API_HELPERS),
        &Package::LaravelData,
    )?;

    Ok(selection.with_package(helper))
}

pub fn ask_extras<P: Prompter>(prompter: &mut P, selection: Selection) -> Result<Selection> {
    let extras = prompter.multiselect("Select additional features to install", &choices(&EXTRAS))?;

    Ok(extras.into_iter().fold(selection, Selection::with_package))
}

/// Append specifiers given on the command line
pub fn add_requested<P: Prompter>(
    prompter: &mut P,
    selection: Selection,
    requested: &[Specifier],
    target: Target,
) -> Result<Selection> {
    let mut selection = selection;
    for spec in requested {
        if selection.iter().any(|s| s.name() == spec.name()) {
            prompter.info(&format!("{} is already selected", spec.name()))?;
            continue;
        }
        selection = selection.with(spec.clone(), target);
    }
    Ok(selection)
}

/// Drop admin panels from requested specifiers once the admin gate was declined
fn without_admin_panels<P: Prompter>(
    prompter: &mut P,
    requested: &[Specifier],
) -> Result<Vec<Specifier>> {
    let mut kept = Vec::with_capacity(requested.len());
    for spec in requested {
        match spec.package() {
            Some(panel) if ADMIN_PANELS.contains(&panel) => {
                prompter.warning(&format!(
                    "Ignoring {}: no Admin Panel was requested",
                    spec.name()
                ))?;
            }
            _ => kept.push(spec.clone()),
        }
    }
    Ok(kept)
}

/// Run every selection prompt in order
pub fn collect_selection<P: Prompter>(
    prompter: &mut P,
    require: &[Specifier],
    require_dev: &[Specifier],
) -> Result<Selection> {
    let selection = Selection::new();
    let selection = ask_admin_panel(prompter, selection)?;
    let admin_declined = !ADMIN_PANELS.iter().any(|p| selection.contains(*p));
    let selection = ask_api_support(prompter, selection)?;
    let selection = ask_extras(prompter, selection)?;

    let (require, require_dev) = if admin_declined {
        (
            without_admin_panels(prompter, require)?,
            without_admin_panels(prompter, require_dev)?,
        )
    } else {
        (require.to_vec(), require_dev.to_vec())
    };

    let selection = add_requested(prompter, selection, &require, Target::Runtime)?;
    add_requested(prompter, selection, &require_dev, Target::Dev)
}
