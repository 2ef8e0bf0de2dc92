//! Interactive insertion menu.
//!
//! One pass per process start: show the options, run the selected flow,
//! return. A rejected record is reported and the process still ends
//! normally; only connection and prompt I/O failures are fatal.

use std::path::Path;
use std::str::FromStr;

use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::cli::{exemplo, output};
use crate::coerce::parse_or_null;
use crate::db::{self, insert};
use crate::domain::{EyeParams, NewUser, Prescription, Role};
use crate::error::{Error, Result};

/// Run one menu pass.
pub fn run(db_path: &Path) -> Result<()> {
    if output::is_json() {
        return Err(Error::Usage(
            "the menu is interactive; use `dioptre --exemplo` for scripted insertion".to_string(),
        ));
    }

    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Insert records");
    output::menu_option("1", "New prescription");
    output::menu_option("2", "New user account");
    output::menu_option("3", "Example data set");
    output::menu_option("0", "Exit");
    println!();

    let theme = ColorfulTheme::default();
    let selection = prompt(&theme, "Option")?;

    // Selection is matched verbatim; " 1" or "01" do not count.
    match selection.as_str() {
        "1" => prescription_flow(&theme, db_path),
        "2" => user_flow(&theme, db_path),
        "3" => {
            output::note("Inserting the example data set...");
            exemplo::seed(db_path)?;
            output::success("example data inserted");
            Ok(())
        }
        "0" => {
            output::note("Nothing inserted.");
            Ok(())
        }
        other => {
            output::warning(&format!("\"{other}\" is not an option; nothing inserted"));
            Ok(())
        }
    }
}

/// Collect one prescription from the operator and insert it.
fn prescription_flow(theme: &ColorfulTheme, db_path: &Path) -> Result<()> {
    output::section("New prescription");

    let patient = prompt(theme, "Patient name")?;
    let physician = prompt(theme, "Physician")?;
    let issued_on = prompt(theme, "Issue date (YYYY-MM-DD)")?;

    let mut record = Prescription::new(patient, physician, issued_on);
    record.frame = optional(theme, "Frame (optional)")?;
    record.lenses = optional(theme, "Lenses (optional)")?;

    output::section("Right eye (OD)");
    record.od = eye_params(theme)?;

    output::section("Left eye (OE)");
    record.oe = eye_params(theme)?;

    record.notes = optional(theme, "Notes (optional)")?;

    let mut conn = db::open(db_path)?;
    match insert::insert_prescription(&mut conn, &record) {
        Ok(id) => output::inserted("receita", id, &record.patient),
        Err(err) => output::error(&format!("failed to insert prescription: {err}")),
    }
    Ok(())
}

/// Collect one user account from the operator and insert it.
fn user_flow(theme: &ColorfulTheme, db_path: &Path) -> Result<()> {
    output::section("New user account");

    let username = prompt(theme, "Username")?;
    let password = Password::with_theme(theme)
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    output::section("Role");
    output::menu_option("1", "adm (administrator)");
    output::menu_option("2", "medico (physician)");
    output::menu_option("3", "atendente (attendant)");

    let selection = prompt(theme, "Role (1-3)")?;
    let record = NewUser::new(username, password, Role::from_selection(&selection));

    let mut conn = db::open(db_path)?;
    match insert::insert_user(&mut conn, &record) {
        Ok(id) => output::inserted("user", id, &record.username),
        Err(err) => output::error(&format!("failed to insert user: {err}")),
    }
    Ok(())
}

/// Ask for the four optical parameters of one eye.
fn eye_params(theme: &ColorfulTheme) -> Result<EyeParams> {
    Ok(EyeParams {
        spherical: numeric(theme, "Spherical")?,
        cylindrical: numeric(theme, "Cylindrical")?,
        axis: numeric(theme, "Axis (degrees)")?,
        addition: numeric(theme, "Addition")?,
    })
}

/// Free-text prompt. Empty answers pass through as empty strings.
fn prompt(theme: &ColorfulTheme, label: &str) -> Result<String> {
    Ok(Input::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt where an empty answer means "leave unset".
fn optional(theme: &ColorfulTheme, label: &str) -> Result<Option<String>> {
    let raw = prompt(theme, label)?;
    Ok(if raw.is_empty() { None } else { Some(raw) })
}

/// Prompt for a numeric field; anything unparseable stays unset.
fn numeric<T: FromStr>(theme: &ColorfulTheme, label: &str) -> Result<Option<T>> {
    let raw = prompt(theme, label)?;
    Ok(parse_or_null(&raw))
}
