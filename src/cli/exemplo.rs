//! Batch insertion of the built-in example records.

use std::path::Path;

use crate::cli::output;
use crate::db::{self, insert};
use crate::error::Result;
use crate::fixtures;

/// Run the `--exemplo` command.
pub fn execute(db_path: &Path) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Database", db_path.display());

    seed(db_path)?;

    output::success("example data inserted");
    Ok(())
}

/// Insert the example prescriptions and users, reporting each new id.
///
/// The two categories run independently on their own connections. A
/// rejected record abandons that category's remaining items (its
/// transaction has already rolled back) but does not stop the other
/// category, and the process still finishes normally.
pub fn seed(db_path: &Path) -> Result<()> {
    seed_prescriptions(db_path)?;
    seed_users(db_path)?;
    Ok(())
}

fn seed_prescriptions(db_path: &Path) -> Result<()> {
    output::section("Prescriptions");

    let mut conn = db::open(db_path)?;
    for record in fixtures::example_prescriptions() {
        match insert::insert_prescription(&mut conn, &record) {
            Ok(id) => output::inserted("receita", id, &record.patient),
            Err(err) => {
                output::error(&format!(
                    "failed to insert prescription for {}: {err}",
                    record.patient
                ));
                break;
            }
        }
    }
    Ok(())
}

fn seed_users(db_path: &Path) -> Result<()> {
    output::section("User accounts");

    let mut conn = db::open(db_path)?;
    for record in fixtures::example_users() {
        match insert::insert_user(&mut conn, &record) {
            Ok(id) => output::inserted("user", id, &record.username),
            Err(err) => {
                output::error(&format!(
                    "failed to insert user {}: {err}",
                    record.username
                ));
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::{receita, user};
    use crate::db::{open, run_migrations};
    use diesel::prelude::*;
    use std::path::PathBuf;

    fn fresh_db(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("app.db");
        let mut conn = open(&path).unwrap();
        run_migrations(&mut conn).unwrap();
        path
    }

    fn counts(path: &Path) -> (i64, i64) {
        let mut conn = open(path).unwrap();
        let receitas = receita::table.count().get_result(&mut conn).unwrap();
        let users = user::table.count().get_result(&mut conn).unwrap();
        (receitas, users)
    }

    #[test]
    fn seed_inserts_two_of_each() {
        let dir = tempfile::tempdir().unwrap();
        let path = fresh_db(&dir);

        seed(&path).unwrap();

        assert_eq!(counts(&path), (2, 2));
    }

    #[test]
    fn second_seed_adds_prescriptions_but_no_users() {
        // Usernames are unique, so the user category hits a duplicate on
        // the second pass and stops; prescriptions keep accumulating.
        let dir = tempfile::tempdir().unwrap();
        let path = fresh_db(&dir);

        seed(&path).unwrap();
        let result = seed(&path);

        assert!(result.is_ok());
        assert_eq!(counts(&path), (4, 2));
    }

    #[test]
    fn seeded_users_keep_their_roles() {
        let dir = tempfile::tempdir().unwrap();
        let path = fresh_db(&dir);

        seed(&path).unwrap();

        let mut conn = open(&path).unwrap();
        let roles: Vec<String> = user::table
            .select(user::role)
            .order(user::username.asc())
            .load(&mut conn)
            .unwrap();
        assert_eq!(roles, vec!["atendente".to_string(), "medico".to_string()]);
    }
}
