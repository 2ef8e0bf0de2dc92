//! Record insertion.
//!
//! Each call maps one record to its row, runs a single insert inside a
//! transaction, and reports the id SQLite assigned. A rejected statement
//! rolls the transaction back before the error is returned.

use diesel::prelude::*;
use tracing::debug;

use crate::auth;
use crate::db::model::{NewReceitaRow, NewUserRow};
use crate::db::schema::{receita, user};
use crate::domain::{NewUser, Prescription};
use crate::error::{Error, Result};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    #[diesel(column_name = "id")]
    id: i32,
}

fn to_receita_row(record: &Prescription) -> NewReceitaRow {
    NewReceitaRow {
        paciente_nome: record.patient.clone(),
        armacao: record.frame.clone(),
        lentes: record.lenses.clone(),
        medico: record.physician.clone(),
        data_receita: record.issued_on.clone(),
        esferico_od: record.od.spherical,
        cilindrico_od: record.od.cylindrical,
        eixo_od: record.od.axis,
        adicao_od: record.od.addition,
        esferico_oe: record.oe.spherical,
        cilindrico_oe: record.oe.cylindrical,
        eixo_oe: record.oe.axis,
        adicao_oe: record.oe.addition,
        observacoes: record.notes.clone(),
    }
}

/// Insert one prescription and return the assigned row id.
///
/// # Errors
/// Returns `Error::Insertion` if the store rejects the row.
pub fn insert_prescription(conn: &mut SqliteConnection, record: &Prescription) -> Result<i32> {
    let row = to_receita_row(record);

    let id = conn
        .transaction(|conn| {
            diesel::insert_into(receita::table)
                .values(&row)
                .execute(conn)?;

            diesel::sql_query("SELECT last_insert_rowid() AS id")
                .get_result::<LastInsertRowId>(conn)
                .map(|row| row.id)
        })
        .map_err(|e: diesel::result::Error| Error::Insertion(e.to_string()))?;

    debug!(id, patient = %record.patient, "inserted prescription");
    Ok(id)
}

/// Hash the password and insert one user account, returning the row id.
///
/// # Errors
/// Returns `Error::Hash` if the password cannot be hashed, or
/// `Error::Insertion` if the store rejects the row, a duplicate username
/// included.
pub fn insert_user(conn: &mut SqliteConnection, record: &NewUser) -> Result<i32> {
    let row = NewUserRow {
        username: record.username.clone(),
        password_hash: auth::hash_password(&record.password)?,
        role: record.role.as_str().to_string(),
    };

    let id = conn
        .transaction(|conn| {
            diesel::insert_into(user::table).values(&row).execute(conn)?;

            diesel::sql_query("SELECT last_insert_rowid() AS id")
                .get_result::<LastInsertRowId>(conn)
                .map(|row| row.id)
        })
        .map_err(|e: diesel::result::Error| Error::Insertion(e.to_string()))?;

    debug!(id, username = %record.username, "inserted user");
    Ok(id)
}
