//! Database row types for Diesel ORM.
//!
//! Column names follow the main application's schema, which is in
//! Portuguese; the mapping from the English record types happens in
//! [`insert`](crate::db::insert).

use diesel::prelude::*;

use super::schema::{receita, user};

/// Database row for a prescription (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = receita)]
pub struct NewReceitaRow {
    pub paciente_nome: String,
    pub armacao: Option<String>,
    pub lentes: Option<String>,
    pub medico: String,
    pub data_receita: String,
    pub esferico_od: Option<f64>,
    pub cilindrico_od: Option<f64>,
    pub eixo_od: Option<i32>,
    pub adicao_od: Option<f64>,
    pub esferico_oe: Option<f64>,
    pub cilindrico_oe: Option<f64>,
    pub eixo_oe: Option<i32>,
    pub adicao_oe: Option<f64>,
    pub observacoes: Option<String>,
}

/// Database row for a prescription (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = receita)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReceitaRow {
    pub id: Option<i32>,
    pub paciente_nome: String,
    pub armacao: Option<String>,
    pub lentes: Option<String>,
    pub medico: String,
    pub data_receita: String,
    pub esferico_od: Option<f64>,
    pub cilindrico_od: Option<f64>,
    pub eixo_od: Option<i32>,
    pub adicao_od: Option<f64>,
    pub esferico_oe: Option<f64>,
    pub cilindrico_oe: Option<f64>,
    pub eixo_oe: Option<i32>,
    pub adicao_oe: Option<f64>,
    pub observacoes: Option<String>,
}

/// Database row for a user account (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = user)]
pub struct NewUserRow {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// Database row for a user account (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = user)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: Option<i32>,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{open, run_migrations};
    use std::path::Path;

    fn test_conn() -> SqliteConnection {
        let mut conn = open(Path::new(":memory:")).unwrap();
        run_migrations(&mut conn).unwrap();
        conn
    }

    fn sample_receita() -> NewReceitaRow {
        NewReceitaRow {
            paciente_nome: "João Silva".to_string(),
            armacao: Some("Ray-Ban RB5154".to_string()),
            lentes: Some("Varilux Comfort".to_string()),
            medico: "Dr. Maria Santos".to_string(),
            data_receita: "2025-01-15".to_string(),
            esferico_od: Some(-2.50),
            cilindrico_od: Some(-0.75),
            eixo_od: Some(90),
            adicao_od: None,
            esferico_oe: Some(-2.25),
            cilindrico_oe: Some(-0.50),
            eixo_oe: Some(85),
            adicao_oe: None,
            observacoes: Some("Paciente com miopia e astigmatismo".to_string()),
        }
    }

    // -------------------------------------------------------------------------
    // Database roundtrip tests
    // -------------------------------------------------------------------------

    #[test]
    fn receita_row_roundtrip_with_db() {
        let mut conn = test_conn();

        diesel::insert_into(receita::table)
            .values(&sample_receita())
            .execute(&mut conn)
            .unwrap();

        let loaded: ReceitaRow = receita::table
            .order(receita::id.desc())
            .first(&mut conn)
            .unwrap();

        assert!(loaded.id.is_some());
        assert_eq!(loaded.paciente_nome, "João Silva");
        assert_eq!(loaded.medico, "Dr. Maria Santos");
        assert_eq!(loaded.data_receita, "2025-01-15");
        assert!((loaded.esferico_od.unwrap() - (-2.50)).abs() < 0.001);
        assert_eq!(loaded.eixo_od, Some(90));
        assert!(loaded.adicao_od.is_none());
    }

    #[test]
    fn receita_row_roundtrip_with_nulls() {
        let mut conn = test_conn();

        let row = NewReceitaRow {
            paciente_nome: "Ana Costa".to_string(),
            armacao: None,
            lentes: None,
            medico: "Dr. Carlos Oliveira".to_string(),
            data_receita: "2025-01-20".to_string(),
            esferico_od: None,
            cilindrico_od: None,
            eixo_od: None,
            adicao_od: None,
            esferico_oe: None,
            cilindrico_oe: None,
            eixo_oe: None,
            adicao_oe: None,
            observacoes: None,
        };

        diesel::insert_into(receita::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        let loaded: ReceitaRow = receita::table
            .order(receita::id.desc())
            .first(&mut conn)
            .unwrap();

        assert!(loaded.armacao.is_none());
        assert!(loaded.esferico_od.is_none());
        assert!(loaded.observacoes.is_none());
    }

    #[test]
    fn user_row_roundtrip_with_db() {
        let mut conn = test_conn();

        let row = NewUserRow {
            username: "atendente1".to_string(),
            password_hash: "$argon2id$v=19$placeholder".to_string(),
            role: "atendente".to_string(),
        };

        diesel::insert_into(user::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        let loaded: UserRow = user::table
            .filter(user::username.eq("atendente1"))
            .first(&mut conn)
            .unwrap();

        assert!(loaded.id.is_some());
        assert_eq!(loaded.role, "atendente");
    }

    #[test]
    fn role_column_defaults_to_atendente() {
        let mut conn = test_conn();

        diesel::insert_into(user::table)
            .values((
                user::username.eq("norole"),
                user::password_hash.eq("$argon2id$v=19$placeholder"),
            ))
            .execute(&mut conn)
            .unwrap();

        let loaded: UserRow = user::table
            .filter(user::username.eq("norole"))
            .first(&mut conn)
            .unwrap();

        assert_eq!(loaded.role, "atendente");
    }

    // -------------------------------------------------------------------------
    // Edge cases
    // -------------------------------------------------------------------------

    #[test]
    fn receita_row_with_accented_text() {
        let mut conn = test_conn();

        let mut row = sample_receita();
        row.observacoes = Some("Paciente em revisão; acompanhar adaptação às lentes".to_string());

        diesel::insert_into(receita::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        let loaded: ReceitaRow = receita::table
            .order(receita::id.desc())
            .first(&mut conn)
            .unwrap();

        assert!(loaded.observacoes.unwrap().contains("revisão"));
        assert_eq!(loaded.paciente_nome, "João Silva");
    }

    #[test]
    fn duplicate_username_violates_constraint() {
        let mut conn = test_conn();

        let row = NewUserRow {
            username: "medico1".to_string(),
            password_hash: "$argon2id$v=19$placeholder".to_string(),
            role: "medico".to_string(),
        };

        diesel::insert_into(user::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        let second = diesel::insert_into(user::table)
            .values(&row)
            .execute(&mut conn);

        assert!(second.is_err());
    }
}
