//! Built-in sample records for `--exemplo`.
//!
//! These are fixed seed data for a fresh or demo database. They carry no
//! meaning beyond being realistic enough to exercise the main application.

use crate::domain::{EyeParams, NewUser, Prescription, Role};

/// The two sample prescriptions inserted by `--exemplo`.
#[must_use]
pub fn example_prescriptions() -> Vec<Prescription> {
    let mut first = Prescription::new("João Silva", "Dr. Maria Santos", "2025-01-15");
    first.frame = Some("Ray-Ban RB5154".to_string());
    first.lenses = Some("Varilux Comfort".to_string());
    first.od = EyeParams {
        spherical: Some(-2.50),
        cylindrical: Some(-0.75),
        axis: Some(90),
        addition: None,
    };
    first.oe = EyeParams {
        spherical: Some(-2.25),
        cylindrical: Some(-0.50),
        axis: Some(85),
        addition: None,
    };
    first.notes = Some("Paciente com miopia e astigmatismo".to_string());

    let mut second = Prescription::new("Ana Costa", "Dr. Carlos Oliveira", "2025-01-20");
    second.frame = Some("Oakley OX8081".to_string());
    second.lenses = Some("Zeiss Progressive".to_string());
    second.od = EyeParams {
        spherical: Some(1.00),
        cylindrical: None,
        axis: None,
        addition: Some(2.00),
    };
    second.oe = EyeParams {
        spherical: Some(1.25),
        cylindrical: None,
        axis: None,
        addition: Some(2.00),
    };
    second.notes = Some("Presbiopia, primeira receita multifocal".to_string());

    vec![first, second]
}

/// The two sample accounts inserted by `--exemplo`.
#[must_use]
pub fn example_users() -> Vec<NewUser> {
    vec![
        NewUser::new("medico1", "senha123", Role::Physician),
        NewUser::new("atendente1", "senha456", Role::Attendant),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sample_prescriptions() {
        let records = example_prescriptions();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].patient, "João Silva");
        assert_eq!(records[1].patient, "Ana Costa");
    }

    #[test]
    fn myopia_sample_has_axis_but_no_addition() {
        let records = example_prescriptions();

        assert_eq!(records[0].od.axis, Some(90));
        assert_eq!(records[0].oe.axis, Some(85));
        assert!(records[0].od.addition.is_none());
    }

    #[test]
    fn presbyopia_sample_has_addition_but_no_cylinder() {
        let records = example_prescriptions();

        assert_eq!(records[1].od.addition, Some(2.00));
        assert!(records[1].od.cylindrical.is_none());
        assert!(records[1].od.axis.is_none());
    }

    #[test]
    fn sample_users_cover_both_staff_roles() {
        let records = example_users();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].username, "medico1");
        assert_eq!(records[0].role, Role::Physician);
        assert_eq!(records[1].username, "atendente1");
        assert_eq!(records[1].role, Role::Attendant);
    }
}
