//! Optometric prescription records.

/// Optical parameters for one eye.
///
/// Any subset may be present. A blank or unparseable prompt answer leaves
/// the field unset, and it is stored as NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EyeParams {
    /// Spherical power in diopters.
    pub spherical: Option<f64>,
    /// Cylindrical power in diopters.
    pub cylindrical: Option<f64>,
    /// Cylinder axis in degrees.
    pub axis: Option<i32>,
    /// Addition power in diopters.
    pub addition: Option<f64>,
}

/// One prescription as issued to a patient.
///
/// Required fields are taken at construction; the rest start unset and can
/// be filled in afterwards. Nothing here validates content: the date is
/// stored as given, and the store's own constraints are the only gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub patient: String,
    pub physician: String,
    /// Issue date, expected as YYYY-MM-DD.
    pub issued_on: String,
    pub frame: Option<String>,
    pub lenses: Option<String>,
    pub od: EyeParams,
    pub oe: EyeParams,
    pub notes: Option<String>,
}

impl Prescription {
    /// Create a prescription with the required fields set.
    pub fn new(
        patient: impl Into<String>,
        physician: impl Into<String>,
        issued_on: impl Into<String>,
    ) -> Self {
        Self {
            patient: patient.into(),
            physician: physician.into(),
            issued_on: issued_on.into(),
            frame: None,
            lenses: None,
            od: EyeParams::default(),
            oe: EyeParams::default(),
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_required_fields_only() {
        let record = Prescription::new("João Silva", "Dr. Maria Santos", "2025-01-15");

        assert_eq!(record.patient, "João Silva");
        assert_eq!(record.physician, "Dr. Maria Santos");
        assert_eq!(record.issued_on, "2025-01-15");
        assert!(record.frame.is_none());
        assert!(record.lenses.is_none());
        assert!(record.notes.is_none());
        assert_eq!(record.od, EyeParams::default());
        assert_eq!(record.oe, EyeParams::default());
    }

    #[test]
    fn eye_params_default_is_all_unset() {
        let params = EyeParams::default();

        assert!(params.spherical.is_none());
        assert!(params.cylindrical.is_none());
        assert!(params.axis.is_none());
        assert!(params.addition.is_none());
    }

    #[test]
    fn required_fields_may_be_empty_strings() {
        // Presence is required at the type level; content is not checked.
        let record = Prescription::new("", "", "");
        assert_eq!(record.patient, "");
    }
}
