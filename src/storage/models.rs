//! On-disk record models.
//!
//! Directory files are produced by content tooling that writes camelCase
//! keys, so the stored shape is kept apart from the domain [`Doctor`].

use crate::domain::Doctor;
use serde::{Deserialize, Serialize};

/// A doctor as stored in the directory file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    pub name: String,

    pub specialty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl DoctorRecord {
    /// Converts into the domain record. Blank optional fields become `None`.
    #[must_use]
    pub fn into_doctor(self) -> Doctor {
        Doctor {
            name: self.name,
            specialty: self.specialty,
            address: non_blank(self.address),
            phone: non_blank(self.phone_number),
            image: non_blank(self.image_url),
            location: non_blank(self.location),
        }
    }
}

impl From<&Doctor> for DoctorRecord {
    fn from(doctor: &Doctor) -> Self {
        Self {
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            address: doctor.address.clone(),
            phone_number: doctor.phone.clone(),
            image_url: doctor.image.clone(),
            location: doctor.location.clone(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
