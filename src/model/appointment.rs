use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conf::ClinicConfig;

use super::is_present;

/// `petName` reported for appointments whose pet is not registered.
pub const UNKNOWN_PET: &str = "Pet não encontrado";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub pet_id: i64,
    pub service_id: i64,
    pub date: String,
    pub time: String,
    pub clinic_name: String,
    pub clinic_address: String,
    pub clinic_phone: String,
}

impl Appointment {
    /// A stored appointment collides when it books the same pet at the same date and time.
    /// Stored entries are checked field by field so malformed records never match.
    pub fn conflicts_with(&self, stored: &Value) -> bool {
        stored["petId"].as_i64() == Some(self.pet_id)
            && stored["date"].as_str() == Some(self.date.as_str())
            && stored["time"].as_str() == Some(self.time.as_str())
    }
}

/// Body of a scheduling request. Fields stay loosely typed so that absent and
/// empty values can be reported uniformly before the appointment is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[serde(default)]
    pub pet_id: Option<Value>,
    #[serde(default)]
    pub service_id: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub time: Option<Value>,
}

impl ScheduleRequest {
    /// Builds the appointment, or `None` if a field is missing, empty, or mistyped.
    pub fn into_appointment(self, clinic: &ClinicConfig) -> Option<Appointment> {
        if ![&self.pet_id, &self.service_id, &self.date, &self.time]
            .into_iter()
            .all(is_present)
        {
            return None;
        }
        Some(Appointment {
            pet_id: self.pet_id?.as_i64()?,
            service_id: self.service_id?.as_i64()?,
            date: as_string(self.date?)?,
            time: as_string(self.time?)?,
            clinic_name: clinic.name.clone(),
            clinic_address: clinic.address.clone(),
            clinic_phone: clinic.phone.clone(),
        })
    }
}

fn as_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> ScheduleRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_into_appointment_merges_clinic_info() {
        let clinic = ClinicConfig::default();
        let appt = request(json!({"petId": 7, "serviceId": 2, "date": "2024-05-01", "time": "10:00"}))
            .into_appointment(&clinic)
            .unwrap();

        assert_eq!(
            serde_json::to_value(&appt).unwrap(),
            json!({
                "petId": 7,
                "serviceId": 2,
                "date": "2024-05-01",
                "time": "10:00",
                "clinicName": "Pet Clinic",
                "clinicAddress": "123 Pet Street",
                "clinicPhone": "555-555-5555"
            })
        );
    }

    #[test]
    fn test_into_appointment_rejects_missing_and_mistyped() {
        let clinic = ClinicConfig::default();
        assert!(request(json!({"petId": 7, "serviceId": 2, "date": "2024-05-01"}))
            .into_appointment(&clinic)
            .is_none());
        assert!(request(json!({"petId": "7", "serviceId": 2, "date": "2024-05-01", "time": "10:00"}))
            .into_appointment(&clinic)
            .is_none());
        assert!(request(json!({"petId": 7, "serviceId": 2, "date": 20240501, "time": "10:00"}))
            .into_appointment(&clinic)
            .is_none());
    }

    #[test]
    fn test_conflict_ignores_service() {
        let clinic = ClinicConfig::default();
        let appt = request(json!({"petId": 1, "serviceId": 1, "date": "d", "time": "t"}))
            .into_appointment(&clinic)
            .unwrap();
        assert!(appt.conflicts_with(&json!({"petId": 1, "serviceId": 9, "date": "d", "time": "t"})));
        assert!(!appt.conflicts_with(&json!({"petId": 2, "serviceId": 1, "date": "d", "time": "t"})));
        assert!(!appt.conflicts_with(&json!({"petId": 1, "date": "d", "time": "t2"})));
    }

    #[test]
    fn test_malformed_stored_entries_never_conflict() {
        let clinic = ClinicConfig::default();
        let appt = request(json!({"petId": 1, "serviceId": 1, "date": "d", "time": "t"}))
            .into_appointment(&clinic)
            .unwrap();
        assert!(!appt.conflicts_with(&json!("d t")));
        assert!(!appt.conflicts_with(&json!({"petId": "1", "date": "d", "time": "t"})));
    }
}
