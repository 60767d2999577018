use serde::{Deserialize, Serialize};

/// Contact details stamped onto every booked appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClinicConfig {
    #[serde(default = "ClinicConfig::default_name")]
    pub name: String,
    #[serde(default = "ClinicConfig::default_address")]
    pub address: String,
    #[serde(default = "ClinicConfig::default_phone")]
    pub phone: String,
}

impl ClinicConfig {
    fn default_name() -> String {
        String::from("Pet Clinic")
    }

    fn default_address() -> String {
        String::from("123 Pet Street")
    }

    fn default_phone() -> String {
        String::from("555-555-5555")
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            address: Self::default_address(),
            phone: Self::default_phone(),
        }
    }
}
