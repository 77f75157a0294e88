use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::destination::application::domain::entities::Destination;

pub const RECOMMENDOR_STATUS_ACTIVE: &str = "active";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
    #[sea_orm(string_value = "other")]
    Other,
}

/// A credentialed tourism guide endorsing destinations within a validity
/// window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendor {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    pub id_number: String,
    pub avatar: String,
    pub bio: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub phone: String,
    pub email: String,
    pub province_code: String,
    pub city_code: String,
    pub district_code: String,
    pub region_address: String,
    pub status: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub qr_code_web: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub qr_code_wxapp: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub destinations: Vec<Destination>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recommendor {
    /// Externally valid iff active and inside the credential window.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.status == RECOMMENDOR_STATUS_ACTIVE
            && self.valid_from <= now
            && now < self.valid_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn recommendor(status: &str, from_offset: i64, until_offset: i64) -> Recommendor {
        let now = Utc::now();
        Recommendor {
            id: 1,
            name: "Guide".into(),
            gender: Gender::Other,
            age: 30,
            id_number: "110101199001011234".into(),
            avatar: String::new(),
            bio: String::new(),
            valid_from: now + Duration::days(from_offset),
            valid_until: now + Duration::days(until_offset),
            phone: String::new(),
            email: String::new(),
            province_code: "110000".into(),
            city_code: "110100".into(),
            district_code: "110101".into(),
            region_address: "110000/110100/110101".into(),
            status: status.into(),
            rating: 0.0,
            qr_code_web: String::new(),
            qr_code_wxapp: String::new(),
            destinations: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_validity_window() {
        let now = Utc::now();
        assert!(recommendor("active", -1, 1).is_valid_at(now));
        assert!(!recommendor("inactive", -1, 1).is_valid_at(now));
        assert!(!recommendor("active", 1, 2).is_valid_at(now));
        assert!(!recommendor("active", -2, -1).is_valid_at(now));
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert!(serde_json::from_str::<Gender>("\"unknown\"").is_err());
    }

    #[test]
    fn test_empty_qr_codes_omitted_from_json() {
        let json = serde_json::to_value(recommendor("active", -1, 1)).unwrap();
        assert!(json.get("qr_code_web").is_none());
        assert!(json.get("destinations").is_none());
    }
}
