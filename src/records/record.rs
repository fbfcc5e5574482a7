use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One advocate profile as returned by the directory backend.
///
/// Text and list fields tolerate `null` or absent values on the wire and fall
/// back to their empty value, so a malformed record still renders and simply
/// never matches a search on the missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub specialties: Vec<String>,
    pub years_of_experience: Option<u32>,
    pub phone_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Create a record with the four text fields populated.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        degree: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            degree: degree.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_years(mut self, years: u32) -> Self {
        self.years_of_experience = Some(years);
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: u64) -> Self {
        self.phone_number = Some(phone);
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Full display name, `first last`.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let value = json!({
            "id": 7,
            "firstName": "Jane",
            "lastName": "Doe",
            "city": "Austin",
            "degree": "MD",
            "specialties": ["Cardiology", "Bipolar"],
            "yearsOfExperience": 10,
            "phoneNumber": 5551234567u64,
            "createdAt": "2024-03-01T12:30:00Z"
        });

        let record: Record = serde_json::from_value(value).expect("record");
        assert_eq!(record.id, Some(7));
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.specialties, vec!["Cardiology", "Bipolar"]);
        assert_eq!(record.years_of_experience, Some(10));
        assert_eq!(record.phone_number, Some(5_551_234_567));
        assert_eq!(
            record.created_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn missing_and_null_fields_fall_back_to_empty() {
        let value = json!({
            "firstName": "Jane",
            "city": null,
            "specialties": null
        });

        let record: Record = serde_json::from_value(value).expect("record");
        assert_eq!(record.id, None);
        assert_eq!(record.first_name, "Jane");
        assert!(record.last_name.is_empty());
        assert!(record.city.is_empty());
        assert!(record.specialties.is_empty());
        assert_eq!(record.years_of_experience, None);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn serializes_without_absent_identity() {
        let record = Record::new("Jane", "Doe", "Austin", "MD").with_years(3);
        let value = serde_json::to_value(&record).expect("json");
        assert!(value.get("id").is_none());
        assert!(value.get("createdAt").is_none());
        assert_eq!(value["yearsOfExperience"], 3);
        assert_eq!(value["firstName"], "Jane");
    }

    #[test]
    fn full_name_skips_missing_parts() {
        assert_eq!(Record::new("Jane", "Doe", "", "").full_name(), "Jane Doe");
        assert_eq!(Record::new("", "Doe", "", "").full_name(), "Doe");
        assert_eq!(Record::default().full_name(), "");
    }
}
