//! Built-in mock advocates used for offline browsing and demos.
//!
//! Seed records carry no identifier, matching rows that have not been
//! persisted by the backend yet.

use super::Record;

const SPECIALTIES: &[&str] = &[
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

struct SeedRow {
    first_name: &'static str,
    last_name: &'static str,
    city: &'static str,
    degree: &'static str,
    specialties: &'static [usize],
    years: u32,
    phone: u64,
}

const ROWS: &[SeedRow] = &[
    SeedRow { first_name: "John", last_name: "Doe", city: "New York", degree: "MD", specialties: &[0, 4], years: 10, phone: 5551234567 },
    SeedRow { first_name: "Jane", last_name: "Smith", city: "Los Angeles", degree: "PhD", specialties: &[1, 7, 9], years: 8, phone: 5559876543 },
    SeedRow { first_name: "Alice", last_name: "Johnson", city: "Chicago", degree: "MSW", specialties: &[6], years: 5, phone: 5554567890 },
    SeedRow { first_name: "Michael", last_name: "Brown", city: "Houston", degree: "MD", specialties: &[2, 3, 23], years: 12, phone: 5556543210 },
    SeedRow { first_name: "Emily", last_name: "Davis", city: "Phoenix", degree: "PhD", specialties: &[11, 21], years: 7, phone: 5553210987 },
    SeedRow { first_name: "Chris", last_name: "Martinez", city: "Philadelphia", degree: "MSW", specialties: &[10, 25], years: 9, phone: 5557890123 },
    SeedRow { first_name: "Jessica", last_name: "Taylor", city: "San Antonio", degree: "MD", specialties: &[12, 13], years: 11, phone: 5554561234 },
    SeedRow { first_name: "David", last_name: "Harris", city: "San Diego", degree: "PhD", specialties: &[20, 24], years: 6, phone: 5557896543 },
    SeedRow { first_name: "Laura", last_name: "Clark", city: "Dallas", degree: "MSW", specialties: &[17, 18], years: 4, phone: 5550123456 },
    SeedRow { first_name: "Daniel", last_name: "Lewis", city: "San Jose", degree: "MD", specialties: &[14, 15, 16], years: 13, phone: 5553217654 },
    SeedRow { first_name: "Sarah", last_name: "Lee", city: "Austin", degree: "PhD", specialties: &[19, 22], years: 15, phone: 5551238765 },
    SeedRow { first_name: "James", last_name: "King", city: "Jacksonville", degree: "MSW", specialties: &[5, 8], years: 2, phone: 5556540987 },
    SeedRow { first_name: "Megan", last_name: "Green", city: "San Francisco", degree: "MD", specialties: &[4, 7], years: 14, phone: 5558765432 },
    SeedRow { first_name: "Joshua", last_name: "Walker", city: "Columbus", degree: "PhD", specialties: &[1, 3], years: 9, phone: 5553456789 },
    SeedRow { first_name: "Amanda", last_name: "Hall", city: "Fort Worth", degree: "MSW", specialties: &[6, 9, 18], years: 3, phone: 5559872345 },
];

/// Return the built-in advocate list in its canonical order.
#[must_use]
pub fn advocates() -> Vec<Record> {
    ROWS.iter()
        .map(|row| {
            Record::new(row.first_name, row.last_name, row.city, row.degree)
                .with_specialties(row.specialties.iter().map(|&idx| SPECIALTIES[idx]))
                .with_years(row.years)
                .with_phone(row.phone)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_rows_are_unpersisted_and_complete() {
        let records = advocates();
        assert_eq!(records.len(), ROWS.len());
        for record in &records {
            assert!(record.id.is_none());
            assert!(!record.first_name.is_empty());
            assert!(!record.specialties.is_empty());
            assert!(record.years_of_experience.is_some());
        }
    }

    #[test]
    fn specialty_indices_are_in_range() {
        for row in ROWS {
            assert!(row.specialties.iter().all(|&idx| idx < SPECIALTIES.len()));
        }
    }
}
