pub mod enums;
pub mod error;
pub mod ids;
pub mod record;
pub mod validation;
pub mod vocabulary;

pub use enums::SpecimenState;
pub use error::{ModelError, Result};
pub use ids::SpecimenId;
pub use record::{SampleData, SpecimenRecord};
pub use validation::{ValidationIssue, validate_location, validate_record, validate_type};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes() {
        let record = SpecimenRecord::new(SpecimenId::new("a1").unwrap(), "BC-001")
            .with_sample_data(
                SampleData::default()
                    .with_family("Smith")
                    .with_state(SpecimenState::New),
            );
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: SpecimenRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
