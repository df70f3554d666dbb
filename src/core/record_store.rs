use crate::core::AdoptionRecord;
use crate::utils::error::{Result, ShelterError};
use crate::utils::validation::{is_valid_adoption_fee, is_valid_animal_name};

/// In-memory adoption listings for one session, kept in insertion order.
///
/// Names are not unique. `lookup` answers with the earliest record for a name.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<AdoptionRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `(name.trim(), fee)`. Blank names and negative fees are rejected
    /// and leave the store untouched.
    pub fn add(&mut self, name: &str, fee: i64) -> Result<()> {
        if !is_valid_animal_name(name) || !is_valid_adoption_fee(fee) {
            tracing::warn!("Rejected record: name={:?}, fee={}", name, fee);
            return Err(ShelterError::InvalidRecord);
        }

        let animal_name = name.trim().to_string();
        tracing::debug!("Adding record #{}: {} (${})", self.records.len() + 1, animal_name, fee);
        self.records.push(AdoptionRecord { animal_name, fee });
        Ok(())
    }

    /// Exact match on the stored name; the query itself is not trimmed.
    pub fn lookup(&self, name: &str) -> Result<i64> {
        self.records
            .iter()
            .find(|record| record.animal_name == name)
            .map(|record| record.fee)
            .ok_or_else(|| {
                tracing::debug!("No record for {:?}", name);
                ShelterError::AnimalNotFound
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &AdoptionRecord> {
        self.records.iter()
    }
}
