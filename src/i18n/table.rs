//! Complete string tables.
//!
//! A `TranslationTable` can only exist with a non-blank value for every
//! `StringKey`, so a partially translated table is unrepresentable.

use super::StringKey;
use std::ops::Index;
use thiserror::Error;

/// Why a table could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("missing value for key `{0}`")]
    MissingKey(StringKey),

    #[error("key `{0}` defined more than once")]
    DuplicateKey(StringKey),

    #[error("blank value for key `{0}`")]
    BlankValue(StringKey),

    #[error("batch size mismatch: expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Display strings for one language, one per `StringKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    values: Vec<String>,
}

impl TranslationTable {
    /// Build a table from `(key, value)` pairs in any order.
    ///
    /// Every key must appear exactly once with a non-blank value.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (StringKey, S)>,
        S: Into<String>,
    {
        let mut slots: Vec<Option<String>> = vec![None; StringKey::COUNT];

        for (key, value) in pairs {
            let value = value.into();
            if value.trim().is_empty() {
                return Err(TableError::BlankValue(key));
            }
            let slot = &mut slots[key.index()];
            if slot.is_some() {
                return Err(TableError::DuplicateKey(key));
            }
            *slot = Some(value);
        }

        let values = slots
            .into_iter()
            .zip(StringKey::ALL)
            .map(|(slot, key)| slot.ok_or(TableError::MissingKey(*key)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { values })
    }

    /// Build a table from values listed in `StringKey::ALL` order.
    pub fn from_ordered(values: Vec<String>) -> Result<Self, TableError> {
        if values.len() != StringKey::COUNT {
            return Err(TableError::SizeMismatch {
                expected: StringKey::COUNT,
                actual: values.len(),
            });
        }
        Self::from_pairs(StringKey::ALL.iter().copied().zip(values))
    }

    pub fn get(&self, key: StringKey) -> &str {
        &self.values[key.index()]
    }

    /// Entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (StringKey, &str)> {
        StringKey::ALL
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Values in canonical key order, as sent in a translation batch.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<StringKey> for TranslationTable {
    type Output = str;

    fn index(&self, key: StringKey) -> &str {
        self.get(key)
    }
}

/// Zip a translated batch back onto the base table's keys.
///
/// The batch must hold exactly one value per key, in the base table's order.
/// Any mismatch or blank value rejects the whole batch.
pub fn merge_batch(
    base: &TranslationTable,
    translated: Vec<String>,
) -> Result<TranslationTable, TableError> {
    if translated.len() != base.len() {
        return Err(TableError::SizeMismatch {
            expected: base.len(),
            actual: translated.len(),
        });
    }
    TranslationTable::from_ordered(translated)
}
