//! Read-only, date-keyed nutrition record store.
//!
//! Built once at startup from a JSON data file or from the dataset compiled
//! into the binary, then shared behind an `Arc` for the process lifetime.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::error::{NutrilogError, Result};
use crate::types::{DateKey, NutritionRecord};

/// Dataset bundled with the binary, used when no data file is configured.
const EMBEDDED_DATASET: &str = include_str!("../data/nutrition_data.json");

/// Immutable mapping from [`DateKey`] to [`NutritionRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionStore {
    records: BTreeMap<DateKey, NutritionRecord>,
}

impl NutritionStore {
    /// Build a store from already-normalized entries.
    ///
    /// Returns an error if two entries share the same key.
    pub fn from_records<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (DateKey, NutritionRecord)>,
    {
        let mut records = BTreeMap::new();
        for (key, record) in entries {
            if records.insert(key, record).is_some() {
                return Err(NutrilogError::DuplicateDateKey(key.to_string()));
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON object of `"<month>/<day>" -> record`.
    ///
    /// Keys are normalized, so `"6/09"` and `"6/9"` in the same document are
    /// rejected as duplicates.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, NutritionRecord> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|(key, record)| key.parse::<DateKey>().map(|k| (k, record)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_records(entries)
    }

    /// Load a store from a JSON data file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NutrilogError::Store(format!("failed to read {}: {}", path.display(), e))
        })?;
        let store = Self::from_json_str(&content)?;
        info!(path = %path.display(), records = store.len(), "Nutrition store loaded");
        Ok(store)
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let store = Self::from_json_str(EMBEDDED_DATASET)?;
        info!(records = store.len(), "Embedded nutrition store loaded");
        Ok(store)
    }

    /// Load from `path` when given, otherwise fall back to the embedded dataset.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::embedded(),
        }
    }

    pub fn get(&self, key: &DateKey) -> Option<&NutritionRecord> {
        self.records.get(key)
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &NutritionRecord)> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record_json(carb: &str) -> String {
        format!(
            r#"{{
                "탄수화물": "{carb}", "탄수화물 상태": "적정",
                "단백질": "17.9%", "단백질 상태": "적정",
                "지방": "27.9%", "지방 상태": "적정",
                "비타민A": "부족", "비타민C": "충분", "칼슘": "충분", "철분": "충분"
            }}"#
        )
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let store = NutritionStore::embedded().unwrap();
        assert_eq!(store.len(), 5);
        let record = store.get(&DateKey::new(6, 18)).unwrap();
        assert_eq!(record.carbohydrate, "53.8%");
        assert_eq!(record.carbohydrate_status, "약간 낮음");
        assert!(!store.contains(&DateKey::new(6, 21)));
    }

    #[test]
    fn test_padded_keys_are_normalized() {
        let json = format!(r#"{{ "6/09": {} }}"#, record_json("50%"));
        let store = NutritionStore::from_json_str(&json).unwrap();
        assert!(store.contains(&DateKey::new(6, 9)));
        assert!(store.contains(&"6/9".parse().unwrap()));
    }

    #[test]
    fn test_keys_colliding_after_normalization_are_rejected() {
        let json = format!(
            r#"{{ "6/09": {}, "6/9": {} }}"#,
            record_json("50%"),
            record_json("51%")
        );
        let err = NutritionStore::from_json_str(&json).unwrap_err();
        assert!(matches!(err, NutrilogError::DuplicateDateKey(ref k) if k == "6/9"));
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let json = format!(r#"{{ "June 9": {} }}"#, record_json("50%"));
        let err = NutritionStore::from_json_str(&json).unwrap_err();
        assert!(matches!(err, NutrilogError::InvalidDateKey(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = NutritionStore::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, NutrilogError::Serialization(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let json = format!(r#"{{ "6/1": {} }}"#, record_json("61%"));
        file.write_all(json.as_bytes()).unwrap();

        let store = NutritionStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&DateKey::new(6, 1)).unwrap().carbohydrate, "61%");
    }

    #[test]
    fn test_load_missing_file() {
        let err = NutritionStore::load(Path::new("/does/not/exist.json")).unwrap_err();
        assert!(matches!(err, NutrilogError::Store(_)));
    }

    #[test]
    fn test_load_or_embedded_without_path() {
        let store = NutritionStore::load_or_embedded(None).unwrap();
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_iter_is_date_ordered() {
        let store = NutritionStore::embedded().unwrap();
        let days: Vec<u32> = store.iter().map(|(k, _)| k.day()).collect();
        assert_eq!(days, vec![17, 18, 19, 20, 23]);
    }
}
