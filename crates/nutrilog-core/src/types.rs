//! Domain types shared across nutrilog crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NutrilogError;

// =============================================================================
// DateKey
// =============================================================================

/// Normalized month/day identifier used to index the nutrition store.
///
/// The canonical text form is unpadded (`"6/9"`, `"6/18"`). Parsing accepts
/// zero-padded components, so `"6/09"` and `"6/9"` are the same key. No
/// calendar validation is performed: day 0 or day 99 are valid keys that
/// simply never appear in a real store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    month: u32,
    day: u32,
}

impl DateKey {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = NutrilogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NutrilogError::InvalidDateKey(s.to_string());
        let (month, day) = s.trim().split_once('/').ok_or_else(invalid)?;
        let parse = |part: &str| -> Result<u32, NutrilogError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        };
        Ok(Self::new(parse(month)?, parse(day)?))
    }
}

impl Serialize for DateKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// NutritionRecord
// =============================================================================

/// Precomputed nutrient analysis for one day.
///
/// Values are opaque display strings (`"53.8%"`, `"약간 부족"`) and are never
/// recomputed or reformatted. Serialized field names match the Korean labels
/// used by the upstream data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionRecord {
    #[serde(rename = "탄수화물")]
    pub carbohydrate: String,
    #[serde(rename = "탄수화물 상태")]
    pub carbohydrate_status: String,
    #[serde(rename = "단백질")]
    pub protein: String,
    #[serde(rename = "단백질 상태")]
    pub protein_status: String,
    #[serde(rename = "지방")]
    pub fat: String,
    #[serde(rename = "지방 상태")]
    pub fat_status: String,
    #[serde(rename = "비타민A")]
    pub vitamin_a: String,
    #[serde(rename = "비타민C")]
    pub vitamin_c: String,
    #[serde(rename = "칼슘")]
    pub calcium: String,
    #[serde(rename = "철분")]
    pub iron: String,
}

/// A macro-nutrient reading: share of daily intake plus qualitative status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroReading<'a> {
    pub label: &'static str,
    pub value: &'a str,
    pub status: &'a str,
}

/// A micronutrient reading: qualitative status only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicroReading<'a> {
    pub label: &'static str,
    pub status: &'a str,
}

impl NutritionRecord {
    /// Carbohydrate, protein and fat, in display order.
    pub fn macros(&self) -> [MacroReading<'_>; 3] {
        [
            MacroReading {
                label: "탄수화물",
                value: &self.carbohydrate,
                status: &self.carbohydrate_status,
            },
            MacroReading {
                label: "단백질",
                value: &self.protein,
                status: &self.protein_status,
            },
            MacroReading {
                label: "지방",
                value: &self.fat,
                status: &self.fat_status,
            },
        ]
    }

    /// Vitamin A, vitamin C, calcium and iron, in display order.
    pub fn micros(&self) -> [MicroReading<'_>; 4] {
        [
            MicroReading {
                label: "비타민 A",
                status: &self.vitamin_a,
            },
            MicroReading {
                label: "비타민 C",
                status: &self.vitamin_c,
            },
            MicroReading {
                label: "칼슘",
                status: &self.calcium,
            },
            MicroReading {
                label: "철분",
                status: &self.iron,
            },
        ]
    }
}
