// ABOUTME: Nutrient identifiers and dense per-nutrient vectors used for densities, targets and totals
// ABOUTME: Compile-time mapping from nutrient to wire name, display unit and catalog column label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};

/// Tracked nutrient identifier
///
/// Variant order is the canonical order used for vector storage and for
/// serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Total fat (g)
    Fat,
    /// Carbohydrates (g)
    Carbs,
    /// Dietary fiber (g)
    Fiber,
    /// Sodium (mg)
    Sodium,
    /// Potassium (mg)
    Potassium,
    /// Calcium (mg)
    Calcium,
    /// Magnesium (mg)
    Magnesium,
    /// Phosphorus (mg)
    Phosphorus,
    /// Iron (mg)
    Iron,
    /// Zinc (mg)
    Zinc,
    /// Vitamin A as retinol activity equivalents (μg)
    VitaminA,
    /// Vitamin D (μg)
    VitaminD,
    /// Vitamin E as α-tocopherol (mg)
    VitaminE,
    /// Vitamin K (μg)
    VitaminK,
    /// Thiamin (mg)
    VitaminB1,
    /// Riboflavin (mg)
    VitaminB2,
    /// Vitamin B6 (mg)
    VitaminB6,
    /// Vitamin B12 (μg)
    VitaminB12,
    /// Vitamin C (mg)
    VitaminC,
    /// Folate (μg)
    Folate,
}

impl Nutrient {
    /// Number of tracked nutrients
    pub const COUNT: usize = 22;

    /// Every tracked nutrient in canonical order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Calories,
        Self::Protein,
        Self::Fat,
        Self::Carbs,
        Self::Fiber,
        Self::Sodium,
        Self::Potassium,
        Self::Calcium,
        Self::Magnesium,
        Self::Phosphorus,
        Self::Iron,
        Self::Zinc,
        Self::VitaminA,
        Self::VitaminD,
        Self::VitaminE,
        Self::VitaminK,
        Self::VitaminB1,
        Self::VitaminB2,
        Self::VitaminB6,
        Self::VitaminB12,
        Self::VitaminC,
        Self::Folate,
    ];

    /// Position of this nutrient in a [`NutrientVector`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Identifier used in JSON payloads and CLI flags
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Carbs => "carbs",
            Self::Fiber => "fiber",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Calcium => "calcium",
            Self::Magnesium => "magnesium",
            Self::Phosphorus => "phosphorus",
            Self::Iron => "iron",
            Self::Zinc => "zinc",
            Self::VitaminA => "vitaminA",
            Self::VitaminD => "vitaminD",
            Self::VitaminE => "vitaminE",
            Self::VitaminK => "vitaminK",
            Self::VitaminB1 => "vitaminB1",
            Self::VitaminB2 => "vitaminB2",
            Self::VitaminB6 => "vitaminB6",
            Self::VitaminB12 => "vitaminB12",
            Self::VitaminC => "vitaminC",
            Self::Folate => "folate",
        }
    }

    /// Display unit of the amount
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::Fat | Self::Carbs | Self::Fiber => "g",
            Self::Sodium
            | Self::Potassium
            | Self::Calcium
            | Self::Magnesium
            | Self::Phosphorus
            | Self::Iron
            | Self::Zinc
            | Self::VitaminE
            | Self::VitaminB1
            | Self::VitaminB2
            | Self::VitaminB6
            | Self::VitaminC => "mg",
            Self::VitaminA | Self::VitaminD | Self::VitaminK | Self::VitaminB12 | Self::Folate => {
                "μg"
            }
        }
    }

    /// Column label in the food composition table export
    #[must_use]
    pub const fn catalog_column(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein => "タンパク質[g]",
            Self::Fat => "脂質[g]",
            Self::Carbs => "炭水化物[g]",
            Self::Fiber => "食物繊維[g]",
            Self::Sodium => "ナトリウム[mg]",
            Self::Potassium => "カリウム[mg]",
            Self::Calcium => "カルシウム[mg]",
            Self::Magnesium => "マグネシウム[mg]",
            Self::Phosphorus => "リン[mg]",
            Self::Iron => "鉄[mg]",
            Self::Zinc => "亜鉛[mg]",
            Self::VitaminA => "レチノール活性当量[μg]",
            Self::VitaminD => "ビタミンD[μg]",
            Self::VitaminE => "α-トコフェロール[mg]",
            Self::VitaminK => "ビタミンK[μg]",
            Self::VitaminB1 => "ビタミンB1[mg]",
            Self::VitaminB2 => "ビタミンB2[mg]",
            Self::VitaminB6 => "ビタミンB6[mg]",
            Self::VitaminB12 => "ビタミンB12[μg]",
            Self::VitaminC => "ビタミンC[mg]",
            Self::Folate => "葉酸[μg]",
        }
    }

    /// Look up a nutrient by its wire name
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.wire_name() == name)
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Dense vector holding one amount per tracked nutrient
///
/// Used for per-100-unit densities, targets, pick contributions and totals.
/// Serializes as a JSON object keyed by nutrient wire name; deserialization
/// accepts any subset of nutrients and leaves the rest at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutrientVector {
    values: [f64; Nutrient::COUNT],
}

impl NutrientVector {
    /// All-zero vector
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            values: [0.0; Nutrient::COUNT],
        }
    }

    /// Build a vector from `(nutrient, amount)` pairs; unlisted nutrients are zero
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Nutrient, f64)>) -> Self {
        let mut vector = Self::zero();
        for (nutrient, amount) in pairs {
            vector[nutrient] = amount;
        }
        vector
    }

    /// Amount for one nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        self.values[nutrient.index()]
    }

    /// Set the amount for one nutrient
    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.values[nutrient.index()] = amount;
    }

    /// Multiply every amount by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let mut scaled = *self;
        for value in &mut scaled.values {
            *value *= factor;
        }
        scaled
    }

    /// Iterate `(nutrient, amount)` in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.get(n)))
    }

    /// True when every amount is exactly zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Largest absolute elementwise difference to `other`
    #[must_use]
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Index<Nutrient> for NutrientVector {
    type Output = f64;

    fn index(&self, nutrient: Nutrient) -> &Self::Output {
        &self.values[nutrient.index()]
    }
}

impl IndexMut<Nutrient> for NutrientVector {
    fn index_mut(&mut self, nutrient: Nutrient) -> &mut Self::Output {
        &mut self.values[nutrient.index()]
    }
}

impl AddAssign<&Self> for NutrientVector {
    fn add_assign(&mut self, rhs: &Self) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values.iter()) {
            *lhs += rhs;
        }
    }
}

impl AddAssign for NutrientVector {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Add for NutrientVector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl<'a> std::iter::Sum<&'a Self> for NutrientVector {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |mut acc, v| {
            acc += v;
            acc
        })
    }
}

impl Serialize for NutrientVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Nutrient::COUNT))?;
        for (nutrient, amount) in self.iter() {
            map.serialize_entry(nutrient.wire_name(), &amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NutrientVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<Nutrient, f64>::deserialize(deserializer)?;
        Ok(Self::from_pairs(entries))
    }
}
