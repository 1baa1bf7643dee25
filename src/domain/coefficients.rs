//! Static adjustment tables. Each lookup has an explicit fallback so callers
//! can override a subset of entries without covering every variant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entities::{LandShape, ZoningCategory};

/// Walking-distance band; `max_minutes` is inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationBand {
    pub max_minutes: u32,
    pub factor: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTables {
    /// Sorted by `max_minutes`; the first band that contains the distance wins.
    pub location_bands: Vec<LocationBand>,
    /// Used when the distance is past every band.
    pub location_beyond: f64,
    pub zoning: BTreeMap<ZoningCategory, f64>,
    pub zoning_default: f64,
    pub shape: BTreeMap<LandShape, f64>,
    pub shape_default: f64,
}

impl Default for CoefficientTables {
    fn default() -> Self {
        let location_bands = vec![
            LocationBand { max_minutes: 5, factor: 1.2 },
            LocationBand { max_minutes: 10, factor: 1.1 },
            LocationBand { max_minutes: 15, factor: 1.0 },
            LocationBand { max_minutes: 20, factor: 0.9 },
        ];

        // Both low-rise residential categories fall through to the default.
        let zoning = BTreeMap::from([
            (ZoningCategory::Commercial, 1.3),
            (ZoningCategory::NeighborhoodCommercial, 1.2),
            (ZoningCategory::QuasiResidential, 1.1),
            (ZoningCategory::Category2Residential, 1.1),
            (ZoningCategory::Category1Residential, 1.05),
            (ZoningCategory::QuasiIndustrial, 0.95),
            (ZoningCategory::Industrial, 0.9),
            (ZoningCategory::ExclusiveIndustrial, 0.7),
        ]);

        let shape = BTreeMap::from([
            (LandShape::Regular, 1.0),
            (LandShape::SetbackRequired, 0.95),
            (LandShape::FlagLot, 0.8),
            (LandShape::Irregular, 0.85),
        ]);

        Self {
            location_bands,
            location_beyond: 0.8,
            zoning,
            zoning_default: 1.0,
            shape,
            shape_default: 1.0,
        }
    }
}

impl CoefficientTables {
    pub fn location_factor(&self, walk_minutes: u32) -> f64 {
        self.location_bands
            .iter()
            .find(|band| walk_minutes <= band.max_minutes)
            .map(|band| band.factor)
            .unwrap_or(self.location_beyond)
    }

    pub fn zoning_factor(&self, zoning: ZoningCategory) -> f64 {
        self.zoning
            .get(&zoning)
            .copied()
            .unwrap_or(self.zoning_default)
    }

    pub fn shape_factor(&self, shape: LandShape) -> f64 {
        self.shape.get(&shape).copied().unwrap_or(self.shape_default)
    }

    /// Human-readable band labels for the reference page, e.g. `"6–10 min"`.
    pub fn location_band_labels(&self) -> Vec<(String, f64)> {
        let mut labels = Vec::with_capacity(self.location_bands.len() + 1);
        let mut lower = 0_u32;
        for band in &self.location_bands {
            let label = if lower == 0 {
                format!("≤{} min", band.max_minutes)
            } else {
                format!("{}–{} min", lower, band.max_minutes)
            };
            labels.push((label, band.factor));
            lower = band.max_minutes.saturating_add(1);
        }
        labels.push((format!("≥{} min", lower), self.location_beyond));
        labels
    }
}

/// Fixed business rules applied after the land value is adjusted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationPolicy {
    /// Registration fees, taxes and similar, as a share of the adjusted value.
    pub misc_cost_rate: f64,
    pub bid_fraction_low: f64,
    pub bid_fraction_medium: f64,
    pub bid_fraction_high: f64,
}

impl Default for ValuationPolicy {
    fn default() -> Self {
        Self {
            misc_cost_rate: 0.05,
            bid_fraction_low: 0.8,
            bid_fraction_medium: 0.85,
            bid_fraction_high: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_bands_use_inclusive_upper_bounds() {
        let tables = CoefficientTables::default();
        assert_eq!(tables.location_factor(0), 1.2);
        assert_eq!(tables.location_factor(5), 1.2);
        assert_eq!(tables.location_factor(6), 1.1);
        assert_eq!(tables.location_factor(10), 1.1);
        assert_eq!(tables.location_factor(15), 1.0);
        assert_eq!(tables.location_factor(20), 0.9);
        assert_eq!(tables.location_factor(21), 0.8);
        assert_eq!(tables.location_factor(u32::MAX), 0.8);
    }

    #[test]
    fn zoning_defaults_cover_low_rise_categories() {
        let tables = CoefficientTables::default();
        assert_eq!(tables.zoning_factor(ZoningCategory::Commercial), 1.3);
        assert_eq!(tables.zoning_factor(ZoningCategory::Category2Residential), 1.1);
        assert_eq!(tables.zoning_factor(ZoningCategory::QuasiResidential), 1.1);
        assert_eq!(tables.zoning_factor(ZoningCategory::ExclusiveIndustrial), 0.7);
        assert_eq!(
            tables.zoning_factor(ZoningCategory::Category1LowRiseResidential),
            1.0
        );
        assert_eq!(
            tables.zoning_factor(ZoningCategory::Category2LowRiseResidential),
            1.0
        );
    }

    #[test]
    fn missing_entries_fall_back_to_defaults() {
        let mut tables = CoefficientTables::default();
        tables.shape.remove(&LandShape::FlagLot);
        tables.shape_default = 0.5;
        assert_eq!(tables.shape_factor(LandShape::FlagLot), 0.5);
        assert_eq!(tables.shape_factor(LandShape::Irregular), 0.85);

        tables.location_bands.clear();
        assert_eq!(tables.location_factor(1), tables.location_beyond);
    }

    #[test]
    fn band_labels_describe_ranges() {
        let labels = CoefficientTables::default().location_band_labels();
        let names: Vec<_> = labels.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            ["≤5 min", "6–10 min", "11–15 min", "16–20 min", "≥21 min"]
        );
        assert_eq!(labels.last().map(|(_, factor)| *factor), Some(0.8));
    }
}
