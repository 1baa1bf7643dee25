//! Text-valued form record and the permissive parsing that turns it into a
//! [`ValuationInput`].

use serde::{Deserialize, Serialize};

use super::entities::{
    sqm_to_tsubo, tsubo_to_sqm, DemolitionTier, LandShape, ValuationInput, ZoningCategory,
};

/// Free-text fields of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Address,
    AreaSqm,
    AreaTsubo,
    RoadsidePrice,
    RoadsideMultiplier,
    StationMinutes,
    BuildingArea,
    TargetMargin,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationForm {
    pub address: String,
    pub area_sqm: String,
    pub area_tsubo: String,
    pub roadside_price: String,
    pub roadside_multiplier: String,
    pub station_minutes: String,
    pub zoning: ZoningCategory,
    pub land_shape: LandShape,
    pub has_existing_building: bool,
    pub building_area: String,
    pub demolition_tier: DemolitionTier,
    pub target_margin: String,
}

impl Default for ValuationForm {
    fn default() -> Self {
        Self {
            address: String::new(),
            area_sqm: String::new(),
            area_tsubo: String::new(),
            roadside_price: String::new(),
            roadside_multiplier: "1.0".to_string(),
            station_minutes: String::new(),
            zoning: ZoningCategory::Category1LowRiseResidential,
            land_shape: LandShape::Regular,
            has_existing_building: true,
            building_area: String::new(),
            demolition_tier: DemolitionTier::Wood,
            target_margin: "15".to_string(),
        }
    }
}

impl ValuationForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Address => &self.address,
            FormField::AreaSqm => &self.area_sqm,
            FormField::AreaTsubo => &self.area_tsubo,
            FormField::RoadsidePrice => &self.roadside_price,
            FormField::RoadsideMultiplier => &self.roadside_multiplier,
            FormField::StationMinutes => &self.station_minutes,
            FormField::BuildingArea => &self.building_area,
            FormField::TargetMargin => &self.target_margin,
        }
    }

    /// Stores `value` and keeps the two area fields in step with each other.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Address => self.address = value,
            FormField::AreaSqm => {
                let sqm = parse_number(&value).unwrap_or(0.0);
                self.area_tsubo = format!("{:.2}", sqm_to_tsubo(sqm));
                self.area_sqm = value;
            }
            FormField::AreaTsubo => {
                let tsubo = parse_number(&value).unwrap_or(0.0);
                self.area_sqm = format!("{:.2}", tsubo_to_sqm(tsubo));
                self.area_tsubo = value;
            }
            FormField::RoadsidePrice => self.roadside_price = value,
            FormField::RoadsideMultiplier => self.roadside_multiplier = value,
            FormField::StationMinutes => self.station_minutes = value,
            FormField::BuildingArea => self.building_area = value,
            FormField::TargetMargin => self.target_margin = value,
        }
    }

    /// Mandatory fields stay `None` when blank; the engine rejects them.
    /// Other numbers fall back to their defaults when blank, zero where zero
    /// is meaningless, or unreadable.
    pub fn to_input(&self) -> ValuationInput {
        ValuationInput {
            area_sqm: parse_number(&self.area_sqm),
            area_tsubo: parse_number(&self.area_tsubo).filter(|tsubo| *tsubo != 0.0),
            roadside_unit_price: parse_number(&self.roadside_price),
            roadside_multiplier: parse_number(&self.roadside_multiplier)
                .filter(|multiplier| *multiplier != 0.0)
                .unwrap_or(1.0),
            station_walk_minutes: parse_minutes(&self.station_minutes),
            zoning: self.zoning,
            land_shape: self.land_shape,
            has_existing_building: self.has_existing_building,
            building_area_sqm: parse_number(&self.building_area).unwrap_or(0.0),
            demolition_unit_price: self.demolition_tier.unit_price(),
            target_margin_rate: parse_number(&self.target_margin).unwrap_or(0.0),
        }
    }
}

/// Reads the longest numeric prefix of `text`, so `"12.5㎡"` yields `12.5`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }

    // Optional exponent, only taken when it is complete.
    let mut exp_end = end;
    if matches!(bytes.get(exp_end), Some(b'e') | Some(b'E')) {
        exp_end += 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Whole minutes; fractions are truncated and negatives read as zero.
pub fn parse_minutes(text: &str) -> u32 {
    parse_number(text)
        .map(|minutes| minutes.trunc().clamp(0.0, u32::MAX as f64) as u32)
        .unwrap_or(0)
}
