use thiserror::Error;

use super::{
    coefficients::{CoefficientTables, ValuationPolicy},
    entities::{
        sqm_to_tsubo, tsubo_to_sqm, BidRange, DemolitionTier, ValuationInput, ValuationResult,
        SQM_PER_TSUBO,
    },
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValuationError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        ValuationError::InvalidInput { field, reason }
    }
}

/// Runs the valuation with the built-in tables and policy.
pub fn compute_valuation(input: &ValuationInput) -> Result<ValuationResult, ValuationError> {
    compute_valuation_with(
        input,
        &CoefficientTables::default(),
        &ValuationPolicy::default(),
    )
}

pub fn compute_valuation_with(
    input: &ValuationInput,
    tables: &CoefficientTables,
    policy: &ValuationPolicy,
) -> Result<ValuationResult, ValuationError> {
    let (area_sqm, area_tsubo) = resolve_area(input)?;
    let roadside_unit_price = positive(input.roadside_unit_price)
        .ok_or_else(|| ValuationError::invalid("roadside unit price", "must be greater than zero"))?;
    let roadside_multiplier = nonzero_or(input.roadside_multiplier, 1.0);

    // Roadside prices are quoted in thousand yen per m²; land value is in 10k yen.
    let base_unit_price_per_sqm = roadside_unit_price * roadside_multiplier * 1000.0;
    let base_unit_price_per_tsubo = base_unit_price_per_sqm * SQM_PER_TSUBO / 10_000.0;
    let land_value = base_unit_price_per_sqm * area_sqm / 10_000.0;

    let location_factor = tables.location_factor(input.station_walk_minutes);
    let zoning_factor = tables.zoning_factor(input.zoning);
    let shape_factor = tables.shape_factor(input.land_shape);
    let adjusted_land_value = land_value * location_factor * zoning_factor * shape_factor;

    let demolition_cost = if input.has_existing_building {
        let building_area = finite_or(input.building_area_sqm, 0.0);
        let unit_price = nonzero_or(
            input.demolition_unit_price,
            DemolitionTier::default().unit_price(),
        );
        building_area * unit_price / 1000.0
    } else {
        0.0
    };
    let misc_cost = adjusted_land_value * policy.misc_cost_rate;
    let total_acquisition_cost = adjusted_land_value + demolition_cost + misc_cost;

    let target_margin_rate = finite_or(input.target_margin_rate, 0.0) / 100.0;
    let target_margin_amount = total_acquisition_cost * target_margin_rate;
    let recommended_selling_price = total_acquisition_cost + target_margin_amount;

    Ok(ValuationResult {
        area_sqm,
        area_tsubo,
        roadside_unit_price,
        roadside_multiplier,
        base_unit_price_per_tsubo,
        land_value,
        location_factor,
        zoning_factor,
        shape_factor,
        adjusted_land_value,
        demolition_cost,
        misc_cost,
        total_acquisition_cost,
        target_margin_amount,
        recommended_selling_price,
        value_per_tsubo: round_half_up(adjusted_land_value / area_tsubo),
        selling_price_per_tsubo: round_half_up(recommended_selling_price / area_tsubo),
        suggested_bids: BidRange {
            low: round_half_up(adjusted_land_value * policy.bid_fraction_low),
            medium: round_half_up(adjusted_land_value * policy.bid_fraction_medium),
            high: round_half_up(adjusted_land_value * policy.bid_fraction_high),
        },
    })
}

/// Square metres win when present; tsubo only fills in when m² is absent.
/// A supplied m² that is not a positive number is rejected outright.
fn resolve_area(input: &ValuationInput) -> Result<(f64, f64), ValuationError> {
    let invalid = || ValuationError::invalid("area", "must be greater than zero");
    let tsubo = positive(input.area_tsubo);

    match input.area_sqm {
        Some(sqm) => {
            let sqm = positive(Some(sqm)).ok_or_else(invalid)?;
            Ok((sqm, tsubo.unwrap_or_else(|| sqm_to_tsubo(sqm))))
        }
        None => tsubo
            .map(|tsubo| (tsubo_to_sqm(tsubo), tsubo))
            .ok_or_else(invalid),
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn nonzero_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        fallback
    }
}

/// Rounds halves toward positive infinity, so `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
