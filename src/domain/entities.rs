use serde::{Deserialize, Serialize};

/// Square metres per tsubo.
pub const SQM_PER_TSUBO: f64 = 3.30578;

pub fn sqm_to_tsubo(sqm: f64) -> f64 {
    sqm / SQM_PER_TSUBO
}

pub fn tsubo_to_sqm(tsubo: f64) -> f64 {
    tsubo * SQM_PER_TSUBO
}

/// Land-use zoning (用途地域).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoningCategory {
    #[default]
    Category1LowRiseResidential,
    Category2LowRiseResidential,
    Category1Residential,
    Category2Residential,
    QuasiResidential,
    NeighborhoodCommercial,
    Commercial,
    QuasiIndustrial,
    Industrial,
    ExclusiveIndustrial,
}

impl ZoningCategory {
    pub const ALL: [ZoningCategory; 10] = [
        ZoningCategory::Category1LowRiseResidential,
        ZoningCategory::Category2LowRiseResidential,
        ZoningCategory::Category1Residential,
        ZoningCategory::Category2Residential,
        ZoningCategory::QuasiResidential,
        ZoningCategory::NeighborhoodCommercial,
        ZoningCategory::Commercial,
        ZoningCategory::QuasiIndustrial,
        ZoningCategory::Industrial,
        ZoningCategory::ExclusiveIndustrial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ZoningCategory::Category1LowRiseResidential => "第一種低層住居専用地域",
            ZoningCategory::Category2LowRiseResidential => "第二種低層住居専用地域",
            ZoningCategory::Category1Residential => "第一種住居地域",
            ZoningCategory::Category2Residential => "第二種住居地域",
            ZoningCategory::QuasiResidential => "準住居地域",
            ZoningCategory::NeighborhoodCommercial => "近隣商業地域",
            ZoningCategory::Commercial => "商業地域",
            ZoningCategory::QuasiIndustrial => "準工業地域",
            ZoningCategory::Industrial => "工業地域",
            ZoningCategory::ExclusiveIndustrial => "工業専用地域",
        }
    }

    /// Reverse of [`ZoningCategory::label`], used by the `<select>` handlers.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|zoning| zoning.label() == label)
    }
}

/// Lot shape (土地形状).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LandShape {
    #[default]
    Regular,
    SetbackRequired,
    FlagLot,
    Irregular,
}

impl LandShape {
    pub const ALL: [LandShape; 4] = [
        LandShape::Regular,
        LandShape::SetbackRequired,
        LandShape::FlagLot,
        LandShape::Irregular,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LandShape::Regular => "整形地",
            LandShape::SetbackRequired => "セットバック必要",
            LandShape::FlagLot => "旗竿地",
            LandShape::Irregular => "不整形地",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.label() == label)
    }
}

/// Demolition cost tier by construction type, priced in thousand yen per m².
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemolitionTier {
    #[default]
    Wood,
    Steel,
    ReinforcedConcrete,
}

impl DemolitionTier {
    pub const ALL: [DemolitionTier; 3] = [
        DemolitionTier::Wood,
        DemolitionTier::Steel,
        DemolitionTier::ReinforcedConcrete,
    ];

    pub fn unit_price(&self) -> f64 {
        match self {
            DemolitionTier::Wood => 45.0,
            DemolitionTier::Steel => 70.0,
            DemolitionTier::ReinforcedConcrete => 100.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemolitionTier::Wood => "木造",
            DemolitionTier::Steel => "S造",
            DemolitionTier::ReinforcedConcrete => "RC造",
        }
    }

    pub fn from_unit_price(price: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.unit_price() == price)
    }
}

/// One calculation request. Built by the form layer or directly by callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    pub area_sqm: Option<f64>,
    pub area_tsubo: Option<f64>,
    /// Roadside land price in thousand yen per m².
    pub roadside_unit_price: Option<f64>,
    pub roadside_multiplier: f64,
    pub station_walk_minutes: u32,
    pub zoning: ZoningCategory,
    pub land_shape: LandShape,
    pub has_existing_building: bool,
    pub building_area_sqm: f64,
    /// Thousand yen per m² of building floor area.
    pub demolition_unit_price: f64,
    /// Percent, `15.0` means 15%.
    pub target_margin_rate: f64,
}

impl Default for ValuationInput {
    fn default() -> Self {
        Self {
            area_sqm: None,
            area_tsubo: None,
            roadside_unit_price: None,
            roadside_multiplier: 1.0,
            station_walk_minutes: 0,
            zoning: ZoningCategory::default(),
            land_shape: LandShape::default(),
            has_existing_building: false,
            building_area_sqm: 0.0,
            demolition_unit_price: DemolitionTier::Wood.unit_price(),
            target_margin_rate: 0.0,
        }
    }
}

/// Suggested purchase offers derived from the adjusted land value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidRange {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

/// Output of a valuation. Monetary amounts are in 10k-yen (万円) unless the
/// field name says otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub area_sqm: f64,
    pub area_tsubo: f64,
    pub roadside_unit_price: f64,
    pub roadside_multiplier: f64,
    pub base_unit_price_per_tsubo: f64,
    pub land_value: f64,
    pub location_factor: f64,
    pub zoning_factor: f64,
    pub shape_factor: f64,
    pub adjusted_land_value: f64,
    pub demolition_cost: f64,
    pub misc_cost: f64,
    pub total_acquisition_cost: f64,
    pub target_margin_amount: f64,
    pub recommended_selling_price: f64,
    pub value_per_tsubo: f64,
    pub selling_price_per_tsubo: f64,
    pub suggested_bids: BidRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_for_every_variant() {
        for zoning in ZoningCategory::ALL {
            assert_eq!(ZoningCategory::from_label(zoning.label()), Some(zoning));
        }
        for shape in LandShape::ALL {
            assert_eq!(LandShape::from_label(shape.label()), Some(shape));
        }
        assert_eq!(ZoningCategory::from_label("市街化調整区域"), None);
    }

    #[test]
    fn demolition_tiers_match_unit_prices() {
        assert_eq!(DemolitionTier::from_unit_price(70.0), Some(DemolitionTier::Steel));
        assert_eq!(DemolitionTier::from_unit_price(55.0), None);
        assert_eq!(DemolitionTier::default().unit_price(), 45.0);
    }

    #[test]
    fn area_conversion_is_reversible() {
        let sqm = 165.29;
        let back = tsubo_to_sqm(sqm_to_tsubo(sqm));
        assert!((back - sqm).abs() < 1e-9);
        assert!((sqm_to_tsubo(SQM_PER_TSUBO) - 1.0).abs() < 1e-12);
    }
}
