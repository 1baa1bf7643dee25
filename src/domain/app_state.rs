use crate::infra::roadside::{LookupError, RoadsideMatch};

use super::{
    coefficients::{CoefficientTables, ValuationPolicy},
    entities::{DemolitionTier, LandShape, ValuationResult, ZoningCategory},
    form::{FormField, ValuationForm},
    valuation::{compute_valuation_with, ValuationError},
};

pub const MISSING_REQUIRED_MESSAGE: &str = "面積と路線価は必須項目です";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Feedback for the user produced by a state transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(FormField, String),
    SelectZoning(ZoningCategory),
    SelectShape(LandShape),
    SelectDemolitionTier(DemolitionTier),
    SetExistingBuilding(bool),
    /// Outcome of looking up the form's address in the roadside table.
    ApplyRoadsideLookup(Result<RoadsideMatch, LookupError>),
    Calculate,
    CloseResult,
    Reset,
}

/// Everything the valuation screen renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub form: ValuationForm,
    pub result: Option<ValuationResult>,
    pub show_result: bool,
    pub tables: CoefficientTables,
    pub policy: ValuationPolicy,
}

impl AppState {
    pub fn update(&mut self, action: FormAction) -> Option<Notice> {
        match action {
            FormAction::Edit(field, value) => {
                self.form.set_field(field, value);
                None
            }
            FormAction::SelectZoning(zoning) => {
                self.form.zoning = zoning;
                None
            }
            FormAction::SelectShape(shape) => {
                self.form.land_shape = shape;
                None
            }
            FormAction::SelectDemolitionTier(tier) => {
                self.form.demolition_tier = tier;
                None
            }
            FormAction::SetExistingBuilding(present) => {
                self.form.has_existing_building = present;
                None
            }
            FormAction::ApplyRoadsideLookup(outcome) => Some(self.apply_lookup(outcome)),
            FormAction::Calculate => self.calculate(),
            FormAction::CloseResult => {
                self.show_result = false;
                None
            }
            FormAction::Reset => {
                self.form = ValuationForm::default();
                self.result = None;
                self.show_result = false;
                tracing::debug!("valuation form reset");
                None
            }
        }
    }

    fn apply_lookup(&mut self, outcome: Result<RoadsideMatch, LookupError>) -> Notice {
        match outcome {
            Ok(found) => {
                self.form.roadside_price = found.unit_price.to_string();
                Notice::new(
                    NoticeKind::Success,
                    format!(
                        "「{}」の路線価: {}千円/㎡ を設定しました",
                        found.matched_key, found.unit_price
                    ),
                )
            }
            Err(LookupError::EmptyAddress) => {
                Notice::new(NoticeKind::Warning, "住所を入力してください")
            }
            Err(LookupError::NotFound(_)) => Notice::new(
                NoticeKind::Warning,
                "入力された住所の路線価データが見つかりませんでした",
            ),
            Err(LookupError::Unavailable(reason)) => {
                tracing::error!(%reason, "roadside lookup unavailable");
                Notice::new(
                    NoticeKind::Error,
                    format!("路線価データを読み込めませんでした: {reason}"),
                )
            }
        }
    }

    fn calculate(&mut self) -> Option<Notice> {
        let input = self.form.to_input();
        match compute_valuation_with(&input, &self.tables, &self.policy) {
            Ok(result) => {
                tracing::info!(
                    adjusted_land_value = result.adjusted_land_value,
                    total_acquisition_cost = result.total_acquisition_cost,
                    recommended_selling_price = result.recommended_selling_price,
                    "valuation computed"
                );
                self.result = Some(result);
                self.show_result = true;
                None
            }
            Err(ValuationError::InvalidInput { field, reason }) => {
                tracing::warn!(field, reason, "valuation rejected");
                Some(Notice::new(NoticeKind::Error, MISSING_REQUIRED_MESSAGE))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> AppState {
        let mut state = AppState::default();
        state.update(FormAction::Edit(FormField::AreaSqm, "100".into()));
        state.update(FormAction::Edit(FormField::RoadsidePrice, "100".into()));
        state.update(FormAction::Edit(FormField::StationMinutes, "5".into()));
        state.update(FormAction::SetExistingBuilding(false));
        state
    }

    #[test]
    fn calculate_shows_result() {
        let mut state = filled_state();
        assert_eq!(state.update(FormAction::Calculate), None);
        assert!(state.show_result);

        let result = state.result.as_ref().unwrap();
        assert!((result.recommended_selling_price - 1449.0).abs() < 1e-9);
        // The form rounds tsubo to two decimals before it reaches the engine.
        assert_eq!(result.area_tsubo, 30.25);
    }

    #[test]
    fn calculate_without_area_keeps_result_hidden() {
        let mut state = AppState::default();
        state.update(FormAction::Edit(FormField::RoadsidePrice, "100".into()));
        let notice = state.update(FormAction::Calculate).unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, MISSING_REQUIRED_MESSAGE);
        assert!(state.result.is_none());
        assert!(!state.show_result);
    }

    #[test]
    fn rejected_recalculation_keeps_previous_result() {
        let mut state = filled_state();
        state.update(FormAction::Calculate);
        let first = state.result.clone();
        assert!(first.is_some());
        state.update(FormAction::CloseResult);

        state.update(FormAction::Edit(FormField::AreaSqm, String::new()));
        let notice = state.update(FormAction::Calculate).unwrap();

        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(state.result, first);
        assert!(!state.show_result);
    }

    #[test]
    fn close_keeps_result_and_reset_clears_everything() {
        let mut state = filled_state();
        state.update(FormAction::SelectZoning(ZoningCategory::Commercial));
        state.update(FormAction::Calculate);

        state.update(FormAction::CloseResult);
        assert!(!state.show_result);
        assert!(state.result.is_some());
        assert_eq!(state.form.zoning, ZoningCategory::Commercial);

        state.update(FormAction::Reset);
        assert_eq!(state.form, ValuationForm::default());
        assert!(state.result.is_none());
    }

    #[test]
    fn lookup_outcomes_update_price_or_warn() {
        let mut state = AppState::default();
        let notice = state
            .update(FormAction::ApplyRoadsideLookup(Ok(RoadsideMatch {
                matched_key: "松戸市小金原2".into(),
                unit_price: 77.0,
            })))
            .unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "「松戸市小金原2」の路線価: 77千円/㎡ を設定しました");
        assert_eq!(state.form.roadside_price, "77");

        let notice = state
            .update(FormAction::ApplyRoadsideLookup(Err(LookupError::NotFound(
                "野田市".into(),
            ))))
            .unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(state.form.roadside_price, "77");

        let notice = state
            .update(FormAction::ApplyRoadsideLookup(Err(LookupError::EmptyAddress)))
            .unwrap();
        assert_eq!(notice.text, "住所を入力してください");
    }

    #[test]
    fn selections_flow_into_the_result() {
        let mut state = filled_state();
        state.update(FormAction::SelectShape(LandShape::Irregular));
        state.update(FormAction::SetExistingBuilding(true));
        state.update(FormAction::Edit(FormField::BuildingArea, "100".into()));
        state.update(FormAction::SelectDemolitionTier(DemolitionTier::ReinforcedConcrete));
        state.update(FormAction::Calculate);

        let result = state.result.unwrap();
        assert_eq!(result.shape_factor, 0.85);
        assert!((result.demolition_cost - 10.0).abs() < 1e-9);
    }
}
