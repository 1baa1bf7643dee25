use dioxus::prelude::*;

use crate::{
    app::{dispatch, lookup_roadside_price},
    domain::{
        AppState, DemolitionTier, FormAction, FormField, LandShape, ValuationPolicy,
        ValuationResult, ZoningCategory,
    },
    infra::roadside::builtin_table,
    ui::{
        components::{bid_card::BidCard, kpi_card::KpiCard, toast::ToastMessage},
        theme::{self, BidTone},
    },
    util::format::{factor, grouped, man_yen},
};

#[component]
pub fn ValuationPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let showing = state.with(|st| st.show_result && st.result.is_some());

    if showing {
        rsx! { ResultView {} }
    } else {
        rsx! { FormView {} }
    }
}

#[component]
fn FormView() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let form = state.with(|st| st.form.clone());
    let has_building = form.has_existing_building;

    let coverage_hint = match builtin_table() {
        Ok(table) => format!(
            "※{}エリア対応（データは{}年度路線価に基づく参考値）",
            table.areas.join("・"),
            table.fiscal_year
        ),
        Err(_) => "※路線価データを読み込めませんでした".to_string(),
    };

    rsx! {
        div { class: "stack",
            section { class: "{theme::PANEL_FORM}",
                h2 { class: "panel-title", "基本情報" }
                div { class: "{theme::GRID_TWO}",
                    div { class: "field span-two",
                        label { class: "{theme::LABEL}", "住所（路線価検索用）" }
                        div { class: "input-row",
                            input {
                                class: "{theme::INPUT_ADDON}",
                                value: form.address.clone(),
                                placeholder: "例：松戸市小金原2",
                                oninput: move |evt: FormEvent| {
                                    dispatch(state, toasts, FormAction::Edit(FormField::Address, evt.value()))
                                },
                            }
                            button {
                                class: "{theme::BTN_LOOKUP}",
                                r#type: "button",
                                onclick: move |_| lookup_roadside_price(state, toasts),
                                "路線価検索"
                            }
                        }
                        p { class: "{theme::HINT}", "{coverage_hint}" }
                    }

                    TextField { field: FormField::AreaSqm, label: "面積（㎡）", required: true }
                    TextField { field: FormField::AreaTsubo, label: "面積（坪）", required: false }
                    TextField { field: FormField::RoadsidePrice, label: "路線価（千円/㎡）", required: true }
                    TextField { field: FormField::RoadsideMultiplier, label: "路線価倍率", required: false }
                    TextField { field: FormField::StationMinutes, label: "駅までの距離（徒歩分）", required: false }

                    div { class: "field",
                        label { class: "{theme::LABEL}", "用途地域" }
                        select {
                            class: "{theme::INPUT}",
                            onchange: move |evt: FormEvent| {
                                if let Some(zoning) = ZoningCategory::from_label(&evt.value()) {
                                    dispatch(state, toasts, FormAction::SelectZoning(zoning));
                                }
                            },
                            for zoning in ZoningCategory::ALL {
                                option {
                                    value: zoning.label(),
                                    selected: zoning == form.zoning,
                                    "{zoning.label()}"
                                }
                            }
                        }
                    }

                    div { class: "field",
                        label { class: "{theme::LABEL}", "土地形状" }
                        select {
                            class: "{theme::INPUT}",
                            onchange: move |evt: FormEvent| {
                                if let Some(shape) = LandShape::from_label(&evt.value()) {
                                    dispatch(state, toasts, FormAction::SelectShape(shape));
                                }
                            },
                            for shape in LandShape::ALL {
                                option {
                                    value: shape.label(),
                                    selected: shape == form.land_shape,
                                    "{shape.label()}"
                                }
                            }
                        }
                    }

                    div { class: "field",
                        label { class: "{theme::LABEL}", "既存建物" }
                        label { class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: has_building,
                                onchange: move |_| {
                                    dispatch(state, toasts, FormAction::SetExistingBuilding(!has_building))
                                },
                            }
                            span { "あり（解体必要）" }
                        }
                    }

                    div { class: "{theme::dependent_field(has_building)}",
                        label { class: "{theme::LABEL}", "建物面積（㎡）" }
                        input {
                            class: "{theme::INPUT}",
                            inputmode: "decimal",
                            disabled: !has_building,
                            value: form.building_area.clone(),
                            oninput: move |evt: FormEvent| {
                                dispatch(state, toasts, FormAction::Edit(FormField::BuildingArea, evt.value()))
                            },
                        }
                    }

                    div { class: "{theme::dependent_field(has_building)}",
                        label { class: "{theme::LABEL}", "解体単価（千円/㎡）" }
                        select {
                            class: "{theme::INPUT}",
                            disabled: !has_building,
                            onchange: move |evt: FormEvent| {
                                let tier = evt
                                    .value()
                                    .parse::<f64>()
                                    .ok()
                                    .and_then(DemolitionTier::from_unit_price);
                                if let Some(tier) = tier {
                                    dispatch(state, toasts, FormAction::SelectDemolitionTier(tier));
                                }
                            },
                            for tier in DemolitionTier::ALL {
                                option {
                                    value: "{tier.unit_price()}",
                                    selected: tier == form.demolition_tier,
                                    "{tier.label()}（{tier.unit_price()}千円/㎡）"
                                }
                            }
                        }
                    }

                    TextField { field: FormField::TargetMargin, label: "目標利益率（%）", required: false }
                }
            }

            div { class: "button-row",
                button {
                    class: "{theme::BTN_PRIMARY}",
                    onclick: move |_| dispatch(state, toasts, FormAction::Calculate),
                    "査定する"
                }
                button {
                    class: "{theme::BTN_SECONDARY}",
                    onclick: move |_| dispatch(state, toasts, FormAction::Reset),
                    "リセット"
                }
            }
        }
    }
}

#[component]
fn TextField(field: FormField, label: &'static str, required: bool) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let value = state.with(|st| st.form.field(field).to_string());

    rsx! {
        div { class: "field",
            label { class: "{theme::LABEL}",
                "{label}"
                if required {
                    span { class: "{theme::REQUIRED}", "*" }
                }
            }
            input {
                class: "{theme::INPUT}",
                inputmode: "decimal",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    dispatch(state, toasts, FormAction::Edit(field, evt.value()))
                },
            }
        }
    }
}

#[component]
fn ResultView() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let (result, policy) = state.with(|st| (st.result.clone(), st.policy.clone()));

    let Some(result) = result else {
        return rsx! { Fragment {} };
    };
    let sections = ResultSections::new(&result);

    rsx! {
        section { class: "{theme::PANEL_RESULT}",
            h2 { class: "panel-title centered", "査定結果" }

            div { class: "{theme::GRID_TWO}",
                KpiCard { title: "基本情報".to_string(), lines: sections.basics }
                KpiCard { title: "評価係数".to_string(), lines: sections.factors }
            }
            div { class: "{theme::GRID_TWO}",
                KpiCard {
                    title: "取得原価".to_string(),
                    lines: sections.costs,
                    total: Some(("取得原価合計".to_string(), man_yen(result.total_acquisition_cost))),
                }
                KpiCard { title: "利益・販売価格".to_string(), lines: sections.profit }
            }

            BidPanel { result: result.clone(), policy: policy }

            div { class: "button-row",
                button {
                    class: "{theme::BTN_PRIMARY}",
                    onclick: move |_| dispatch(state, toasts, FormAction::CloseResult),
                    "編集に戻る"
                }
                button {
                    class: "{theme::BTN_SECONDARY}",
                    onclick: move |_| dispatch(state, toasts, FormAction::Reset),
                    "新規査定"
                }
            }
        }
    }
}

#[component]
fn BidPanel(result: ValuationResult, policy: ValuationPolicy) -> Element {
    let bids = result.suggested_bids;

    rsx! {
        div { class: "{theme::CARD}",
            h3 { class: "card-title", "建築条件付き土地としての出し値目安" }
            div { class: "{theme::GRID_THREE}",
                BidCard { tone: BidTone::Conservative, fraction: policy.bid_fraction_low, amount: man_yen(bids.low) }
                BidCard { tone: BidTone::Standard, fraction: policy.bid_fraction_medium, amount: man_yen(bids.medium) }
                BidCard { tone: BidTone::Aggressive, fraction: policy.bid_fraction_high, amount: man_yen(bids.high) }
            }
        }
    }
}

/// Label/value rows for each result card.
struct ResultSections {
    basics: Vec<(String, String)>,
    factors: Vec<(String, String)>,
    costs: Vec<(String, String)>,
    profit: Vec<(String, String)>,
}

impl ResultSections {
    fn new(result: &ValuationResult) -> Self {
        let row = |label: &str, value: String| (label.to_string(), value);

        Self {
            basics: vec![
                row(
                    "面積",
                    format!(
                        "{} ㎡（{} 坪）",
                        grouped(result.area_sqm, 3),
                        grouped(result.area_tsubo, 3)
                    ),
                ),
                row(
                    "路線価",
                    format!(
                        "{} 千円/㎡（倍率: {}）",
                        grouped(result.roadside_unit_price, 3),
                        result.roadside_multiplier
                    ),
                ),
                row(
                    "坪単価",
                    format!("{} 万円/坪", grouped(result.base_unit_price_per_tsubo, 3)),
                ),
            ],
            factors: vec![
                row("立地係数", factor(result.location_factor)),
                row("用途地域係数", factor(result.zoning_factor)),
                row("土地形状係数", factor(result.shape_factor)),
            ],
            costs: vec![
                row("評価額", man_yen(result.adjusted_land_value)),
                row("解体費", man_yen(result.demolition_cost)),
                row("諸経費", man_yen(result.misc_cost)),
            ],
            profit: vec![
                row("目標利益", man_yen(result.target_margin_amount)),
                row("想定販売価格", man_yen(result.recommended_selling_price)),
                row(
                    "想定坪単価",
                    format!("{} 万円/坪", grouped(result.selling_price_per_tsubo, 0)),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_valuation, ValuationInput};

    #[test]
    fn result_sections_format_reference_scenario() {
        let input = ValuationInput {
            area_sqm: Some(100.0),
            roadside_unit_price: Some(100.0),
            station_walk_minutes: 5,
            target_margin_rate: 15.0,
            ..ValuationInput::default()
        };
        let result = compute_valuation(&input).unwrap();
        let sections = ResultSections::new(&result);

        assert_eq!(sections.basics[0].1, "100 ㎡（30.25 坪）");
        assert_eq!(sections.basics[1].1, "100 千円/㎡（倍率: 1）");
        assert_eq!(sections.basics[2].1, "33.058 万円/坪");
        assert_eq!(sections.factors[0].1, "1.20");
        assert_eq!(sections.costs[0].1, "1,200 万円");
        assert_eq!(sections.costs[2].1, "60 万円");
        assert_eq!(sections.profit[1].1, "1,449 万円");
        assert_eq!(sections.profit[2].1, "48 万円/坪");
    }
}
