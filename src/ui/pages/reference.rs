use dioxus::prelude::*;

use crate::{
    domain::{AppState, DemolitionTier, LandShape, ZoningCategory},
    infra::roadside::builtin_table,
    ui::theme,
    util::format::{factor, grouped},
};

/// Read-only view of the tables the valuation runs on.
#[component]
pub fn ReferencePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let (tables, policy) = state.with(|st| (st.tables.clone(), st.policy.clone()));

    let location_rows: Vec<(String, String)> = tables
        .location_band_labels()
        .into_iter()
        .map(|(label, value)| (label, factor(value)))
        .collect();
    let zoning_rows: Vec<(String, String)> = ZoningCategory::ALL
        .into_iter()
        .map(|zoning| (zoning.label().to_string(), factor(tables.zoning_factor(zoning))))
        .collect();
    let shape_rows: Vec<(String, String)> = LandShape::ALL
        .into_iter()
        .map(|shape| (shape.label().to_string(), factor(tables.shape_factor(shape))))
        .collect();
    let mut cost_rows: Vec<(String, String)> = DemolitionTier::ALL
        .into_iter()
        .map(|tier| (tier.label().to_string(), format!("{} 千円/㎡", tier.unit_price())))
        .collect();
    cost_rows.push((
        "諸経費率".to_string(),
        format!("{}%", grouped(policy.misc_cost_rate * 100.0, 2)),
    ));
    cost_rows.push((
        "出し値（控えめ/標準/積極的）".to_string(),
        format!(
            "{}% / {}% / {}%",
            grouped(policy.bid_fraction_low * 100.0, 2),
            grouped(policy.bid_fraction_medium * 100.0, 2),
            grouped(policy.bid_fraction_high * 100.0, 2)
        ),
    ));

    rsx! {
        div { class: "stack",
            div { class: "{theme::GRID_TWO}",
                section { class: "{theme::PANEL}",
                    h2 { class: "panel-title", "立地係数（駅徒歩）" }
                    FactorTable { rows: location_rows }
                }
                section { class: "{theme::PANEL}",
                    h2 { class: "panel-title", "土地形状係数" }
                    FactorTable { rows: shape_rows }
                }
                section { class: "{theme::PANEL}",
                    h2 { class: "panel-title", "用途地域係数" }
                    FactorTable { rows: zoning_rows }
                }
                section { class: "{theme::PANEL}",
                    h2 { class: "panel-title", "解体単価・諸経費" }
                    FactorTable { rows: cost_rows }
                }
            }
            RoadsideTable {}
        }
    }
}

#[component]
fn FactorTable(rows: Vec<(String, String)>) -> Element {
    rsx! {
        table { class: "{theme::TABLE}",
            tbody {
                for (label, value) in rows {
                    tr {
                        td { "{label}" }
                        td { class: "{theme::NUMERIC}", "{value}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RoadsideTable() -> Element {
    let table = match builtin_table() {
        Ok(table) => table,
        Err(err) => {
            return rsx! {
                section { class: "{theme::PANEL}",
                    h2 { class: "panel-title", "路線価データ" }
                    p { class: "{theme::HINT}", "{err}" }
                }
            };
        }
    };

    let groups: Vec<(String, Vec<(String, String)>)> = table
        .areas
        .iter()
        .map(|area| {
            let rows = table
                .entries_in(area)
                .map(|entry| (entry.key.clone(), grouped(entry.unit_price, 1)))
                .collect();
            (area.clone(), rows)
        })
        .collect();
    let note = table.note.clone().unwrap_or_default();

    rsx! {
        section { class: "{theme::PANEL}",
            h2 { class: "panel-title", "路線価データ（{table.fiscal_year}年度・千円/㎡）" }
            if !note.is_empty() {
                p { class: "{theme::HINT}", "{note}" }
            }
            div { class: "{theme::GRID_THREE}",
                for (area, rows) in groups {
                    div {
                        h3 { class: "card-title", "{area}" }
                        table { class: "{theme::TABLE}",
                            thead {
                                tr { class: "{theme::TABLE_HEADER}",
                                    th { "町名" }
                                    th { "路線価" }
                                }
                            }
                            tbody {
                                for (key, price) in rows {
                                    tr {
                                        td { "{key}" }
                                        td { class: "{theme::NUMERIC}", "{price}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
