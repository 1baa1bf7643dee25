use dioxus::prelude::*;

use crate::ui::theme;

/// Titled block of label/value lines, optionally ending with an emphasised total.
#[component]
pub fn KpiCard(title: String, lines: Vec<(String, String)>, total: Option<(String, String)>) -> Element {
    rsx! {
        div {
            class: "{theme::CARD}",
            h3 { class: "card-title", "{title}" }
            for (label, value) in lines {
                p { class: "card-line",
                    span { "{label}" }
                    span { class: "{theme::NUMERIC}", "{value}" }
                }
            }
            if let Some((label, value)) = total {
                p { class: "card-line card-total",
                    span { "{label}" }
                    span { class: "{theme::NUMERIC}", "{value}" }
                }
            }
        }
    }
}
