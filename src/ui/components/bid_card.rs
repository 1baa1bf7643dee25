use dioxus::prelude::*;

use crate::ui::theme::BidTone;

#[component]
pub fn BidCard(tone: BidTone, fraction: f64, amount: String) -> Element {
    let percent = format!("{:.0}%", fraction * 100.0);

    rsx! {
        div { class: "bid",
            p { class: "bid-label", "{tone.label()}（{percent}）" }
            p { class: "{tone.value_class()}", "{amount}" }
        }
    }
}
