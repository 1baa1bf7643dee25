use dioxus::prelude::*;

use crate::{
    app::Route,
    ui::theme,
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "app-header-inner",
                    div {
                        h1 { class: "app-title", "{APP_NAME}" }
                        p { class: "app-version", "{version}" }
                    }
                    nav { class: "app-nav",
                        NavButton {
                            active: matches!(current_route, Route::Valuation {}),
                            onclick: move |_| { nav.push(Route::Valuation {}); },
                            label: "査定",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Reference {}),
                            onclick: move |_| { nav.push(Route::Reference {}); },
                            label: "係数・路線価表",
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
