use dioxus::prelude::*;

use crate::{
    domain::{AppState, FormAction},
    infra::roadside::builtin_table,
    ui::{
        components::toast::{push_toast, Toast, ToastMessage},
        pages::{ReferencePage, ValuationPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Valuation {},
    #[route("/reference")]
    Reference {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Runs one state transition and surfaces its notice, if any, as a toast.
pub fn dispatch(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    action: FormAction,
) {
    if let Some(notice) = state.with_mut(|st| st.update(action)) {
        push_toast(toasts, notice);
    }
}

/// Looks up the form's current address and feeds the outcome back in.
pub fn lookup_roadside_price(state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let address = state.with(|st| st.form.address.clone());
    let outcome = builtin_table().and_then(|table| table.lookup(&address));
    dispatch(state, toasts, FormAction::ApplyRoadsideLookup(outcome));
}

#[component]
pub fn Valuation() -> Element {
    rsx! { Shell { ValuationPage {} } }
}

#[component]
pub fn Reference() -> Element {
    rsx! { Shell { ReferencePage {} } }
}
