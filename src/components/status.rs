use crate::hooks::use_fetch::FetchState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    /// Failure message; while `None` the panel shows the loading spinner.
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.error {
        None => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading..."}</p>
            </div>
        },
        Some(msg) => html! {
            <div class="status error">
                <p>{msg}</p>
            </div>
        },
    }
}

/// Renders `body` with the loaded data, or the status panel in its place.
pub fn render_fetch_state<T>(state: &FetchState<T>, body: impl FnOnce(&T) -> Html) -> Html {
    match state {
        FetchState::Loading => html! { <Status /> },
        FetchState::Error(msg) => html! { <Status error={AttrValue::from(msg.clone())} /> },
        FetchState::Loaded(data) => body(data),
    }
}
