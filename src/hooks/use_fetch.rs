use serde::de::DeserializeOwned;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    fees::FeeOptimizationResponse, forex::ForexResponse, loan_risk::LoanRiskResponse,
    segmentation::SegmentationResponse,
};
use crate::services::api::{Endpoint, fetch_endpoint};
use crate::services::request::RequestTracker;

/// Lifecycle of one page's data: `Loading` until the request settles, then
/// `Loaded` or `Error` until the next trigger starts over.
#[derive(Debug)]
pub enum FetchState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(data) => FetchState::Loaded(Rc::clone(data)),
            FetchState::Error(msg) => FetchState::Error(msg.clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for FetchState<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FetchState::Loading, FetchState::Loading) => true,
            (FetchState::Loaded(a), FetchState::Loaded(b)) => a == b,
            (FetchState::Error(a), FetchState::Error(b)) => a == b,
            _ => false,
        }
    }
}

/// Fetches `endpoint` on mount and again whenever `deps` changes.
///
/// Each fetch takes a ticket from the page's [`RequestTracker`]; a response is
/// applied only if its ticket is still current, so a slow earlier request can
/// never overwrite a newer one or touch an unmounted page.
#[hook]
pub fn use_endpoint<T, D>(endpoint: Endpoint, deps: D) -> UseStateHandle<FetchState<T>>
where
    T: DeserializeOwned + 'static,
    D: PartialEq + 'static,
{
    let state = use_state(|| FetchState::Loading);
    let tracker = use_memo((), |_| RequestTracker::new());

    {
        let state = state.clone();

        use_effect_with(deps, move |_| {
            let ticket = tracker.issue();
            state.set(FetchState::Loading);
            gloo::console::log!(&format!(
                "Fetching {endpoint} (request #{})",
                ticket.sequence()
            ));

            let in_flight = tracker.clone();
            spawn_local(async move {
                let result = fetch_endpoint::<T>(endpoint).await;

                if !in_flight.is_current(ticket) {
                    gloo::console::debug!(&format!(
                        "Discarding stale response for {endpoint} (request #{})",
                        ticket.sequence()
                    ));
                    return;
                }

                match result {
                    Ok(data) => state.set(FetchState::Loaded(Rc::new(data))),
                    Err(e) => {
                        gloo::console::error!(&format!("{endpoint}: {e}"));
                        state.set(FetchState::Error(endpoint.failure_message().to_string()));
                    }
                }
            });

            move || tracker.invalidate()
        });
    }

    state
}

/// Segmentation data, refetched whenever the diaspora toggle flips.
#[hook]
pub fn use_segmentation(diaspora_only: bool) -> UseStateHandle<FetchState<SegmentationResponse>> {
    use_endpoint(Endpoint::Segmentation, diaspora_only)
}

#[hook]
pub fn use_loan_risk() -> UseStateHandle<FetchState<LoanRiskResponse>> {
    use_endpoint(Endpoint::LoanRisk, ())
}

#[hook]
pub fn use_fee_optimization() -> UseStateHandle<FetchState<FeeOptimizationResponse>> {
    use_endpoint(Endpoint::FeeOptimization, ())
}

#[hook]
pub fn use_forex() -> UseStateHandle<FetchState<ForexResponse>> {
    use_endpoint(Endpoint::ForexSimulator, ())
}
