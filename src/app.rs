use yew::prelude::*;

use crate::components::NavBar;
use crate::hooks::use_page::use_page;
use crate::pages::{
    FeeOptimizationPage, ForexSimulatorPage, HomePage, LoanRiskPage, Page, SegmentationPage,
};

#[function_component(App)]
pub fn app() -> Html {
    let page = use_page();

    // Each page owns its data; switching pages unmounts the previous one.
    let content = match page.page {
        Page::Home => html! { <HomePage navigate={page.navigate.clone()} /> },
        Page::Segmentation => html! { <SegmentationPage /> },
        Page::LoanRisk => html! { <LoanRiskPage /> },
        Page::FeeOptimization => html! { <FeeOptimizationPage /> },
        Page::ForexSimulator => html! { <ForexSimulatorPage /> },
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Revenue Maximizer"}</h1>
                <NavBar current={page.page} navigate={page.navigate.clone()} />
            </header>

            <main class="app-main">
                {content}
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
