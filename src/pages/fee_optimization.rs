use yew::prelude::*;

use crate::components::{DataTable, SummaryGrid, render_fetch_state};
use crate::hooks::use_fetch::use_fee_optimization;
use crate::view_models::fees::FeeView;

#[function_component(FeeOptimizationPage)]
pub fn fee_optimization_page() -> Html {
    let state = use_fee_optimization();

    let body = render_fetch_state(&*state, |data| {
        let FeeView {
            overview,
            clusters,
            top_customers,
        } = FeeView::build(data);

        html! {
            <div class="fee-optimization-page">
                <h1>{"Fee Optimization"}</h1>

                <section class="portfolio-summary">
                    <h2>{"Portfolio Overview"}</h2>
                    <SummaryGrid items={overview} />
                </section>

                <section class="cluster-section">
                    <h2>{"Cluster Insights"}</h2>
                    {
                        clusters.into_iter().map(|card| html! {
                            <div class="cluster-card">
                                <h3>{card.title}</h3>
                                <SummaryGrid items={card.items} />
                            </div>
                        }).collect::<Html>()
                    }
                </section>

                <section class="table-section">
                    <h2>{"Top Fee Customers"}</h2>
                    <DataTable table={top_customers} empty_message="No customer fee records" />
                </section>
            </div>
        }
    });

    html! {
        <div class="page">{body}</div>
    }
}
