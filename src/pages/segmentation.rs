use std::rc::Rc;
use yew::prelude::*;

use crate::components::{Chart, ClusterInsight, DataTable, render_fetch_state};
use crate::hooks::use_fetch::use_segmentation;
use crate::view_models::ChartSpec;
use crate::view_models::segmentation::SegmentationView;

#[function_component(SegmentationPage)]
pub fn segmentation_page() -> Html {
    let diaspora_only = use_state(|| false);
    let state = use_segmentation(*diaspora_only);

    let toggle = {
        let diaspora_only = diaspora_only.clone();
        Callback::from(move |_: MouseEvent| diaspora_only.set(!*diaspora_only))
    };

    let body = render_fetch_state(&*state, |data| {
        let SegmentationView {
            averages_chart,
            elbow_chart,
            scatter_chart,
            summary_table,
            insights,
            member_rows,
        } = SegmentationView::build(data, *diaspora_only);
        let toggle_label = if *diaspora_only {
            "Show All Customers"
        } else {
            "Show Diaspora Only"
        };

        html! {
            <div class="segmentation-page">
                <h1>{"Customer Segmentation"}</h1>
                <div class="page-controls">
                    <button class="toggle" onclick={toggle}>{toggle_label}</button>
                    <span class="member-count">
                        {format!("{} customers plotted", member_rows)}
                    </span>
                </div>

                <section class="chart-section">
                    <Chart id="segment-averages" spec={Rc::new(ChartSpec::from(averages_chart))} />
                </section>

                if let Some(elbow) = elbow_chart {
                    <section class="chart-section">
                        <Chart id="segment-elbow" spec={Rc::new(ChartSpec::from(elbow))} />
                    </section>
                }

                <section class="chart-section">
                    <Chart id="segment-scatter" spec={Rc::new(ChartSpec::from(scatter_chart))} />
                </section>

                <section class="table-section">
                    <h2>{"Cluster Summaries"}</h2>
                    <DataTable table={summary_table} />
                </section>

                <section class="insights-section">
                    <h2>{"Insights"}</h2>
                    <div class="insights">
                        { for insights.into_iter().map(|card| html! { <ClusterInsight {card} /> }) }
                    </div>
                </section>
            </div>
        }
    });

    html! {
        <div class="page">{body}</div>
    }
}
