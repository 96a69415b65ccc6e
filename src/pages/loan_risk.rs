use std::rc::Rc;
use yew::prelude::*;

use crate::components::{Chart, DataTable, SummaryGrid, render_fetch_state};
use crate::hooks::use_fetch::use_loan_risk;
use crate::view_models::ChartSpec;
use crate::view_models::loan_risk::LoanRiskView;

#[function_component(LoanRiskPage)]
pub fn loan_risk_page() -> Html {
    let state = use_loan_risk();

    // The bucket counts come from the backend unchecked; report violations.
    let mismatch = state
        .data()
        .and_then(|data| data.portfolio.check_bucket_contract().err());
    use_effect_with(mismatch, |mismatch| {
        if let Some(mismatch) = mismatch {
            gloo::console::warn!(&format!("Loan portfolio contract violated: {mismatch}"));
        }
        || ()
    });

    let body = render_fetch_state(&*state, |data| {
        let LoanRiskView {
            overview,
            distribution_chart,
            loans_table,
            bucket_check,
        } = LoanRiskView::build(data);

        html! {
            <div class="loan-risk-page">
                <h1>{"Loan Default Risk"}</h1>

                <section class="portfolio-summary">
                    <h2>{"Portfolio Overview"}</h2>
                    <SummaryGrid items={overview} />
                    if let Err(mismatch) = bucket_check {
                        <p class="contract-warning">
                            {format!("Risk bucket counts look inconsistent: {mismatch}")}
                        </p>
                    }
                </section>

                <section class="chart-section">
                    <Chart id="loan-risk-distribution" spec={Rc::new(ChartSpec::from(distribution_chart))} />
                </section>

                <section class="table-section">
                    <h2>{"Loan Risk Details"}</h2>
                    <DataTable table={loans_table} empty_message="No loans in portfolio" />
                </section>
            </div>
        }
    });

    html! {
        <div class="page">{body}</div>
    }
}
