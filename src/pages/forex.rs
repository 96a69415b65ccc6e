use std::rc::Rc;
use yew::prelude::*;

use crate::components::{Chart, render_fetch_state};
use crate::hooks::use_fetch::use_forex;
use crate::view_models::ChartSpec;
use crate::view_models::forex::ForexView;

#[function_component(ForexSimulatorPage)]
pub fn forex_simulator_page() -> Html {
    let state = use_forex();

    let body = render_fetch_state(&*state, |data| {
        let ForexView {
            margin_chart,
            forecast_chart,
            recommendations,
        } = ForexView::build(data);

        html! {
            <div class="forex-simulator-page">
                <h1>{"Forex Simulator"}</h1>

                <section class="chart-section">
                    <h2>{"Margin by Corridor"}</h2>
                    <Chart id="forex-margin" spec={Rc::new(ChartSpec::from(margin_chart))} />
                </section>

                <section class="chart-section">
                    <h2>{"USD/KES Forecast (30 Days)"}</h2>
                    <Chart id="forex-forecast" spec={Rc::new(ChartSpec::from(forecast_chart))} />
                </section>

                <section class="recommendations">
                    <h2>{"Recommendations"}</h2>
                    if recommendations.is_empty() {
                        <p>{"No recommendations"}</p>
                    } else {
                        <ul>
                            {
                                recommendations.into_iter().map(|rec| html! {
                                    <li><strong>{rec.action}</strong>{": "}{rec.detail}</li>
                                }).collect::<Html>()
                            }
                        </ul>
                    }
                </section>
            </div>
        }
    });

    html! {
        <div class="page">{body}</div>
    }
}
