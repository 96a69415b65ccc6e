use crate::view_models::SummaryItem;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryGridProps {
    pub items: Vec<SummaryItem>,
}

#[function_component(SummaryGrid)]
pub fn summary_grid(props: &SummaryGridProps) -> Html {
    html! {
        <div class="data-summary">
            <div class="summary-grid">
                {
                    props.items.iter().map(|item| html! {
                        <div class="summary-item">
                            <h3>{&item.label}</h3>
                            <p class="summary-value">{&item.value}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
