use crate::view_models::segmentation::InsightCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClusterInsightProps {
    pub card: InsightCard,
}

#[function_component(ClusterInsight)]
pub fn cluster_insight(props: &ClusterInsightProps) -> Html {
    let card = &props.card;

    html! {
        <div class="cluster-insight">
            <h3>{&card.label}</h3>
            <p><strong>{"Profile: "}</strong>{&card.profile}</p>
            <p><strong>{"Churn Risk: "}</strong>{&card.churn_risk}</p>
            <p><strong>{"Recommended Fee: "}</strong>{&card.recommended_fee}</p>
            <p><strong>{"Actions:"}</strong></p>
            <ul>
                if card.actions.is_empty() {
                    <li>{"No actions available"}</li>
                } else {
                    { for card.actions.iter().map(|action| html! { <li>{action}</li> }) }
                }
            </ul>
            <p><strong>{"Revenue Potential: "}</strong>{&card.revenue_band}</p>
            <p><strong>{"Estimated Revenue: "}</strong>{&card.estimated_revenue}</p>
        </div>
    }
}
