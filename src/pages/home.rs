use yew::prelude::*;

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    html! {
        <div class="dashboard">
            <h2>{"Welcome to the Revenue Maximizer"}</h2>
            <p>{"Select a module:"}</p>
            <ul class="module-list">
                {
                    Page::modules().iter().map(|page| {
                        let page = *page;
                        let onclick = props.navigate.reform(move |_: MouseEvent| page);
                        html! {
                            <li>
                                <button class="module-link" {onclick}>{page.title()}</button>
                                <span class="module-description">{page.description()}</span>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
