use yew::prelude::*;

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: Page,
    pub navigate: Callback<Page>,
}

/// Top navigation between dashboard pages
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="navbar" aria-label="Dashboard pages">
            <ul>
                {
                    Page::all().iter().map(|page| {
                        let page = *page;
                        let onclick = props.navigate.reform(move |_: MouseEvent| page);
                        let class = if page == props.current { "nav-link active" } else { "nav-link" };
                        html! {
                            <li>
                                <button {class} {onclick}>{page.title()}</button>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </nav>
    }
}
