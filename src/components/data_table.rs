use crate::view_models::TableData;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub table: TableData,
    #[prop_or(AttrValue::Static("No data available"))]
    pub empty_message: AttrValue,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    if props.table.is_empty() {
        return html! { <p class="table-empty">{props.empty_message.clone()}</p> };
    }

    html! {
        <div class="table-container">
            <table>
                <thead>
                    <tr>
                        { for props.table.headers.iter().map(|h| html! { <th>{*h}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        props.table.rows.iter().map(|row| html! {
                            <tr>
                                { for row.iter().map(|cell| html! { <td>{cell}</td> }) }
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}
