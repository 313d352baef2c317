use crate::models::explorer::BillRow;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BillTableProps {
    pub rows: Rc<Vec<BillRow>>,
}

/// Every bill in the dataset, unpaginated.
#[function_component(BillTable)]
pub fn bill_table(props: &BillTableProps) -> Html {
    if props.rows.is_empty() {
        return html! { <p class="empty">{"No bills submitted yet."}</p> };
    }

    html! {
        <div class="table-scroll">
            <table class="bill-table">
                <thead>
                    <tr>
                        <th>{"Provider"}</th>
                        <th>{"City"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Units"}</th>
                        <th>{"Due Date"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr key={row.key.clone()}>
                            <td>{&row.provider}</td>
                            <td>{&row.city}</td>
                            <td>{&row.amount}</td>
                            <td>{&row.units}</td>
                            <td>{&row.due_date}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
