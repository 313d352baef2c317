use crate::models::explorer::ExplorerDataset;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub dataset: Rc<ExplorerDataset>,
}

#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    html! {
        <div class="summary-grid">
            <div class="summary-item">
                <h3>{"Total Bills Submitted"}</h3>
                <p class="summary-value">{props.dataset.summary.total_bills}</p>
            </div>
            <div class="summary-item">
                <h3>{"Overall Average Cost/Unit"}</h3>
                <p class="summary-value positive">{props.dataset.average_cost_display()}</p>
            </div>
        </div>
    }
}
