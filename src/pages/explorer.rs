use std::rc::Rc;
use yew::prelude::*;

use crate::components::bill_table::BillTable;
use crate::components::chart::ProviderChart;
use crate::components::status::{Loading, Status, StatusKind};
use crate::components::summary::Summary;
use crate::hooks::use_dataset::use_dataset;
use crate::hooks::use_request::RequestState;

#[function_component(ExplorerPage)]
pub fn explorer_page() -> Html {
    let state = use_dataset();

    let body = match &state {
        RequestState::Idle | RequestState::Pending => html! {
            <Loading label="Loading data..." />
        },
        RequestState::Failure(message) => html! {
            <Status kind={StatusKind::Error} message={message.clone()} />
        },
        RequestState::Success(dataset) => {
            let slices = Rc::new(dataset.provider_slices());
            let rows = Rc::new(dataset.rows());

            html! {
                <>
                    <Summary dataset={dataset.clone()} />
                    <div class="explorer-grid">
                        <section class="card">
                            <h3>{"Provider Distribution"}</h3>
                            <ProviderChart {slices} />
                        </section>
                        <section class="card">
                            <h3>{"Raw Data"}</h3>
                            <BillTable {rows} />
                        </section>
                    </div>
                </>
            }
        }
    };

    html! {
        <div class="explorer">
            <header class="page-header">
                <h1>{"Data Explorer"}</h1>
                <p>{"Browse the anonymized dataset."}</p>
            </header>
            { body }
        </div>
    }
}
