use yew::prelude::*;

use super::field::Field;
use super::status::{Status, StatusKind};
use crate::hooks::use_request::RequestState;
use crate::models::bill::{BillField, BillForm, BillSubmission};
use crate::models::form::FormField;

pub const SUBMIT_SUCCESS: &str = "Success! Your bill was added to the dataset.";

#[derive(Properties, PartialEq)]
pub struct BillFormProps {
    pub form: BillForm,
    pub state: RequestState<BillSubmission>,
    pub on_input: Callback<(String, String)>,
    pub on_submit: Callback<SubmitEvent>,
}

/// "Contribute Your Bill Data" section.
#[function_component(BillFormSection)]
pub fn bill_form_section(props: &BillFormProps) -> Html {
    let field = |field: BillField, placeholder: &'static str, input_type: &'static str| {
        html! {
            <Field
                name={field.name()}
                value={props.form.value(field).to_string()}
                {placeholder}
                {input_type}
                required={field != BillField::Area}
                wide={field == BillField::DueDate}
                on_input={props.on_input.clone()}
            />
        }
    };

    let pending = props.state.is_pending();

    html! {
        <section class="card">
            <h2>{"Contribute Your Bill Data"}</h2>
            <form class="form-grid" onsubmit={props.on_submit.clone()}>
                { field(BillField::Provider, "Provider (e.g., Tata Power)", "text") }
                { field(BillField::City, "City (e.g., Mumbai)", "text") }
                { field(BillField::Area, "Area (optional)", "text") }
                { field(BillField::TotalAmount, "Total Amount (₹)", "number") }
                { field(BillField::UnitsConsumed, "Units Consumed (kWh)", "number") }
                { field(BillField::DueDate, "Due date", "date") }
                <button type="submit" class="button primary wide" disabled={pending}>
                    { if pending { "Submitting..." } else { "Add My Bill" } }
                </button>
            </form>
            {
                match &props.state {
                    RequestState::Success(_) => html! {
                        <Status kind={StatusKind::Success} message={SUBMIT_SUCCESS} />
                    },
                    RequestState::Failure(message) => html! {
                        <Status kind={StatusKind::Error} message={message.clone()} />
                    },
                    RequestState::Idle | RequestState::Pending => html! {},
                }
            }
        </section>
    }
}
