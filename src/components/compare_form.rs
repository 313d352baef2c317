use std::rc::Rc;
use yew::prelude::*;

use super::chart::CostChart;
use super::field::Field;
use super::status::{Status, StatusKind};
use crate::hooks::use_request::RequestState;
use crate::models::comparison::{CompareField, CompareForm, ComparisonResult, ComparisonView};
use crate::models::form::FormField;

#[derive(Properties, PartialEq)]
pub struct CompareFormProps {
    pub form: CompareForm,
    pub state: RequestState<ComparisonResult>,
    pub on_input: Callback<(String, String)>,
    pub on_submit: Callback<SubmitEvent>,
}

/// "Compare Your Bill" section, including the analysis once it lands.
#[function_component(CompareFormSection)]
pub fn compare_form_section(props: &CompareFormProps) -> Html {
    let field = |field: CompareField, placeholder: &'static str, input_type: &'static str| {
        html! {
            <Field
                name={field.name()}
                value={props.form.value(field).to_string()}
                {placeholder}
                {input_type}
                on_input={props.on_input.clone()}
            />
        }
    };

    let pending = props.state.is_pending();

    html! {
        <section class="card">
            <h2>{"Compare Your Bill"}</h2>
            <form class="form-grid" onsubmit={props.on_submit.clone()}>
                { field(CompareField::Provider, "Your Provider", "text") }
                { field(CompareField::City, "Your City", "text") }
                { field(CompareField::Amount, "Your Bill Amount (₹)", "number") }
                { field(CompareField::Units, "Your Units Consumed", "number") }
                <button type="submit" class="button secondary wide" disabled={pending}>
                    { if pending { "Analyzing..." } else { "Compare Now" } }
                </button>
            </form>
            {
                match &props.state {
                    RequestState::Success(result) => html! {
                        <ComparisonResultView result={result.clone()} />
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

#[derive(Properties, PartialEq)]
pub struct ComparisonResultProps {
    pub result: Rc<ComparisonResult>,
}

#[function_component(ComparisonResultView)]
pub fn comparison_result_view(props: &ComparisonResultProps) -> Html {
    let view = props.result.view();
    let bars = use_memo(props.result.clone(), |result| result.chart_bars().map(Rc::new));

    let details = match &view {
        ComparisonView::Stats {
            count,
            average,
            lowest,
            highest,
            ..
        } => html! {
            <div class="comparison-details">
                <p>{"For "}{count}{" other bills in your area:"}</p>
                <p>{"The average cost per unit is "}<strong>{average}</strong>{"."}</p>
                <p>{"The lowest cost per unit was "}<strong class="low">{lowest}</strong>{"."}</p>
                <p>{"The highest cost per unit was "}<strong class="high">{highest}</strong>{"."}</p>
            </div>
        },
        ComparisonView::NotEnoughData { message, .. } => html! {
            <p class="comparison-details">{message}</p>
        },
    };

    html! {
        <div class="comparison-result">
            <h3>{"Analysis Complete:"}</h3>
            <p class="user-cost">
                {"Your cost per unit: "}<strong>{view.user_cost()}</strong>
            </p>
            { details }
            if let Some(bars) = (*bars).clone() {
                <CostChart {bars} />
            }
        </div>
    }
}
