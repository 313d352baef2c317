use yew::prelude::*;

use crate::components::bill_form::BillFormSection;
use crate::components::compare_form::CompareFormSection;
use crate::config::Config;
use crate::hooks::use_request::use_request;
use crate::models::{
    bill::{BillField, BillForm, BillSubmission},
    comparison::{CompareField, CompareForm, ComparisonQuery, ComparisonResult},
    form::{FormAction, FormField},
};
use crate::services::api;

/// Runs once the backend stored `bill`: clears the form, then starts the
/// compare for the same bill when chaining is enabled.
///
/// Returns whether a chained compare was started. `start_compare` reports
/// false when a compare is already running, which leaves that one alone.
fn bill_accepted<R, C>(bill: &BillSubmission, reset_form: R, start_compare: C) -> bool
where
    R: FnOnce(),
    C: FnOnce(ComparisonQuery) -> bool,
{
    reset_form();
    Config::COMPARE_AFTER_SUBMIT && start_compare(bill.comparison_query())
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let bill_form = use_reducer(BillForm::default);
    let compare_form = use_reducer(CompareForm::default);
    let submission = use_request::<BillSubmission>();
    let comparison = use_request::<ComparisonResult>();

    // Editing the bill clears the last submission message.
    let on_bill_input = {
        let dispatcher = bill_form.dispatcher();
        let submission = submission.clone();
        Callback::from(move |(name, value): (String, String)| {
            if let Some(field) = BillField::from_name(&name) {
                dispatcher.dispatch(FormAction::Set(field, value));
                submission.reset();
            }
        })
    };

    let on_compare_input = {
        let dispatcher = compare_form.dispatcher();
        Callback::from(move |(name, value): (String, String)| {
            if let Some(field) = CompareField::from_name(&name) {
                dispatcher.dispatch(FormAction::Set(field, value));
            }
        })
    };

    let on_bill_submit = {
        let bill_form = bill_form.clone();
        let submission = submission.clone();
        let comparison = comparison.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submission.in_flight() {
                return;
            }

            let bill = match bill_form.to_submission() {
                Ok(bill) => bill,
                Err(e) => {
                    submission.fail(&e);
                    return;
                }
            };

            let dispatcher = bill_form.dispatcher();
            let comparison = comparison.clone();
            let body = bill.clone();

            submission.run(
                async move { api::submit_bill(body).await.map(|()| bill) },
                move |bill| {
                    bill_accepted(
                        bill,
                        || dispatcher.dispatch(FormAction::Reset),
                        |query| comparison.run(api::compare(query), |_| ()),
                    );
                },
            );
        })
    };

    let on_compare_submit = {
        let compare_form = compare_form.clone();
        let comparison = comparison.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match compare_form.to_query() {
                Ok(query) => {
                    comparison.run(api::compare(query), |_| ());
                }
                Err(e) => comparison.fail(&e),
            }
        })
    };

    html! {
        <div class="home-grid">
            <BillFormSection
                form={(*bill_form).clone()}
                state={submission.state().clone()}
                on_input={on_bill_input}
                on_submit={on_bill_submit}
            />
            <CompareFormSection
                form={(*compare_form).clone()}
                state={comparison.state().clone()}
                on_input={on_compare_input}
                on_submit={on_compare_submit}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_request::{RequestMachine, RequestState};
    use crate::models::error::AppError;
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Slot<T> = Rc<RefCell<RequestState<T>>>;

    fn machine<T>() -> (RequestMachine<T, Slot<T>>, Slot<T>) {
        let slot: Slot<T> = Rc::new(RefCell::new(RequestState::Idle));
        let machine = RequestMachine::new(
            slot.clone(),
            Rc::new(Cell::new(false)),
            Rc::new(Cell::new(true)),
        );
        (machine, slot)
    }

    fn bill() -> BillSubmission {
        BillSubmission {
            provider: "Tata Power".to_string(),
            city: "Mumbai".to_string(),
            area: None,
            units_consumed: 150.0,
            total_amount: 1200.0,
            due_date: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
        }
    }

    #[test]
    fn test_accepted_bill_resets_form_then_compares() {
        let (comparison, comparison_slot) = machine::<ComparisonResult>();
        let reset = Cell::new(false);
        let mut query = None;

        let started = bill_accepted(
            &bill(),
            || reset.set(true),
            |q| {
                assert!(reset.get());
                query = Some(q);
                comparison.begin()
            },
        );

        assert!(started);
        assert!(comparison_slot.borrow().is_pending());
        let query = query.unwrap();
        assert_eq!(query.provider, "Tata Power");
        assert_eq!(query.amount, 1200.0);
    }

    #[test]
    fn test_chained_compare_skipped_while_compare_running() {
        let (submission, submission_slot) = machine::<BillSubmission>();
        let (comparison, comparison_slot) = machine::<ComparisonResult>();

        assert!(comparison.begin());
        assert!(submission.begin());

        let mut chained = None;
        submission.finish(Ok(bill()), |accepted| {
            chained = Some(bill_accepted(accepted, || (), |_| comparison.begin()));
        });

        assert_eq!(chained, Some(false));
        assert!(comparison.in_flight());
        assert!(comparison_slot.borrow().is_pending());
        assert!(submission_slot.borrow().data().is_some());
    }

    #[test]
    fn test_chained_failure_lands_in_comparison() {
        let (submission, submission_slot) = machine::<BillSubmission>();
        let (comparison, comparison_slot) = machine::<ComparisonResult>();

        submission.begin();
        submission.finish(Ok(bill()), |accepted| {
            bill_accepted(accepted, || (), |_| comparison.begin());
        });
        comparison.finish(Err(AppError::Server("Comparison failed.".to_string())), |_| ());

        assert_eq!(comparison_slot.borrow().error(), Some("Comparison failed."));
        assert!(submission_slot.borrow().data().is_some());
        assert!(submission_slot.borrow().error().is_none());
    }
}
