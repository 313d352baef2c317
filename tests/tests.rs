#[cfg(test)]
mod tests {
    use billwise::hooks::use_request::{RequestMachine, RequestState};
    use billwise::models::{
        bill::{BillField, BillForm},
        comparison::{CompareField, CompareForm, ComparisonResult, ComparisonView},
        error::AppError,
        explorer::ExplorerDataset,
        form::{FormAction, FormField},
        page::Page,
    };
    use billwise::services::api::{
        ApiConfig, BillwiseClient, COMPARE_FALLBACK, SUBMIT_FALLBACK, server_error,
    };
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::Reducible;

    type Slot = Rc<RefCell<RequestState<u32>>>;

    // Helper function to build a request machine over a plain slot
    fn request_machine() -> (RequestMachine<u32, Slot>, Slot, Rc<Cell<bool>>) {
        let slot: Slot = Rc::new(RefCell::new(RequestState::Idle));
        let alive = Rc::new(Cell::new(true));
        let machine = RequestMachine::new(slot.clone(), Rc::new(Cell::new(false)), alive.clone());
        (machine, slot, alive)
    }

    // Helper function to fill the bill form the way a user would
    fn filled_bill_form() -> Rc<BillForm> {
        [
            (BillField::Provider, "Tata Power"),
            (BillField::City, "Mumbai"),
            (BillField::TotalAmount, "1200"),
            (BillField::UnitsConsumed, "150"),
            (BillField::DueDate, "2025-10-04"),
        ]
        .into_iter()
        .fold(Rc::new(BillForm::default()), |form, (field, value)| {
            form.reduce(FormAction::Set(field, value.to_string()))
        })
    }

    fn dataset_json() -> &'static str {
        r#"{
            "summary": { "totalBills": 4, "overallAverageCost": 7.456 },
            "providerCounts": [
                { "name": "Tata", "value": 3 },
                { "name": "Adani", "value": 1 }
            ],
            "bills": [
                {
                    "_id": "66f1",
                    "provider": "Tata",
                    "city": "Mumbai",
                    "totalAmount": 1200,
                    "unitsConsumed": 150,
                    "dueDate": "2025-10-04T00:00:00.000Z"
                }
            ]
        }"#
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_network_display() {
        let error = AppError::Network("Failed to fetch".to_string());
        assert_eq!(error.to_string(), "Failed to fetch");
    }

    #[test]
    fn test_app_error_timeout_display() {
        let error = AppError::Timeout(15_000);
        assert_eq!(error.to_string(), "Request timed out after 15000ms");
    }

    // ===== Form Reducer Tests =====

    #[test]
    fn test_update_field_is_idempotent() {
        let form = Rc::new(BillForm::default());
        let once = form.reduce(FormAction::Set(BillField::City, "Pune".to_string()));
        let twice = once
            .clone()
            .reduce(FormAction::Set(BillField::City, "Pune".to_string()));

        assert!(Rc::ptr_eq(&once, &twice));
        assert_eq!(twice.city, "Pune");
    }

    #[test]
    fn test_reset_clears_every_field() {
        let form = filled_bill_form().reduce(FormAction::Reset);

        assert!(form.is_empty());
        for field in BillField::all() {
            assert_eq!(form.value(*field), "");
        }
    }

    #[test]
    fn test_compare_form_reducer() {
        let form = Rc::new(CompareForm::default())
            .reduce(FormAction::Set(CompareField::Amount, "800".to_string()));
        assert_eq!(form.amount, "800");

        let unchanged = form
            .clone()
            .reduce(FormAction::Set(CompareField::Amount, "800".to_string()));
        assert!(Rc::ptr_eq(&form, &unchanged));
    }

    #[test]
    fn test_field_from_unknown_name() {
        assert_eq!(BillField::from_name("billingCycle"), None);
        assert_eq!(CompareField::from_name("units"), Some(CompareField::Units));
    }

    // ===== Request Construction Tests =====

    #[test]
    fn test_submit_posts_current_form_values() {
        let client = BillwiseClient::with_config(
            ApiConfig::builder().base_url("http://backend.test").build(),
        )
        .unwrap();

        let submission = filled_bill_form().to_submission().unwrap();
        let request = client.submit_request(&submission).unwrap();
        let body: serde_json::Value =
            serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "http://backend.test/api/bills");
        assert_eq!(
            body,
            json!({
                "provider": "Tata Power",
                "city": "Mumbai",
                "unitsConsumed": 150.0,
                "totalAmount": 1200.0,
                "dueDate": "2025-10-04",
            })
        );
    }

    #[test]
    fn test_chained_query_uses_submitted_bill() {
        let submission = filled_bill_form().to_submission().unwrap();
        let query = submission.comparison_query();

        assert_eq!(query.provider, "Tata Power");
        assert_eq!(query.city, "Mumbai");
        assert_eq!(query.amount, 1200.0);
        assert_eq!(query.units, 150.0);
    }

    #[test]
    fn test_non_success_message_or_fallback() {
        assert_eq!(
            server_error(r#"{"message":"Duplicate bill"}"#, SUBMIT_FALLBACK).to_string(),
            "Duplicate bill"
        );
        assert_eq!(server_error("", COMPARE_FALLBACK).to_string(), "Comparison failed.");
    }

    // ===== Comparison Tests =====

    #[test]
    fn test_comparison_with_stats() {
        let result: ComparisonResult = serde_json::from_value(json!({
            "userCostPerUnit": 5.5,
            "comparison": {
                "count": 3,
                "averageCostPerUnit": 6.0,
                "minCostPerUnit": 4.0,
                "maxCostPerUnit": 8.0
            }
        }))
        .unwrap();

        assert_eq!(
            result.view(),
            ComparisonView::Stats {
                user_cost: "₹5.50".to_string(),
                count: "3".to_string(),
                average: "₹6.00".to_string(),
                lowest: "₹4.00".to_string(),
                highest: "₹8.00".to_string(),
            }
        );

        let bars = result.chart_bars().unwrap();
        assert_eq!(bars[0].value, 5.5);
        assert_eq!(bars[1].value, 6.0);
    }

    #[test]
    fn test_comparison_with_message_only() {
        let result: ComparisonResult = serde_json::from_value(json!({
            "userCostPerUnit": 5.5,
            "message": "Not enough data"
        }))
        .unwrap();

        let view = result.view();
        assert_eq!(view.user_cost(), "₹5.50");
        assert_eq!(
            view,
            ComparisonView::NotEnoughData {
                user_cost: "₹5.50".to_string(),
                message: "Not enough data".to_string(),
            }
        );
        assert!(result.chart_bars().is_none());
    }

    // ===== Explorer Tests =====

    #[test]
    fn test_dataset_deserialization() {
        let dataset: ExplorerDataset = serde_json::from_str(dataset_json()).unwrap();

        assert_eq!(dataset.summary.total_bills, 4);
        assert_eq!(dataset.average_cost_display(), "₹7.46");
        assert_eq!(dataset.bills[0].id, "66f1");
    }

    #[test]
    fn test_provider_slice_labels() {
        let dataset: ExplorerDataset = serde_json::from_str(dataset_json()).unwrap();
        let labels: Vec<String> = dataset
            .provider_slices()
            .iter()
            .map(|s| s.label())
            .collect();

        assert_eq!(labels, vec!["Tata 75%", "Adani 25%"]);
    }

    #[test]
    fn test_bill_rows_are_formatted() {
        let dataset: ExplorerDataset = serde_json::from_str(dataset_json()).unwrap();
        let rows = dataset.rows();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, "₹1200.00");
        assert_eq!(rows[0].units, "150");
        assert_eq!(rows[0].due_date, "04/10/2025");
    }

    #[test]
    fn test_rows_survive_null_fields() {
        let dataset: ExplorerDataset = serde_json::from_value(json!({
            "summary": { "totalBills": 2, "overallAverageCost": 7.125 },
            "bills": [
                { "_id": "a", "provider": "Tata", "city": "Mumbai", "totalAmount": 900, "unitsConsumed": 100, "dueDate": "2025-01-05" },
                { "_id": "b", "provider": "Adani", "city": "Pune", "totalAmount": null, "dueDate": null }
            ]
        }))
        .unwrap();

        let rows = dataset.rows();
        assert_eq!(dataset.average_cost_display(), "₹7.13");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].due_date, "05/01/2025");
        assert_eq!(rows[1].amount, "₹0.00");
        assert_eq!(rows[1].due_date, "");
    }

    // ===== RequestState Tests =====

    #[test]
    fn test_request_state_settle() {
        let ok: RequestState<u32> = RequestState::settle(Ok(7));
        assert_eq!(ok.data().map(|d| **d), Some(7));
        assert!(ok.error().is_none());

        let failed: RequestState<u32> =
            RequestState::settle(Err(AppError::Server("Comparison failed.".to_string())));
        assert_eq!(failed.error(), Some("Comparison failed."));
        assert!(failed.data().is_none());
    }

    #[test]
    fn test_request_state_pending() {
        let pending: RequestState<u32> = RequestState::Pending;
        assert!(pending.is_pending());
        assert!(pending.data().is_none());
        assert_eq!(pending, RequestState::Pending);
        assert_ne!(pending, RequestState::Idle);
    }

    #[test]
    fn test_second_trigger_while_pending_is_ignored() {
        let (machine, slot, _) = request_machine();

        assert!(machine.begin());
        assert!(!machine.begin());
        assert!(slot.borrow().is_pending());

        machine.finish(Ok(1), |_| ());
        assert!(machine.begin());
    }

    #[test]
    fn test_previous_result_cleared_on_pending() {
        let (machine, slot, _) = request_machine();
        machine.begin();
        machine.finish(Err(AppError::Network("Failed to fetch".to_string())), |_| ());
        assert_eq!(slot.borrow().error(), Some("Failed to fetch"));

        machine.begin();
        assert_eq!(*slot.borrow(), RequestState::Pending);
    }

    #[test]
    fn test_in_flight_cleared_on_every_path() {
        let (machine, _, alive) = request_machine();

        machine.begin();
        machine.finish(Ok(2), |_| ());
        assert!(!machine.in_flight());

        machine.begin();
        machine.finish(Err(AppError::Timeout(15_000)), |_| ());
        assert!(!machine.in_flight());

        machine.begin();
        alive.set(false);
        machine.finish(Ok(3), |_| ());
        assert!(!machine.in_flight());
    }

    #[test]
    fn test_fail_while_in_flight_is_ignored() {
        let (machine, slot, _) = request_machine();
        machine.begin();

        machine.fail(&AppError::Validation("Amount is required".to_string()));
        assert!(slot.borrow().is_pending());

        machine.finish(Ok(5), |_| ());
        machine.fail(&AppError::Validation("Amount is required".to_string()));
        assert_eq!(
            slot.borrow().error(),
            Some("Invalid input: Amount is required")
        );
    }

    #[test]
    fn test_result_after_unmount_is_dropped() {
        let (machine, slot, alive) = request_machine();
        machine.begin();
        alive.set(false);

        let mut called = false;
        let committed = machine.finish(Ok(9), |_| called = true);

        assert!(!committed);
        assert!(!called);
        assert!(slot.borrow().is_pending());
    }

    // ===== Navigation Tests =====

    #[test]
    fn test_page_from_slug() {
        assert_eq!(Page::from_slug("explorer"), Page::Explorer);
        assert_eq!(Page::from_slug("About"), Page::About);
        assert_eq!(Page::from_slug("settings"), Page::Home);
        assert_eq!(Page::default(), Page::Home);
        assert!("settings".parse::<Page>().is_err());
    }
}
