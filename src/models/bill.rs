use super::comparison::ComparisonQuery;
use super::error::AppError;
use super::form::{FormField, parse_amount, required};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Inputs of the "Contribute Your Bill Data" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillField {
    Provider,
    City,
    Area,
    TotalAmount,
    UnitsConsumed,
    DueDate,
}

impl FormField for BillField {
    fn name(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::City => "city",
            Self::Area => "area",
            Self::TotalAmount => "totalAmount",
            Self::UnitsConsumed => "unitsConsumed",
            Self::DueDate => "dueDate",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Provider,
            Self::City,
            Self::Area,
            Self::TotalAmount,
            Self::UnitsConsumed,
            Self::DueDate,
        ]
    }
}

/// Raw input values of the bill form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillForm {
    pub provider: String,
    pub city: String,
    pub area: String,
    pub total_amount: String,
    pub units_consumed: String,
    pub due_date: String,
}

impl BillForm {
    pub fn value(&self, field: BillField) -> &str {
        match field {
            BillField::Provider => &self.provider,
            BillField::City => &self.city,
            BillField::Area => &self.area,
            BillField::TotalAmount => &self.total_amount,
            BillField::UnitsConsumed => &self.units_consumed,
            BillField::DueDate => &self.due_date,
        }
    }

    fn slot(&mut self, field: BillField) -> &mut String {
        match field {
            BillField::Provider => &mut self.provider,
            BillField::City => &mut self.city,
            BillField::Area => &mut self.area,
            BillField::TotalAmount => &mut self.total_amount,
            BillField::UnitsConsumed => &mut self.units_consumed,
            BillField::DueDate => &mut self.due_date,
        }
    }

    /// Stores `value` under `field`. Returns false when nothing changed.
    pub fn set(&mut self, field: BillField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = self.slot(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds the request body from the current inputs.
    ///
    /// Fields are checked in the order the form shows them, so the first
    /// error names the topmost invalid input.
    pub fn to_submission(&self) -> Result<BillSubmission, AppError> {
        let provider = required(&self.provider, "Provider")?;
        let city = required(&self.city, "City")?;
        let area = self.area.trim();
        let total_amount = parse_amount(&self.total_amount, "Total amount", true)?;
        let units_consumed = parse_amount(&self.units_consumed, "Units consumed", false)?;
        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Due date must be a valid date".to_string()))?;

        Ok(BillSubmission {
            provider,
            city,
            area: (!area.is_empty()).then(|| area.to_string()),
            units_consumed,
            total_amount,
            due_date,
        })
    }
}

/// Body of `POST /api/bills`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSubmission {
    pub provider: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    pub units_consumed: f64,
    pub total_amount: f64,
    pub due_date: NaiveDate,
}

impl BillSubmission {
    /// The compare query issued right after this bill was accepted.
    pub fn comparison_query(&self) -> ComparisonQuery {
        ComparisonQuery {
            provider: self.provider.clone(),
            city: self.city.clone(),
            amount: self.total_amount,
            units: self.units_consumed,
        }
    }
}

/// A stored bill as listed by `GET /api/bills`.
///
/// Missing or `null` fields decode to their empty value so one incomplete
/// row never hides the rest of the table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(alias = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub units_consumed: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub due_date: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BillForm {
        BillForm {
            provider: "Tata Power".to_string(),
            city: "Mumbai".to_string(),
            area: String::new(),
            total_amount: "1200".to_string(),
            units_consumed: "150.5".to_string(),
            due_date: "2025-03-14".to_string(),
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in BillField::all() {
            assert_eq!(BillField::from_name(field.name()), Some(*field));
        }
        assert_eq!(BillField::from_name("billingCycle"), None);
    }

    #[test]
    fn test_set_reports_change() {
        let mut form = BillForm::default();
        assert!(form.set(BillField::City, "Pune"));
        assert!(!form.set(BillField::City, "Pune"));
        assert_eq!(form.value(BillField::City), "Pune");
    }

    #[test]
    fn test_to_submission_parses_numbers_and_date() {
        let submission = filled().to_submission().unwrap();
        assert_eq!(submission.total_amount, 1200.0);
        assert_eq!(submission.units_consumed, 150.5);
        assert_eq!(
            submission.due_date,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
        assert_eq!(submission.area, None);
    }

    #[test]
    fn test_to_submission_rejects_missing_provider() {
        let mut form = filled();
        form.set(BillField::Provider, "   ");
        assert!(matches!(
            form.to_submission(),
            Err(AppError::Validation(msg)) if msg.contains("Provider")
        ));
    }

    #[test]
    fn test_empty_form_reports_first_field() {
        assert_eq!(
            BillForm::default().to_submission(),
            Err(AppError::Validation("Provider is required".to_string()))
        );

        let mut form = filled();
        form.set(BillField::City, "");
        form.set(BillField::DueDate, "");
        assert_eq!(
            form.to_submission(),
            Err(AppError::Validation("City is required".to_string()))
        );
    }

    #[test]
    fn test_to_submission_rejects_zero_units() {
        let mut form = filled();
        form.set(BillField::UnitsConsumed, "0");
        assert!(form.to_submission().is_err());
    }

    #[test]
    fn test_bill_accepts_mongo_id() {
        let json = r#"{"_id":"abc","provider":"Tata","city":"Mumbai","totalAmount":900,"dueDate":"2025-01-05"}"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.id, "abc");
        assert_eq!(bill.units_consumed, 0.0);
    }

    #[test]
    fn test_bill_tolerates_null_and_missing_fields() {
        let json = r#"{"_id":"abc","provider":"Tata","city":null,"unitsConsumed":null,"dueDate":null}"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.city, "");
        assert_eq!(bill.total_amount, 0.0);
        assert_eq!(bill.units_consumed, 0.0);
        assert_eq!(bill.due_date, "");
    }
}
