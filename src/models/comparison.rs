use super::error::AppError;
use super::form::{FormField, parse_amount, required};
use super::format::currency;
use serde::{Deserialize, Serialize};

pub const NOT_ENOUGH_DATA: &str = "Not enough data";

/// Inputs of the "Compare Your Bill" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareField {
    Provider,
    City,
    Amount,
    Units,
}

impl FormField for CompareField {
    fn name(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::City => "city",
            Self::Amount => "amount",
            Self::Units => "units",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Provider, Self::City, Self::Amount, Self::Units]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareForm {
    pub provider: String,
    pub city: String,
    pub amount: String,
    pub units: String,
}

impl CompareForm {
    pub fn value(&self, field: CompareField) -> &str {
        match field {
            CompareField::Provider => &self.provider,
            CompareField::City => &self.city,
            CompareField::Amount => &self.amount,
            CompareField::Units => &self.units,
        }
    }

    /// Stores `value` under `field`. Returns false when nothing changed.
    pub fn set(&mut self, field: CompareField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            CompareField::Provider => &mut self.provider,
            CompareField::City => &mut self.city,
            CompareField::Amount => &mut self.amount,
            CompareField::Units => &mut self.units,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_query(&self) -> Result<ComparisonQuery, AppError> {
        Ok(ComparisonQuery {
            provider: required(&self.provider, "Provider")?,
            city: required(&self.city, "City")?,
            amount: parse_amount(&self.amount, "Bill amount", true)?,
            units: parse_amount(&self.units, "Units consumed", false)?,
        })
    }
}

/// Query string of `GET /api/compare`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonQuery {
    pub provider: String,
    pub city: String,
    pub amount: f64,
    pub units: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub count: u64,
    pub average_cost_per_unit: f64,
    pub min_cost_per_unit: f64,
    pub max_cost_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub user_cost_per_unit: f64,
    #[serde(default)]
    pub comparison: Option<ComparisonStats>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Display-ready figures for a comparison, currency already formatted.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonView {
    Stats {
        user_cost: String,
        count: String,
        average: String,
        lowest: String,
        highest: String,
    },
    NotEnoughData {
        user_cost: String,
        message: String,
    },
}

impl ComparisonView {
    pub fn user_cost(&self) -> &str {
        match self {
            Self::Stats { user_cost, .. } | Self::NotEnoughData { user_cost, .. } => user_cost,
        }
    }
}

/// One bar of the cost-per-unit chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBar {
    pub label: &'static str,
    pub value: f64,
}

impl ComparisonResult {
    /// Resolves the comparison/message pair. Stats win if both are present.
    pub fn view(&self) -> ComparisonView {
        let user_cost = currency(self.user_cost_per_unit);
        match &self.comparison {
            Some(stats) => ComparisonView::Stats {
                user_cost,
                count: stats.count.to_string(),
                average: currency(stats.average_cost_per_unit),
                lowest: currency(stats.min_cost_per_unit),
                highest: currency(stats.max_cost_per_unit),
            },
            None => ComparisonView::NotEnoughData {
                user_cost,
                message: self
                    .message
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| NOT_ENOUGH_DATA.to_string()),
            },
        }
    }

    /// Bars for the cost chart; `None` when there is nothing to compare to.
    pub fn chart_bars(&self) -> Option<Vec<CostBar>> {
        let stats = self.comparison.as_ref()?;
        Some(vec![
            CostBar {
                label: "Your cost",
                value: self.user_cost_per_unit,
            },
            CostBar {
                label: "Average",
                value: stats.average_cost_per_unit,
            },
            CostBar {
                label: "Lowest",
                value: stats.min_cost_per_unit,
            },
            CostBar {
                label: "Highest",
                value: stats.max_cost_per_unit,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_present_prefers_stats() {
        let result: ComparisonResult = serde_json::from_str(
            r#"{"userCostPerUnit":2,"comparison":{"count":1,"averageCostPerUnit":2,"minCostPerUnit":2,"maxCostPerUnit":2},"message":"ignored"}"#,
        )
        .unwrap();
        assert!(matches!(result.view(), ComparisonView::Stats { .. }));
    }

    #[test]
    fn test_neither_present_uses_fallback() {
        let result: ComparisonResult = serde_json::from_str(r#"{"userCostPerUnit":7.125}"#).unwrap();
        assert_eq!(
            result.view(),
            ComparisonView::NotEnoughData {
                user_cost: "₹7.13".to_string(),
                message: NOT_ENOUGH_DATA.to_string(),
            }
        );
        assert!(result.chart_bars().is_none());
    }

    #[test]
    fn test_compare_form_to_query() {
        let mut form = CompareForm::default();
        form.set(CompareField::Provider, "Adani");
        form.set(CompareField::City, "Mumbai");
        form.set(CompareField::Amount, "800");
        form.set(CompareField::Units, "100");

        let query = form.to_query().unwrap();
        assert_eq!(query.amount, 800.0);
        assert_eq!(query.units, 100.0);

        form.set(CompareField::Units, "");
        assert!(form.to_query().is_err());
    }
}
