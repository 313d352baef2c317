use super::bill::Bill;
use super::format::{currency, due_date, whole_percent};
use serde::Deserialize;

/// Slice colours, reused cyclically when there are more providers.
pub const PROVIDER_PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub total_bills: u64,
    pub overall_average_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderCount {
    pub name: String,
    pub value: f64,
}

/// Body of `GET /api/bills`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerDataset {
    pub summary: DatasetSummary,
    #[serde(default)]
    pub provider_counts: Vec<ProviderCount>,
    #[serde(default)]
    pub bills: Vec<Bill>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSlice {
    pub name: String,
    pub value: f64,
    pub percent: u32,
    pub color: &'static str,
}

impl ProviderSlice {
    pub fn label(&self) -> String {
        format!("{} {}%", self.name, self.percent)
    }
}

/// A bill with every column already formatted for the table.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub key: String,
    pub provider: String,
    pub city: String,
    pub amount: String,
    pub units: String,
    pub due_date: String,
}

impl ExplorerDataset {
    pub fn average_cost_display(&self) -> String {
        currency(self.summary.overall_average_cost)
    }

    /// Pie slices in server order.
    pub fn provider_slices(&self) -> Vec<ProviderSlice> {
        let total: f64 = self.provider_counts.iter().map(|p| p.value).sum();

        self.provider_counts
            .iter()
            .enumerate()
            .map(|(i, p)| ProviderSlice {
                name: p.name.clone(),
                value: p.value,
                percent: whole_percent(p.value, total),
                color: PROVIDER_PALETTE[i % PROVIDER_PALETTE.len()],
            })
            .collect()
    }

    pub fn rows(&self) -> Vec<BillRow> {
        self.bills
            .iter()
            .enumerate()
            .map(|(i, bill)| BillRow {
                // Ids are not guaranteed unique by the backend.
                key: format!("{}-{i}", bill.id),
                provider: bill.provider.clone(),
                city: bill.city.clone(),
                amount: currency(bill.total_amount),
                units: format!("{}", bill.units_consumed),
                due_date: due_date(&bill.due_date),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(counts: &[(&str, f64)]) -> ExplorerDataset {
        ExplorerDataset {
            summary: DatasetSummary {
                total_bills: 0,
                overall_average_cost: 0.0,
            },
            provider_counts: counts
                .iter()
                .map(|(name, value)| ProviderCount {
                    name: (*name).to_string(),
                    value: *value,
                })
                .collect(),
            bills: Vec::new(),
        }
    }

    #[test]
    fn test_palette_cycles() {
        let data = dataset(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("D", 1.0), ("E", 1.0)]);
        let slices = data.provider_slices();
        assert_eq!(slices[4].color, slices[0].color);
        assert_eq!(slices[4].percent, 20);
    }

    #[test]
    fn test_empty_counts() {
        assert!(dataset(&[]).provider_slices().is_empty());
    }
}
