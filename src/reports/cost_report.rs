//! Cost Report
//!
//! Turns a converted cost breakdown into the views shown to the user: the
//! display table, the distribution series, and the flat monthly trend.

use serde::Serialize;
use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::display::report::{
    double_separator, format_bar, format_currency, format_header, format_percentage, separator,
    truncate,
};
use crate::models::{BillingCycle, CostBreakdown, Currency};
use crate::services::conversion::Conversion;

/// Title used by the terminal report and the PDF export
pub const REPORT_TITLE: &str = "SaaS Cost Calculator Report";

/// Month labels of the trend projection
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const REPORT_WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 22;

/// One row of the display table
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct DisplayRow {
    #[tabled(rename = "Service")]
    pub service: String,
    #[tabled(rename = "Cost")]
    pub cost: String,
}

/// Labels and values for a proportional chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Share of each value in the positive total, in percent
    pub fn shares(&self) -> Vec<f64> {
        let total: f64 = self.values.iter().filter(|v| **v > 0.0).sum();
        self.values
            .iter()
            .map(|v| {
                if total > 0.0 && *v > 0.0 {
                    v / total * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }
}

/// One point of the monthly trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub cost: f64,
}

/// Build the display table: service name and symbol-prefixed amount
pub fn to_display_table(breakdown: &CostBreakdown, symbol: &str) -> Vec<DisplayRow> {
    breakdown
        .iter()
        .map(|line| DisplayRow {
            service: line.category.clone(),
            cost: format_currency(line.amount, symbol),
        })
        .collect()
}

/// Labels and raw values for a pie/bar chart
pub fn to_chart_series(breakdown: &CostBreakdown) -> ChartSeries {
    ChartSeries {
        labels: breakdown.categories().map(str::to_string).collect(),
        values: breakdown.amounts().collect(),
    }
}

/// Flat twelve-month projection of the total
///
/// Every month carries `total / 12` for a yearly total and `total` for a
/// monthly one.
pub fn to_monthly_trend(total_cost: f64, cycle: BillingCycle) -> Vec<TrendPoint> {
    let monthly = match cycle {
        BillingCycle::Yearly => total_cost / 12.0,
        BillingCycle::Monthly => total_cost,
    };
    MONTHS
        .iter()
        .map(|&month| TrendPoint {
            month,
            cost: monthly,
        })
        .collect()
}

/// A fully computed cost report
#[derive(Debug, Clone, Serialize)]
pub struct CostReport {
    /// Billing cycle the amounts cover
    pub cycle: BillingCycle,
    /// Conversion applied to the USD amounts
    pub conversion: Conversion,
    /// Cycle-scaled amounts in USD
    pub costs_usd: CostBreakdown,
    /// Cycle-scaled amounts in the display currency
    pub costs: CostBreakdown,
    /// Display table rows
    pub rows: Vec<DisplayRow>,
}

impl CostReport {
    /// Assemble a report from cycle-scaled USD costs and a conversion
    pub fn new(costs_usd: CostBreakdown, cycle: BillingCycle, conversion: Conversion) -> Self {
        let costs = crate::services::conversion::convert(&costs_usd, conversion.rate);
        let rows = to_display_table(&costs, conversion.symbol());
        Self {
            cycle,
            conversion,
            costs_usd,
            costs,
            rows,
        }
    }

    /// Display currency
    pub fn currency(&self) -> Currency {
        self.conversion.currency
    }

    /// Symbol used for amounts
    pub fn symbol(&self) -> &'static str {
        self.conversion.symbol()
    }

    /// Total in the display currency
    pub fn total(&self) -> f64 {
        self.costs.total()
    }

    /// Formatted total in the display currency
    pub fn total_text(&self) -> String {
        format_currency(self.total(), self.symbol())
    }

    /// Series for the cost distribution chart
    pub fn chart_series(&self) -> ChartSeries {
        to_chart_series(&self.costs)
    }

    /// Flat monthly trend of the converted total
    pub fn monthly_trend(&self) -> Vec<TrendPoint> {
        to_monthly_trend(self.total(), self.cycle)
    }

    /// Warning shown when amounts are unconverted USD values
    pub fn notice(&self) -> Option<String> {
        if self.conversion.fallback {
            Some(format!(
                "Exchange rates unavailable: amounts are USD values shown with the {} symbol",
                self.currency()
            ))
        } else {
            None
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format_header(REPORT_TITLE, REPORT_WIDTH));
        output.push('\n');
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Billing cycle: {}   Currency: {} ({})   Rate: {:.4}\n",
            self.cycle,
            self.currency(),
            self.symbol(),
            self.conversion.rate
        ));
        if let Some(notice) = self.notice() {
            output.push_str(&format!("Warning: {}\n", notice));
        }
        output.push('\n');

        let mut table = Table::new(&self.rows);
        table
            .with(Style::rounded())
            .modify(Columns::single(1), Alignment::right());
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!("Total: {}\n\n", self.total_text()));

        // Distribution
        output.push_str("Cost Distribution\n");
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        let series = self.chart_series();
        let shares = series.shares();
        let max_share = shares.iter().cloned().fold(0.0_f64, f64::max);
        for (label, share) in series.labels.iter().zip(&shares) {
            let label = if label.is_empty() { "(unnamed)" } else { label.as_str() };
            output.push_str(&format!(
                "  {:<width$} {} {:>6}\n",
                truncate(label, LABEL_WIDTH),
                format_bar(*share, max_share, BAR_WIDTH),
                format_percentage(*share),
                width = LABEL_WIDTH
            ));
        }
        output.push('\n');

        // Trend
        output.push_str("Monthly Cost Trend\n");
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        for point in self.monthly_trend() {
            output.push_str(&format!(
                "  {}  {}\n",
                point.month,
                format_currency(point.cost, self.symbol())
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExchangeRateTable;
    use crate::services::conversion::resolve_conversion;

    fn sample() -> CostBreakdown {
        vec![
            ("User Costs", 50.0),
            ("API Costs", 100.0),
            ("Storage Costs", 10.0),
            ("Email Costs", 10.0),
            ("Revenue Share", 100.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_display_table() {
        let breakdown: CostBreakdown = vec![("Big", 1234.5), ("Small", 0.5)].into_iter().collect();
        let rows = to_display_table(&breakdown, "$");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].service, "Big");
        assert_eq!(rows[0].cost, "$1,234.50");
        assert_eq!(rows[1].cost, "$0.50");
    }

    #[test]
    fn test_chart_series_keeps_order() {
        let series = to_chart_series(&sample());
        assert_eq!(series.labels[0], "User Costs");
        assert_eq!(series.values, vec![50.0, 100.0, 10.0, 10.0, 100.0]);

        let shares = series.shares();
        assert!((shares.iter().sum::<f64>() - 100.0).abs() < 1e-9);
        assert!((shares[1] - 100.0 / 270.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_all_zero() {
        let breakdown: CostBreakdown = vec![("A", 0.0)].into_iter().collect();
        let series = to_chart_series(&breakdown);
        assert_eq!(series.shares(), vec![0.0]);
    }

    #[test]
    fn test_monthly_trend_yearly() {
        let trend = to_monthly_trend(1200.0, BillingCycle::Yearly);
        assert_eq!(trend.len(), 12);
        assert!(trend.iter().all(|p| p.cost == 100.0));
        assert_eq!(trend[0].month, "Jan");
        assert_eq!(trend[11].month, "Dec");
    }

    #[test]
    fn test_monthly_trend_monthly() {
        let trend = to_monthly_trend(100.0, BillingCycle::Monthly);
        assert_eq!(trend.len(), 12);
        assert!(trend.iter().all(|p| p.cost == 100.0));
    }

    #[test]
    fn test_report_converts_and_formats() {
        let rates: ExchangeRateTable = vec![("USD", 1.0), ("EUR", 0.5)].into_iter().collect();
        let conversion = resolve_conversion(&rates, Currency::Eur);
        let report = CostReport::new(sample(), BillingCycle::Monthly, conversion);

        assert_eq!(report.costs.get("API Costs"), Some(50.0));
        assert_eq!(report.costs_usd.get("API Costs"), Some(100.0));
        assert_eq!(report.rows[1].cost, "€50.00");
        assert_eq!(report.total(), 135.0);
        assert!(report.notice().is_none());
    }

    #[test]
    fn test_report_fallback_notice() {
        let conversion = resolve_conversion(&ExchangeRateTable::new(), Currency::Gbp);
        let report = CostReport::new(sample(), BillingCycle::Monthly, conversion);

        assert_eq!(report.rows[0].cost, "£50.00");
        assert!(report.notice().unwrap().contains("GBP"));
        assert!(report.format_terminal().contains("Warning:"));
    }

    #[test]
    fn test_format_terminal_sections() {
        let conversion = resolve_conversion(&ExchangeRateTable::new(), Currency::Usd);
        let report = CostReport::new(sample(), BillingCycle::Monthly, conversion);
        let text = report.format_terminal();

        assert!(text.contains(REPORT_TITLE));
        assert!(text.contains("Revenue Share"));
        assert!(text.contains("Total: $270.00"));
        assert!(text.contains("Cost Distribution"));
        assert!(text.contains("Dec  $270.00"));
        assert!(!text.contains("Warning:"));
    }
}
