use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Deserialize;

use crate::summary::HistoricalSummary;

/// Rendering hint carried by report requests. Both variants currently
/// produce the same document; the split exists so `detailed` can grow its
/// own layout without changing the request shape.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Summary,
    Detailed,
}

impl ReportFormat {
    /// Tolerant parse: `detailed` selects the detailed layout, anything
    /// else (including an empty hint) falls back to the summary layout.
    pub fn from_hint(hint: &str) -> Self {
        match hint {
            "detailed" => ReportFormat::Detailed,
            _ => ReportFormat::Summary,
        }
    }
}

fn sign_class(value: f64) -> &'static str {
    if value >= 0.0 {
        "positive"
    } else {
        "negative"
    }
}

/// Renders a stored summary as a self-contained HTML document: a header
/// with the period label and type, the income/expense/net-savings block,
/// and a category breakdown read from `category_data`. A missing or
/// unparseable breakdown leaves that section empty rather than failing.
pub fn render_report(summary: &HistoricalSummary, _format: ReportFormat) -> String {
    // Sorted so the rendered rows are stable across runs.
    let breakdown: BTreeMap<String, f64> = summary.category_breakdown().into_iter().collect();

    let mut categories = String::new();
    for (category, amount) in &breakdown {
        let _ = write!(
            categories,
            r#"
        <div class="category-item">
            <span>{}</span>
            <span>${:.2}</span>
        </div>"#,
            category, amount
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Financial Report</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .header {{ text-align: center; margin-bottom: 30px; }}
        .summary {{ background: #f5f5f5; padding: 20px; border-radius: 5px; margin-bottom: 20px; }}
        .summary-item {{ display: flex; justify-content: space-between; margin-bottom: 10px; }}
        .summary-item.total {{ font-weight: bold; font-size: 1.2em; border-top: 2px solid #333; padding-top: 10px; }}
        .category-breakdown {{ margin-top: 20px; }}
        .category-item {{ display: flex; justify-content: space-between; margin-bottom: 5px; }}
        .positive {{ color: green; }}
        .negative {{ color: red; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Financial Report</h1>
        <p>Period: {period_start} to {period_end}</p>
        <p>Type: {period_type}</p>
    </div>

    <div class="summary">
        <h2>Summary</h2>
        <div class="summary-item">
            <span>Total Income:</span>
            <span class="positive">${total_income:.2}</span>
        </div>
        <div class="summary-item">
            <span>Total Expenses:</span>
            <span class="negative">${total_expense:.2}</span>
        </div>
        <div class="summary-item total">
            <span>Net Savings:</span>
            <span class="{savings_class}">${total_savings:.2}</span>
        </div>
    </div>

    <div class="category-breakdown">
        <h2>Expense Categories</h2>{categories}
    </div>
</body>
</html>"#,
        period_start = summary.period_start,
        period_end = summary.period_end,
        period_type = summary.period_type,
        total_income = summary.total_income,
        total_expense = summary.total_expense,
        savings_class = sign_class(summary.total_savings),
        total_savings = summary.total_savings,
        categories = categories,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn summary(total_savings: f64, category_data: &str) -> HistoricalSummary {
        let now = Utc::now().naive_utc();
        HistoricalSummary {
            id: "s1".to_string(),
            user_id: "user-1".to_string(),
            period_type: "monthly".to_string(),
            period_start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            total_income: 5000.0,
            total_expense: 2100.0,
            total_savings,
            category_data: category_data.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn report_shows_totals_and_period() {
        let html = render_report(
            &summary(2900.0, r#"{"rent":1500.0,"food":600.0}"#),
            ReportFormat::Summary,
        );
        assert!(html.contains("Period: 2024-06-01 to 2024-07-01"));
        assert!(html.contains("Type: monthly"));
        assert!(html.contains("$5000.00"));
        assert!(html.contains("$2100.00"));
        assert!(html.contains("$2900.00"));
        assert!(html.contains("rent"));
        assert!(html.contains("$1500.00"));
    }

    #[test]
    fn negative_savings_get_the_negative_class() {
        let html = render_report(&summary(-300.0, "{}"), ReportFormat::Summary);
        assert!(html.contains(r#"<span class="negative">$-300.00</span>"#));
    }

    #[test]
    fn positive_savings_get_the_positive_class() {
        let html = render_report(&summary(2900.0, "{}"), ReportFormat::Summary);
        assert!(html.contains(r#"<span class="positive">$2900.00</span>"#));
    }

    #[test]
    fn unparseable_category_data_renders_an_empty_section() {
        let html = render_report(&summary(2900.0, "{broken"), ReportFormat::Summary);
        assert!(html.contains("Expense Categories"));
        assert!(!html.contains("category-item"));
    }

    #[test]
    fn format_hint_does_not_change_the_document_yet() {
        let source = summary(2900.0, r#"{"rent":1500.0}"#);
        let summary_html = render_report(&source, ReportFormat::Summary);
        let detailed_html = render_report(&source, ReportFormat::Detailed);
        assert_eq!(summary_html, detailed_html);
    }

    #[test]
    fn unknown_format_hints_fall_back_to_summary() {
        assert_eq!(ReportFormat::from_hint("detailed"), ReportFormat::Detailed);
        assert_eq!(ReportFormat::from_hint("summary"), ReportFormat::Summary);
        assert_eq!(ReportFormat::from_hint(""), ReportFormat::Summary);
        assert_eq!(ReportFormat::from_hint("pdf"), ReportFormat::Summary);
    }
}
