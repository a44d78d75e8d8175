//! # KPI Summary & Snapshot Export
//!
//! The KPI tiles are derived from the monthly sales series (totals, mean
//! conversion, month-over-month growth), and the "Export Data" button
//! serializes the whole dashboard state to a pretty JSON string. Writing
//! that string anywhere is the caller's concern; nothing here touches the
//! file system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::datasets::{
    business_insights, category_performance, customer_segments, monthly_sales,
    performance_metrics, BusinessInsight, CategoryPerformance, CustomerSegment, MonthlySales,
    PerformanceMetric,
};

// =============================================================================
// KPI Summary
// =============================================================================

/// Key performance indicators derived from the monthly sales series.
///
/// Growth figures compare the latest month against the one before it, in
/// percent. Fewer than two months of data yields zero growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Kpis {
    pub total_revenue: i64,
    pub total_sales: i64,
    /// Mean conversion rate across the series, in percent.
    pub avg_conversion: f64,
    /// Latest month-over-month revenue growth, in percent.
    pub revenue_growth: f64,
    /// Latest month-over-month sales growth, in percent.
    pub sales_growth: f64,
}

impl Kpis {
    /// Derives the KPI summary from a sales series.
    pub fn from_sales(sales: &[MonthlySales]) -> Self {
        if sales.is_empty() {
            return Kpis {
                total_revenue: 0,
                total_sales: 0,
                avg_conversion: 0.0,
                revenue_growth: 0.0,
                sales_growth: 0.0,
            };
        }

        let total_revenue: i64 = sales.iter().map(|m| m.revenue).sum();
        let total_sales: i64 = sales.iter().map(|m| m.sales).sum();
        let avg_conversion =
            sales.iter().map(|m| m.conversion).sum::<f64>() / sales.len() as f64;

        let (revenue_growth, sales_growth) = match sales {
            [.., previous, latest] => (
                percent_change(previous.revenue, latest.revenue),
                percent_change(previous.sales, latest.sales),
            ),
            _ => (0.0, 0.0),
        };

        Kpis {
            total_revenue,
            total_sales,
            avg_conversion,
            revenue_growth,
            sales_growth,
        }
    }
}

/// Month-over-month change in percent. A zero baseline yields zero
/// rather than a division error.
fn percent_change(previous: i64, latest: i64) -> f64 {
    if previous == 0 {
        return 0.0;
    }

    (latest - previous) as f64 / previous as f64 * 100.0
}

// =============================================================================
// Analytics Snapshot
// =============================================================================

/// Timestamped aggregate of every dashboard dataset, the shape the
/// "Export Data" button downloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalyticsSnapshot {
    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,
    pub kpis: Kpis,
    pub sales_trends: Vec<MonthlySales>,
    pub categories: Vec<CategoryPerformance>,
    pub customer_segments: Vec<CustomerSegment>,
    pub performance_metrics: Vec<PerformanceMetric>,
    pub insights: Vec<BusinessInsight>,
}

impl AnalyticsSnapshot {
    /// Captures the current dashboard state with a fresh timestamp.
    pub fn capture() -> Self {
        let sales_trends = monthly_sales();
        let kpis = Kpis::from_sales(&sales_trends);

        AnalyticsSnapshot {
            generated_at: Utc::now(),
            kpis,
            sales_trends,
            categories: category_performance(),
            customer_segments: customer_segments(),
            performance_metrics: performance_metrics(),
            insights: business_insights(),
        }
    }

    /// Serializes the snapshot to pretty-printed JSON for download.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        info!(bytes = json.len(), "analytics snapshot exported");
        Ok(json)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
