//! # Sample Datasets
//!
//! The hard-coded sample data the analytics dashboards chart: a year of
//! monthly sales, category performance, customer segments, site
//! performance metrics, and the curated business-insight entries.
//!
//! Chart colors and icons stay on the frontend; these records carry the
//! data only.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Dataset Types
// =============================================================================

/// One month of the sales trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MonthlySales {
    /// Month label ("Jan" through "Dec").
    pub month: String,
    /// Orders placed.
    pub sales: i64,
    /// Unique purchasing customers.
    pub customers: i64,
    /// Revenue for the month.
    pub revenue: i64,
    /// Conversion rate in percent.
    pub conversion: f64,
}

/// Category share of sales and its growth rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryPerformance {
    pub name: String,
    /// Share of total sales in percent.
    pub value: i64,
    /// Sales volume.
    pub sales: i64,
    /// Month-over-month growth in percent.
    pub growth: f64,
}

/// A customer segment and its contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomerSegment {
    pub segment: String,
    pub customers: i64,
    pub revenue: i64,
    /// Average order value for the segment.
    pub avg_order: i64,
}

/// A site performance score against its benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PerformanceMetric {
    pub name: String,
    pub value: f64,
    pub benchmark: f64,
}

/// Impact level attached to a business insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Impact {
    Critical,
    High,
    Medium,
}

/// A curated business-insight entry for the insights panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BusinessInsight {
    pub title: String,
    pub insight: String,
    pub impact: Impact,
}

// =============================================================================
// Sample Values
// =============================================================================

/// Twelve months of sample sales trends.
pub fn monthly_sales() -> Vec<MonthlySales> {
    let rows = [
        ("Jan", 4200, 280, 2800, 3.2),
        ("Feb", 3800, 250, 2500, 3.1),
        ("Mar", 4600, 320, 3200, 3.5),
        ("Apr", 5200, 390, 3800, 3.8),
        ("May", 4900, 360, 3500, 3.6),
        ("Jun", 5800, 420, 4200, 4.1),
        ("Jul", 6200, 480, 4800, 4.3),
        ("Aug", 5900, 450, 4500, 4.0),
        ("Sep", 6800, 520, 5200, 4.5),
        ("Oct", 7200, 580, 5800, 4.7),
        ("Nov", 8100, 650, 6500, 4.9),
        ("Dec", 9200, 720, 7200, 5.1),
    ];

    rows.into_iter()
        .map(|(month, sales, customers, revenue, conversion)| MonthlySales {
            month: month.to_string(),
            sales,
            customers,
            revenue,
            conversion,
        })
        .collect()
}

/// Category share of sales with growth rates.
pub fn category_performance() -> Vec<CategoryPerformance> {
    let rows = [
        ("Electronics", 45, 12500, 12.5),
        ("Fashion", 30, 8300, 8.3),
        ("Home & Garden", 15, 4200, 15.7),
        ("Sports", 10, 2800, 6.2),
    ];

    rows.into_iter()
        .map(|(name, value, sales, growth)| CategoryPerformance {
            name: name.to_string(),
            value,
            sales,
            growth,
        })
        .collect()
}

/// Customer segments and their revenue contribution.
pub fn customer_segments() -> Vec<CustomerSegment> {
    let rows = [
        ("Premium", 1250, 562_500, 450),
        ("Regular", 3200, 576_000, 180),
        ("Occasional", 2100, 157_500, 75),
    ];

    rows.into_iter()
        .map(|(segment, customers, revenue, avg_order)| CustomerSegment {
            segment: segment.to_string(),
            customers,
            revenue,
            avg_order,
        })
        .collect()
}

/// Site performance scores against their benchmarks.
pub fn performance_metrics() -> Vec<PerformanceMetric> {
    let rows = [
        ("Website Speed", 95.0, 85.0),
        ("User Experience", 92.0, 80.0),
        ("Mobile Performance", 88.0, 75.0),
        ("SEO Score", 94.0, 85.0),
        ("Conversion Rate", 4.2, 3.0),
    ];

    rows.into_iter()
        .map(|(name, value, benchmark)| PerformanceMetric {
            name: name.to_string(),
            value,
            benchmark,
        })
        .collect()
}

/// The curated insight entries shown on the insights panel.
pub fn business_insights() -> Vec<BusinessInsight> {
    let rows = [
        (
            "Sales Performance",
            "Electronics category shows strongest growth at 12.5% month-over-month",
            Impact::High,
        ),
        (
            "Customer Segmentation",
            "Premium customers contribute 65% of revenue despite being 18% of customer base",
            Impact::Critical,
        ),
        (
            "Conversion Optimization",
            "Mobile traffic: 68% of sessions but only 45% of conversions",
            Impact::Medium,
        ),
        (
            "ROI Improvement",
            "Customer acquisition cost decreased 15% while LTV increased 22%",
            Impact::High,
        ),
    ];

    rows.into_iter()
        .map(|(title, insight, impact)| BusinessInsight {
            title: title.to_string(),
            insight: insight.to_string(),
            impact,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
