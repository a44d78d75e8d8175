//! # shophub-insights: Static Analytics Datasets
//!
//! The sample data behind the ShopHub analytics dashboards, the KPI
//! summary derived from it, and the JSON snapshot export.
//!
//! ## What This Is (and Isn't)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Analytics Data Flow                              │
//! │                                                                     │
//! │  datasets ────────► charts (frontend)                               │
//! │     │                                                               │
//! │     ├─────────────► Kpis::from_sales() ──► KPI tiles                │
//! │     │                                                               │
//! │     └─────────────► AnalyticsSnapshot ──► "Export Data" button      │
//! │                     (pretty JSON string)                            │
//! │                                                                     │
//! │  The datasets are hard-coded samples. There is no pipeline, no      │
//! │  warehouse, and no network behind them; the dashboards are          │
//! │  presentational.                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`datasets`] - Sample dataset types and their values
//! - [`snapshot`] - KPI summary and the exportable snapshot

pub mod datasets;
pub mod snapshot;

pub use datasets::{
    business_insights, category_performance, customer_segments, monthly_sales,
    performance_metrics, BusinessInsight, CategoryPerformance, CustomerSegment, Impact,
    MonthlySales, PerformanceMetric,
};
pub use snapshot::{AnalyticsSnapshot, Kpis};
