//! Dashboard and analytics models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate metrics shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: u64,
    pub total_sales: f64,
    pub total_orders: u64,
    pub products_with_posts: u64,
    pub amazon_connected: bool,
    pub instagram_connected: bool,
}

/// One day of sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub amount: f64,
    pub orders: u32,
}

/// Sales over the trailing window, keyed by day.
///
/// `BTreeMap` keeps the days ordered regardless of server iteration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    pub daily_sales: BTreeMap<NaiveDate, DailySales>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_report_orders_days() {
        let report: SalesReport = serde_json::from_value(serde_json::json!({
            "daily_sales": {
                "2025-07-03": {"amount": 120.0, "orders": 3},
                "2025-07-01": {"amount": 40.5, "orders": 1}
            }
        }))
        .unwrap();

        let days: Vec<_> = report.daily_sales.keys().collect();
        assert_eq!(days[0].to_string(), "2025-07-01");
        assert_eq!(days[1].to_string(), "2025-07-03");
        assert_eq!(
            report.daily_sales[days[1]],
            DailySales {
                amount: 120.0,
                orders: 3
            }
        );
    }
}
