//! # Report Engine
//!
//! Builds the end-of-day report from the product list, today's sales and the
//! system configuration.
//!
//! ## Two Views of the Inventory
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Report Generation                                    │
//! │                                                                         │
//! │  products (session list)                                               │
//! │       │                                                                 │
//! │       ├──► snapshot = products.to_vec()   (frozen, pre-sale)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_sales(products, sales)             (current -= sold)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build_report(snapshot, working, ...)                                  │
//! │                                                                         │
//! │   Section               Reads                                           │
//! │   ───────────────────   ──────────────────────────────                 │
//! │   1. Emergency stock    working                                         │
//! │   2. Expiry             working                                         │
//! │   3. Bestsellers        snapshot + sales                                │
//! │   4. Sales summary      snapshot + sales                                │
//! │   5. Analysis           snapshot + sales (leaders),                     │
//! │                         working (excess stock, reorder)                 │
//! │   6. Overall status     working                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sales for names that aren't in the product list are ignored everywhere.
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use stockwatch_core::report::generate_report_on;
//! use stockwatch_core::{Category, Money, Product, SalesRecord, SystemConfig};
//!
//! let mut products = vec![Product::new("Milk", Money::from_units(1000), Category::Food, 10, 10)];
//! let sales: SalesRecord = [("Milk", 2)].into_iter().collect();
//! let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
//!
//! let text = generate_report_on(&mut products, &sales, &SystemConfig::default(), today);
//! assert_eq!(products[0].current_stock, 8);
//! assert!(text.contains("Milk: ₩2000 (2 × ₩1000)"));
//! ```

use std::cmp::Ordering;
use std::fmt;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::money::Money;
use crate::types::{Category, Product, SalesRecord, SystemConfig};
use crate::{BESTSELLER_LIMIT, EXCESS_STOCK_FACTOR};

// =============================================================================
// Report Sections
// =============================================================================

/// A product at or below the stock threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockItem {
    pub name: String,
    pub category: Category,
    pub current_stock: i64,
    pub optimal_stock: i64,
    /// `optimal - current`, not clamped.
    pub units_needed: i64,
    pub stock_ratio: f64,
}

/// A product inside the expiry warning window, with its markdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiringItem {
    pub name: String,
    pub days_left: i64,
    pub discount_rate: f64,
    pub original_price: Money,
    pub discounted_price: Money,
}

impl ExpiringItem {
    /// Discount as a whole percentage, truncated toward zero.
    pub fn discount_percent(&self) -> i64 {
        (self.discount_rate * 100.0) as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bestseller {
    pub rank: usize,
    pub name: String,
    pub quantity: i64,
    pub revenue: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub revenue: Money,
}

/// Revenue per product and the day's totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalesSummary {
    pub lines: Vec<SalesLine>,
    pub total_revenue: Money,
    pub total_quantity: i64,
}

/// The product that leads (or trails) on one metric.
///
/// `name` is `None` when no product qualified; `sold` and `value` are then 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricLeader {
    pub name: Option<String>,
    pub sold: i64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcessItem {
    pub name: String,
    pub current_stock: i64,
}

/// Products to reorder and how many units in total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReorderSummary {
    pub product_count: usize,
    pub total_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagementAnalysis {
    pub top_turnover: MetricLeader,
    pub bottom_turnover: MetricLeader,
    pub top_efficiency: MetricLeader,
    pub excess_stock: Vec<ExcessItem>,
    pub reorder: ReorderSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStatus {
    pub product_count: usize,
    pub total_stock: i64,
    pub inventory_value: Money,
    pub low_stock_count: usize,
    pub expiring_count: usize,
}

/// The complete end-of-day report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub generated_on: NaiveDate,
    pub threshold_percent: i64,
    pub expiry_warning_days: i64,
    pub emergency_stock: Vec<LowStockItem>,
    pub expiring: Vec<ExpiringItem>,
    pub bestsellers: Vec<Bestseller>,
    pub sales: SalesSummary,
    pub analysis: ManagementAnalysis,
    pub status: OverallStatus,
}

// =============================================================================
// Entry Points
// =============================================================================

/// Generates the report for the local calendar date.
///
/// Side effect: every product in `products` with a sales entry has its
/// `current_stock` reduced by the units sold.
pub fn generate_report(
    products: &mut [Product],
    sales: &SalesRecord,
    config: &SystemConfig,
) -> String {
    generate_report_on(products, sales, config, Local::now().date_naive())
}

/// Same as [`generate_report`] with an explicit "today".
pub fn generate_report_on(
    products: &mut [Product],
    sales: &SalesRecord,
    config: &SystemConfig,
    today: NaiveDate,
) -> String {
    let snapshot = products.to_vec();
    apply_sales(products, sales);
    build_report(&snapshot, products, sales, config, today).to_string()
}

/// Takes each product's sold units off its current stock.
///
/// Products without a sales entry are untouched. Stock may go negative;
/// it saturates at the `i64` range rather than wrapping.
pub fn apply_sales(products: &mut [Product], sales: &SalesRecord) {
    for product in products.iter_mut() {
        if let Some(sold) = sales.get(&product.name) {
            product.current_stock = product.current_stock.saturating_sub(sold);
        }
    }
}

/// Builds the report from the pre-sale `snapshot` and the post-sale `working`
/// list.
pub fn build_report(
    snapshot: &[Product],
    working: &[Product],
    sales: &SalesRecord,
    config: &SystemConfig,
    today: NaiveDate,
) -> DailyReport {
    DailyReport {
        generated_on: today,
        threshold_percent: config.threshold_percent(),
        expiry_warning_days: config.expiry_warning_days,
        emergency_stock: emergency_stock(working, config),
        expiring: expiring_products(working, config, today),
        bestsellers: bestsellers(snapshot, sales),
        sales: sales_summary(snapshot, sales),
        analysis: management_analysis(snapshot, working, sales, config),
        status: overall_status(working, config, today),
    }
}

// =============================================================================
// Section Builders
// =============================================================================

fn emergency_stock(working: &[Product], config: &SystemConfig) -> Vec<LowStockItem> {
    working
        .iter()
        .filter(|p| p.is_stock_low(config.stock_threshold))
        .map(|p| LowStockItem {
            name: p.name.clone(),
            category: p.category,
            current_stock: p.current_stock,
            optimal_stock: p.optimal_stock,
            units_needed: p.optimal_stock.saturating_sub(p.current_stock),
            stock_ratio: p.stock_ratio(),
        })
        .collect()
}

fn expiring_products(
    working: &[Product],
    config: &SystemConfig,
    today: NaiveDate,
) -> Vec<ExpiringItem> {
    let mut expiring: Vec<&Product> = working
        .iter()
        .filter(|p| p.is_expiring_soon(config.expiry_warning_days, today))
        .collect();
    // stable: ties keep list order
    expiring.sort_by_key(|p| p.days_until_expiry(today));

    expiring
        .into_iter()
        .map(|p| {
            let days_left = p.days_until_expiry(today).unwrap_or(0);
            let discount_rate = config.discount_policy.rate_for(days_left);
            ExpiringItem {
                name: p.name.clone(),
                days_left,
                discount_rate,
                original_price: p.price,
                discounted_price: p.price.apply_discount_rate(discount_rate),
            }
        })
        .collect()
}

fn bestsellers(snapshot: &[Product], sales: &SalesRecord) -> Vec<Bestseller> {
    let mut ranked: Vec<(&Product, i64, Money)> = snapshot
        .iter()
        .filter_map(|p| {
            sales
                .get(&p.name)
                .map(|sold| (p, sold, p.price.multiply_quantity(sold)))
        })
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2));

    ranked
        .into_iter()
        .take(BESTSELLER_LIMIT)
        .enumerate()
        .map(|(i, (p, quantity, revenue))| Bestseller {
            rank: i + 1,
            name: p.name.clone(),
            quantity,
            revenue,
        })
        .collect()
}

fn sales_summary(snapshot: &[Product], sales: &SalesRecord) -> SalesSummary {
    let mut summary = SalesSummary::default();
    for entry in sales.iter() {
        let Some(product) = snapshot.iter().find(|p| p.name == entry.name) else {
            continue;
        };
        let revenue = product.price.multiply_quantity(entry.quantity);
        summary.total_revenue += revenue;
        summary.total_quantity = summary.total_quantity.saturating_add(entry.quantity);
        summary.lines.push(SalesLine {
            name: product.name.clone(),
            quantity: entry.quantity,
            unit_price: product.price,
            revenue,
        });
    }
    summary
}

fn management_analysis(
    snapshot: &[Product],
    working: &[Product],
    sales: &SalesRecord,
    config: &SystemConfig,
) -> ManagementAnalysis {
    let sold_products: Vec<(&Product, i64)> = snapshot
        .iter()
        .filter_map(|p| sales.get(&p.name).map(|sold| (p, sold)))
        .collect();

    let top_turnover = first_by(
        sold_products.iter().map(|&(p, sold)| (p, sold, p.stock_turnover(sold))),
        Ordering::Greater,
    );
    let bottom_turnover = first_by(
        snapshot.iter().map(|p| {
            let sold = sales.quantity_of(&p.name);
            (p, sold, p.stock_turnover(sold))
        }),
        Ordering::Less,
    );
    let top_efficiency = first_by(
        sold_products.iter().map(|&(p, sold)| (p, sold, p.sales_efficiency(sold))),
        Ordering::Greater,
    );

    let mut excess: Vec<&Product> = working
        .iter()
        .filter(|p| p.current_stock as f64 > p.optimal_stock as f64 * EXCESS_STOCK_FACTOR)
        .collect();
    excess.sort_by(|a, b| {
        b.stock_ratio()
            .partial_cmp(&a.stock_ratio())
            .unwrap_or(Ordering::Equal)
    });

    let reorder = working
        .iter()
        .filter(|p| p.is_stock_low(config.stock_threshold))
        .fold(ReorderSummary::default(), |mut acc, p| {
            acc.product_count += 1;
            acc.total_quantity = acc
                .total_quantity
                .saturating_add(p.optimal_stock.saturating_sub(p.current_stock));
            acc
        });

    ManagementAnalysis {
        top_turnover,
        bottom_turnover,
        top_efficiency,
        excess_stock: excess
            .into_iter()
            .map(|p| ExcessItem {
                name: p.name.clone(),
                current_stock: p.current_stock,
            })
            .collect(),
        reorder,
    }
}

/// Picks the first candidate whose value compares `wanted` against every
/// later one. Earlier candidates win ties.
fn first_by<'a>(
    candidates: impl Iterator<Item = (&'a Product, i64, f64)>,
    wanted: Ordering,
) -> MetricLeader {
    candidates
        .fold(None::<(&'a Product, i64, f64)>, |best, candidate| match best {
            Some(current) if candidate.2.partial_cmp(&current.2) != Some(wanted) => {
                Some(current)
            }
            _ => Some(candidate),
        })
        .map(|(p, sold, value)| MetricLeader {
            name: Some(p.name.clone()),
            sold,
            value,
        })
        .unwrap_or_default()
}

fn overall_status(working: &[Product], config: &SystemConfig, today: NaiveDate) -> OverallStatus {
    OverallStatus {
        product_count: working.len(),
        total_stock: working
            .iter()
            .fold(0_i64, |acc, p| acc.saturating_add(p.current_stock)),
        inventory_value: working
            .iter()
            .map(|p| p.price.multiply_quantity(p.current_stock))
            .sum(),
        low_stock_count: working
            .iter()
            .filter(|p| p.is_stock_low(config.stock_threshold))
            .count(),
        expiring_count: working
            .iter()
            .filter(|p| p.is_expiring_soon(config.expiry_warning_days, today))
            .count(),
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Whole-percent display, rounded half away from zero.
fn percent(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    format!("{}", value.round() as i64)
}

/// One-decimal display, rounded half away from zero (`6.25` → `6.3`).
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

fn write_leader(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    leader: &MetricLeader,
    unit: &str,
) -> fmt::Result {
    writeln!(
        f,
        "- {}: {} ({} sold, {}% {})",
        label,
        leader.name.as_deref().unwrap_or("N/A"),
        leader.sold,
        percent(leader.value),
        unit
    )
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Smart Inventory Report ({}) ===", self.generated_on)?;

        writeln!(f)?;
        writeln!(
            f,
            "[Emergency stock] (stock ratio at or below {}%)",
            self.threshold_percent
        )?;
        if self.emergency_stock.is_empty() {
            writeln!(f, "No products are low on stock.")?;
        }
        for item in &self.emergency_stock {
            writeln!(
                f,
                "- {}({}): current {}, optimal {} (order {}) [stock ratio: {}%]",
                item.name,
                item.category,
                item.current_stock,
                item.optimal_stock,
                item.units_needed,
                one_decimal(item.stock_ratio)
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "[Expiry management] (expiring within {} days)",
            self.expiry_warning_days
        )?;
        if self.expiring.is_empty() {
            writeln!(f, "No products are close to expiry.")?;
        }
        for item in &self.expiring {
            let when = if item.days_left <= 0 {
                "expires today".to_string()
            } else {
                format!("{} days left", item.days_left)
            };
            writeln!(
                f,
                "- {}: {}, {}% discount ({} -> {})",
                item.name,
                when,
                item.discount_percent(),
                item.original_price,
                item.discounted_price
            )?;
        }

        writeln!(f)?;
        writeln!(f, "[Today's bestsellers TOP {}]", BESTSELLER_LIMIT)?;
        if self.bestsellers.is_empty() {
            writeln!(f, "No sales recorded.")?;
        }
        for b in &self.bestsellers {
            writeln!(
                f,
                "{}. {} ({} sold, revenue {})",
                b.rank, b.name, b.quantity, b.revenue
            )?;
        }

        writeln!(f)?;
        writeln!(f, "[Sales]")?;
        for line in &self.sales.lines {
            writeln!(
                f,
                "* {}: {} ({} × {})",
                line.name, line.revenue, line.quantity, line.unit_price
            )?;
        }
        writeln!(
            f,
            "Total revenue today: {} ({} units sold)",
            self.sales.total_revenue, self.sales.total_quantity
        )?;

        let analysis = &self.analysis;
        writeln!(f)?;
        writeln!(f, "[Management analysis]")?;
        write_leader(f, "Highest stock turnover", &analysis.top_turnover, "turnover")?;
        write_leader(f, "Lowest stock turnover", &analysis.bottom_turnover, "turnover")?;
        write_leader(f, "Best sales efficiency", &analysis.top_efficiency, "efficiency")?;
        let excess = if analysis.excess_stock.is_empty() {
            "none".to_string()
        } else {
            analysis
                .excess_stock
                .iter()
                .map(|e| format!("{} ({})", e.name, e.current_stock))
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(f, "- Excess stock: {}", excess)?;
        writeln!(
            f,
            "- Reorder recommended: {} products, {} units total",
            analysis.reorder.product_count, analysis.reorder.total_quantity
        )?;

        let status = &self.status;
        writeln!(f)?;
        writeln!(f, "[Overall status]")?;
        writeln!(f, "- Registered products: {}", status.product_count)?;
        writeln!(f, "- Total stock on hand: {}", status.total_stock)?;
        writeln!(f, "- Inventory value: {}", status.inventory_value)?;
        writeln!(
            f,
            "- Low-stock products: {} (at or below {}%)",
            status.low_stock_count, self.threshold_percent
        )?;
        writeln!(
            f,
            "- Expiring soon: {} (within {} days)",
            status.expiring_count, self.expiry_warning_days
        )?;
        write!(f, "Report complete.")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()
    }

    fn product(name: &str, price: i64, optimal: i64, current: i64) -> Product {
        Product::new(name, Money::from_units(price), Category::Snack, optimal, current)
    }

    fn report_for(products: &[Product], sales: &SalesRecord) -> DailyReport {
        let mut working = products.to_vec();
        apply_sales(&mut working, sales);
        build_report(products, &working, sales, &SystemConfig::default(), today())
    }

    #[test]
    fn test_generate_report_subtracts_sales() {
        let mut products = vec![
            product("Milk", 1000, 20, 10),
            product("Chips", 1500, 20, 20),
        ];
        let sales: SalesRecord = [("Milk", 2), ("Ghost", 4)].into_iter().collect();

        generate_report_on(&mut products, &sales, &SystemConfig::default(), today());

        assert_eq!(products[0].current_stock, 8);
        assert_eq!(products[1].current_stock, 20);
    }

    #[test]
    fn test_second_run_sees_first_runs_mutation() {
        let mut products = vec![product("Milk", 1000, 20, 10)];
        let mut sales: SalesRecord = [("Milk", 2)].into_iter().collect();
        let config = SystemConfig::default();

        generate_report_on(&mut products, &sales, &config, today());
        assert_eq!(products[0].current_stock, 8);

        sales.record("Milk", 1);
        let text = generate_report_on(&mut products, &sales, &config, today());

        // 8 - 3 (the record accumulates to 3)
        assert_eq!(products[0].current_stock, 5);
        assert!(text.contains("- Total stock on hand: 5"));
        assert!(text.contains("* Milk: ₩3000 (3 × ₩1000)"));
    }

    #[test]
    fn test_emergency_stock_uses_inclusive_threshold() {
        let products = vec![
            product("Milk", 1000, 10, 2),
            product("Boundary", 500, 10, 3),
            product("Plenty", 500, 10, 9),
            product("Untracked", 500, 0, 0),
        ];
        let report = report_for(&products, &SalesRecord::new());

        let names: Vec<_> = report.emergency_stock.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Boundary"]);
        assert_eq!(report.emergency_stock[0].units_needed, 8);
        assert_eq!(report.emergency_stock[0].stock_ratio, 20.0);
    }

    #[test]
    fn test_emergency_stock_reflects_sales() {
        let products = vec![product("Cola", 1200, 10, 5)];
        let sales: SalesRecord = [("Cola", 3)].into_iter().collect();
        let report = report_for(&products, &sales);

        assert_eq!(report.emergency_stock.len(), 1);
        assert_eq!(report.emergency_stock[0].current_stock, 2);
        assert_eq!(report.analysis.reorder.product_count, 1);
        assert_eq!(report.analysis.reorder.total_quantity, 8);
    }

    #[test]
    fn test_expiry_discount_schedule() {
        let products = vec![
            product("Sandwich", 1000, 10, 10).with_expiry(today() + Days::new(2)),
            product("Kimbap", 1500, 10, 10).with_expiry(today()),
            product("Yogurt", 900, 10, 10).with_expiry(today() + Days::new(3)),
            product("Bread", 2000, 10, 10).with_expiry(today() + Days::new(10)),
            product("Stale", 2000, 10, 10).with_expiry(today() - Days::new(1)),
        ];
        let report = report_for(&products, &SalesRecord::new());

        let names: Vec<_> = report.expiring.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Kimbap", "Sandwich", "Yogurt"]);

        let sandwich = &report.expiring[1];
        assert_eq!(sandwich.days_left, 2);
        assert_eq!(sandwich.discounted_price.units(), 700);
        assert_eq!(sandwich.discount_percent(), 30);

        let kimbap = &report.expiring[0];
        assert_eq!(kimbap.discounted_price.units(), 450);

        let yogurt = &report.expiring[2];
        assert_eq!(yogurt.discount_rate, 0.0);
        assert_eq!(yogurt.discounted_price.units(), 900);

        let text = report.to_string();
        assert!(text.contains("- Sandwich: 2 days left, 30% discount (₩1000 -> ₩700)"));
        assert!(text.contains("- Kimbap: expires today, 70% discount (₩1500 -> ₩450)"));
    }

    #[test]
    fn test_expiry_missing_policy_entry_means_no_discount() {
        let mut config = SystemConfig::default();
        config.expiry_warning_days = 5;
        let products = vec![product("Tofu", 1800, 10, 10).with_expiry(today() + Days::new(5))];

        let report = build_report(&products, &products, &SalesRecord::new(), &config, today());
        assert_eq!(report.expiring[0].discount_rate, 0.0);
        assert_eq!(report.expiring[0].discounted_price.units(), 1800);
    }

    #[test]
    fn test_bestsellers_capped_and_ordered() {
        let products: Vec<Product> = (1..=10)
            .map(|i| product(&format!("P{i}"), 100, 100, 100))
            .collect();
        // P3 and P7 tie on revenue; P3 comes first in the product list
        let sales: SalesRecord = [
            ("P7", 5),
            ("P1", 1),
            ("P3", 5),
            ("P9", 8),
            ("P2", 2),
            ("P4", 3),
            ("P5", 4),
            ("P6", 1),
            ("P8", 1),
            ("P10", 1),
        ]
        .into_iter()
        .collect();

        let report = report_for(&products, &sales);

        let ranked: Vec<_> = report
            .bestsellers
            .iter()
            .map(|b| (b.rank, b.name.as_str(), b.revenue.units()))
            .collect();
        assert_eq!(
            ranked,
            [
                (1, "P9", 800),
                (2, "P3", 500),
                (3, "P7", 500),
                (4, "P5", 400),
                (5, "P4", 300),
            ]
        );
    }

    #[test]
    fn test_bestsellers_use_pre_sale_snapshot() {
        let products = vec![product("Cola", 1200, 10, 2)];
        let sales: SalesRecord = [("Cola", 5), ("Unknown", 50)].into_iter().collect();
        let report = report_for(&products, &sales);

        assert_eq!(report.bestsellers.len(), 1);
        assert_eq!(report.bestsellers[0].revenue.units(), 6000);
        assert_eq!(report.status.total_stock, -3);
    }

    #[test]
    fn test_sales_summary_skips_unknown_names() {
        let products = vec![product("Cola", 1200, 10, 10), product("Chips", 1500, 10, 10)];
        let sales: SalesRecord = [("Chips", 2), ("Ghost", 9), ("Cola", 3)].into_iter().collect();
        let summary = report_for(&products, &sales).sales;

        let names: Vec<_> = summary.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Chips", "Cola"]);
        assert_eq!(summary.total_revenue.units(), 3000 + 3600);
        assert_eq!(summary.total_quantity, 5);
    }

    #[test]
    fn test_management_analysis_leaders() {
        let products = vec![
            product("Slow", 1000, 20, 20),
            product("Fast", 1000, 10, 4),
            product("Idle", 1000, 10, 10),
        ];
        let sales: SalesRecord = [("Slow", 2), ("Fast", 4)].into_iter().collect();
        let analysis = report_for(&products, &sales).analysis;

        // Fast: initial 8, average 6 → 66.7%; Slow: initial 22, average 21 → 9.5%
        assert_eq!(analysis.top_turnover.name.as_deref(), Some("Fast"));
        assert_eq!(analysis.top_turnover.sold, 4);
        assert!((analysis.top_turnover.value - 66.666).abs() < 0.01);

        // Idle never sold → 0% turnover, the minimum over all products
        assert_eq!(analysis.bottom_turnover.name.as_deref(), Some("Idle"));
        assert_eq!(analysis.bottom_turnover.sold, 0);
        assert_eq!(analysis.bottom_turnover.value, 0.0);

        // Fast: 4 / 8 = 50%
        assert_eq!(analysis.top_efficiency.name.as_deref(), Some("Fast"));
        assert_eq!(analysis.top_efficiency.value, 50.0);
    }

    #[test]
    fn test_management_analysis_without_sales() {
        let products = vec![product("A", 100, 10, 5), product("B", 100, 10, 5)];
        let report = report_for(&products, &SalesRecord::new());
        let analysis = &report.analysis;

        assert_eq!(analysis.top_turnover, MetricLeader::default());
        assert_eq!(analysis.top_efficiency, MetricLeader::default());
        // first of the tied zero-turnover products
        assert_eq!(analysis.bottom_turnover.name.as_deref(), Some("A"));

        let text = report.to_string();
        assert!(text.contains("- Highest stock turnover: N/A (0 sold, 0% turnover)"));
        assert!(text.contains("- Best sales efficiency: N/A (0 sold, 0% efficiency)"));
    }

    #[test]
    fn test_excess_stock_sorted_by_ratio() {
        let products = vec![
            product("Water", 800, 10, 16),
            product("Tissue", 2000, 4, 12),
            product("Exact", 100, 10, 15),
            product("Normal", 100, 10, 10),
        ];
        let report = report_for(&products, &SalesRecord::new());

        let excess: Vec<_> = report
            .analysis
            .excess_stock
            .iter()
            .map(|e| (e.name.as_str(), e.current_stock))
            .collect();
        assert_eq!(excess, [("Tissue", 12), ("Water", 16)]);
        assert!(report
            .to_string()
            .contains("- Excess stock: Tissue (12), Water (16)"));
    }

    #[test]
    fn test_overall_status() {
        let products = vec![
            product("Milk", 1000, 10, 10).with_expiry(today() + Days::new(1)),
            product("Chips", 1500, 20, 20),
        ];
        let sales: SalesRecord = [("Milk", 8)].into_iter().collect();
        let status = report_for(&products, &sales).status;

        assert_eq!(status.product_count, 2);
        assert_eq!(status.total_stock, 22);
        assert_eq!(status.inventory_value.units(), 2 * 1000 + 20 * 1500);
        assert_eq!(status.low_stock_count, 1);
        assert_eq!(status.expiring_count, 1);
    }

    #[test]
    fn test_empty_sections_render_placeholders() {
        let products = vec![product("Chips", 1500, 10, 10)];
        let text = report_for(&products, &SalesRecord::new()).to_string();

        assert!(text.contains("[Emergency stock] (stock ratio at or below 30%)"));
        assert!(text.contains("No products are low on stock."));
        assert!(text.contains("No products are close to expiry."));
        assert!(text.contains("No sales recorded."));
        assert!(text.contains("Total revenue today: ₩0 (0 units sold)"));
        assert!(text.contains("- Excess stock: none"));
        assert!(text.contains("- Reorder recommended: 0 products, 0 units total"));
        assert!(text.ends_with("Report complete."));
    }

    #[test]
    fn test_sections_render_in_order() {
        let products = vec![product("Chips", 1500, 10, 10)];
        let text = report_for(&products, &SalesRecord::new()).to_string();

        let positions: Vec<usize> = [
            "[Emergency stock]",
            "[Expiry management]",
            "[Today's bestsellers TOP 5]",
            "[Sales]",
            "[Management analysis]",
            "[Overall status]",
        ]
        .iter()
        .map(|header| text.find(header).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_infinite_turnover_renders() {
        // oversold earlier: current -2, then 4 sold → average stock 0
        let products = vec![product("Gum", 500, 10, -2)];
        let sales: SalesRecord = [("Gum", 4)].into_iter().collect();
        let report = report_for(&products, &sales);

        assert_eq!(report.analysis.top_turnover.value, f64::INFINITY);
        assert!(report
            .to_string()
            .contains("- Highest stock turnover: Gum (4 sold, ∞% turnover)"));
    }

    #[test]
    fn test_stock_ratio_rounds_half_away_from_zero() {
        // 1/16 = 6.25%
        let products = vec![product("Gum", 500, 16, 1)];
        let text = report_for(&products, &SalesRecord::new()).to_string();
        assert!(text.contains("[stock ratio: 6.3%]"));

        assert_eq!(one_decimal(20.0), "20.0");
        assert_eq!(one_decimal(-6.25), "-6.3");
    }

    #[test]
    fn test_largest_accepted_values_do_not_overflow() {
        use crate::{MAX_DAILY_SALES, MAX_PRICE_UNITS, MAX_STOCK_LEVEL};

        let mut products = vec![
            product("Gold", MAX_PRICE_UNITS, MAX_STOCK_LEVEL, MAX_STOCK_LEVEL),
            product("Bulk", MAX_PRICE_UNITS, MAX_STOCK_LEVEL, MAX_STOCK_LEVEL),
        ];
        let sales: SalesRecord = [("Gold", MAX_DAILY_SALES), ("Bulk", 1)].into_iter().collect();
        let config = SystemConfig::default();

        let text = generate_report_on(&mut products, &sales, &config, today());
        assert_eq!(products[0].current_stock, 0);
        assert!(text.contains("1. Gold (1000000 sold, revenue ₩100000000000000)"));
        assert!(text.contains("Report complete."));

        // the second run oversells Gold into negative stock
        let text = generate_report_on(&mut products, &sales, &config, today());
        assert_eq!(products[0].current_stock, -MAX_DAILY_SALES);
        assert!(text.contains("Report complete."));
    }

    #[test]
    fn test_report_serializes() {
        let products = vec![product("Milk", 1000, 10, 2)];
        let sales: SalesRecord = [("Milk", 1)].into_iter().collect();
        let value = serde_json::to_value(report_for(&products, &sales)).unwrap();

        assert_eq!(value["generated_on"], "2025-10-15");
        assert_eq!(value["emergency_stock"][0]["name"], "Milk");
        assert_eq!(value["emergency_stock"][0]["category"], "snack");
        assert_eq!(value["sales"]["total_revenue"], 1000);
        assert_eq!(value["status"]["total_stock"], 1);
    }
}
