//! # Domain Types
//!
//! Core domain types used throughout Stockwatch.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   SalesRecord   │   │  SystemConfig   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  name → qty     │   │  threshold      │       │
//! │  │  price          │   │  (accumulates)  │   │  warning days   │       │
//! │  │  category       │   └─────────────────┘   │  DiscountPolicy │       │
//! │  │  optimal_stock  │                         └─────────────────┘       │
//! │  │  current_stock  │   ┌─────────────────┐                             │
//! │  │  expiry_date    │   │    Inventory    │  ordered, name-keyed list   │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product is identified by its exact, case-sensitive name. The same name
//! joins a product to its entry in the [`SalesRecord`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Fixed product categories carried by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Snack,
    Beverage,
    Food,
    Household,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 4] = [
        Category::Snack,
        Category::Beverage,
        Category::Food,
        Category::Household,
    ];

    /// Human-readable category name used in reports.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Category::Snack => "Snacks",
            Category::Beverage => "Beverages",
            Category::Food => "Food",
            Category::Household => "Household goods",
        }
    }

    /// Maps a 1-based menu choice to a category.
    pub fn from_menu_choice(choice: i64) -> Option<Category> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Category::ALL.get(i).copied())
    }

    /// Menu legend such as `1: snacks, 2: beverages, ...`.
    pub fn menu_legend() -> String {
        Category::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}: {}", i + 1, c.display_name().to_lowercase()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product on the store's shelves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, case-sensitive name. Join key to the sales record.
    pub name: String,

    /// Shelf price in whole currency units.
    pub price: Money,

    pub category: Category,

    /// Operator-set target inventory level. May be zero.
    pub optimal_stock: i64,

    /// Units on hand. Goes negative when more is sold than was stocked.
    pub current_stock: i64,

    /// Sell-by date. `None` for non-perishables.
    pub expiry_date: Option<NaiveDate>,
}

impl Product {
    /// Creates a non-perishable product.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        category: Category,
        optimal_stock: i64,
        current_stock: i64,
    ) -> Self {
        Product {
            name: name.into(),
            price,
            category,
            optimal_stock,
            current_stock,
            expiry_date: None,
        }
    }

    /// Sets the expiry date.
    pub fn with_expiry(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    /// Strict low-stock check used by the inventory status view.
    ///
    /// `current / optimal < threshold`. Reports use the inclusive
    /// [`Product::is_stock_low`] instead; the two disagree exactly at the
    /// threshold, and both are kept.
    pub fn is_below_threshold(&self, threshold: f64) -> bool {
        if self.optimal_stock <= 0 {
            return false;
        }
        (self.current_stock as f64 / self.optimal_stock as f64) < threshold
    }

    /// One-line summary for listings.
    pub fn display_info(&self) -> String {
        let mut info = format!(
            "Name: {}, Price: {}, Stock: {}",
            self.name, self.price, self.current_stock
        );
        if let Some(expiry) = self.expiry_date {
            info.push_str(&format!(", Expires: {}", expiry));
        }
        info
    }
}

// =============================================================================
// Sales Record
// =============================================================================

/// Units of one product sold today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleEntry {
    pub name: String,
    pub quantity: i64,
}

/// Cumulative units sold today, keyed by product name.
///
/// Recording the same name again adds to its quantity. Entries keep the
/// order in which each name was first sold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesRecord {
    entries: Vec<SaleEntry>,
}

impl SalesRecord {
    pub fn new() -> Self {
        SalesRecord::default()
    }

    /// Adds `quantity` units to the running total for `name`.
    pub fn record(&mut self, name: &str, quantity: i64) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.quantity += quantity,
            None => self.entries.push(SaleEntry {
                name: name.to_string(),
                quantity,
            }),
        }
    }

    /// Units sold for `name`, if any sale was recorded.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.quantity)
    }

    /// Units sold for `name`, zero when nothing was recorded.
    pub fn quantity_of(&self, name: &str) -> i64 {
        self.get(name).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SaleEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for SalesRecord {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut record = SalesRecord::new();
        for (name, quantity) in iter {
            let name: String = name.into();
            record.record(&name, quantity);
        }
        record
    }
}

// =============================================================================
// Discount Policy
// =============================================================================

/// Discount fraction by exact number of days left before expiry.
///
/// Lookups are exact-key: a day count without an entry gets no discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountPolicy(BTreeMap<i64, f64>);

impl DiscountPolicy {
    /// Discount fraction for `days_left`, `0.0` when absent.
    pub fn rate_for(&self, days_left: i64) -> f64 {
        self.0.get(&days_left).copied().unwrap_or(0.0)
    }
}

impl Default for DiscountPolicy {
    /// 3 days: 0%, 2 days: 30%, 1 day: 50%, same day: 70%.
    fn default() -> Self {
        DiscountPolicy(BTreeMap::from([(3, 0.0), (2, 0.3), (1, 0.5), (0, 0.7)]))
    }
}

/// Parses `days:rate` pairs separated by commas, e.g. `3:0,2:0.3,0:0.7`.
impl FromStr for DiscountPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "discount policy".to_string(),
            reason: reason.to_string(),
        };

        let mut rates = BTreeMap::new();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (days, rate) = pair
                .split_once(':')
                .ok_or_else(|| invalid("expected days:rate"))?;
            let days: i64 = days
                .trim()
                .parse()
                .map_err(|_| invalid("days must be an integer"))?;
            let rate: f64 = rate
                .trim()
                .parse()
                .map_err(|_| invalid("rate must be a number"))?;
            if days < 0 {
                return Err(invalid("days must not be negative"));
            }
            if !(0.0..=1.0).contains(&rate) {
                return Err(invalid("rate must be between 0 and 1"));
            }
            rates.insert(days, rate);
        }
        Ok(DiscountPolicy(rates))
    }
}

// =============================================================================
// System Config
// =============================================================================

/// Thresholds and policies the report is evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Fraction of optimal stock at or below which an item is low (0..=1).
    pub stock_threshold: f64,

    /// Days ahead of expiry at which an item counts as expiring soon.
    pub expiry_warning_days: i64,

    pub discount_policy: DiscountPolicy,
}

impl SystemConfig {
    /// Threshold as a whole percentage, truncated toward zero.
    pub fn threshold_percent(&self) -> i64 {
        (self.stock_threshold * 100.0) as i64
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            stock_threshold: 0.3,
            expiry_warning_days: 3,
            discount_policy: DiscountPolicy::default(),
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// Result of registering a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    Updated,
}

/// The store's product list in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Registers a product, replacing any existing product with the same name.
    ///
    /// A replaced product is removed and the new one appended, so it moves
    /// to the end of the registration order. Nothing is merged.
    pub fn upsert(&mut self, product: Product) -> Registration {
        let outcome = match self.products.iter().position(|p| p.name == product.name) {
            Some(index) => {
                self.products.remove(index);
                Registration::Updated
            }
            None => Registration::Added,
        };
        self.products.push(product);
        outcome
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut [Product] {
        &mut self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
