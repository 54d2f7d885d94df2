//! Products and the companies that ship them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Date format accepted for order dates.
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque company identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub u64);

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ordered product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub order_date: NaiveDate,
    /// Name of the user who placed the order.
    pub user: String,
}

impl Product {
    pub fn new(name: impl Into<String>, order_date: NaiveDate, user: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order_date,
            user: user.into(),
        }
    }

    /// Whole days between the order date and `today`.
    pub fn days_since_order(&self, today: NaiveDate) -> i64 {
        (today - self.order_date).num_days()
    }
}

/// Parse a `YYYY-MM-DD` order date.
pub fn parse_order_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), ORDER_DATE_FORMAT)
        .map_err(|e| Error::InvalidOrderDate(format!("'{text}': {e}")))
}
