//! Delivery status classification.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CompanyId, Product};

/// Days after ordering from which a product counts as out for delivery.
pub const OUT_FOR_DELIVERY_AFTER_DAYS: i64 = 3;
/// Last day a product is still out for delivery; later it is delivered.
pub const DELIVERED_AFTER_DAYS: i64 = 5;

/// Where an order is, judged purely by how long ago it was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    InTransit,
    OutForDelivery,
    Delivered,
}

impl DeliveryStatus {
    /// `< 3` days → in transit, `3..=5` → out for delivery, `> 5` → delivered.
    pub fn classify(order_date: NaiveDate, today: NaiveDate) -> Self {
        Self::from_elapsed_days((today - order_date).num_days())
    }

    pub fn from_elapsed_days(days: i64) -> Self {
        if days < OUT_FOR_DELIVERY_AFTER_DAYS {
            Self::InTransit
        } else if days <= DELIVERED_AFTER_DAYS {
            Self::OutForDelivery
        } else {
            Self::Delivered
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InTransit => "In-transit",
            Self::OutForDelivery => "Out of delivery",
            Self::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status of every product one company holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDeliveryReport {
    pub company: CompanyId,
    /// Products in the order they were added, each with its own status.
    pub products: Vec<(Product, DeliveryStatus)>,
}

impl CompanyDeliveryReport {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
