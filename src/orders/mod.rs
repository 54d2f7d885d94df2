//! # Order Tracking
//!
//! Products ordered by users from companies, and their delivery status.
//!
//! The catalog is independent of the routing graph: it never reads or
//! writes locations. Callers that want to cross-reference company ids with
//! graph locations do so themselves.
//!
//! Every time-dependent call takes `today` explicitly; the `*_now` variants
//! read the local clock.

pub mod product;
pub mod status;

pub use product::{CompanyId, Product, parse_order_date, ORDER_DATE_FORMAT};
pub use status::{CompanyDeliveryReport, DeliveryStatus};

use chrono::{Local, NaiveDate};
use hashbrown::HashMap;
use tracing::debug;

use crate::{Error, Result};

/// Position of a product inside a company's list.
#[derive(Debug, Clone, Copy)]
struct ProductRef {
    company: CompanyId,
    index: usize,
}

/// Company → products table with a per-user index.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    companies: HashMap<CompanyId, Vec<Product>>,
    /// user → products they ordered, in insertion order
    by_user: HashMap<String, Vec<ProductRef>>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Today's date on the local clock.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Register a company with no products. Registering twice is a no-op.
    pub fn register_company(&mut self, company: CompanyId) {
        self.companies.entry(company).or_default();
    }

    /// Record `product` under `company` and under the product's user.
    ///
    /// The company is registered on first use. Orders dated after `today`
    /// are rejected.
    pub fn add_product(&mut self, company: CompanyId, product: Product, today: NaiveDate) -> Result<()> {
        if product.order_date > today {
            return Err(Error::InvalidOrderDate(format!(
                "{} is after {today}; order dates must not be in the future",
                product.order_date
            )));
        }

        debug!(%company, product = %product.name, user = %product.user, "product added");

        let products = self.companies.entry(company).or_default();
        let index = products.len();
        self.by_user
            .entry(product.user.clone())
            .or_default()
            .push(ProductRef { company, index });
        products.push(product);
        Ok(())
    }

    pub fn add_product_now(&mut self, company: CompanyId, product: Product) -> Result<()> {
        self.add_product(company, product, Self::today())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All registered company ids, ascending.
    pub fn company_ids(&self) -> Vec<CompanyId> {
        let mut ids: Vec<_> = self.companies.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn contains_company(&self, company: CompanyId) -> bool {
        self.companies.contains_key(&company)
    }

    /// Products of `company` in insertion order; empty if unknown.
    pub fn products_by_company(&self, company: CompanyId) -> &[Product] {
        self.companies.get(&company).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Products ordered by `user` in insertion order; empty if unknown.
    pub fn products_by_user(&self, user: &str) -> Vec<&Product> {
        self.by_user
            .get(user)
            .into_iter()
            .flatten()
            .filter_map(|r| self.resolve(*r))
            .collect()
    }

    /// Companies holding at least one of `user`'s products, ascending, once each.
    pub fn companies_by_user(&self, user: &str) -> Vec<CompanyId> {
        let mut ids: Vec<_> = self
            .by_user
            .get(user)
            .into_iter()
            .flatten()
            .map(|r| r.company)
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Every product named exactly `name`, grouped by ascending company.
    pub fn search_by_name(&self, name: &str) -> Vec<(CompanyId, &Product)> {
        self.company_ids()
            .into_iter()
            .flat_map(move |company| {
                self.products_by_company(company)
                    .iter()
                    .filter(move |p| p.name == name)
                    .map(move |p| (company, p))
            })
            .collect()
    }

    /// Per-company delivery status as of `today`, companies ascending.
    /// Companies without products are included with an empty list.
    pub fn delivery_report(&self, today: NaiveDate) -> Vec<CompanyDeliveryReport> {
        self.company_ids()
            .into_iter()
            .map(|company| CompanyDeliveryReport {
                company,
                products: self
                    .products_by_company(company)
                    .iter()
                    .map(|p| (p.clone(), DeliveryStatus::classify(p.order_date, today)))
                    .collect(),
            })
            .collect()
    }

    pub fn delivery_report_now(&self) -> Vec<CompanyDeliveryReport> {
        self.delivery_report(Self::today())
    }

    /// Mean days since ordering across every product, `None` when empty.
    pub fn average_delivery_days(&self, today: NaiveDate) -> Option<f64> {
        let (total, count) = self
            .companies
            .values()
            .flatten()
            .fold((0i64, 0usize), |(total, count), p| {
                (total + p.days_since_order(today), count + 1)
            });
        (count > 0).then(|| total as f64 / count as f64)
    }

    pub fn average_delivery_days_now(&self) -> Option<f64> {
        self.average_delivery_days(Self::today())
    }

    pub fn product_count(&self) -> usize {
        self.companies.values().map(Vec::len).sum()
    }

    fn resolve(&self, r: ProductRef) -> Option<&Product> {
        self.companies.get(&r.company)?.get(r.index)
    }
}
