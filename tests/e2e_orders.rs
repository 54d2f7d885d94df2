//! End-to-end tests for order tracking.
//!
//! Builds a catalog the way an order-entry front end would (parsing typed
//! dates, adding products per user) and checks the reports.

use chrono::NaiveDate;
use delivery_router::orders::parse_order_date;
use delivery_router::{CompanyId, DeliveryStatus, Error, Product, ProductCatalog};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    parse_order_date("2025-01-10").unwrap()
}

fn setup_catalog() -> ProductCatalog {
    let mut catalog = ProductCatalog::new();
    let entries = [
        (101, "headphones", "2025-01-09", "ada"),
        (101, "charger", "2025-01-06", "linus"),
        (202, "headphones", "2025-01-02", "grace"),
        (303, "monitor", "2025-01-07", "ada"),
    ];
    for (company, name, date, user) in entries {
        let product = Product::new(name, parse_order_date(date).unwrap(), user);
        catalog.add_product(CompanyId(company), product, today()).unwrap();
    }
    catalog
}

#[test]
fn test_status_report() {
    let catalog = setup_catalog();
    let report = catalog.delivery_report(today());

    let summary: Vec<(u64, Vec<(&str, DeliveryStatus)>)> = report
        .iter()
        .map(|r| {
            (
                r.company.0,
                r.products.iter().map(|(p, s)| (p.name.as_str(), *s)).collect(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (101, vec![("headphones", DeliveryStatus::InTransit), ("charger", DeliveryStatus::OutForDelivery)]),
            (202, vec![("headphones", DeliveryStatus::Delivered)]),
            (303, vec![("monitor", DeliveryStatus::OutForDelivery)]),
        ]
    );
    assert_eq!(report[0].product_count(), 2);
}

#[test]
fn test_user_views() {
    let catalog = setup_catalog();
    assert_eq!(catalog.companies_by_user("ada"), vec![CompanyId(101), CompanyId(303)]);

    let names: Vec<_> = catalog.products_by_user("ada").into_iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["headphones".to_string(), "monitor".to_string()]);
}

#[test]
fn test_search_and_average() {
    let catalog = setup_catalog();
    let hits: Vec<_> = catalog.search_by_name("headphones").into_iter().map(|(c, _)| c).collect();
    assert_eq!(hits, vec![CompanyId(101), CompanyId(202)]);

    // 1 + 4 + 8 + 3 = 16 days over 4 products
    assert_eq!(catalog.average_delivery_days(today()), Some(4.0));
    assert_eq!(catalog.company_ids(), vec![CompanyId(101), CompanyId(202), CompanyId(303)]);
}

#[test]
fn test_bad_dates() {
    let mut catalog = setup_catalog();
    assert!(matches!(parse_order_date("2025-13-01"), Err(Error::InvalidOrderDate(_))));

    let tomorrow = Product::new("desk", parse_order_date("2025-01-11").unwrap(), "ada");
    assert!(matches!(
        catalog.add_product(CompanyId(101), tomorrow, today()),
        Err(Error::InvalidOrderDate(_))
    ));
    assert_eq!(catalog.products_by_company(CompanyId(101)).len(), 2);
}

#[test]
fn test_clock_variants_accept_past_orders() {
    let mut catalog = ProductCatalog::new();
    let long_ago = Product::new("stool", parse_order_date("2001-09-09").unwrap(), "ada");
    catalog.add_product_now(CompanyId(1), long_ago).unwrap();

    let report = catalog.delivery_report_now();
    assert_eq!(report[0].products[0].1, DeliveryStatus::Delivered);
    assert!(catalog.average_delivery_days_now().unwrap() > 5.0);
}
