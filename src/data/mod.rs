use crate::domain::model::{Customer, Product, Supplier};
use crate::utils::error::Result;
use serde::Deserialize;

// 內嵌的範例資料，啟動時反序列化一次，之後唯讀
const NORTHWIND_JSON: &str = include_str!("northwind.json");

/// The four read-only collections. Loaded once, never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    customers: Vec<Customer>,
    suppliers: Vec<Supplier>,
    products: Vec<Product>,
}

impl Dataset {
    pub fn new(customers: Vec<Customer>, suppliers: Vec<Supplier>, products: Vec<Product>) -> Self {
        Self {
            customers,
            suppliers,
            products,
        }
    }

    /// Loads the dataset compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(NORTHWIND_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        Ok(dataset)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_loads() {
        let dataset = Dataset::embedded().unwrap();

        assert!(!dataset.customers().is_empty());
        assert!(!dataset.suppliers().is_empty());
        assert!(!dataset.products().is_empty());
    }

    #[test]
    fn test_embedded_dataset_covers_query_edges() {
        let dataset = Dataset::embedded().unwrap();

        // At least one customer without orders
        assert!(dataset.customers().iter().any(|c| c.orders.is_empty()));

        // At least one customer with an empty region and one with a region
        assert!(dataset.customers().iter().any(|c| c.region.is_empty()));
        assert!(dataset.customers().iter().any(|c| !c.region.is_empty()));

        // At least one phone without the leading area-code parenthesis
        assert!(dataset
            .customers()
            .iter()
            .any(|c| !c.phone.starts_with('(')));

        // At least one customer sharing (country, city) with a supplier
        assert!(dataset.customers().iter().any(|c| {
            dataset
                .suppliers()
                .iter()
                .any(|s| s.location() == c.location())
        }));

        // Products both in and out of stock
        assert!(dataset.products().iter().any(|p| p.units_in_stock == 0));
        assert!(dataset.products().iter().any(|p| p.units_in_stock > 0));
    }

    #[test]
    fn test_order_dates_and_totals_are_well_formed() {
        let dataset = Dataset::embedded().unwrap();

        for customer in dataset.customers() {
            for order in &customer.orders {
                assert!(order.total >= 0.0, "negative total on {}", order.order_id);
            }
        }
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Dataset::from_json("{not json").is_err());
    }
}
