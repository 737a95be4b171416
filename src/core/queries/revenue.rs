use crate::data::Dataset;
use crate::domain::model::Customer;

/// Customers whose summed order totals strictly exceed `threshold`.
///
/// The threshold is a parameter so the same query runs for any number of
/// values without duplicating the pipeline.
pub fn customers_over<'a>(
    dataset: &'a Dataset,
    threshold: f64,
) -> impl Iterator<Item = &'a Customer> + 'a {
    dataset
        .customers()
        .iter()
        .filter(move |c| c.total_revenue() > threshold)
}

/// Customers with at least one single order strictly above `threshold`.
pub fn customers_with_order_over<'a>(
    dataset: &'a Dataset,
    threshold: f64,
) -> impl Iterator<Item = &'a Customer> + 'a {
    dataset
        .customers()
        .iter()
        .filter(move |c| c.orders.iter().any(|o| o.total > threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::queries::fixtures::{customer, order};

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                customer(
                    "AAAA",
                    "Alpha",
                    "Germany",
                    "Berlin",
                    vec![order(1, "2020-01-15", 350.0), order(2, "2021-06-20", 1.0)],
                ),
                customer(
                    "BBBB",
                    "Beta",
                    "UK",
                    "London",
                    vec![order(3, "2019-03-02", 100.0), order(4, "2019-08-11", 150.0)],
                ),
                customer("CCCC", "Gamma", "Spain", "Madrid", vec![]),
            ],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_strictly_greater_sum_filter() {
        let dataset = dataset();

        // Alpha sums to 351, Beta to 250, Gamma to 0
        let over_300: Vec<_> = customers_over(&dataset, 300.0)
            .map(|c| c.customer_id.as_str())
            .collect();
        assert_eq!(over_300, vec!["AAAA"]);

        let over_200: Vec<_> = customers_over(&dataset, 200.0)
            .map(|c| c.customer_id.as_str())
            .collect();
        assert_eq!(over_200, vec!["AAAA", "BBBB"]);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let dataset = dataset();

        // Beta's sum is exactly 250 and must not pass a 250 threshold
        let over: Vec<_> = customers_over(&dataset, 250.0)
            .map(|c| c.customer_id.as_str())
            .collect();
        assert_eq!(over, vec!["AAAA"]);
    }

    #[test]
    fn test_threshold_above_every_sum_yields_empty() {
        let dataset = dataset();
        assert_eq!(customers_over(&dataset, 400.0).count(), 0);
    }

    #[test]
    fn test_customer_without_orders_sums_to_zero() {
        let dataset = dataset();
        // Gamma has no orders; a threshold below zero would include it
        let all: Vec<_> = customers_over(&dataset, -1.0)
            .map(|c| c.customer_id.as_str())
            .collect();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_single_order_existence_differs_from_sum() {
        let dataset = dataset();

        // Alpha has one order of 350 and qualifies; Beta sums to 250 but
        // no single order exceeds 300
        let hits: Vec<_> = customers_with_order_over(&dataset, 300.0)
            .map(|c| c.customer_id.as_str())
            .collect();
        assert_eq!(hits, vec!["AAAA"]);
    }

    #[test]
    fn test_order_existence_never_faults_on_empty_orders() {
        let dataset = dataset();
        let hits: Vec<_> = customers_with_order_over(&dataset, 0.0)
            .map(|c| c.customer_id.as_str())
            .collect();
        assert!(!hits.contains(&"CCCC"));
    }
}
