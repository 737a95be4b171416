use crate::data::Dataset;
use crate::domain::model::{CityStats, Customer};
use std::collections::BTreeMap;

/// Per-city averages over that city's customers: mean summed order total
/// and mean order count. Cities come out alphabetically.
pub fn city_activity(dataset: &Dataset) -> Vec<CityStats> {
    let mut cities: BTreeMap<&str, Vec<&Customer>> = BTreeMap::new();
    for customer in dataset.customers() {
        cities.entry(customer.city.as_str()).or_default().push(customer);
    }

    cities
        .into_iter()
        .map(|(city, customers)| {
            let count = customers.len() as f64;
            CityStats {
                city: city.to_string(),
                average_total: customers.iter().map(|c| c.total_revenue()).sum::<f64>() / count,
                average_orders: customers.iter().map(|c| c.orders.len() as f64).sum::<f64>()
                    / count,
            }
        })
        .collect()
}
