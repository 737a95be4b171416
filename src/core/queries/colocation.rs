use crate::data::Dataset;
use crate::domain::model::{
    CustomerSupplierGroups, CustomerSuppliers, Location, LocationGroup, Supplier,
};
use std::collections::HashMap;

/// For each customer, the suppliers grouped by (country, city), keeping
/// only the group whose key matches the customer's own location.
pub fn colocated_suppliers_grouped<'a>(dataset: &'a Dataset) -> Vec<CustomerSupplierGroups<'a>> {
    // 先把所有供應商依 (country, city) 分組一次，客戶端只做查表
    let mut by_location: HashMap<Location, Vec<&'a Supplier>> = HashMap::new();
    for supplier in dataset.suppliers() {
        by_location
            .entry(supplier.location())
            .or_default()
            .push(supplier);
    }

    dataset
        .customers()
        .iter()
        .map(|customer| {
            let key = customer.location();
            let groups = match by_location.get(&key) {
                Some(suppliers) => vec![LocationGroup {
                    location: key,
                    suppliers: suppliers.clone(),
                }],
                None => Vec::new(),
            };
            CustomerSupplierGroups { customer, groups }
        })
        .collect()
}

/// Same supplier set per customer as the grouped variant, produced by a
/// direct equality filter.
pub fn colocated_suppliers<'a>(dataset: &'a Dataset) -> Vec<CustomerSuppliers<'a>> {
    dataset
        .customers()
        .iter()
        .map(|customer| CustomerSuppliers {
            customer,
            suppliers: dataset
                .suppliers()
                .iter()
                .filter(|s| s.country == customer.country && s.city == customer.city)
                .collect(),
        })
        .collect()
}
