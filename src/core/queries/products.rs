use crate::data::Dataset;
use crate::domain::model::{CategoryGroup, PriceBandGroup, Product, StockGroup};
use std::collections::BTreeMap;

/// Products grouped by category, then by stock availability, the
/// innermost level ordered by unit price ascending. Categories come out
/// sorted by name, out-of-stock groups before in-stock ones.
pub fn products_by_category_and_stock(dataset: &Dataset) -> Vec<CategoryGroup<'_>> {
    let mut categories: BTreeMap<&str, BTreeMap<bool, Vec<&Product>>> = BTreeMap::new();
    for product in dataset.products() {
        categories
            .entry(product.category.as_str())
            .or_default()
            .entry(product.units_in_stock > 0)
            .or_default()
            .push(product);
    }

    categories
        .into_iter()
        .map(|(category, stock_groups)| CategoryGroup {
            category: category.to_string(),
            groups: stock_groups
                .into_iter()
                .map(|(in_stock, mut products)| {
                    products.sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));
                    StockGroup { in_stock, products }
                })
                .collect(),
        })
        .collect()
}

/// Band index for a unit price: 0 up to and including `low`, 1 up to and
/// including `high`, 2 above.
pub fn price_band(price: f64, low: f64, high: f64) -> usize {
    if price <= low {
        0
    } else if price <= high {
        1
    } else {
        2
    }
}

/// Products partitioned into cheap / mid-priced / expensive bands, groups
/// ordered by band index. Empty bands are not emitted.
pub fn products_by_price_band(dataset: &Dataset, low: f64, high: f64) -> Vec<PriceBandGroup<'_>> {
    let mut bands: BTreeMap<usize, Vec<&Product>> = BTreeMap::new();
    for product in dataset.products() {
        bands
            .entry(price_band(product.unit_price, low, high))
            .or_default()
            .push(product);
    }

    bands
        .into_iter()
        .map(|(band, products)| PriceBandGroup { band, products })
        .collect()
}
