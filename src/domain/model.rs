use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub company_name: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    pub region: String,
    pub phone: String,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// 所有訂單的總金額。無訂單時為 0。
    pub fn total_revenue(&self) -> f64 {
        self.orders.iter().map(|o| o.total).sum()
    }

    /// 最早一筆訂單的日期。無訂單時為 None。
    pub fn first_order_date(&self) -> Option<NaiveDate> {
        self.orders.iter().map(|o| o.order_date).min()
    }

    pub fn location(&self) -> Location {
        Location {
            country: self.country.clone(),
            city: self.city.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,
    pub order_date: NaiveDate,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: u32,
    pub supplier_name: String,
    pub country: String,
    pub city: String,
}

impl Supplier {
    pub fn location(&self) -> Location {
        Location {
            country: self.country.clone(),
            city: self.city.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u32,
    pub product_name: String,
    pub category: String,
    pub unit_price: f64,
    pub units_in_stock: u32,
}

/// Composite (country, city) grouping key. Compared by value, never by
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub country: String,
    pub city: String,
}

// Derived rows produced by the query layer. Rows that reach the generic
// dumper derive Serialize; the grouped product rows are rendered by hand
// and stay plain.

#[derive(Debug, Clone, Serialize)]
pub struct StartDate {
    pub company_name: String,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerActivity {
    pub company_name: String,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuspectRecord {
    pub company_name: String,
    pub postal_code: String,
    pub region_missing: bool,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityStats {
    pub city: String,
    pub average_total: f64,
    pub average_orders: f64,
}

#[derive(Debug, Serialize)]
pub struct CustomerSuppliers<'a> {
    pub customer: &'a Customer,
    pub suppliers: Vec<&'a Supplier>,
}

#[derive(Debug, Serialize)]
pub struct LocationGroup<'a> {
    pub location: Location,
    pub suppliers: Vec<&'a Supplier>,
}

#[derive(Debug, Serialize)]
pub struct CustomerSupplierGroups<'a> {
    pub customer: &'a Customer,
    pub groups: Vec<LocationGroup<'a>>,
}

#[derive(Debug)]
pub struct StockGroup<'a> {
    pub in_stock: bool,
    pub products: Vec<&'a Product>,
}

#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub category: String,
    pub groups: Vec<StockGroup<'a>>,
}

#[derive(Debug)]
pub struct PriceBandGroup<'a> {
    pub band: usize,
    pub products: Vec<&'a Product>,
}
