use crate::data::Dataset;
use crate::domain::model::{CustomerActivity, StartDate};
use chrono::{Datelike, NaiveDate};

/// Month and year of each customer's earliest order. Customers without
/// orders get absent fields.
pub fn customer_start_dates<'a>(dataset: &'a Dataset) -> impl Iterator<Item = StartDate> + 'a {
    dataset.customers().iter().map(|c| {
        let first = c.first_order_date();
        StartDate {
            company_name: c.company_name.clone(),
            year: first.map(|d| d.year()),
            month: first.map(|d| d.month()),
        }
    })
}

/// Start-date rows ordered by year asc, month asc, total revenue desc,
/// company name asc. A customer with no orders sorts as if its first
/// order were on the maximum representable date.
pub fn customer_start_dates_sorted(dataset: &Dataset) -> Vec<CustomerActivity> {
    let mut rows: Vec<(NaiveDate, CustomerActivity)> = dataset
        .customers()
        .iter()
        .map(|c| {
            let first = c.first_order_date();
            let sort_date = first.unwrap_or(NaiveDate::MAX);
            let row = CustomerActivity {
                company_name: c.company_name.clone(),
                year: first.map(|d| d.year()),
                month: first.map(|d| d.month()),
                total: c.total_revenue(),
            };
            (sort_date, row)
        })
        .collect();

    // 只比較年與月，日不參與排序
    rows.sort_by(|(da, a), (db, b)| {
        (da.year(), da.month())
            .cmp(&(db.year(), db.month()))
            .then_with(|| b.total.total_cmp(&a.total))
            .then_with(|| a.company_name.cmp(&b.company_name))
    });

    rows.into_iter().map(|(_, row)| row).collect()
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
                    // later in the file but earlier by date
                    vec![order(3, "2019-11-30", 40.0), order(4, "2019-03-05", 60.0)],
                ),
                customer("CCCC", "Gamma", "Spain", "Madrid", vec![]),
                customer(
                    "DDDD",
                    "Delta",
                    "USA",
                    "Boise",
                    vec![order(5, "2020-01-28", 500.0)],
                ),
            ],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_earliest_order_wins_regardless_of_position() {
        let dataset = dataset();
        let rows: Vec<StartDate> = customer_start_dates(&dataset).collect();

        let beta = rows.iter().find(|r| r.company_name == "Beta").unwrap();
        assert_eq!(beta.year, Some(2019));
        assert_eq!(beta.month, Some(3));

        let alpha = rows.iter().find(|r| r.company_name == "Alpha").unwrap();
        assert_eq!(alpha.year, Some(2020));
        assert_eq!(alpha.month, Some(1));
    }

    #[test]
    fn test_customer_without_orders_has_absent_fields() {
        let dataset = dataset();
        let rows: Vec<StartDate> = customer_start_dates(&dataset).collect();

        let gamma = rows.iter().find(|r| r.company_name == "Gamma").unwrap();
        assert_eq!(gamma.year, None);
        assert_eq!(gamma.month, None);
    }

    #[test]
    fn test_sorted_rows_follow_year_month_sum_name_order() {
        let dataset = dataset();
        let rows = customer_start_dates_sorted(&dataset);

        let names: Vec<_> = rows.iter().map(|r| r.company_name.as_str()).collect();

        // Beta starts 2019-03. Alpha and Delta share 2020-01, so the
        // larger total (Delta, 500) comes first. Gamma sorts last.
        assert_eq!(names, vec!["Beta", "Delta", "Alpha", "Gamma"]);
    }

    #[test]
    fn test_equal_month_and_sum_fall_back_to_name() {
        let dataset = Dataset::new(
            vec![
                customer(
                    "ZZZZ",
                    "Zeta",
                    "UK",
                    "London",
                    vec![order(1, "2020-05-01", 100.0)],
                ),
                customer(
                    "YYYY",
                    "Eta",
                    "UK",
                    "London",
                    vec![order(2, "2020-05-09", 100.0)],
                ),
            ],
            vec![],
            vec![],
        );

        let rows = customer_start_dates_sorted(&dataset);
        let names: Vec<_> = rows.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, vec!["Eta", "Zeta"]);
    }

    #[test]
    fn test_orderless_customers_always_sort_after_active_ones() {
        let dataset = dataset();
        let rows = customer_start_dates_sorted(&dataset);

        let gamma_pos = rows
            .iter()
            .position(|r| r.company_name == "Gamma")
            .unwrap();
        assert_eq!(gamma_pos, rows.len() - 1);
        assert_eq!(rows[gamma_pos].total, 0.0);
        assert_eq!(rows[gamma_pos].year, None);
    }
}
