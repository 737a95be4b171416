use crate::config::QueryParams;
use crate::core::queries::{cities, colocation, products, quality, revenue, start_date};
use crate::data::Dataset;
use crate::domain::model::Customer;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

const INDENT: &str = "    ";

/// Writes one record per line, recursing into sequence- and object-valued
/// fields with one extra indent level per depth. Values pass through
/// untransformed.
pub fn dump_record<T: Serialize>(record: &T, depth: usize, out: &mut String) -> Result<()> {
    let value = serde_json::to_value(record)?;
    write_value(&value, depth, out)?;
    Ok(())
}

pub fn dump_records<T, I>(records: I, depth: usize, out: &mut String) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    for record in records {
        dump_record(&record, depth, out)?;
    }
    Ok(())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn write_value(value: &Value, depth: usize, out: &mut String) -> std::fmt::Result {
    match value {
        Value::Array(items) => {
            for item in items {
                write_value(item, depth, out)?;
            }
        }
        Value::Object(fields) => {
            // 先輸出同一列的純量欄位，再逐一展開巢狀欄位
            let scalars: Vec<String> = fields
                .iter()
                .filter_map(|(key, v)| scalar_text(v).map(|text| format!("{}={}", key, text)))
                .collect();
            if !scalars.is_empty() {
                writeln!(out, "{}{}", INDENT.repeat(depth), scalars.join(" "))?;
            }
            for (key, nested) in fields {
                if matches!(nested, Value::Array(_) | Value::Object(_)) {
                    writeln!(out, "{}{}:", INDENT.repeat(depth), key)?;
                    write_value(nested, depth + 1, out)?;
                }
            }
        }
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                writeln!(out, "{}{}", INDENT.repeat(depth), text)?;
            }
        }
    }
    Ok(())
}

// Exercise renderers. Each one runs a query and writes its report; the
// registry wires them up by title.

pub fn render_revenue_thresholds(
    dataset: &Dataset,
    params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    for &threshold in &params.revenue_thresholds {
        writeln!(out, "{}:", threshold)?;
        let rows: Vec<&Customer> = revenue::customers_over(dataset, threshold).collect();
        dump_records(rows.iter(), 1, out)?;
    }
    Ok(())
}

pub fn render_colocated_grouped(
    dataset: &Dataset,
    _params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    let rows = colocation::colocated_suppliers_grouped(dataset);
    dump_records(rows.iter(), 0, out)
}

pub fn render_colocated_flat(
    dataset: &Dataset,
    _params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    let rows = colocation::colocated_suppliers(dataset);
    dump_records(rows.iter(), 0, out)
}

pub fn render_high_value_orders(
    dataset: &Dataset,
    params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    let rows: Vec<&Customer> =
        revenue::customers_with_order_over(dataset, params.high_value_threshold).collect();
    dump_records(rows.iter(), 0, out)
}

pub fn render_start_dates(
    dataset: &Dataset,
    _params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    for row in start_date::customer_start_dates(dataset) {
        dump_record(&row, 0, out)?;
    }
    Ok(())
}

pub fn render_start_dates_sorted(
    dataset: &Dataset,
    _params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    for row in start_date::customer_start_dates_sorted(dataset) {
        match (row.year, row.month) {
            (Some(year), Some(month)) => writeln!(
                out,
                "{:>10}{:>5}{:>20.2}    {}",
                year, month, row.total, row.company_name
            )?,
            // 無訂單的客戶：排序墊底，年月欄位留白
            _ => writeln!(
                out,
                "{:>10}{:>5}{:>20.2}    {}",
                "", "", row.total, row.company_name
            )?,
        }
    }
    Ok(())
}

pub fn render_suspect_records(
    dataset: &Dataset,
    _params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    for row in quality::customers_with_suspect_records(dataset) {
        writeln!(
            out,
            "{}  {}  {}  {}",
            row.company_name, row.postal_code, row.region_missing, row.phone
        )?;
    }
    Ok(())
}

pub fn render_category_stock_groups(
    dataset: &Dataset,
    _params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    for category in products::products_by_category_and_stock(dataset) {
        writeln!(out, "{}", category.category)?;
        for group in &category.groups {
            writeln!(out, "{}{}", INDENT, group.in_stock)?;
            for product in &group.products {
                writeln!(out, "{}{:.2}", INDENT.repeat(2), product.unit_price)?;
            }
        }
    }
    Ok(())
}

pub fn render_price_bands(
    dataset: &Dataset,
    params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    for band in products::products_by_price_band(dataset, params.band_low, params.band_high) {
        writeln!(out, "-------------------")?;
        for product in &band.products {
            writeln!(out, "{}{:.2}", INDENT, product.unit_price)?;
        }
    }
    Ok(())
}

pub fn render_city_activity(
    dataset: &Dataset,
    _params: &QueryParams,
    out: &mut String,
) -> Result<()> {
    for stats in cities::city_activity(dataset) {
        writeln!(
            out,
            "{:>20}:   {:>10.2} | {:.0}",
            stats.city, stats.average_total, stats.average_orders
        )?;
    }
    Ok(())
}
