use crate::config::QueryParams;
use crate::core::report;
use crate::data::Dataset;
use crate::utils::error::Result;

pub type RenderFn = fn(&Dataset, &QueryParams, &mut String) -> Result<()>;

/// One runnable exercise: a stable title, a human-readable description
/// and the renderer that produces its report.
#[derive(Debug, Clone, Copy)]
pub struct Exercise {
    pub title: &'static str,
    pub description: &'static str,
    pub render: RenderFn,
}

/// The explicit, ordered exercise list. Titles follow the original
/// numbering; "9" and "10" share a renderer because the computation is
/// the same.
pub fn registry() -> Vec<Exercise> {
    vec![
        Exercise {
            title: "1",
            description: "Customers whose total order sum exceeds each configured threshold",
            render: report::render_revenue_thresholds,
        },
        Exercise {
            title: "2.1",
            description: "Suppliers sharing each customer's country and city, with grouping",
            render: report::render_colocated_grouped,
        },
        Exercise {
            title: "2.2",
            description: "Suppliers sharing each customer's country and city, without grouping",
            render: report::render_colocated_flat,
        },
        Exercise {
            title: "3",
            description: "Customers having at least one order above the high-value threshold",
            render: report::render_high_value_orders,
        },
        Exercise {
            title: "4",
            description: "Month and year of each customer's first order",
            render: report::render_start_dates,
        },
        Exercise {
            title: "5",
            description: "First-order listing sorted by year, month, revenue and company name",
            render: report::render_start_dates_sorted,
        },
        Exercise {
            title: "6",
            description: "Customers with a non-digit postal code, missing region, or phone without an area code",
            render: report::render_suspect_records,
        },
        Exercise {
            title: "7",
            description: "Products grouped by category, then stock availability, then price",
            render: report::render_category_stock_groups,
        },
        Exercise {
            title: "8",
            description: "Products grouped into cheap, mid-priced and expensive bands",
            render: report::render_price_bands,
        },
        Exercise {
            title: "9",
            description: "Average order revenue and order intensity per city",
            render: report::render_city_activity,
        },
        Exercise {
            title: "10",
            description: "Average customer activity per city, by the same measure",
            render: report::render_city_activity,
        },
    ]
}

pub fn find(title: &str) -> Option<Exercise> {
    registry().into_iter().find(|e| e.title == title)
}
