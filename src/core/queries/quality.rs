use crate::data::Dataset;
use crate::domain::model::SuspectRecord;
use regex::Regex;

/// Customers whose contact records look incomplete: a postal code with a
/// non-digit character, an empty region, or a phone without the leading
/// area-code parenthesis.
pub fn customers_with_suspect_records(dataset: &Dataset) -> Vec<SuspectRecord> {
    let digits_only = Regex::new(r"^[0-9]+$").unwrap();

    dataset
        .customers()
        .iter()
        .filter(|c| {
            let postal_suspect =
                !c.postal_code.is_empty() && !digits_only.is_match(&c.postal_code);
            postal_suspect || c.region.is_empty() || !c.phone.starts_with('(')
        })
        .map(|c| SuspectRecord {
            company_name: c.company_name.clone(),
            postal_code: c.postal_code.clone(),
            region_missing: c.region.is_empty(),
            phone: c.phone.clone(),
        })
        .collect()
}
