use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_negative, validate_ordered_pair, Validate,
};
use serde::{Deserialize, Serialize};

/// The tunable literals the exercises run with. Defaults match the
/// classic exercise set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    pub revenue_thresholds: Vec<f64>,
    pub high_value_threshold: f64,
    pub band_low: f64,
    pub band_high: f64,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            revenue_thresholds: vec![20000.0, 30000.0, 100000.0],
            high_value_threshold: 300.0,
            band_low: 10.0,
            band_high: 100.0,
        }
    }
}

impl QueryParams {
    /// 從 TOML 檔案載入參數，載入後立即驗證
    pub fn from_toml_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let params: QueryParams = toml::from_str(raw)?;
        params.validate()?;
        Ok(params)
    }
}

impl Validate for QueryParams {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("revenue_thresholds", &self.revenue_thresholds)?;
        for &threshold in &self.revenue_thresholds {
            validate_non_negative("revenue_thresholds", threshold)?;
        }
        validate_non_negative("high_value_threshold", self.high_value_threshold)?;
        validate_non_negative("band_low", self.band_low)?;
        validate_ordered_pair("price_bands", self.band_low, self.band_high)?;
        Ok(())
    }
}
