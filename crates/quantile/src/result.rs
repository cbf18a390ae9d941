//! Result types for quantile classification.

use ndarray::Array2;
use tempest_tracks::StormId;

use crate::category::Category;
use crate::error::QuantileError;

/// Classification of a single population item.
///
/// A NaN `value` has no rank, quantile or category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileRecord {
    /// Raw input value.
    pub value: f64,
    /// 1-based ordinal rank among the non-missing values.
    pub rank: Option<usize>,
    /// Rounded quantile in `[0, 1]`.
    pub quantile: Option<f64>,
    /// Band of the rounded quantile.
    pub category: Option<Category>,
}

impl QuantileRecord {
    pub(crate) fn missing(value: f64) -> Self {
        Self {
            value,
            rank: None,
            quantile: None,
            category: None,
        }
    }

    /// Returns `true` if the input value was missing.
    pub fn is_missing(&self) -> bool {
        self.rank.is_none()
    }
}

/// Records of one ranked population, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileRecords {
    records: Vec<QuantileRecord>,
    n_valid: usize,
}

impl QuantileRecords {
    pub(crate) fn new(records: Vec<QuantileRecord>, n_valid: usize) -> Self {
        Self { records, n_valid }
    }

    pub fn records(&self) -> &[QuantileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of non-missing values that were ranked.
    pub fn n_valid(&self) -> usize {
        self.n_valid
    }

    /// `true` when exactly one value was ranked; its quantile is 0.
    pub fn is_degenerate(&self) -> bool {
        self.n_valid == 1
    }

    /// Raw values.
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    /// Ordinal ranks, `None` for missing values.
    pub fn ranks(&self) -> Vec<Option<usize>> {
        self.records.iter().map(|r| r.rank).collect()
    }

    /// Quantiles, NaN for missing values.
    pub fn quantiles(&self) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| r.quantile.unwrap_or(f64::NAN))
            .collect()
    }

    pub fn categories(&self) -> Vec<Option<Category>> {
        self.records.iter().map(|r| r.category).collect()
    }

    /// Category codes (0 to 3), `None` for missing values.
    pub fn category_codes(&self) -> Vec<Option<u8>> {
        self.records
            .iter()
            .map(|r| r.category.map(Category::code))
            .collect()
    }

    pub fn into_records(self) -> Vec<QuantileRecord> {
        self.records
    }
}

/// One record per storm, joined to storm identity.
#[derive(Debug, Clone, PartialEq)]
pub struct FullTrackResult {
    storm_ids: Vec<StormId>,
    records: QuantileRecords,
}

impl FullTrackResult {
    pub(crate) fn new(storm_ids: Vec<StormId>, records: QuantileRecords) -> Self {
        Self { storm_ids, records }
    }

    /// Storm ids in input order.
    pub fn storm_ids(&self) -> &[StormId] {
        &self.storm_ids
    }

    pub fn records(&self) -> &QuantileRecords {
        &self.records
    }

    /// Record of `storm_id`, the first one if the id was given twice.
    pub fn get(&self, storm_id: StormId) -> Option<&QuantileRecord> {
        let i = self.storm_ids.iter().position(|&s| s == storm_id)?;
        self.records.records().get(i)
    }

    /// Iterates `(storm_id, record)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (StormId, &QuantileRecord)> + '_ {
        self.storm_ids
            .iter()
            .copied()
            .zip(self.records.records().iter())
    }

    pub fn len(&self) -> usize {
        self.storm_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storm_ids.is_empty()
    }
}

/// Records of a pooled per-storm-timestep population.
///
/// Every storm occupies exactly `window_len` consecutive slots of the flat
/// record list, so slot `j` of storm block `i` is flat index
/// `i * window_len + j` and corresponds to window offset `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlongTrackResult {
    storm_ids: Vec<StormId>,
    window_len: usize,
    records: QuantileRecords,
}

impl AlongTrackResult {
    pub(crate) fn new(
        storm_ids: Vec<StormId>,
        window_len: usize,
        records: QuantileRecords,
    ) -> Self {
        Self {
            storm_ids,
            window_len,
            records,
        }
    }

    /// Storm ids in block order.
    pub fn storm_ids(&self) -> &[StormId] {
        &self.storm_ids
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }

    pub fn n_storms(&self) -> usize {
        self.storm_ids.len()
    }

    /// Flat records, `n_storms * window_len` long.
    pub fn records(&self) -> &QuantileRecords {
        &self.records
    }

    /// The `window_len` records of the `i`-th storm block.
    pub fn block(&self, i: usize) -> Option<&[QuantileRecord]> {
        let start = i.checked_mul(self.window_len)?;
        let end = start.checked_add(self.window_len)?;
        self.records.records().get(start..end)
    }

    /// The block of `storm_id`, the first one if the id was given twice.
    pub fn storm_block(&self, storm_id: StormId) -> Option<&[QuantileRecord]> {
        let i = self.storm_ids.iter().position(|&s| s == storm_id)?;
        self.block(i)
    }

    fn grid<T>(&self, f: impl Fn(&QuantileRecord) -> T) -> Array2<T> {
        let records = self.records.records();
        let l = self.window_len;
        Array2::from_shape_fn((self.n_storms(), l), |(i, j)| f(&records[i * l + j]))
    }

    /// Raw values as a storm × window grid.
    pub fn value_grid(&self) -> Array2<f64> {
        self.grid(|r| r.value)
    }

    /// Quantiles as a storm × window grid, NaN where missing.
    pub fn quantile_grid(&self) -> Array2<f64> {
        self.grid(|r| r.quantile.unwrap_or(f64::NAN))
    }

    /// Categories as a storm × window grid.
    pub fn category_grid(&self) -> Array2<Option<Category>> {
        self.grid(|r| r.category)
    }
}

/// Outcome of classifying several independent populations.
#[derive(Debug, Clone)]
pub struct GroupedResult<K> {
    records: Vec<(K, QuantileRecords)>,
    failures: Vec<(K, QuantileError)>,
}

impl<K> GroupedResult<K> {
    pub(crate) fn new(
        records: Vec<(K, QuantileRecords)>,
        failures: Vec<(K, QuantileError)>,
    ) -> Self {
        Self { records, failures }
    }

    /// Successfully classified groups, in input order.
    pub fn records(&self) -> &[(K, QuantileRecords)] {
        &self.records
    }

    /// Groups that could not be classified, in input order.
    pub fn failures(&self) -> &[(K, QuantileError)] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_parts(self) -> (Vec<(K, QuantileRecords)>, Vec<(K, QuantileError)>) {
        (self.records, self.failures)
    }
}
