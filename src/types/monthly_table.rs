//! The month × year grid a city's daily series is folded into, one grid per
//! daily variable. The grid is the direct input to charting.

use crate::types::variable::DailyVariable;
use polars::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);

impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Month axis labels, index 0 = January.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A month × year grid of one aggregated daily variable.
///
/// A cell exists only when at least one daily reading contributed to that
/// (year, month) group. Months without data stay absent; they are never
/// synthesized as zero or interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTable {
    variable: DailyVariable,
    cells: BTreeMap<(Year, u32), f64>,
}

impl MonthlyTable {
    pub(crate) fn new(variable: DailyVariable) -> Self {
        Self {
            variable,
            cells: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, year: Year, month: u32, value: f64) {
        debug_assert!((1..=12).contains(&month));
        self.cells.insert((year, month), value);
    }

    /// The daily variable this grid aggregates.
    pub fn variable(&self) -> DailyVariable {
        self.variable
    }

    /// The aggregate for one (year, month) cell, if any reading contributed.
    pub fn value(&self, year: Year, month: u32) -> Option<f64> {
        self.cells.get(&(year, month)).copied()
    }

    /// Distinct years with at least one populated cell, chronologically sorted.
    pub fn years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self.cells.keys().map(|(year, _)| *year).collect();
        years.dedup();
        years
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reshapes the grid into a 12-row frame for plotting: a `month` label
    /// column plus one `f64` column per year. Cells without data become
    /// nulls so they draw as gaps rather than zeros.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.years().len() + 1);
        columns.push(Column::new("month".into(), MONTH_LABELS.to_vec()));
        for year in self.years() {
            let values: Vec<Option<f64>> = (1..=12).map(|month| self.value(year, month)).collect();
            columns.push(Column::new(year.to_string().into(), values));
        }
        DataFrame::new(columns)
    }
}
