use std::num::NonZeroUsize;

use super::{IterationRecord, Trace};

/// Column headers, in record field order.
pub const HEADERS: [&str; 6] = ["n", "a", "b", "c = (b-a)/2", "x = a+c", "f(x)"];

/// A trace rendered as rows of display-ready cells.
///
/// The iteration counter is printed as an integer. The other five columns are
/// rounded to a fixed number of decimals by [`round`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    decimals: NonZeroUsize,
    rows: Vec<[String; 6]>,
}

impl Table {
    /// Renders every record of `trace`, preserving iteration order.
    #[must_use]
    pub fn new(trace: &Trace, decimals: NonZeroUsize) -> Self {
        let rows = trace.iter().map(|record| row(record, decimals)).collect();
        Self { decimals, rows }
    }

    /// Returns the column headers.
    #[must_use]
    pub fn headers(&self) -> [&'static str; 6] {
        HEADERS
    }

    /// Returns the rendered rows.
    #[must_use]
    pub fn rows(&self) -> &[[String; 6]] {
        &self.rows
    }

    /// Returns the number of decimals used for rounding.
    #[must_use]
    pub fn decimals(&self) -> NonZeroUsize {
        self.decimals
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn row(record: &IterationRecord, decimals: NonZeroUsize) -> [String; 6] {
    [
        record.iter.to_string(),
        round(record.a, decimals),
        round(record.b, decimals),
        round(record.half_width, decimals),
        round(record.x, decimals),
        round(record.value, decimals),
    ]
}

/// Formats `value` with exactly `decimals` digits after the point.
///
/// Rounding is applied to the exact binary value of `value`, with exact ties
/// going to the even digit, the same rule as Rust's `{:.N}` formatting.
#[must_use]
pub fn round(value: f64, decimals: NonZeroUsize) -> String {
    format!("{value:.prec$}", prec = decimals.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimals(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn trace() -> Trace {
        let mut trace = Trace::default();
        trace.push(IterationRecord {
            iter: 1,
            a: 0.0,
            b: 2.0,
            half_width: 1.0,
            x: 1.0,
            value: -1.0,
        });
        trace.push(IterationRecord {
            iter: 2,
            a: 1.0,
            b: 2.0,
            half_width: 0.5,
            x: 1.5,
            value: 0.25,
        });
        trace.push(IterationRecord {
            iter: 3,
            a: 1.0,
            b: 1.5,
            half_width: 0.25,
            x: 1.25,
            value: -0.4375,
        });
        trace
    }

    #[test]
    fn rounds_to_fixed_decimals() {
        assert_eq!(round(std::f64::consts::SQRT_2, decimals(4)), "1.4142");
        assert_eq!(round(std::f64::consts::E, decimals(4)), "2.7183");
        assert_eq!(round(2.0, decimals(3)), "2.000");
        assert_eq!(round(-0.4375, decimals(2)), "-0.44");
    }

    #[test]
    fn renders_rows_in_order() {
        let table = Table::new(&trace(), decimals(4));

        assert_eq!(table.rows().len(), 3);
        assert_eq!(
            table.rows()[0],
            ["1", "0.0000", "2.0000", "1.0000", "1.0000", "-1.0000"].map(String::from)
        );
        assert_eq!(
            table.rows()[2],
            ["3", "1.0000", "1.5000", "0.2500", "1.2500", "-0.4375"].map(String::from)
        );
    }

    #[test]
    fn iteration_counter_is_not_rounded() {
        let table = Table::new(&trace(), decimals(1));
        let counters: Vec<_> = table.rows().iter().map(|row| row[0].as_str()).collect();
        assert_eq!(counters, ["1", "2", "3"]);
    }

    #[test]
    fn leaves_trace_untouched() {
        let trace = trace();
        let before = trace.clone();
        let _ = Table::new(&trace, decimals(2));
        assert_eq!(trace, before);
    }

    #[test]
    fn empty_trace_gives_empty_table() {
        let table = Table::new(&Trace::default(), decimals(4));
        assert!(table.is_empty());
        assert!(table.rows().is_empty());
        assert_eq!(table.headers(), HEADERS);
    }
}
