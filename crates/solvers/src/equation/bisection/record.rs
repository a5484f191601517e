use std::slice;

/// One pass of the bisection loop.
///
/// `a` and `b` are the bracket at the start of the pass, `half_width` is
/// `(b - a) / 2`, and `x = a + half_width` is the midpoint where the function
/// evaluated to `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IterationRecord {
    /// Iteration counter, starting at 1.
    pub iter: usize,
    pub a: f64,
    pub b: f64,
    pub half_width: f64,
    pub x: f64,
    pub value: f64,
}

/// The ordered records of a bisection run.
///
/// Records are appended once per completed pass and never removed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Trace {
    records: Vec<IterationRecord>,
}

impl Trace {
    pub(super) fn push(&mut self, record: IterationRecord) {
        debug_assert_eq!(record.iter, self.records.len() + 1);
        self.records.push(record);
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no pass completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a IterationRecord;
    type IntoIter = slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
