use super::IterationRecord;

/// Event emitted by the bisection solver for each midpoint evaluation.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The midpoint evaluated to a finite value and the record was appended.
    Iterated {
        /// The record just appended to the trace.
        record: &'a IterationRecord,
    },

    /// The function was undefined at the midpoint; the run ends here.
    Undefined {
        /// Iteration counter of the failed pass.
        iter: usize,
        /// The midpoint that could not be evaluated.
        x: f64,
    },
}

impl Event<'_> {
    /// Returns the iteration counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Event::Iterated { record } => record.iter,
            Event::Undefined { iter, .. } => *iter,
        }
    }

    /// Returns the evaluated midpoint.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Iterated { record } => record.x,
            Event::Undefined { x, .. } => *x,
        }
    }
}
