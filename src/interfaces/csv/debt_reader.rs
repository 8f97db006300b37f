use crate::domain::debt::DebtInput;
use crate::error::{PayoffError, Result};
use std::io::Read;

/// Reads debts from a CSV source with the header `name,balance,apr,min_payment`.
///
/// Whitespace is trimmed and short records are accepted; missing numeric cells
/// come through as `None` and are coerced when the run starts.
pub struct DebtReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DebtReader<R> {
    /// Creates a new `DebtReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes debts, one
    /// result per record.
    pub fn debts(self) -> impl Iterator<Item = Result<DebtInput>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayoffError::from))
    }
}
