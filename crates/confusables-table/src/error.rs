use thiserror::Error;

/// Fatal problems found while reading the confusables dataset.
///
/// There is no recovery path: a dataset that produces any of these is
/// treated as corrupt and no table is built from it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("invalid codepoint {text:?}: {reason}")]
    InvalidCodepoint { text: String, reason: String },

    #[error("codepoint 0 is not a valid confusable")]
    NullCodepoint,

    #[error("codepoint {value:#X} exceeds U+10FFFF")]
    OutOfRange { value: u32 },

    #[error("codepoint {value:#X} is a surrogate")]
    Surrogate { value: u32 },

    #[error("{found} fields (expected {expected})")]
    FieldCount { found: usize, expected: usize },

    #[error("line {number}: {source}")]
    Line {
        number: usize,
        #[source]
        source: Box<TableError>,
    },
}

impl TableError {
    /// Attach the 1-based dataset line number to an error.
    pub fn at_line(self, number: usize) -> Self {
        TableError::Line {
            number,
            source: Box::new(self),
        }
    }
}
