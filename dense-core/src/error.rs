use thiserror::Error;

/// Geometry violations reported by [`General::check`](crate::General::check).
///
/// Shape mismatches and out-of-range indices are not represented here: those are
/// preconditions, asserted by the diagnostic layer rather than returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseCoreError {
    #[error("general: rows < 0 (rows = {0})")]
    NegativeRows(isize),

    #[error("general: cols < 0 (cols = {0})")]
    NegativeCols(isize),

    #[error("general: stride < 1 (stride = {0})")]
    StrideTooSmall(isize),

    #[error("general: illegal stride {stride} for {cols} columns")]
    IllegalStride { stride: isize, cols: isize },

    /// `required` is `None` when the footprint itself overflows `isize`.
    #[error("general: insufficient length: need {}, have {}", display_required(.required), .len)]
    InsufficientLength { required: Option<isize>, len: usize },
}

fn display_required(required: &Option<isize>) -> String {
    match required {
        Some(n) => n.to_string(),
        None => "more than isize::MAX".to_string(),
    }
}
