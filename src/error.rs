//! Error type shared by every layout computation in the crate.

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LayoutError {
    /// An image or box dimension is zero, negative, NaN, or infinite.
    #[error("image and box dimensions must be positive and finite")]
    InvalidDimension,
    /// Table pagination was asked for pages of zero rows.
    #[error("rows per page must be at least 1")]
    ZeroRowsPerPage,
    /// Size search bounds are not `0 < min <= max` with a positive step.
    #[error("size search needs 0 < min <= max and a positive step")]
    InvalidSearchRange,
}
