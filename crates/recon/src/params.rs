use crate::error::ReconError;
use crate::model::DatasetParams;

/// Reject a comparison between datasets built with different `N`, `L` or `M`.
///
/// `L` is compared exactly: both files come from the same writer, so any
/// difference means a different run.
pub fn ensure_same_params(left: &DatasetParams, right: &DatasetParams) -> Result<(), ReconError> {
    if left.vertex_count != right.vertex_count {
        return Err(ReconError::ParameterMismatch {
            field: "N",
            left: left.vertex_count.to_string(),
            right: right.vertex_count.to_string(),
        });
    }
    if left.side_length != right.side_length {
        return Err(ReconError::ParameterMismatch {
            field: "L",
            left: left.side_length.to_string(),
            right: right.side_length.to_string(),
        });
    }
    if left.grid_cells != right.grid_cells {
        return Err(ReconError::ParameterMismatch {
            field: "M",
            left: left.grid_cells.to_string(),
            right: right.grid_cells.to_string(),
        });
    }
    Ok(())
}
