use vchc_core::errors::{codes, ErrorInfo, VchcError};
use vchc_graph::SourceGraph;

/// Checks that the cover size is usable: `1 <= k <= |V|`.
///
/// The reducer itself accepts any `k`; this is the input validation an editor
/// runs before asking for a reduction.
pub fn check_parameters(source: &SourceGraph) -> Result<(), VchcError> {
    let k = source.k();
    let vertices = source.vertex_count();
    if k == 0 {
        return Err(parameter_error("cover size must be set before reducing")
            .with_context("k", k)
            .with_hint("choose k >= 1"));
    }
    if k > vertices {
        return Err(
            parameter_error("cover size cannot exceed the number of vertices")
                .with_context("k", k)
                .with_context("vertices", vertices),
        );
    }
    Ok(())
}

fn parameter_error(message: &str) -> VchcError {
    VchcError::Parameter(ErrorInfo::new(codes::INVALID_PARAMETER, message))
}
