use thiserror::Error;

/// Failure modes of floor-plan construction. Construction either fully
/// succeeds for a subtree or the whole call fails, no partial plan is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FloorPlanError {
    /// A room presented to layout carries a non-positive area weight.
    #[error("room area must be positive, got {area}")]
    InvalidArea { area: f64 },

    /// The bounding box cannot hold any layout.
    #[error("bounding box dimensions must be positive, got [{width}x{height}]")]
    DegenerateBounds { width: f64, height: f64 },

    /// The layout was asked to partition an empty element list.
    #[error("cannot lay out an empty element list")]
    EmptyLayout,

    /// The room tree nests deeper than the configured bound.
    #[error("room tree exceeds the maximum depth of {max_depth}")]
    DepthLimitExceeded { max_depth: usize },
}
