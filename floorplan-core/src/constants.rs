// Default bounding box handed to the layout when the caller does not
// provide one, in the same abstract units as room areas.
pub(crate) const DEFAULT_PLAN_WIDTH: f64 = 250.0;
pub(crate) const DEFAULT_PLAN_HEIGHT: f64 = 250.0;

// Weight share at which a slice stops absorbing further elements.
// Lower values produce thinner strips, higher values squarer rooms.
pub(crate) const MIN_SLICE_RATIO: f64 = 0.35;

// Hard bound on room-tree recursion. Plans are not expected to nest more
// than a handful of levels, so hitting this means malformed input.
pub(crate) const MAX_TREE_DEPTH: usize = 32;
