use crate::constants::{MAX_TREE_DEPTH, MIN_SLICE_RATIO};

#[derive(Debug, Clone, Copy)]
pub struct FloorPlanConfig {
    // The weight share at which a slice stops absorbing further elements.
    // Lower values allow thinner rooms, higher values force squarer ones.
    pub min_slice_ratio: f64,
    // Upper bound on room-tree recursion depth.
    pub max_tree_depth: usize,
}

impl Default for FloorPlanConfig {
    fn default() -> Self {
        FloorPlanConfig {
            min_slice_ratio: MIN_SLICE_RATIO,
            max_tree_depth: MAX_TREE_DEPTH,
        }
    }
}
