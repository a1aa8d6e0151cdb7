mod algos;
mod constants;
mod error;
mod types;

use tracing::{Level, span};

pub use algos::FloorPlanConfig;
pub use error::FloorPlanError;
pub use types::{Edge, FloorPlan, RoomNode, RoomType, Vertex};

/// Builds the floor plan of `root` inside the default 250 x 250 bounding box.
pub fn create_default_floor_plan(root: &RoomNode) -> Result<FloorPlan, FloorPlanError> {
    create_floor_plan(
        root,
        constants::DEFAULT_PLAN_WIDTH,
        constants::DEFAULT_PLAN_HEIGHT,
    )
}

pub fn create_floor_plan(
    root: &RoomNode,
    width: f64,
    height: f64,
) -> Result<FloorPlan, FloorPlanError> {
    create_floor_plan_with_config(root, width, height, &FloorPlanConfig::default())
}

pub fn create_floor_plan_with_config(
    root: &RoomNode,
    width: f64,
    height: f64,
    config: &FloorPlanConfig,
) -> Result<FloorPlan, FloorPlanError> {
    let span = span!(Level::DEBUG, "create_floor_plan");
    let _guard = span.enter();

    let builder = algos::FloorPlanBuilder::new(width, height)?;

    builder.build(root, config)
}
