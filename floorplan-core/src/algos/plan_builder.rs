use super::{
    FloorPlanConfig,
    treemap::{LayoutItem, SliceTreemap, WeightedElement},
};
use crate::{
    error::FloorPlanError,
    types::{FloorPlan, RoomNode, Vertex},
};

use std::cmp::Ordering;

use tracing::event;

pub(crate) struct FloorPlanBuilder {
    pub width: f64,
    pub height: f64,
}

impl FloorPlanBuilder {
    pub fn new(width: f64, height: f64) -> Result<Self, FloorPlanError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(FloorPlanError::DegenerateBounds { width, height });
        }

        Ok(FloorPlanBuilder { width, height })
    }

    pub fn build(
        &self,
        root: &RoomNode,
        config: &FloorPlanConfig,
    ) -> Result<FloorPlan, FloorPlanError> {
        let build_start = std::time::Instant::now();

        let plan = Self::build_node(root, self.width, self.height, 0, config)?;

        event!(
            tracing::Level::DEBUG,
            "Built floor plan with {} vertices and {} edges in {:.2}ms",
            plan.vertices.len(),
            plan.edges.len(),
            build_start.elapsed().as_millis()
        );

        Ok(plan)
    }

    fn build_node(
        node: &RoomNode,
        width: f64,
        height: f64,
        depth: usize,
        config: &FloorPlanConfig,
    ) -> Result<FloorPlan, FloorPlanError> {
        if depth > config.max_tree_depth {
            return Err(FloorPlanError::DepthLimitExceeded {
                max_depth: config.max_tree_depth,
            });
        }

        // A childless room with no area of its own degenerates to a
        // zero-area rectangle, not an error.
        if node.children.is_empty() && node.area == 0.0 {
            let mut plan = FloorPlan::new();
            plan.push_rectangle(0.0, 0.0, 0.0, 0.0);
            return Ok(plan);
        }

        if node.area <= 0.0 {
            return Err(FloorPlanError::InvalidArea { area: node.area });
        }

        let mut elements = Vec::with_capacity(node.children.len() + 1);

        for child in &node.children {
            if child.area <= 0.0 {
                return Err(FloorPlanError::InvalidArea { area: child.area });
            }

            elements.push(WeightedElement {
                item: LayoutItem::Room(child),
                weight: child.area,
            });
        }

        // Descending weight order; the sort is stable so ties keep their
        // input order
        elements.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));

        // The parent claims a proportional share of its own bounding box
        // alongside its children
        elements.insert(
            0,
            WeightedElement {
                item: LayoutItem::SelfArea,
                weight: node.area,
            },
        );

        let slice = SliceTreemap::compute_slice(elements, 1.0, config.min_slice_ratio)?;
        let rectangles = SliceTreemap::compute_rectangles(&slice, width, height)?;

        event!(
            tracing::Level::DEBUG,
            "Laid out {} rectangles for {} inside [{}x{}] at depth {}",
            rectangles.len(),
            node,
            width,
            height,
            depth
        );

        let mut plan = FloorPlan::new();

        for rect in &rectangles {
            plan.push_rectangle(rect.x, rect.y, rect.width, rect.height);

            for element in &rect.elements {
                if let LayoutItem::Room(child) = element.item {
                    if !child.children.is_empty() {
                        // Nested rooms lay out against the local origin of
                        // their rectangle, the merge shifts them into the
                        // current frame
                        let sub_plan =
                            Self::build_node(child, rect.width, rect.height, depth + 1, config)?;

                        plan.merge_translated(sub_plan, Vertex::new(rect.x, rect.y));
                    }
                }
            }
        }

        Ok(plan)
    }
}
