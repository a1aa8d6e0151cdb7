use crate::{error::FloorPlanError, types::RoomNode};

/// What a layout element stands for. `SelfArea` reserves the parent room's
/// own floor space alongside its children, replacing the null owner the
/// classic slice treemap uses for that purpose.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LayoutItem<'a> {
    SelfArea,
    Room(&'a RoomNode),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct WeightedElement<'a> {
    pub item: LayoutItem<'a>,
    pub weight: f64,
}

/// One node of the slice partition. `weight` is the fraction of the parent
/// slice's span this slice occupies; the root slice always carries 1.
/// A slice either is terminal (single element, no children) or splits into
/// exactly two sub-slices.
#[derive(Debug)]
pub(crate) struct Slice<'a> {
    pub weight: f64,
    pub elements: Vec<WeightedElement<'a>>,
    pub children: Vec<Slice<'a>>,
}

/// A concrete rectangle produced for a terminal slice, together with the
/// elements assigned to it so callers can descend into nested rooms.
#[derive(Debug)]
pub(crate) struct LayoutRect<'a> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub elements: Vec<WeightedElement<'a>>,
}

pub(crate) struct SliceTreemap;

impl SliceTreemap {
    /// Partitions `elements` into a binary slice tree whose leaf weights
    /// are proportional to the element weights.
    ///
    /// Elements should arrive in descending weight order; the split quality
    /// degrades for unsorted input but correctness does not depend on it.
    pub fn compute_slice<'a>(
        elements: Vec<WeightedElement<'a>>,
        weight: f64,
        min_ratio: f64,
    ) -> Result<Slice<'a>, FloorPlanError> {
        if elements.is_empty() {
            return Err(FloorPlanError::EmptyLayout);
        }

        if elements.len() == 1 {
            return Ok(Slice {
                weight,
                elements,
                children: vec![],
            });
        }

        let (head, tail, head_share) = Self::split_elements(&elements, min_ratio);

        let head_slice = Self::compute_slice(head, head_share, min_ratio)?;
        let tail_slice = Self::compute_slice(tail, 1.0 - head_share, min_ratio)?;

        Ok(Slice {
            weight,
            elements,
            children: vec![head_slice, tail_slice],
        })
    }

    /// Maps a slice tree onto a `width` x `height` box rooted at (0, 0),
    /// producing one rectangle per terminal slice. Wider boxes split
    /// left-to-right, taller boxes top-to-bottom.
    pub fn compute_rectangles<'a>(
        slice: &Slice<'a>,
        width: f64,
        height: f64,
    ) -> Result<Vec<LayoutRect<'a>>, FloorPlanError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(FloorPlanError::DegenerateBounds { width, height });
        }

        let mut rectangles = Vec::with_capacity(slice.elements.len());

        if slice.children.is_empty() {
            // A single element occupies the whole box
            rectangles.push(LayoutRect {
                x: 0.0,
                y: 0.0,
                width,
                height,
                elements: slice.elements.clone(),
            });
            return Ok(rectangles);
        }

        Self::fill_rectangles(slice, 0.0, 0.0, width, height, &mut rectangles);

        // Accumulated spans may drift past the box, clamp them back in
        for rect in rectangles.iter_mut() {
            if rect.x + rect.width > width {
                rect.width = width - rect.x;
            }
            if rect.y + rect.height > height {
                rect.height = height - rect.y;
            }
        }

        Ok(rectangles)
    }

    // Splits an element run in two: the head absorbs elements until its
    // share of the total weight exceeds `min_ratio`, the tail keeps the
    // rest. Both halves stay populated so the recursion terminates even
    // with ratios of 0.5 and above.
    fn split_elements<'a>(
        elements: &[WeightedElement<'a>],
        min_ratio: f64,
    ) -> (
        Vec<WeightedElement<'a>>,
        Vec<WeightedElement<'a>>,
        f64,
    ) {
        let total_weight = elements.iter().map(|e| e.weight).sum::<f64>();

        let mut head = Vec::new();
        let mut tail = Vec::new();
        let mut head_share = 0.0;

        for element in elements.iter().copied() {
            if head_share > min_ratio {
                tail.push(element);
            } else {
                head_share += element.weight / total_weight;
                head.push(element);
            }
        }

        if tail.is_empty() {
            // Invariant: the caller only splits runs of two or more elements
            let moved = head.pop().unwrap();
            head_share -= moved.weight / total_weight;
            tail.push(moved);
        }

        (head, tail, head_share)
    }

    fn fill_rectangles<'a>(
        slice: &Slice<'a>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        out: &mut Vec<LayoutRect<'a>>,
    ) {
        let split_horizontal = width >= height;
        let mut offset = 0.0;

        for sub_slice in &slice.children {
            let (sub_x, sub_y, sub_width, sub_height) = if split_horizontal {
                (x + offset, y, width * sub_slice.weight, height)
            } else {
                (x, y + offset, width, height * sub_slice.weight)
            };

            if sub_slice.elements.len() > 1 {
                Self::fill_rectangles(sub_slice, sub_x, sub_y, sub_width, sub_height, out);
            } else {
                out.push(LayoutRect {
                    x: sub_x,
                    y: sub_y,
                    width: sub_width,
                    height: sub_height,
                    elements: sub_slice.elements.clone(),
                });
            }

            offset += if split_horizontal {
                sub_width
            } else {
                sub_height
            };
        }
    }
}
