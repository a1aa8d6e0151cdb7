use std::fmt::{Display, Formatter};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const ZERO: Vertex = Vertex::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Vertex { x, y }
    }

    // Reprojects a point from a child frame into its parent frame.
    // Returns a new vertex, the receiver is left untouched.
    pub fn translated_by(&self, offset: Vertex) -> Vertex {
        Vertex {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One boundary segment of a room rectangle, stored as its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex) -> Self {
        Edge { from, to }
    }

    pub fn translated_by(&self, offset: Vertex) -> Edge {
        Edge {
            from: self.from.translated_by(offset),
            to: self.to.translated_by(offset),
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.from, self.to)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RoomType {
    #[default]
    LivingRoom,
    BedRoom,
    Kitchen,
    Bathroom,
    ExtraRoom,
}

impl Display for RoomType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomType::LivingRoom => write!(f, "living-room"),
            RoomType::BedRoom => write!(f, "bed-room"),
            RoomType::Kitchen => write!(f, "kitchen"),
            RoomType::Bathroom => write!(f, "bathroom"),
            RoomType::ExtraRoom => write!(f, "extra-room"),
        }
    }
}

/// A node of the caller-built room tree. The `area` is a relative weight,
/// not an absolute surface: siblings receive floor space proportional to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomNode {
    pub room_type: RoomType,
    pub area: f64,
    pub children: Vec<RoomNode>,
}

impl RoomNode {
    pub fn new(room_type: RoomType, area: f64) -> Self {
        RoomNode {
            room_type,
            area,
            children: Vec::new(),
        }
    }

    pub fn with_children(room_type: RoomType, area: f64, children: Vec<RoomNode>) -> Self {
        RoomNode {
            room_type,
            area,
            children,
        }
    }

    pub fn add_child(&mut self, child: RoomNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Display for RoomNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.room_type, self.area)
    }
}

/// The assembled output: room boundaries of a whole subtree, expressed in
/// one global frame rooted at the top-left of the bounding box.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FloorPlan {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl FloorPlan {
    pub fn new() -> Self {
        FloorPlan::default()
    }

    // Emits the four corners of an axis-aligned rectangle and the four
    // boundary edges connecting them, closed in TL -> TR -> BR -> BL order.
    pub(crate) fn push_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let top_left = Vertex::new(x, y);
        let top_right = Vertex::new(x + width, y);
        let bottom_right = Vertex::new(x + width, y + height);
        let bottom_left = Vertex::new(x, y + height);

        self.vertices
            .extend([top_left, top_right, bottom_right, bottom_left]);

        self.edges.extend([
            Edge::new(top_left, top_right),
            Edge::new(top_right, bottom_right),
            Edge::new(bottom_right, bottom_left),
            Edge::new(bottom_left, top_left),
        ]);
    }

    // Merges a child plan built against a local (0, 0) origin, shifting
    // every vertex and edge endpoint into the current frame first.
    pub(crate) fn merge_translated(&mut self, other: FloorPlan, offset: Vertex) {
        self.vertices
            .extend(other.vertices.iter().map(|v| v.translated_by(offset)));
        self.edges
            .extend(other.edges.iter().map(|e| e.translated_by(offset)));
    }
}

impl Display for FloorPlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vertices - {} edges",
            self.vertices.len(),
            self.edges.len()
        )
    }
}
