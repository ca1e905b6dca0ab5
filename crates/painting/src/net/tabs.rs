//! Glue tab table and trapezoid geometry

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::{NetError, grid_position};
use crate::types::FaceName;

/// Side of a face in the unfolded net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabDirection {
    North,
    South,
    East,
    West,
}

impl TabDirection {
    pub const ALL: [TabDirection; 4] = [
        TabDirection::North,
        TabDirection::South,
        TabDirection::East,
        TabDirection::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            TabDirection::North => TabDirection::South,
            TabDirection::South => TabDirection::North,
            TabDirection::East => TabDirection::West,
            TabDirection::West => TabDirection::East,
        }
    }

    /// Grid cell on this side of `cell`, if it exists
    fn step(self, cell: UVec2) -> Option<UVec2> {
        match self {
            TabDirection::North => cell.y.checked_sub(1).map(|y| UVec2::new(cell.x, y)),
            TabDirection::South => Some(UVec2::new(cell.x, cell.y + 1)),
            TabDirection::East => Some(UVec2::new(cell.x + 1, cell.y)),
            TabDirection::West => cell.x.checked_sub(1).map(|x| UVec2::new(x, cell.y)),
        }
    }
}

/// Which sides of each face carry a glue tab.
///
/// Every cut edge of the net is glued by exactly one tab, and fold edges
/// carry none; [`validate_tab_table`] checks this against [`CUBE_EDGES`].
pub fn tab_directions(face: FaceName) -> &'static [TabDirection] {
    use TabDirection::*;
    match face {
        FaceName::Top => &[North, East, West],
        FaceName::Bottom => &[East, West, South],
        FaceName::Back => &[East],
        FaceName::Left | FaceName::Front | FaceName::Right => &[],
    }
}

/// One side of one face in the net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceSide {
    pub face: FaceName,
    pub side: TabDirection,
}

const fn side(face: FaceName, side: TabDirection) -> FaceSide {
    FaceSide { face, side }
}

/// The twelve cube edges, each as the pair of net face sides that meet there.
pub const CUBE_EDGES: [(FaceSide, FaceSide); 12] = {
    use FaceName::*;
    use TabDirection::*;
    [
        // Folds inside the cross
        (side(Top, South), side(Front, North)),
        (side(Left, East), side(Front, West)),
        (side(Front, East), side(Right, West)),
        (side(Right, East), side(Back, West)),
        (side(Front, South), side(Bottom, North)),
        // Cut edges, glued after folding
        (side(Top, North), side(Back, North)),
        (side(Top, West), side(Left, North)),
        (side(Top, East), side(Right, North)),
        (side(Bottom, West), side(Left, South)),
        (side(Bottom, East), side(Right, South)),
        (side(Bottom, South), side(Back, South)),
        (side(Back, East), side(Left, West)),
    ]
};

/// How a cube edge appears in the net
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// The two faces share a grid edge and are folded
    Fold,
    /// The faces are separated in the net and glued with a tab
    Cut,
}

/// Classify a cube edge by whether its faces touch in the cross layout
pub fn edge_kind(a: FaceSide, b: FaceSide) -> EdgeKind {
    let touching = a.side.opposite() == b.side
        && a.side.step(grid_position(a.face)) == Some(grid_position(b.face));
    if touching { EdgeKind::Fold } else { EdgeKind::Cut }
}

pub fn has_tab(side: FaceSide) -> bool {
    tab_directions(side.face).contains(&side.side)
}

/// Check that every cut edge has exactly one tab and no fold has any
pub fn validate_tab_table() -> Result<(), NetError> {
    for (a, b) in CUBE_EDGES {
        let tabs = usize::from(has_tab(a)) + usize::from(has_tab(b));
        let expected = match edge_kind(a, b) {
            EdgeKind::Fold => 0,
            EdgeKind::Cut => 1,
        };
        if tabs != expected {
            return Err(NetError::TabTable {
                a: a.face,
                a_side: a.side,
                b: b.face,
                b_side: b.side,
                tabs,
            });
        }
    }
    Ok(())
}

/// A glue tab polygon, closed for filling
#[derive(Debug, Clone, PartialEq)]
pub struct TabPolygon {
    pub face: FaceName,
    pub direction: TabDirection,
    /// Two points on the face edge, then the two outer points
    pub points: [Vec2; 4],
}

/// Compute a tab trapezoid for a face placed at `origin`.
///
/// The base runs the full face edge; the outer edge sits `tab` pixels out and
/// is inset by `taper` at both ends. Points are ordered corner, outer, outer,
/// corner, so the open path is the cut line.
pub fn tab_polygon(
    origin: Vec2,
    direction: TabDirection,
    face: f32,
    tab: f32,
    taper: f32,
) -> [Vec2; 4] {
    let Vec2 { x, y } = origin;
    match direction {
        TabDirection::North => [
            Vec2::new(x, y),
            Vec2::new(x + taper, y - tab),
            Vec2::new(x + face - taper, y - tab),
            Vec2::new(x + face, y),
        ],
        TabDirection::South => [
            Vec2::new(x, y + face),
            Vec2::new(x + taper, y + face + tab),
            Vec2::new(x + face - taper, y + face + tab),
            Vec2::new(x + face, y + face),
        ],
        TabDirection::East => [
            Vec2::new(x + face, y),
            Vec2::new(x + face + tab, y + taper),
            Vec2::new(x + face + tab, y + face - taper),
            Vec2::new(x + face, y + face),
        ],
        TabDirection::West => [
            Vec2::new(x, y),
            Vec2::new(x - tab, y + taper),
            Vec2::new(x - tab, y + face - taper),
            Vec2::new(x, y + face),
        ],
    }
}
