//! # Box Faces
//!
//! A face is a 2D grid of shells. Nodes are projected onto the grid by
//! dropping the face's constant axis, then registered into every shell
//! that has the node as one of its corners.

use config::constants::FACE_COUNT;
use glam::{DVec3, UVec2, UVec3};
use serde::{Deserialize, Serialize};

use super::shell::{Corner, Shell};

/// One of the six faces of an axis-aligned box.
///
/// Faces are named by the side of the box they close:
///
/// ```text
///   Left   x = 0         Right  x = last
///   Bottom y = 0         Top    y = last
///   Front  z = 0         Back   z = last
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceKind {
    Left,
    Right,
    Top,
    Bottom,
    Front,
    Back,
}

impl FaceKind {
    /// Number of faces, for sizing face-indexed arrays.
    pub const COUNT: usize = FACE_COUNT;

    /// All faces in index order.
    pub const ALL: [FaceKind; FaceKind::COUNT] = [
        FaceKind::Left,
        FaceKind::Right,
        FaceKind::Top,
        FaceKind::Bottom,
        FaceKind::Front,
        FaceKind::Back,
    ];

    /// Dense array index of this face.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            FaceKind::Left => 0,
            FaceKind::Right => 1,
            FaceKind::Top => 2,
            FaceKind::Bottom => 3,
            FaceKind::Front => 4,
            FaceKind::Back => 5,
        }
    }

    /// Face stored at `index`, if any.
    pub fn from_index(index: usize) -> Option<FaceKind> {
        FaceKind::ALL.get(index).copied()
    }

    /// Unit normal pointing out of the box.
    pub fn outward_normal(self) -> DVec3 {
        match self {
            FaceKind::Left => DVec3::NEG_X,
            FaceKind::Right => DVec3::X,
            FaceKind::Top => DVec3::Y,
            FaceKind::Bottom => DVec3::NEG_Y,
            FaceKind::Front => DVec3::NEG_Z,
            FaceKind::Back => DVec3::Z,
        }
    }

    /// Projects a grid point to this face's (w, h) coordinates.
    ///
    /// Left/Right use (z, y), Top/Bottom (x, z), Front/Back (x, y). The
    /// dropped axis is not checked.
    #[inline]
    pub fn project(self, point: UVec3) -> UVec2 {
        match self {
            FaceKind::Left | FaceKind::Right => UVec2::new(point.z, point.y),
            FaceKind::Top | FaceKind::Bottom => UVec2::new(point.x, point.z),
            FaceKind::Front | FaceKind::Back => UVec2::new(point.x, point.y),
        }
    }

    /// Inverse of [`project`](Self::project) for a box whose last grid
    /// index per axis is `last`.
    #[inline]
    pub fn unproject(self, local: UVec2, last: UVec3) -> UVec3 {
        let UVec2 { x: w, y: h } = local;
        match self {
            FaceKind::Left => UVec3::new(0, h, w),
            FaceKind::Right => UVec3::new(last.x, h, w),
            FaceKind::Bottom => UVec3::new(w, 0, h),
            FaceKind::Top => UVec3::new(w, last.y, h),
            FaceKind::Front => UVec3::new(w, h, 0),
            FaceKind::Back => UVec3::new(w, h, last.z),
        }
    }

    /// True if the grid point lies on this face.
    #[inline]
    pub fn contains(self, point: UVec3, last: UVec3) -> bool {
        match self {
            FaceKind::Left => point.x == 0,
            FaceKind::Right => point.x == last.x,
            FaceKind::Bottom => point.y == 0,
            FaceKind::Top => point.y == last.y,
            FaceKind::Front => point.z == 0,
            FaceKind::Back => point.z == last.z,
        }
    }

    /// True if a loop that runs counter-clockwise in (w, h) has to be
    /// reversed to face outward.
    ///
    /// Right (z, y), Top (x, z) and Front (x, y) see their local axes from
    /// behind.
    #[inline]
    pub fn reverses_local_loop(self) -> bool {
        matches!(self, FaceKind::Right | FaceKind::Top | FaceKind::Front)
    }
}

/// A face of the box subdivided into a grid of shells.
#[derive(Debug, Clone)]
pub struct Face {
    kind: FaceKind,
    width_divisions: u32,
    height_divisions: u32,
    shells: Vec<Shell>,
}

impl Face {
    /// Creates a face with all shells allocated and empty.
    ///
    /// # Panics
    ///
    /// If either division count is zero.
    pub fn new(width_divisions: u32, height_divisions: u32, kind: FaceKind) -> Self {
        assert!(
            width_divisions >= 1 && height_divisions >= 1,
            "{:?} face needs at least one division per axis, got {}x{}",
            kind,
            width_divisions,
            height_divisions
        );

        let count = width_divisions as usize * height_divisions as usize;
        Self {
            kind,
            width_divisions,
            height_divisions,
            shells: vec![Shell::default(); count],
        }
    }

    #[inline]
    pub fn kind(&self) -> FaceKind {
        self.kind
    }

    #[inline]
    pub fn width_divisions(&self) -> u32 {
        self.width_divisions
    }

    #[inline]
    pub fn height_divisions(&self) -> u32 {
        self.height_divisions
    }

    /// Shells in row-major (w, h) order.
    #[inline]
    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    #[inline]
    pub fn shell_count(&self) -> usize {
        self.shells.len()
    }

    /// Shell whose lower corner is (w, h).
    #[inline]
    pub fn shell(&self, w: u32, h: u32) -> &Shell {
        &self.shells[self.shell_index(w, h)]
    }

    /// Projects a grid point onto this face's local grid.
    #[inline]
    pub fn project(&self, point: UVec3) -> UVec2 {
        self.kind.project(point)
    }

    /// Registers a node that may lie on the border of this face's grid.
    ///
    /// The index is added to each of the up to four shells around the
    /// projected point that exist on this face.
    pub fn register_node_checked(&mut self, index: u32, point: UVec3) {
        let UVec2 { x: w, y: h } = self.project(point);
        let left = w.checked_sub(1);
        let below = h.checked_sub(1);

        let candidates = [
            (Some(w), Some(h), Corner::LowerLeft),
            (left, Some(h), Corner::LowerRight),
            (Some(w), below, Corner::UpperLeft),
            (left, below, Corner::UpperRight),
        ];
        for (sw, sh, corner) in candidates {
            if let (Some(sw), Some(sh)) = (sw, sh) {
                if sw < self.width_divisions && sh < self.height_divisions {
                    self.add_to_shell(index, sw, sh, corner);
                }
            }
        }
    }

    /// Registers a node strictly inside this face's grid.
    ///
    /// The index goes into all four surrounding shells with no range
    /// filtering. Calling this for a node on the grid border is a bug; debug
    /// builds assert against it.
    #[inline]
    pub fn register_interior_node(&mut self, index: u32, point: UVec3) {
        let UVec2 { x: w, y: h } = self.project(point);
        debug_assert!(
            w >= 1 && w < self.width_divisions && h >= 1 && h < self.height_divisions,
            "node ({}, {}) is on the border of the {:?} face",
            w,
            h,
            self.kind
        );

        self.add_to_shell(index, w, h, Corner::LowerLeft);
        self.add_to_shell(index, w - 1, h, Corner::LowerRight);
        self.add_to_shell(index, w, h - 1, Corner::UpperLeft);
        self.add_to_shell(index, w - 1, h - 1, Corner::UpperRight);
    }

    #[inline]
    fn add_to_shell(&mut self, index: u32, w: u32, h: u32, corner: Corner) {
        let shell = self.shell_index(w, h);
        self.shells[shell].add_index(index, corner);
    }

    #[inline]
    fn shell_index(&self, w: u32, h: u32) -> usize {
        debug_assert!(w < self.width_divisions && h < self.height_divisions);
        h as usize * self.width_divisions as usize + w as usize
    }
}
