//! Connectivity record of one quad while its face is being filled.

use config::constants::NODES_PER_QUAD;

use crate::mesh::Quad;

/// Position of a node within a shell, in face-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    /// (w, h)
    #[default]
    LowerLeft,
    /// (w + 1, h)
    LowerRight,
    /// (w, h + 1)
    UpperLeft,
    /// (w + 1, h + 1)
    UpperRight,
}

impl Corner {
    /// Slot of this corner in `[lower-left, lower-right, upper-left, upper-right]`.
    pub fn index(self) -> usize {
        match self {
            Corner::LowerLeft => 0,
            Corner::LowerRight => 1,
            Corner::UpperLeft => 2,
            Corner::UpperRight => 3,
        }
    }
}

/// Up to four node indices collected for one quad, in insertion order.
///
/// Each index is tagged with the corner it occupies so the quad can later
/// be emitted as a closed loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shell {
    indices: [u32; NODES_PER_QUAD],
    corners: [Corner; NODES_PER_QUAD],
    len: u8,
}

impl Shell {
    /// Appends a node index occupying `corner`.
    ///
    /// # Panics
    ///
    /// If the shell is already full. Debug builds also panic when the index
    /// or the corner is already present.
    #[inline]
    pub fn add_index(&mut self, index: u32, corner: Corner) {
        let len = self.len as usize;
        assert!(len < NODES_PER_QUAD, "shell already has 4 indices");
        debug_assert!(
            !self.indices().contains(&index),
            "index {} is already in the shell",
            index
        );
        debug_assert!(
            !self.corners[..len].contains(&corner),
            "corner {:?} is already filled",
            corner
        );

        self.indices[len] = index;
        self.corners[len] = corner;
        self.len += 1;
    }

    /// Indices added so far, in insertion order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices[..self.len as usize]
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.len as usize == NODES_PER_QUAD
    }

    /// Connectivity in insertion order.
    ///
    /// # Panics
    ///
    /// If fewer than four indices were added.
    pub fn insertion_quad(&self) -> Quad {
        assert!(self.is_complete(), "shell has {} indices", self.len);
        self.indices
    }

    /// Connectivity as a loop around the shell in face coordinates:
    /// lower-left, lower-right, upper-right, upper-left. `reversed` walks the
    /// same loop the other way, starting from lower-left.
    ///
    /// # Panics
    ///
    /// If fewer than four indices were added.
    pub fn loop_quad(&self, reversed: bool) -> Quad {
        assert!(self.is_complete(), "shell has {} indices", self.len);

        let mut by_corner = [0u32; NODES_PER_QUAD];
        for (&index, &corner) in self.indices.iter().zip(&self.corners) {
            by_corner[corner.index()] = index;
        }

        let [ll, lr, ul, ur] = by_corner;
        if reversed {
            [ll, ul, ur, lr]
        } else {
            [ll, lr, ur, ul]
        }
    }
}
