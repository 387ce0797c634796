//! # Config Crate
//!
//! Centralized configuration constants for the box shell mesher.
//! Every limit and topological count the builder relies on is defined here
//! so the mesher, its sink and its tests agree on a single value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{boundary_node_count, MIN_NODES_PER_AXIS, NODES_PER_QUAD};
//!
//! // A 2x2x2 grid has only its 8 corners
//! assert_eq!(boundary_node_count(2, 2, 2), 8);
//!
//! let requested = 1;
//! assert!(requested < MIN_NODES_PER_AXIS);
//! assert_eq!(NODES_PER_QUAD, 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Index Space**: Limits are expressed against the u32 node index space
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
