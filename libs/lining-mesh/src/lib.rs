//! # Lining Mesh
//!
//! Parametric mesh generation for segmented tunnel linings: precast ring
//! segments, optionally staggered between rings, and circumferential
//! reinforcement hoops, returned as independent labeled triangle meshes for
//! a 3D viewer.
//!
//! ## Architecture
//!
//! ```text
//! TunnelConfig → assembler (layout, stagger, hoop spacing)
//!                    ↓
//!     MeshBuilder (wedge | csg_ring) + HoopBuilder   (rayon, one job per mesh)
//!                    ↓
//!             Vec<LabeledMesh> ordered by MeshKey
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lining_mesh::{generate, TunnelConfig};
//!
//! let config = TunnelConfig { num_rings: 1, show_hoops: false, ..TunnelConfig::default() };
//! let meshes = generate(&config).unwrap();
//! assert_eq!(meshes.len(), 6);
//! assert_eq!(meshes[5].label, "Ring 1 Segment 6");
//! ```
//!
//! ## Design Principles
//!
//! - **Pure**: no I/O and no state between calls; output depends only on the
//!   config and the options
//! - **All-or-nothing**: a failing mesh fails the whole request
//! - **No subscriber**: the crate emits `tracing` events and leaves their
//!   collection to the host

pub mod arc;
pub mod assembler;
pub mod builders;
pub mod csg;
pub mod error;
pub mod mesh;
pub mod segment;
pub mod style;
pub mod tunnel;

// Re-export public API
pub use assembler::{
    generate, generate_with, GenerateOptions, LabeledMesh, MeshKey, MeshPart,
};
pub use builders::{BuildStrategy, WedgeStyle};
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use segment::{HoopSpec, RingSegmentSpec};
pub use style::{Color, Palette};
pub use tunnel::TunnelConfig;
