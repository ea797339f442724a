//! # Config Crate
//!
//! Centralized configuration constants for the tunnel lining mesh engine.
//! Parameter defaults and ranges, tessellation settings, tolerances and
//! display styling live here so the engine stays free of literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ResolutionConfig, DEFAULT_SEGMENTS_PER_RING, MAX_SEGMENTS_PER_RING};
//!
//! let resolution = ResolutionConfig::default();
//! assert_eq!(resolution.lining_resolution, 30);
//! assert!(DEFAULT_SEGMENTS_PER_RING <= MAX_SEGMENTS_PER_RING);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency-Free**: Pure data, usable from any host
//! - **Slider Compatible**: Defaults and ranges match the parameter panel

pub mod constants;
