//! Image rendering for brand assets.
//!
//! # Modules
//!
//! - [`backend`]: rasterization backends and the capability probe
//! - [`raster`]: SVG → square PNG
//! - [`ico`]: multi-resolution `favicon.ico`
//! - [`svg`]: `favicon.svg` root size rewrite
//!
//! ```text
//! avatar.svg ──► raster ──► <prefix>-<n>x<n>.png
//!          │
//!          ├──► raster ×3 ──► ico ──► favicon.ico
//!          │
//!          └──► svg ──► favicon.svg
//! ```

pub mod backend;
pub mod ico;
pub mod raster;
pub mod svg;
