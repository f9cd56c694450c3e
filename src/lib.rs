//! Gridfolio lays out portfolio image galleries on a fixed cell grid.
//!
//! Given a project key, an ordered list of [`ImageDescriptor`]s and an optional
//! [`TextBlock`], [`choose_layout`] returns a [`Layout`]: non-overlapping
//! [`Tile`]s with 1-based grid coordinates and spans that a renderer can map
//! directly onto CSS grid placement.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: FNV-1a (32-bit, UTF-16 code units) of the project key drives an xorshift32 stream.
//! 2. **Shuffle**: images are reordered deterministically; the text block is inserted after the
//!    cover (or first `full` image), else prepended.
//! 3. **Decorate**: each node gets a size class, spans from its orientation plus a boost for
//!    sparse galleries, and a horizontal alignment from a per-tile hash.
//! 4. **Pack**: anchor scan (coarse lattice first, then row-major), shrinking once and then to
//!    3x3 when a tile does not fit; unplaceable tiles are dropped.
//! 5. **Grow**: tiles expand greedily into adjacent free cells.
//!
//! The same inputs always produce the same layout. No IO happens inside the packer; manifest
//! parsing ([`ImagesManifest`]) is a separate, fallible step.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod gallery;
mod layout;

pub use foundation::error::{GridfolioError, GridfolioResult};
pub use gallery::manifest::{
    GalleryItem, ImagesManifest, ManifestEntry, ManifestItem, ProjectGallery, build_alt,
};
pub use gallery::model::{ImageDescriptor, ImageKind, Orientation, TextBlock, TileSize};
pub use layout::chooser::{LayoutOptions, choose_layout};
pub use layout::grid::GridSize;
pub use layout::tile::{HAlign, Layout, LayoutName, TextNode, Tile, TileNode};
