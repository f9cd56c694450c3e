use std::collections::BTreeMap;

use crate::{
    gallery::model::{ImageDescriptor, Orientation, TextBlock, TileSize},
    layout::grid::CellRect,
};

/// Horizontal alignment jitter applied to an image inside its tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    /// `align-left`.
    Left,
    /// `align-right`.
    Right,
    /// No alignment class.
    #[default]
    Center,
}

impl HAlign {
    fn class(self) -> Option<&'static str> {
        match self {
            Self::Left => Some("align-left"),
            Self::Right => Some("align-right"),
            Self::Center => None,
        }
    }
}

/// What a tile shows.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TileNode {
    /// A gallery image.
    Image(ImageDescriptor),
    /// The project's text block.
    Text(TextNode),
}

/// Synthetic node carrying the caller's text block.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TextNode {
    /// Pre-rendered HTML content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain-text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Requested size; serialized once, on the owning tile.
    #[serde(skip)]
    pub size: TileSize,
}

impl From<TextBlock> for TextNode {
    fn from(block: TextBlock) -> Self {
        Self {
            html: block.html,
            text: block.text,
            size: block.size,
        }
    }
}

impl TileNode {
    /// Text tiles have no orientation and span like a square image.
    pub fn orientation(&self) -> Orientation {
        match self {
            Self::Image(img) => img.orientation,
            Self::Text(_) => Orientation::Square,
        }
    }

    /// True for the text block.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The image descriptor, for image tiles.
    pub fn as_image(&self) -> Option<&ImageDescriptor> {
        match self {
            Self::Image(img) => Some(img),
            Self::Text(_) => None,
        }
    }
}

/// A node with its resolved size, spans and (once packed) grid position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Source node.
    #[serde(flatten)]
    pub node: TileNode,
    /// Resolved size class.
    pub size: TileSize,
    /// Width in cells.
    pub span_x: u32,
    /// Height in cells.
    pub span_y: u32,
    /// 1-based column of the top-left cell.
    pub start_c: u32,
    /// 1-based row of the top-left cell.
    pub start_r: u32,
    /// Horizontal alignment; always `center` for text.
    pub align: HAlign,
}

impl Tile {
    pub(crate) fn rect(&self) -> CellRect {
        CellRect {
            col: self.start_c,
            row: self.start_r,
            span_x: self.span_x,
            span_y: self.span_y,
        }
    }

    /// Last column covered (inclusive). Saturates for unplaced tiles.
    pub fn end_c(&self) -> u32 {
        self.start_c.saturating_add(self.span_x).saturating_sub(1)
    }

    /// Last row covered (inclusive). Saturates for unplaced tiles.
    pub fn end_r(&self) -> u32 {
        self.start_r.saturating_add(self.span_y).saturating_sub(1)
    }

    fn covers_no_cell(&self) -> bool {
        self.span_x == 0 || self.span_y == 0
    }

    /// True if the two tiles share at least one cell.
    pub fn overlaps(&self, other: &Tile) -> bool {
        if self.covers_no_cell() || other.covers_no_cell() {
            return false;
        }
        self.start_c <= other.end_c()
            && other.start_c <= self.end_c()
            && self.start_r <= other.end_r()
            && other.start_r <= self.end_r()
    }

    /// Space-separated classification tags, e.g.
    /// `img img--landscape size-md span-x-6 span-y-4 align-left`.
    pub fn classes(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(6);
        match &self.node {
            TileNode::Text(_) => {
                parts.push("tile".into());
                parts.push("tile--text".into());
            }
            TileNode::Image(img) => {
                parts.push("img".into());
                parts.push(format!("img--{}", img.orientation.as_str()));
            }
        }
        parts.push(format!("size-{}", self.size.as_str()));
        parts.push(format!("span-x-{}", self.span_x));
        parts.push(format!("span-y-{}", self.span_y));
        if let Some(a) = self.align.class() {
            parts.push(a.into());
        }
        parts.join(" ")
    }

    /// CSS custom properties positioning the tile on the grid.
    pub fn style(&self) -> BTreeMap<&'static str, u32> {
        BTreeMap::from([
            ("--c", self.start_c),
            ("--r", self.start_r),
            ("--sx", self.span_x),
            ("--sy", self.span_y),
        ])
    }
}

/// Name of the produced layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum LayoutName {
    /// Nothing to render.
    #[serde(rename = "empty")]
    Empty,
    /// Packed 12x12 (or custom) grid.
    #[serde(rename = "vf-grid")]
    VfGrid,
}

/// Result of [`crate::choose_layout`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layout {
    /// Layout kind.
    pub name: LayoutName,
    /// Placed tiles in packing order.
    #[serde(serialize_with = "serialize_tiles")]
    pub tiles: Vec<Tile>,
}

impl Layout {
    /// The "nothing to render" sentinel.
    pub fn empty() -> Self {
        Self {
            name: LayoutName::Empty,
            tiles: Vec::new(),
        }
    }

    /// True for the sentinel and for layouts with no placed tile.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[derive(serde::Serialize)]
struct RenderedTile<'a> {
    #[serde(flatten)]
    tile: &'a Tile,
    classes: String,
    style: BTreeMap<&'static str, u32>,
}

fn serialize_tiles<S>(tiles: &[Tile], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(tiles.iter().map(|tile| RenderedTile {
        tile,
        classes: tile.classes(),
        style: tile.style(),
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tile.rs"]
mod tests;
