use crate::{
    foundation::math::{XorShift32, hash_str, shuffle},
    gallery::model::{ImageDescriptor, ImageKind, TextBlock},
    layout::{
        decorate::{MAX_SPAN, MIN_SPAN, boost_for, decorate, resolve_cover},
        grid::{GridSize, Occupancy, anchors, find_slot},
        tile::{Layout, LayoutName, Tile, TileNode},
    },
};

/// Grow-phase step budget for text tiles.
const TEXT_GROW_STEPS: u32 = 1;
/// Grow-phase step budget for image tiles.
const IMAGE_GROW_STEPS: u32 = 3;

/// Caller options for [`choose_layout`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutOptions {
    /// Prose block inserted after the cover (or first `full` image).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_block: Option<TextBlock>,
    /// Grid dimensions; 12x12 unless overridden.
    #[serde(default)]
    pub grid: GridSize,
}

impl LayoutOptions {
    /// Builder-style text block.
    pub fn with_text_block(mut self, block: TextBlock) -> Self {
        self.text_block = Some(block);
        self
    }

    /// Builder-style grid size.
    pub fn with_grid(mut self, grid: GridSize) -> Self {
        self.grid = grid;
        self
    }
}

/// Pack a project's images (and optional text block) onto the grid.
///
/// The result depends only on `(project_key, images, opts)`. Returns the
/// empty sentinel when there is neither an image nor a text block with content.
/// Nodes that do not fit even at 3x3 are dropped without error.
#[tracing::instrument(skip(images, opts), fields(image_count = images.len()))]
pub fn choose_layout(
    project_key: &str,
    images: &[ImageDescriptor],
    opts: &LayoutOptions,
) -> Layout {
    let text_block = opts.text_block.as_ref().filter(|b| b.has_content());
    if images.is_empty() && text_block.is_none() {
        return Layout::empty();
    }

    let mut rng = XorShift32::new(hash_str(project_key));
    let cover_url = resolve_cover(images).map(str::to_owned);

    let mut shuffled = images.to_vec();
    shuffle(&mut shuffled, &mut rng);

    let nodes = interleave_text(shuffled, text_block.cloned(), cover_url.as_deref());
    let boost = boost_for(nodes.len());
    let decorated = decorate(nodes, cover_url.as_deref(), boost, project_key);

    let mut grid = Occupancy::new(opts.grid);
    let points = anchors(grid.size(), decorated.len());
    let mut placed = pack(&mut grid, &points, decorated);
    grow(&mut grid, &mut placed);

    tracing::debug!(
        tiles = placed.len(),
        boost,
        anchors = points.len(),
        occupied = grid.occupied_count(),
        "layout packed"
    );

    Layout {
        name: LayoutName::VfGrid,
        tiles: placed,
    }
}

/// Place the text block right after the first cover or `full` image in the
/// shuffled order; prepend it when there is none.
fn interleave_text(
    images: Vec<ImageDescriptor>,
    mut text: Option<TextBlock>,
    cover_url: Option<&str>,
) -> Vec<TileNode> {
    let mut out = Vec::with_capacity(images.len() + 1);
    for img in images {
        let is_anchor = cover_url == Some(img.url.as_str()) || img.kind == ImageKind::Full;
        out.push(TileNode::Image(img));
        if is_anchor && let Some(block) = text.take() {
            out.push(TileNode::Text(block.into()));
        }
    }
    if let Some(block) = text {
        out.insert(0, TileNode::Text(block.into()));
    }
    out
}

/// Place every tile at the first anchor that admits it, shrinking by one cell
/// and then to 3x3 when needed.
pub(crate) fn pack(
    grid: &mut Occupancy,
    points: &[(u32, u32)],
    tiles: Vec<Tile>,
) -> Vec<Tile> {
    let mut placed = Vec::with_capacity(tiles.len());

    for mut tile in tiles {
        let (w, h) = (tile.span_x, tile.span_y);
        let attempts = [
            (w, h),
            (w.saturating_sub(1).max(MIN_SPAN), h.saturating_sub(1).max(MIN_SPAN)),
            (MIN_SPAN, MIN_SPAN),
        ];

        let slot = attempts
            .iter()
            .find_map(|&(sx, sy)| find_slot(grid, points, sx, sy));
        let Some(rect) = slot else {
            tracing::warn!(
                span_x = w,
                span_y = h,
                text = tile.node.is_text(),
                "no free slot for tile, dropping"
            );
            continue;
        };

        grid.mark(rect);
        tile.start_c = rect.col;
        tile.start_r = rect.row;
        tile.span_x = rect.span_x;
        tile.span_y = rect.span_y;
        placed.push(tile);
    }
    placed
}

/// Expand placed tiles into adjacent free cells, favouring the axis that
/// keeps the tile closer to square. An axis already at the span cap is
/// treated as blocked.
pub(crate) fn grow(grid: &mut Occupancy, tiles: &mut [Tile]) {
    for tile in tiles.iter_mut() {
        let budget = if tile.node.is_text() {
            TEXT_GROW_STEPS
        } else {
            IMAGE_GROW_STEPS
        };
        for _ in 0..budget {
            let rect = tile.rect();
            let right = tile.span_x < MAX_SPAN && grid.can_grow_right(rect);
            let down = tile.span_y < MAX_SPAN && grid.can_grow_down(rect);
            if right && (!down || tile.span_x <= tile.span_y) {
                let mut strip = rect;
                strip.col = rect.col + rect.span_x;
                strip.span_x = 1;
                grid.mark(strip);
                tile.span_x += 1;
            } else if down {
                let mut strip = rect;
                strip.row = rect.row + rect.span_y;
                strip.span_y = 1;
                grid.mark(strip);
                tile.span_y += 1;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/chooser.rs"]
mod tests;
