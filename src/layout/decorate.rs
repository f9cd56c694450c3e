use crate::{
    foundation::math::hash_str,
    gallery::model::{ImageDescriptor, ImageKind, TileSize},
    layout::tile::{HAlign, Tile, TileNode},
};

/// Span bounds after every adjustment.
pub(crate) const MIN_SPAN: u32 = 3;
pub(crate) const MAX_SPAN: u32 = 9;

/// Galleries of at least this many nodes shrink every fifth one.
const SM_RHYTHM_MIN_ITEMS: usize = 7;
const SM_RHYTHM_PERIOD: usize = 5;

/// Visual anchor URL: first `cover`, else first `full`, else the first image.
///
/// Must be called on the caller's order, before shuffling.
pub(crate) fn resolve_cover(images: &[ImageDescriptor]) -> Option<&str> {
    let non_empty = |kind: ImageKind| {
        images
            .iter()
            .find(|i| i.kind == kind)
            .map(|i| i.url.as_str())
            .filter(|u| !u.is_empty())
    };
    non_empty(ImageKind::Cover)
        .or_else(|| non_empty(ImageKind::Full))
        .or_else(|| images.first().map(|i| i.url.as_str()))
}

/// Extra cells granted on both axes to sparse galleries.
pub(crate) fn boost_for(total: usize) -> u32 {
    match total {
        0..=2 => 3,
        3..=4 => 2,
        5..=6 => 1,
        _ => 0,
    }
}

/// `(span_x, span_y)` for an orientation base span, size and boost, clamped.
pub(crate) fn span_for(base: (u32, u32), size: TileSize, boost: u32) -> (u32, u32) {
    let adjust = |v: u32| {
        let v = v as i64 + i64::from(size.delta()) + i64::from(boost);
        v.clamp(i64::from(MIN_SPAN), i64::from(MAX_SPAN)) as u32
    };
    (adjust(base.0), adjust(base.1))
}

/// Alignment from a per-tile key, independent of any other draw.
///
/// Buckets `hash % 1000` as `[0, 330)` left, `[330, 660)` right, rest center.
pub(crate) fn jitter_align(key: &str) -> HAlign {
    match hash_str(key) % 1000 {
        0..330 => HAlign::Left,
        330..660 => HAlign::Right,
        _ => HAlign::Center,
    }
}

fn align_key(project_key: &str, img: &ImageDescriptor, idx: usize) -> String {
    let ident = if !img.url.is_empty() {
        img.url.clone()
    } else {
        match img.filename.as_deref() {
            Some(f) if !f.is_empty() => f.to_string(),
            _ => idx.to_string(),
        }
    };
    format!("{project_key}__{ident}")
}

/// Assign size, spans and alignment to every node. Positions stay at zero
/// until packing.
pub(crate) fn decorate(
    nodes: Vec<TileNode>,
    cover_url: Option<&str>,
    boost: u32,
    project_key: &str,
) -> Vec<Tile> {
    let total = nodes.len();
    nodes
        .into_iter()
        .enumerate()
        .map(|(idx, node)| {
            let (size, align) = match &node {
                TileNode::Text(text) => (text.size, HAlign::Center),
                TileNode::Image(img) => {
                    let size = if cover_url == Some(img.url.as_str()) {
                        TileSize::Lg
                    } else if total >= SM_RHYTHM_MIN_ITEMS && (idx + 1) % SM_RHYTHM_PERIOD == 0 {
                        TileSize::Sm
                    } else {
                        TileSize::Md
                    };
                    (size, jitter_align(&align_key(project_key, img, idx)))
                }
            };
            let (span_x, span_y) = span_for(node.orientation().base_span(), size, boost);
            Tile {
                node,
                size,
                span_x,
                span_y,
                start_c: 0,
                start_r: 0,
                align,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/decorate.rs"]
mod tests;
