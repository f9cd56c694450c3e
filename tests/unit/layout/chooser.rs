use super::*;
use crate::{
    gallery::model::{Orientation, TileSize},
    layout::{decorate::MAX_SPAN, tile::HAlign},
};

fn img(url: &str, kind: ImageKind, orientation: Orientation) -> ImageDescriptor {
    ImageDescriptor::new(url, kind, orientation)
}

fn bare_tile(span_x: u32, span_y: u32) -> Tile {
    Tile {
        node: TileNode::Image(img("/t", ImageKind::Extra, Orientation::Square)),
        size: TileSize::Md,
        span_x,
        span_y,
        start_c: 0,
        start_r: 0,
        align: HAlign::Center,
    }
}

fn pack_all(grid: &mut Occupancy, tiles: Vec<Tile>) -> Vec<Tile> {
    let points = anchors(grid.size(), tiles.len());
    pack(grid, &points, tiles)
}

#[test]
fn empty_input_yields_sentinel() {
    let layout = choose_layout("p1", &[], &LayoutOptions::default());
    assert_eq!(layout, Layout::empty());
    assert_eq!(layout.name, LayoutName::Empty);

    let blank = LayoutOptions::default().with_text_block(TextBlock::default());
    assert!(choose_layout("p1", &[], &blank).is_empty());
}

#[test]
fn text_only_is_prepended_and_boosted() {
    let opts = LayoutOptions::default().with_text_block(TextBlock::text("hello"));
    let layout = choose_layout("anything", &[], &opts);
    assert_eq!(layout.name, LayoutName::VfGrid);
    assert_eq!(layout.tiles.len(), 1);
    let t = &layout.tiles[0];
    assert!(t.node.is_text());
    assert_eq!((t.start_c, t.start_r), (1, 1));
    // 4x5 square base + 3 boost = 7x8, then one grow step to the right.
    assert_eq!((t.span_x, t.span_y), (8, 8));
}

#[test]
fn single_image_is_boosted_and_capped() {
    let images = vec![img("a.jpg", ImageKind::Extra, Orientation::Landscape)];
    let layout = choose_layout("p1", &images, &LayoutOptions::default());
    assert_eq!(layout.tiles.len(), 1);
    let t = &layout.tiles[0];
    assert_eq!(t.size, TileSize::Lg);
    assert_eq!((t.start_c, t.start_r), (1, 1));
    assert_eq!((t.span_x, t.span_y), (MAX_SPAN, MAX_SPAN));
}

#[test]
fn text_follows_full_image() {
    let images = vec![
        img("a.jpg", ImageKind::Full, Orientation::Landscape),
        img("b.jpg", ImageKind::Extra, Orientation::Portrait),
        img("c.jpg", ImageKind::Extra, Orientation::Square),
    ];
    let opts = LayoutOptions::default().with_text_block(TextBlock::text("hi"));
    for key in ["t1", "t2", "t3"] {
        let layout = choose_layout(key, &images, &opts);
        assert_eq!(layout.tiles.len(), 4, "key {key}");
        let text_at = layout.tiles.iter().position(|t| t.node.is_text()).unwrap();
        assert!(text_at > 0);
        let before = layout.tiles[text_at - 1].node.as_image().unwrap();
        assert_eq!(before.url, "a.jpg", "key {key}");
    }
}

#[test]
fn interleave_prepends_without_anchor() {
    let images = vec![
        img("a", ImageKind::Extra, Orientation::Square),
        img("b", ImageKind::Dettaglio, Orientation::Square),
    ];
    let nodes = interleave_text(images, Some(TextBlock::text("x")), Some("zzz"));
    assert!(nodes[0].is_text());
    assert_eq!(nodes.len(), 3);

    let images = vec![
        img("a", ImageKind::Extra, Orientation::Square),
        img("b", ImageKind::Extra, Orientation::Square),
        img("c", ImageKind::Full, Orientation::Square),
    ];
    let nodes = interleave_text(images, Some(TextBlock::text("x")), Some("b"));
    assert!(nodes[2].is_text());
    assert_eq!(nodes.iter().filter(|n| n.is_text()).count(), 1);
}

#[test]
fn cover_is_lg_wherever_it_lands() {
    let mut images: Vec<ImageDescriptor> = (0..8)
        .map(|i| img(&format!("/img/{i}.jpg"), ImageKind::Extra, Orientation::Square))
        .collect();
    images[5].kind = ImageKind::Cover;
    for key in ["p1", "p2", "p3", "p4"] {
        let layout = choose_layout(key, &images, &LayoutOptions::default());
        for t in &layout.tiles {
            let url = &t.node.as_image().unwrap().url;
            if url == "/img/5.jpg" {
                assert_eq!(t.size, TileSize::Lg, "key {key}");
            } else {
                assert_ne!(t.size, TileSize::Lg, "key {key}");
            }
        }
    }
}

#[test]
fn pack_shrinks_then_drops() {
    let mut grid = Occupancy::new(GridSize::new(4, 4).unwrap());
    let placed = pack_all(&mut grid, vec![bare_tile(5, 5), bare_tile(3, 3)]);
    assert_eq!(placed.len(), 1);
    assert_eq!((placed[0].span_x, placed[0].span_y), (4, 4));
    assert_eq!((placed[0].start_c, placed[0].start_r), (1, 1));

    let mut grid = Occupancy::new(GridSize::new(6, 3).unwrap());
    let placed = pack_all(&mut grid, vec![bare_tile(6, 5), bare_tile(4, 4)]);
    assert_eq!(placed.len(), 2);
    assert_eq!((placed[0].span_x, placed[0].span_y), (3, 3));
    assert_eq!((placed[1].start_c, placed[1].start_r), (4, 1));
}

#[test]
fn grow_prefers_the_shorter_axis() {
    let mut grid = Occupancy::new(GridSize::DEFAULT);
    let mut placed = pack_all(&mut grid, vec![bare_tile(3, 3)]);
    grow(&mut grid, &mut placed);
    // right (3<=3), down (4>3), right (4<=4)
    assert_eq!((placed[0].span_x, placed[0].span_y), (5, 4));
    assert_eq!(grid.occupied_count(), 20);
}

#[test]
fn grow_never_shrinks_or_overlaps() {
    let mut images: Vec<ImageDescriptor> = (0..9)
        .map(|i| {
            let o = [Orientation::Square, Orientation::Landscape, Orientation::Portrait][i % 3];
            img(&format!("/{i}"), ImageKind::Extra, o)
        })
        .collect();
    images[0].kind = ImageKind::Cover;
    let nodes: Vec<TileNode> = images.into_iter().map(TileNode::Image).collect();
    let tiles = decorate(nodes, Some("/0"), 0, "g");

    let mut grid = Occupancy::new(GridSize::DEFAULT);
    let mut placed = pack_all(&mut grid, tiles);
    let before: Vec<(u32, u32)> = placed.iter().map(|t| (t.span_x, t.span_y)).collect();
    grow(&mut grid, &mut placed);
    for (t, (bx, by)) in placed.iter().zip(before) {
        assert!(t.span_x >= bx && t.span_y >= by);
        assert!(t.span_x <= MAX_SPAN && t.span_y <= MAX_SPAN);
    }
    for (i, a) in placed.iter().enumerate() {
        for b in &placed[i + 1..] {
            assert!(!a.overlaps(b));
        }
    }
    let covered: u32 = placed.iter().map(|t| t.span_x * t.span_y).sum();
    assert_eq!(covered as usize, grid.occupied_count());
}

#[test]
fn custom_grid_bounds_hold() {
    let images: Vec<ImageDescriptor> = (0..5)
        .map(|i| img(&format!("/{i}"), ImageKind::Extra, Orientation::Landscape))
        .collect();
    let opts = LayoutOptions::default().with_grid(GridSize::new(8, 20).unwrap());
    let layout = choose_layout("wide", &images, &opts);
    assert!(!layout.is_empty());
    for t in &layout.tiles {
        assert!(t.end_c() <= 8 && t.end_r() <= 20);
    }
}

#[test]
fn options_reject_out_of_range_grid() {
    for bad in [
        r#"{ "grid": { "width": 0, "height": 0 } }"#,
        r#"{ "grid": { "width": 100000, "height": 100000 } }"#,
    ] {
        assert!(serde_json::from_str::<LayoutOptions>(bad).is_err(), "{bad}");
    }

    let opts: LayoutOptions =
        serde_json::from_str(r#"{ "grid": { "width": 3, "height": 3 } }"#).unwrap();
    let images = [img("/c.jpg", ImageKind::Cover, Orientation::Landscape)];
    let layout = choose_layout("k", &images, &opts);
    assert_eq!(layout.name, LayoutName::VfGrid);
    assert_eq!(layout.tiles.len(), 1);
    let t = &layout.tiles[0];
    assert_eq!((t.start_c, t.start_r, t.span_x, t.span_y), (1, 1, 3, 3));
}
