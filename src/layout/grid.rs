use crate::foundation::error::{GridfolioError, GridfolioResult};

/// Dimensions of the packing grid, in cells.
///
/// Always within `MIN_AXIS..=MAX_AXIS` on both axes, including when
/// deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawGridSize")]
pub struct GridSize {
    width: u32,
    height: u32,
}

#[derive(serde::Deserialize)]
struct RawGridSize {
    width: u32,
    height: u32,
}

impl TryFrom<RawGridSize> for GridSize {
    type Error = GridfolioError;

    fn try_from(raw: RawGridSize) -> GridfolioResult<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl GridSize {
    /// Smallest accepted axis: one minimal 3x3 tile must fit.
    pub const MIN_AXIS: u32 = 3;
    /// Largest accepted axis.
    pub const MAX_AXIS: u32 = 64;
    /// The 12x12 gallery grid.
    pub const DEFAULT: Self = Self {
        width: 12,
        height: 12,
    };

    /// Validated grid size.
    pub fn new(width: u32, height: u32) -> GridfolioResult<Self> {
        for (axis, v) in [("width", width), ("height", height)] {
            if !(Self::MIN_AXIS..=Self::MAX_AXIS).contains(&v) {
                return Err(GridfolioError::validation(format!(
                    "grid {axis} must be in [{}, {}], got {v}",
                    Self::MIN_AXIS,
                    Self::MAX_AXIS
                )));
            }
        }
        Ok(Self { width, height })
    }

    /// Columns.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Rows.
    pub const fn height(&self) -> u32 {
        self.height
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 1-based cell rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CellRect {
    pub(crate) col: u32,
    pub(crate) row: u32,
    pub(crate) span_x: u32,
    pub(crate) span_y: u32,
}

/// Boolean occupancy over a `width x height` grid, 1-indexed.
///
/// Lives for a single layout call.
#[derive(Clone, Debug)]
pub(crate) struct Occupancy {
    size: GridSize,
    cells: Vec<bool>,
}

impl Occupancy {
    pub(crate) fn new(size: GridSize) -> Self {
        let n = (size.width as usize) * (size.height as usize);
        Self {
            size,
            cells: vec![false; n],
        }
    }

    pub(crate) fn size(&self) -> GridSize {
        self.size
    }

    fn index(&self, col: u32, row: u32) -> usize {
        debug_assert!(col >= 1 && col <= self.size.width);
        debug_assert!(row >= 1 && row <= self.size.height);
        ((row - 1) as usize) * (self.size.width as usize) + (col - 1) as usize
    }

    pub(crate) fn is_occupied(&self, col: u32, row: u32) -> bool {
        self.cells[self.index(col, row)]
    }

    /// In bounds and free of any occupied cell.
    pub(crate) fn fits(&self, rect: CellRect) -> bool {
        if rect.col == 0 || rect.row == 0 || rect.span_x == 0 || rect.span_y == 0 {
            return false;
        }
        if rect.col + rect.span_x - 1 > self.size.width
            || rect.row + rect.span_y - 1 > self.size.height
        {
            return false;
        }
        (rect.row..rect.row + rect.span_y)
            .all(|r| (rect.col..rect.col + rect.span_x).all(|c| !self.is_occupied(c, r)))
    }

    pub(crate) fn mark(&mut self, rect: CellRect) {
        for r in rect.row..rect.row + rect.span_y {
            for c in rect.col..rect.col + rect.span_x {
                let idx = self.index(c, r);
                self.cells[idx] = true;
            }
        }
    }

    /// Column just right of `rect` is inside the grid and free along its rows.
    pub(crate) fn can_grow_right(&self, rect: CellRect) -> bool {
        let next = rect.col + rect.span_x;
        if next > self.size.width {
            return false;
        }
        (rect.row..rect.row + rect.span_y).all(|r| !self.is_occupied(next, r))
    }

    /// Row just below `rect` is inside the grid and free along its columns.
    pub(crate) fn can_grow_down(&self, rect: CellRect) -> bool {
        let next = rect.row + rect.span_y;
        if next > self.size.height {
            return false;
        }
        (rect.col..rect.col + rect.span_x).all(|c| !self.is_occupied(c, next))
    }

    pub(crate) fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Candidate top-left cells in scan order.
///
/// A coarse lattice of `k x k` evenly spaced points comes first (with
/// `k = max(2, ceil(sqrt(n)))`), then every cell in row-major order.
/// Earlier points always win.
pub(crate) fn anchors(size: GridSize, n: usize) -> Vec<(u32, u32)> {
    let k = ((n as f64).sqrt().ceil() as u32).max(2);
    let step_x = (size.width / k).max(1);
    let step_y = (size.height / k).max(1);

    let mut out = Vec::new();
    for r in (1..=size.height).step_by(step_y as usize) {
        for c in (1..=size.width).step_by(step_x as usize) {
            out.push((c, r));
        }
    }
    for r in 1..=size.height {
        for c in 1..=size.width {
            out.push((c, r));
        }
    }
    out
}

/// First anchor where a `span_x x span_y` rectangle fits.
pub(crate) fn find_slot(
    grid: &Occupancy,
    anchors: &[(u32, u32)],
    span_x: u32,
    span_y: u32,
) -> Option<CellRect> {
    anchors
        .iter()
        .map(|&(col, row)| CellRect {
            col,
            row,
            span_x,
            span_y,
        })
        .find(|&rect| grid.fits(rect))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
