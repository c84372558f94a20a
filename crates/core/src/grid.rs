//! Placed-cell grid with cached column heights and row widths.
//! Row 0 is the bottom row.

use std::fmt;

use thiserror::Error;

use crate::PieceType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },
    #[error("grid rows must be non-empty and share one width")]
    RaggedRows,
    #[error("unknown cell character {0:?}")]
    UnknownCell(char),
}

/// Fixed-size grid of placed cells. Caches are refreshed by [`Grid::refresh`]
/// and [`Grid::clear_lines`]; every public constructor leaves them consistent.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<PieceType>>,
    column_heights: Vec<usize>,
    row_widths: Vec<usize>,
    max_height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            column_heights: vec![0; width],
            row_widths: vec![0; height],
            max_height: 0,
        }
    }

    /// Builds a grid from explicit `(x, y)` cells. Full rows are kept as-is.
    pub fn from_cells<I>(width: usize, height: usize, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = ((usize, usize), PieceType)>,
    {
        let mut grid = Self::new(width, height);
        for ((x, y), kind) in cells {
            if x >= width || y >= height {
                return Err(GridError::OutOfBounds { x, y });
            }
            grid.cells[y * width + x] = Some(kind);
        }
        grid.refresh();
        Ok(grid)
    }

    /// Parses text rows, top row first. `.` is empty, piece letters are filled.
    pub fn parse(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 || rows.iter().any(|row| row.chars().count() != width) {
            return Err(GridError::RaggedRows);
        }
        let mut cells = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            let y = height - 1 - i;
            for (x, c) in row.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let kind = PieceType::from_letter(c).ok_or(GridError::UnknownCell(c))?;
                cells.push(((x, y), kind));
            }
        }
        Self::from_cells(width, height, cells)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Placed piece at `(x, y)`; `None` if empty or outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<PieceType> {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize]
        } else {
            None
        }
    }

    /// True outside the grid or on a placed cell.
    #[inline]
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        !self.in_bounds(x, y) || self.cells[y as usize * self.width + x as usize].is_some()
    }

    /// Writes one cell without touching the caches; call [`Grid::refresh`] after.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, kind: PieceType) {
        self.cells[y * self.width + x] = Some(kind);
    }

    #[inline]
    pub fn column_height(&self, x: usize) -> usize {
        self.column_heights[x]
    }

    #[inline]
    pub fn column_heights(&self) -> &[usize] {
        &self.column_heights
    }

    #[inline]
    pub fn row_width(&self, y: usize) -> usize {
        self.row_widths[y]
    }

    #[inline]
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    pub fn row(&self, y: usize) -> &[Option<PieceType>] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn is_empty(&self) -> bool {
        self.max_height == 0
    }

    /// Removes every full row, compacting the rows above it downward and
    /// refilling the top with empty rows. Returns the number removed.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        for y in 0..self.height {
            let full = self.row(y).iter().all(Option::is_some);
            if full {
                cleared += 1;
            } else if cleared > 0 {
                let dst = (y - cleared) * width;
                self.cells.copy_within(y * width..(y + 1) * width, dst);
            }
        }
        let top = (self.height - cleared) * width;
        self.cells[top..].fill(None);
        self.refresh();
        cleared
    }

    /// Recomputes column heights, row widths and the max height from the cells.
    pub fn refresh(&mut self) {
        for x in 0..self.width {
            self.column_heights[x] = (0..self.height)
                .rev()
                .find(|&y| self.cells[y * self.width + x].is_some())
                .map_or(0, |y| y + 1);
        }
        self.max_height = self.column_heights.iter().copied().max().unwrap_or(0);
        for y in 0..self.height {
            self.row_widths[y] = self.row(y).iter().filter(|cell| cell.is_some()).count();
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for cell in self.row(y) {
                write!(f, "{}", cell.map_or('.', PieceType::letter))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
