//! Raw board features. Each takes the placed grid only; the active piece is
//! never part of the picture.

use srsbot_core::Grid;

/// `max` below half height, then a quadratic penalty for every row above it.
pub fn height_score(grid: &Grid) -> f32 {
    let max = grid.max_height() as f32;
    let half = (grid.height() / 2) as f32;
    if max < half {
        max
    } else {
        max + (max - half).powi(2)
    }
}

/// Rows cleared by the move that produced this grid.
pub fn row_score(lines: usize) -> f32 {
    lines as f32
}

/// Distance of the squared-step roughness from `ideal`.
pub fn texture_score(grid: &Grid, ideal: f32) -> f32 {
    let roughness: usize = grid
        .column_heights()
        .windows(2)
        .map(|pair| pair[1].abs_diff(pair[0]).pow(2))
        .sum();
    (roughness as f32 - ideal).abs()
}

/// Number of enclosed empty regions.
///
/// Empty rows are sealed from the top down until the first non-empty row;
/// every remaining 4-connected component of empty cells counts once.
pub fn hole_count(grid: &Grid) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let mut seen = vec![false; width * height];
    for y in (0..height).rev() {
        if grid.row_width(y) != 0 {
            break;
        }
        seen[y * width..(y + 1) * width].fill(true);
    }

    let mut holes = 0;
    let mut stack = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let start = y * width + x;
            if seen[start] || grid.get(x as i32, y as i32).is_some() {
                continue;
            }
            holes += 1;
            seen[start] = true;
            stack.push((x, y));
            while let Some((cx, cy)) = stack.pop() {
                let neighbours = [
                    (cx.wrapping_sub(1), cy),
                    (cx + 1, cy),
                    (cx, cy.wrapping_sub(1)),
                    (cx, cy + 1),
                ];
                for (nx, ny) in neighbours {
                    if nx >= width || ny >= height {
                        continue;
                    }
                    let i = ny * width + nx;
                    if !seen[i] && grid.get(nx as i32, ny as i32).is_none() {
                        seen[i] = true;
                        stack.push((nx, ny));
                    }
                }
            }
        }
    }
    holes
}

pub fn hole_score(grid: &Grid) -> f32 {
    let holes = hole_count(grid) as f32;
    holes * holes
}

/// Buried-gap penalty. Walking each column downward, every empty cell adds
/// `sqrt(filled cells above)` and every covered run of empties closed by a
/// filled cell adds `sqrt(run length)`.
pub fn cheese_score(grid: &Grid) -> f32 {
    let mut score = 0.0;
    for x in 0..grid.width() as i32 {
        let mut above = 0u32;
        let mut empty = 0u32;
        for y in (0..grid.height() as i32).rev() {
            if grid.get(x, y).is_none() {
                score += (above as f32).sqrt();
                empty += 1;
            } else {
                if above != 0 {
                    score += (empty as f32).sqrt();
                }
                empty = 0;
                above += 1;
            }
        }
    }
    score
}

/// Baseline: favours low stacks, nothing else.
pub fn baseline_score(grid: &Grid) -> f32 {
    100.0 - 5.0 * grid.max_height() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sealed_hole() -> Grid {
        Grid::parse(&[
            "...", //
            "TTT", //
            "TTT", //
            "T.T", //
        ])
        .unwrap()
    }

    #[test]
    fn test_hole_under_full_rows_counts_once() {
        assert_eq!(hole_count(&sealed_hole()), 1);
        assert_eq!(hole_score(&sealed_hole()), 1.0);
    }

    #[test]
    fn test_empty_grid_has_no_holes() {
        assert_eq!(hole_count(&Grid::new(10, 24)), 0);
    }

    #[test]
    fn test_open_air_beside_stack_is_a_region() {
        // row 1 is non-empty, so the air over column 1.. is not sealed
        let g = Grid::parse(&["....", "O...", "O..."]).unwrap();
        assert_eq!(hole_count(&g), 1);
    }

    #[test]
    fn test_separate_holes_square() {
        let g = Grid::parse(&[
            ".....", //
            "TTTTT", //
            "T.T.T", //
        ])
        .unwrap();
        assert_eq!(hole_count(&g), 2);
        assert_eq!(hole_score(&g), 4.0);
    }

    #[test]
    fn test_cheese_on_sealed_hole() {
        // only the (1, 0) gap is buried: sqrt(2) for its two covering cells
        let score = cheese_score(&sealed_hole());
        assert!((score - 2f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_cheese_closed_run() {
        // column 0: O, two empties, O => sqrt(1) + sqrt(1) + sqrt(2)
        let g = Grid::parse(&["O", ".", ".", "O"]).unwrap();
        let expected = 1.0 + 1.0 + 2f32.sqrt();
        assert!((cheese_score(&g) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_texture() {
        assert_eq!(texture_score(&sealed_hole(), 4.0), 4.0);
        // heights 2,0,1 => 4 + 1 = 5
        let g = Grid::parse(&["O..", "O.O"]).unwrap();
        assert_eq!(texture_score(&g, 4.0), 1.0);
        assert_eq!(texture_score(&g, 0.0), 5.0);
    }

    #[test]
    fn test_height_quadratic_above_half() {
        assert_eq!(height_score(&sealed_hole()), 4.0); // 3 + (3 - 2)^2
        let low = Grid::parse(&["...", "...", "...", "T.."]).unwrap();
        assert_eq!(height_score(&low), 1.0);
    }

    #[test]
    fn test_baseline() {
        assert_eq!(baseline_score(&Grid::new(10, 24)), 100.0);
        assert_eq!(baseline_score(&sealed_hole()), 85.0);
    }
}
