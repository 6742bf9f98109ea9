//! Color-role grid decoding from compact row strings
//!
//! Sprites are authored as rows of single characters: `.` is the
//! transparent role 0, and a hex digit (`1`-`9`, `A`-`F`) is a color role
//! indexing the sprite's own local palette. Roles are scoped per sprite -
//! the same digit means different colors in different sprites.

/// Canonical canvas width in cells for the whole system.
pub const CANVAS_W: usize = 16;
/// Canonical canvas height in cells for the whole system.
pub const CANVAS_H: usize = 20;
/// The fixed row both base bodies draw their eyes on.
pub const EYE_ROW: usize = 6;

/// A decoded grid of color roles, always `CANVAS_H` rows of `CANVAS_W` cells.
pub type RoleGrid = Vec<Vec<u8>>;

/// A warning generated during grid decoding
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Decode sprite rows into a canonical-size role grid.
///
/// Rows shorter than [`CANVAS_W`] and grids shorter than [`CANVAS_H`] are
/// zero-padded on the right and bottom - sparse overlays simply omit their
/// empty trailing cells and rows. Padding is the normal case and generates
/// no warnings.
///
/// # Error Handling (Lenient Mode)
///
/// - Unknown character: decoded as transparent (role 0) with a warning
/// - Row longer than [`CANVAS_W`]: truncated with a warning
/// - More than [`CANVAS_H`] rows: truncated with a warning
///
/// # Examples
///
/// ```
/// use paperdoll::grid::{decode_rows, CANVAS_H, CANVAS_W};
///
/// let (grid, warnings) = decode_rows(&["..12", "3"]);
/// assert!(warnings.is_empty());
/// assert_eq!(grid.len(), CANVAS_H);
/// assert_eq!(grid[0].len(), CANVAS_W);
/// assert_eq!(grid[0][2], 1);
/// assert_eq!(grid[0][3], 2);
/// assert_eq!(grid[1][0], 3);
/// assert_eq!(grid[1][1], 0);
/// ```
pub fn decode_rows(rows: &[&str]) -> (RoleGrid, Vec<Warning>) {
    let mut warnings = Vec::new();
    let mut grid: RoleGrid = vec![vec![0u8; CANVAS_W]; CANVAS_H];

    if rows.len() > CANVAS_H {
        warnings.push(Warning::new(format!(
            "Grid has {} rows, expected at most {}, truncating",
            rows.len(),
            CANVAS_H
        )));
    }

    for (y, row) in rows.iter().take(CANVAS_H).enumerate() {
        let len = row.chars().count();
        if len > CANVAS_W {
            warnings.push(Warning::new(format!(
                "Row {} has {} cells, expected at most {}, truncating",
                y + 1,
                len,
                CANVAS_W
            )));
        }
        for (x, c) in row.chars().take(CANVAS_W).enumerate() {
            grid[y][x] = match decode_cell(c) {
                Some(role) => role,
                None => {
                    warnings.push(Warning::new(format!(
                        "Unknown cell character '{}' in row {}, treating as transparent",
                        c,
                        y + 1
                    )));
                    0
                }
            };
        }
    }

    (grid, warnings)
}

/// Decode a single cell character to a color role, or None if unknown.
fn decode_cell(c: char) -> Option<u8> {
    match c {
        '.' => Some(0),
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        _ => None,
    }
}

/// Scan a role grid for the bounding box of non-transparent cells.
///
/// Returns `(min_x, min_y, max_x, max_y)` inclusive, or `None` when the
/// grid holds no non-zero cell.
pub fn bounding_box(grid: &RoleGrid) -> Option<(usize, usize, usize, usize)> {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for (y, row) in grid.iter().enumerate() {
        for (x, &role) in row.iter().enumerate() {
            if role == 0 {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                }
            });
        }
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pads_to_canvas() {
        let (grid, warnings) = decode_rows(&["1"]);
        assert!(warnings.is_empty());
        assert_eq!(grid.len(), CANVAS_H);
        assert!(grid.iter().all(|row| row.len() == CANVAS_W));
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[0][1], 0);
        assert_eq!(grid[CANVAS_H - 1][CANVAS_W - 1], 0);
    }

    #[test]
    fn test_decode_empty_rows_are_transparent() {
        let (grid, warnings) = decode_rows(&["", "", "12"]);
        assert!(warnings.is_empty());
        assert!(grid[0].iter().all(|&r| r == 0));
        assert!(grid[1].iter().all(|&r| r == 0));
        assert_eq!(grid[2][0], 1);
    }

    #[test]
    fn test_decode_hex_roles() {
        let (grid, warnings) = decode_rows(&["9AbF"]);
        assert!(warnings.is_empty());
        assert_eq!(&grid[0][..4], &[9, 10, 11, 15]);
    }

    #[test]
    fn test_unknown_char_warns_and_is_transparent() {
        let (grid, warnings) = decode_rows(&["1x2"]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("'x'"));
        assert_eq!(&grid[0][..3], &[1, 0, 2]);
    }

    #[test]
    fn test_long_row_truncates_with_warning() {
        let long = "1".repeat(CANVAS_W + 3);
        let (grid, warnings) = decode_rows(&[&long]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("truncating"));
        assert_eq!(grid[0].len(), CANVAS_W);
    }

    #[test]
    fn test_too_many_rows_truncates_with_warning() {
        let rows: Vec<&str> = vec!["1"; CANVAS_H + 2];
        let (grid, warnings) = decode_rows(&rows);
        assert_eq!(warnings.len(), 1);
        assert_eq!(grid.len(), CANVAS_H);
    }

    #[test]
    fn test_bounding_box_empty() {
        let (grid, _) = decode_rows(&[]);
        assert_eq!(bounding_box(&grid), None);
    }

    #[test]
    fn test_bounding_box_single_cell() {
        let (grid, _) = decode_rows(&["", ".1"]);
        assert_eq!(bounding_box(&grid), Some((1, 1, 1, 1)));
    }

    #[test]
    fn test_bounding_box_spans_cells() {
        let (grid, _) = decode_rows(&["", "..12", "...3", ".2"]);
        assert_eq!(bounding_box(&grid), Some((1, 1, 3, 3)));
    }
}
