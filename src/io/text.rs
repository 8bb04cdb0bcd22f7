//! Plain-text rendering of grids

use crate::spatial::grid::Grid;

/// Glyph for a cell whose domain is empty
pub const EMPTY_GLYPH: char = '!';

/// Render `grid` as one line per row, top row first
///
/// Row `y = height - 1` comes first so north points up. Collapsed cells use
/// their tile's entry in `glyphs`, empty cells [`EMPTY_GLYPH`], and undecided
/// cells their candidate count in base 36, or `+` beyond that.
pub fn render_ascii(grid: &Grid, glyphs: &[char]) -> String {
    let mut output = String::with_capacity((grid.width() + 1) * grid.height());

    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let glyph = grid.get([x, y]).map_or(EMPTY_GLYPH, |cell| {
                if cell.is_empty() {
                    EMPTY_GLYPH
                } else if let Some(tile) = cell.tile() {
                    glyphs.get(tile).copied().unwrap_or('?')
                } else {
                    u32::try_from(cell.options_count())
                        .ok()
                        .and_then(|count| char::from_digit(count, 36))
                        .unwrap_or('+')
                }
            });
            output.push(glyph);
        }
        output.push('\n');
    }

    output
}
