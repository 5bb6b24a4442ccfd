use macroquad::prelude::{Color, draw_rectangle};

use crate::domain::{BLOCK_BITS, BitGrid};

pub type Rgba = [u8; 4];

/// Colour of dead cells
pub const BACKGROUND: Rgba = [0, 0, 0, 255];

/// Where rendered cells end up
pub trait RenderSink {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, colour: Rgba);
}

/// Cell geometry on the display
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    /// Cells per row
    pub columns: usize,
    pub pixel_width: f32,
    pub pixel_height: f32,
}

/// Paint every cell of `grid`: live cells in `alive`, dead cells black.
///
/// Walks raw blocks so a fully dead block is painted without testing its
/// bits one by one.
pub fn draw_grid(grid: &BitGrid, layout: CellLayout, alive: Rgba, sink: &mut dyn RenderSink) {
    let bit_count = grid.bit_count();

    for (block_index, &block) in grid.blocks().iter().enumerate() {
        let start = block_index * BLOCK_BITS;
        let end = (start + BLOCK_BITS).min(bit_count);

        for index in start..end {
            let colour = if block == 0 || (block >> (index - start)) & 1 == 0 {
                BACKGROUND
            } else {
                alive
            };
            let x = (index % layout.columns) as f32 * layout.pixel_width;
            let y = (index / layout.columns) as f32 * layout.pixel_height;
            sink.fill_rect(x, y, layout.pixel_width, layout.pixel_height, colour);
        }
    }
}

/// Text dump of a grid, one row per line, `#` alive and `.` dead
pub fn render_ascii(grid: &BitGrid, columns: usize) -> String {
    let rows = grid.bit_count() / columns;
    let mut out = String::with_capacity((columns + 1) * rows);
    for index in 0..grid.bit_count() {
        let alive = grid.test(index).unwrap_or(false);
        out.push(if alive { '#' } else { '.' });
        if index % columns == columns - 1 {
            out.push('\n');
        }
    }
    out
}

/// Draws straight into the macroquad window
pub struct MacroquadSink;

impl RenderSink for MacroquadSink {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, colour: Rgba) {
        let [r, g, b, a] = colour;
        draw_rectangle(x, y, width, height, Color::from_rgba(r, g, b, a));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        rects: Vec<(f32, f32, Rgba)>,
    }

    impl RenderSink for Recorder {
        fn fill_rect(&mut self, x: f32, y: f32, _width: f32, _height: f32, colour: Rgba) {
            self.rects.push((x, y, colour));
        }
    }

    const RED: Rgba = [255, 0, 0, 255];

    #[test]
    fn test_draws_every_cell_once() {
        let mut grid = BitGrid::new(6 * 7).unwrap();
        grid.set(0).unwrap();
        grid.set(6 * 7 - 1).unwrap();
        let layout = CellLayout { columns: 6, pixel_width: 20.0, pixel_height: 10.0 };

        let mut sink = Recorder::default();
        draw_grid(&grid, layout, RED, &mut sink);

        assert_eq!(sink.rects.len(), 42);
        assert_eq!(sink.rects[0], (0.0, 0.0, RED));
        assert_eq!(sink.rects[1], (20.0, 0.0, BACKGROUND));
        assert_eq!(sink.rects[41], (100.0, 60.0, RED));
        assert_eq!(sink.rects.iter().filter(|r| r.2 == RED).count(), 2);
    }

    #[test]
    fn test_render_ascii() {
        let mut grid = BitGrid::new(9).unwrap();
        for i in [1, 4, 7] {
            grid.set(i).unwrap();
        }
        assert_eq!(render_ascii(&grid, 3), ".#.\n.#.\n.#.\n");
    }
}
