//! A terminal [`Canvas`]: the arena scaled down onto a character grid.

use cs_sim::{Canvas, CanvasColor};

pub struct AsciiCanvas {
    cols:    usize,
    rows:    usize,
    scale_x: f64,
    scale_y: f64,
    cells:   Vec<char>,
}

impl AsciiCanvas {
    /// A `cols × rows` grid covering a `width × height` arena.
    pub fn new(cols: usize, rows: usize, width: u32, height: u32) -> Self {
        let cols = cols.max(2);
        let rows = rows.max(2);
        Self {
            cols,
            rows,
            scale_x: cols as f64 / f64::from(width.max(1)),
            scale_y: rows as f64 / f64::from(height.max(1)),
            cells:   vec![' '; cols * rows],
        }
    }

    /// The current frame, one line per grid row.
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn glyph(color: CanvasColor) -> char {
        match color {
            CanvasColor::Black => '#',
            CanvasColor::Blue  => 'o',
            CanvasColor::Red   => '*',
            CanvasColor::Green => '+',
        }
    }

    fn cell(&self, x: f64, y: f64) -> (usize, usize) {
        let col = ((x * self.scale_x).floor().max(0.0) as usize).min(self.cols - 1);
        let row = ((y * self.scale_y).floor().max(0.0) as usize).min(self.rows - 1);
        (col, row)
    }

    fn plot(&mut self, col: usize, row: usize, glyph: char) {
        self.cells[row * self.cols + col] = glyph;
    }
}

impl Canvas for AsciiCanvas {
    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn draw_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, color: CanvasColor) {
        let (c0, r0) = self.cell(x, y);
        let (c1, r1) = self.cell(x + width - 1.0, y + height - 1.0);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.plot(col, row, Self::glyph(color));
            }
        }
    }

    fn draw_ellipse(&mut self, center_x: f64, center_y: f64, _radius: f64, color: CanvasColor) {
        // Subjects are much smaller than a cell; one glyph at the centre.
        let (col, row) = self.cell(center_x, center_y);
        // Keep the frame visible.
        if self.cells[row * self.cols + col] != '#' {
            self.plot(col, row, Self::glyph(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_frame_the_grid() {
        let mut canvas = AsciiCanvas::new(10, 4, 100, 40);
        canvas.clear();
        canvas.draw_rectangle(0.0, 0.0, 1.0, 40.0, CanvasColor::Black);
        canvas.draw_rectangle(0.0, 0.0, 100.0, 1.0, CanvasColor::Black);
        canvas.draw_rectangle(0.0, 39.0, 100.0, 1.0, CanvasColor::Black);
        canvas.draw_rectangle(99.0, 0.0, 1.0, 40.0, CanvasColor::Black);
        canvas.draw_ellipse(50.0, 20.0, 5.0, CanvasColor::Red);

        let frame = canvas.render();
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines, ["##########", "#        #", "#    *   #", "##########"]);
    }
}
