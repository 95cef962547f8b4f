/// Braille canvas for high-resolution terminal rendering.
/// Each terminal cell holds a 2×4 grid of dots, so the field is drawn at
/// twice the horizontal and four times the vertical cell resolution.
pub struct BrailleCanvas {
    width: usize,
    height: usize,
    dots: Vec<u8>,
}

/// A small monochrome bitmap, one `u8` bit mask per row (MSB = leftmost)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub width: usize,
    pub rows: [u8; 5],
}

// Bit index of each dot inside a cell, by (column, row):
// 1 4
// 2 5
// 3 6
// 7 8
const DOT_BITS: [[u8; 4]; 2] = [[0, 1, 2, 6], [3, 4, 5, 7]];

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![0; width * height],
        }
    }

    /// Set a dot at pixel coordinates; dots off the canvas are dropped
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;
        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        let bit = DOT_BITS[pixel_x % 2][pixel_y % 4];
        self.dots[cell_y * self.width + cell_x] |= 1 << bit;
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// Dotted horizontal line across the whole canvas
    pub fn dotted_hline(&mut self, pixel_y: usize, spacing: usize) {
        for px in (0..self.pixel_width()).step_by(spacing.max(1)) {
            self.set_pixel(px, pixel_y);
        }
    }

    pub fn draw_glyph(&mut self, glyph: &Glyph, x: usize, y: usize) {
        for (row, mask) in glyph.rows.iter().enumerate() {
            for col in 0..glyph.width {
                if mask & (1 << (glyph.width - 1 - col)) != 0 {
                    self.set_pixel(x + col, y + row);
                }
            }
        }
    }

    /// Braille character for a cell: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y * self.width + cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    /// One row of cells as text
    pub fn row_string(&self, cell_y: usize) -> String {
        (0..self.width).map(|x| self.to_char(x, cell_y)).collect()
    }

    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }

    pub fn height(&self) -> usize {
        self.height
    }
}
