use crate::colormap::Colormap;
use crate::frequency::WordWeight;
use crate::glyph::GlyphRasterizer;
use crate::mask::MaskImage;
use crate::types::Rgba;

/// One word fixed on the canvas. `x`/`y` is the sprite's top-left corner in
/// canvas pixels at scale 1; `px` is the font size the word was measured at.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub px: f32,
    pub x: u32,
    pub y: u32,
    pub vertical: bool,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    pub width: u32,
    pub height: u32,
    pub min_font_size: f32,
    pub max_font_size: f32,
    /// Probability-like bias towards horizontal placement; 0.9 means nine
    /// out of ten words try horizontal first.
    pub prefer_horizontal: f32,
    /// Blank pixels kept around every word.
    pub margin: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            min_font_size: 10.0,
            max_font_size: 240.0,
            prefer_horizontal: 0.9,
            margin: 2,
        }
    }
}

/// Seeded xorshift32 generator. Cheap, deterministic, and good enough for
/// orientation picks, spiral jitter, and colormap sampling.
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let folded = (seed ^ (seed >> 32)) as u32;
        Self {
            state: folded.max(1),
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / u32::MAX as f32
    }
}

/// Collision grid at reduced resolution. A cell is occupied when a placed
/// word's rectangle or an excluded mask pixel overlaps it.
struct OccupancyGrid {
    cell: u32,
    cols: u32,
    rows: u32,
    occupied: Vec<bool>,
}

impl OccupancyGrid {
    const CELL: u32 = 4;

    fn new(width: u32, height: u32, mask: Option<&MaskImage>) -> Self {
        let cell = Self::CELL;
        let cols = width.div_ceil(cell);
        let rows = height.div_ceil(cell);
        let mut occupied = vec![false; (cols * rows) as usize];
        if let Some(mask) = mask {
            for row in 0..rows {
                for col in 0..cols {
                    'cell: for dy in 0..cell {
                        for dx in 0..cell {
                            if mask.is_excluded(col * cell + dx, row * cell + dy) {
                                occupied[(row * cols + col) as usize] = true;
                                break 'cell;
                            }
                        }
                    }
                }
            }
        }
        Self {
            cell,
            cols,
            rows,
            occupied,
        }
    }

    fn cell_range(&self, x: u32, y: u32, w: u32, h: u32) -> (u32, u32, u32, u32) {
        let col0 = x / self.cell;
        let row0 = y / self.cell;
        let col1 = (x + w - 1) / self.cell;
        let row1 = (y + h - 1) / self.cell;
        (col0, row0, col1, row1)
    }

    fn is_free(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        let (col0, row0, col1, row1) = self.cell_range(x, y, w, h);
        if col1 >= self.cols || row1 >= self.rows {
            return false;
        }
        for row in row0..=row1 {
            for col in col0..=col1 {
                if self.occupied[(row * self.cols + col) as usize] {
                    return false;
                }
            }
        }
        true
    }

    fn mark(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let (col0, row0, col1, row1) = self.cell_range(x, y, w, h);
        for row in row0..=row1.min(self.rows - 1) {
            for col in col0..=col1.min(self.cols - 1) {
                self.occupied[(row * self.cols + col) as usize] = true;
            }
        }
    }
}

/// Places ranked words on the canvas, largest first.
///
/// Each word starts at a size proportional to its weight (capped by the
/// previous word's size so sizes never increase down the ranking) and walks
/// an archimedean spiral looking for a free rectangle; if none is found the
/// size shrinks and the search repeats. Words that would drop below the
/// minimum font size are skipped. Deterministic for a fixed seed.
pub fn place_words(
    words: &[WordWeight],
    rasterizer: &dyn GlyphRasterizer,
    settings: &LayoutSettings,
    mask: Option<&MaskImage>,
    colormap: Colormap,
    seed: u64,
) -> Vec<PlacedWord> {
    let (width, height) = match mask {
        Some(m) => (m.width(), m.height()),
        None => (settings.width, settings.height),
    };
    let mut grid = OccupancyGrid::new(width, height, mask);
    let mut rng = SimpleRng::new(seed);
    let mut placed = Vec::new();
    let mut prev_px = settings.max_font_size.min(height as f32 * 0.9);

    for entry in words {
        let target = settings.max_font_size * (0.25 + 0.75 * entry.weight);
        let mut px = target.min(prev_px);
        loop {
            if px < settings.min_font_size {
                break;
            }
            let vertical = rng.next_f32() >= settings.prefer_horizontal;
            let (mw, mh) = rasterizer.measure(&entry.word, px);
            let (bw, bh) = if vertical { (mh, mw) } else { (mw, mh) };
            let pad = settings.margin;
            if let Some((x, y)) =
                find_spot(&grid, width, height, bw + 2 * pad, bh + 2 * pad, &mut rng)
            {
                grid.mark(x, y, bw + 2 * pad, bh + 2 * pad);
                placed.push(PlacedWord {
                    word: entry.word.clone(),
                    px,
                    x: x + pad,
                    y: y + pad,
                    vertical,
                    color: colormap.sample(rng.next_f32()),
                });
                prev_px = px;
                break;
            }
            // Shrink and retry; step scales with size so large words do not
            // crawl down one pixel at a time.
            px -= (px * 0.1).max(1.0);
        }
    }

    placed
}

/// Walks an archimedean spiral from a jittered center until a free spot for
/// a `w` x `h` rectangle appears, or the spiral leaves the canvas for good.
fn find_spot(
    grid: &OccupancyGrid,
    width: u32,
    height: u32,
    w: u32,
    h: u32,
    rng: &mut SimpleRng,
) -> Option<(u32, u32)> {
    if w > width || h > height {
        return None;
    }
    let jitter_x = (rng.next_f32() - 0.5) * width as f32 / 4.0;
    let jitter_y = (rng.next_f32() - 0.5) * height as f32 / 4.0;
    let cx = width as f32 / 2.0 + jitter_x;
    let cy = height as f32 / 2.0 + jitter_y;
    let max_radius = (width as f32).hypot(height as f32);

    let mut theta = 0.0f32;
    loop {
        let radius = 1.5 * theta;
        if radius > max_radius {
            return None;
        }
        let x = cx + radius * theta.cos() - w as f32 / 2.0;
        let y = cy + radius * theta.sin() - h as f32 / 2.0;
        theta += 0.15;
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (x, y) = (x as u32, y as u32);
        if x + w > width || y + h > height {
            continue;
        }
        if grid.is_free(x, y, w, h) {
            return Some((x, y));
        }
    }
}
