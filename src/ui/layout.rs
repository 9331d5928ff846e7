//! Control placement for the two windows
//!
//! Pure geometry so the Win32 code only has to call `MoveWindow` with the
//! results on every `WM_SIZE`.

/// Control rectangle in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl ControlRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    fn right(&self) -> i32 {
        self.x + self.w
    }

    fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

pub const WELCOME_HEIGHT: i32 = 36;
pub const BUTTON_HEIGHT: i32 = 30;
pub const BUTTON_GAP: i32 = 12;
pub const AREA_BUTTON_WIDTH: i32 = 180;
pub const QUERY_BUTTON_WIDTH: i32 = 150;

/// Positions in the main window: welcome banner across the top, the two
/// feature buttons centered on one row below it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub welcome: ControlRect,
    pub area_button: ControlRect,
    pub query_button: ControlRect,
}

impl MainLayout {
    pub fn for_client(width: i32) -> Self {
        let width = width.max(0);
        let row_width = AREA_BUTTON_WIDTH + BUTTON_GAP + QUERY_BUTTON_WIDTH;
        let left = ((width - row_width) / 2).max(BUTTON_GAP);
        let top = WELCOME_HEIGHT + 2 * BUTTON_GAP;

        Self {
            welcome: ControlRect::new(0, BUTTON_GAP, width, WELCOME_HEIGHT),
            area_button: ControlRect::new(left, top, AREA_BUTTON_WIDTH, BUTTON_HEIGHT),
            query_button: ControlRect::new(
                left + AREA_BUTTON_WIDTH + BUTTON_GAP,
                top,
                QUERY_BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        }
    }
}

/// Uniform grid used by the calculator window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: i32,
    pub cols: i32,
    pub width: i32,
    pub height: i32,
    pub padding: i32,
}

impl GridLayout {
    pub const CALCULATOR_ROWS: i32 = 6;
    pub const CALCULATOR_COLS: i32 = 2;
    pub const PADDING: i32 = 6;

    pub fn calculator(width: i32, height: i32) -> Self {
        Self {
            rows: Self::CALCULATOR_ROWS,
            cols: Self::CALCULATOR_COLS,
            width: width.max(0),
            height: height.max(0),
            padding: Self::PADDING,
        }
    }

    /// Rectangle of the cell at `(row, col)`, inset by the padding.
    /// Out-of-range cells are clamped to the last row or column.
    pub fn cell(&self, row: i32, col: i32) -> ControlRect {
        let row = row.clamp(0, self.rows - 1);
        let col = col.clamp(0, self.cols - 1);
        let cell_w = self.width / self.cols;
        let cell_h = self.height / self.rows;

        ControlRect::new(
            col * cell_w + self.padding,
            row * cell_h + self.padding,
            (cell_w - 2 * self.padding).max(0),
            (cell_h - 2 * self.padding).max(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_buttons_are_centered_below_banner() {
        let layout = MainLayout::for_client(584);
        assert_eq!(layout.welcome.w, 584);
        assert!(layout.area_button.y >= layout.welcome.bottom());
        assert_eq!(layout.area_button.y, layout.query_button.y);

        let left_margin = layout.area_button.x;
        let right_margin = 584 - layout.query_button.right();
        assert!((left_margin - right_margin).abs() <= 1);
    }

    #[test]
    fn narrow_main_window_keeps_margin() {
        let layout = MainLayout::for_client(100);
        assert_eq!(layout.area_button.x, BUTTON_GAP);
        assert!(layout.query_button.x > layout.area_button.right());
    }

    #[test]
    fn calculator_cells_tile_the_client_area() {
        let grid = GridLayout::calculator(384, 360);
        let first = grid.cell(0, 0);
        let second = grid.cell(0, 1);
        assert_eq!(first, ControlRect::new(6, 6, 180, 48));
        assert_eq!(second.x, 192 + 6);
        assert_eq!(grid.cell(5, 1).bottom(), 360 - 6);
    }

    #[test]
    fn out_of_range_cells_are_clamped() {
        let grid = GridLayout::calculator(200, 120);
        assert_eq!(grid.cell(9, 9), grid.cell(5, 1));
        assert_eq!(grid.cell(-1, -1), grid.cell(0, 0));
    }

    #[test]
    fn zero_sized_client_does_not_go_negative() {
        let grid = GridLayout::calculator(0, 0);
        let cell = grid.cell(2, 1);
        assert_eq!(cell.w, 0);
        assert_eq!(cell.h, 0);
    }
}
