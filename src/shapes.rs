//! Geometric primitives
//!
//! Point generators plus the surface operations that apply them. Points
//! outside the grid are clipped silently.

use libm::{round, sqrt};

use crate::CellSink;
use crate::color::Color;
use crate::error::Error;
use crate::grid::GridState;
use crate::surface::Surface;

/// Signed cell coordinate `(x, y)`; may lie off the grid
pub type Point = (i32, i32);

/// Cells of the square ring at Chebyshev distance `radius` from `center`
///
/// Yields the top and bottom rows first, then the left and right columns.
/// Corners appear twice. A zero radius yields the center only (repeatedly).
pub fn square_ring(center: Point, radius: i32) -> impl Iterator<Item = Point> {
    let (cx, cy) = center;
    let (left, right) = (cx.saturating_sub(radius), cx.saturating_add(radius));
    let (top, bottom) = (cy.saturating_sub(radius), cy.saturating_add(radius));
    let horizontal = (left..=right).flat_map(move |x| [(x, top), (x, bottom)]);
    let vertical = (top..=bottom).flat_map(move |y| [(left, y), (right, y)]);
    horizontal.chain(vertical)
}

/// First-octant arc of a circle centered on the origin
///
/// For each `x` in `0..=radius` yields `(x, round(sqrt(radius² - x²)))`.
#[allow(clippy::cast_possible_truncation)]
pub fn circle_arc(radius: i32) -> impl Iterator<Item = Point> {
    (0..=radius).map(move |x| {
        let (r, x64) = (i64::from(radius), i64::from(x));
        #[allow(clippy::cast_precision_loss)]
        let y = round(sqrt(((r - x64) * (r + x64)) as f64));
        (x, y as i32)
    })
}

/// [`square_ring`] restricted to the columns and rows of a `W`x`H` grid
///
/// Sides that lie off the grid may still be yielded; callers clip them.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn clipped_ring<const W: usize, const H: usize>(
    center: Point,
    radius: i32,
) -> impl Iterator<Item = Point> {
    let (cx, cy) = center;
    let (left, right) = (cx.saturating_sub(radius), cx.saturating_add(radius));
    let (top, bottom) = (cy.saturating_sub(radius), cy.saturating_add(radius));
    let (last_x, last_y) = (W as i32 - 1, H as i32 - 1);
    let horizontal =
        (left.max(0)..=right.min(last_x)).flat_map(move |x| [(x, top), (x, bottom)]);
    let vertical =
        (top.max(0)..=bottom.min(last_y)).flat_map(move |y| [(left, y), (right, y)]);
    horizontal.chain(vertical)
}

impl<S: CellSink, const W: usize, const H: usize> Surface<S, W, H> {
    /// Draw a square outline of `radius` around `center`
    ///
    /// A zero radius writes the center straight to the device; larger rings
    /// only change the grid and show up on the next resync.
    #[allow(clippy::cast_sign_loss)]
    pub fn square(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error<S::Error>> {
        let Some(code) = self.palette().resolve(color)? else {
            return Ok(());
        };
        if radius == 0 {
            let (x, y) = center;
            if GridState::<W, H>::is_inside(x, y) {
                self.write_code(x as usize, y as usize, code)?;
            }
            return Ok(());
        }
        self.grid_mut().patch(clipped_ring::<W, H>(center, radius), code);
        Ok(())
    }

    /// Invert every cell of the square ring exactly once
    #[allow(clippy::cast_sign_loss)]
    pub fn negative_square(&mut self, center: Point, radius: i32) {
        let mut visited = [[false; W]; H];
        let grid = self.grid_mut();
        for (x, y) in clipped_ring::<W, H>(center, radius) {
            if !GridState::<W, H>::is_inside(x, y) {
                continue;
            }
            let (x, y) = (x as usize, y as usize);
            if !visited[y][x] {
                visited[y][x] = true;
                grid.invert(x, y);
            }
        }
    }

    /// Draw the first-octant arc of a circle and resync
    ///
    /// Only one arc is drawn, not the full outline.
    pub fn circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error<S::Error>> {
        let Some(code) = self.palette().resolve(color)? else {
            return Ok(());
        };
        let (cx, cy) = center;
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let right_edge = W as i32;
        let arc = circle_arc(radius)
            .map(|(x, y)| (cx.saturating_add(x), cy.saturating_add(y)))
            .take_while(|&(x, _)| x < right_edge);
        self.grid_mut().patch(arc, code);
        self.resync()
    }
}
