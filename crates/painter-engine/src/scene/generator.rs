use crate::coords::SurfaceSize;
use crate::surface::{Screen, Surface, SurfaceError};

use super::op::Operation;
use super::shapes::{Figure, Fill};
use super::{DrawCmd, SceneStore};

/// Scene store plus the screen it renders onto.
///
/// `update` is the write side used by the execution loop; `generate`
/// produces a fresh snapshot surface for the renderer.
#[derive(Debug)]
pub struct Generator<S: Screen> {
    store: SceneStore,
    screen: S,
}

impl<S: Screen> Generator<S> {
    pub fn new(screen: S) -> Self {
        Self { store: SceneStore::new(), screen }
    }

    #[inline]
    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    #[inline]
    pub fn update(&self, op: Operation) {
        self.store.apply(op);
    }

    /// Applies the startup scene: a green background and one centered figure.
    pub fn seed_defaults(&self) {
        self.store.apply(Operation::Fill(Fill::green()));
        self.store.apply(Operation::Figure(Figure::new(0.5, 0.5)));
    }

    /// Allocates a surface of `size` and draws the current scene into it.
    ///
    /// Pending moves are consumed. The store lock is held only while the
    /// draw stream is recorded; painting runs unlocked.
    pub fn generate(&self, size: SurfaceSize) -> Result<S::Surface, SurfaceError> {
        let mut surface = self.screen.new_surface(size)?;
        let bounds = surface.bounds();
        let mut list = self.store.record_frame(bounds);

        for item in list.iter_in_paint_order() {
            match item.cmd {
                DrawCmd::Clear(color) => surface.fill(bounds, color),
                DrawCmd::Rect(rect, color) => surface.fill(rect, color),
            }
        }

        log::trace!("generated {}x{} snapshot ({} draw items)", size.width, size.height, list.len());
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;
    use crate::paint::Color;
    use crate::scene::{BoundingRect, Move};
    use crate::surface::CpuScreen;

    fn generator() -> Generator<CpuScreen> {
        Generator::new(CpuScreen::new())
    }

    const SIZE: SurfaceSize = SurfaceSize::new(800, 800);

    #[test]
    fn empty_scene_is_transparent() {
        let s = generator().generate(SIZE).unwrap();
        assert_eq!(s.pixel(400, 400), Some(Color::transparent()));
    }

    #[test]
    fn default_scene() {
        let g = generator();
        g.seed_defaults();
        let s = g.generate(SIZE).unwrap();
        assert_eq!(s.pixel(0, 0), Some(Color::GREEN));
        assert_eq!(s.pixel(400, 350), Some(Color::FIGURE));
        assert_eq!(s.pixel(320, 450), Some(Color::GREEN));
    }

    #[test]
    fn later_fill_covers_earlier() {
        let g = generator();
        g.update(Operation::Fill(Fill::green()));
        g.update(Operation::Fill(Fill::white()));
        let s = g.generate(SIZE).unwrap();
        assert_eq!(s.pixel(10, 10), Some(Color::WHITE));
    }

    #[test]
    fn figures_draw_over_bounding_rect() {
        let g = generator();
        g.update(Operation::Figure(Figure::new(0.5, 0.5)));
        g.update(Operation::BoundingRect(BoundingRect::new(0.25, 0.25, 0.75, 0.75)));
        g.update(Operation::Fill(Fill::white()));
        let s = g.generate(SIZE).unwrap();
        assert_eq!(s.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(s.pixel(210, 210), Some(Color::BLACK));
        assert_eq!(s.pixel(400, 350), Some(Color::FIGURE));
    }

    #[test]
    fn move_applies_before_drawing() {
        let g = generator();
        g.update(Operation::Figure(Figure::new(0.5, 0.5)));
        g.update(Operation::Move(Move::new(0.25, 0.0)));
        let s = g.generate(SIZE).unwrap();
        assert_eq!(s.pixel(400, 350), Some(Color::transparent()));
        assert_eq!(s.pixel(600, 350), Some(Color::FIGURE));
    }

    #[test]
    fn resize_does_not_reflow_bound_figures() {
        let g = generator();
        g.update(Operation::Figure(Figure::new(0.5, 0.5)));
        g.generate(SIZE).unwrap();
        let s = g.generate(SurfaceSize::new(1000, 1000)).unwrap();
        // still centered on (400, 400), not (500, 500)
        assert_eq!(s.pixel(400, 350), Some(Color::FIGURE));
        assert_eq!(s.pixel(560, 460), Some(Color::transparent()));
        assert!(g.store().figures()[0].contains(Point::new(400, 350)));
    }

    #[test]
    fn out_of_range_figures_still_generate() {
        let g = generator();
        g.update(Operation::Fill(Fill::white()));
        for (x, y) in [(f64::INFINITY, 0.5), (-1e12, 0.5), (0.5, f64::NAN)] {
            g.update(Operation::Figure(Figure::new(x, y)));
        }
        g.update(Operation::Move(Move::new(1e10, -1e10)));
        g.update(Operation::Figure(Figure::new(0.5, 0.5)));

        let s = g.generate(SIZE).unwrap();
        assert_eq!(s.pixel(400, 350), Some(Color::FIGURE));
        assert!(g.generate(SIZE).is_ok());
    }

    #[test]
    fn allocation_failure_is_reported_and_keeps_moves() {
        let g = Generator::new(CpuScreen::with_pixel_budget(10));
        g.update(Operation::Figure(Figure::new(0.5, 0.5)));
        g.update(Operation::Move(Move::new(0.1, 0.1)));
        assert!(g.generate(SIZE).is_err());
        assert_eq!(g.store().stats().pending_moves, 1);
    }
}
