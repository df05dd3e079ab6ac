use std::sync::{Arc, Mutex, PoisonError};

use painter_engine::coords::SurfaceSize;
use painter_engine::surface::{CpuScreen, CpuSurface, SurfaceError};
use painter_engine::{Generator, Receiver};

/// Headless stand-in for the window: regenerates a snapshot on every
/// notification and keeps the most recent one for `GET /frame.png`.
pub struct FrameReceiver {
    generator: Arc<Generator<CpuScreen>>,
    size: SurfaceSize,
    latest: Mutex<Option<CpuSurface>>,
}

impl FrameReceiver {
    pub fn new(generator: Arc<Generator<CpuScreen>>, size: SurfaceSize) -> Self {
        Self { generator, size, latest: Mutex::new(None) }
    }

    /// Draws the scene into a fresh surface and makes it the latest frame.
    pub fn refresh(&self) -> Result<(), SurfaceError> {
        let surface = self.generator.generate(self.size)?;
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(surface);
        Ok(())
    }

    /// PNG encoding of the latest frame, or `None` before the first one.
    pub fn png(&self) -> Option<Result<Vec<u8>, image::ImageError>> {
        let latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        latest.as_ref().map(CpuSurface::encode_png)
    }

    #[cfg(test)]
    pub(crate) fn with_latest<R>(&self, f: impl FnOnce(Option<&CpuSurface>) -> R) -> R {
        let latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        f(latest.as_ref())
    }
}

impl Receiver for FrameReceiver {
    fn update(&self) {
        // A failed snapshot keeps the previous frame; the loop carries on.
        if let Err(err) = self.refresh() {
            log::error!("snapshot failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use painter_engine::paint::Color;
    use painter_engine::scene::{Figure, Operation};

    const SIZE: SurfaceSize = SurfaceSize::new(100, 100);

    fn receiver(screen: CpuScreen) -> (Arc<Generator<CpuScreen>>, FrameReceiver) {
        let generator = Arc::new(Generator::new(screen));
        generator.seed_defaults();
        let frames = FrameReceiver::new(generator.clone(), SIZE);
        (generator, frames)
    }

    // ── refresh ───────────────────────────────────────────────────────────

    #[test]
    fn no_frame_before_first_refresh() {
        let (_, frames) = receiver(CpuScreen::new());
        assert!(frames.png().is_none());
    }

    #[test]
    fn refresh_draws_default_scene() {
        let (_, frames) = receiver(CpuScreen::new());
        frames.refresh().unwrap();
        frames.with_latest(|s| {
            let s = s.unwrap();
            assert_eq!(s.pixel(0, 0), Some(Color::GREEN));
            assert_eq!(s.pixel(50, 50), Some(Color::FIGURE));
        });
    }

    #[test]
    fn update_picks_up_new_operations() {
        let (generator, frames) = receiver(CpuScreen::new());
        frames.update();
        generator.update(Operation::Figure(Figure::new(0.1, 0.1)));
        frames.update();
        frames.with_latest(|s| assert_eq!(s.unwrap().pixel(10, 10), Some(Color::FIGURE)));
    }

    #[test]
    fn failed_snapshot_stores_nothing() {
        let (_, frames) = receiver(CpuScreen::with_pixel_budget(10));
        assert!(matches!(frames.refresh(), Err(SurfaceError::TooLarge { .. })));
        frames.update();
        assert!(frames.png().is_none());
    }

    // ── encoding ──────────────────────────────────────────────────────────

    #[test]
    fn png_has_signature() {
        let (_, frames) = receiver(CpuScreen::new());
        frames.refresh().unwrap();
        let bytes = frames.png().unwrap().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
