use std::ops::{Deref, DerefMut};

use glam::Vec2;

use crate::canvas::Canvas;
use crate::error::LayoutError;
use crate::scene::Scene;

/// A window-like target that frames are drawn into.
pub trait DisplaySurface: Canvas {
    fn should_close(&self) -> bool;
    /// Current drawable size in pixels.
    fn size(&self) -> Vec2;
    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    /// Releases the surface. Called once, after the last frame.
    fn close(&mut self);
}

/// An open frame. Ends the frame when dropped, including on early return.
pub struct Frame<'s, S: DisplaySurface + ?Sized> {
    surface: &'s mut S,
}

impl<'s, S: DisplaySurface + ?Sized> Frame<'s, S> {
    pub fn begin(surface: &'s mut S) -> Self {
        surface.begin_frame();
        Self { surface }
    }
}

impl<S: DisplaySurface + ?Sized> Deref for Frame<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DisplaySurface + ?Sized> DerefMut for Frame<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DisplaySurface + ?Sized> Drop for Frame<'_, S> {
    fn drop(&mut self) {
        self.surface.end_frame();
    }
}

/// Draws `scene` once per frame until the surface asks to close, then closes it.
///
/// Returns the number of frames drawn. A layout error aborts the loop; the
/// open frame is still ended and the surface still closed.
pub fn run_frame_loop<S: DisplaySurface>(surface: &mut S, scene: &Scene) -> Result<u64, LayoutError> {
    let mut frames = 0;

    let result = loop {
        if surface.should_close() {
            break Ok(frames);
        }

        let area = scene.area_for(surface.size());
        let mut frame = Frame::begin(&mut *surface);
        if let Err(e) = scene.draw(&mut *frame, area) {
            log::error!("Aborting frame {}: {}", frames, e);
            break Err(e);
        }
        frames += 1;
    };

    surface.close();
    result
}
