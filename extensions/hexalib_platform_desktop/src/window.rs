//! Desktop window implementation using winit and softbuffer

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::sync::Arc;

use hexalib_platform::{PlatformError, Window, WindowConfig};
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window as WinitWindow, WindowAttributes};

type Target = softbuffer::Surface<Arc<WinitWindow>, Arc<WinitWindow>>;

/// Desktop window wrapping a winit window and its software framebuffer
///
/// Lives on the UI thread only.
pub struct DesktopWindow {
    window: Arc<WinitWindow>,
    _context: softbuffer::Context<Arc<WinitWindow>>,
    target: RefCell<Target>,
}

impl DesktopWindow {
    /// Create a new desktop window whose client area is exactly
    /// `config.width x config.height` physical pixels
    pub fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, PlatformError> {
        let attrs = WindowAttributes::default()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| PlatformError::WindowCreation(e.to_string()))?,
        );
        let context = softbuffer::Context::new(Arc::clone(&window))
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;
        let target = softbuffer::Surface::new(&context, Arc::clone(&window))
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        Ok(Self {
            window,
            _context: context,
            target: RefCell::new(target),
        })
    }

    /// Size the framebuffer to the window and let `fill` draw into it.
    fn with_framebuffer(&self, fill: impl FnOnce(&mut [u32], u32, u32)) -> Result<(), PlatformError> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // Minimized
            return Ok(());
        };

        let mut target = self.target.borrow_mut();
        target
            .resize(width, height)
            .map_err(|e| PlatformError::Presentation(e.to_string()))?;
        let mut buffer = target
            .buffer_mut()
            .map_err(|e| PlatformError::Presentation(e.to_string()))?;
        fill(&mut *buffer, size.width, size.height);
        buffer
            .present()
            .map_err(|e| PlatformError::Presentation(e.to_string()))
    }
}

impl Window for DesktopWindow {
    fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Any part of the window the pixels do not cover is black.
    fn present(&self, pixels: &[u32], width: u32, height: u32) -> Result<(), PlatformError> {
        self.with_framebuffer(|dst, dst_width, dst_height| {
            blit(dst, dst_width, dst_height, pixels, width, height)
        })
    }
}

/// Copy an ARGB buffer of `src_width x src_height` into a 0RGB framebuffer
/// of `width x height` pixels.
fn blit(dst: &mut [u32], width: u32, height: u32, src: &[u32], src_width: u32, src_height: u32) {
    dst.fill(0);
    let copy_width = width.min(src_width) as usize;
    let copy_height = height
        .min(src_height)
        .min(src.len().checked_div(src_width as usize).unwrap_or(0) as u32) as usize;
    for row in 0..copy_height {
        let src_row = &src[row * src_width as usize..][..copy_width];
        let dst_row = &mut dst[row * width as usize..][..copy_width];
        for (out, &argb) in dst_row.iter_mut().zip(src_row) {
            *out = argb & 0x00FF_FFFF;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::blit;
    use hexalib_paint::{Brush, Surface};

    fn blit_surface(dst: &mut [u32], width: u32, height: u32, surface: &Surface) {
        blit(dst, width, height, surface.pixels(), surface.width(), surface.height());
    }

    #[test]
    fn blit_strips_alpha() {
        let mut surface = Surface::new(2, 2);
        surface.clear(Brush::ORANGE);
        let mut dst = vec![0xDEAD_BEEF; 4];
        blit_surface(&mut dst, 2, 2, &surface);
        assert!(dst.iter().all(|&p| p == 0x00FF_C800));
    }

    #[test]
    fn blit_into_larger_window_pads_with_black() {
        let mut surface = Surface::new(2, 1);
        surface.clear(Brush::WHITE);
        let mut dst = vec![0xFFFF_FFFF; 9];
        blit_surface(&mut dst, 3, 3, &surface);
        assert_eq!(
            dst,
            vec![0xFF_FFFF, 0xFF_FFFF, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn blit_into_smaller_window_crops() {
        let mut surface = Surface::new(3, 3);
        surface.clear(Brush::BLACK);
        surface.set_pixel(0, 0, Brush::RED.color());
        surface.set_pixel(2, 2, Brush::RED.color());
        let mut dst = vec![0; 4];
        blit_surface(&mut dst, 2, 2, &surface);
        assert_eq!(dst, vec![0xFF_0000, 0, 0, 0]);
    }

    #[test]
    fn blit_short_source_leaves_missing_rows_black() {
        let src = vec![0xFF12_3456; 2];
        let mut dst = vec![0xFFFF_FFFF; 4];
        blit(&mut dst, 2, 2, &src, 2, 2);
        assert_eq!(dst, vec![0x12_3456, 0x12_3456, 0, 0]);
    }
}
