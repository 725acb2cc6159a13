use crate::display::{mean_rgb, pack, PixelBuffer};
use crate::noise::ByteNoise;

/// Startup opacity for darkened rows
pub const DEFAULT_ALPHA: u8 = 0xb0;

/// Up/Down arrows move the opacity by this much per key press
const ALPHA_STEP: u8 = 2;

/// CRT-style scanline compositor.
///
/// Each `compose` call rebuilds the whole frame: even rows are filled with
/// random red/blue noise, odd rows become a translucent average of their
/// vertical neighbours, and the final row copies the row above it. The
/// generator and the scanline opacity are the compositor's only state, so
/// two compositors built the same way produce bit-identical frames.
pub struct Scanlines {
    rnd: ByteNoise,
    alpha: u8,
}

impl Scanlines {
    pub fn new() -> Self {
        Self::with_alpha(DEFAULT_ALPHA)
    }

    pub fn with_alpha(alpha: u8) -> Self {
        Self {
            rnd: ByteNoise::new(),
            alpha,
        }
    }

    /// Current scanline opacity
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Raise the opacity one step, clamping at 255
    pub fn alpha_up(&mut self) {
        self.alpha = self.alpha.saturating_add(ALPHA_STEP);
    }

    /// Lower the opacity one step, clamping at 0
    pub fn alpha_down(&mut self) {
        self.alpha = self.alpha.saturating_sub(ALPHA_STEP);
    }

    /// Build one frame: fill, blend, then fix up the last row.
    ///
    /// Assumes the buffer has the configured dimensions; no bounds are
    /// validated here (caller contract).
    pub fn compose(&mut self, buffer: &mut PixelBuffer) {
        self.fill_even_rows(buffer);
        Self::blend_odd_rows(buffer, self.alpha);
        Self::fix_last_row(buffer, self.alpha);
    }

    /// Even rows: red and blue from consecutive generator bytes (red drawn
    /// first), green zero, fully opaque.
    fn fill_even_rows(&mut self, buffer: &mut PixelBuffer) {
        for y in (0..buffer.height()).step_by(2) {
            for x in 0..buffer.width() {
                let r = self.rnd.next_byte();
                let b = self.rnd.next_byte();
                buffer.set_pixel(x, y, pack(0xff, r, 0, b));
            }
        }
    }

    /// Odd rows in [1, H-2): per-channel truncating mean of the rows above
    /// and below, alpha forced to the scanline opacity.
    fn blend_odd_rows(buffer: &mut PixelBuffer, alpha: u8) {
        let height = buffer.height();
        for y in (1..height.saturating_sub(2)).step_by(2) {
            for x in 0..buffer.width() {
                let top = buffer.pixel(x, y - 1);
                let down = buffer.pixel(x, y + 1);
                buffer.set_pixel(x, y, mean_rgb(top, down, alpha));
            }
        }
    }

    /// Last row: RGB copied verbatim from the row above, scanline alpha
    fn fix_last_row(buffer: &mut PixelBuffer, alpha: u8) {
        let last = buffer.height() - 1;
        for x in 0..buffer.width() {
            let above = buffer.pixel(x, last - 1);
            buffer.set_pixel(x, last, (above & 0x00ffffff) | ((alpha as u32) << 24));
        }
    }
}

impl Default for Scanlines {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{alpha, blue, green, red};

    const W: u32 = 320;
    const H: u32 = 360;

    fn composed_frame(a: u8) -> PixelBuffer {
        let mut buffer = PixelBuffer::with_size(W, H);
        Scanlines::with_alpha(a).compose(&mut buffer);
        buffer
    }

    #[test]
    fn test_first_fill_pixels_match_generator_stream() {
        // Stream starts 129, 192, 99, 254 — red/blue pairs for the first
        // two pixels of row 0
        let buffer = composed_frame(DEFAULT_ALPHA);
        assert_eq!(buffer.pixel(0, 0), pack(0xff, 129, 0, 192));
        assert_eq!(buffer.pixel(1, 0), pack(0xff, 99, 0, 254));
    }

    #[test]
    fn test_even_rows_opaque_with_zero_green() {
        let buffer = composed_frame(0x40);
        for y in (0..H).step_by(2) {
            for x in 0..W {
                let p = buffer.pixel(x, y);
                assert_eq!(alpha(p), 0xff, "row {} not opaque", y);
                assert_eq!(green(p), 0, "row {} has green", y);
            }
        }
    }

    #[test]
    fn test_odd_rows_average_their_neighbours() {
        let scanline_alpha = 0x77;
        let buffer = composed_frame(scanline_alpha);
        for y in (1..H - 2).step_by(2) {
            for x in 0..W {
                let p = buffer.pixel(x, y);
                let top = buffer.pixel(x, y - 1);
                let down = buffer.pixel(x, y + 1);
                assert_eq!(red(p), ((red(top) as u16 + red(down) as u16) / 2) as u8);
                assert_eq!(green(p), ((green(top) as u16 + green(down) as u16) / 2) as u8);
                assert_eq!(blue(p), ((blue(top) as u16 + blue(down) as u16) / 2) as u8);
                assert_eq!(alpha(p), scanline_alpha);
            }
        }
    }

    #[test]
    fn test_last_row_copies_rgb_above() {
        let scanline_alpha = 0x10;
        let buffer = composed_frame(scanline_alpha);
        for x in 0..W {
            let last = buffer.pixel(x, H - 1);
            let above = buffer.pixel(x, H - 2);
            assert_eq!(last & 0x00ffffff, above & 0x00ffffff);
            assert_eq!(alpha(last), scanline_alpha);
        }
    }

    #[test]
    fn test_bottom_rows_never_blend() {
        // With H=360, blending covers odd rows in [1, 358). Row 358 is an
        // even fill row and row 359 is the fix-up row.
        let buffer = composed_frame(0x55);
        for x in 0..W {
            let p = buffer.pixel(x, 358);
            assert_eq!(alpha(p), 0xff);
            assert_eq!(green(p), 0);
        }
        for x in 0..W {
            assert_eq!(alpha(buffer.pixel(x, 359)), 0x55);
        }
    }

    #[test]
    fn test_compose_is_reproducible() {
        // Identical starting state (fresh generator, same alpha) must
        // produce bit-identical frames
        let a = composed_frame(DEFAULT_ALPHA);
        let b = composed_frame(DEFAULT_ALPHA);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_consecutive_frames_differ() {
        // The generator keeps running between frames, so two frames from
        // the same compositor should not repeat
        let mut effect = Scanlines::new();
        let mut first = PixelBuffer::with_size(W, H);
        let mut second = PixelBuffer::with_size(W, H);
        effect.compose(&mut first);
        effect.compose(&mut second);
        assert_ne!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_alpha_adjustment_clamps() {
        let mut effect = Scanlines::with_alpha(0xfe);
        effect.alpha_up();
        assert_eq!(effect.alpha(), 0xff);
        effect.alpha_up();
        assert_eq!(effect.alpha(), 0xff);

        let mut effect = Scanlines::with_alpha(0x01);
        effect.alpha_down();
        assert_eq!(effect.alpha(), 0x00);
        effect.alpha_down();
        assert_eq!(effect.alpha(), 0x00);
    }
}
