//! Generated Window Icon
//!
//! 16x16 character art scaled 4x onto a 64x64 ARGB surface. Purely
//! cosmetic; the art-to-pixel mapping is kept pure so it can be tested
//! without a video driver.

use sdl2::pixels::PixelFormatEnum;
use sdl2::surface::Surface;

pub const ICON_SIZE: u32 = 64;
const SCALE: u32 = 4;

const ART: [&str; 16] = [
    "                ",
    "   *            ",
    "  *./           ",
    "  *.//          ",
    " *./../         ",
    " *.///..        ",
    " *./////.       ",
    " *.///../.      ",
    " *./..//./.     ",
    "  *.////././    ",
    "  *.///.///./   ",
    "   *.//.///.//  ",
    "    *../////..* ",
    "     **.....**  ",
    "       *****    ",
    "                ",
];

const COLOR_DARK: u32 = 0xff346856; // '*'
const COLOR_MID: u32 = 0xff88c070; // '/'
const COLOR_LIGHT: u32 = 0xffe0f8d0; // '.'
const COLOR_CLEAR: u32 = 0x00000000;

/// Icon pixel at (x, y), nearest-neighbour sampled from the art grid
fn pixel_at(x: u32, y: u32) -> u32 {
    let row = ART[(y / SCALE) as usize].as_bytes();
    match row[(x / SCALE) as usize] {
        b'*' => COLOR_DARK,
        b'/' => COLOR_MID,
        b'.' => COLOR_LIGHT,
        _ => COLOR_CLEAR,
    }
}

/// Render the icon onto a fresh ARGB8888 surface
pub fn build() -> Result<Surface<'static>, String> {
    let mut surface = Surface::new(ICON_SIZE, ICON_SIZE, PixelFormatEnum::ARGB8888)?;
    surface.with_lock_mut(|bytes: &mut [u8]| {
        for y in 0..ICON_SIZE {
            for x in 0..ICON_SIZE {
                let idx = ((y * ICON_SIZE + x) * 4) as usize;
                bytes[idx..idx + 4].copy_from_slice(&pixel_at(x, y).to_ne_bytes());
            }
        }
    });
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_grid_is_square() {
        for row in &ART {
            assert_eq!(row.len(), ART.len());
        }
    }

    #[test]
    fn test_border_is_transparent() {
        for i in 0..ICON_SIZE {
            assert_eq!(pixel_at(i, 0), COLOR_CLEAR);
            assert_eq!(pixel_at(i, ICON_SIZE - 1), COLOR_CLEAR);
            assert_eq!(pixel_at(0, i), COLOR_CLEAR);
        }
    }

    #[test]
    fn test_characters_map_to_palette() {
        // Art row 2 is "  *./..." — one cell each of the three colors
        assert_eq!(pixel_at(2 * SCALE, 2 * SCALE), COLOR_DARK);
        assert_eq!(pixel_at(3 * SCALE, 2 * SCALE), COLOR_LIGHT);
        assert_eq!(pixel_at(4 * SCALE, 2 * SCALE), COLOR_MID);
    }

    #[test]
    fn test_blocks_are_uniform() {
        // Nearest-neighbour scaling: all 4x4 pixels of a cell are identical
        for cy in 0..16u32 {
            for cx in 0..16u32 {
                let expect = pixel_at(cx * SCALE, cy * SCALE);
                for dy in 0..SCALE {
                    for dx in 0..SCALE {
                        assert_eq!(pixel_at(cx * SCALE + dx, cy * SCALE + dy), expect);
                    }
                }
            }
        }
    }
}
