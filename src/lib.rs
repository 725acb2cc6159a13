//! Software-rendered CRT scanline and sine-tone demos on SDL2.
//!
//! The library holds everything the two binaries (`scanlines`, `tone`)
//! share: the ARGB pixel buffer, the display/input shell, the scanline
//! compositor, the byte-noise generator, tone synthesis, the HUD font,
//! the generated window icon, and persisted settings.

pub mod audio;
pub mod display;
pub mod effects;
pub mod icon;
pub mod noise;
pub mod settings;
