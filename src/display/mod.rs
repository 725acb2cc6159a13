mod font;
mod pixel_buffer;

#[allow(unused_imports)]
pub use font::{draw_text, text_width, GLYPH_HEIGHT, GLYPH_WIDTH};
#[allow(unused_imports)]
pub use pixel_buffer::{alpha, blue, green, mean_rgb, pack, red, PixelBuffer};

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod, Scancode};
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{Canvas, ScaleMode, Texture, TextureCreator};
use sdl2::surface::SurfaceRef;
use sdl2::video::{FullscreenType, Window, WindowContext};
use sdl2::{EventPump, Sdl};
use serde::{Deserialize, Serialize};

/// Magnification filter applied when the render texture is stretched to the
/// window. A closed cycle: every press of the mouse button advances to the
/// successor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleFilter {
    Nearest,
    #[default]
    PixelArt,
    Linear,
}

impl ScaleFilter {
    /// Successor in the Nearest -> PixelArt -> Linear -> Nearest cycle
    pub fn next(self) -> Self {
        match self {
            Self::Nearest => Self::PixelArt,
            Self::PixelArt => Self::Linear,
            Self::Linear => Self::Nearest,
        }
    }

    /// Name shown in the HUD
    pub fn label(self) -> &'static str {
        match self {
            Self::Nearest => "NEAREST",
            Self::PixelArt => "PIXELART",
            Self::Linear => "LINEAR",
        }
    }

    /// SDL2 has no dedicated pixel-art mode; Best (anisotropic) is the
    /// closest it offers for low-resolution upscaling.
    fn to_sdl(self) -> ScaleMode {
        match self {
            Self::Nearest => ScaleMode::Nearest,
            Self::PixelArt => ScaleMode::Best,
            Self::Linear => ScaleMode::Linear,
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown { key: Keycode, alt: bool },
    MouseDown { x: i32, y: i32 },
}

pub struct Display {
    sdl_context: Sdl,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
    fullscreen: bool,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

impl Display {
    /// Desktop display mode of the primary display.
    /// Returns (width, height, display count).
    pub fn desktop_mode() -> Result<(u32, u32, u32), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let displays = video_subsystem.num_video_displays()?;
        let mode = video_subsystem.desktop_display_mode(0)?;
        Ok((mode.w as u32, mode.h as u32, displays as u32))
    }

    /// Create display with custom resolution and VSync settings
    /// vsync=true: locked to monitor refresh (typically 60fps)
    /// vsync=false: uncapped framerate
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((
            Self {
                sdl_context,
                canvas,
                event_pump,
                width,
                height,
                fullscreen: false,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Handle to the audio subsystem, sharing this display's SDL context
    pub fn audio_subsystem(&self) -> Result<sdl2::AudioSubsystem, String> {
        self.sdl_context.audio()
    }

    /// Letterboxed logical presentation: the canvas scales (logical_w x
    /// logical_h) to the window, preserving aspect ratio with bars.
    pub fn set_logical_size(&mut self, logical_w: u32, logical_h: u32) -> Result<(), String> {
        self.canvas
            .set_logical_size(logical_w, logical_h)
            .map_err(|e| e.to_string())
    }

    /// Flip between windowed and borderless desktop fullscreen
    pub fn toggle_fullscreen(&mut self) -> Result<(), String> {
        self.fullscreen = !self.fullscreen;
        let mode = if self.fullscreen {
            FullscreenType::Desktop
        } else {
            FullscreenType::Off
        };
        self.canvas.window_mut().set_fullscreen(mode)
    }

    pub fn set_icon<S: AsRef<SurfaceRef>>(&mut self, icon: S) {
        self.canvas.window_mut().set_icon(icon);
    }

    /// True while either Alt key is held, from the live keyboard state
    pub fn alt_held(&self) -> bool {
        let state = self.event_pump.keyboard_state();
        state.is_scancode_pressed(Scancode::LAlt) || state.is_scancode_pressed(Scancode::RAlt)
    }

    pub fn present(
        &mut self,
        target: &mut RenderTarget,
        buffer: &PixelBuffer,
    ) -> Result<(), String> {
        target
            .texture
            .update(None, buffer.as_bytes(), buffer.pitch())
            .map_err(|e| e.to_string())?;

        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    keymod,
                    ..
                } => events.push(InputEvent::KeyDown {
                    key,
                    alt: keymod.intersects(Mod::LALTMOD | Mod::RALTMOD),
                }),
                Event::MouseButtonDown { x, y, .. } => events.push(InputEvent::MouseDown { x, y }),
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    /// Streaming ARGB8888 texture the composited frame is uploaded into
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Apply a magnification filter to the texture
    pub fn set_filter(&mut self, filter: ScaleFilter) {
        self.texture.set_scale_mode(filter.to_sdl());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_cycle() {
        assert_eq!(ScaleFilter::Nearest.next(), ScaleFilter::PixelArt);
        assert_eq!(ScaleFilter::PixelArt.next(), ScaleFilter::Linear);
        assert_eq!(ScaleFilter::Linear.next(), ScaleFilter::Nearest);
    }

    #[test]
    fn test_filter_cycle_closes() {
        let start = ScaleFilter::default();
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(ScaleFilter::Nearest.label(), "NEAREST");
        assert_eq!(ScaleFilter::PixelArt.label(), "PIXELART");
        assert_eq!(ScaleFilter::Linear.label(), "LINEAR");
    }
}
