use phosphor::display::{draw_text, pack, Display, InputEvent, PixelBuffer, RenderTarget};
use phosphor::effects::Scanlines;
use phosphor::icon;
use phosphor::settings::Settings;
use sdl2::keyboard::Keycode;

/// Internal render resolution; presented letterboxed at 2x width
const TEXTURE_WIDTH: u32 = 320;
const TEXTURE_HEIGHT: u32 = 360;

const HUD_COLOR: u32 = pack(0xff, 0x00, 0xf0, 0x30);

struct Options {
    mag: Option<u32>,
    vsync: bool,
}

/// Parse command line arguments
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut mag = None;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--mag" | "-m" => {
                if i + 1 < args.len() {
                    if let Ok(m) = args[i + 1].parse::<u32>() {
                        if m > 0 {
                            mag = Some(m);
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: scanlines [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --mag N, -m N    Window magnification (default: from desktop size)");
                println!("  --no-vsync       Disable VSync for uncapped framerate");
                println!("  --help           Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    Options { mag, vsync }
}

/// Largest integer magnification that keeps the window smaller than the
/// desktop (stepping down one when the texture width divides it exactly)
fn auto_magnification(desktop_w: u32) -> u32 {
    let mut mag = desktop_w / TEXTURE_WIDTH;
    if desktop_w % TEXTURE_WIDTH == 0 {
        mag -= 1;
    }
    mag.max(1)
}

fn main() -> Result<(), String> {
    let opts = parse_args();
    let settings = Settings::load_or_default(Settings::FILE);

    let (desktop_w, desktop_h, displays) = Display::desktop_mode()?;
    println!("[scanlines] Number of displays: {}", displays);
    println!("[scanlines] Desktop display mode: {}x{}", desktop_w, desktop_h);

    let mag = opts.mag.unwrap_or_else(|| auto_magnification(desktop_w));
    let window_w = mag * TEXTURE_WIDTH;
    let window_h = mag * TEXTURE_WIDTH * 9 / 16;
    println!("[scanlines] Window size {}x{}", window_w, window_h);
    println!(
        "[scanlines] VSync: {}",
        if opts.vsync { "on" } else { "off" }
    );

    let (mut display, texture_creator) =
        Display::with_options("scanlines", window_w, window_h, opts.vsync)?;
    display.set_logical_size(2 * TEXTURE_WIDTH, TEXTURE_HEIGHT)?;
    display.set_icon(icon::build()?);

    let mut target = RenderTarget::with_size(&texture_creator, TEXTURE_WIDTH, TEXTURE_HEIGHT)?;
    let mut filter = settings.filter;
    target.set_filter(filter);

    let mut buffer = PixelBuffer::with_size(TEXTURE_WIDTH, TEXTURE_HEIGHT);
    let mut effect = Scanlines::with_alpha(settings.scanline_alpha);

    println!("Controls:");
    println!("  Up/Down     - Scanline opacity");
    println!("  Mouse click - Cycle filter (nearest -> pixelart -> linear)");
    println!("  F           - Toggle fullscreen");
    println!("  S           - Save settings");
    println!("  Escape      - Quit");

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown { key, .. } => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Up => effect.alpha_up(),
                    Keycode::Down => effect.alpha_down(),
                    Keycode::F => display.toggle_fullscreen()?,
                    Keycode::S => {
                        let current = Settings {
                            scanline_alpha: effect.alpha(),
                            filter,
                            tone_hz: settings.tone_hz,
                        };
                        match current.save(Settings::FILE) {
                            Ok(()) => println!("Settings saved to {}", Settings::FILE),
                            Err(e) => eprintln!("Failed to save: {}", e),
                        }
                    },
                    _ => {},
                },
                InputEvent::MouseDown { .. } => {
                    filter = filter.next();
                    target.set_filter(filter);
                },
            }
        }

        effect.compose(&mut buffer);

        draw_text(
            &mut buffer,
            8,
            8,
            &format!("ALPHA 0X{:02X}", effect.alpha()),
            HUD_COLOR,
        );
        draw_text(
            &mut buffer,
            8,
            18,
            &format!("FILTER {}", filter.label()),
            HUD_COLOR,
        );

        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
