use phosphor::audio::{ToneGen, CHUNK_SAMPLES, MIN_QUEUED_BYTES, SAMPLE_RATE};
use phosphor::display::{draw_text, pack, Display, InputEvent, PixelBuffer, RenderTarget};
use phosphor::settings::Settings;
use sdl2::audio::AudioSpecDesired;
use sdl2::keyboard::Keycode;

const WINDOW_WIDTH: u32 = 320;
const WINDOW_HEIGHT: u32 = 180;

const HUD_COLOR: u32 = pack(0xff, 0x00, 0xf0, 0x20);
const BACKGROUND: u32 = pack(0xff, 10, 10, 10);

struct Options {
    freq: Option<f32>,
    vsync: bool,
}

/// Parse command line arguments
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut freq = None;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--freq" | "-f" => {
                if i + 1 < args.len() {
                    if let Ok(hz) = args[i + 1].parse::<f32>() {
                        if hz > 0.0 {
                            freq = Some(hz);
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: tone [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --freq HZ, -f HZ  Tone frequency (default: 440)");
                println!("  --no-vsync        Disable VSync for uncapped framerate");
                println!("  --help            Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    Options { freq, vsync }
}

fn main() -> Result<(), String> {
    let opts = parse_args();
    let settings = Settings::load_or_default(Settings::FILE);
    let freq = opts.freq.unwrap_or(settings.tone_hz);

    let (mut display, texture_creator) =
        Display::with_options("tone", WINDOW_WIDTH, WINDOW_HEIGHT, opts.vsync)?;
    display.set_logical_size(WINDOW_WIDTH, WINDOW_HEIGHT)?;
    println!("[tone] VSync: {}", if opts.vsync { "on" } else { "off" });

    let audio_subsystem = display.audio_subsystem()?;
    let desired = AudioSpecDesired {
        freq: Some(SAMPLE_RATE as i32),
        channels: Some(1),
        samples: None,
    };
    let queue = audio_subsystem.open_queue::<f32, _>(None, &desired)?;
    // The queue starts paused
    queue.resume();
    println!("[tone] Playing {} Hz sine, mono f32 at {} Hz", freq, SAMPLE_RATE);
    println!("Controls:");
    println!("  Alt+F  - Toggle fullscreen");
    println!("  Escape - Quit");

    let mut target = RenderTarget::with_size(&texture_creator, WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut buffer = PixelBuffer::with_size(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut tone = ToneGen::new(freq);
    let mut samples = [0.0f32; CHUNK_SAMPLES];

    'main: loop {
        let alt_held = display.alt_held();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown { key, alt } => match key {
                    Keycode::Escape => break 'main,
                    Keycode::F if alt => display.toggle_fullscreen()?,
                    _ => {},
                },
                InputEvent::MouseDown { .. } => {},
            }
        }

        // Keep at least half a second queued; the device drains it on its
        // own schedule and converts to whatever the hardware wants.
        if queue.size() < MIN_QUEUED_BYTES {
            tone.fill(&mut samples);
            queue.queue_audio(&samples)?;
        }

        buffer.clear(BACKGROUND);
        draw_text(&mut buffer, 8, 8, "TONE", HUD_COLOR);
        draw_text(&mut buffer, 8, 18, &format!("{} HZ", freq as u32), HUD_COLOR);
        if alt_held {
            draw_text(&mut buffer, 8, 28, "ALT PRESSED", HUD_COLOR);
        }
        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
