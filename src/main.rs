//! Windowed entry point: event loop, input mapping, fixed-rate stepping

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pixels::{Pixels, SurfaceTexture};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use rift_pong::Config;
use rift_pong::render::{Frame, VisualEffects, draw_hud, draw_scene};
use rift_pong::sim::{FrameInput, GameState};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("fatal: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".into());
    let config = Config::load(&config_path);
    let (width, height) = (config.width, config.height);
    let frame_duration = config.frame_duration();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Rift Pong")
        .with_inner_size(LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    let surface_texture = SurfaceTexture::new(width, height, &window);
    let mut pixels = Pixels::new(width, height, surface_texture)?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Starting with seed {seed}");

    let mut state = GameState::new(seed, config);
    let mut input = FrameInput::default();
    let mut frame = Frame::new(width, height);

    // Cosmetic effects draw from their own RNG so they never perturb the
    // simulation
    let mut effects = VisualEffects::new();
    let mut fx_rng = Pcg32::seed_from_u64(seed.wrapping_add(1));

    let start = Instant::now();
    let mut next_tick = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: key_state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    let pressed = key_state == ElementState::Pressed;
                    match key {
                        VirtualKeyCode::W | VirtualKeyCode::Up => input.up = pressed,
                        VirtualKeyCode::S | VirtualKeyCode::Down => input.down = pressed,
                        VirtualKeyCode::LShift => input.charge = pressed,
                        VirtualKeyCode::Escape if pressed => {
                            *control_flow = ControlFlow::Exit;
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if now >= next_tick {
                    state.step(&input);
                    effects.update(start.elapsed().as_secs_f32(), &mut fx_rng);
                    // Catch up without spiraling after a long stall
                    next_tick += frame_duration;
                    if next_tick < now {
                        next_tick = now + frame_duration;
                    }
                    window.request_redraw();
                }
                if *control_flow != ControlFlow::Exit {
                    *control_flow = ControlFlow::WaitUntil(next_tick);
                }
            }
            Event::RedrawRequested(_) => {
                draw_scene(&state, &mut frame);
                effects.apply(&mut frame);
                draw_hud(&state, &mut frame);
                frame.copy_to(pixels.frame_mut());
                if let Err(err) = pixels.render() {
                    log::error!("render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
