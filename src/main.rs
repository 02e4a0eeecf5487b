use anyhow::{Context, anyhow};

use crate::{
    abs::App,
    config::AppConfig,
    input::{FrameEvents, KeyboardState},
    scene::TriangleScene,
};

mod abs;
mod config;
mod input;
mod logging;
mod scene;

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logger: {e}");
    }

    if let Err(e) = run(&AppConfig::default()) {
        if logging::errors_enabled() {
            log::error!("{e:#}");
        } else {
            eprintln!("{e:#}");
        }
        std::process::exit(-1);
    }
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let mut app = App::new(config)
        .map_err(|e| anyhow!(e))
        .context("bootstrapping window and OpenGL context")?;

    let (vendor, renderer, version) = app.gl_info();
    log::info!("OpenGL {version} ({renderer}, {vendor})");
    let (width, height) = app.fit_viewport();
    log::debug!("Initial viewport {width}x{height}");

    let scene = TriangleScene::new(&app.gl)?;

    let mut keyboard = KeyboardState::default();
    let mut events = FrameEvents::default();

    while !input::should_close(&keyboard, &events) {
        scene::clear(&app.gl, config.clear_color);
        scene.draw();

        app.window.gl_swap_window();

        events = FrameEvents::default();
        for event in app.event_pump.poll_iter() {
            events.handle(&mut keyboard, &event);
        }
        if let Some((w, h)) = events.resized {
            let (width, height) = app.fit_viewport();
            log::debug!("Window resized to {w}x{h}, viewport {width}x{height}");
        }
    }

    log::info!("Window closed, shutting down");
    Ok(())
}
