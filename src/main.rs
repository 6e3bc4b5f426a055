use std::cell::RefCell;
use std::process;
use std::rc::Rc;
use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod animator;
mod canvas;
mod config;
mod constants;
mod engine;
mod input;
mod particle;
mod slideshow;
mod state;
mod surface;
mod theme;
mod viewport;

use crate::config::Cli;
use crate::constants::*;
use crate::engine::{Backdrop, Event};
use crate::slideshow::{ThemeChange, ThemeListener};
use crate::surface::Surface;

/// Mirrors theme changes into the window title.
struct WindowTitle {
    pending: Rc<RefCell<Option<String>>>,
}

impl ThemeListener for WindowTitle {
    fn theme_changed(&mut self, change: &ThemeChange) {
        log::info!("Theme {} '{}': {}", change.index, change.name, change.css_background);
        *self.pending.borrow_mut() = Some(format!("{WINDOW_TITLE} - {}", change.name));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        log::error!("{error:#}");
        process::exit(1);
    }
}

fn current_geometry(rl: &RaylibHandle, dpr_override: Option<f32>) -> Event {
    Event::Resized {
        logical_width: rl.get_screen_width() as f32,
        logical_height: rl.get_screen_height() as f32,
        device_pixel_ratio: dpr_override.unwrap_or_else(|| rl.get_window_scale_dpi().x),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let themes = cli.load_themes()?;

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title(WINDOW_TITLE)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut backdrop = Backdrop::new(themes, cli.motion(), cli.rng(), cli.theme);
    let title = Rc::new(RefCell::new(None));
    backdrop.subscribe(Box::new(WindowTitle { pending: title.clone() }));

    // Size the surface and the batch before the first theme is shown
    let mut surface = Surface::new();
    backdrop.handle(current_geometry(&rl, cli.dpr));
    surface.sync(&mut rl, &thread, backdrop.viewport())?;
    backdrop.start();

    let viewport = backdrop.viewport();
    log::info!(
        "Window {}x{} @{}x, buffer {}x{}",
        viewport.logical_width(),
        viewport.logical_height(),
        viewport.device_pixel_ratio(),
        viewport.physical_width(),
        viewport.physical_height()
    );

    // --- Main Loop ---
    while backdrop.is_running() && !rl.window_should_close() {
        backdrop.handle(current_geometry(&rl, cli.dpr));
        surface.sync(&mut rl, &thread, backdrop.viewport())?;

        if let Some(direction) = input::poll(&rl, backdrop.viewport().logical_width()) {
            backdrop.handle(Event::Advance(direction));
        }
        if let Some(text) = title.borrow_mut().take() {
            rl.set_window_title(&thread, &text);
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        if !surface.render(&mut d, &thread, &mut backdrop) {
            break;
        }
        surface.present(&mut d, backdrop.viewport());
    }

    // Stop stepping before the buffer and then the window go away
    backdrop.handle(Event::Stop);
    drop(surface);
    Ok(())
}
