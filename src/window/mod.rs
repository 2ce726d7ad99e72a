//! Desktop front-end: every image of a directory becomes a slide element, and
//! mouse clicks on the drawn controls are forwarded to the document.

mod texture_loader;

use std::path::Path;

use anyhow::{Context, Result, bail};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::app::App;
use crate::config::SliderConfig;
use crate::dom::Element;
use crate::layout::{Hit, Layout, Rect};
use crate::page::PageBuilder;
use texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 720;
const FPS: u32 = 60;

fn rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

fn size(texture: &Texture2D) -> (f32, f32) {
    (texture.width() as f32, texture.height() as f32)
}

pub fn run(image_dir: &Path, config: SliderConfig) -> Result<()> {
    // Reject selectors the built page could not match before opening a window
    PageBuilder::for_config(0, &config).context("window mode needs class selectors")?;

    let paths = load_sorted_image_paths(image_dir)?;
    info!("Loading {} images from {}", paths.len(), image_dir.display());

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut textures: Vec<Texture2D> = Vec::new();
    for path in &paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!("Skipping image: {:#}", e),
        }
    }
    if textures.is_empty() {
        bail!("no image in {} could be loaded", image_dir.display());
    }

    let document = PageBuilder::for_config(textures.len(), &config)?.build();
    let elements = document.query_selector_all(&config.slide_selector)?;
    let slides: Vec<(Element, Texture2D)> = elements.into_iter().zip(textures).collect();
    let prev = document.query_selector(&config.prev_selector)?.context("previous button missing")?;
    let next = document.query_selector(&config.next_selector)?.context("next button missing")?;
    let active_class = config.active_class.clone();

    let mount = App::mount(&document, config);
    document.finish_loading();
    if !mount.is_ready() {
        bail!("slider failed to start");
    }

    while !rl.window_should_close() {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        let layout = Layout::compute(width, height);
        let visible = slides.iter().find(|(element, _)| element.has_class(&active_class));

        let hit = if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            Some(Hit::Prev)
        } else if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            Some(Hit::Next)
        } else if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            layout.hit(mouse.x, mouse.y, visible.map(|(_, texture)| size(texture)))
        } else {
            None
        };
        match (hit, visible) {
            (Some(Hit::Prev), _) => prev.click(),
            (Some(Hit::Next), _) => next.click(),
            (Some(Hit::Slide), Some((element, _))) => element.click(),
            _ => {}
        }

        // Class lists may have changed while handling input
        let visible = slides.iter().find(|(element, _)| element.has_class(&active_class));

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        if let Some((_, texture)) = visible {
            let (w, h) = size(texture);
            let source = Rectangle::new(0.0, 0.0, w, h);
            let dest = rectangle(layout.slide.fit(w, h));
            d.draw_texture_pro(texture, source, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
        for (rect, label) in [(layout.prev, "<"), (layout.next, ">")] {
            d.draw_rectangle_rec(rectangle(rect), Color::new(255, 255, 255, 48));
            let x = (rect.x + rect.width / 2.0 - 8.0) as i32;
            let y = (rect.y + rect.height / 2.0 - 16.0) as i32;
            d.draw_text(label, x, y, 32, Color::WHITE);
        }
    }

    Ok(())
}
