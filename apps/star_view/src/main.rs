// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Terminal star map.
//!
//! Drag the background to pan, scroll to zoom, hover the "Cosmic Engineers"
//! label for its popup. `q` or `Esc` quits.

use clap::Parser;
use log::info;
use pixel_widget::{
    config::ViewConfig,
    geometry::WorldPoint,
    log::{init_log, level_from_str},
    render::{CellText, Color, TermAdapter},
    timer::FrameTimer,
    ui::{Button, Panel, TextBox, TextProvider, TextWithPopup, UIResult},
    view::{Marker, View},
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

const SYSTEM_COLOR: Color = Color::rgb(150, 180, 180);
const WAYPOINT_COLOR: Color = Color::rgb(200, 150, 150);
const STAR_COUNT: usize = 240;

const LORE: &str = "Cosmic Engineers are an ancient race of builders. \
    Nobody has seen one in a thousand years, yet their gates still hold \
    the lanes between the systems open.";

#[derive(Parser, Debug)]
#[command(name = "star_view", about = "pan and zoom a star map in the terminal")]
struct Args {
    /// toml file with view settings
    #[arg(short, long)]
    config: Option<String>,
    /// overrides the log level from the config file
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };
    let level = args.log_level.as_deref().unwrap_or(&config.log.level);
    init_log(level_from_str(level), &config.log.file)?;

    let mut text = CellText::new();
    for f in &config.fonts {
        text.register(f.font, f.modifier);
    }
    let mut adapter = TermAdapter::new(text);

    // the terminal must be restored even when the loop fails
    let result = run(&mut adapter, &config);
    adapter.reset()?;
    result?;
    Ok(())
}

fn run(adapter: &mut TermAdapter, config: &ViewConfig) -> UIResult<()> {
    let (width, height) = adapter.init()?;
    let mut view = View::new(config);
    view.camera_mut()
        .update_screen_size(width as u32, height as u32);

    let recenter = Arc::new(AtomicBool::new(false));
    build_ui(&mut view, adapter.text(), recenter.clone())?;
    let markers = starfield(STAR_COUNT);

    let mut timer = FrameTimer::new(config.frame_rate);
    loop {
        if !view.process_input(adapter)? {
            break;
        }
        if recenter.swap(false, Ordering::Relaxed) {
            view.camera_mut().focus(WorldPoint::new(0.0, 0.0));
            info!("recentered");
        }
        for _ in 0..timer.tick() {
            view.update(timer.delta());
        }
        view.present(adapter, &markers)?;
        adapter.present()?;
        timer.relax();
    }
    Ok(())
}

fn build_ui(view: &mut View, text: &mut dyn TextProvider, recenter: Arc<AtomicBool>) -> UIResult<()> {
    let contracts = Button::new()
        .position(1.0, 1.0, 14.0, 3.0)
        .border(1.0)
        .text(text, "Contracts")?
        .action(move || recenter.store(true, Ordering::Relaxed));
    let factions = Button::new()
        .position(1.0, 5.0, 14.0, 3.0)
        .border(1.0)
        .text(text, "Factions")?
        .action(|| info!("factions pressed"));

    let tools = Panel::new()
        .position(0.0, 0.0, 16.0, 9.0)
        .border(1.0)
        .child(contracts)
        .child(factions);

    let engineers = TextWithPopup::new()
        .position(20.0, 2.0)
        .text(text, "Cosmic Engineers")?
        .popup_box(TextBox::new().max_width(36).max_height(6.0).spacing(1.0, 1.0, 1.0))
        .popup(text, LORE)?;

    let help = TextBox::new()
        .position(40.0, 1.0)
        .max_width(30)
        .spacing(1.0, 1.0, 0.0)
        .text(text, "Drag to pan, scroll to zoom, q to quit.")?;

    let ui = view.ui_mut();
    ui.add(tools);
    ui.add(engineers);
    ui.add(help);
    Ok(())
}

/// Star systems laid out on a sunflower spiral. Every fifth system gets a
/// waypoint halfway to the one before it.
fn starfield(count: usize) -> Vec<Marker> {
    const GOLDEN_ANGLE: f32 = 2.399_963;
    let mut markers = Vec::with_capacity(count * 2);
    let mut previous: Option<WorldPoint> = None;
    for i in 0..count {
        let r = 60.0 * (i as f32).sqrt();
        let a = i as f32 * GOLDEN_ANGLE;
        let p = WorldPoint::new(r * a.cos(), r * a.sin());
        markers.push(Marker {
            point: p,
            color: SYSTEM_COLOR,
        });
        if let Some(q) = previous {
            if i % 5 == 0 {
                markers.push(Marker::new((p.x + q.x) * 0.5, (p.y + q.y) * 0.5, WAYPOINT_COLOR));
            }
        }
        previous = Some(p);
    }
    markers
}
