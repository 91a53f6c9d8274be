//! Headless progress demo
//!
//! Drives a segmented and a continuous bar through a simulated download,
//! feeding progress through a dialog variable, and prints the recorded draw
//! commands as a text strip together with the time-remaining label.

use dear_progress::*;
use std::rc::Rc;
use tracing::info;

const DOWNLOAD_VAR: &str = "download_percent";

/// Renders the filled rects of one paint pass as a 1-character-per-4px strip.
fn strip(rects: &[Rect], wide: i32) -> String {
    let cells = (wide / 4).max(1) as usize;
    let mut out = vec!['.'; cells];
    for rect in rects {
        let from = (rect.x0.max(0) / 4) as usize;
        let to = ((rect.x1.max(0) + 3) / 4) as usize;
        for cell in out.iter_mut().take(to.min(cells)).skip(from) {
            *cell = '#';
        }
    }
    out.into_iter().collect()
}

fn main() {
    dear_progress::logging::init_tracing();

    let recorder = Rc::new(RecordingSurface::new());
    let surface: Rc<dyn Surface> = recorder.clone();
    let scheme = StaticScheme::new()
        .with_color("ProgressBar.FgColor", Color::from_rgba_u32(0x4CAF50FF))
        .with_color("ProgressBar.BgColor", Color::from_rgba_u32(0x202020FF))
        .with_border("ButtonDepressedBorder", "ButtonDepressedBorder");

    let mut widgets: Vec<Box<dyn Paintable>> = Vec::new();
    for class in WIDGET_CLASSES {
        match create_widget(class) {
            Ok(mut widget) => {
                widget.apply_settings(
                    &Properties::new()
                        .with("wide", 160)
                        .with("tall", 16)
                        .with("variable", DOWNLOAD_VAR),
                );
                widget.apply_scheme(&scheme, &surface);
                widgets.push(widget);
            }
            Err(err) => eprintln!("skipping {class}: {err}"),
        }
    }

    let start_time = 0.0_f32;
    for step in 1..=8 {
        let now = step as f32 * 7.5;
        // sample lags behind by a tick
        let last_update = now - 2.5;
        let percent = (last_update * 1.6) as i32;

        let variables = Properties::new().with(DOWNLOAD_VAR, percent);
        let label = construct_time_remaining_string(
            &EnglishLocalizer,
            start_time,
            now,
            percent as f32 / 100.0,
            last_update,
            true,
        )
        .unwrap_or_else(|| "done".to_owned());

        info!(step, percent, "tick");
        println!("t={now:>5.1}s {percent:>3}%  {label}");
        for widget in &mut widgets {
            widget.on_dialog_variables_changed(&variables);
            if widget.panel().needs_repaint() {
                widget.paint_traverse(&*recorder);
                let wide = widget.panel().size().0;
                let rects = recorder.filled_rects();
                // first rect is the background
                let fill = rects.get(1..).unwrap_or_default();
                println!("  {:<22} [{}]", widget.class_name(), strip(fill, wide));
                recorder.take_commands();
            }
        }
    }

    for widget in &widgets {
        let mut settings = Properties::new();
        widget.get_settings(&mut settings);
        println!("{} settings:", widget.class_name());
        for (key, value) in settings.iter() {
            println!("  {key} = {value:?}");
        }
    }
}
