mod controller;

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use controller::Viewer;
use formats::rivers_csv::load_rivers_csv;
use formats::viz_config::VizConfig;
use runtime::event_bus::Severity;
use runtime::events::InputEvent;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Startup viewport, px. Resize events take over from here.
const DEFAULT_WIDTH: f64 = 1280.0;
const DEFAULT_HEIGHT: f64 = 720.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = real_main() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let dataset_path = env::args().nth(1).unwrap_or_else(|| "data.csv".to_string());

    // A missing or malformed dataset is fatal for the session.
    let table = load_rivers_csv(&dataset_path).map_err(|e| e.to_string())?;
    let config = VizConfig::load_optional("viz.json").map_err(|e| e.to_string())?;

    info!(
        rows = table.len(),
        eligible = table.eligible_count(),
        path = dataset_path.as_str(),
        "dataset loaded"
    );

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut viewer = Viewer::new(table, config, DEFAULT_WIDTH, DEFAULT_HEIGHT, seed);

    // Headless drive: replay the interactions a windowed session would
    // produce, presenting a frame after each event that asks for one.
    let mut script: Vec<InputEvent> = Vec::new();
    if let Some(glyph) = viewer.glyphs().first().copied() {
        script.push(InputEvent::PointerMoved { pos: glyph.center });
        script.push(InputEvent::PointerPressed { pos: glyph.center });
    }
    script.push(InputEvent::Resized {
        width: DEFAULT_WIDTH * 1.5,
        height: DEFAULT_HEIGHT * 1.5,
    });

    for event in script {
        if !viewer.handle(event) {
            continue;
        }
        let frame = viewer.render();
        info!(
            frame = viewer.frame().index,
            commands = frame.commands.len(),
            selected = viewer.selection().selected().unwrap_or("-"),
            tooltip = viewer.tooltip().visible,
            "frame collected"
        );
    }

    for diagnostic in viewer.diagnostics() {
        match diagnostic.severity {
            Severity::Warning | Severity::Error => {
                warn!(kind = diagnostic.kind, "{}", diagnostic.message)
            }
            Severity::Info => info!(kind = diagnostic.kind, "{}", diagnostic.message),
        }
    }

    Ok(())
}
