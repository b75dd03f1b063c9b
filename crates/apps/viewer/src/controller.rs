use foundation::math::Vec2;
use formats::viz_config::VizConfig;
use layers::glyphs::{GlyphLayerSnapshot, LayoutWarning, layout_glyphs};
use layers::legend::{LegendSnapshot, legend_geometry};
use layers::symbology::ContinentColors;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use render::renderer::{RenderFrame, Renderer, ViewInputs};
use runtime::event_bus::{Diagnostic, EventBus, Severity};
use runtime::events::InputEvent;
use runtime::frame::Frame;
use scene::glyph::Glyph;
use scene::picking;
use scene::selection::Selection;
use scene::table::RiverTable;
use scene::tooltip::Tooltip;
use tracing::warn;

/// Nominal frame delta; frames advance per processed event, not on a clock.
const NOMINAL_DT_S: f64 = 1.0 / 60.0;

/// The whole application state, single-writer by construction.
///
/// Everything mutable lives here: the session color table (assigned once at
/// construction), the current glyph snapshot (rebuilt on every resize),
/// selection, tooltip, and the injected random source. Event handlers return
/// whether a redraw is due; the caller collects a [`RenderFrame`] when one is.
pub struct Viewer {
    table: RiverTable,
    config: VizConfig,
    colors: ContinentColors,
    glyphs: GlyphLayerSnapshot,
    legend: LegendSnapshot,
    selection: Selection,
    tooltip: Tooltip,
    viewport: Vec2,
    frame: Frame,
    rng: SmallRng,
    events: EventBus,
}

impl Viewer {
    /// Builds the session: assigns continent colors (stable from here on)
    /// and runs the initial layout pass at the given viewport.
    ///
    /// The seed fixes the whole session's random sequence — colors first,
    /// then every collision redraw — so a test can assert exact positions.
    pub fn new(table: RiverTable, config: VizConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let colors = ContinentColors::assign(&table, &mut rng);
        let legend = legend_geometry(&colors, width);

        let mut viewer = Self {
            table,
            config,
            colors,
            glyphs: GlyphLayerSnapshot::default(),
            legend,
            selection: Selection::new(),
            tooltip: Tooltip::hidden(),
            viewport: Vec2::new(width, height),
            frame: Frame::new(0, NOMINAL_DT_S),
            rng,
            events: EventBus::new(),
        };
        viewer.relayout();
        viewer
    }

    pub fn table(&self) -> &RiverTable {
        &self.table
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs.glyphs
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Drains queued operator diagnostics.
    pub fn diagnostics(&mut self) -> Vec<Diagnostic> {
        self.events.drain()
    }

    /// Applies one input event. Returns `true` when the caller should
    /// collect and present a new frame.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let redraw = match event {
            InputEvent::PointerPressed { pos } => self.on_pointer_pressed(pos),
            InputEvent::PointerMoved { pos } => self.on_pointer_moved(pos),
            InputEvent::Resized { width, height } => {
                self.on_resized(width, height);
                true
            }
        };
        if redraw {
            self.frame = self.frame.next();
        }
        redraw
    }

    /// Collects the render command list for the current state.
    pub fn render(&self) -> RenderFrame {
        Renderer::collect(
            ViewInputs {
                table: &self.table,
                glyphs: &self.glyphs,
                colors: &self.colors,
                selection: &self.selection,
                tooltip: &self.tooltip,
                legend: &self.legend,
            },
            self.frame,
        )
    }

    fn on_pointer_pressed(&mut self, pos: Vec2) -> bool {
        let hit = picking::pick_point(&self.glyphs.glyphs, pos);
        let name = hit
            .and_then(|g| self.table.get(g.record))
            .map(|r| r.name.as_str());
        self.selection.apply_click(name)
    }

    fn on_pointer_moved(&mut self, pos: Vec2) -> bool {
        let hit = picking::pick_point(&self.glyphs.glyphs, pos);
        let record = hit.and_then(|g| self.table.get(g.record));
        self.tooltip = Tooltip::from_hover(record, pos);
        // Every move redraws: the tooltip anchor tracks the pointer even
        // while it stays over the same glyph.
        true
    }

    fn on_resized(&mut self, width: f64, height: f64) {
        self.viewport = Vec2::new(width, height);
        // Tooltip state is not retained across layout changes.
        self.tooltip = Tooltip::hidden();
        self.relayout();
    }

    fn relayout(&mut self) {
        let layout = self.config.layout_config(self.viewport.x);
        self.glyphs = layout_glyphs(
            &self.table,
            self.viewport.x,
            self.viewport.y,
            &layout,
            &mut self.rng,
        );
        self.legend = legend_geometry(&self.colors, self.viewport.x);

        for warning in &self.glyphs.warnings {
            let LayoutWarning::DegenerateSpacing {
                col_spacing,
                row_spacing,
            } = warning;
            let message = format!(
                "degenerate spacing: {col_spacing:.1} px columns, {row_spacing:.1} px rows"
            );
            warn!(target: "viewer::layout", "{message}");
            self.events
                .emit(self.frame, Severity::Warning, "layout", message);
        }

        if self.glyphs.glyphs.is_empty() {
            self.events.emit(
                self.frame,
                Severity::Info,
                "layout",
                "no eligible records; nothing to draw",
            );
        }
    }
}
