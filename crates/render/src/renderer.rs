use foundation::color::Rgb;
use foundation::math::Vec2;
use layers::glyphs::GlyphLayerSnapshot;
use layers::legend::{self, LegendSnapshot};
use layers::satellites::{self, SATELLITE_DIAMETER_PX};
use layers::symbology::ContinentColors;
use runtime::frame::Frame;
use scene::selection::Selection;
use scene::table::RiverTable;
use scene::tooltip::Tooltip;

/// Background clear value.
const BACKGROUND: Rgb = Rgb::gray(240);

/// Selected-glyph pulse: `sin(frame_index * RATE) * AMPLITUDE` px of extra
/// diameter. Presentation only; layout positions are unaffected.
const PULSE_RATE: f64 = 0.1;
const PULSE_AMPLITUDE_PX: f64 = 5.0;

/// Highlight ring around the selected glyph: extra diameter and stroke weight.
const HIGHLIGHT_EXTRA_PX: f64 = 10.0;
const HIGHLIGHT_WEIGHT_PX: f64 = 4.0;

/// Selection headline ("River's name: ...") position and size.
const HEADLINE_POS: Vec2 = Vec2 { x: 20.0, y: 20.0 };
const HEADLINE_SIZE_PX: f64 = 32.0;

/// Tooltip box metrics.
const TOOLTIP_FONT_PX: f64 = 14.0;
const TOOLTIP_LINE_ADVANCE_PX: f64 = 16.0;
const TOOLTIP_PADDING_PX: f64 = 10.0;
const TOOLTIP_CORNER_PX: f64 = 5.0;
const TOOLTIP_FILL_ALPHA: f32 = 240.0 / 255.0;

/// Backend-agnostic drawing primitives, one frame's worth.
///
/// This is the capability seam: everything above it (layout, picking,
/// selection) stays testable without a display surface, and a backend only
/// has to interpret these five shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Clear {
        color: Rgb,
    },
    FillCircle {
        center: Vec2,
        diameter: f64,
        color: Rgb,
    },
    StrokeCircle {
        center: Vec2,
        diameter: f64,
        color: Rgb,
        weight_px: f64,
    },
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Rgb,
        alpha: f32,
        corner_radius_px: f64,
    },
    StrokeRect {
        origin: Vec2,
        size: Vec2,
        color: Rgb,
        weight_px: f64,
        corner_radius_px: f64,
    },
    Text {
        pos: Vec2,
        content: String,
        size_px: f64,
        color: Rgb,
        bold: bool,
    },
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderFrame {
    pub commands: Vec<RenderCommand>,
}

/// Borrowed view of everything one frame draws from.
#[derive(Debug, Copy, Clone)]
pub struct ViewInputs<'a> {
    pub table: &'a RiverTable,
    pub glyphs: &'a GlyphLayerSnapshot,
    pub colors: &'a ContinentColors,
    pub selection: &'a Selection,
    pub tooltip: &'a Tooltip,
    pub legend: &'a LegendSnapshot,
}

pub struct Renderer;

impl Renderer {
    /// Collects the full command list for one frame: background, glyphs with
    /// their satellites and selection highlight, legend, selection headline,
    /// and the tooltip box on top.
    pub fn collect(view: ViewInputs<'_>, frame: Frame) -> RenderFrame {
        let mut out = RenderFrame::default();
        out.commands.push(RenderCommand::Clear { color: BACKGROUND });

        for glyph in &view.glyphs.glyphs {
            let Some(record) = view.table.get(glyph.record) else {
                continue;
            };
            let fill = view.colors.color_for(&record.continent).unwrap_or(Rgb::BLACK);

            let selected = view.selection.is_selected(&record.name);
            let mut diameter = glyph.diameter;
            if selected {
                diameter += (frame.index as f64 * PULSE_RATE).sin() * PULSE_AMPLITUDE_PX;
            }

            out.commands.push(RenderCommand::FillCircle {
                center: glyph.center,
                diameter,
                color: fill,
            });

            if record.countries > 0 {
                for pos in
                    satellites::satellite_positions(glyph.center, diameter, record.countries)
                {
                    out.commands.push(RenderCommand::FillCircle {
                        center: pos,
                        diameter: SATELLITE_DIAMETER_PX,
                        color: Rgb::RED,
                    });
                }
            }

            if selected {
                out.commands.push(RenderCommand::StrokeCircle {
                    center: glyph.center,
                    diameter: diameter + HIGHLIGHT_EXTRA_PX,
                    color: Rgb::BLACK,
                    weight_px: HIGHLIGHT_WEIGHT_PX,
                });
            }
        }

        collect_legend(&mut out, view.legend);

        if let Some(name) = view.selection.selected() {
            out.commands.push(RenderCommand::Text {
                pos: HEADLINE_POS,
                content: format!("River's name: {name}"),
                size_px: HEADLINE_SIZE_PX,
                color: Rgb::BLACK,
                bold: true,
            });
        }

        if view.tooltip.visible {
            collect_tooltip(&mut out, view.tooltip);
        }

        out
    }
}

fn collect_legend(out: &mut RenderFrame, legend: &LegendSnapshot) {
    out.commands.push(RenderCommand::Text {
        pos: legend.title_pos,
        content: "Legend".to_string(),
        size_px: legend::TEXT_SIZE_PX,
        color: Rgb::BLACK,
        bold: true,
    });
    out.commands.push(RenderCommand::Text {
        pos: legend.subtitle_pos,
        content: "Continents".to_string(),
        size_px: legend::TEXT_SIZE_PX,
        color: Rgb::BLACK,
        bold: false,
    });

    for entry in &legend.entries {
        out.commands.push(RenderCommand::FillRect {
            origin: entry.swatch_pos,
            size: Vec2::new(legend::SWATCH_SIZE_PX, legend::SWATCH_SIZE_PX),
            color: entry.color,
            alpha: 1.0,
            corner_radius_px: 0.0,
        });
        out.commands.push(RenderCommand::Text {
            pos: entry.label_pos,
            content: entry.label.clone(),
            size_px: legend::TEXT_SIZE_PX,
            color: Rgb::BLACK,
            bold: false,
        });
    }

    out.commands.push(RenderCommand::FillCircle {
        center: legend.marker_center,
        diameter: legend::SWATCH_SIZE_PX,
        color: Rgb::RED,
    });
    out.commands.push(RenderCommand::Text {
        pos: legend.marker_label_pos,
        content: "Countries".to_string(),
        size_px: legend::TEXT_SIZE_PX,
        color: Rgb::BLACK,
        bold: false,
    });
}

fn collect_tooltip(out: &mut RenderFrame, tooltip: &Tooltip) {
    let mut max_width: f64 = 0.0;
    let mut line_count = 0usize;
    for line in tooltip.lines() {
        max_width = max_width.max(estimate_text_width(line, TOOLTIP_FONT_PX));
        line_count += 1;
    }

    let size = Vec2::new(
        max_width + TOOLTIP_PADDING_PX * 2.0,
        line_count as f64 * TOOLTIP_LINE_ADVANCE_PX + TOOLTIP_PADDING_PX * 2.0,
    );

    out.commands.push(RenderCommand::FillRect {
        origin: tooltip.anchor,
        size,
        color: Rgb::WHITE,
        alpha: TOOLTIP_FILL_ALPHA,
        corner_radius_px: TOOLTIP_CORNER_PX,
    });
    out.commands.push(RenderCommand::StrokeRect {
        origin: tooltip.anchor,
        size,
        color: Rgb::BLACK,
        weight_px: 1.0,
        corner_radius_px: TOOLTIP_CORNER_PX,
    });

    for (i, line) in tooltip.lines().enumerate() {
        out.commands.push(RenderCommand::Text {
            pos: tooltip.anchor
                + Vec2::new(
                    TOOLTIP_PADDING_PX,
                    TOOLTIP_PADDING_PX + i as f64 * TOOLTIP_LINE_ADVANCE_PX,
                ),
            content: line.to_string(),
            size_px: TOOLTIP_FONT_PX,
            color: Rgb::BLACK,
            bold: false,
        });
    }
}

/// Monospace-ish width estimate; a real backend would measure properly.
fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    font_size_px * 0.6 * text.chars().count() as f64
}

#[cfg(test)]
mod tests {
    use super::{RenderCommand, Renderer, ViewInputs};
    use foundation::color::Rgb;
    use foundation::math::Vec2;
    use layers::glyphs::{GlyphLayerSnapshot, GlyphLayoutConfig, layout_glyphs};
    use layers::legend::legend_geometry;
    use layers::symbology::ContinentColors;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use runtime::frame::Frame;
    use scene::record::RiverRecord;
    use scene::selection::Selection;
    use scene::table::RiverTable;
    use scene::tooltip::Tooltip;

    struct Fixture {
        table: RiverTable,
        glyphs: GlyphLayerSnapshot,
        colors: ContinentColors,
    }

    fn fixture() -> Fixture {
        let mut table = RiverTable::new();
        table.push(RiverRecord::new("Nile", 6650.0, 11, "Africa"));
        table.push(RiverRecord::new("Amazon", 6400.0, 0, "South America"));

        let mut rng = SmallRng::seed_from_u64(5);
        let colors = ContinentColors::assign(&table, &mut rng);
        let glyphs = layout_glyphs(
            &table,
            1280.0,
            720.0,
            &GlyphLayoutConfig::default(),
            &mut rng,
        );
        Fixture {
            table,
            glyphs,
            colors,
        }
    }

    fn collect(
        f: &Fixture,
        selection: &Selection,
        tooltip: &Tooltip,
        frame: Frame,
    ) -> Vec<RenderCommand> {
        let legend = legend_geometry(&f.colors, 1280.0);
        Renderer::collect(
            ViewInputs {
                table: &f.table,
                glyphs: &f.glyphs,
                colors: &f.colors,
                selection,
                tooltip,
                legend: &legend,
            },
            frame,
        )
        .commands
    }

    #[test]
    fn clears_then_draws_each_glyph_with_its_continent_color() {
        let f = fixture();
        let commands = collect(&f, &Selection::new(), &Tooltip::hidden(), Frame::new(0, 1.0));

        assert!(matches!(commands[0], RenderCommand::Clear { .. }));

        let fills: Vec<(Vec2, Rgb)> = commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::FillCircle {
                    center,
                    color,
                    diameter,
                } if *diameter > 20.0 => Some((*center, *color)),
                _ => None,
            })
            .collect();
        // Two glyph circles (satellites and the legend marker are smaller).
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].1, f.colors.color_for("Africa").unwrap());
        assert_eq!(fills[1].1, f.colors.color_for("South America").unwrap());
    }

    #[test]
    fn country_satellites_are_red_and_counted() {
        let f = fixture();
        let commands = collect(&f, &Selection::new(), &Tooltip::hidden(), Frame::new(0, 1.0));

        let satellites = commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::FillCircle {
                        diameter,
                        color,
                        ..
                    } if *diameter == 12.0 && *color == Rgb::RED
                )
            })
            .count();
        // Nile has 11 countries; Amazon (0) draws none.
        assert_eq!(satellites, 11);
    }

    #[test]
    fn selection_adds_highlight_ring_and_headline() {
        let f = fixture();
        let mut selection = Selection::new();
        selection.apply_click(Some("Nile"));
        let commands = collect(&f, &selection, &Tooltip::hidden(), Frame::new(0, 1.0));

        let ring = commands.iter().find_map(|c| match c {
            RenderCommand::StrokeCircle {
                diameter,
                weight_px,
                ..
            } => Some((*diameter, *weight_px)),
            _ => None,
        });
        // Pulse is sin(0) = 0 at frame 0, so the ring is exactly d + 10.
        let nile_d = f.glyphs.glyphs[0].diameter;
        assert_eq!(ring, Some((nile_d + 10.0, 4.0)));

        assert!(commands.iter().any(|c| matches!(
            c,
            RenderCommand::Text { content, bold: true, .. } if content == "River's name: Nile"
        )));
    }

    #[test]
    fn pulse_follows_the_frame_index() {
        let f = fixture();
        let mut selection = Selection::new();
        selection.apply_click(Some("Nile"));
        let commands = collect(&f, &selection, &Tooltip::hidden(), Frame::new(16, 1.0));

        let nile_d = f.glyphs.glyphs[0].diameter;
        let expected = nile_d + (16.0f64 * 0.1).sin() * 5.0;
        let drawn = commands.iter().find_map(|c| match c {
            RenderCommand::FillCircle { diameter, .. } if *diameter > 20.0 => Some(*diameter),
            _ => None,
        });
        assert!((drawn.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn visible_tooltip_draws_box_outline_and_lines() {
        let f = fixture();
        let record = f.table.get(f.glyphs.glyphs[0].record).unwrap();
        let tooltip = Tooltip::from_hover(Some(record), Vec2::new(200.0, 200.0));
        let commands = collect(&f, &Selection::new(), &tooltip, Frame::new(0, 1.0));

        assert!(commands
            .iter()
            .any(|c| matches!(c, RenderCommand::FillRect { color, .. } if *color == Rgb::WHITE)));
        assert!(commands
            .iter()
            .any(|c| matches!(c, RenderCommand::StrokeRect { weight_px, .. } if *weight_px == 1.0)));
        let tooltip_lines = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Text { size_px, .. } if *size_px == 14.0))
            .count();
        assert_eq!(tooltip_lines, 3);
    }

    #[test]
    fn legend_rows_follow_the_color_table() {
        let f = fixture();
        let commands = collect(&f, &Selection::new(), &Tooltip::hidden(), Frame::new(0, 1.0));

        let swatches = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::FillRect { .. }))
            .count();
        assert_eq!(swatches, f.colors.len());
        assert!(commands.iter().any(|c| matches!(
            c,
            RenderCommand::Text { content, .. } if content == "Countries"
        )));
    }
}
