// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG surface for `calor_demo`.

use std::collections::HashMap;

use calor_core::{MarkId, MarkPayload, MarkSurface, TextAnchor, TextBaseline};
use calor_heatmap::{CellKey, HoverSurface, Tooltip};
use kurbo::{Point, Rect};
use peniko::Brush;

const TOOLTIP_FONT_SIZE: f64 = 12.0;
const TOOLTIP_PADDING: f64 = 6.0;

#[derive(Debug)]
struct TooltipBox {
    lines: Vec<String>,
    at: Point,
    opacity: f64,
}

/// Keeps one SVG element per mark id, plus the hover overlay.
#[derive(Debug)]
pub(crate) struct SvgScene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
    opacity: HashMap<MarkId, f64>,
    tooltip: Option<TooltipBox>,
    view_box: Rect,
}

impl SvgScene {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            marks: HashMap::new(),
            opacity: HashMap::new(),
            tooltip: None,
            view_box,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.marks.len()
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self.view_box;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" font-family="sans-serif">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        let mut entries: Vec<_> = self.marks.iter().collect();
        entries.sort_by_key(|(id, (z, _))| (*z, id.0));

        for (id, (_z, payload)) in entries {
            match payload {
                MarkPayload::Rect(r) => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                    ));
                    write_paint_attr(&mut out, "fill", &r.fill);
                    if let Some(o) = self.opacity.get(id) {
                        out.push_str(&format!(r#" opacity="{o}""#));
                    }
                    out.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                        TextBaseline::Ideographic => "ideographic",
                    };
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    ));
                    if t.angle != 0.0 {
                        out.push_str(&format!(
                            r#" transform="rotate({} {} {})""#,
                            t.angle, t.pos.x, t.pos.y
                        ));
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
            }
        }

        if let Some(tooltip) = &self.tooltip {
            write_tooltip(&mut out, tooltip);
        }

        out.push_str("</svg>\n");
        out
    }
}

impl MarkSurface for SvgScene {
    fn enter(&mut self, id: MarkId, z_index: i32, payload: &MarkPayload) {
        self.marks.insert(id, (z_index, payload.clone()));
    }

    fn update(&mut self, id: MarkId, z_index: i32, payload: &MarkPayload) {
        self.marks.insert(id, (z_index, payload.clone()));
    }

    fn exit(&mut self, id: MarkId) {
        self.marks.remove(&id);
        self.opacity.remove(&id);
    }
}

impl HoverSurface for SvgScene {
    fn show_tooltip(&mut self, tooltip: &Tooltip, at: Point, opacity: f64) {
        self.tooltip = Some(TooltipBox {
            lines: tooltip.to_string().lines().map(str::to_owned).collect(),
            at,
            opacity,
        });
    }

    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    fn set_opacity(&mut self, key: CellKey, opacity: f64) {
        let id = key.mark_id();
        if opacity >= 1.0 {
            self.opacity.remove(&id);
        } else if self.marks.contains_key(&id) {
            self.opacity.insert(id, opacity);
        }
    }
}

fn write_tooltip(out: &mut String, tooltip: &TooltipBox) {
    // Rough box size: ~0.6em per glyph.
    let widest = tooltip
        .lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let line_height = TOOLTIP_FONT_SIZE * 1.3;
    let width = 0.6 * TOOLTIP_FONT_SIZE * widest as f64 + 2.0 * TOOLTIP_PADDING;
    let height = line_height * tooltip.lines.len() as f64 + 2.0 * TOOLTIP_PADDING;
    let Point { x, y } = tooltip.at;

    out.push_str(&format!(r#"<g opacity="{}">"#, tooltip.opacity));
    out.push('\n');
    out.push_str(&format!(
        r##"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="4" fill="#ffffff" stroke="#333333"/>"##
    ));
    out.push('\n');
    for (i, line) in tooltip.lines.iter().enumerate() {
        let baseline = y + TOOLTIP_PADDING + line_height * (i as f64 + 0.8);
        out.push_str(&format!(
            r#"<text x="{}" y="{baseline}" font-size="{TOOLTIP_FONT_SIZE}" text-anchor="middle">{}</text>"#,
            x + width / 2.0,
            escape_xml(line)
        ));
        out.push('\n');
    }
    out.push_str("</g>\n");
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use calor_heatmap::{HeatmapConfig, HeatmapModel, HeatmapView};

    use super::*;

    const JSON: &[u8] = br#"{"baseTemperature": 8.0, "monthlyVariance": [
        {"year": 2000, "month": 1, "variance": -1.5},
        {"year": 2001, "month": 1, "variance": 0.5}]}"#;

    fn rendered() -> (HeatmapView, SvgScene) {
        let model = HeatmapModel::from_json_slice(JSON, HeatmapConfig::default()).unwrap();
        let mut svg = SvgScene::new(model.chart_layout().view);
        let mut view = HeatmapView::new();
        svg.apply_diffs(&view.render(model));
        (view, svg)
    }

    #[test]
    fn renders_cells_with_palette_colors() {
        let (view, svg) = rendered();
        assert_eq!(svg.len(), view.scene().len());
        let out = svg.to_svg_string();
        assert!(out.starts_with("<svg"));
        assert!(out.contains(r##"fill="#4b0082""##));
        assert!(out.contains(r##"fill="#aa1100""##));
        assert!(out.contains(">Months</text>"));
        assert!(out.contains("≥ 0.0"));
    }

    #[test]
    fn hover_dims_one_cell_and_draws_the_tooltip() {
        let (mut view, mut svg) = rendered();
        let key = CellKey::new(2000, 1);
        svg.apply_effects(&view.pointer_enter(key, Point::new(100.0, 100.0)));
        let out = svg.to_svg_string();
        assert!(out.contains(r#"opacity="0.5""#));
        assert!(out.contains("2000 - January"));
        assert!(out.contains("6.500 °C"));

        svg.apply_effects(&view.pointer_leave(key));
        let out = svg.to_svg_string();
        assert!(!out.contains(r#"opacity="0.5""#));
        assert!(!out.contains("2000 - January"));
    }
}
