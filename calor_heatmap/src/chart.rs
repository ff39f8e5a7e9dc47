// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The heat map model: a validated dataset with its scales, layout and marks.

use calor_charts::{
    AXIS_LABELS, AXIS_TITLES, AxisSpec, AxisStyle, ChartLayout, LabelStyle, SERIES_FILL,
    fill_rect, format_fixed,
};
use calor_core::{Mark, MarkId, TextAnchor};
use calor_data::Dataset;
use kurbo::{Point, Vec2};

use crate::config::{HeatmapConfig, MONTH_LABELS, month_name};
use crate::error::HeatmapError;
use crate::interaction::Tooltip;
use crate::keys::{CellKey, MONTH_LABEL_ID_BASE, MONTHS_TITLE_ID, YEAR_AXIS_ID_BASE};
use crate::layout::HeatmapLayout;
use crate::scales::HeatmapScales;

/// Everything derived from one load.
///
/// Built in one step: either every scale and cell is available or an error is returned.
#[derive(Clone, Debug)]
pub struct HeatmapModel {
    config: HeatmapConfig,
    chart: ChartLayout,
    dataset: Dataset,
    scales: HeatmapScales,
    layout: HeatmapLayout,
}

impl HeatmapModel {
    /// Derives scales and layout for `dataset`.
    pub fn build(dataset: Dataset, config: HeatmapConfig) -> Result<Self, HeatmapError> {
        let chart = ChartLayout::arrange(config.canvas, config.margins);
        let plot = chart.plot_size();
        let scales = HeatmapScales::build(&dataset, plot.width, &config.palette)?;
        let layout = HeatmapLayout::compute(&dataset, &scales, plot, &config);
        tracing::debug!(
            cells = layout.cells().len(),
            cell_width = layout.cell_width(),
            cell_height = layout.cell_height(),
            "laid out heat map"
        );
        Ok(Self {
            config,
            chart,
            dataset,
            scales,
            layout,
        })
    }

    /// Parses a JSON payload and builds the model.
    pub fn from_json_slice(bytes: &[u8], config: HeatmapConfig) -> Result<Self, HeatmapError> {
        let dataset = Dataset::from_json_slice(bytes)?;
        Self::build(dataset, config)
    }

    /// The configuration the model was built with.
    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    /// Canvas and plot rectangles.
    pub fn chart_layout(&self) -> &ChartLayout {
        &self.chart
    }

    /// The source dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Axis and color scales.
    pub fn scales(&self) -> &HeatmapScales {
        &self.scales
    }

    /// Plot-relative geometry.
    pub fn layout(&self) -> &HeatmapLayout {
        &self.layout
    }

    /// Top-left corner of the plot in view coordinates.
    pub fn plot_origin(&self) -> Point {
        self.chart.plot.origin()
    }

    /// The cell under a point in view coordinates.
    pub fn cell_at(&self, point: Point) -> Option<CellKey> {
        self.layout.cell_at(point - self.plot_origin().to_vec2())
    }

    /// Tooltip content of a cell.
    pub fn tooltip(&self, key: CellKey) -> Option<Tooltip> {
        let cell = self.layout.cell(key)?;
        Some(Tooltip {
            key,
            month_name: month_name(key.month)?,
            absolute: format_fixed(cell.value, 3),
            variance: cell.sample.variance,
        })
    }

    /// Every mark of the chart in view coordinates.
    pub fn marks(&self) -> Vec<Mark> {
        let origin = self.plot_origin().to_vec2();
        let mut marks = Vec::with_capacity(self.layout.cells().len() + 64);
        marks.extend(self.cell_marks(origin));
        marks.extend(self.month_marks(origin));
        marks.extend(self.year_axis().marks(self.chart.plot));

        let legend = self.layout.legend().clone().translated(origin.x, origin.y);
        marks.extend(legend.marks());
        marks
    }

    fn cell_marks(&self, origin: Vec2) -> impl Iterator<Item = Mark> + '_ {
        self.layout.cells().iter().map(move |cell| {
            fill_rect(
                cell.key.mark_id(),
                cell.geometry.rect() + origin,
                self.scales.color(cell.value),
                SERIES_FILL,
            )
        })
    }

    fn month_marks(&self, origin: Vec2) -> Vec<Mark> {
        let height = self.layout.cell_height();
        let labels = LabelStyle::new(self.config.label_font_size)
            .with_anchor(TextAnchor::End)
            .with_z_index(AXIS_LABELS);
        let mut out: Vec<Mark> = (0_u8..)
            .zip(MONTH_LABELS)
            .map(|(row, label)| {
                labels.place(
                    MarkId::from_raw(MONTH_LABEL_ID_BASE + u64::from(row)),
                    Point::new(-6.0, f64::from(row) * height + height / 1.5) + origin,
                    label,
                )
            })
            .collect();
        let title = LabelStyle::new(self.config.title_font_size)
            .with_anchor(TextAnchor::Middle)
            .with_angle(-90.0)
            .with_z_index(AXIS_TITLES);
        out.push(title.place(
            MONTHS_TITLE_ID,
            Point::new(-40.0, self.layout.plot_size().height / 2.0) + origin,
            "Months",
        ));
        out
    }

    fn year_axis(&self) -> AxisSpec {
        let extent = self.dataset.extent();
        AxisSpec::bottom(
            YEAR_AXIS_ID_BASE,
            (f64::from(extent.first_year), f64::from(extent.last_year)),
        )
        .with_tick_count(self.config.year_tick_count)
        .with_integer_ticks(true)
        .with_style(
            AxisStyle::default()
                .with_font_sizes(self.config.label_font_size, self.config.title_font_size),
        )
        .with_title("Years")
        .with_title_offset(45.0)
    }
}

#[cfg(test)]
mod tests {
    use calor_charts::LEGEND_SWATCHES;
    use calor_core::{MarkKind, MarkPayload};
    use calor_data::DatasetError;

    use super::*;

    const TWO_SAMPLES: &str = r#"{
        "baseTemperature": 8.0,
        "monthlyVariance": [
            { "year": 2000, "month": 1, "variance": -1.5 },
            { "year": 2001, "month": 1, "variance": 0.5 }
        ]
    }"#;

    fn model() -> HeatmapModel {
        HeatmapModel::from_json_slice(TWO_SAMPLES.as_bytes(), HeatmapConfig::default()).unwrap()
    }

    fn text_of(marks: &[Mark], id: MarkId) -> Option<&str> {
        marks.iter().find(|m| m.id == id).and_then(|m| match &m.payload {
            MarkPayload::Text(t) => Some(t.text.as_str()),
            MarkPayload::Rect(_) => None,
        })
    }

    #[test]
    fn cells_are_offset_by_the_margins() {
        let model = model();
        let marks = model.marks();
        let cell = marks
            .iter()
            .find(|m| m.id == CellKey::new(2001, 1).mark_id())
            .unwrap();
        match &cell.payload {
            MarkPayload::Rect(r) => {
                assert_eq!(r.rect.x0, 80.0 + 405.0);
                assert_eq!(r.rect.y0, 30.0);
                assert_eq!(r.rect.x1, 890.0);
            }
            MarkPayload::Text(_) => panic!("cell should be a rect"),
        }
    }

    #[test]
    fn guides_are_present() {
        let marks = model().marks();
        assert_eq!(text_of(&marks, MarkId::from_raw(MONTH_LABEL_ID_BASE)), Some("Jan"));
        assert_eq!(
            text_of(&marks, MarkId::from_raw(MONTH_LABEL_ID_BASE + 5)),
            Some("June")
        );
        assert_eq!(text_of(&marks, MONTHS_TITLE_ID), Some("Months"));
        assert_eq!(
            text_of(&marks, MarkId::from_raw(YEAR_AXIS_ID_BASE + 9000)),
            Some("Years")
        );
        let swatches = marks
            .iter()
            .filter(|m| m.kind() == MarkKind::Rect && CellKey::from_mark_id(m.id).is_none())
            .filter(|m| m.z_index == LEGEND_SWATCHES)
            .count();
        assert_eq!(swatches, 11);
    }

    #[test]
    fn year_labels_are_integers() {
        let marks = model().marks();
        let labels: Vec<_> = (0..20)
            .filter_map(|i| text_of(&marks, MarkId::from_raw(YEAR_AXIS_ID_BASE + 1000 + i)))
            .collect();
        assert_eq!(labels.first(), Some(&"2000"));
        assert_eq!(labels.last(), Some(&"2001"));
        assert!(labels.iter().all(|l| l.parse::<i32>().is_ok()));
    }

    #[test]
    fn view_hit_testing_removes_the_margins() {
        let model = model();
        assert_eq!(
            model.cell_at(Point::new(80.0, 30.0)),
            Some(CellKey::new(2000, 1))
        );
        assert_eq!(model.cell_at(Point::new(79.0, 30.0)), None);
    }

    #[test]
    fn extreme_years_build_a_model() {
        let model = HeatmapModel::from_json_slice(
            br#"{"baseTemperature": 8.0, "monthlyVariance": [
                {"year": -2147483648, "month": 1, "variance": 0.0},
                {"year": 2147483647, "month": 1, "variance": 1.0}]}"#,
            HeatmapConfig::default(),
        )
        .unwrap();
        assert_eq!(model.layout().cells().len(), 2);
        assert!(!model.marks().is_empty());
    }

    #[test]
    fn malformed_payload_is_reported() {
        let err = HeatmapModel::from_json_slice(
            br#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 2000, "month": 13, "variance": 0.1}]}"#,
            HeatmapConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HeatmapError::Malformed(calor_data::MalformedDatasetError::MonthOutOfRange {
                index: 0,
                month: 13
            })
        ));
    }

    #[test]
    fn empty_payload_is_an_empty_domain() {
        let err = HeatmapModel::from_json_slice(
            br#"{"baseTemperature": 8.0, "monthlyVariance": []}"#,
            HeatmapConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, HeatmapError::EmptyDomain));
        assert!(matches!(
            HeatmapError::from(DatasetError::EmptyDomain),
            HeatmapError::EmptyDomain
        ));
    }
}
