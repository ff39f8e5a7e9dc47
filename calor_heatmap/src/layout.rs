// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot-relative geometry of the cell grid and the legend.
//!
//! Columns are years and rows are months (January on top). Cell width is the plot width
//! divided by the year span, floored to whole pixels, so the grid may leave a small gap at
//! the right edge but cells never overlap. Column `x` comes from the axis domain mapped on
//! `[0, plot_width - width]`, which puts the last year's cell flush with the plot edge.

use calor_charts::{
    LEGEND_LABELS, LabelStyle, LegendItem, LegendRow, ScaleLinear, Size, format_fixed,
};
use calor_data::{Dataset, Sample};
use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::config::HeatmapConfig;
use crate::keys::{CellKey, LEGEND_ID_BASE};
use crate::scales::HeatmapScales;

/// Plot-relative position and size of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellGeometry {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl CellGeometry {
    /// The cell as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Half-open containment: the left and top edges belong to the cell, the right and
    /// bottom edges to its neighbours.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// A positioned, classified sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Identity of the cell.
    pub key: CellKey,
    /// The sample drawn by the cell.
    pub sample: Sample,
    /// Absolute value of the sample.
    pub value: f64,
    /// Color bucket of the value.
    pub bucket: usize,
    /// Plot-relative geometry.
    pub geometry: CellGeometry,
}

/// Geometry of one render pass.
#[derive(Clone, Debug)]
pub struct HeatmapLayout {
    plot: Size,
    cell_width: f64,
    cell_height: f64,
    first_year: i32,
    column_step: f64,
    cells: Vec<Cell>,
    index: HashMap<CellKey, usize>,
    legend: LegendRow,
}

impl HeatmapLayout {
    /// Lays out every sample of `dataset` inside a plot of size `plot`.
    ///
    /// Cells keep the dataset order. When a `(year, month)` pair occurs more than once the
    /// last sample wins, at the position of the first.
    pub fn compute(
        dataset: &Dataset,
        scales: &HeatmapScales,
        plot: Size,
        config: &HeatmapConfig,
    ) -> Self {
        let extent = dataset.extent();
        let cell_width = (plot.width / extent.year_span() as f64).floor().max(0.0);
        let cell_height = plot.height / 12.0;
        let cell_x = cell_x_scale(scales.axis(), plot.width, cell_width);
        let column_step = if extent.last_year > extent.first_year {
            cell_x.range().1 / (f64::from(extent.last_year) - f64::from(extent.first_year))
        } else {
            0.0
        };

        let mut cells: Vec<Cell> = Vec::with_capacity(dataset.len());
        let mut index = HashMap::with_capacity(dataset.len());
        for sample in dataset.samples() {
            let key = CellKey::new(sample.year, sample.month);
            let value = sample.absolute(dataset.base_value());
            let cell = Cell {
                key,
                sample: *sample,
                value,
                bucket: scales.bucket_index(value),
                geometry: CellGeometry {
                    x: cell_x.map(f64::from(sample.year)),
                    y: f64::from(sample.month - 1) * cell_height,
                    width: cell_width,
                    height: cell_height,
                },
            };
            match index.get(&key) {
                Some(&i) => cells[i] = cell,
                None => {
                    index.insert(key, cells.len());
                    cells.push(cell);
                }
            }
        }

        let legend = legend_row(scales, plot, cell_width, cell_height, config);
        Self {
            plot,
            cell_width,
            cell_height,
            first_year: extent.first_year,
            column_step,
            cells,
            index,
            legend,
        }
    }

    /// Plot size the layout was computed for.
    pub fn plot_size(&self) -> Size {
        self.plot
    }

    /// Width of every cell.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Height of every cell.
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Cells in dataset order, one per key.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Looks up a cell by key.
    pub fn cell(&self, key: CellKey) -> Option<&Cell> {
        self.index.get(&key).map(|&i| &self.cells[i])
    }

    /// The cell containing a plot-relative point.
    ///
    /// Row and column are derived from the grid pitch, so this does not scan the cells.
    pub fn cell_at(&self, point: Point) -> Option<CellKey> {
        if !(0.0..self.plot.width).contains(&point.x)
            || !(0.0..self.plot.height).contains(&point.y)
            || self.cell_height <= 0.0
        {
            return None;
        }
        let row = grid_index(point.y / self.cell_height);
        let column = if self.column_step > 0.0 {
            grid_index(point.x / self.column_step)
        } else {
            0
        };
        // Rounding may land one step off; the half-open geometry decides.
        let first_year = i64::from(self.first_year);
        (column.saturating_sub(1)..=column.saturating_add(1))
            .filter_map(|c| i32::try_from(first_year + c).ok())
            .flat_map(|year| {
                (row.saturating_sub(1)..=row.saturating_add(1))
                    .filter_map(move |r| u8::try_from(r + 1).ok().map(|m| CellKey::new(year, m)))
            })
            .filter_map(|key| self.cell(key))
            .find(|cell| cell.geometry.contains(point))
            .map(|cell| cell.key)
    }

    /// The legend row in plot-relative coordinates.
    pub fn legend(&self) -> &LegendRow {
        &self.legend
    }

    /// Swatch rectangles in bucket order, plot-relative.
    pub fn legend_swatches(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.legend.items.len()).map(|i| self.legend.swatch_rect(i))
    }
}

fn legend_row(
    scales: &HeatmapScales,
    plot: Size,
    cell_width: f64,
    cell_height: f64,
    config: &HeatmapConfig,
) -> LegendRow {
    let items = scales
        .legend_boundaries()
        .into_iter()
        .zip(scales.buckets())
        .map(|(boundary, bucket)| {
            LegendItem::solid(format!("≥ {}", format_fixed(boundary, 1)), bucket.color)
        })
        .collect();
    LegendRow::new(
        LEGEND_ID_BASE,
        plot.width,
        plot.height + config.legend_offset,
        items,
    )
    .with_swatch_size(cell_width * 12.0, cell_height / 2.0)
    .with_label_dy(config.legend_label_offset - config.legend_offset + cell_height / 2.0)
    .with_label_style(LabelStyle::new(config.label_font_size).with_z_index(LEGEND_LABELS))
}

#[allow(clippy::cast_possible_truncation, reason = "saturating cast of a bounded ratio")]
fn grid_index(ratio: f64) -> i64 {
    ratio.floor() as i64
}

/// The axis domain on `[0, plot_width - cell_width]`.
fn cell_x_scale(axis: &ScaleLinear, plot_width: f64, cell_width: f64) -> ScaleLinear {
    axis.with_range((0.0, (plot_width - cell_width).max(0.0)))
}
