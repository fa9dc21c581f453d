//! Text rendering of the projected completion curve
//!
//! Draws an area chart with eighth-block resolution per row. Historical
//! and projected days are distinguished on the axis line (`━` vs `╌`) and,
//! when color is enabled, by fill color.

use crate::projection::{CurvePhase, CurvePoint};
use colored::*;

/// Partial blocks, indexed by eighths filled
const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const HISTORICAL_AXIS: char = '━';
const PROJECTED_AXIS: char = '╌';

/// Widest a single day may be drawn
const MAX_COLUMN_WIDTH: usize = 3;

/// Chart dimensions and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Plot rows, excluding axis and labels
    pub height: usize,
    /// Maximum plot columns, excluding the y-axis labels
    pub max_width: usize,
    pub color: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: 10,
            max_width: 60,
            color: true,
        }
    }
}

/// Area chart over a completion curve
pub struct CurveChart<'a> {
    points: &'a [CurvePoint],
    total_students: u32,
    options: ChartOptions,
}

impl<'a> CurveChart<'a> {
    pub fn new(points: &'a [CurvePoint], total_students: u32, options: ChartOptions) -> Self {
        Self {
            points,
            total_students,
            options,
        }
    }

    /// Points actually drawn, one per column.
    ///
    /// Long assignments are sampled evenly down to `max_width`; the first
    /// and last day are always kept.
    pub fn columns(&self) -> Vec<&'a CurvePoint> {
        let points = self.points;
        let n = points.len();
        let width = self.options.max_width.max(1);
        if n <= width {
            return points.iter().collect();
        }
        if width == 1 {
            return points.last().into_iter().collect();
        }
        (0..width)
            .map(|col| &points[col * (n - 1) / (width - 1)])
            .collect()
    }

    /// Characters per column
    pub fn column_width(&self) -> usize {
        let n = self.points.len().max(1);
        (self.options.max_width / n).clamp(1, MAX_COLUMN_WIDTH)
    }

    /// Render the chart as lines, top row first
    pub fn render_lines(&self) -> Vec<String> {
        let columns = self.columns();
        if columns.is_empty() {
            return Vec::new();
        }

        let height = self.options.height.max(1);
        let col_width = self.column_width();
        let label_width = self.total_students.to_string().len();
        let levels: Vec<usize> = columns.iter().map(|p| self.eighths(p.students, height)).collect();

        let mut lines = Vec::with_capacity(height + 3);

        for row in (1..=height).rev() {
            let label = if row == height {
                self.total_students.to_string()
            } else if row == (height + 1) / 2 && height >= 4 {
                (self.total_students / 2).to_string()
            } else {
                String::new()
            };

            let mut line = format!("{:>width$} ┤", label, width = label_width);
            let base = (row - 1) * 8;
            for (point, level) in columns.iter().zip(&levels) {
                let fill = level.saturating_sub(base).min(8);
                let cell = BLOCKS[fill].to_string().repeat(col_width);
                line.push_str(&self.paint(&cell, point.phase));
            }
            lines.push(line.trim_end().to_string());
        }

        let mut axis = format!("{:>width$} ┼", 0, width = label_width);
        for point in &columns {
            let ch = match point.phase {
                CurvePhase::Historical => HISTORICAL_AXIS,
                CurvePhase::Projected => PROJECTED_AXIS,
            };
            axis.push_str(&self.paint(&ch.to_string().repeat(col_width), point.phase));
        }
        lines.push(axis);

        let plot_width = columns.len() * col_width;
        let first = columns[0].day.to_string();
        let last = columns[columns.len() - 1].day.to_string();
        let gap = plot_width.saturating_sub(first.len() + last.len());
        let indent = " ".repeat(label_width + 2);
        if columns.len() > 1 {
            lines.push(format!("{}{}{}{}", indent, first, " ".repeat(gap), last));
        } else {
            lines.push(format!("{}{}", indent, first));
        }

        lines.push(format!(
            "{}Days Passed   {} Current  {} Predicted",
            indent,
            self.paint(&HISTORICAL_AXIS.to_string(), CurvePhase::Historical),
            self.paint(&PROJECTED_AXIS.to_string(), CurvePhase::Projected)
        ));

        lines
    }

    /// Render the chart as a single string
    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }

    fn eighths(&self, students: u32, height: usize) -> usize {
        if self.total_students == 0 {
            return 0;
        }
        let ratio = students.min(self.total_students) as f64 / self.total_students as f64;
        (ratio * (height * 8) as f64).round() as usize
    }

    fn paint(&self, text: &str, phase: CurvePhase) -> String {
        if !self.options.color {
            return text.to_string();
        }
        match phase {
            CurvePhase::Historical => text.cyan().to_string(),
            CurvePhase::Projected => text.green().to_string(),
        }
    }
}
