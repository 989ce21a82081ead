//! Frame, tick and axis-title rendering.

use trackplot_hist::style::Color;

use crate::canvas::Canvas;
use crate::config::PlotConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::primitives::{LineStyle, TextAnchor, TextBaseline, TextStyle};

/// Stroke the frame border only (used by `Pad::redraw_axis`).
pub(crate) fn stroke_frame(canvas: &mut Canvas, area: &PlotArea) {
    let style = LineStyle::solid(Color::rgb(0, 0, 0), 0.8);
    canvas.line(area.left, area.top, area.right(), area.top, &style);
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), &style);
    canvas.line(area.left, area.top, area.left, area.bottom(), &style);
    canvas.line(area.right(), area.top, area.right(), area.bottom(), &style);
}

/// Draw the frame with inward ticks, tick labels and axis titles.
pub(crate) fn draw_axes(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    config: &PlotConfig,
) {
    let frame_color = Color::rgb(0, 0, 0);
    let tick_line = LineStyle::solid(frame_color, 0.6);
    let minor_line = LineStyle::solid(frame_color, 0.4);
    let tl = config.axes.tick_length;
    let mtl = config.axes.minor_tick_length;

    stroke_frame(canvas, area);

    let x_label_style = TextStyle {
        size: config.font.tick_size,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };
    for (val, label) in &x_axis.ticks {
        let px = x_axis.data_to_pixel(*val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }
        canvas.line(px, area.bottom(), px, area.bottom() - tl, &tick_line);
        if config.axes.show_top_ticks {
            canvas.line(px, area.top, px, area.top + tl, &tick_line);
        }
        canvas.text(px, area.bottom() + 3.0, label, &x_label_style);
    }
    for &val in &x_axis.minor_ticks {
        let px = x_axis.data_to_pixel(val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }
        canvas.line(px, area.bottom(), px, area.bottom() - mtl, &minor_line);
        if config.axes.show_top_ticks {
            canvas.line(px, area.top, px, area.top + mtl, &minor_line);
        }
    }

    let y_label_style = TextStyle {
        size: config.font.tick_size,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    for (val, label) in &y_axis.ticks {
        let py = y_axis.data_to_pixel(*val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        canvas.line(area.left, py, area.left + tl, py, &tick_line);
        if config.axes.show_right_ticks {
            canvas.line(area.right(), py, area.right() - tl, py, &tick_line);
        }
        canvas.text(area.left - 4.0, py, label, &y_label_style);
    }
    for &val in &y_axis.minor_ticks {
        let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        canvas.line(area.left, py, area.left + mtl, py, &minor_line);
        if config.axes.show_right_ticks {
            canvas.line(area.right(), py, area.right() - mtl, py, &minor_line);
        }
    }

    let title_style = TextStyle {
        size: config.font.label_size,
        anchor: TextAnchor::Middle,
        ..Default::default()
    };
    if !x_axis.label.is_empty() {
        let y = area.bottom() + config.font.tick_size + 16.0;
        canvas.text(area.left + area.width / 2.0, y, &x_axis.label, &title_style);
    }
    if !y_axis.label.is_empty() {
        let max_tick_w = y_axis
            .ticks
            .iter()
            .map(|(_, l)| canvas.measure_text(l, &y_label_style).width)
            .fold(0.0_f64, f64::max);
        let x = area.left - max_tick_w - 14.0;
        canvas.text_rotated(x, area.top + area.height / 2.0, &y_axis.label, &title_style, -90.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_render_ticks_and_titles() {
        let mut canvas = Canvas::new(400.0, 300.0);
        let area = PlotArea { left: 60.0, top: 30.0, width: 300.0, height: 230.0 };
        let x = Axis::linear(0.0, 10.0, 5).with_label("p_{T} [GeV]");
        let y = Axis::linear(0.0, 100.0, 5).with_label("Entries");
        draw_axes(&mut canvas, &area, &x, &y, &PlotConfig::default());
        let svg = canvas.to_svg();
        assert!(svg.contains("p_{T} [GeV]"));
        assert!(svg.contains("Entries"));
        assert!(svg.contains("rotate(-90.0"));
        assert!(svg.matches("<line").count() > 10);
    }
}
