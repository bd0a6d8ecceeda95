//! A [`Surface`] that records a display list and renders it as a ratatui
//! braille [`Canvas`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Context, Line, Painter, Points, Shape},
    },
};
use starweave_core::{Rgba, Surface};

use crate::color::to_terminal;

/// One recorded drawing operation, in surface (y-down) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Rgba,
    },
    Dots {
        coords: Vec<(f64, f64)>,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgba,
    },
}

/// Display list surface of a fixed virtual size.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    width: f64,
    height: f64,
    fill: Rgba,
    stroke: Rgba,
    line_width: f64,
    ops: Vec<DrawOp>,
}

impl CanvasSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            fill: Rgba::BLACK,
            stroke: Rgba::BLACK,
            line_width: 1.0,
            ops: Vec::new(),
        }
    }

    /// Change the virtual size. Recorded operations are dropped.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.ops.clear();
    }

    /// Operations recorded since the last clear.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    fn flip(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x, self.height - y)
    }

    /// Replay the display list into a canvas context.
    ///
    /// `pitch` is the size of one braille dot in surface units; circles no
    /// larger than a dot are plotted as a single dot.
    fn paint(&self, ctx: &mut Context, pitch: f64) {
        for op in &self.ops {
            match op {
                DrawOp::Circle {
                    center,
                    radius,
                    color,
                } => {
                    let (x, y) = self.flip(*center);
                    let color = to_terminal(*color);
                    if *radius <= pitch {
                        ctx.draw(&Points {
                            coords: &[(x, y)],
                            color,
                        });
                    } else {
                        ctx.draw(&Circle {
                            x,
                            y,
                            radius: *radius,
                            color,
                        });
                    }
                }
                DrawOp::Dots {
                    coords,
                    radius,
                    color,
                } => {
                    let color = to_terminal(*color);
                    if *radius <= pitch {
                        ctx.draw(&FlippedPoints {
                            coords,
                            height: self.height,
                            color,
                        });
                    } else {
                        for (x, y) in coords.iter().map(|&c| self.flip(c)) {
                            ctx.draw(&Circle {
                                x,
                                y,
                                radius: *radius,
                                color,
                            });
                        }
                    }
                }
                DrawOp::Line { from, to, color } => {
                    let (x1, y1) = self.flip(*from);
                    let (x2, y2) = self.flip(*to);
                    ctx.draw(&Line::new(x1, y1, x2, y2, to_terminal(*color)));
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn set_fill(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn set_stroke(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ops.push(DrawOp::Circle {
            center: (x, y),
            radius,
            color: self.fill,
        });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push(DrawOp::Line {
            from: (x1, y1),
            to: (x2, y2),
            color: self.stroke,
        });
    }

    fn fill_dots(&mut self, coords: &mut dyn Iterator<Item = (f64, f64)>, radius: f64) {
        let coords: Vec<(f64, f64)> = coords.collect();
        if coords.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Dots {
            coords,
            radius,
            color: self.fill,
        });
    }
}

/// Single dots given in y-down coordinates, flipped as they are plotted.
struct FlippedPoints<'a> {
    coords: &'a [(f64, f64)],
    height: f64,
    color: Color,
}

impl Shape for FlippedPoints<'_> {
    fn draw(&self, painter: &mut Painter) {
        for &(x, y) in self.coords {
            if let Some((x, y)) = painter.get_point(x, self.height - y) {
                painter.paint(x, y, self.color);
            }
        }
    }
}

impl Widget for &CanvasSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        // Braille packs 2 x 4 dots into a cell.
        let pitch = (self.width / (f64::from(area.width) * 2.0))
            .max(self.height / (f64::from(area.height) * 4.0));

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(Color::Black)
            .x_bounds([0.0, self.width])
            .y_bounds([0.0, self.height])
            .paint(|ctx| self.paint(ctx, pitch))
            .render(area, buf);
    }
}
