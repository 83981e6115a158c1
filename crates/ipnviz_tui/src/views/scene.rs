use ipnviz_core::color::Rgb;
use ipnviz_core::render::{DrawCommand, DrawList, Viewport};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line, Points};
use ratatui::widgets::{Block, Borders, Widget};

/// Braille dots per terminal cell.
const DOTS_X: f32 = 2.0;
const DOTS_Y: f32 = 4.0;
/// Splash sizes are authored for a pixel display; a braille dot is much
/// coarser.
const RING_SCALE: f32 = 0.25;
const MIN_VISIBLE_ALPHA: f32 = 0.05;

pub fn to_color(rgb: Rgb, opacity: f32) -> Color {
    let (r, g, b) = rgb.to_u8();
    let fade = |c: u8| (f32::from(c) * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(fade(r), fade(g), fade(b))
}

/// Rasterizes a [`DrawList`] on a braille canvas.
pub struct SceneWidget<'a> {
    draw_list: &'a DrawList,
    title: &'a str,
    show_labels: bool,
}

impl<'a> SceneWidget<'a> {
    pub fn new(draw_list: &'a DrawList) -> Self {
        Self {
            draw_list,
            title: " Scene ",
            show_labels: true,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    pub fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Pixel viewport the draw list should be built for so that one pixel
    /// maps to one braille dot.
    pub fn viewport_for(area: Rect) -> Viewport {
        let inner = Self::inner_area(area);
        Viewport::new(f32::from(inner.width) * DOTS_X, f32::from(inner.height) * DOTS_Y)
    }
}

impl Widget for SceneWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = self
            .draw_list
            .viewport
            .unwrap_or_else(|| Self::viewport_for(area));
        let height = f64::from(viewport.height);
        let flip = |y: f32| height - f64::from(y);
        let commands = &self.draw_list.commands;
        let show_labels = self.show_labels;

        Canvas::default()
            .block(Block::default().borders(Borders::ALL).title(self.title))
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(viewport.width)])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in commands {
                    match command {
                        DrawCommand::Line { from, to, color } => ctx.draw(&Line::new(
                            f64::from(from.x),
                            flip(from.y),
                            f64::from(to.x),
                            flip(to.y),
                            to_color(*color, 1.0),
                        )),
                        DrawCommand::Disc { center, radius, color } => {
                            if *radius <= DOTS_Y {
                                ctx.draw(&Points {
                                    coords: &[(f64::from(center.x), flip(center.y))],
                                    color: to_color(*color, 1.0),
                                });
                            } else {
                                ctx.draw(&Circle {
                                    x: f64::from(center.x),
                                    y: flip(center.y),
                                    radius: f64::from(*radius),
                                    color: to_color(*color, 1.0),
                                });
                            }
                        }
                        DrawCommand::Ring {
                            center,
                            diameter,
                            color,
                            alpha,
                            ..
                        } => {
                            if *alpha >= MIN_VISIBLE_ALPHA && *diameter > 0.0 {
                                ctx.draw(&Circle {
                                    x: f64::from(center.x),
                                    y: flip(center.y),
                                    radius: f64::from(diameter * 0.5 * RING_SCALE),
                                    color: to_color(*color, *alpha),
                                });
                            }
                        }
                        DrawCommand::Label { .. } => {}
                    }
                }

                if !show_labels {
                    return;
                }
                ctx.layer();
                for command in commands {
                    if let DrawCommand::Label {
                        anchor,
                        text,
                        color,
                        opacity,
                        bar,
                    } = command
                    {
                        let mut spans = vec![Span::styled(
                            text.clone(),
                            Style::default().fg(to_color(*color, *opacity)),
                        )];
                        if let Some(bar) = bar {
                            spans.push(Span::styled(
                                format!(" {:>3.0}%", bar.fraction * 100.0),
                                Style::default().fg(to_color(bar.tone.color(), *opacity)),
                            ));
                        }
                        ctx.print(f64::from(anchor.x), flip(anchor.y), TextLine::from(spans));
                    }
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_matches_braille_resolution() {
        let viewport = SceneWidget::viewport_for(Rect::new(0, 0, 42, 12));
        assert_eq!(viewport, Viewport::new(80.0, 40.0));
    }

    #[test]
    fn test_opacity_dims_color() {
        assert_eq!(to_color(Rgb::WHITE, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(to_color(Rgb::GREEN, 1.0), Color::Rgb(0, 255, 0));
    }
}
