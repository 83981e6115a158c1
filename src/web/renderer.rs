use ipnviz_core::render::{DrawCommand, DrawList, Viewport};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

const BACKGROUND: &str = "#000000";
const LABEL_FONT: &str = "12px sans-serif";
const BAR_WIDTH: f64 = 40.0;
const BAR_HEIGHT: f64 = 4.0;

/// Paints a draw list onto a 2D canvas context.
pub struct WebRenderer {
    width: f64,
    height: f64,
}

impl WebRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d, list: &DrawList) -> Result<(), JsValue> {
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style(&JsValue::from_str(BACKGROUND));
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        for command in &list.commands {
            match command {
                DrawCommand::Line { from, to, color } => {
                    ctx.set_stroke_style(&JsValue::from_str(&color.css_rgba(1.0)));
                    ctx.set_line_width(1.0);
                    ctx.begin_path();
                    ctx.move_to(f64::from(from.x), f64::from(from.y));
                    ctx.line_to(f64::from(to.x), f64::from(to.y));
                    ctx.stroke();
                }
                DrawCommand::Disc { center, radius, color } => {
                    ctx.set_fill_style(&JsValue::from_str(&color.css_rgba(1.0)));
                    ctx.begin_path();
                    ctx.arc(
                        f64::from(center.x),
                        f64::from(center.y),
                        f64::from(*radius),
                        0.0,
                        std::f64::consts::TAU,
                    )?;
                    ctx.fill();
                }
                DrawCommand::Ring {
                    center,
                    diameter,
                    border,
                    color,
                    alpha,
                } => {
                    if *diameter <= 0.0 || *border <= 0.0 {
                        continue;
                    }
                    ctx.set_stroke_style(&JsValue::from_str(&color.css_rgba(*alpha)));
                    ctx.set_line_width(f64::from(*border));
                    ctx.begin_path();
                    ctx.arc(
                        f64::from(center.x),
                        f64::from(center.y),
                        f64::from(diameter * 0.5),
                        0.0,
                        std::f64::consts::TAU,
                    )?;
                    ctx.stroke();
                }
                DrawCommand::Label { .. } => {}
            }
        }

        self.render_labels(ctx, list)
    }

    fn render_labels(&self, ctx: &CanvasRenderingContext2d, list: &DrawList) -> Result<(), JsValue> {
        ctx.set_font(LABEL_FONT);
        for command in &list.commands {
            let DrawCommand::Label {
                anchor,
                text,
                color,
                opacity,
                bar,
            } = command
            else {
                continue;
            };
            let x = f64::from(anchor.x);
            let y = f64::from(anchor.y);

            ctx.set_global_alpha(f64::from(*opacity));
            ctx.set_fill_style(&JsValue::from_str(&color.css_rgba(1.0)));
            ctx.fill_text(text, x, y)?;

            if let Some(bar) = bar {
                let top = y + BAR_HEIGHT;
                ctx.set_fill_style(&JsValue::from_str("rgba(255, 255, 255, 0.2)"));
                ctx.fill_rect(x, top, BAR_WIDTH, BAR_HEIGHT);
                ctx.set_fill_style(&JsValue::from_str(&bar.tone.color().css_rgba(1.0)));
                ctx.fill_rect(x, top, BAR_WIDTH * f64::from(bar.fraction), BAR_HEIGHT);
            }
        }
        ctx.set_global_alpha(1.0);
        Ok(())
    }
}
