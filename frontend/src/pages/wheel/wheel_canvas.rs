use shared::spin::segment_span;
use shared::Wheel;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub const CANVAS_SIZE: u32 = 800;

const RIM_MARGIN: f64 = 40.0;
const LABEL_INSET: f64 = 50.0;
const HUB_RADIUS: f64 = 60.0;
const POINTER_COLOR: &str = "#0052CC";
const LABEL_FONT: &str = "Poppins, 'Segoe UI', system-ui, sans-serif";

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Paints every wedge of `wheel` at its current rotation, then the hub and
/// the fixed pointer on top.
pub fn draw_wheel(canvas: &HtmlCanvasElement, wheel: &Wheel) -> Result<(), JsValue> {
    let context = context_2d(canvas)?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = center_x.min(center_y) - RIM_MARGIN;

    context.clear_rect(0.0, 0.0, width, height);

    let count = wheel.segments.len();
    let font_px = if count > 15 { 16 } else { 24 };

    for (index, segment) in wheel.segments.iter().enumerate() {
        let (start_angle, end_angle) = segment_span(index, count, wheel.rotation);

        context.begin_path();
        context.move_to(center_x, center_y);
        context.arc(center_x, center_y, radius, start_angle, end_angle)?;
        context.close_path();
        context.set_fill_style_str(&segment.color);
        context.fill();
        context.set_stroke_style_str("white");
        context.set_line_width(4.0);
        context.stroke();

        context.save();
        context.translate(center_x, center_y)?;
        context.rotate((start_angle + end_angle) / 2.0)?;
        context.set_text_align("right");
        context.set_text_baseline("middle");
        context.set_fill_style_str("white");
        context.set_font(&format!("bold {}px {}", font_px, LABEL_FONT));

        match segment.emoji_size {
            // Sized glyphs are drawn separately, just inside the label.
            Some(size) if !segment.emoji.is_empty() => {
                let text_x = radius - LABEL_INSET;
                context.fill_text(&segment.text, text_x, 0.0)?;
                let text_width = context.measure_text(&segment.text)?.width();
                context.set_font(&format!("{}px {}", size, LABEL_FONT));
                context.fill_text(&segment.emoji, text_x - text_width - 8.0, 0.0)?;
            }
            _ => {
                context.fill_text(&segment.label(), radius - LABEL_INSET, 0.0)?;
            }
        }
        context.restore();
    }

    draw_static_elements(&context, center_x, center_y)
}

fn draw_static_elements(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64) -> Result<(), JsValue> {
    context.begin_path();
    context.arc(center_x, center_y, HUB_RADIUS, 0.0, 2.0 * PI)?;
    context.set_fill_style_str("white");
    context.fill();
    context.set_stroke_style_str(POINTER_COLOR);
    context.set_line_width(6.0);
    context.stroke();

    // Pointer: fixed at the top, tip pointing down into the wheel
    context.set_fill_style_str(POINTER_COLOR);
    context.begin_path();
    context.move_to(center_x - 30.0, 10.0);
    context.line_to(center_x + 30.0, 10.0);
    context.line_to(center_x, 70.0);
    context.close_path();
    context.fill();
    Ok(())
}
