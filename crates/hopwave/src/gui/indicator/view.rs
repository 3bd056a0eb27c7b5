use cairo::Context;
use hopwave_core::{Color, GeometrySnapshot, Point, Rect, Shape};
use palette::Srgba;
use std::f64::consts::PI;

pub fn draw(cr: &Context, snapshot: &GeometrySnapshot) -> Result<(), cairo::Error> {
    for shape in &snapshot.shapes {
        match *shape {
            Shape::RoundedRect {
                rect,
                corner_radius,
                color,
            } => draw_rounded_rect(cr, rect, corner_radius, color)?,
            Shape::Circle {
                center,
                radius,
                color,
            } => draw_circle(cr, center, radius, color)?,
        }
    }
    Ok(())
}

fn set_color(cr: &Context, color: Color) {
    let (r, g, b, a) = Srgba::from(color).into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn draw_circle(cr: &Context, center: Point, radius: f64, color: Color) -> Result<(), cairo::Error> {
    set_color(cr, color);
    cr.new_sub_path();
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    cr.fill()
}

fn draw_rounded_rect(
    cr: &Context,
    rect: Rect,
    corner_radius: f64,
    color: Color,
) -> Result<(), cairo::Error> {
    // corners can't be rounder than half the shorter side
    let r = corner_radius
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0)
        .max(0.0);

    set_color(cr, color);
    cr.new_sub_path();
    cr.arc(rect.right - r, rect.top + r, r, -PI / 2.0, 0.0);
    cr.arc(rect.right - r, rect.bottom - r, r, 0.0, PI / 2.0);
    cr.arc(rect.left + r, rect.bottom - r, r, PI / 2.0, PI);
    cr.arc(rect.left + r, rect.top + r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
    cr.fill()
}
