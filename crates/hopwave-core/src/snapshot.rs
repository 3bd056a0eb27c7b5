use crate::color::Color;
use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    RoundedRect {
        rect: Rect,
        corner_radius: f64,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
}

/// Everything one frame of an indicator paints, back to front.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometrySnapshot {
    pub shapes: Vec<Shape>,
}

impl GeometrySnapshot {
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Circle { center, radius, .. } => Some((*center, *radius)),
            Shape::RoundedRect { .. } => None,
        })
    }

    pub fn rounded_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::RoundedRect { rect, .. } => Some(*rect),
            Shape::Circle { .. } => None,
        })
    }
}
