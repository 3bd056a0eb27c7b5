#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The square `center ± radius`, i.e. the box a circle of `radius` fills.
    pub fn around(center: Point, radius: f64) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    pub fn set_edge(&mut self, edge: Edge, value: f64) {
        match edge {
            Edge::Left => self.left = value,
            Edge::Right => self.right = value,
        }
    }
}

/// Centers of `count` cells that split `width` evenly, left to right.
pub fn column_centers(width: f64, count: usize) -> impl Iterator<Item = f64> {
    let cell = if count == 0 { 0.0 } else { width / count as f64 };
    (0..count).map(move |i| cell * (i as f64 + 0.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_around_point() {
        let rect = Rect::around(Point::new(50.0, 20.0), 15.0);
        assert_eq!(rect, Rect::new(35.0, 5.0, 65.0, 35.0));
        assert_eq!(rect.width(), 30.0);
        assert_eq!(rect.height(), 30.0);
    }

    #[test]
    fn test_edges() {
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        rect.set_edge(Edge::Right, 40.0);
        rect.set_edge(Edge::Left, 5.0);
        assert_eq!(rect.edge(Edge::Left), 5.0);
        assert_eq!(rect.edge(Edge::Right), 40.0);
    }

    #[test]
    fn test_column_centers() {
        let centers: Vec<f64> = column_centers(400.0, 4).collect();
        assert_eq!(centers, vec![50.0, 150.0, 250.0, 350.0]);
        assert_eq!(column_centers(100.0, 0).count(), 0);
    }
}
