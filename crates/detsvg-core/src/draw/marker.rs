use crate::coords::Point2;
use crate::style::Marker;
use crate::svg::{Object, Shape};

/// Places a measure marker at a point, tip pointing along `direction`
/// (radians, counterclockwise from +X).
pub fn marker(id: impl Into<String>, at: Point2, direction: f32, marker: Marker) -> Object {
    let mut o = Object::container(id, "marker");
    o.fill = marker.fill.clone();
    o.stroke = marker.stroke.clone();
    o.shape = Shape::Marker { position: at, direction, marker };
    o
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn marker_node_carries_its_style() {
        let mut style = Marker::new("|<<");
        style.size = 10.0;
        style.stroke.color = Color::rgb(255, 0, 0);

        let m = marker("m0", Point2::new(3.0, 4.0), 0.5, style.clone());
        assert_eq!(m.tag, "marker");
        assert_eq!(m.stroke, style.stroke);
        assert_eq!(m.shape, Shape::Marker { position: Point2::new(3.0, 4.0), direction: 0.5, marker: style });
    }
}
