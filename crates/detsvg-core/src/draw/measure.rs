use core::f32::consts::{FRAC_PI_2, PI};

use crate::coords::Point2;
use crate::generators;
use crate::style::{Font, Marker, Stroke};
use crate::svg::Object;

use super::{line, marker, polyline, text};

/// Builds a straight measure between two points: the line, a marker at
/// each end pointing outward, and an optional label off the midpoint.
///
/// An empty `label` draws no text. The label sits half a font size off the
/// line along its left normal, so horizontal measures read above the line.
pub fn measure(
    id: impl Into<String>,
    start: Point2,
    end: Point2,
    stroke: Stroke,
    marker_style: Marker,
    label: &str,
    font: Font,
) -> Object {
    let id = id.into();
    let mut m = Object::container(id.clone(), "g");

    let direction = (end.y - start.y).atan2(end.x - start.x);
    m.add_object(line(format!("{id}_line"), start, end, stroke));
    m.add_object(marker(format!("{id}_marker_start"), start, direction + PI, marker_style.clone()));
    m.add_object(marker(format!("{id}_marker_end"), end, direction, marker_style));

    if !label.is_empty() {
        let mid = (start + end) / 2.0;
        let offset = 0.5 * font.size;
        let position =
            Point2::new(mid.x - direction.sin() * offset, mid.y + direction.cos() * offset);
        m.add_object(text(format!("{id}_label"), position, vec![label.to_owned()], font));
    }
    m
}

/// Builds an arc measure of the given radius between two points on the
/// arc: a sampled polyline plus a marker at the arc end, oriented along
/// the travel direction there.
///
/// `start` and `end` are expected on the radius; only their polar angles
/// matter, the arc itself is resampled.
pub fn arc_measure(
    id: impl Into<String>,
    radius: f32,
    start: Point2,
    end: Point2,
    stroke: Stroke,
    marker_style: Marker,
) -> Object {
    let id = id.into();
    let mut m = Object::container(id.clone(), "g");

    let phi_start = start.y.atan2(start.x);
    let phi_end = end.y.atan2(end.x);
    let points = generators::arc_points(radius, phi_start, phi_end);
    m.add_object(polyline(format!("{id}_arc"), points, stroke));

    // Tangent at the end, following the sweep direction.
    let tangent = if phi_end >= phi_start { phi_end + FRAC_PI_2 } else { phi_end - FRAC_PI_2 };
    m.add_object(marker(format!("{id}_marker_end"), end, tangent, marker_style));
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::svg::Shape;

    fn marker_payload(node: &Object) -> (Point2, f32) {
        match node.shape {
            Shape::Marker { position, direction, .. } => (position, direction),
            _ => panic!("expected marker payload"),
        }
    }

    #[test]
    fn plain_measure_is_line_plus_two_markers() {
        let m = measure(
            "m0",
            Point2::new(100.0, 10.0),
            Point2::new(200.0, 10.0),
            Stroke::default(),
            Marker::default(),
            "",
            Font::default(),
        );
        assert_eq!(m.tag, "g");
        let tags: Vec<_> = m.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, ["line", "marker", "marker"]);

        let (start_at, start_dir) = marker_payload(&m.children[1]);
        let (end_at, end_dir) = marker_payload(&m.children[2]);
        assert_eq!(start_at, Point2::new(100.0, 10.0));
        assert_eq!(end_at, Point2::new(200.0, 10.0));
        // Horizontal measure: end marker points along +X, start marker back.
        assert_relative_eq!(end_dir, 0.0);
        assert_relative_eq!(start_dir, PI);
    }

    #[test]
    fn labeled_measure_places_text_off_the_midpoint() {
        let font = Font::new(10.0);
        let m = measure(
            "m1",
            Point2::new(100.0, 10.0),
            Point2::new(200.0, 10.0),
            Stroke::default(),
            Marker::new("|<<"),
            "100 mm",
            font.clone(),
        );
        assert_eq!(m.children.len(), 4);
        match &m.children[3].shape {
            Shape::Text { position, lines, .. } => {
                assert_relative_eq!(position.x, 150.0);
                assert_relative_eq!(position.y, 10.0 + 0.5 * font.size);
                assert_eq!(lines, &["100 mm".to_owned()]);
            }
            _ => panic!("expected text payload"),
        }
    }

    #[test]
    fn arc_measure_samples_the_radius() {
        let r = 75.0_f32;
        let (phi_min, phi_max) = (-0.25_f32, 0.75_f32);
        let start = Point2::new(r * phi_min.cos(), r * phi_min.sin());
        let end = Point2::new(r * phi_max.cos(), r * phi_max.sin());

        let m = arc_measure("m_arc", r, start, end, Stroke::default(), Marker::new("|<<"));
        assert_eq!(m.children.len(), 2);
        assert_eq!(m.children[0].tag, "polyline");

        match &m.children[0].shape {
            Shape::Polyline { points } => {
                for p in points {
                    assert_relative_eq!((p.x * p.x + p.y * p.y).sqrt(), r, epsilon = 1e-3);
                }
                let last = points.last().copied().unwrap();
                assert_relative_eq!(last.x, end.x, epsilon = 1e-3);
                assert_relative_eq!(last.y, end.y, epsilon = 1e-3);
            }
            _ => panic!("expected polyline payload"),
        }

        let (at, dir) = marker_payload(&m.children[1]);
        assert_eq!(at, end);
        // Counterclockwise sweep: the end tangent leads the end angle by 90 degrees.
        assert_relative_eq!(dir, phi_max + FRAC_PI_2, epsilon = 1e-5);
    }
}
