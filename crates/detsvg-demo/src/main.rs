//! Builds a small endcap + z-r scene and logs what the renderers produced.
//!
//! Usage: `detsvg-demo [eta_max]` — eta lines are drawn at half-unit steps
//! up to `eta_max` (default 4).

use anyhow::{Context, Result};

use detsvg_core::coords::{Point2, Point3};
use detsvg_core::logging::{LoggingConfig, init_logging};
use detsvg_core::draw;
use detsvg_core::style::{Color, Fill, Font, Marker, Stroke, Transform};
use detsvg_core::svg::Object;
use detsvg_display::display::{EtaGroup, SurfaceOptions, eta_lines, surface};
use detsvg_display::proto::Surface;

fn xy_view(points: &[Point3]) -> Vec<Point2> {
    points.iter().map(|p| Point2::new(p.x, p.y)).collect()
}

fn summarize(node: &Object) {
    log::info!(
        "{}: tag {}, {} nodes, {} definitions, {} children",
        node.id,
        node.tag,
        node.node_count(),
        node.definitions.len(),
        node.children.len()
    );
}

fn main() -> Result<()> {
    init_logging(LoggingConfig { env_filter: Some("info".to_owned()) });

    let eta_max: f32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid eta_max {arg:?}"))?,
        None => 4.0,
    };

    // An endcap disc with a beam-pipe hole.
    let mut endcap = Surface::annulus(34.0, 160.0);
    endcap.fill = Fill::new(Color::rgb(0, 100, 150).with_opacity(0.5));
    summarize(&surface("endcap", &endcap, &xy_view, SurfaceOptions::default()));

    // One sensor sector of that endcap.
    let sector = Surface::sector(34.0, 160.0, -0.15, 0.15);
    summarize(&surface("sector", &sector, &xy_view, SurfaceOptions::default()));

    // A rectangular plate with a circular cutout.
    let plate = Surface::polygon(vec![
        Point3::new(-80.0, -40.0, 0.0),
        Point3::new(80.0, -40.0, 0.0),
        Point3::new(80.0, 40.0, 0.0),
        Point3::new(-80.0, 40.0, 0.0),
    ])
    .subtract(Surface::disc(20.0));
    summarize(&surface("plate", &plate, &xy_view, SurfaceOptions::default()));

    // Annotate the endcap's outer diameter.
    summarize(&draw::measure(
        "endcap_diameter",
        Point2::new(-160.0, 170.0),
        Point2::new(160.0, 170.0),
        Stroke::default(),
        Marker::new("|<<"),
        "320 mm",
        Font::new(10.0),
    ));

    // Labeled eta lines over the z-r view.
    let steps = (eta_max / 0.5).floor() as i32;
    let values: Vec<f32> = (-steps..=steps).map(|i| i as f32 * 0.5).collect();
    let grid = EtaGroup::labeled(
        values,
        Stroke::new(Color::rgb(100, 100, 100), 1.0).with_dash(vec![2, 2]),
        Font::new(10.0),
    );
    summarize(&eta_lines("eta_grid", 3000.0, 1000.0, &[grid], Transform::identity()));

    Ok(())
}
