use core::f32::consts::PI;

use detsvg_core::coords::{Point2, Point3};
use detsvg_core::style::{Fill, Stroke, Transform};
use detsvg_core::svg::Object;
use detsvg_core::{draw, generators, utils};

use crate::proto::{BooleanOperation, Surface, SurfaceKind};

/// Flags controlling one surface render.
///
/// These are per-call, never descriptor state: recursive mask renders pick
/// their own flags independently of the caller's.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// Attempt boolean composition when the descriptor carries one.
    pub draw_boolean: bool,
    /// Drop the descriptor's translation and rotation (scale survives).
    pub force_identity_transform: bool,
    /// Template path only: keep the descriptor's scale on the instance.
    pub apply_scale: bool,
    /// Template path only: zero the instance's translation and rotation.
    pub as_template: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            draw_boolean: true,
            force_identity_transform: false,
            apply_scale: false,
            as_template: false,
        }
    }
}

impl SurfaceOptions {
    /// Defaults with boolean composition suppressed; what mask-member
    /// renders use.
    fn suppress_boolean() -> Self {
        Self { draw_boolean: false, ..Self::default() }
    }
}

/// Renders one surface descriptor into a drawable node.
///
/// `view` projects raw descriptor vertices into the drawing plane. The
/// caller guarantees `id` is unique among siblings; nothing is validated
/// here.
///
/// Rings and boolean subtractions come back as the outer shape plus one
/// mask definition (`<id>_mask`) with a white outer and black inner member,
/// referenced through the node's `mask` attribute. A defined template
/// short-circuits every other path, boolean composition included.
pub fn surface<V>(id: &str, s: &Surface, view: &V, options: SurfaceOptions) -> Object
where
    V: Fn(&[Point3]) -> Vec<Point2>,
{
    if let Some(template) = &s.template_object {
        let mut draw_transform = s.transform.clone();
        if options.as_template {
            draw_transform.translate = (0.0, 0.0);
            draw_transform.rotate = (0.0, 0.0, 0.0);
        }
        if !options.apply_scale {
            draw_transform.scale = (1.0, 1.0);
        }
        return draw::from_template(id, template, s.fill.clone(), s.stroke.clone(), draw_transform);
    }

    let mut draw_transform = if options.force_identity_transform {
        Transform::identity()
    } else {
        s.transform.clone()
    };
    // Scale is never suppressed, even on a forced identity transform.
    draw_transform.scale = s.transform.scale;

    let mut node = match s.kind {
        SurfaceKind::Disc => {
            if !is_full_circle(s.opening) {
                let contour =
                    generators::sector_contour(s.radii.0, s.radii.1, s.opening.0, s.opening.1);
                draw::polygon(id, contour, s.fill.clone(), s.stroke.clone(), draw_transform)
            } else {
                let mut disc = draw::circle(
                    id,
                    Point2::zero(),
                    s.radii.1,
                    s.fill.clone(),
                    s.stroke.clone(),
                    draw_transform,
                );
                if s.radii.0 != 0.0 {
                    attach_ring_mask(id, &mut disc, s, view);
                }
                disc
            }
        }
        SurfaceKind::Polygon => {
            let points = view(&s.vertices);
            draw::polygon(id, points, s.fill.clone(), s.stroke.clone(), draw_transform)
        }
    };

    if options.draw_boolean && s.boolean_operation == BooleanOperation::Subtraction {
        if let Some(inner) = &s.boolean_surface {
            attach_boolean_mask(id, &mut node, s, inner, view);
        }
    }

    node
}

/// Epsilon-tolerant full-circle test.
///
/// Upstream openings come out of trigonometric round-trips, so exact
/// equality with `[-PI, PI]` would misclassify full circles as sectors.
fn is_full_circle(opening: (f32, f32)) -> bool {
    (opening.0 + PI).abs() <= f32::EPSILON && (opening.1 - PI).abs() <= f32::EPSILON
}

/// Renders a mask member with boolean composition off and the standard
/// mask styling: opaque fill, silent stroke, explicit `fill` color
/// attribute (white reveals, black hides).
fn mask_member<V>(id: &str, s: &Surface, view: &V, fill_color: &str) -> Object
where
    V: Fn(&[Point3]) -> Vec<Point2>,
{
    let mut member = surface(id, s, view, SurfaceOptions::suppress_boolean());
    opacify(&mut member, fill_color);
    member
}

fn opacify(member: &mut Object, fill_color: &str) {
    member.fill = Fill::opaque();
    member.stroke = Stroke::none();
    member.set_attribute("fill", fill_color);
}

/// Cuts the hole out of a full-circle disc with a nonzero inner radius.
///
/// Two synthetic full discs — `(0, outer)` white, `(0, inner)` black — land
/// under one mask definition the outer node then references.
fn attach_ring_mask<V>(id: &str, disc: &mut Object, s: &Surface, view: &V)
where
    V: Fn(&[Point3]) -> Vec<Point2>,
{
    let mask_id = format!("{id}_mask");
    log::trace!(
        "ring mask {mask_id}: inner {} outer {}",
        s.radii.0,
        s.radii.1
    );

    let mut synthetic = s.clone();
    synthetic.radii = (0.0, s.radii.1);
    let outer = mask_member(&format!("{id}_mask_surface_outer"), &synthetic, view, "white");

    synthetic.radii = (0.0, s.radii.0);
    let inner = mask_member(&format!("{id}_mask_surface_inner"), &synthetic, view, "black");

    let mut mask = Object::container(mask_id.clone(), "mask");
    mask.fill = Fill::opaque();
    mask.stroke = Stroke::none();
    mask.add_object(outer);
    mask.add_object(inner);

    disc.definitions.push(mask);
    disc.set_attribute("mask", utils::id_to_url(&mask_id));
}

/// Masks this surface with a user-supplied sub-surface (subtraction).
///
/// The outer member is this surface re-rendered with boolean composition
/// off; the inner member is the sub-surface with boolean composition still
/// on, so nested subtractions chain. Unlike the ring path, the mask keeps
/// the outer descriptor's stroke.
fn attach_boolean_mask<V>(id: &str, node: &mut Object, s: &Surface, inner_s: &Surface, view: &V)
where
    V: Fn(&[Point3]) -> Vec<Point2>,
{
    let mask_id = format!("{id}_mask");
    log::trace!("boolean mask {mask_id}");

    let outer = mask_member(&format!("{id}_mask_surface_outer"), s, view, "white");

    let mut inner = surface(
        &format!("{id}_mask_surface_inner"),
        inner_s,
        view,
        SurfaceOptions::default(),
    );
    opacify(&mut inner, "black");

    let mut mask = Object::container(mask_id.clone(), "mask");
    mask.fill = Fill::opaque();
    mask.stroke = s.stroke.clone();
    mask.add_object(outer);
    mask.add_object(inner);

    node.definitions.push(mask);
    node.set_attribute("mask", utils::id_to_url(&mask_id));
}
