//! Primitive shape builders.
//!
//! All shapes are built around the local origin with +Y up. Frustums span
//! `[-height/2, height/2]` vertically, matching the usual cylinder convention.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::{Mesh, Vertex};

/// Truncated cone with `radial_segments` sides.
///
/// A `top_radius` of 0 gives a cone, equal radii a cylinder. Caps with a
/// non-positive radius are never emitted; `open_ended` drops both caps.
pub fn frustum(
    top_radius: f32,
    bottom_radius: f32,
    height: f32,
    radial_segments: u32,
    open_ended: bool,
) -> Mesh {
    let segments = radial_segments.max(3);
    let ring = segments + 1;
    let half = height * 0.5;
    let slope = if height > 0.0 {
        (bottom_radius - top_radius) / height
    } else {
        0.0
    };

    let mut mesh = Mesh::with_capacity(
        (ring * 2 + (ring + 1) * 2) as usize,
        (segments * 12) as usize,
    );

    // Side wall: row 0 at the top, row 1 at the bottom
    for row in 0..2 {
        let v = row as f32;
        let radius = top_radius + v * (bottom_radius - top_radius);
        let y = half - v * height;
        for x in 0..ring {
            let u = x as f32 / segments as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let normal = Vec3::new(sin, slope, cos).normalize_or_zero();
            mesh.push_vertex(Vertex::new(
                Vec3::new(radius * sin, y, radius * cos),
                normal,
                [u, 1.0 - v],
            ));
        }
    }
    for x in 0..segments {
        let a = x;
        let b = ring + x;
        let c = ring + x + 1;
        let d = x + 1;
        mesh.push_triangle(a, b, d);
        mesh.push_triangle(b, c, d);
    }

    if !open_ended {
        if top_radius > 0.0 {
            push_cap(&mut mesh, top_radius, half, segments, true);
        }
        if bottom_radius > 0.0 {
            push_cap(&mut mesh, bottom_radius, -half, segments, false);
        }
    }

    mesh
}

fn push_cap(mesh: &mut Mesh, radius: f32, y: f32, segments: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);
    let center = mesh.push_vertex(Vertex::new(Vec3::new(0.0, y, 0.0), normal, [0.5, 0.5]));

    let start = center + 1;
    for x in 0..=segments {
        let theta = x as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.push_vertex(Vertex::new(
            Vec3::new(radius * sin, y, radius * cos),
            normal,
            [cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5],
        ));
    }
    for x in 0..segments {
        let i = start + x;
        if top {
            mesh.push_triangle(i, i + 1, center);
        } else {
            mesh.push_triangle(i + 1, i, center);
        }
    }
}

/// Six-sided column of the given height with its base on `y = 0`
pub fn hex_prism(height: f32) -> Mesh {
    frustum(1.0, 1.0, height, 6, false).translated(Vec3::new(0.0, height * 0.5, 0.0))
}

/// UV sphere centered on the origin
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let row = w + 1;

    let mut mesh = Mesh::with_capacity(((h + 1) * row) as usize, (w * h * 6) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let (sin_v, cos_v) = (v * PI).sin_cos();
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_u, cos_u) = (u * TAU).sin_cos();
            let dir = Vec3::new(-cos_u * sin_v, cos_v, sin_u * sin_v);
            mesh.push_vertex(Vertex::new(dir * radius, dir.normalize_or_zero(), [u, 1.0 - v]));
        }
    }

    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // pole rows collapse to a single triangle
            if iy != 0 {
                mesh.push_triangle(a, b, d);
            }
            if iy != h - 1 {
                mesh.push_triangle(b, c, d);
            }
        }
    }

    mesh
}
