/// Parametric mesh construction for the solid catalog
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;

use crate::error::GeometryError;

/// Default angular resolution for cylinder and cone rings.
pub const DEFAULT_RING_SEGMENTS: u32 = 24;
/// Default latitude/longitude resolution for the sphere grid.
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 16;
/// Smallest tessellation that still encloses an area.
pub const MIN_SEGMENTS: u32 = 3;
/// Absolute tolerance used when matching pairwise vertex distances against
/// the expected dodecahedron edge length, in scaled-coordinate units.
pub const EDGE_MATCH_TOLERANCE: f32 = 0.01;

/// Broad family of a solid. Round solids carry no flat faces; renderers
/// fall back to edge-only drawing for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Polyhedron,
    Round,
}

/// The closed catalog of supported solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidKind {
    Cube,
    PrismTri,
    Pyramid,
    Octahedron,
    Dodecahedron,
    Cylinder,
    Cone,
    Sphere,
}

impl SolidKind {
    pub const ALL: [SolidKind; 8] = [
        SolidKind::Cube,
        SolidKind::PrismTri,
        SolidKind::Pyramid,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Cylinder,
        SolidKind::Cone,
        SolidKind::Sphere,
    ];

    pub fn family(&self) -> Family {
        match self {
            SolidKind::Cube
            | SolidKind::PrismTri
            | SolidKind::Pyramid
            | SolidKind::Octahedron
            | SolidKind::Dodecahedron => Family::Polyhedron,
            SolidKind::Cylinder | SolidKind::Cone | SolidKind::Sphere => Family::Round,
        }
    }

    /// Stable identifier used at string boundaries (UI, bindings).
    pub fn name(&self) -> &'static str {
        match self {
            SolidKind::Cube => "cube",
            SolidKind::PrismTri => "prism_tri",
            SolidKind::Pyramid => "pyramid",
            SolidKind::Octahedron => "octahedron",
            SolidKind::Dodecahedron => "dodecahedron",
            SolidKind::Cylinder => "cylinder",
            SolidKind::Cone => "cone",
            SolidKind::Sphere => "sphere",
        }
    }

    /// Kinds stretched along a height axis take a second dimension.
    pub fn needs_height(&self) -> bool {
        matches!(
            self,
            SolidKind::PrismTri | SolidKind::Pyramid | SolidKind::Cylinder | SolidKind::Cone
        )
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolidKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(SolidKind::Cube),
            "prism_tri" => Ok(SolidKind::PrismTri),
            "pyramid" => Ok(SolidKind::Pyramid),
            "octahedron" => Ok(SolidKind::Octahedron),
            "dodecahedron" => Ok(SolidKind::Dodecahedron),
            "cylinder" => Ok(SolidKind::Cylinder),
            "cone" => Ok(SolidKind::Cone),
            "sphere" => Ok(SolidKind::Sphere),
            other => Err(GeometryError::UnsupportedKind(other.to_string())),
        }
    }
}

/// One generated solid instance: vertex positions plus index data.
///
/// Edge pairs and face loops always reference valid vertex indices.
/// Round-family meshes have an empty face list.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<f32>>,
    pub edges: Vec<[usize; 2]>,
    pub faces: Vec<Vec<usize>>,
    pub family: Family,
    pub kind: SolidKind,
}

/// Generate the mesh for `kind`.
///
/// `size1` is the principal dimension (edge length, or radius for the round
/// kinds); `size2` is the height where the kind has one and is rejected as
/// missing otherwise required. `segments` overrides the ring/grid resolution
/// of the round kinds and is ignored for polyhedra.
pub fn generate(
    kind: SolidKind,
    size1: f32,
    size2: Option<f32>,
    segments: Option<u32>,
) -> Result<Mesh, GeometryError> {
    let height = || {
        size2.ok_or_else(|| {
            GeometryError::invalid("size2", format!("required height for kind `{kind}`"))
        })
    };
    match kind {
        SolidKind::Cube => Mesh::cube(size1),
        SolidKind::PrismTri => Mesh::triangular_prism(size1, height()?),
        SolidKind::Pyramid => Mesh::pyramid(size1, height()?),
        SolidKind::Octahedron => Mesh::octahedron(size1),
        SolidKind::Dodecahedron => Mesh::dodecahedron(size1),
        SolidKind::Cylinder => {
            Mesh::cylinder(size1, height()?, segments.unwrap_or(DEFAULT_RING_SEGMENTS))
        }
        SolidKind::Cone => Mesh::cone(size1, height()?, segments.unwrap_or(DEFAULT_RING_SEGMENTS)),
        SolidKind::Sphere => Mesh::sphere(size1, segments.unwrap_or(DEFAULT_SPHERE_SEGMENTS)),
    }
}

impl Mesh {
    /// Axis-aligned cube of edge length `size`, centered at the origin.
    pub fn cube(size: f32) -> Result<Self, GeometryError> {
        let s = positive("size", size)? / 2.0;
        let vertices = vec![
            Point3::new(-s, -s, -s),
            Point3::new(s, -s, -s),
            Point3::new(s, s, -s),
            Point3::new(-s, s, -s),
            Point3::new(-s, -s, s),
            Point3::new(s, -s, s),
            Point3::new(s, s, s),
            Point3::new(-s, s, s),
        ];
        let edges = vec![
            [0, 1], [1, 2], [2, 3], [3, 0], // back ring
            [4, 5], [5, 6], [6, 7], [7, 4], // front ring
            [0, 4], [1, 5], [2, 6], [3, 7], // connectors
        ];
        let faces = vec![
            vec![0, 1, 2, 3],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![2, 3, 7, 6],
            vec![0, 3, 7, 4],
            vec![1, 2, 6, 5],
        ];
        Ok(Self {
            vertices,
            edges,
            faces,
            family: Family::Polyhedron,
            kind: SolidKind::Cube,
        })
    }

    /// Prism with two parallel equilateral-triangle bases of edge `base_size`.
    pub fn triangular_prism(base_size: f32, height: f32) -> Result<Self, GeometryError> {
        let r = positive("base_size", base_size)? / 3.0_f32.sqrt();
        let h = positive("height", height)? / 2.0;
        let mut vertices = Vec::with_capacity(6);
        for level in [-h, h] {
            for i in 0..3 {
                let angle = (i as f32 * 120.0 - 90.0).to_radians();
                vertices.push(Point3::new(r * angle.cos(), level, r * angle.sin()));
            }
        }
        let edges = vec![
            [0, 1], [1, 2], [2, 0],
            [3, 4], [4, 5], [5, 3],
            [0, 3], [1, 4], [2, 5],
        ];
        let faces = vec![
            vec![0, 1, 2],
            vec![3, 5, 4],
            vec![0, 3, 4, 1],
            vec![1, 4, 5, 2],
            vec![2, 5, 3, 0],
        ];
        Ok(Self {
            vertices,
            edges,
            faces,
            family: Family::Polyhedron,
            kind: SolidKind::PrismTri,
        })
    }

    /// Square pyramid. The base sits at `+height/2` and the apex at
    /// `-height/2`; downstream rotation must preserve that orientation.
    pub fn pyramid(base_size: f32, height: f32) -> Result<Self, GeometryError> {
        let s = positive("base_size", base_size)? / 2.0;
        let h = positive("height", height)? / 2.0;
        let vertices = vec![
            Point3::new(-s, h, -s),
            Point3::new(s, h, -s),
            Point3::new(s, h, s),
            Point3::new(-s, h, s),
            Point3::new(0.0, -h, 0.0),
        ];
        let edges = vec![
            [0, 1], [1, 2], [2, 3], [3, 0],
            [0, 4], [1, 4], [2, 4], [3, 4],
        ];
        let faces = vec![
            vec![0, 1, 2, 3],
            vec![0, 1, 4],
            vec![1, 2, 4],
            vec![2, 3, 4],
            vec![3, 0, 4],
        ];
        Ok(Self {
            vertices,
            edges,
            faces,
            family: Family::Polyhedron,
            kind: SolidKind::Pyramid,
        })
    }

    /// Regular octahedron: one vertex on each semi-axis at radius `size/1.5`.
    pub fn octahedron(size: f32) -> Result<Self, GeometryError> {
        let r = positive("size", size)? / 1.5;
        let vertices = vec![
            Point3::new(r, 0.0, 0.0),
            Point3::new(-r, 0.0, 0.0),
            Point3::new(0.0, r, 0.0),
            Point3::new(0.0, -r, 0.0),
            Point3::new(0.0, 0.0, r),
            Point3::new(0.0, 0.0, -r),
        ];
        let edges = vec![
            [0, 2], [0, 3], [0, 4], [0, 5],
            [1, 2], [1, 3], [1, 4], [1, 5],
            [2, 4], [4, 3], [3, 5], [5, 2],
        ];
        // Each face joins one vertex per axis; the two omitted vertices are
        // the mutual opposites of the three chosen ones.
        let faces = vec![
            vec![0, 2, 4],
            vec![0, 4, 3],
            vec![0, 3, 5],
            vec![0, 5, 2],
            vec![1, 2, 5],
            vec![1, 5, 3],
            vec![1, 3, 4],
            vec![1, 4, 2],
        ];
        Ok(Self {
            vertices,
            edges,
            faces,
            family: Family::Polyhedron,
            kind: SolidKind::Octahedron,
        })
    }

    /// Regular dodecahedron from the classic golden-ratio construction.
    ///
    /// Edges are not enumerated: every vertex pair whose distance matches the
    /// expected edge length `2s/phi` (within [`EDGE_MATCH_TOLERANCE`]) is
    /// connected, which yields exactly 30 edges for a regular solid. Faces
    /// are left empty; pentagonal face loops are not derived.
    pub fn dodecahedron(size: f32) -> Result<Self, GeometryError> {
        let s = positive("size", size)? * 0.4;
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;

        let mut vertices = Vec::with_capacity(20);
        for x in [-1.0_f32, 1.0] {
            for y in [-1.0_f32, 1.0] {
                for z in [-1.0_f32, 1.0] {
                    vertices.push(Point3::new(x * s, y * s, z * s));
                }
            }
        }
        for i in [-1.0_f32, 1.0] {
            for j in [-1.0_f32, 1.0] {
                vertices.push(Point3::new(0.0, i * s * phi, j * s / phi));
            }
        }
        for i in [-1.0_f32, 1.0] {
            for j in [-1.0_f32, 1.0] {
                vertices.push(Point3::new(i * s / phi, 0.0, j * s * phi));
            }
        }
        for i in [-1.0_f32, 1.0] {
            for j in [-1.0_f32, 1.0] {
                vertices.push(Point3::new(i * s * phi, j * s / phi, 0.0));
            }
        }

        let edge_length = 2.0 * s / phi;
        let mut edges = Vec::new();
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                let dist = (vertices[i] - vertices[j]).norm();
                if (dist - edge_length).abs() < EDGE_MATCH_TOLERANCE {
                    edges.push([i, j]);
                }
            }
        }

        Ok(Self {
            vertices,
            edges,
            faces: Vec::new(),
            family: Family::Polyhedron,
            kind: SolidKind::Dodecahedron,
        })
    }

    /// Cylinder as two vertex rings. Only every 4th vertical rib is emitted,
    /// a deliberate visual simplification for wireframe display.
    pub fn cylinder(radius: f32, height: f32, segments: u32) -> Result<Self, GeometryError> {
        let r = positive("radius", radius)?;
        let h = positive("height", height)? / 2.0;
        let segments = min_segments(segments)? as usize;

        let mut vertices = Vec::with_capacity(segments * 2);
        for i in 0..segments {
            let theta = i as f32 / segments as f32 * TAU;
            vertices.push(Point3::new(theta.cos() * r, -h, theta.sin() * r));
            vertices.push(Point3::new(theta.cos() * r, h, theta.sin() * r));
        }

        let mut edges = Vec::new();
        for i in 0..segments {
            let top_cur = i * 2;
            let top_next = ((i + 1) % segments) * 2;
            let bot_cur = i * 2 + 1;
            let bot_next = ((i + 1) % segments) * 2 + 1;
            edges.push([top_cur, top_next]);
            edges.push([bot_cur, bot_next]);
            if i % 4 == 0 {
                edges.push([top_cur, bot_cur]);
            }
        }

        Ok(Self {
            vertices,
            edges,
            faces: Vec::new(),
            family: Family::Round,
            kind: SolidKind::Cylinder,
        })
    }

    /// Cone: apex at vertex 0, one base ring, sparse apex ribs (every 4th).
    pub fn cone(radius: f32, height: f32, segments: u32) -> Result<Self, GeometryError> {
        let r = positive("radius", radius)?;
        let h = positive("height", height)? / 2.0;
        let segments = min_segments(segments)? as usize;

        let mut vertices = Vec::with_capacity(segments + 1);
        vertices.push(Point3::new(0.0, -h, 0.0));
        for i in 0..segments {
            let theta = i as f32 / segments as f32 * TAU;
            vertices.push(Point3::new(theta.cos() * r, h, theta.sin() * r));
        }

        let mut edges = Vec::new();
        for i in 1..=segments {
            let next = (i % segments) + 1;
            edges.push([i, next]);
            if i % 4 == 0 {
                edges.push([0, i]);
            }
        }

        Ok(Self {
            vertices,
            edges,
            faces: Vec::new(),
            family: Family::Round,
            kind: SolidKind::Cone,
        })
    }

    /// Sphere as a latitude/longitude grid of `(segments+1)^2` vertices.
    ///
    /// The grid is not seam-wrapped: longitude edges stop at each ring's
    /// wrap boundary (the first and last column coincide geometrically).
    pub fn sphere(radius: f32, segments: u32) -> Result<Self, GeometryError> {
        let r = positive("radius", radius)?;
        let segments = min_segments(segments)? as usize;

        let mut vertices = Vec::with_capacity((segments + 1) * (segments + 1));
        for lat in 0..=segments {
            let theta = lat as f32 * PI / segments as f32;
            for lon in 0..=segments {
                let phi = lon as f32 * TAU / segments as f32;
                vertices.push(Point3::new(
                    r * theta.sin() * phi.cos(),
                    r * theta.cos(),
                    r * theta.sin() * phi.sin(),
                ));
            }
        }

        let mut edges = Vec::new();
        for i in 0..vertices.len() {
            if i + 1 < vertices.len() && (i + 1) % (segments + 1) != 0 {
                edges.push([i, i + 1]);
            }
            if i + segments + 1 < vertices.len() {
                edges.push([i, i + segments + 1]);
            }
        }

        Ok(Self {
            vertices,
            edges,
            faces: Vec::new(),
            family: Family::Round,
            kind: SolidKind::Sphere,
        })
    }
}

fn positive(name: &'static str, value: f32) -> Result<f32, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid(
            name,
            format!("must be a positive finite number, got {value}"),
        ))
    }
}

fn min_segments(segments: u32) -> Result<u32, GeometryError> {
    if segments >= MIN_SEGMENTS {
        Ok(segments)
    } else {
        Err(GeometryError::invalid(
            "segments",
            format!("must be at least {MIN_SEGMENTS}, got {segments}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(kind: SolidKind) -> Mesh {
        generate(kind, 2.0, Some(3.0), None).unwrap()
    }

    fn assert_indices_valid(mesh: &Mesh) {
        for edge in &mesh.edges {
            assert!(edge[0] < mesh.vertices.len());
            assert!(edge[1] < mesh.vertices.len());
        }
        for face in &mesh.faces {
            for &idx in face {
                assert!(idx < mesh.vertices.len());
            }
        }
    }

    #[test]
    fn test_all_kinds_have_valid_indices() {
        for kind in SolidKind::ALL {
            let mesh = gen(kind);
            assert_eq!(mesh.kind, kind);
            assert_eq!(mesh.family, kind.family());
            assert_indices_valid(&mesh);
        }
    }

    #[test]
    fn test_cube_counts_and_exact_vertices() {
        let mesh = Mesh::cube(2.0).unwrap();
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.edges.len(), 12);
        assert_eq!(mesh.faces.len(), 6);

        // All eight sign combinations of (+-1, +-1, +-1), exactly.
        for x in [-1.0_f32, 1.0] {
            for y in [-1.0_f32, 1.0] {
                for z in [-1.0_f32, 1.0] {
                    assert!(
                        mesh.vertices.contains(&Point3::new(x, y, z)),
                        "missing corner ({x}, {y}, {z})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_prism_counts() {
        let mesh = Mesh::triangular_prism(2.0, 3.0).unwrap();
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.edges.len(), 9);
        assert_eq!(mesh.faces.len(), 5);
        // Both triangle rings sit on the circumradius base/sqrt(3).
        let r = 2.0 / 3.0_f32.sqrt();
        for v in &mesh.vertices {
            let radial = (v.x * v.x + v.z * v.z).sqrt();
            assert!((radial - r).abs() < 1e-5);
            assert!((v.y.abs() - 1.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_pyramid_orientation() {
        let mesh = Mesh::pyramid(2.0, 4.0).unwrap();
        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.edges.len(), 8);
        assert_eq!(mesh.faces.len(), 5);
        // Base at +h/2, apex at -h/2.
        for v in &mesh.vertices[..4] {
            assert_eq!(v.y, 2.0);
        }
        assert_eq!(mesh.vertices[4], Point3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn test_octahedron_counts() {
        let mesh = Mesh::octahedron(1.5).unwrap();
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.edges.len(), 12);
        assert_eq!(mesh.faces.len(), 8);
        for v in &mesh.vertices {
            assert!(((v - Point3::origin()).norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_dodecahedron_derives_thirty_edges() {
        for size in [0.5, 1.0, 1.5, 3.0] {
            let mesh = Mesh::dodecahedron(size).unwrap();
            assert_eq!(mesh.vertices.len(), 20);
            assert_eq!(mesh.edges.len(), 30, "size {size}");
            assert!(mesh.faces.is_empty());
        }
    }

    #[test]
    fn test_dodecahedron_edges_all_same_length() {
        let mesh = Mesh::dodecahedron(1.0).unwrap();
        let s = 0.4;
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let expected = 2.0 * s / phi;
        for &[i, j] in &mesh.edges {
            let dist = (mesh.vertices[i] - mesh.vertices[j]).norm();
            assert!((dist - expected).abs() < EDGE_MATCH_TOLERANCE);
        }
    }

    #[test]
    fn test_cylinder_sparse_ribs() {
        let mesh = Mesh::cylinder(1.0, 2.0, 24).unwrap();
        assert_eq!(mesh.vertices.len(), 48);
        // 24 top ring + 24 bottom ring + every-4th rib (24 / 4).
        assert_eq!(mesh.edges.len(), 24 + 24 + 6);
        assert!(mesh.faces.is_empty());
        assert_eq!(mesh.family, Family::Round);
    }

    #[test]
    fn test_cone_apex_and_ribs() {
        let mesh = Mesh::cone(1.0, 2.0, 24).unwrap();
        assert_eq!(mesh.vertices.len(), 25);
        assert_eq!(mesh.vertices[0], Point3::new(0.0, -1.0, 0.0));
        // Base ring closes on itself; ribs at indices 4, 8, ..., 24.
        assert_eq!(mesh.edges.len(), 24 + 6);
        assert!(mesh.edges.contains(&[0, 4]));
        assert!(!mesh.edges.contains(&[0, 3]));
    }

    #[test]
    fn test_sphere_grid() {
        let segments = 16;
        let mesh = Mesh::sphere(1.0, segments as u32).unwrap();
        assert_eq!(mesh.vertices.len(), (segments + 1) * (segments + 1));
        assert!(mesh.faces.is_empty());
        for v in &mesh.vertices {
            assert!(((v - Point3::origin()).norm() - 1.0).abs() < 1e-5);
        }
        // No longitude edge crosses a ring's wrap boundary.
        for &[i, j] in &mesh.edges {
            if j - i == 1 {
                assert_ne!((i + 1) % (segments + 1), 0);
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        for kind in SolidKind::ALL {
            let a = generate(kind, 1.5, Some(2.0), None).unwrap();
            let b = generate(kind, 1.5, Some(2.0), None).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = Mesh::cube(bad).unwrap_err();
            assert!(matches!(
                err,
                GeometryError::InvalidParameter { name: "size", .. }
            ));
        }
        assert!(Mesh::cylinder(1.0, -2.0, 24).is_err());
    }

    #[test]
    fn test_rejects_too_few_segments() {
        let err = Mesh::sphere(1.0, 2).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidParameter {
                name: "segments",
                ..
            }
        ));
        assert!(Mesh::sphere(1.0, 3).is_ok());
    }

    #[test]
    fn test_generate_requires_height_where_needed() {
        for kind in SolidKind::ALL {
            let result = generate(kind, 2.0, None, None);
            if kind.needs_height() {
                assert!(matches!(
                    result,
                    Err(GeometryError::InvalidParameter { name: "size2", .. })
                ));
            } else {
                assert!(result.is_ok());
            }
        }
    }

    #[test]
    fn test_kind_round_trips_through_names() {
        for kind in SolidKind::ALL {
            assert_eq!(kind.name().parse::<SolidKind>().unwrap(), kind);
        }
        assert!(matches!(
            "icosahedron".parse::<SolidKind>(),
            Err(GeometryError::UnsupportedKind(_))
        ));
    }
}
