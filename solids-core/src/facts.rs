/// Per-solid reference data: element counts, formulas, computed measures
///
/// Pure data plus arithmetic, consumed by front ends for info overlays.
use std::f32::consts::PI;

use crate::solid::SolidKind;

/// Vertex/edge/face counts as displayed. Face counts are display text
/// because round solids count curved surfaces (cylinder shows `3*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementCounts {
    pub vertices: u32,
    pub edges: u32,
    pub faces: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub symbol: char,
    pub text: &'static str,
}

/// Everything an info panel shows for one solid at the given dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidFacts {
    pub title: &'static str,
    pub description: &'static str,
    pub elements: ElementCounts,
    pub volume_formula: &'static str,
    pub area_formula: &'static str,
    pub volume: f32,
    pub area: f32,
    pub legend: &'static [LegendEntry],
    pub dimension_labels: &'static [&'static str],
}

impl SolidFacts {
    /// Facts for `kind` with principal dimension `d1` and height `d2`
    /// (ignored by single-dimension kinds).
    ///
    /// Round kinds interpret `d1` the way the visualizer's sliders do:
    /// diameter for cylinder/cone, overall size (`radius * 1.5`) for the
    /// sphere.
    pub fn for_solid(kind: SolidKind, d1: f32, d2: f32) -> Self {
        match kind {
            SolidKind::Cube => Self {
                title: "Cube",
                description: "Regular polyhedron with 6 square faces.",
                elements: counts(8, 12, "6"),
                volume_formula: "V = l^3",
                area_formula: "A = 6l^2",
                volume: d1.powi(3),
                area: 6.0 * d1.powi(2),
                legend: &[LegendEntry { symbol: 'l', text: "Edge" }],
                dimension_labels: &["Edge"],
            },
            SolidKind::PrismTri => {
                let base_area = 3.0_f32.sqrt() / 4.0 * d1.powi(2);
                Self {
                    title: "Triangular Prism",
                    description: "Prism with parallel triangular bases.",
                    elements: counts(6, 9, "5"),
                    volume_formula: "V = Ab * h",
                    area_formula: "A = 2Ab + 3lh",
                    volume: base_area * d2,
                    area: 2.0 * base_area + 3.0 * d1 * d2,
                    legend: &[
                        LegendEntry { symbol: 'l', text: "Base" },
                        LegendEntry { symbol: 'h', text: "Height" },
                    ],
                    dimension_labels: &["Base", "Height"],
                }
            }
            SolidKind::Pyramid => {
                let slant = ((d1 / 2.0).powi(2) + d2.powi(2)).sqrt();
                let base_area = d1 * d1;
                Self {
                    title: "Square Pyramid",
                    description: "Square base and triangular lateral faces.",
                    elements: counts(5, 8, "5"),
                    volume_formula: "V = (l^2 * h) / 3",
                    area_formula: "A = l^2 + 2lg",
                    volume: base_area * d2 / 3.0,
                    area: base_area + 4.0 * (d1 * slant / 2.0),
                    legend: &[
                        LegendEntry { symbol: 'h', text: "Height" },
                        LegendEntry { symbol: 'l', text: "Base" },
                        LegendEntry { symbol: 'g', text: "Slant height" },
                    ],
                    dimension_labels: &["Base", "Height"],
                }
            }
            SolidKind::Octahedron => Self {
                title: "Regular Octahedron",
                description: "A Platonic solid with 8 triangular faces.",
                elements: counts(6, 12, "8"),
                volume_formula: "V = (sqrt(2)/3) * a^3",
                area_formula: "A = 2*sqrt(3) * a^2",
                volume: 2.0_f32.sqrt() / 3.0 * d1.powi(3),
                area: 2.0 * 3.0_f32.sqrt() * d1.powi(2),
                legend: &[LegendEntry { symbol: 'a', text: "Edge" }],
                dimension_labels: &["Edge"],
            },
            SolidKind::Dodecahedron => Self {
                title: "Dodecahedron",
                description: "Platonic solid with 12 pentagonal faces.",
                elements: counts(20, 30, "12"),
                volume_formula: "V ~ 7.66 * a^3",
                area_formula: "A ~ 20.65 * a^2",
                volume: 7.663 * d1.powi(3),
                area: 20.646 * d1.powi(2),
                legend: &[LegendEntry { symbol: 'a', text: "Edge" }],
                dimension_labels: &["Edge"],
            },
            SolidKind::Cylinder => {
                let r = d1 / 2.0;
                Self {
                    title: "Cylinder",
                    description: "Parallel, congruent circular bases.",
                    elements: counts(0, 0, "3*"),
                    volume_formula: "V = pi * r^2 * h",
                    area_formula: "A = 2*pi*r(r + h)",
                    volume: PI * r.powi(2) * d2,
                    area: 2.0 * PI * r * (r + d2),
                    legend: &[
                        LegendEntry { symbol: 'r', text: "Radius" },
                        LegendEntry { symbol: 'h', text: "Height" },
                    ],
                    dimension_labels: &["Diameter", "Height"],
                }
            }
            SolidKind::Cone => {
                let r = d1 / 2.0;
                let slant = (r.powi(2) + d2.powi(2)).sqrt();
                Self {
                    title: "Cone",
                    description: "Circular base and a single apex.",
                    elements: counts(1, 0, "2*"),
                    volume_formula: "V = (pi*r^2*h) / 3",
                    area_formula: "A = pi*r(r + g)",
                    volume: PI * r.powi(2) * d2 / 3.0,
                    area: PI * r * (r + slant),
                    legend: &[
                        LegendEntry { symbol: 'r', text: "Radius" },
                        LegendEntry { symbol: 'h', text: "Height" },
                        LegendEntry { symbol: 'g', text: "Slant height" },
                    ],
                    dimension_labels: &["Diameter", "Height"],
                }
            }
            SolidKind::Sphere => {
                let r = d1 / 1.5;
                Self {
                    title: "Sphere",
                    description: "All points equidistant from the center.",
                    elements: counts(0, 0, "1"),
                    volume_formula: "V = (4/3)*pi*r^3",
                    area_formula: "A = 4*pi*r^2",
                    volume: 4.0 / 3.0 * PI * r.powi(3),
                    area: 4.0 * PI * r.powi(2),
                    legend: &[LegendEntry { symbol: 'r', text: "Radius" }],
                    dimension_labels: &["Size"],
                }
            }
        }
    }
}

fn counts(vertices: u32, edges: u32, faces: &'static str) -> ElementCounts {
    ElementCounts {
        vertices,
        edges,
        faces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_measures() {
        let facts = SolidFacts::for_solid(SolidKind::Cube, 2.0, 0.0);
        assert_eq!(facts.volume, 8.0);
        assert_eq!(facts.area, 24.0);
        assert_eq!(facts.elements.vertices, 8);
        assert_eq!(facts.elements.faces, "6");
    }

    #[test]
    fn test_pyramid_uses_slant_height() {
        // Base 2, height 1.5: slant = sqrt(1 + 2.25) ~ 1.803
        let facts = SolidFacts::for_solid(SolidKind::Pyramid, 2.0, 1.5);
        assert!((facts.volume - 2.0).abs() < 1e-5);
        let slant = (1.0_f32 + 2.25).sqrt();
        assert!((facts.area - (4.0 + 4.0 * slant)).abs() < 1e-4);
    }

    #[test]
    fn test_cylinder_treats_d1_as_diameter() {
        let facts = SolidFacts::for_solid(SolidKind::Cylinder, 2.0, 3.0);
        assert!((facts.volume - PI * 3.0).abs() < 1e-5);
        assert!((facts.area - 2.0 * PI * 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_scales_size_to_radius() {
        let facts = SolidFacts::for_solid(SolidKind::Sphere, 1.5, 0.0);
        assert!((facts.volume - 4.0 / 3.0 * PI).abs() < 1e-5);
        assert!((facts.area - 4.0 * PI).abs() < 1e-5);
    }

    #[test]
    fn test_counts_match_generated_meshes() {
        for kind in [SolidKind::Cube, SolidKind::Octahedron, SolidKind::Dodecahedron] {
            let facts = SolidFacts::for_solid(kind, 1.5, 2.0);
            let mesh = crate::generate(kind, 1.5, Some(2.0), None).unwrap();
            assert_eq!(facts.elements.vertices as usize, mesh.vertices.len());
            assert_eq!(facts.elements.edges as usize, mesh.edges.len());
        }
    }
}
