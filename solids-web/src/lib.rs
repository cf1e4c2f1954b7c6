/// Solids3D Web - WASM bindings for browser canvas hosts
///
/// Exposes the core generator and projector to JavaScript: the host owns
/// the render loop and input handling, this layer owns the current mesh
/// and rotation and hands back flat buffers (or strokes a 2D context
/// directly).

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use solids_core::{generate, project, Family, GeometryError, Mesh, RotationState, SolidKind};

fn to_js(err: GeometryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One displayed solid plus its accumulated rotation.
#[wasm_bindgen]
pub struct SolidScene {
    kind: SolidKind,
    dim1: f32,
    dim2: f32,
    mesh: Mesh,
    rotation: RotationState,
}

#[wasm_bindgen]
impl SolidScene {
    /// Create a scene showing `kind` (by catalog name, e.g. `"cube"`).
    /// Unknown names are an error, never a silent default.
    #[wasm_bindgen(constructor)]
    pub fn new(kind: &str) -> Result<SolidScene, JsValue> {
        let kind: SolidKind = kind.parse().map_err(to_js)?;
        let (dim1, dim2) = (1.5, 2.0);
        Ok(SolidScene {
            kind,
            dim1,
            dim2,
            mesh: build_mesh(kind, dim1, dim2).map_err(to_js)?,
            rotation: RotationState::new(0.5, 0.5),
        })
    }

    pub fn set_kind(&mut self, kind: &str) -> Result<(), JsValue> {
        self.kind = kind.parse().map_err(to_js)?;
        self.rebuild()
    }

    /// Update the slider dimensions and regenerate the mesh.
    pub fn set_dimensions(&mut self, dim1: f32, dim2: f32) -> Result<(), JsValue> {
        self.dim1 = dim1;
        self.dim2 = dim2;
        self.rebuild()
    }

    /// Accumulate rotation deltas (radians), e.g. from a drag gesture.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.rotation.rotate(dx, dy);
    }

    pub fn vertex_count(&self) -> u32 {
        self.mesh.vertices.len() as u32
    }

    /// Edge index pairs, flattened.
    pub fn edges(&self) -> Vec<u32> {
        self.mesh
            .edges
            .iter()
            .flat_map(|&[i, j]| [i as u32, j as u32])
            .collect()
    }

    /// True when the solid has no flat faces and the host should fall back
    /// to edge-only drawing.
    pub fn is_round(&self) -> bool {
        self.mesh.family == Family::Round
    }

    /// Project every vertex into a `width` x `height` viewport under the
    /// current rotation. Returns `[x, y, depth]` triples, flattened.
    pub fn project_vertices(&self, width: f32, height: f32) -> Result<Vec<f32>, JsValue> {
        let rotation = self.rotation;
        let mut out = Vec::with_capacity(self.mesh.vertices.len() * 3);
        for vertex in &self.mesh.vertices {
            let p = project(vertex, width, height, rotation).map_err(to_js)?;
            out.extend_from_slice(&[p.x, p.y, p.depth]);
        }
        Ok(out)
    }

    /// Stroke the wireframe into a canvas 2D context. The host sets stroke
    /// style and line width beforehand.
    pub fn draw_wireframe(
        &self,
        ctx: &CanvasRenderingContext2d,
        width: f32,
        height: f32,
    ) -> Result<(), JsValue> {
        let projected = self.project_vertices(width, height)?;

        ctx.begin_path();
        for &[i, j] in &self.mesh.edges {
            let (ax, ay) = (projected[i * 3] as f64, projected[i * 3 + 1] as f64);
            let (bx, by) = (projected[j * 3] as f64, projected[j * 3 + 1] as f64);
            ctx.move_to(ax, ay);
            ctx.line_to(bx, by);
        }
        ctx.stroke();
        Ok(())
    }

    fn rebuild(&mut self) -> Result<(), JsValue> {
        self.mesh = build_mesh(self.kind, self.dim1, self.dim2).map_err(to_js)?;
        Ok(())
    }
}

/// Slider dimensions are diameter-like; convert to the radii the generator
/// expects for the round kinds.
fn build_mesh(kind: SolidKind, dim1: f32, dim2: f32) -> Result<Mesh, GeometryError> {
    let size1 = match kind {
        SolidKind::Cylinder | SolidKind::Cone => dim1 / 2.0,
        SolidKind::Sphere => dim1 / 1.5,
        _ => dim1,
    };
    generate(kind, size1, Some(dim2), None)
}
