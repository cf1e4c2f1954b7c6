/// Prints generated mesh statistics and formula data for every solid
/// in the catalog, without entering the interactive viewer.
///
/// Usage: cargo run --example catalog

use solids_core::{generate, SolidFacts, SolidKind};

fn main() {
    let (dim1, dim2) = (1.5_f32, 2.0_f32);
    println!("Solid catalog at dimensions {dim1} x {dim2}:\n");
    println!(
        "{:<14} {:>9} {:>6} {:>6} {:>9} {:>9}",
        "kind", "vertices", "edges", "faces", "volume", "area"
    );

    for kind in SolidKind::ALL {
        let size1 = match kind {
            SolidKind::Cylinder | SolidKind::Cone => dim1 / 2.0,
            SolidKind::Sphere => dim1 / 1.5,
            _ => dim1,
        };
        let mesh = match generate(kind, size1, Some(dim2), None) {
            Ok(mesh) => mesh,
            Err(e) => {
                eprintln!("{kind}: {e}");
                continue;
            }
        };
        let facts = SolidFacts::for_solid(kind, dim1, dim2);
        println!(
            "{:<14} {:>9} {:>6} {:>6} {:>9.2} {:>9.2}",
            kind.name(),
            mesh.vertices.len(),
            mesh.edges.len(),
            mesh.faces.len(),
            facts.volume,
            facts.area
        );
    }
}
