/// Solids3D Terminal Viewer
///
/// Interactive wireframe display of the solid catalog.
/// Controls:
///   - 1-8: Select solid (cube, prism, pyramid, octahedron, dodecahedron,
///     cylinder, cone, sphere)
///   - WASD / Arrow Keys: Rotate
///   - +/- and [/]: Adjust the two dimensions
///   - Space: Toggle auto-rotation
///   - Q/ESC: Quit

use std::io;
use solids_core::SolidKind;
use solids_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let kind = match std::env::args().nth(1) {
        Some(name) => name
            .parse::<SolidKind>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
        None => SolidKind::Cube,
    };

    println!("Solids3D Terminal Viewer - starting with {kind} (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(kind)?;
    app.run()?;

    Ok(())
}
