/// Terminal-based interactive viewer for the solid catalog
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use nalgebra::Point3;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use solids_core::{
    generate, project, Family, GeometryError, Mesh, Point2D, RotationState, SolidFacts, SolidKind,
};

pub mod renderer;

pub use renderer::WireframeRenderer;

/// Dimension slider range, matching the visualizer's controls.
const DIM_MIN: f32 = 1.0;
const DIM_MAX: f32 = 4.0;
const DIM_STEP: f32 = 0.1;

/// Main application struct for terminal solid viewing
pub struct TerminalApp {
    kind: SolidKind,
    dim1: f32,
    dim2: f32,
    mesh: Mesh,
    rotation: RotationState,
    renderer: WireframeRenderer,
    auto_rotate: bool,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

/// Build the mesh for `kind` at slider dimensions.
///
/// The sliders expose diameter-like sizes, so the round kinds convert to
/// the radius the generator expects (sphere size maps to `d1 / 1.5`).
fn build_mesh(kind: SolidKind, dim1: f32, dim2: f32) -> Result<Mesh, GeometryError> {
    let size1 = match kind {
        SolidKind::Cylinder | SolidKind::Cone => dim1 / 2.0,
        SolidKind::Sphere => dim1 / 1.5,
        _ => dim1,
    };
    generate(kind, size1, Some(dim2), None)
}

fn to_io(err: GeometryError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

impl TerminalApp {
    pub fn new(kind: SolidKind) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let (dim1, dim2) = (1.5, 2.0);

        Ok(Self {
            kind,
            dim1,
            dim2,
            mesh: build_mesh(kind, dim1, dim2).map_err(to_io)?,
            rotation: RotationState::new(0.5, 0.5),
            renderer: WireframeRenderer::new(width as usize, height as usize),
            auto_rotate: true,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.rotation.rotate(0.1, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.rotation.rotate(-0.1, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.rotation.rotate(0.0, -0.1);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.rotation.rotate(0.0, 0.1);
                }
                KeyCode::Char(' ') => {
                    self.auto_rotate = !self.auto_rotate;
                }
                KeyCode::Char(c @ '1'..='8') => {
                    let index = c as usize - '1' as usize;
                    self.kind = SolidKind::ALL[index];
                    self.rebuild()?;
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.dim1 = (self.dim1 + DIM_STEP).min(DIM_MAX);
                    self.rebuild()?;
                }
                KeyCode::Char('-') => {
                    self.dim1 = (self.dim1 - DIM_STEP).max(DIM_MIN);
                    self.rebuild()?;
                }
                KeyCode::Char(']') => {
                    self.dim2 = (self.dim2 + DIM_STEP).min(DIM_MAX);
                    self.rebuild()?;
                }
                KeyCode::Char('[') => {
                    self.dim2 = (self.dim2 - DIM_STEP).max(DIM_MIN);
                    self.rebuild()?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn rebuild(&mut self) -> io::Result<()> {
        self.mesh = build_mesh(self.kind, self.dim1, self.dim2).map_err(to_io)?;
        Ok(())
    }

    fn update(&mut self) {
        // Continuous slow spin around the vertical axis
        if self.auto_rotate {
            self.rotation.rotate(0.0, 0.01);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let (viewport_w, viewport_h) = self.renderer.viewport();

        // One rotation snapshot covers the whole frame; RotationState is
        // passed by value into every projection call.
        let rotation = self.rotation;
        let projected = self
            .mesh
            .vertices
            .iter()
            .map(|v| project(v, viewport_w, viewport_h, rotation))
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_io)?;

        self.renderer.clear();
        self.renderer.draw_edges(&self.mesh.edges, &projected);
        self.draw_vertex_markers(&projected);
        self.draw_aux_line(&projected, viewport_w, viewport_h, rotation)
            .map_err(to_io)?;

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        self.draw_overlay(&mut stdout)?;

        stdout.flush()?;
        Ok(())
    }

    /// Polyhedra get a marker per vertex; of the round kinds only the cone
    /// apex is a meaningful point to highlight.
    fn draw_vertex_markers(&mut self, projected: &[Point2D]) {
        match self.mesh.family {
            Family::Polyhedron => self.renderer.mark_vertices(projected.iter()),
            Family::Round => {
                if self.kind == SolidKind::Cone {
                    self.renderer.mark_vertices(projected.first());
                }
            }
        }
    }

    /// Dashed-line stand-in for the slant-height annotation: apex to base
    /// edge midpoint for the pyramid, first rib for cone and cylinder.
    fn draw_aux_line(
        &mut self,
        projected: &[Point2D],
        viewport_w: f32,
        viewport_h: f32,
        rotation: RotationState,
    ) -> Result<(), GeometryError> {
        match self.kind {
            SolidKind::Pyramid => {
                let a = self.mesh.vertices[1];
                let b = self.mesh.vertices[2];
                let midpoint = Point3::from((a.coords + b.coords) / 2.0);
                let mid = project(&midpoint, viewport_w, viewport_h, rotation)?;
                self.renderer.draw_line(projected[4], mid);
            }
            SolidKind::Cone | SolidKind::Cylinder => {
                self.renderer.draw_line(projected[0], projected[1]);
            }
            _ => {}
        }
        Ok(())
    }

    fn draw_overlay<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let facts = SolidFacts::for_solid(self.kind, self.dim1, self.dim2);
        queue!(
            writer,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Solids3D | {} | FPS: {:.1} | 1-8=Shape WASD/Arrows=Rotate +/- [/]=Size Space=Spin Q=Quit",
                facts.title, self.fps
            )),
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::Cyan),
            Print(format!(
                "V: {}  E: {}  F: {}  |  {} = {:.2}  |  {} = {:.2}  |  dims: {:.1} x {:.1}",
                facts.elements.vertices,
                facts.elements.edges,
                facts.elements.faces,
                facts.volume_formula,
                facts.volume,
                facts.area_formula,
                facts.area,
                self.dim1,
                self.dim2,
            )),
            ResetColor
        )?;
        Ok(())
    }
}
