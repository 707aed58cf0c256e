use anyhow::{anyhow, Result};
use glium::{
    glutin::{
        self,
        dpi::{PhysicalPosition, PhysicalSize},
        event_loop::EventLoop,
    },
    index::PrimitiveType,
    Frame, Program, Surface,
};

use crate::camera::ScreenRect;

const WINDOW_TITLE: &str = "Reaction Force";
const CLEAR_COLOR: (f32, f32, f32, f32) = (5.0 / 255.0, 5.0 / 255.0, 5.0 / 255.0, 1.0);

pub const SHIP_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
pub const BOX_COLOR: [f32; 4] = [0.55, 0.75, 0.95, 1.0];

#[derive(Copy, Clone)]
struct Vertex {
    position: [f32; 2],
    color: [f32; 4],
}

implement_vertex!(Vertex, position, color);

// Decorative marker in the top-left corner, unrelated to the simulation.
// Positions are in pixels.
const MARKER_TRIANGLE: [Vertex; 3] = [
    Vertex {
        position: [0.0, 0.0],
        color: [1.0, 0.0, 0.0, 1.0],
    },
    Vertex {
        position: [0.0, 50.0],
        color: [0.0, 1.0, 0.0, 1.0],
    },
    Vertex {
        position: [50.0, 0.0],
        color: [0.0, 0.0, 1.0, 1.0],
    },
];

pub struct Renderer {
    draw_program: Program,
    pub display: glium::Display,

    current_frame: Option<Frame>,
}

impl Renderer {
    pub fn new(size: (u32, u32), event_loop: &EventLoop<()>) -> Result<Self> {
        let wb = glutin::window::WindowBuilder::new()
            .with_inner_size(PhysicalSize::<u32>::from(size))
            .with_resizable(true)
            .with_title(WINDOW_TITLE);
        let cb = glutin::ContextBuilder::new().with_vsync(true);
        let display = glium::Display::new(wb, cb, event_loop)
            .map_err(|err| anyhow!("failed to create window: {}", err))?;

        // Center on the primary display
        {
            let gl_window = display.gl_window();
            let window = gl_window.window();
            if let Some(monitor) = window.primary_monitor() {
                let screen = monitor.size();
                let x = screen.width.saturating_sub(size.0) / 2;
                let y = screen.height.saturating_sub(size.1) / 2;
                window.set_outer_position(PhysicalPosition::new(x as i32, y as i32));
            }
        }

        let vertex_shader_src = include_str!("../../shaders/vertex.glsl");
        let fragment_shader_src = include_str!("../../shaders/fragment.glsl");
        let draw_program =
            Program::from_source(&display, vertex_shader_src, fragment_shader_src, None)
                .map_err(|err| anyhow!("failed to compile shaders: {}", err))?;

        Ok(Renderer {
            draw_program,
            display,
            current_frame: None,
        })
    }

    pub fn request_redraw(&self) {
        self.display.gl_window().window().request_redraw();
    }

    pub fn start_render(&mut self) {
        let mut target = self.display.draw();
        target.clear_color(CLEAR_COLOR.0, CLEAR_COLOR.1, CLEAR_COLOR.2, CLEAR_COLOR.3);

        self.current_frame = Some(target);
    }

    pub fn draw_marker_triangle(&mut self) {
        if let Some(target) = &mut self.current_frame {
            let dims = target.get_dimensions();
            let shape: Vec<Vertex> = MARKER_TRIANGLE
                .iter()
                .map(|v| Vertex {
                    position: to_ndc(v.position, dims),
                    color: v.color,
                })
                .collect();
            let vertex_buffer = glium::VertexBuffer::new(&self.display, &shape)
                .expect("Could not create vertex buffer.");
            let indices = glium::index::NoIndices(PrimitiveType::TrianglesList);
            target
                .draw(
                    &vertex_buffer,
                    &indices,
                    &self.draw_program,
                    &glium::uniforms::EmptyUniforms,
                    &Default::default(),
                )
                .expect("Cannot draw to the target.");
        }
    }

    /// Fills a screen-space rectangle rotated by `angle_deg` around its
    /// center, clockwise-positive as screen coordinates go.
    pub fn fill_rect(&mut self, rect: ScreenRect, angle_deg: f32, color: [f32; 4]) {
        if let Some(target) = &mut self.current_frame {
            let dims = target.get_dimensions();
            let center = (rect.left + rect.width / 2.0, rect.top + rect.height / 2.0);
            let (sin, cos) = angle_deg.to_radians().sin_cos();
            let corners = [
                (-rect.width / 2.0, -rect.height / 2.0),
                (-rect.width / 2.0, rect.height / 2.0),
                (rect.width / 2.0, rect.height / 2.0),
                (rect.width / 2.0, -rect.height / 2.0),
            ];
            let shape: Vec<Vertex> = corners
                .iter()
                .map(|(dx, dy)| Vertex {
                    position: to_ndc(
                        [
                            center.0 + dx * cos - dy * sin,
                            center.1 + dx * sin + dy * cos,
                        ],
                        dims,
                    ),
                    color,
                })
                .collect();
            let vertex_buffer = glium::VertexBuffer::new(&self.display, &shape)
                .expect("Could not create vertex buffer.");
            let index_buffer = glium::IndexBuffer::new(
                &self.display,
                PrimitiveType::TriangleStrip,
                &[1 as u16, 2, 0, 3],
            )
            .expect("Could not create index buffer.");
            target
                .draw(
                    &vertex_buffer,
                    &index_buffer,
                    &self.draw_program,
                    &glium::uniforms::EmptyUniforms,
                    &Default::default(),
                )
                .expect("Cannot draw to the target.");
        }
    }

    pub fn finish_render(&mut self) {
        if let Some(f) = self.current_frame.take() {
            f.finish().expect("Could not present the frame.");
        }
    }
}

fn to_ndc(pixel: [f32; 2], dims: (u32, u32)) -> [f32; 2] {
    [
        pixel[0] / dims.0 as f32 * 2.0 - 1.0,
        1.0 - pixel[1] / dims.1 as f32 * 2.0,
    ]
}
