#[macro_use]
extern crate glium;

use anyhow::Result;
use glium::glutin::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
};
use reaction_config::Settings;

pub mod camera;
pub mod input;
pub mod physics;
pub mod renderer;
pub mod simulation;

use input::{Controllers, InputEvent};
use renderer::Renderer;
use simulation::Simulation;

/// Opens the window and runs the frame loop until a quit signal. Each
/// iteration advances the simulation by one fixed timestep, dispatches
/// pending input, and redraws; none of it is wall-clock synchronized.
///
/// Everything lives on this stack frame, so window, physics world and
/// controller backend are released when the loop returns.
pub fn run(settings: Settings) -> Result<()> {
    let mut event_loop = EventLoop::new();
    let mut renderer = Renderer::new((settings.window.width, settings.window.height), &event_loop)?;
    let mut controllers = Controllers::open();
    let mut sim = Simulation::new(&settings);

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::MainEventsCleared => {
                controllers.pump(&mut sim);
                sim.advance_frame();
                if sim.is_running() {
                    renderer.request_redraw();
                } else {
                    *control_flow = ControlFlow::Exit;
                }
            }
            Event::RedrawRequested(_) => {
                if !sim.is_running() {
                    return;
                }
                renderer.start_render();
                renderer.draw_marker_triangle();
                let (rect, angle) = sim.ship_sprite();
                renderer.fill_rect(rect, angle, renderer::SHIP_COLOR);
                for (rect, angle) in sim.spawned_sprites() {
                    renderer.fill_rect(rect, angle, renderer::BOX_COLOR);
                }
                renderer.finish_render();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => sim.push_event(InputEvent::Quit),
                WindowEvent::Resized(size) => {
                    sim.push_event(InputEvent::Resized(size.width, size.height));
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if let Some(code) = input.virtual_keycode {
                        sim.push_event(InputEvent::Key(code, input.state));
                    }
                }
                _ => (),
            },
            _ => (),
        }
    });

    Ok(())
}
