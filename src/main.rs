// Declare the viewer modules directly in the binary crate root
pub mod state;
pub mod render;
pub mod input;

use crate::state::State;
use torus_life::{Game, LifeConfig};

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};
use std::sync::Arc;
use std::time::Instant;

/// Panel button presses, applied once the egui frame has ended.
enum UiAction {
    Step,
    ToggleRun,
    SetSpeed(f32),
    Clear,
    Randomize,
    FitToWindow,
}

fn apply_action(state: &mut State, action: UiAction) {
    match action {
        UiAction::Step => state.game.step_once(),
        UiAction::ToggleRun => state.game.toggle_run(Instant::now()),
        UiAction::SetSpeed(value) => state.game.set_speed_scale(value),
        UiAction::Clear => state.game.clear(),
        UiAction::Randomize => state.game.randomize(),
        UiAction::FitToWindow => {
            if let Err(e) = state.fit_board_to_window() {
                log::warn!("Cannot fit board to window: {e}");
            }
        }
    }
}

fn draw_panel(state: &mut State) -> Vec<UiAction> {
    let mut actions = Vec::new();

    // Menu button, anchored top-right so it never covers the board origin
    egui::Area::new(egui::Id::new("menu_button_area"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-5.0, 5.0))
        .show(&state.egui_ctx, |ui| {
            if ui.button("☰").clicked() {
                state.menu_open = !state.menu_open;
            }
        });

    if !state.menu_open {
        return actions;
    }

    let panel_frame = egui::Frame {
        fill: egui::Color32::from_rgba_unmultiplied(25, 25, 25, 200),
        ..egui::Frame::side_top_panel(&state.egui_ctx.style())
    };

    let game = &state.game;
    egui::SidePanel::right("side_panel")
        .frame(panel_frame)
        .resizable(false)
        .default_width(180.0)
        .show(&state.egui_ctx, |ui| {
            ui.heading("Conway's Game of Life");
            ui.separator();
            ui.label(format!("Generation: {}", game.generation()));
            ui.label(format!("Live Cells: {}", game.board().population()));
            ui.label(format!("Grid: {}x{}", game.board().cols(), game.board().rows()));
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Next").clicked() {
                    actions.push(UiAction::Step);
                }
                let label = if game.is_running() { "Pause" } else { "Start" };
                if ui.button(label).clicked() {
                    actions.push(UiAction::ToggleRun);
                }
            });

            let mut speed = game.speed_scale();
            let slider = egui::Slider::new(&mut speed, 0.0..=1.0).step_by(0.1).text("Speed");
            if ui.add(slider).changed() {
                actions.push(UiAction::SetSpeed(speed));
            }

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    actions.push(UiAction::Clear);
                }
                if ui.button("Random").clicked() {
                    actions.push(UiAction::Randomize);
                }
            });
            ui.separator();
            if ui.button("Fit board to window").clicked() {
                actions.push(UiAction::FitToWindow);
            }
        });

    actions
}

async fn run(event_loop: EventLoop<()>, window: Arc<Window>, game: Game) {
    let mut state = State::new(window, game).await;

    let result = event_loop.run(move |event, window_target| {
        window_target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { window_id, ref event }
                if window_id == state.window.id() =>
            {
                // Pass window-specific events to egui_winit FIRST
                let response = state.egui_winit_state.on_window_event(&state.window, event);

                if response.repaint {
                    state.window.request_redraw();
                }

                // Resize must reach the surface even when egui consumed it
                let consumed_by_egui = response.consumed && !matches!(event, WindowEvent::Resized(_));

                if consumed_by_egui {
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        state.resize(*new_size);
                    }
                    WindowEvent::MouseInput { state: element_state, button, .. } => {
                        input::handle_mouse_input(&mut state, *button, *element_state);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        input::handle_cursor_move(&mut state, *position);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        input::handle_cursor_left(&mut state);
                    }
                    WindowEvent::RedrawRequested => {
                        let output_frame = match state.update_and_render() {
                            Ok(frame) => frame,
                            Err(e) => {
                                // Lost is handled inside update_and_render; everything else is transient
                                log::warn!("Skipping frame due to surface {:?}", e);
                                state.window.request_redraw();
                                return;
                            }
                        };

                        let output_view = output_frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

                        // Begin egui frame
                        let raw_input = state.egui_winit_state.take_egui_input(&state.window);
                        state.egui_ctx.begin_frame(raw_input);
                        let actions = draw_panel(&mut state);
                        let full_output = state.egui_ctx.end_frame();

                        for action in actions {
                            apply_action(&mut state, action);
                        }

                        let paint_jobs = state.egui_ctx.tessellate(full_output.shapes, state.window.scale_factor() as f32);
                        let screen_descriptor = egui_wgpu::ScreenDescriptor {
                            size_in_pixels: [state.config.width, state.config.height],
                            pixels_per_point: state.window.scale_factor() as f32,
                        };

                        // Upload egui data to GPU
                        let mut encoder = state.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui Encoder"),
                        });
                        for (id, image_delta) in &full_output.textures_delta.set {
                            state.egui_renderer.update_texture(&state.device, &state.queue, *id, image_delta);
                        }
                        let _tdelta = state.egui_renderer.update_buffers(
                            &state.device,
                            &state.queue,
                            &mut encoder,
                            &paint_jobs,
                            &screen_descriptor,
                        );
                        state.egui_winit_state.handle_platform_output(
                            &state.window,
                            full_output.platform_output,
                        );

                        // Render egui on top of the board
                        {
                            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui Render Pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &output_view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                timestamp_writes: None,
                                occlusion_query_set: None,
                            });

                            state.egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
                        }

                        for id in &full_output.textures_delta.free {
                            state.egui_renderer.free_texture(id);
                        }

                        state.queue.submit(Some(encoder.finish()));
                        output_frame.present();
                    }
                    _ => (),
                }
            }
            Event::AboutToWait => {
                // The redraw loop is the scheduler's tick source
                state.window.request_redraw();
            }
            _ => ()
        }
    });

    if let Err(e) = result {
        log::error!("Event loop terminated: {e}");
    }
}

fn main() {
    env_logger::init();

    let config = LifeConfig::from_env();
    let game = match Game::new(&config, Instant::now()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().unwrap();

    // Room for the board plus the side panel
    let (board_width, board_height) = game.board().pixel_size();
    let initial_size = winit::dpi::PhysicalSize::new(board_width as u32 + 200, board_height as u32);

    let window = Arc::new(winit::window::WindowBuilder::new()
        .with_title("Conway's Game of Life")
        .with_inner_size(initial_size)
        .build(&event_loop)
        .unwrap());

    pollster::block_on(run(event_loop, window, game));
}
