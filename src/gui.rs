use egui::Context;
use egui_wgpu::Renderer;
use egui_winit::State;
use glam::Vec2;
use singularity_physics::{
    ParticleKind, SlitCount, EXPERIMENT_HEIGHT, EXPERIMENT_WIDTH,
};
use singularity_renderer::{paint_expansion, Canvas, ExperimentFrame};
use singularity_simulation::{
    BehaviorMode, ParamRange, MASS_RANGE, PARTICLE_COUNT_RANGE, SLIT_SEPARATION_RANGE,
    SLIT_WIDTH_RANGE, TIME_RANGE,
};
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

use crate::canvas::{EguiCanvas, Viewport};
use crate::demos::{Scene, Scenes};

pub struct UiState {
    pub fps: f32,
    pub frame_time: f32,
    pub scenes: Scenes,
    pub auto_rotate: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: 0.0,
            scenes: Scenes::default(),
            auto_rotate: true,
        }
    }
}

pub struct Gui {
    context: Context,
    state: State,
    renderer: Renderer,
}

fn slider<'a>(value: &'a mut f32, range: ParamRange, text: &str) -> egui::Slider<'a> {
    egui::Slider::new(value, range.min..=range.max)
        .step_by(range.step as f64)
        .text(text)
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        let id = context.viewport_id();

        let state = State::new(
            context.clone(),
            id,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer = Renderer::new(
            device,
            output_color_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                predictable_texture_filtering: false,
            },
        );

        Self {
            context,
            state,
            renderer,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    pub fn render(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        ui_state: &mut UiState,
    ) {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.context.run(raw_input, |ctx| {
            self.ui(ctx, ui_state);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let clipped_primitives = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        let mut render_pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();

        self.renderer
            .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        drop(render_pass);

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    fn ui(&self, ctx: &Context, state: &mut UiState) {
        egui::TopBottomPanel::top("scenes").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut selected = state.scenes.active();
                for scene in Scene::ALL {
                    ui.selectable_value(&mut selected, scene, scene.title());
                }
                if selected != state.scenes.active() {
                    state.scenes.switch_to(selected);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{:.0} FPS ({:.2} ms)", state.fps, state.frame_time));
                });
            });
        });

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| match state.scenes.active() {
                Scene::BigBang => big_bang_controls(ui, &mut state.scenes),
                Scene::BlackHole => black_hole_controls(ui, state),
                Scene::DoubleSlit => double_slit_controls(ui, &mut state.scenes),
            });

        // The funnel is drawn by wgpu underneath; leaving the center free
        // lets pointer input reach the orbit camera.
        match state.scenes.active() {
            Scene::BigBang => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let (response, painter) =
                        ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                    let mut canvas = EguiCanvas::new(&painter, Viewport::filling(response.rect));
                    paint_expansion(&mut canvas, state.scenes.big_bang.time());
                });
            }
            Scene::DoubleSlit => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let (response, painter) =
                        ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                    let viewport = Viewport::fitted(
                        response.rect,
                        Vec2::new(EXPERIMENT_WIDTH, EXPERIMENT_HEIGHT),
                    );
                    let mut canvas = EguiCanvas::new(&painter, viewport);
                    if !canvas.is_drawable() {
                        return;
                    }
                    let frame = match state.scenes.session() {
                        Some(session) => ExperimentFrame::from_session(session),
                        None => ExperimentFrame::idle(&state.scenes.double_slit),
                    };
                    frame.paint(&mut canvas);
                });
            }
            Scene::BlackHole => {}
        }
    }
}

fn big_bang_controls(ui: &mut egui::Ui, scenes: &mut Scenes) {
    ui.heading("The Big Bang");
    ui.separator();

    let mut time = scenes.big_bang.time();
    if ui.add(slider(&mut time, TIME_RANGE, "Cosmic time")).changed() {
        scenes.set_time(time);
    }

    let label = if scenes.is_playing() { "Pause" } else { "Play" };
    if ui.button(label).clicked() {
        scenes.toggle_playback();
    }

    ui.separator();
    let event = scenes.big_bang.event();
    ui.heading(event.name);
    ui.label(format!("Age: {}", event.age));
    ui.label(event.description);
}

fn black_hole_controls(ui: &mut egui::Ui, state: &mut UiState) {
    let black_hole = &mut state.scenes.black_hole;
    ui.heading("Black Holes");
    ui.separator();

    let mut mass = black_hole.mass();
    if ui
        .add(slider(&mut mass, MASS_RANGE, "Mass (solar masses)"))
        .changed()
    {
        black_hole.set_mass(mass);
    }
    ui.checkbox(&mut state.auto_rotate, "Auto-rotate");

    ui.separator();
    let metrics = black_hole.metrics();
    ui.label(format!("Schwarzschild radius: {}", metrics.format_radius()));
    ui.label(format!(
        "Curvature at 1.1 r_s: {}",
        metrics.format_curvature()
    ));
    if metrics.is_extreme() {
        ui.colored_label(egui::Color32::from_rgb(0xe7, 0x4c, 0x3c), "Extreme curvature");
    }

    ui.separator();
    let equation = black_hole.equation();
    ui.monospace(equation.latex());
    ui.label(equation.explanation());
}

fn double_slit_controls(ui: &mut egui::Ui, scenes: &mut Scenes) {
    ui.heading("Double Slit Experiment");
    ui.separator();

    let params = &mut scenes.double_slit;
    ui.horizontal(|ui| {
        for kind in [ParticleKind::Electron, ParticleKind::Photon] {
            ui.radio_value(&mut params.particle_kind, kind, kind.label());
        }
    });
    ui.horizontal(|ui| {
        ui.radio_value(&mut params.slit_count, SlitCount::Single, "Single slit");
        ui.radio_value(&mut params.slit_count, SlitCount::Double, "Double slit");
    });
    ui.horizontal(|ui| {
        for mode in [BehaviorMode::Quantum, BehaviorMode::Classical] {
            ui.radio_value(&mut params.mode, mode, mode.label());
        }
    });

    ui.add(slider(&mut params.slit_width, SLIT_WIDTH_RANGE, "Slit width"));
    let separation_enabled = params.separation_enabled();
    ui.add_enabled(
        separation_enabled,
        slider(
            &mut params.slit_separation,
            SLIT_SEPARATION_RANGE,
            "Slit separation",
        ),
    );
    ui.add(
        egui::Slider::new(
            &mut params.particle_count,
            PARTICLE_COUNT_RANGE.min as u32..=PARTICLE_COUNT_RANGE.max as u32,
        )
        .step_by(PARTICLE_COUNT_RANGE.step as f64)
        .text("Particles"),
    );

    ui.horizontal(|ui| {
        let start = if scenes.is_experiment_running() {
            "Restart"
        } else {
            "Start"
        };
        if ui.button(start).clicked() {
            scenes.start_experiment();
        }
        if ui.button("Reset").clicked() {
            scenes.reset_experiment();
        }
    });

    if let Some(session) = scenes.session() {
        ui.separator();
        let stats = session.stats();
        ui.label(format!(
            "Completed: {}/{}",
            session.completed(),
            session.total()
        ));
        ui.label(format!("On screen: {}", stats.recorded));
        ui.label(format!("Absorbed by panel: {}", stats.absorbed));
        if session.params().interferes() {
            ui.label(format!("Cancelled by interference: {}", stats.rejected));
        }
        ui.label(format!("Missed the screen: {}", stats.off_screen));
    }
}
