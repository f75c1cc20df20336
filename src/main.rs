//! dotrig - dot-matrix point cloud viewer
//!
//! This application samples filled vector shapes into extruded 3D point
//! clouds and animates them as rotating dot matrices.
//!
//! ## Pipeline
//! - Shapes: SVG path -> coverage grid -> layered point cloud
//! - Effects: rotation, projection, depth shading, scanline and flicker
//! - Render: dots rasterized into a pixel surface
//! - Animation: a driver ticks the visual once per repaint

use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod animation;
mod effects;
mod render;
mod scene;
mod settings;
mod shapes;
#[cfg(test)]
mod test_support;

use animation::{AnimationDriver, FrameHandle, FrameScheduler, Visual};
use effects::ProjectionMode;
use render::{PixelSurface, Rgb};
use scene::{SceneConfig, SceneKind};
use settings::ViewerSettings;
use shapes::ShapePath;

/// Height reserved under the canvas for the stats line
const STATUS_HEIGHT: f32 = 22.0;

type Driver = AnimationDriver<Box<dyn Visual>, PixelSurface, EguiScheduler, StdRng>;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting dotrig");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("dotrig"),
        ..Default::default()
    };

    eframe::run_native(
        "dotrig",
        options,
        Box::new(|cc| Ok(Box::new(ViewerApp::new(cc)))),
    )
}

/// Frame scheduler backed by egui repaint requests
struct EguiScheduler {
    ctx: egui::Context,
    next: u64,
}

impl FrameScheduler for EguiScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        self.ctx.request_repaint();
        FrameHandle(self.next)
    }

    fn cancel_frame(&mut self, _handle: FrameHandle) {
        // A repaint can't be withdrawn; the stopped driver ignores the tick
    }
}

/// Main application state
struct ViewerApp {
    ctx: egui::Context,
    driver: Option<Driver>,
    texture: Option<egui::TextureHandle>,
    clock: Instant,
    canvas_size: egui::Vec2,
    pixel_ratio: f32,
    status: String,
    needs_restart: bool,

    // Scene selection
    selected_scene: SceneKind,
    show_settings: bool,
    imported: Option<(String, ShapePath)>,
    last_svg: Option<PathBuf>,

    // Motion
    speed: f32,

    // Projection
    projection_override: Option<ProjectionMode>,

    // Modulation
    enable_flicker: bool,
    enable_scanline: bool,

    // Display
    enable_persistence: bool,
    persistence: f32,
    accent: Rgb,
}

impl ViewerApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let defaults = ViewerSettings::default();
        let mut app = Self {
            ctx: cc.egui_ctx.clone(),
            driver: None,
            texture: None,
            clock: Instant::now(),
            canvas_size: egui::Vec2::ZERO,
            pixel_ratio: cc.egui_ctx.pixels_per_point(),
            status: "Ready".to_string(),
            needs_restart: true,
            selected_scene: defaults.scene,
            show_settings: defaults.show_settings,
            imported: None,
            last_svg: None,
            speed: defaults.speed,
            projection_override: defaults.projection,
            enable_flicker: defaults.enable_flicker,
            enable_scanline: defaults.enable_scanline,
            enable_persistence: defaults.enable_persistence,
            persistence: defaults.persistence,
            accent: defaults.accent,
        };

        ViewerSettings::load().apply(&mut app);
        if let Some(path) = app.last_svg.clone() {
            app.import_svg(path);
        }
        app
    }

    /// The selected preset with the viewer's overrides applied
    fn scene_config(&self) -> SceneConfig {
        let mut scene = SceneConfig::preset(self.selected_scene);
        scene.motion.delta_x *= self.speed;
        scene.motion.delta_y *= self.speed;

        let dots = &mut scene.dot_matrix;
        if let Some(mode) = self.projection_override {
            dots.projection.mode = mode;
        }
        if !self.enable_flicker {
            dots.modulation.flicker = None;
        }
        if !self.enable_scanline {
            dots.modulation.scanline = None;
        }
        dots.raster.accent = self.accent;
        dots.raster.persistence_alpha = self.enable_persistence.then_some(self.persistence);

        scene
    }

    /// Tear down the running driver and start a fresh one
    fn restart(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            driver.stop();
        }
        self.texture = None;
        self.needs_restart = false;

        let scene = self.scene_config();
        let visual = match (&self.imported, scene.kind) {
            (Some((name, shape)), SceneKind::Logo | SceneKind::Cube) => {
                scene.build_visual_for_shape(name, shape.clone())
            }
            _ => scene.build_visual(),
        };

        let (width, height) = if self.canvas_size.x >= 1.0 && self.canvas_size.y >= 1.0 {
            (self.canvas_size.x, self.canvas_size.y)
        } else {
            (scene.width, scene.height)
        };

        let scheduler = EguiScheduler {
            ctx: self.ctx.clone(),
            next: 0,
        };
        let mut driver = AnimationDriver::new(visual, scheduler, StdRng::from_entropy(), scene.motion);
        let surface = PixelSurface::new(width, height, self.pixel_ratio)
            .map_err(|e| log::warn!("Could not create surface: {}", e))
            .ok();
        driver.start(surface, width, height, self.pixel_ratio);

        self.status = driver.status.clone();
        self.driver = Some(driver);
        ViewerSettings::from_app(self).save();
    }

    /// Only retune the rotation speed, keeping the current angles
    fn update_motion(&mut self) {
        let motion = self.scene_config().motion;
        if let Some(driver) = self.driver.as_mut() {
            driver.set_motion(motion);
        }
    }

    fn import_svg(&mut self, path: PathBuf) {
        match ShapePath::from_svg_file(&path, None) {
            Ok(shape) => {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "SVG".to_string());
                log::info!("Imported {} ({} commands)", path.display(), shape.commands().len());
                self.imported = Some((name, shape));
                self.last_svg = Some(path);
                self.needs_restart = true;
            }
            Err(e) => {
                self.status = format!("Import failed: {}", e);
                log::error!("Failed to import {}: {}", path.display(), e);
            }
        }
    }

    fn save_png(&mut self) {
        let Some(surface) = self.driver.as_ref().and_then(|d| d.surface()) else {
            self.status = "Nothing to save".to_string();
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("dotrig.png")
            .save_file()
        else {
            return;
        };

        self.status = match surface.save_png(&path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                log::error!("Failed to save frame: {}", e);
                format!("Save failed: {}", e)
            }
        };
    }

    /// Copy the surface into the egui texture
    fn upload_frame(&mut self, ctx: &egui::Context) {
        let Some(surface) = self.driver.as_ref().and_then(|d| d.surface()) else {
            return;
        };
        let (w, h) = surface.device_size();
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [w as usize, h as usize],
            surface.image().as_raw(),
        );

        match self.texture.as_mut() {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("dotrig-frame", image, egui::TextureOptions::LINEAR));
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.needs_restart {
            self.restart();
        }

        let mut motion_changed = false;
        let mut settings_changed = false;

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("dotrig");
                ui.separator();

                if ui.button("📂 Import SVG").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("SVG", &["svg"])
                        .pick_file()
                    {
                        self.import_svg(path);
                    }
                }

                if self.imported.is_some() && ui.button("✖ Clear import").clicked() {
                    self.imported = None;
                    self.last_svg = None;
                    self.needs_restart = true;
                }

                if ui.button("💾 Save PNG").clicked() {
                    self.save_png();
                }

                ui.separator();
                if ui.toggle_value(&mut self.show_settings, "⚙ Settings").changed() {
                    settings_changed = true;
                }
                ui.separator();
                ui.label(&self.status);
            });
        });

        // Settings panel
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(220.0)
                .show(ctx, |ui| {
                    ui.heading("Scene");
                    ui.separator();

                    egui::ComboBox::from_label("Preset")
                        .selected_text(self.selected_scene.name())
                        .show_ui(ui, |ui| {
                            for kind in SceneKind::all() {
                                if ui
                                    .selectable_value(&mut self.selected_scene, *kind, kind.name())
                                    .clicked()
                                {
                                    self.needs_restart = true;
                                }
                            }
                        });

                    if let Some((name, _)) = &self.imported {
                        ui.small(format!("Shape: {}", name));
                    }

                    ui.separator();

                    ui.collapsing("Motion", |ui| {
                        if ui
                            .add(egui::Slider::new(&mut self.speed, 0.0..=5.0).text("Speed"))
                            .changed()
                        {
                            motion_changed = true;
                        }
                    });

                    ui.separator();

                    ui.collapsing("Projection", |ui| {
                        let label = self.projection_override.map(|m| m.name()).unwrap_or("Preset");
                        egui::ComboBox::from_label("Mode")
                            .selected_text(label)
                            .show_ui(ui, |ui| {
                                if ui
                                    .selectable_value(&mut self.projection_override, None, "Preset")
                                    .clicked()
                                {
                                    self.needs_restart = true;
                                }
                                for mode in ProjectionMode::all() {
                                    if ui
                                        .selectable_value(&mut self.projection_override, Some(*mode), mode.name())
                                        .clicked()
                                    {
                                        self.needs_restart = true;
                                    }
                                }
                            });
                    });

                    ui.separator();

                    ui.collapsing("Effects", |ui| {
                        if ui.checkbox(&mut self.enable_flicker, "Flicker").changed() {
                            self.needs_restart = true;
                        }
                        if ui.checkbox(&mut self.enable_scanline, "Scanline").changed() {
                            self.needs_restart = true;
                        }
                    });

                    ui.separator();

                    ui.collapsing("Display", |ui| {
                        if ui.checkbox(&mut self.enable_persistence, "Persistence").changed() {
                            self.needs_restart = true;
                        }
                        if ui
                            .add_enabled(
                                self.enable_persistence,
                                egui::Slider::new(&mut self.persistence, 0.02..=1.0).text("Fade"),
                            )
                            .drag_stopped()
                        {
                            self.needs_restart = true;
                        }

                        ui.horizontal(|ui| {
                            if ui.button("Orange").clicked() {
                                self.accent = Rgb::ACCENT;
                                self.needs_restart = true;
                            }
                            if ui.button("Green").clicked() {
                                self.accent = Rgb::new(100, 255, 100);
                                self.needs_restart = true;
                            }
                            if ui.button("White").clicked() {
                                self.accent = Rgb::WHITE;
                                self.needs_restart = true;
                            }
                        });
                    });
                });
        }

        if motion_changed {
            self.update_motion();
            settings_changed = true;
        }
        if settings_changed {
            ViewerSettings::from_app(self).save();
        }

        // Main canvas
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let available = ui.available_size();
                let size = egui::vec2(available.x, (available.y - STATUS_HEIGHT).max(1.0));
                let pixel_ratio = ctx.pixels_per_point();

                if size != self.canvas_size || pixel_ratio != self.pixel_ratio {
                    self.canvas_size = size;
                    self.pixel_ratio = pixel_ratio;
                    if let Some(driver) = self.driver.as_mut() {
                        driver.resize_with_ratio(size.x, size.y, pixel_ratio);
                    }
                }

                if let Some(driver) = self.driver.as_mut().filter(|d| d.is_running()) {
                    driver.tick(self.clock.elapsed());
                }
                self.upload_frame(ctx);

                if let Some(texture) = &self.texture {
                    ui.image((texture.id(), size));
                }

                ui.horizontal(|ui| {
                    if let Some(driver) = &self.driver {
                        let stats = driver.last_stats();
                        ui.small(format!("Visual: {}", driver.visual().name()));
                        ui.separator();
                        ui.small(format!("State: {:?}", driver.driver_state()));
                        ui.separator();
                        ui.small(format!("Frame: {}", driver.state().frame_count));
                        ui.separator();
                        ui.small(format!("Dots: {}", stats.drawn));
                        ui.separator();
                        ui.small(format!("Culled: {}", stats.culled));
                    }
                });
            });
    }
}
