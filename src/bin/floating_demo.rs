//! Floating glyphs over an empty canvas; hover to push them around.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{Align2, Color32, FontId, Vec2};
use ukiyo::layout::{EngineConfig, ItemPosition, LayoutEngine, Placement};

const GLYPHS: [&str; 8] = ["✦", "★", "♪", "☁", "✿", "❄", "☀", "♥"];
const PURPLE: Color32 = Color32::from_rgb(0x80, 0x63, 0xfe);
const LIME: Color32 = Color32::from_rgb(0xcc, 0xe3, 0x5a);

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
struct FloatingApp {
    config: EngineConfig,
    seed: u64,
    animate: bool,

    #[serde(skip)]
    engine: Option<LayoutEngine<egui::Context>>,
    #[serde(skip)]
    frame: Rc<RefCell<Vec<ItemPosition>>>,
    #[serde(skip)]
    viewport: Vec2,
}

impl Default for FloatingApp {
    fn default() -> Self {
        Self {
            config: EngineConfig::default().with_count(40),
            seed: 1,
            animate: true,
            engine: None,
            frame: Rc::default(),
            viewport: Vec2::ZERO,
        }
    }
}

impl FloatingApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<FloatingApp>(storage, eframe::APP_KEY) {
                return app;
            }
        }
        Default::default()
    }

    fn rebuild(&mut self, ctx: &egui::Context) {
        let config = EngineConfig {
            width: self.viewport.x,
            height: self.viewport.y,
            seed: Some(self.seed),
            ..self.config.clone()
        };

        match LayoutEngine::new(&config, ctx.clone()) {
            Ok(mut engine) => {
                *self.frame.borrow_mut() = engine.frame().to_vec();
                let frame = self.frame.clone();
                engine.on_frame(move |positions| {
                    let mut frame = frame.borrow_mut();
                    frame.clear();
                    frame.extend_from_slice(positions);
                });
                if self.animate {
                    engine.start();
                }
                self.engine = Some(engine);
            }
            Err(err) => {
                log::error!("cannot build layout: {err}");
                self.engine = None;
                self.frame.borrow_mut().clear();
            }
        }
    }

    fn controls(&mut self, ctx: &egui::Context) -> bool {
        let mut changed = false;
        egui::Window::new("Motion").default_open(false).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Seed");
                changed |= ui.add(egui::DragValue::new(&mut self.seed).speed(1)).changed();
                if ui.button("Randomize").clicked() {
                    self.seed = rand::random();
                    changed = true;
                }
            });
            changed |= ui
                .add(egui::Slider::new(&mut self.config.count, 1..=200).text("Count"))
                .changed();

            let mut centre_clear = matches!(self.config.placement, Placement::CenterClear { .. });
            if ui.checkbox(&mut centre_clear, "Keep centre clear").changed() {
                self.config.placement = if centre_clear {
                    EngineConfig::images(1.0, 1.0).placement
                } else {
                    Placement::default()
                };
                changed = true;
            }

            let motion = &mut self.config.motion;
            changed |= ui
                .add(egui::Slider::new(&mut motion.float_range, 0.0..=80.0).text("Float range"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut motion.angular_rate, 0.0..=4.0).text("Float rate"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut motion.repel_radius, 10.0..=400.0).text("Repel radius"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut motion.repel_strength, 0.0..=400.0).text("Repel strength"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut motion.speed, 0.05..=1.0).text("Speed"))
                .changed();

            ui.separator();
            if ui.checkbox(&mut self.animate, "Animate").changed() {
                if let Some(engine) = &mut self.engine {
                    if self.animate {
                        engine.start();
                    } else {
                        engine.stop();
                    }
                }
            }
        });
        changed
    }
}

impl eframe::App for FloatingApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let size = ctx.screen_rect().size();
        if size.x < 1.0 || size.y < 1.0 {
            return;
        }

        let changed = self.controls(ctx);
        if changed || self.engine.is_none() || size != self.viewport {
            self.viewport = size;
            self.rebuild(ctx);
        }

        let (hover, time) = ctx.input(|i| (i.pointer.hover_pos(), i.time));
        if let Some(engine) = &mut self.engine {
            let pointer = engine.pointer();
            match hover {
                Some(pos) => pointer.move_to(pos),
                None => pointer.leave(),
            }
            engine.tick(time);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(Color32::from_rgb(18, 16, 28)))
            .show(ctx, |ui| {
                let painter = ui.painter();
                for entry in self.frame.borrow().iter() {
                    let glyph = GLYPHS[entry.id % GLYPHS.len()];
                    let size = 16.0 + ((entry.id * 7) % 11) as f32;
                    let color = if entry.id % 2 == 0 { PURPLE } else { LIME };
                    painter.text(entry.position, Align2::CENTER_CENTER, glyph, FontId::proportional(size), color);
                }
            });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([200.0, 150.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ukiyo",
        native_options,
        Box::new(|cc| Ok(Box::new(FloatingApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
