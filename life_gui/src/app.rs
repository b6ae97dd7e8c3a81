// app.rs - eframe app driving the simulation engine

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_engine::{PATTERNS, RunState, Simulation, StepResult};
use rand::rngs::ThreadRng;

// Board and timing defaults; the engine itself has no notion of either.
const BOARD_ROWS: usize = 50;
const BOARD_COLS: usize = 50;
const CELL_PX: f32 = 15.0;
const CELL_SPACING_PX: f32 = 0.5;
const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

pub struct LifeApp {
    sim: Simulation,
    rng: ThreadRng,
    last_update: Instant,
    update_interval: Duration,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            sim: Simulation::new(BOARD_COLS, BOARD_ROWS),
            rng: rand::rng(),
            last_update: Instant::now(),
            update_interval: DEFAULT_INTERVAL,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.sim.is_running() && self.last_update.elapsed() >= self.update_interval {
            match self.sim.step() {
                Ok(StepResult::Advanced { .. }) => {}
                Ok(StepResult::CycleDetected) => {
                    log::info!(
                        "repeating configuration detected at generation {}; simulation stopped",
                        self.sim.current_generation()
                    );
                }
                Err(err) => log::warn!("step rejected: {err}"),
            }
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            self.controls_row(ui);
            ui.separator();
            self.speed_and_colors_row(ui);
            ui.separator();

            if self.sim.run_state() == RunState::Halted {
                ui.colored_label(
                    Color32::DARK_RED,
                    "Repeating configuration detected. Simulation stopped.",
                );
                ui.separator();
            }

            ui.label("Click cells to toggle them while the simulation is paused.");
            ui.separator();

            self.draw_board(ui);
            ui.separator();
            self.status_row(ui);
        });

        // Keep the animation ticking between input events.
        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn controls_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let start_label = if self.sim.is_running() { "⏸ Pause" } else { "▶ Start" };
            if ui.button(start_label).clicked() {
                if self.sim.is_running() {
                    self.sim.stop();
                } else {
                    self.sim.start();
                    self.last_update = Instant::now();
                }
            }

            if ui.button("⏹ Clear").clicked() {
                self.sim.clear();
            }

            if ui.button("🎲 Random").clicked() {
                self.sim.randomize(&mut self.rng);
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_picker")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Load Pattern").clicked() {
                self.sim.load_pattern(&PATTERNS[self.selected_pattern]);
            }

            ui.separator();

            ui.label(format!("Generation: {}", self.sim.current_generation()));
        });
    }

    fn speed_and_colors_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
            if ui
                .add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec"))
                .changed()
            {
                self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let rows = self.sim.grid().height();
        let cols = self.sim.grid().width();
        let total_size = Vec2::new(
            (CELL_PX + CELL_SPACING_PX) * cols as f32 - CELL_SPACING_PX,
            (CELL_PX + CELL_SPACING_PX) * rows as f32 - CELL_SPACING_PX,
        );

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, self.dead_color);

        // Cell edits only land while the simulation is paused.
        let clicked_at = if !self.sim.is_running() && response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };

        for row in 0..rows {
            for col in 0..cols {
                let corner = egui::pos2(
                    origin.x + col as f32 * (CELL_PX + CELL_SPACING_PX),
                    origin.y + row as f32 * (CELL_PX + CELL_SPACING_PX),
                );
                let rect = Rect::from_min_size(corner, Vec2::splat(CELL_PX));

                if self.sim.grid().get(row as i64, col as i64) {
                    painter.rect_filled(rect, 0.0, self.live_color);
                }
                painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(180)));

                if let Some(pos) = clicked_at {
                    if rect.contains(pos) {
                        if let Err(err) = self.sim.edit_cell(row, col) {
                            log::warn!("cell edit rejected: {err}");
                        }
                    }
                }
            }
        }
    }

    fn status_row(&self, ui: &mut egui::Ui) {
        let total = self.sim.grid().width() * self.sim.grid().height();
        let live = self.sim.current_population();
        ui.horizontal(|ui| {
            ui.label(format!("Population: {live}"));
            ui.label(format!("Dead cells: {}", total - live));
            ui.label(format!("Density: {:.1}%", live as f32 / total as f32 * 100.0));
        });
    }
}
