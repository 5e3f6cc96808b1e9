// app.rs - egui front end driving a Universe through its public API

use std::time::{Duration, Instant};

use conway::patterns::PATTERNS;
use conway::{Layout, Seed, Universe};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use log::{info, warn};

use crate::cycle::CycleDetector;
use crate::fps::FpsCounter;

const SPACING: f32 = 1.0;

pub struct Settings {
    pub cell_size: f32,
    pub update_interval: Duration,
    pub random_seed: u64,
}

pub struct GridApp<L: Layout> {
    universe: Universe<L>,
    is_running: bool,
    last_update: Instant,
    update_interval: Duration,
    cell_size: f32,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
    /// Seed for the next "Random" press; bumped each time so presses differ.
    random_seed: u64,
    fps: FpsCounter,
    cycles: CycleDetector,
}

impl<L: Layout> GridApp<L> {
    pub fn new(universe: Universe<L>, settings: Settings) -> Self {
        let now = Instant::now();
        Self {
            universe,
            is_running: false,
            last_update: now,
            update_interval: settings.update_interval,
            cell_size: settings.cell_size,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            random_seed: settings.random_seed,
            fps: FpsCounter::new(now),
            cycles: CycleDetector::default(),
        }
    }

    fn step(&mut self) {
        self.universe.tick();
        if self.cycles.observe(self.universe.cells().as_bytes()) && self.is_running {
            warn!(
                "generation {} repeats a recent state, pausing",
                self.universe.generation()
            );
            self.is_running = false;
        }
    }

    fn reseed(&mut self, seed: Seed) {
        self.is_running = false;
        let (width, height) = (self.universe.width(), self.universe.height());
        // Dimensions come from a live universe, so construction cannot fail.
        if let Ok(universe) = Universe::with_seed(width, height, seed) {
            self.universe = universe;
        }
        self.cycles.reset();
        info!("reseeded with {:?}", seed);
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.is_running = !self.is_running;
                if self.is_running {
                    self.last_update = Instant::now();
                    self.cycles.reset();
                }
                info!("running: {}", self.is_running);
            }

            if ui.button("⏭ Step").clicked() {
                self.is_running = false;
                self.step();
            }

            if ui.button("⏹ Clear").clicked() {
                self.reseed(Seed::Dead);
            }

            if ui.button("🎲 Random").clicked() {
                let seed = self.random_seed;
                self.random_seed = self.random_seed.wrapping_add(1);
                self.reseed(Seed::Random(seed));
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.reseed(Seed::Pattern(PATTERNS[self.selected_pattern]));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1.0 / self.update_interval.as_secs_f32().max(1e-3);
            if ui
                .add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec"))
                .changed()
            {
                self.update_interval = Duration::from_secs_f32(1.0 / speed);
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn grid(&mut self, ui: &mut egui::Ui) {
        let (width, height) = (self.universe.width(), self.universe.height());
        let pitch = self.cell_size + SPACING;
        let total_size = Vec2::new(pitch * width as f32 + SPACING, pitch * height as f32 + SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::from_gray(204));

        // Fetch a fresh view every frame; it must not outlive a tick or toggle.
        let cells = self.universe.cells();
        for (row, col, cell) in cells.iter_cells() {
            let min = origin + Vec2::new(col as f32 * pitch + SPACING, row as f32 * pitch + SPACING);
            let rect = Rect::from_min_size(min, Vec2::splat(self.cell_size));
            let color = if cell.is_alive() { self.live_color } else { self.dead_color };
            painter.rect_filled(rect, 0.0, color);
        }
        painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(204)));

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((row, col)) = cell_at(pos, origin, pitch, width, height) {
                    // `cell_at` clamps to the grid, so the toggle is in range.
                    if let Err(err) = self.universe.toggle(row, col) {
                        warn!("{err}");
                    }
                    self.cycles.reset();
                }
            }
        }
    }

    fn status(&self, ui: &mut egui::Ui) {
        let cells = self.universe.width() as usize * self.universe.height() as usize;
        let population = self.universe.population();
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.universe.generation()));
            ui.separator();
            ui.label(format!("Live cells: {}", population));
            ui.label(format!("Dead cells: {}", cells - population));
            ui.label(format!(
                "Population: {:.1}%",
                population as f32 / cells as f32 * 100.0
            ));
        });

        if let Some(stats) = self.fps.stats() {
            ui.monospace(format!(
                "Frames Per Second:\n         latest = {:.0}\navg of last 100 = {:.0}\nmin of last 100 = {:.0}\nmax of last 100 = {:.0}",
                stats.latest, stats.mean, stats.min, stats.max
            ));
        }
    }
}

/// Maps a pointer position to (row, col), clamping to the last row and column.
///
/// Returns `None` above or left of the grid.
pub fn cell_at(pos: Pos2, origin: Pos2, pitch: f32, width: u32, height: u32) -> Option<(u32, u32)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 || pitch <= 0.0 {
        return None;
    }
    let row = ((offset.y / pitch) as u32).min(height.saturating_sub(1));
    let col = ((offset.x / pitch) as u32).min(width.saturating_sub(1));
    Some((row, col))
}

impl<L: Layout> eframe::App for GridApp<L> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.fps.frame(now);

        if self.is_running && now.duration_since(self.last_update) >= self.update_interval {
            self.step();
            self.last_update = now;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            self.controls(ui);
            ui.separator();
            ui.label("Click cells to toggle them alive/dead.");
            egui::ScrollArea::both().show(ui, |ui| self.grid(ui));
            ui.separator();
            self.status(ui);
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
