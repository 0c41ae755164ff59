use std::time::{Duration, Instant};

use chrono::Local;
use common::games::snake::{SessionStatus, SnakeSession, TickOutcome};
use common::games::PeriodicTimer;
use common::log;
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::board::BoardPainter;
use super::fps_counter::FpsCounter;
use super::input::{read_commands, UiCommand};

const EVENT_LOG_SIZE: usize = 8;
pub const SIDE_PANEL_WIDTH: f32 = 220.0;

pub struct SnakeApp {
    session: SnakeSession,
    tick_timer: PeriodicTimer,
    rock_timer: Option<PeriodicTimer>,
    board: BoardPainter,
    fps: FpsCounter,
    show_fps: bool,
    event_log: AllocRingBuffer<String>,
}

impl SnakeApp {
    pub fn new(session: SnakeSession, cell_size: f32, show_fps: bool) -> Self {
        let now = Instant::now();
        let tick_timer = PeriodicTimer::new(session.tick_interval(), now);
        let rock_timer = session
            .rock_spawn_interval()
            .map(|interval| PeriodicTimer::new(interval, now));

        Self {
            session,
            tick_timer,
            rock_timer,
            board: BoardPainter::new(cell_size),
            fps: FpsCounter::new(),
            show_fps,
            event_log: AllocRingBuffer::new(EVENT_LOG_SIZE),
        }
    }

    fn push_event(&mut self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S");
        self.event_log.enqueue(format!("[{}] {}", timestamp, message));
    }

    fn reset_timers(&mut self, now: Instant) {
        self.tick_timer.set_interval(self.session.tick_interval());
        self.tick_timer.reset(now);
        if let Some(rock_timer) = self.rock_timer.as_mut() {
            rock_timer.reset(now);
        }
    }

    fn start(&mut self, now: Instant) {
        self.session.start();
        self.reset_timers(now);
        self.push_event("Game started".to_string());
    }

    fn restart(&mut self, now: Instant) {
        self.session.restart();
        self.reset_timers(now);
        self.push_event(format!("Game #{} started", self.session.games_played()));
    }

    fn toggle_pause(&mut self, now: Instant) {
        self.session.toggle_pause();
        match self.session.status() {
            SessionStatus::Paused => self.push_event("Paused".to_string()),
            SessionStatus::Running => {
                self.reset_timers(now);
                self.push_event("Resumed".to_string());
            }
            _ => {}
        }
    }

    fn apply_command(&mut self, command: UiCommand, ctx: &egui::Context, now: Instant) {
        match command {
            UiCommand::Turn(direction) => self.session.set_direction_intent(direction),
            UiCommand::TogglePause => self.toggle_pause(now),
            UiCommand::Primary => match self.session.status() {
                SessionStatus::Ready => self.start(now),
                SessionStatus::GameOver(_) => self.restart(now),
                SessionStatus::Running | SessionStatus::Paused => self.toggle_pause(now),
            },
            UiCommand::Restart => self.restart(now),
            UiCommand::Quit => {
                log!("Quit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    /// Fires whichever timers are due. Each callback gets the session to
    /// itself, the tick first.
    fn run_timers(&mut self, now: Instant) {
        if !self.session.is_running() {
            return;
        }

        self.tick_timer.set_interval(self.session.tick_interval());
        if self.tick_timer.poll(now) {
            let interval_before = self.session.tick_interval();
            match self.session.tick() {
                Some(TickOutcome::Ate(food)) => {
                    let kind = if food.is_special() { "special food" } else { "food" };
                    self.push_event(format!("Ate {} (+{})", kind, food.value()));
                }
                Some(TickOutcome::Died(reason)) => {
                    self.push_event(format!(
                        "Game over: the snake {} ({} points)",
                        reason.describe(),
                        self.session.score()
                    ));
                }
                Some(TickOutcome::Moved) | None => {}
            }
            let interval_after = self.session.tick_interval();
            if interval_after != interval_before {
                self.push_event(format!("Speed up: {}ms per step", interval_after.as_millis()));
            }
        }

        if !self.session.is_running() {
            return;
        }

        let rock_due = self
            .rock_timer
            .as_mut()
            .is_some_and(|rock_timer| rock_timer.poll(now));
        if rock_due && let Some(rock) = self.session.spawn_rock_tick() {
            self.push_event(format!("A rock fell at ({}, {})", rock.x, rock.y));
        }
    }

    fn render_side_panel(&mut self, ui: &mut egui::Ui, now: Instant) {
        let snapshot = self.session.snapshot();

        ui.heading(snapshot.variant.title());
        ui.separator();

        ui.label(egui::RichText::new(format!("🎯 Score: {}", snapshot.score)).size(18.0));
        ui.label(egui::RichText::new(format!("🏆 High Score: {}", snapshot.high_score)).size(18.0));
        ui.label(format!("Length: {}", snapshot.snake.len()));
        ui.label(format!("Speed: {}ms per step", snapshot.tick_interval.as_millis()));
        if let Some(rock_interval) = snapshot.rock_spawn_interval {
            ui.label(format!("Rocks: {}", snapshot.rocks.len()));
            let next_rock = self
                .rock_timer
                .as_ref()
                .filter(|_| snapshot.running)
                .map(|timer| timer.time_until_due(now))
                .unwrap_or(rock_interval);
            ui.label(format!("Next rock in {:.0}s", next_rock.as_secs_f32().ceil()));
        }
        if self.show_fps {
            ui.label(format!("FPS: {}", self.fps.fps()));
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let pause_label = if snapshot.paused { "▶ Resume" } else { "⏸ Pause" };
            if ui
                .add_enabled(snapshot.running || snapshot.paused, egui::Button::new(pause_label))
                .clicked()
            {
                self.toggle_pause(now);
            }
            if ui.button("🔄 Restart").clicked() {
                self.restart(now);
            }
        });
        if ui.button("🚪 Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.label(egui::RichText::new("Events").strong());
        if self.event_log.is_empty() {
            ui.label(egui::RichText::new("Nothing yet...").italics().color(egui::Color32::GRAY));
        } else {
            for message in self.event_log.iter().rev() {
                ui.label(egui::RichText::new(message).small());
            }
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.label(
                egui::RichText::new("↑ ↓ ← → / WASD move · P pause · SPACE start · R restart · Q quit")
                    .small()
                    .color(egui::Color32::GRAY),
            );
        });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.fps.frame(now);

        for command in read_commands(ctx) {
            self.apply_command(command, ctx, now);
        }

        self.run_timers(now);

        egui::SidePanel::right("snake_side_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                self.render_side_panel(ui, now);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.board.paint(ui, &self.session.snapshot());
            });
        });

        if self.session.is_running() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
