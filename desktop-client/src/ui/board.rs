use common::games::snake::{Direction, Food, GameVariant, Point, SnakeSnapshot};
use eframe::egui;

const CLASSIC_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x1E, 0x1E, 0x2E);
const CLASSIC_GRID_LINE: egui::Color32 = egui::Color32::from_rgb(0x2A, 0x2A, 0x3C);
const GOOGLE_LIGHT: egui::Color32 = egui::Color32::from_rgb(0xAA, 0xD7, 0x51);
const GOOGLE_DARK: egui::Color32 = egui::Color32::from_rgb(0xA2, 0xD1, 0x49);
const SNAKE_HEAD: egui::Color32 = egui::Color32::from_rgb(0x45, 0x73, 0xE8);
const SNAKE_TAIL: egui::Color32 = egui::Color32::from_rgb(0x8A, 0xB4, 0xF8);
const CLASSIC_HEAD: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
const CLASSIC_TAIL: egui::Color32 = egui::Color32::from_rgb(0x1B, 0x5E, 0x20);
const FOOD: egui::Color32 = egui::Color32::from_rgb(0xE7, 0x47, 0x1D);
const SPECIAL_FOOD: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xC1, 0x07);
const ROCK: egui::Color32 = egui::Color32::from_rgb(0x75, 0x75, 0x75);
const ROCK_SHADE: egui::Color32 = egui::Color32::from_rgb(0x52, 0x52, 0x52);

pub struct BoardPainter {
    cell_size: f32,
}

impl BoardPainter {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn board_size(&self, field_width: usize, field_height: usize) -> egui::Vec2 {
        egui::vec2(
            field_width as f32 * self.cell_size,
            field_height as f32 * self.cell_size,
        )
    }

    pub fn paint(&self, ui: &mut egui::Ui, snapshot: &SnakeSnapshot) {
        let size = self.board_size(snapshot.field_width, snapshot.field_height);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;

        self.paint_background(&painter, response.rect, snapshot);

        for rock in &snapshot.rocks {
            let rect = self.cell_rect(origin, *rock);
            painter.rect_filled(rect.shrink(1.0), 6.0, ROCK_SHADE);
            painter.rect_filled(rect.shrink(4.0), 4.0, ROCK);
        }

        for food in &snapshot.foods {
            self.paint_food(&painter, origin, food);
        }

        self.paint_snake(&painter, origin, snapshot);
        self.paint_overlay(&painter, response.rect, snapshot);
    }

    fn cell_rect(&self, origin: egui::Pos2, point: Point) -> egui::Rect {
        egui::Rect::from_min_size(
            origin + egui::vec2(point.x as f32 * self.cell_size, point.y as f32 * self.cell_size),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }

    fn paint_background(&self, painter: &egui::Painter, rect: egui::Rect, snapshot: &SnakeSnapshot) {
        match snapshot.variant {
            GameVariant::Classic => {
                painter.rect_filled(rect, 0.0, CLASSIC_BACKGROUND);
                let stroke = egui::Stroke::new(1.0, CLASSIC_GRID_LINE);
                for x in 1..snapshot.field_width {
                    let px = rect.min.x + x as f32 * self.cell_size;
                    painter.line_segment([egui::pos2(px, rect.min.y), egui::pos2(px, rect.max.y)], stroke);
                }
                for y in 1..snapshot.field_height {
                    let py = rect.min.y + y as f32 * self.cell_size;
                    painter.line_segment([egui::pos2(rect.min.x, py), egui::pos2(rect.max.x, py)], stroke);
                }
            }
            GameVariant::Google => {
                for y in 0..snapshot.field_height {
                    for x in 0..snapshot.field_width {
                        let color = if (x + y) % 2 == 0 { GOOGLE_LIGHT } else { GOOGLE_DARK };
                        let cell = self.cell_rect(rect.min, Point::new(x as i32, y as i32));
                        painter.rect_filled(cell, 0.0, color);
                    }
                }
            }
        }
    }

    fn paint_food(&self, painter: &egui::Painter, origin: egui::Pos2, food: &Food) {
        let rect = self.cell_rect(origin, food.pos);
        let center = rect.center();
        let radius = self.cell_size * 0.38;

        if food.is_special() {
            painter.add(egui::Shape::convex_polygon(
                star_points(center, radius * 1.15, radius * 0.5)
                    .into_iter()
                    .step_by(2)
                    .collect(),
                SPECIAL_FOOD,
                egui::Stroke::NONE,
            ));
            painter.add(egui::Shape::closed_line(
                star_points(center, radius * 1.15, radius * 0.5),
                egui::Stroke::new(2.0, SPECIAL_FOOD),
            ));
            painter.circle_filled(center, radius * 0.5, SPECIAL_FOOD);
        } else {
            painter.circle_filled(center, radius, FOOD);
            painter.circle_filled(
                center + egui::vec2(radius * 0.35, -radius * 0.35),
                radius * 0.22,
                egui::Color32::from_white_alpha(110),
            );
            painter.line_segment(
                [center - egui::vec2(0.0, radius), center - egui::vec2(-radius * 0.3, radius * 1.4)],
                egui::Stroke::new(2.0, egui::Color32::from_rgb(0x5D, 0x40, 0x37)),
            );
        }
    }

    fn paint_snake(&self, painter: &egui::Painter, origin: egui::Pos2, snapshot: &SnakeSnapshot) {
        let (head_color, tail_color) = match snapshot.variant {
            GameVariant::Classic => (CLASSIC_HEAD, CLASSIC_TAIL),
            GameVariant::Google => (SNAKE_HEAD, SNAKE_TAIL),
        };
        let last = snapshot.snake.len().saturating_sub(1).max(1) as f32;

        for (i, segment) in snapshot.snake.iter().enumerate().rev() {
            let rect = self.cell_rect(origin, *segment);
            let color = lerp_color(head_color, tail_color, i as f32 / last);
            let inset = if i == 0 { 1.0 } else { 2.0 };
            painter.rect_filled(rect.shrink(inset), self.cell_size * 0.3, color);
        }

        if let Some(head) = snapshot.snake.first() {
            self.paint_face(painter, self.cell_rect(origin, *head), snapshot.direction, snapshot.over);
        }
    }

    fn paint_face(&self, painter: &egui::Painter, rect: egui::Rect, direction: Direction, dead: bool) {
        let center = rect.center();
        let (dx, dy) = direction.delta();
        let forward = egui::vec2(dx as f32, dy as f32);
        let side = egui::vec2(-forward.y, forward.x);
        let eye_radius = self.cell_size * 0.14;

        for sign in [-1.0_f32, 1.0] {
            let eye = center + forward * self.cell_size * 0.12 + side * sign * self.cell_size * 0.2;
            painter.circle_filled(eye, eye_radius, egui::Color32::WHITE);
            if dead {
                let d = eye_radius * 0.7;
                let stroke = egui::Stroke::new(1.5, egui::Color32::BLACK);
                painter.line_segment([eye - egui::vec2(d, d), eye + egui::vec2(d, d)], stroke);
                painter.line_segment([eye - egui::vec2(d, -d), eye + egui::vec2(d, -d)], stroke);
            } else {
                painter.circle_filled(eye + forward * eye_radius * 0.4, eye_radius * 0.55, egui::Color32::BLACK);
            }
        }
    }

    fn paint_overlay(&self, painter: &egui::Painter, rect: egui::Rect, snapshot: &SnakeSnapshot) {
        let (title, subtitle) = if snapshot.over {
            let reason = snapshot
                .death_reason
                .map(|reason| format!("The snake {}", reason.describe()))
                .unwrap_or_default();
            ("GAME OVER".to_string(), format!("{}\nPress SPACE or R to restart", reason))
        } else if snapshot.paused {
            ("PAUSED".to_string(), "Press P or SPACE to resume".to_string())
        } else if !snapshot.running {
            (
                snapshot.variant.title().to_string(),
                "Press SPACE to start".to_string(),
            )
        } else {
            return;
        };

        painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(150));
        painter.text(
            rect.center() - egui::vec2(0.0, 24.0),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(36.0),
            egui::Color32::WHITE,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 24.0),
            egui::Align2::CENTER_CENTER,
            subtitle,
            egui::FontId::proportional(16.0),
            egui::Color32::LIGHT_GRAY,
        );
    }
}

fn lerp_color(from: egui::Color32, to: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    egui::Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

/// Alternating outer/inner vertices of a five-pointed star, outer first.
fn star_points(center: egui::Pos2, outer: f32, inner: f32) -> Vec<egui::Pos2> {
    (0..10)
        .map(|i| {
            let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
            let radius = if i % 2 == 0 { outer } else { inner };
            center + egui::vec2(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
