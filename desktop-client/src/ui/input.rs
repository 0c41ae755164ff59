use common::games::snake::Direction;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiCommand {
    Turn(Direction),
    TogglePause,
    /// Start, restart or pause depending on the session state.
    Primary,
    Restart,
    Quit,
}

pub fn read_commands(ctx: &egui::Context) -> Vec<UiCommand> {
    ctx.input(|i| {
        let mut commands = Vec::new();

        if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
            commands.push(UiCommand::Turn(Direction::Up));
        }
        if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
            commands.push(UiCommand::Turn(Direction::Down));
        }
        if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
            commands.push(UiCommand::Turn(Direction::Left));
        }
        if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
            commands.push(UiCommand::Turn(Direction::Right));
        }
        if i.key_pressed(egui::Key::P) || i.key_pressed(egui::Key::Escape) {
            commands.push(UiCommand::TogglePause);
        }
        if i.key_pressed(egui::Key::Space) {
            commands.push(UiCommand::Primary);
        }
        if i.key_pressed(egui::Key::R) {
            commands.push(UiCommand::Restart);
        }
        if i.key_pressed(egui::Key::Q) {
            commands.push(UiCommand::Quit);
        }

        commands
    })
}
