use super::TimerApp;
use crate::ui_egui::context::ShortcutAction;
use egui::Key;
use std::time::Instant;

const PRESET_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

/// Space toggles, R resets, 1-9 pick a preset, Ctrl+M minimizes.
pub(super) fn shortcut_actions(input: &egui::InputState) -> Vec<ShortcutAction> {
    let mut actions = Vec::new();

    if input.modifiers.ctrl {
        if input.key_pressed(Key::M) {
            actions.push(ShortcutAction::Minimize);
        }
        return actions;
    }

    if input.key_pressed(Key::Space) {
        actions.push(ShortcutAction::Toggle);
    }
    if input.key_pressed(Key::R) {
        actions.push(ShortcutAction::Reset);
    }
    for (index, key) in PRESET_KEYS.iter().enumerate() {
        if input.key_pressed(*key) {
            actions.push(ShortcutAction::SelectPreset(index));
        }
    }

    actions
}

impl TimerApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context, now: Instant) {
        // A focused button already reacts to Space itself
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }

        // Collected first: the shell sends viewport commands, which must not
        // happen while the input state is locked.
        let actions = ctx.input(shortcut_actions);
        for action in actions {
            self.context.apply(action, now);
        }
    }
}
