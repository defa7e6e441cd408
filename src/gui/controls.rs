use eframe::egui::{self, Button, Color32, RichText, Stroke, Ui};

const BUTTON_FILL: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
const BUTTON_ACTIVE_FILL: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
const BUTTON_TEXT_SIZE: f32 = 16.0;
const BUTTON_SIZE: egui::Vec2 = egui::vec2(120.0, 36.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlAction {
    Start,
    Stop,
    Reset,
    ChooseBackground,
    None,
}

pub(crate) fn show(ui: &mut Ui) -> ControlAction {
    style_buttons(ui);

    let mut action = ControlAction::None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 20.0;

        if control_button(ui, "▶ Start") {
            action = ControlAction::Start;
        }

        if control_button(ui, "⏸ Stop") {
            action = ControlAction::Stop;
        }

        if control_button(ui, "⟳ Reset") {
            action = ControlAction::Reset;
        }

        if control_button(ui, "Background…") {
            action = ControlAction::ChooseBackground;
        }
    });

    action
}

fn control_button(ui: &mut Ui, label: &str) -> bool {
    let text = RichText::new(label)
        .size(BUTTON_TEXT_SIZE)
        .strong()
        .color(Color32::WHITE);

    ui.add(Button::new(text).min_size(BUTTON_SIZE)).clicked()
}

fn style_buttons(ui: &mut Ui) {
    let widgets = &mut ui.visuals_mut().widgets;
    widgets.inactive.weak_bg_fill = BUTTON_FILL;
    widgets.hovered.weak_bg_fill = BUTTON_ACTIVE_FILL;
    widgets.active.weak_bg_fill = BUTTON_ACTIVE_FILL;

    for visuals in [
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
    ] {
        visuals.bg_stroke = Stroke::NONE;
        visuals.fg_stroke.color = Color32::WHITE;
    }
}
