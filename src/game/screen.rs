use egui::{vec2, FontId, RichText};

use super::controller::{GameController, MessageKind};
use super::deck::DeckSize;
use super::theme::*;
use super::AppEvent;
use crate::config::TIMER_RANGE;

/// What the screen may read and how it talks back to the app.
///
/// The screen never mutates the controller; it queues events that the app
/// applies once the frame is drawn.
pub struct AppInterface<'a> {
    pub events: &'a mut Vec<AppEvent>,
    pub controller: &'a GameController,
    pub media_root: &'a str,
    /// Frame clock, seconds since the app started
    pub now: f64,
}

impl<'a> AppInterface<'a> {
    pub fn queue_event(&mut self, event: AppEvent) {
        self.events.push(event);
    }
}

/// The single game screen: settings, hand, selector and result.
#[derive(Default)]
pub struct RecallScreen {
    search: String,
}

impl RecallScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("CardRecall")
                    .font(FontId::proportional(FONT_SIZE_LG))
                    .strong(),
            );
        });
        ui.add_space(MARGIN_LG);

        self.inputs_ui(app_interface, ui);
        ui.add_space(MARGIN_SM);
        self.buttons_ui(app_interface, ui);
        ui.add_space(MARGIN_LG);

        let controller = app_interface.controller;
        if controller.showing_cards() {
            self.hand_ui(app_interface, ui);
        }
        if controller.showing_selector() {
            self.selector_ui(app_interface, ui);
        } else if !self.search.is_empty() {
            self.search.clear();
        }

        ui.add_space(MARGIN_MD);
        message_ui(controller, ui);
    }

    fn inputs_ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui) {
        let controller = app_interface.controller;
        let settings = controller.settings();
        ui.add_enabled_ui(!controller.is_round_active(), |ui| {
            ui.horizontal(|ui| {
                ui.label("Deck:");
                for size in DeckSize::ALL {
                    let selected = settings.deck_size == size;
                    if ui.selectable_label(selected, size.to_string()).clicked() && !selected {
                        app_interface.queue_event(AppEvent::SetDeckSize(size));
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label(format!(
                    "Card Count {} (1-{})",
                    settings.card_count,
                    settings.deck_size.count()
                ));
                let mut value = settings.card_count as i64;
                if ui.add(egui::DragValue::new(&mut value).speed(0.2)).changed() {
                    app_interface.queue_event(AppEvent::SetCardCount(value));
                }
            });

            ui.horizontal(|ui| {
                ui.label(format!(
                    "Timer {} seconds ({}-{})",
                    settings.timer_secs,
                    TIMER_RANGE.start(),
                    TIMER_RANGE.end()
                ));
                let mut value = i64::from(settings.timer_secs);
                if ui.add(egui::DragValue::new(&mut value).speed(0.5)).changed() {
                    app_interface.queue_event(AppEvent::SetTimer(value));
                }
            });
        });
    }

    fn buttons_ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui) {
        let locked = app_interface.controller.is_round_active();
        let size = vec2(BUTTON_MIN_WIDTH, BUTTON_MIN_HEIGHT);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!locked, egui::Button::new("Start").min_size(size))
                .clicked()
            {
                app_interface.queue_event(AppEvent::Start);
            }
            if ui.add(egui::Button::new("Reset").min_size(size)).clicked() {
                app_interface.queue_event(AppEvent::Reset);
            }
        });
    }

    fn hand_ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui) {
        let controller = app_interface.controller;
        if let Some(left) = controller.remaining(app_interface.now) {
            ui.label(
                RichText::new(format!("Hiding in {}s", left.as_secs_f64().ceil() as u64))
                    .font(FontId::proportional(FONT_SIZE_SM)),
            );
            ui.add_space(MARGIN_SM);
        }
        egui::ScrollArea::vertical()
            .id_salt("hand")
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = vec2(MARGIN_MD, MARGIN_MD);
                    for card in controller.hand() {
                        ui.vertical(|ui| {
                            ui.set_width(CARD_DISPLAY_SIZE.x);
                            ui.label(RichText::new(&card.name).strong());
                            ui.add(card.img(app_interface.media_root).max_size(CARD_DISPLAY_SIZE));
                        });
                    }
                });
            });
    }

    fn selector_ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui) {
        let controller = app_interface.controller;
        ui.label(format!(
            "Pick the {} cards in the order they were shown",
            controller.hand().len()
        ));
        ui.add_space(MARGIN_SM);

        ui.horizontal_wrapped(|ui| {
            for (i, name) in controller.selection().iter().enumerate() {
                if ui
                    .button(format!("{}. {} ✖", i + 1, name))
                    .on_hover_text("Remove")
                    .clicked()
                {
                    app_interface.queue_event(AppEvent::Deselect(name.clone()));
                }
            }
        });
        ui.add_space(MARGIN_SM);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.text_edit_singleline(&mut self.search);
        });
        let needle = self.search.to_lowercase();
        egui::ComboBox::from_id_salt("card_picker")
            .selected_text("Add a card…")
            .width(PICKER_WIDTH)
            .show_ui(ui, |ui| {
                let options = controller.deck().iter().filter(|c| {
                    !controller.is_selected(&c.name) && c.name.to_lowercase().contains(&needle)
                });
                for card in options {
                    if ui.selectable_label(false, card.name.as_str()).clicked() {
                        app_interface.queue_event(AppEvent::Select(card.name.clone()));
                    }
                }
            });
        ui.add_space(MARGIN_SM);

        if ui
            .add(egui::Button::new("Submit").min_size(vec2(BUTTON_MIN_WIDTH, BUTTON_MIN_HEIGHT)))
            .clicked()
        {
            app_interface.queue_event(AppEvent::Submit);
        }
    }
}

fn message_ui(controller: &GameController, ui: &mut egui::Ui) {
    let Some(outcome) = controller.outcome() else {
        return;
    };
    let color = match outcome.kind() {
        MessageKind::Success => MESSAGE_SUCCESS,
        MessageKind::Error => MESSAGE_ERROR,
    };
    ui.label(
        RichText::new(outcome.message())
            .font(FontId::proportional(FONT_SIZE_MD))
            .color(color)
            .strong(),
    );
}
