use egui::Context;
use std::time::Duration;

pub mod card;
pub mod controller;
pub mod deck;
pub mod screen;
pub mod theme;
pub mod timer;

use crate::config::Config;
use crate::error::Result;
use controller::GameController;
use deck::DeckSize;
use screen::{AppInterface, RecallScreen};
use theme::UI_SCALE_RANGE;

/// Longest gap between repaints while a hand is showing, so the countdown ticks
const COUNTDOWN_REPAINT: Duration = Duration::from_millis(250);

/// Everything the screen can ask the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Start,
    Reset,
    Submit,
    SetDeckSize(DeckSize),
    SetCardCount(i64),
    SetTimer(i64),
    Select(String),
    Deselect(String),
}

/// How the app is drawn, independent of the round being played
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub ui_scale: f32,
    pub dark_mode: bool,
}

/// Owns the game and draws it once per frame.
pub struct App {
    controller: GameController,
    screen: RecallScreen,
    media_root: String,
    view: ViewSettings,

    // Event queue for handling screen input
    pending_events: Vec<AppEvent>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let config = Config::default();
        Self::build(GameController::default(), &config)
    }

    /// Build the app from a loaded configuration. Fails when the configured
    /// round settings are out of range.
    pub fn with_config(config: &Config) -> Result<Self> {
        let controller = GameController::new(config.round)?;
        Ok(Self::build(controller, config))
    }

    fn build(controller: GameController, config: &Config) -> Self {
        Self {
            controller,
            screen: RecallScreen::new(),
            media_root: config.media_root.clone(),
            view: ViewSettings {
                ui_scale: crate::calculate_dpi_scale(),
                dark_mode: config.dark_mode,
            },
            pending_events: Vec::new(),
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Queue an event to be processed
    pub fn queue_event(&mut self, event: AppEvent) {
        self.pending_events.push(event);
    }

    /// Apply one event to the game at frame time `now`.
    pub fn apply(&mut self, event: AppEvent, now: f64) -> Result<()> {
        match event {
            AppEvent::Start => {
                self.controller.start(now, &mut rand::rng())?;
            }
            AppEvent::Reset => self.controller.reset(),
            AppEvent::Submit => {
                self.controller.submit()?;
            }
            AppEvent::SetDeckSize(size) => self.controller.set_deck_size(size)?,
            AppEvent::SetCardCount(value) => self.controller.set_card_count(value)?,
            AppEvent::SetTimer(value) => self.controller.set_timer_secs(value)?,
            AppEvent::Select(name) => self.controller.select(&name)?,
            AppEvent::Deselect(name) => self.controller.deselect(&name)?,
        }
        Ok(())
    }

    /// Process all pending events. Rejected input leaves the game as it was.
    fn process_events(&mut self, now: f64) {
        let events = std::mem::take(&mut self.pending_events);
        for event in events {
            let label = format!("{event:?}");
            if let Err(e) = self.apply(event, now) {
                tracing::debug!(event = %label, "ignored: {e}");
            }
        }
    }

    /// Run one frame at time `now`: expire the reveal, let `draw` queue input
    /// against the updated state, then apply it. Returns the longest the next
    /// frame may wait while a hand is still showing.
    fn step(&mut self, now: f64, draw: impl FnOnce(&mut Self)) -> Option<Duration> {
        self.controller.tick(now);
        draw(self);
        self.process_events(now);
        self.controller
            .remaining(now)
            .map(|left| left.min(COUNTDOWN_REPAINT))
    }

    fn draw(&mut self, ctx: &Context, now: f64) {
        ctx.set_pixels_per_point(self.view.ui_scale);
        ctx.set_visuals(if self.view.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.view_bar(ctx);

        let mut events = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut app_interface = AppInterface {
                events: &mut events,
                controller: &self.controller,
                media_root: &self.media_root,
                now,
            };
            self.screen.ui(&mut app_interface, ui);
        });
        self.pending_events.extend(events);
    }

    /// Scale and theme controls. They never touch the round.
    fn view_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("view_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("CardRecall").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let toggle = if self.view.dark_mode { "☀ Light" } else { "🌙 Dark" };
                    if ui.button(toggle).clicked() {
                        self.view.dark_mode = !self.view.dark_mode;
                    }
                    ui.menu_button("🔍 Scale", |ui| {
                        ui.add(egui::Slider::new(&mut self.view.ui_scale, UI_SCALE_RANGE));
                        if ui.button("Fit screen").clicked() {
                            self.view.ui_scale = crate::calculate_dpi_scale();
                        }
                    });
                });
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        // Nothing else wakes the app up while the player is just looking
        if let Some(wait) = self.step(now, |app| app.draw(ctx, now)) {
            ctx.request_repaint_after(wait);
        }
    }
}
