mod background;
mod controls;

use background::{Background, IMAGE_EXTENSIONS};
use controls::ControlAction;

use crate::{
    app::{Ticker, TimerModel},
    options::Options,
    util::{format_elapsed, Clock, SystemClock},
};

use eframe::{
    egui::{self, vec2, Align2, Color32, FontId, Id, Visuals},
    App, CreationContext,
};
use log::{debug, warn};

use std::time::Duration;

const TIMER_COLOR: Color32 = Color32::from_rgb(0x00, 0xff, 0x00);
const TIMER_FONT_SIZE: f32 = 70.0;
const TIMER_OFFSET: f32 = -50.0;
const CONTROLS_OFFSET: f32 = 80.0;

pub struct Gui<C = SystemClock> {
    timer: TimerModel<C>,
    ticker: Ticker,
    background: Background,
}

impl Gui<SystemClock> {
    pub const TITLE: &'static str = "Stopwatch with Fullscreen Background";

    pub fn new(cc: &CreationContext<'_>, options: &Options) -> Gui<SystemClock> {
        cc.egui_ctx.set_visuals(Visuals::dark());

        let mut background = Background::default();
        if let Some(path) = &options.background {
            if let Err(e) = background.load(&cc.egui_ctx, path) {
                warn!("{:?}", e);
            }
        }

        Gui::with_clock(SystemClock, background)
    }
}

impl<C: Clock> Gui<C> {
    fn with_clock(clock: C, background: Background) -> Gui<C> {
        Gui {
            timer: TimerModel::with_clock(clock),
            ticker: Ticker::default(),
            background,
        }
    }

    fn label(&self) -> String {
        format_elapsed(self.timer.elapsed())
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: ControlAction) {
        match action {
            ControlAction::Start => self.timer.start(),
            ControlAction::Stop => self.timer.stop(),
            ControlAction::Reset => self.timer.reset(),
            ControlAction::ChooseBackground => self.choose_background(ctx),
            ControlAction::None => return,
        }

        ctx.request_repaint();
    }

    /// Requests the next refresh while the timer runs, returns its delay
    fn schedule_repaint(&mut self, ctx: &egui::Context) -> Option<Duration> {
        let delay = self.ticker.next_tick(&self.timer)?;
        ctx.request_repaint_after(delay);
        Some(delay)
    }

    fn choose_background(&mut self, ctx: &egui::Context) {
        let mut dialog = rfd::FileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);
        if let Some(dir) = self.background.path().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }

        let path = match dialog.pick_file() {
            Some(v) => v,
            None => {
                debug!("Background selection cancelled");
                return;
            }
        };

        if let Err(e) = self.background.load(ctx, &path) {
            warn!("{:?}", e);
        }
    }
}

impl<C: Clock> App for Gui<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let painter = ui.painter();
                self.background.paint(painter, screen);
                painter.text(
                    screen.center() + vec2(0.0, TIMER_OFFSET),
                    Align2::CENTER_CENTER,
                    self.label(),
                    FontId::proportional(TIMER_FONT_SIZE),
                    TIMER_COLOR,
                );
            });

        let action = egui::Area::new(Id::new("controls"))
            .anchor(Align2::CENTER_CENTER, vec2(0.0, CONTROLS_OFFSET))
            .show(ctx, controls::show)
            .inner;

        self.handle_action(ctx, action);

        self.schedule_repaint(ctx);
    }
}
