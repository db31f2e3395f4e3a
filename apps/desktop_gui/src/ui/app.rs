use console_core::Console;
use eframe::egui;

use crate::config::Settings;
use crate::controller::{
    events::{Notice, UiIntent},
    orchestration::apply_intents,
};
use crate::ui::{
    panels::{self, LoginFields},
    theme::{self, AppliedTheme},
};

pub struct ConsoleApp {
    console: Console,
    settings: Settings,
    login: LoginFields,
    search_query: String,
    notice: Option<Notice>,
    applied_theme: Option<AppliedTheme>,
}

impl ConsoleApp {
    pub fn new(settings: Settings) -> Self {
        let login = LoginFields::prefilled(&settings.demo_email);
        Self {
            console: Console::new(),
            settings,
            login,
            search_query: String::new(),
            notice: None,
            applied_theme: None,
        }
    }

    fn desired_theme(&self) -> AppliedTheme {
        AppliedTheme {
            dark_mode: self.console.state().dark_mode(),
            text_scale: self.settings.text_scale,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let desired = self.desired_theme();
        if self.applied_theme == Some(desired) {
            return;
        }
        tracing::debug!(dark_mode = desired.dark_mode, "restyling");
        theme::apply(ctx, desired);
        self.applied_theme = Some(desired);
    }

    fn show_main_workspace(&mut self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        let palette = theme::palette(self.console.state().dark_mode());
        let state = self.console.state();

        panels::sidebar(ctx, &palette, state, intents);
        panels::header(
            ctx,
            &palette,
            state,
            &mut self.search_query,
            &self.settings,
            intents,
        );

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(palette.content_background)
                    .inner_margin(egui::Margin::same(32)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        panels::notice_banner(ui, self.notice.as_ref(), intents);
                        panels::panel_body(ui, &palette, state, intents);
                    });
            });
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        let mut intents = Vec::new();
        if self.console.state().is_signed_in() {
            self.show_main_workspace(ctx, &mut intents);
        } else {
            let palette = theme::palette(self.console.state().dark_mode());
            panels::login_screen(
                ctx,
                &palette,
                &mut self.login,
                self.notice.as_ref(),
                &mut intents,
            );
        }

        if apply_intents(&mut self.console, &mut self.notice, intents) {
            ctx.request_repaint();
        }
    }
}
