use console_core::{
    aggregate::dashboard_tasks,
    format::{format_contact_date, format_usd},
    routing::{IN_DEVELOPMENT_BODY, IN_DEVELOPMENT_HEADLINE},
    Action, ConsoleState, FirmOverview, LoginForm, Panel, View, DEMO_NOTICE,
};
use eframe::egui::{self, RichText};
use shared::{
    catalog::{CLIENTS, PERFORMANCE_YTD, RECENT_ACTIVITY, TASKS},
    domain::{ClientRecord, Regime},
};

use crate::config::Settings;
use crate::controller::events::{Notice, NoticeSeverity, UiIntent};
use crate::ui::{
    charts,
    theme::ConsolePalette,
    widgets::{self, card, card_title, select_row, split_columns, stat, status_badge},
};

const COLUMN_GAP: f32 = 28.0;

/// Text buffers behind the demo login card.
#[derive(Debug, Clone)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
    pub focus_requested: bool,
}

impl LoginFields {
    pub fn prefilled(email: &str) -> Self {
        Self {
            email: email.to_string(),
            password: "password".to_string(),
            focus_requested: false,
        }
    }

    pub fn submit(&self) -> UiIntent {
        Action::Login(LoginForm::new(self.email.trim(), self.password.clone())).into()
    }
}

pub fn notice_banner(ui: &mut egui::Ui, notice: Option<&Notice>, intents: &mut Vec<UiIntent>) {
    let Some(notice) = notice else {
        return;
    };
    let (fill, stroke) = match notice.severity {
        NoticeSeverity::Info => (
            egui::Color32::from_rgb(30, 58, 95),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 165, 250)),
        ),
    };

    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(&notice.message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        intents.push(UiIntent::DismissNotice);
                    }
                });
            });
        });
    ui.add_space(12.0);
}

fn login_text_field(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    id: &'static str,
    label: &str,
    value: &mut String,
    password: bool,
) -> egui::Response {
    ui.label(RichText::new(label).size(13.0).color(palette.text_muted));
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .password(password)
        .margin(egui::Margin::symmetric(12, 8))
        .desired_width(f32::INFINITY);
    ui.add_sized([ui.available_width(), 40.0], edit)
}

pub fn login_screen(
    ctx: &egui::Context,
    palette: &ConsolePalette,
    fields: &mut LoginFields,
    notice: Option<&Notice>,
    intents: &mut Vec<UiIntent>,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(palette.app_background))
        .show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(360.0, 448.0);
            ui.add_space((avail.y * 0.14).clamp(18.0, 120.0));

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);
                notice_banner(ui, notice, intents);

                egui::Frame::NONE
                    .fill(palette.card_fill)
                    .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                    .corner_radius(egui::CornerRadius::same(widgets::CARD_RADIUS))
                    .inner_margin(egui::Margin::same(32))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            widgets::brand(ui, palette, 34.0);
                            ui.label(RichText::new("Operate as one.").color(palette.text_muted));
                        });
                        ui.add_space(24.0);

                        let email = login_text_field(
                            ui,
                            palette,
                            "login_email",
                            "Email Address",
                            &mut fields.email,
                            false,
                        );
                        if !fields.focus_requested {
                            fields.focus_requested = true;
                            email.request_focus();
                        }
                        ui.add_space(12.0);
                        let password = login_text_field(
                            ui,
                            palette,
                            "login_password",
                            "Password",
                            &mut fields.password,
                            true,
                        );

                        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                        let submitted_by_enter =
                            enter_pressed && (email.lost_focus() || password.lost_focus());

                        ui.add_space(24.0);
                        let sign_in = egui::Button::new(
                            RichText::new("Sign In")
                                .strong()
                                .size(17.0)
                                .color(egui::Color32::from_rgb(17, 24, 39)),
                        )
                        .fill(palette.accent)
                        .min_size(egui::vec2(ui.available_width(), 44.0));
                        if ui.add(sign_in).clicked() || submitted_by_enter {
                            intents.push(fields.submit());
                        }

                        ui.add_space(16.0);
                        ui.vertical_centered(|ui| {
                            if ui
                                .link(RichText::new("Forgot Password?").color(palette.accent_text))
                                .clicked()
                            {
                                intents.push(UiIntent::ForgotPassword);
                            }
                            ui.add_space(8.0);
                            ui.label(RichText::new(DEMO_NOTICE).size(12.0).color(palette.text_muted));
                        });
                    });
            });
        });
}

pub fn sidebar(
    ctx: &egui::Context,
    palette: &ConsolePalette,
    state: &ConsoleState,
    intents: &mut Vec<UiIntent>,
) {
    egui::SidePanel::left("sidebar")
        .exact_width(256.0)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(palette.sidebar_background)
                .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| {
            ui.add_space(8.0);
            widgets::brand(ui, palette, 24.0);
            ui.add_space(40.0);

            for view in View::MENU {
                let label = format!("{}   {}", widgets::menu_icon(view), view.menu_label());
                let selected = state.view().is(view);
                if select_row(ui, palette, &label, 44.0, selected, false).clicked() {
                    intents.push(Action::SelectView(view.into()).into());
                }
                ui.add_space(4.0);
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                card(ui, palette, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Need Assistance?")
                                .strong()
                                .color(palette.text_strong),
                        );
                        ui.label(
                            RichText::new("Our support team is available 24/7 to help you.")
                                .size(12.0)
                                .color(palette.text_muted),
                        );
                        ui.add_space(8.0);
                        let button = egui::Button::new(RichText::new("Contact Support").strong())
                            .fill(palette.input_fill)
                            .min_size(egui::vec2(ui.available_width(), 34.0));
                        if ui.add(button).clicked() {
                            intents.push(UiIntent::ContactSupport);
                        }
                    });
                });
            });
        });
}

pub fn header(
    ctx: &egui::Context,
    palette: &ConsolePalette,
    state: &ConsoleState,
    search_query: &mut String,
    settings: &Settings,
    intents: &mut Vec<UiIntent>,
) {
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::NONE
                .fill(palette.app_background)
                .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                .inner_margin(egui::Margin::symmetric(24, 18)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(state.title())
                        .strong()
                        .size(28.0)
                        .color(palette.text_strong),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 14.0;
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&settings.advisor_name)
                                .strong()
                                .color(palette.text_strong),
                        );
                        ui.label(
                            RichText::new(&settings.advisor_title)
                                .size(12.0)
                                .color(palette.text_muted),
                        );
                    });
                    widgets::avatar(ui, palette, &settings.advisor_name, 40.0);

                    if ui
                        .add(egui::Button::new(RichText::new("🔔").size(18.0)).frame(false))
                        .on_hover_text("Notifications")
                        .clicked()
                    {
                        intents.push(UiIntent::OpenNotifications);
                    }

                    let (icon, hint) = if state.dark_mode() {
                        ("☀", "Switch to light mode")
                    } else {
                        ("🌙", "Switch to dark mode")
                    };
                    if ui
                        .add(egui::Button::new(RichText::new(icon).size(18.0)).frame(false))
                        .on_hover_text(hint)
                        .clicked()
                    {
                        intents.push(Action::ToggleDarkMode.into());
                    }

                    // Not wired to any filtering.
                    ui.add(
                        egui::TextEdit::singleline(search_query)
                            .id_salt("header_search")
                            .hint_text("🔍 Search clients, tasks...")
                            .margin(egui::Margin::symmetric(10, 6))
                            .desired_width(288.0),
                    );
                });
            });
        });
}

pub fn panel_body(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    state: &ConsoleState,
    intents: &mut Vec<UiIntent>,
) {
    match state.panel() {
        Panel::Dashboard => dashboard(ui, palette),
        Panel::ClientHub => client_hub(ui, palette, intents),
        Panel::Macroscope => macroscope(ui, palette, state.regime(), intents),
        Panel::InDevelopment => in_development(ui, palette),
    }
}

fn dashboard(ui: &mut egui::Ui, palette: &ConsolePalette) {
    let overview = FirmOverview::from_catalog();

    split_columns(
        ui,
        2.0 / 3.0,
        COLUMN_GAP,
        |ui| {
            card(ui, palette, |ui| {
                card_title(ui, palette, "My Tasks");
                for task in dashboard_tasks(TASKS) {
                    egui::Frame::NONE
                        .fill(palette.inset_fill)
                        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                let (glyph, color) = widgets::task_icon(task.icon);
                                ui.label(RichText::new(glyph).size(16.0).color(color));
                                ui.add_space(8.0);
                                ui.label(RichText::new(task.text).color(palette.text));
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(
                                            RichText::new(task.status.label())
                                                .strong()
                                                .size(13.0)
                                                .color(widgets::task_status_color(
                                                    task.status,
                                                    palette,
                                                )),
                                        );
                                    },
                                );
                            });
                        });
                    ui.add_space(6.0);
                }
            });
            ui.add_space(COLUMN_GAP);
            card(ui, palette, |ui| {
                card_title(ui, palette, "Portfolio Performance (YTD)");
                charts::performance_area_chart(ui, palette, PERFORMANCE_YTD, 300.0);
            });
        },
        |ui| {
            card(ui, palette, |ui| {
                card_title(ui, palette, "Firm Overview");
                stat(ui, palette, "Total AUM", &format_usd(overview.total_aum_usd), true);
                stat(
                    ui,
                    palette,
                    "Active Clients",
                    &overview.active_clients.to_string(),
                    false,
                );
                stat(
                    ui,
                    palette,
                    "Pending Tasks",
                    &overview.pending_tasks.to_string(),
                    false,
                );
            });
            ui.add_space(COLUMN_GAP);
            card(ui, palette, |ui| {
                card_title(ui, palette, "Recent Activity");
                for item in RECENT_ACTIVITY {
                    ui.horizontal_wrapped(|ui| {
                        let (glyph, color) = widgets::activity_icon(item.kind);
                        ui.label(RichText::new(glyph).color(color));
                        ui.spacing_mut().item_spacing.x = 0.0;
                        ui.label(RichText::new(item.lead).size(13.0).color(palette.text));
                        ui.label(
                            RichText::new(item.emphasis)
                                .size(13.0)
                                .strong()
                                .color(palette.text_strong),
                        );
                        ui.label(RichText::new(item.tail).size(13.0).color(palette.text));
                    });
                    ui.add_space(10.0);
                }
            });
        },
    );
}

fn last_contact_text(client: &ClientRecord) -> String {
    match client.last_contact_date() {
        Ok(date) => format_contact_date(date),
        Err(err) => {
            tracing::warn!(client = %client.id, "unparseable last-contact date: {err}");
            client.last_contact.to_string()
        }
    }
}

fn client_hub(ui: &mut egui::Ui, palette: &ConsolePalette, intents: &mut Vec<UiIntent>) {
    card(ui, palette, |ui| {
        card_title(ui, palette, "All Clients");
        ui.separator();

        egui::Grid::new("client_registry")
            .num_columns(7)
            .striped(true)
            .spacing([28.0, 14.0])
            .min_col_width(60.0)
            .show(ui, |ui| {
                for heading in [
                    "Client Name",
                    "Type",
                    "AUM",
                    "Status",
                    "Advisor",
                    "Last Contact",
                    "",
                ] {
                    ui.label(RichText::new(heading).strong().size(13.0).color(palette.text_muted));
                }
                ui.end_row();

                for client in CLIENTS {
                    ui.label(RichText::new(client.name).strong().color(palette.text_strong))
                        .on_hover_text(format!("{} · Risk: {}", client.id, client.risk_profile));
                    ui.label(client.category.label());
                    ui.label(
                        RichText::new(format_usd(client.aum_usd))
                            .monospace()
                            .color(palette.text_strong),
                    );
                    status_badge(ui, client.status);
                    ui.label(client.advisor);
                    ui.label(last_contact_text(client));
                    if ui
                        .add(
                            egui::Button::new(
                                RichText::new("View Hub →").color(palette.accent_text),
                            )
                            .frame(false),
                        )
                        .clicked()
                    {
                        intents.push(UiIntent::OpenClientHub(client.id));
                    }
                    ui.end_row();
                }
            });
    });
}

fn macroscope(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    regime: Regime,
    intents: &mut Vec<UiIntent>,
) {
    let dataset = shared::catalog::dataset_for(regime);

    split_columns(
        ui,
        2.0 / 3.0,
        COLUMN_GAP,
        |ui| {
            card(ui, palette, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Regime-Adaptive Asset Allocation")
                            .strong()
                            .size(19.0)
                            .color(palette.text_strong),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(regime.label())
                                .strong()
                                .size(17.0)
                                .color(palette.accent_text),
                        );
                    });
                });
                ui.add_space(8.0);
                ui.label(
                    RichText::new(
                        "Select a historical economic era to visualize the annualized \
                         performance of major asset classes during that period. This tool \
                         helps turn market intuition into data-backed historical context.",
                    )
                    .color(palette.text_muted),
                );
                ui.add_space(16.0);
                charts::regime_bar_chart(ui, palette, &dataset, 400.0);
            });
        },
        |ui| {
            card(ui, palette, |ui| {
                card_title(ui, palette, "Select Economic Regime");
                for candidate in Regime::ALL {
                    let selected = *candidate == regime;
                    if select_row(ui, palette, candidate.label(), 56.0, selected, true).clicked() {
                        intents.push(Action::SelectRegime(*candidate).into());
                    }
                    ui.add_space(10.0);
                }
            });
        },
    );
}

fn in_development(ui: &mut egui::Ui, palette: &ConsolePalette) {
    card(ui, palette, |ui| {
        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(IN_DEVELOPMENT_HEADLINE)
                    .strong()
                    .size(24.0)
                    .color(palette.text_strong),
            );
            ui.add_space(12.0);
            ui.label(RichText::new(IN_DEVELOPMENT_BODY).color(palette.text_muted));
        });
        ui.add_space(28.0);
    });
}
