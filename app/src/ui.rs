use eframe::egui;

use shared::types::{LANGUAGES, MAX_TEXT_LENGTH};

use crate::app::{RequestStatus, SettingsDraft, TtsApp};

impl eframe::App for TtsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process any pending messages from request threads
        self.process_messages();

        // Request repaint to keep UI responsive
        ctx.request_repaint();

        // Settings window (modal)
        if self.settings.is_some() {
            show_settings_window(ctx, self);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Set larger font sizes
            let mut style = (*ctx.style()).clone();
            style.text_styles.insert(
                egui::TextStyle::Body,
                egui::FontId::new(16.0, egui::FontFamily::Proportional),
            );
            style.text_styles.insert(
                egui::TextStyle::Button,
                egui::FontId::new(16.0, egui::FontFamily::Proportional),
            );
            style.text_styles.insert(
                egui::TextStyle::Heading,
                egui::FontId::new(20.0, egui::FontFamily::Proportional),
            );
            ctx.set_style(style);

            // Header with title, credits, and settings
            ui.horizontal(|ui| {
                ui.heading("AI Audio Generator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("⚙").clicked() {
                        self.settings = Some(SettingsDraft::from_config(&self.config));
                    }
                    if let Some(credits) = self.credits {
                        ui.label(format!("Credits: {}", credits));
                    }
                });
            });

            // Status indicator
            ui.horizontal(|ui| {
                let color = match &self.status {
                    RequestStatus::Idle => egui::Color32::GRAY,
                    RequestStatus::Loading => {
                        // Pulsing yellow circle while the request is in flight
                        let time = ctx.input(|i| i.time) as f32;
                        let pulse = (time * 3.0).sin() * 0.3 + 0.7; // Pulse between 0.4 and 1.0
                        let component = (255.0 * pulse) as u8;
                        egui::Color32::from_rgb(component, component, 0)
                    }
                    RequestStatus::Success => egui::Color32::GREEN,
                    RequestStatus::Error(_) => egui::Color32::RED,
                };

                let (rect, _response) =
                    ui.allocate_exact_size(egui::Vec2::splat(12.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 6.0, color);
                ui.label(self.status.message());
            });

            ui.separator();

            // Generation form
            ui.label("Text:");
            egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                ui.add_sized(
                    [ui.available_width(), 120.0],
                    egui::TextEdit::multiline(&mut self.text).font(egui::TextStyle::Body),
                );
            });
            ui.weak(format!("{}/{}", self.text.chars().count(), MAX_TEXT_LENGTH));

            ui.horizontal(|ui| {
                ui.label("Language:");
                egui::ComboBox::from_id_source("lang")
                    .selected_text(self.lang.to_uppercase())
                    .show_ui(ui, |ui| {
                        for lang in LANGUAGES {
                            ui.selectable_value(
                                &mut self.lang,
                                lang.to_string(),
                                lang.to_uppercase(),
                            );
                        }
                    });

                let generate = ui.add_enabled(
                    !self.in_flight,
                    egui::Button::new("🔊 Generate").min_size(egui::vec2(120.0, 32.0)),
                );
                if generate.clicked() {
                    self.submit();
                }
            });

            // Latest generation
            if let Some(audio_url) = self.current_audio.clone() {
                ui.separator();
                ui.horizontal(|ui| {
                    let play = ui.add_enabled(!self.playing, egui::Button::new("▶ Play"));
                    if play.clicked() {
                        self.play(audio_url.clone());
                    }
                    if self.playing {
                        ui.label("Playing...");
                    } else {
                        ui.weak(&audio_url);
                    }
                });
            }

            ui.separator();

            // History
            ui.label("Recent generations:");
            egui::ScrollArea::vertical()
                .id_source("history")
                .max_height(180.0)
                .show(ui, |ui| {
                    if self.history.is_empty() {
                        ui.weak("Nothing generated yet.");
                    }
                    for entry in self.history.clone() {
                        ui.horizontal(|ui| {
                            if ui.small_button("▶").clicked() {
                                self.play(entry.audio_url.clone());
                            }
                            ui.vertical(|ui| {
                                ui.label(&entry.text_preview);
                                let lang = entry.lang.as_deref().unwrap_or("").to_uppercase();
                                let timestamp = entry.timestamp.as_deref().unwrap_or("");
                                ui.weak(format!("{} {}", lang, timestamp));
                            });
                        });
                    }
                });

            // Keyboard shortcuts
            if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Enter)) && !self.in_flight
            {
                self.submit();
            }
        });
    }
}

fn show_settings_window(ctx: &egui::Context, app: &mut TtsApp) {
    let Some(mut draft) = app.settings.take() else {
        return;
    };
    let mut keep_open = true;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_min_width(300.0);

            ui.heading("Audio Generator Settings");
            ui.separator();

            ui.label("Server URL:");
            ui.text_edit_singleline(&mut draft.base_url);
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label("Default language:");
                egui::ComboBox::from_id_source("default-lang")
                    .selected_text(draft.default_lang.to_uppercase())
                    .show_ui(ui, |ui| {
                        for lang in LANGUAGES {
                            ui.selectable_value(
                                &mut draft.default_lang,
                                lang.to_string(),
                                lang.to_uppercase(),
                            );
                        }
                    });
            });
            ui.add_space(5.0);

            ui.checkbox(&mut draft.auto_play, "Play new audio automatically");

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    app.save_settings(&draft);
                    keep_open = false;
                }

                if ui.button("Cancel").clicked() {
                    keep_open = false;
                }
            });
        });

    if keep_open {
        app.settings = Some(draft);
    }
}
