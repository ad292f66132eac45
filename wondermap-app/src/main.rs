use wondermap::{prelude::*, ui::UiMapExt};

/// Standalone seven wonders viewer
fn main() -> anyhow::Result<()> {
    wondermap::init_logging();

    let config = AppConfig::from_env();
    let mut app = WonderApp::new(EguiBackend::new(), config);
    app.mount()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Seven Wonders"),
        ..Default::default()
    };

    eframe::run_native(
        "wondermap-app",
        options,
        Box::new(move |_cc| Box::new(WondersViewer { app })),
    )
    .map_err(|e| anyhow::anyhow!("failed to run viewer: {e}"))?;

    Ok(())
}

struct WondersViewer {
    app: WonderApp<EguiBackend>,
}

impl eframe::App for WondersViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Explore the Seven Wonders of the World!");
            ui.horizontal(|ui| {
                ui.label("Wonder:");
                if let Some(id) = landmark_picker(ui, self.app.selected()) {
                    events.push(AppEvent::Select(id.to_string()));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let coordinate = self.app.coordinate();
                    ui.label(format!("{:.7}, {:.7}", coordinate.lat, coordinate.lng));
                    if self.app.adapter().backend().api_key().is_none() {
                        ui.colored_label(ui.visuals().warn_fg_color, "No map API key set");
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| match self.app.widget() {
                Some(view) => events.extend(ui.map_view(view).into_iter().map(AppEvent::Map)),
                None => {
                    ui.centered_and_justified(|ui| ui.label("Map unavailable"));
                }
            });

        if !events.is_empty() {
            for event in events {
                log::debug!("dispatching {event:?}");
                self.app.dispatch(event);
            }
            // New flights start next frame
            ctx.request_repaint();
        }
    }
}
