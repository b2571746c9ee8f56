//! Receiver Map Editor.
//!
//! Platziert Empfänger als Marker auf einer Hintergrundkarte.
//! Optional: erster Kommandozeilen-Parameter = Empfänger-Datei (JSON).

use eframe::egui;
use receiver_map_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Receiver Map Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let receiver_file = std::env::args().nth(1);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_title("Receiver Map Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Receiver Map Editor",
            options,
            Box::new(move |cc| Ok(Box::new(EditorApp::new(&cc.egui_ctx, receiver_file)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    icons: ui::MarkerIcons,
    textures: ui::PreviewTextures,
    pending: Vec<AppIntent>,
}

impl EditorApp {
    fn new(ctx: &egui::Context, receiver_file: Option<String>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        // Glyphen einmalig erzeugen, alle Buttons teilen sie
        let icons = ui::MarkerIcons::load(ctx, &editor_options);

        let mut state = AppState::new();
        state.options = editor_options;
        state.options_path = config_path;

        let pending = receiver_file
            .map(|path| vec![AppIntent::ReceiverFileSelected { path }])
            .unwrap_or_default();

        Self {
            state,
            controller: AppController::new(),
            icons,
            textures: ui::PreviewTextures::new(),
            pending,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = std::mem::take(&mut self.pending);
        events.extend(self.collect_ui_events(ctx));

        let has_events = !events.is_empty();
        self.controller.process_intents(&mut self.state, events);

        self.textures.sync(ctx, &mut self.state.dialog);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::render_receiver_panel(ctx, &self.state, &self.icons));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::render_map_preview(ctx, &self.state, &self.textures));

        events
    }
}
