use crate::config::Config;
use crate::message::Message;
use crate::model::Catalog;
use crate::state::{NavigationPath, Screen, UIState};
use crate::style::{self, Theme};
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::path::PathBuf;

pub struct GamingApp {
    pub catalog: Catalog,
    pub path: NavigationPath,
    pub ui: UIState,
    rng: StdRng,
    // Where theme changes are persisted; None keeps them in memory only
    config_path: Option<PathBuf>,
}

impl GamingApp {
    /// `rng` drives "Recommended game" and "Go to another platform".
    pub fn new(config: Config, rng: StdRng) -> Self {
        let catalog = config.catalog.build();
        Self {
            catalog,
            path: NavigationPath::new(),
            ui: UIState::new(config.theme.mode),
            rng,
            config_path: None,
        }
    }

    pub fn from_config(config: Config) -> Self {
        let rng = match config.navigation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn dispatch(&mut self, message: Message) {
        match message {
            Message::SelectPlatform(index) => self.select_platform(index),
            Message::SelectGame(index) => self.select_game(index),
            Message::RecommendGame => self.recommend_game(),
            Message::AnotherPlatform => self.another_platform(),
            Message::GoHome => self.go_home(),
            Message::GoBack => self.go_back(),
            Message::SelectDelta(delta) => {
                let rows = self.screen_actions().len();
                self.ui.move_selection(delta, rows);
            }
            Message::ActivateSelection => self.activate_selection(),
            Message::ToggleHelp => self.ui.show_help = !self.ui.show_help,
            Message::ToggleTheme => self.toggle_theme(),
        }

        if message.navigates() {
            self.ui.reset_selection();
        }
    }

    /// The message each selectable row of the current screen triggers, in
    /// display order.
    pub fn screen_actions(&self) -> Vec<Message> {
        let games = (0..self.catalog.games().len()).map(Message::SelectGame);
        match self.path.screen() {
            Screen::Root => (0..self.catalog.platforms().len())
                .map(Message::SelectPlatform)
                .chain(games)
                .collect(),
            // Every platform lists the full game catalog
            Screen::Platform(_) => games.collect(),
            Screen::Game(_) => vec![
                Message::RecommendGame,
                Message::AnotherPlatform,
                Message::GoHome,
            ],
        }
    }

    /// Window title for the current screen.
    pub fn title(&self) -> &str {
        self.path
            .top()
            .map(|destination| destination.name())
            .unwrap_or(style::WINDOW_TITLE)
    }

    pub fn breadcrumb(&self) -> String {
        std::iter::once(style::WINDOW_TITLE)
            .chain(self.path.iter().map(|destination| destination.name()))
            .collect::<Vec<_>>()
            .join(style::BREADCRUMB_SEPARATOR)
    }

    fn select_platform(&mut self, index: usize) {
        match self.catalog.platform(index) {
            Some(platform) => self.path.push(platform.clone()),
            None => log::warn!("Ignoring selection of platform {}", index),
        }
    }

    fn select_game(&mut self, index: usize) {
        match self.catalog.game(index) {
            Some(game) => self.path.push(game.clone()),
            None => log::warn!("Ignoring selection of game {}", index),
        }
    }

    fn recommend_game(&mut self) {
        if let Some(game) = self.catalog.random_game(&mut self.rng) {
            let game = game.clone();
            self.ui.set_info(format!("Recommended: {}", game.name));
            self.path.push(game);
        }
    }

    fn another_platform(&mut self) {
        if let Some(platform) = self.catalog.random_platform(&mut self.rng) {
            self.path.push(platform.clone());
        }
    }

    fn go_home(&mut self) {
        self.path.pop_all();
    }

    fn go_back(&mut self) {
        self.path.pop();
    }

    fn activate_selection(&mut self) {
        let actions = self.screen_actions();
        if let Some(&message) = actions.get(self.ui.selected_index) {
            self.dispatch(message);
        }
    }

    fn toggle_theme(&mut self) {
        self.ui.theme = self.ui.theme.toggle();
        if let Some(path) = &self.config_path {
            if let Err(e) = Config::save_theme(path, self.ui.theme) {
                log::warn!("Failed to save theme to {}: {}", path.display(), e);
            }
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        let mut visuals = self.ui.theme.visuals();
        if self.ui.theme == Theme::Light {
            visuals.hyperlink_color = style::ACCENT;
            visuals.selection.stroke.color = style::ACCENT;
        }
        ctx.set_visuals(visuals);
    }
}

impl eframe::App for GamingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);
        self.apply_theme(ctx);

        let next_message = RefCell::new(self.handle_input(ctx));

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_top_bar(ui, &next_message);
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        match self.path.screen() {
            Screen::Root => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.render_root(ui, &next_message);
                });
            }
            Screen::Platform(platform) => {
                let fill = style::platform_color(platform.color);
                egui::CentralPanel::default()
                    .frame(egui::Frame::new().fill(fill).inner_margin(12.0))
                    .show(ctx, |ui| {
                        self.render_platform_detail(ui, platform, &next_message);
                    });
            }
            Screen::Game(game) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.render_game_detail(ui, game, &next_message);
                });
            }
        }

        self.render_help_modal(ctx, &next_message);

        // Apply deferred action
        if let Some(message) = next_message.into_inner() {
            self.dispatch(message);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.title().to_string()));
        }
    }
}
