use eframe::egui;

use crate::config::Config;
use crate::download::{download_url, Navigator, SystemBrowser};
use crate::localizations::Localizations;
use crate::models::FormState;
use crate::theme::SECTION_SPACING;
use crate::ui;

pub struct DownloadFormApp {
    pub state: FormState,
    config: Config,
    localizer: Localizations,
    navigator: Box<dyn Navigator>,
}

impl DownloadFormApp {
    pub fn new(config: Config, localizer: Localizations) -> Self {
        Self::with_navigator(config, localizer, Box::new(SystemBrowser))
    }

    pub fn with_navigator(
        config: Config,
        localizer: Localizations,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            state: FormState::default(),
            config,
            localizer,
            navigator,
        }
    }

    pub fn target(&self) -> String {
        download_url(self.config.api_url(), &self.state)
    }

    /// Hands the download link to the navigator. Nothing is checked beforehand,
    /// an empty url field still produces a link.
    ///
    /// Returns whether the hand-off went through.
    pub fn submit(&mut self) -> bool {
        let target = self.target();
        log::info!("Opening {}", target);

        match self.navigator.navigate(&target) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to open {}: {}", target, e);
                false
            }
        }
    }

    pub fn update_ui(&mut self, ctx: &egui::Context) {
        let mut submit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.localizer.text("app-title", "YouTube Downloader"));
            ui.add_space(SECTION_SPACING);

            let url_response = ui::render_url_input(ui, &mut self.state, &self.localizer);
            if url_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            ui.add_space(10.0);
            ui::render_format_selector(ui, &mut self.state, &self.localizer);

            if self.state.shows_resolution() {
                ui.add_space(10.0);
                ui::render_resolution_selector(ui, &mut self.state, &self.localizer);
            }

            ui.add_space(SECTION_SPACING);
            if ui::render_download_button(ui, &self.localizer) {
                submit = true;
            }
        });

        if submit && self.submit() && self.config.close_after_submit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for DownloadFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OutputFormat, Resolution};
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        visited: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl Navigator for Recorder {
        fn navigate(&self, target: &str) -> io::Result<()> {
            self.visited.borrow_mut().push(target.to_string());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
            } else {
                Ok(())
            }
        }
    }

    fn app_with(base: Option<&str>, recorder: &Recorder) -> DownloadFormApp {
        let config = Config {
            api_url: base.map(str::to_string),
            ..Config::default()
        };
        DownloadFormApp::with_navigator(config, Localizations::new(), Box::new(recorder.clone()))
    }

    #[test]
    fn starts_with_the_default_form() {
        let app = app_with(Some("http://api"), &Recorder::default());
        assert_eq!(app.state, FormState::default());
    }

    #[test]
    fn submit_video_opens_link_with_resolution() {
        let recorder = Recorder::default();
        let mut app = app_with(Some("http://api"), &recorder);
        app.state.set_url("https://youtu.be/abc");
        app.state.set_resolution(Resolution::P1080);

        assert!(app.submit());
        assert_eq!(
            *recorder.visited.borrow(),
            ["http://api/download?url=https%3A%2F%2Fyoutu.be%2Fabc&formato=video&resolucao=1080p"]
        );
    }

    #[test]
    fn submit_audio_opens_link_without_resolution() {
        let recorder = Recorder::default();
        let mut app = app_with(Some("http://api"), &recorder);
        app.state.set_url("https://youtu.be/abc");
        app.state.set_format(OutputFormat::Audio);

        assert!(app.submit());
        assert_eq!(
            *recorder.visited.borrow(),
            ["http://api/download?url=https%3A%2F%2Fyoutu.be%2Fabc&formato=audio"]
        );
    }

    #[test]
    fn empty_url_is_still_submitted() {
        let recorder = Recorder::default();
        let mut app = app_with(Some("http://api"), &recorder);

        assert!(app.submit());
        assert_eq!(
            *recorder.visited.borrow(),
            ["http://api/download?url=&formato=video&resolucao=720p"]
        );
    }

    #[test]
    fn unset_base_gives_a_hostless_link() {
        let recorder = Recorder::default();
        let mut app = app_with(None, &recorder);
        app.submit();
        assert_eq!(
            *recorder.visited.borrow(),
            ["/download?url=&formato=video&resolucao=720p"]
        );
    }

    #[test]
    fn failed_hand_off_is_reported_to_the_caller() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut app = app_with(Some("http://api"), &recorder);

        assert!(!app.submit());
        assert_eq!(recorder.visited.borrow().len(), 1);
        assert_eq!(app.state, FormState::default());
    }

    #[test]
    fn rendering_a_frame_does_not_navigate() {
        let recorder = Recorder::default();
        let mut app = app_with(Some("http://api"), &recorder);
        let ctx = egui::Context::default();

        for format in [OutputFormat::Video, OutputFormat::Audio] {
            app.state.set_format(format);
            let _ = ctx.run(egui::RawInput::default(), |ctx| app.update_ui(ctx));
        }

        assert!(recorder.visited.borrow().is_empty());
        assert_eq!(app.state.format, OutputFormat::Audio);
    }
}
