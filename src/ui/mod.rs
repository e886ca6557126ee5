use eframe::egui::{self, Stroke};

use crate::localizations::Localizations;
use crate::models::{FormState, OutputFormat, Resolution};
use crate::theme::*;

pub fn render_url_input(
    ui: &mut egui::Ui,
    state: &mut FormState,
    localizer: &Localizations,
) -> egui::Response {
    ui.label(localizer.text("url-label", "Video URL:"));

    let mut url = state.url.clone();
    let response = egui::Frame::group(ui.style())
        .fill(INPUT_BG)
        .stroke(Stroke::new(1.0, INPUT_BORDER))
        .rounding(ROUNDING_FRAME)
        .show(ui, |ui| {
            ui.add_sized(
                [ui.available_width(), INPUT_HEIGHT],
                egui::TextEdit::singleline(&mut url)
                    .hint_text(localizer.text("url-placeholder", "Paste the video URL"))
                    .font(egui::FontId::proportional(INPUT_FONT_SIZE)),
            )
        })
        .inner;

    if response.changed() {
        state.set_url(url);
    }
    response
}

pub fn render_format_selector(ui: &mut egui::Ui, state: &mut FormState, localizer: &Localizations) {
    ui.horizontal(|ui| {
        ui.label(localizer.text("format-label", "Download as:"));

        let mut format = state.format;
        ui.radio_value(
            &mut format,
            OutputFormat::Video,
            localizer.text("format-video", "Video"),
        );
        ui.radio_value(
            &mut format,
            OutputFormat::Audio,
            localizer.text("format-audio", "Audio"),
        );
        if format != state.format {
            state.set_format(format);
        }
    });
}

/// Only drawn while the form asks for video.
pub fn render_resolution_selector(
    ui: &mut egui::Ui,
    state: &mut FormState,
    localizer: &Localizations,
) {
    ui.horizontal(|ui| {
        ui.label(localizer.text("resolution-label", "Resolution:"));

        let mut resolution = state.resolution;
        egui::ComboBox::from_id_source("resolution")
            .selected_text(resolution.as_str())
            .show_ui(ui, |ui| {
                for option in Resolution::ALL {
                    ui.selectable_value(&mut resolution, option, option.as_str());
                }
            });
        if resolution != state.resolution {
            state.set_resolution(resolution);
        }
    });
}

pub fn render_download_button(ui: &mut egui::Ui, localizer: &Localizations) -> bool {
    let button = egui::Button::new(
        egui::RichText::new(localizer.text("download-button", "Download"))
            .size(BUTTON_FONT_SIZE)
            .color(BUTTON_MAIN_TEXT),
    )
    .min_size(MIN_SIZE_BUTTON)
    .fill(PRIMARY_BUTTON_BG)
    .rounding(ROUNDING_BUTTON)
    .stroke(Stroke::new(1.0, BORDER_COLOR));

    ui.add(button).clicked()
}
