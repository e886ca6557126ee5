use std::collections::HashMap;

use i18n_embed::DesktopLanguageRequester;
use unic_langid::{langid, LanguageIdentifier};

// Simple in-memory translations
#[derive(Default)]
pub struct Translations {
    strings: HashMap<&'static str, &'static str>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: &'static str) {
        self.strings.insert(key, value);
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.strings.get(key).copied()
    }
}

const FALLBACK: LanguageIdentifier = langid!("en-US");

pub struct Localizations {
    translations: HashMap<LanguageIdentifier, Translations>,
    current_lang: LanguageIdentifier,
}

impl Default for Localizations {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizations {
    /// Bundled strings with en-US selected.
    pub fn new() -> Self {
        let mut translations = HashMap::new();

        let mut en = Translations::new();
        en.insert("app-title", "YouTube Downloader");
        en.insert("url-label", "Video URL:");
        en.insert("url-placeholder", "Paste the video URL");
        en.insert("format-label", "Download as:");
        en.insert("format-video", "Video");
        en.insert("format-audio", "Audio");
        en.insert("resolution-label", "Resolution:");
        en.insert("download-button", "Download");
        translations.insert(FALLBACK, en);

        let mut pt = Translations::new();
        pt.insert("app-title", "YouTube Downloader");
        pt.insert("url-label", "URL do vídeo:");
        pt.insert("url-placeholder", "Cole a URL do vídeo");
        pt.insert("format-label", "Baixar como:");
        pt.insert("format-video", "Vídeo");
        pt.insert("format-audio", "Áudio");
        pt.insert("resolution-label", "Resolução:");
        pt.insert("download-button", "Baixar");
        translations.insert(langid!("pt-BR"), pt);

        let mut es = Translations::new();
        es.insert("app-title", "Descargador de YouTube");
        es.insert("url-label", "URL del video:");
        es.insert("url-placeholder", "Pegue la URL del video");
        es.insert("format-label", "Descargar como:");
        es.insert("format-video", "Video");
        es.insert("format-audio", "Audio");
        es.insert("resolution-label", "Resolución:");
        es.insert("download-button", "Descargar");
        translations.insert(langid!("es-ES"), es);

        Self {
            translations,
            current_lang: FALLBACK,
        }
    }

    /// Picks `preferred` if given and parseable, otherwise the first desktop language we bundle.
    pub fn from_environment(preferred: Option<&str>) -> Self {
        let mut localizer = Self::new();

        let mut requested = Vec::new();
        if let Some(lang) = preferred {
            match lang.parse::<LanguageIdentifier>() {
                Ok(id) => requested.push(id),
                Err(e) => log::warn!("Ignoring invalid language {:?}: {}", lang, e),
            }
        }
        requested.extend(DesktopLanguageRequester::requested_languages());

        localizer.select_first(&requested);
        log::debug!("UI language: {}", localizer.current());
        localizer
    }

    pub fn current(&self) -> &LanguageIdentifier {
        &self.current_lang
    }

    pub fn lookup_single_language(&self, key: &str) -> Option<String> {
        self.translations
            .get(&self.current_lang)
            .and_then(|t| t.lookup(key))
            .or_else(|| self.translations.get(&FALLBACK).and_then(|t| t.lookup(key)))
            .map(|s| s.to_string())
    }

    /// Looks up `key`, falling back to `default` when no bundle has it.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.lookup_single_language(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Selects the first requested language that has a bundle, matching on
    /// the full identifier first and the primary language subtag second.
    pub fn select_first(&mut self, requested: &[LanguageIdentifier]) {
        for lang in requested {
            if let Some(found) = self.resolve(lang) {
                self.current_lang = found;
                return;
            }
        }
        self.current_lang = FALLBACK;
    }

    fn resolve(&self, lang: &LanguageIdentifier) -> Option<LanguageIdentifier> {
        if self.translations.contains_key(lang) {
            return Some(lang.clone());
        }
        self.translations
            .keys()
            .find(|key| key.language == lang.language)
            .cloned()
    }
}
