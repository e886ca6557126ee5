#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Video,
    Audio,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    #[default]
    P720,
    P1080,
    P1440,
    P2160,
}

impl Resolution {
    /// Dropdown order.
    pub const ALL: [Resolution; 8] = [
        Self::P144,
        Self::P240,
        Self::P360,
        Self::P480,
        Self::P720,
        Self::P1080,
        Self::P1440,
        Self::P2160,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::P144 => "144p",
            Self::P240 => "240p",
            Self::P360 => "360p",
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
            Self::P1440 => "1440p",
            Self::P2160 => "2160p",
        }
    }
}

/// What the user has typed and picked so far. Lives as long as the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub url: String,
    pub format: OutputFormat,
    pub resolution: Resolution,
}

impl FormState {
    pub fn set_url(&mut self, value: impl Into<String>) {
        self.url = value.into();
    }

    pub fn set_format(&mut self, value: OutputFormat) {
        self.format = value;
    }

    // Kept across format switches, only sent for video.
    pub fn set_resolution(&mut self, value: Resolution) {
        self.resolution = value;
    }

    pub fn shows_resolution(&self) -> bool {
        self.format == OutputFormat::Video
    }
}
