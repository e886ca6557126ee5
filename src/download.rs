use std::io;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{FormState, OutputFormat};

/// Characters left alone by URI component encoding; everything else is `%XX`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Builds the backend download link for the current form.
///
/// `base` is used exactly as configured, and the url field is encoded without trimming.
pub fn download_url(base: &str, state: &FormState) -> String {
    let mut target = format!(
        "{}/download?url={}&formato={}",
        base,
        encode_component(&state.url),
        state.format.as_str()
    );
    if state.format == OutputFormat::Video {
        target.push_str("&resolucao=");
        target.push_str(state.resolution.as_str());
    }
    target
}

/// Where a finished form gets sent.
pub trait Navigator {
    fn navigate(&self, target: &str) -> io::Result<()>;
}

/// Opens the link in the desktop's default browser and returns right away.
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&self, target: &str) -> io::Result<()> {
        open::that_detached(target)
    }
}
