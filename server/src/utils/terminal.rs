//! Terminal output helpers

/// Render a URL for the startup banner.
///
/// Terminals that understand OSC 8 get a clickable hyperlink; everything else
/// gets the URL in cyan.
pub fn terminal_link(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        format!("\x1b]8;;{url}\x07\x1b[36m{url}\x1b[0m\x1b]8;;\x07")
    } else {
        format!("\x1b[36m{url}\x1b[0m")
    }
}
