use crate::ui::tui;

/// Panics must leave the alternate screen before the default hook prints,
/// or the report is swallowed when the terminal restores. The log file
/// gets a copy with the panic site, since stderr is easy to lose under a
/// fullscreen shell. Installed after logging so the mirror has somewhere
/// to go.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = tui::Tui::restore();
        let site = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        tracing::error!(site = site.as_str(), "panic: {info}");
        default_hook(info);
    }));
}
