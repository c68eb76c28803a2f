use crate::ui::tui;

/// Puts the terminal back before the default hook prints the panic.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = tui::Tui::restore() {
            tracing::error!(error = %e, "terminal_restore_failed");
        }
        tracing::error!(panic = %panic_info, "panic");
        hook(panic_info);
    }));
}
