//! Terminal setup and restoration

use propdesk_core::prelude::*;
use ratatui::DefaultTerminal;

/// Install a panic hook that restores the terminal before the report prints
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn init() -> Result<DefaultTerminal> {
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen; failures are logged, the process is exiting anyway
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        warn!("{}", Error::TerminalRestore(e.to_string()));
    }
}
