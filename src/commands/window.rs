//! Window Commands

use crate::error::{UiError, UiResult};

/// Open the platform print dialog for the current page
pub fn print_page() -> UiResult<()> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    window.print()?;
    Ok(())
}
