//! Top-level error reporting: one specific message plus a hint where one helps.

use wsp_core::{wsp_error, wsp_error_hint, WspError};
use wsp_messages::{msg, MESSAGES};

pub fn report(error: &WspError) {
    wsp_error!("{}", msg!(MESSAGES.common.error_generic, error = error.to_string()));

    match error {
        WspError::NotFound { available, .. } if available.is_empty() => {
            wsp_error_hint!("{}", MESSAGES.workspace.none_available)
        }
        WspError::NotFound { available, .. } => wsp_error_hint!(
            "{}",
            msg!(MESSAGES.workspace.available_label, names = available.join(", "))
        ),
        WspError::AlreadyExists(_) => {
            wsp_error_hint!("{}", MESSAGES.workspace.already_exists_hint)
        }
        WspError::Parse { .. } => wsp_error_hint!("{}", MESSAGES.common.parse_hint),
        WspError::Io { .. } => wsp_error_hint!("{}", MESSAGES.common.io_hint),
        _ => {}
    }
}
