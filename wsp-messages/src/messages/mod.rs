//! Central registry for all user-facing message templates.
//!
//! Organized by domain:
//! - `workspace` - create, list, show, delete
//! - `switch` - the switch sequence, MCP merge and restart prompt
//! - `config` - partial updates and MCP input parsing
//! - `common` - shared errors and hints
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.
//!
//! ```rust
//! use wsp_messages::MESSAGES;
//!
//! let msg = MESSAGES.switch.cancelled;
//! ```

mod common;
mod config;
mod switch;
mod workspace;

pub use common::{CommonMessages, COMMON_MESSAGES};
pub use config::{ConfigMessages, CONFIG_MESSAGES};
pub use switch::{SwitchMessages, SWITCH_MESSAGES};
pub use workspace::{WorkspaceMessages, WORKSPACE_MESSAGES};

pub struct Messages {
    pub workspace: WorkspaceMessages,
    pub switch: SwitchMessages,
    pub config: ConfigMessages,
    pub common: CommonMessages,
}

pub const MESSAGES: Messages = Messages {
    workspace: WORKSPACE_MESSAGES,
    switch: SWITCH_MESSAGES,
    config: CONFIG_MESSAGES,
    common: COMMON_MESSAGES,
};
