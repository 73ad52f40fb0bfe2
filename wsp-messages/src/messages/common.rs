//! Common/shared messages across commands

pub struct CommonMessages {
    pub error_generic: &'static str,
    pub io_hint: &'static str,
    pub parse_hint: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    error_generic: "{error}",
    io_hint: "Check that the path exists and is writable",
    parse_hint: "Check the file for JSON syntax errors",
};
