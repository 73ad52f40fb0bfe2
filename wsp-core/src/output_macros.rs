//! Themed output macros for user-facing text.
//!
//! Results go to stdout; status, warnings and errors go to stderr so that
//! `wsp show` and `wsp list` stay pipeable. Diagnostic detail belongs in
//! `tracing`, not here.

#[macro_export]
macro_rules! wsp_println {
    () => {
        println!()
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*))
    }
}

#[macro_export]
macro_rules! wsp_error {
    ($($arg:tt)*) => {
        eprintln!("❌ {}", format!($($arg)*))
    }
}

#[macro_export]
macro_rules! wsp_error_hint {
    ($($arg:tt)*) => {
        eprintln!("💡 {}", format!($($arg)*))
    };
}

#[macro_export]
macro_rules! wsp_success {
    ($($arg:tt)*) => {
        eprintln!("✓ {}", format!($($arg)*))
    };
}

#[macro_export]
macro_rules! wsp_info {
    ($($arg:tt)*) => {
        eprintln!("ℹ {}", format!($($arg)*))
    };
}

#[macro_export]
macro_rules! wsp_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*))
    };
}

