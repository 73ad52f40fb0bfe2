use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::MakeWriter, prelude::*, registry, EnvFilter};

// --- Custom "Tee" Writer ---
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A, B> Write for Tee<A, B>
where
    A: Write,
    B: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res_a = self.a.write(buf);
        let res_b = self.b.write(buf);
        res_a.or(res_b)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

#[derive(Clone)]
struct MakeTee<A, B> {
    make_a: A,
    make_b: B,
}

impl<'a, A, B, W1, W2> MakeWriter<'a> for MakeTee<A, B>
where
    A: MakeWriter<'a, Writer = W1>,
    B: MakeWriter<'a, Writer = W2>,
    W1: Write + 'a,
    W2: Write + 'a,
{
    type Writer = Tee<W1, W2>;
    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            a: self.make_a.make_writer(),
            b: self.make_b.make_writer(),
        }
    }
}

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
    Off,
}

impl LogOutput {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "file" => LogOutput::File,
            "both" => LogOutput::Both,
            "off" | "none" => LogOutput::Off,
            _ => LogOutput::Console,
        }
    }
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub output: LogOutput,
    pub json: bool,
    pub file_path: PathBuf,
}

impl LogSettings {
    /// Read `WSP_LOG_LEVEL`, `WSP_LOG_OUTPUT`, `WSP_LOG_FORMAT` and `WSP_LOG_FILE`.
    ///
    /// `verbose` raises the default level to `debug`; an explicit
    /// `WSP_LOG_LEVEL` still wins.
    pub fn from_env(verbose: bool, default_file: PathBuf) -> Self {
        let default_level = if verbose { "debug" } else { "warn" };
        Self {
            level: env::var("WSP_LOG_LEVEL").unwrap_or_else(|_| default_level.to_string()),
            output: LogOutput::parse(&env::var("WSP_LOG_OUTPUT").unwrap_or_default()),
            json: env::var("WSP_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")),
            file_path: env::var_os("WSP_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(default_file),
        }
    }
}

/// Initializes the global tracing subscriber.
///
/// Console output goes to stderr so command output on stdout stays clean.
/// The returned guard must be held for the life of the process when file
/// output is enabled, otherwise buffered records are lost.
pub fn init_subscriber(settings: &LogSettings) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let subscriber = registry().with(env_filter);

    let log_dir = settings
        .file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_filename = settings
        .file_path
        .file_name()
        .unwrap_or("wsp.log".as_ref());

    let mut guard: Option<WorkerGuard> = None;

    match settings.output {
        LogOutput::Both => {
            let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
            let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(worker_guard);

            let tee_writer = MakeTee {
                make_a: std::io::stderr,
                make_b: non_blocking,
            };

            let fmt_layer = tracing_subscriber::fmt::layer().with_writer(tee_writer);
            if settings.json {
                let _ = subscriber.with(fmt_layer.json()).try_init();
            } else {
                let _ = subscriber.with(fmt_layer.compact()).try_init();
            }
        }
        LogOutput::Console => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            if settings.json {
                let _ = subscriber.with(fmt_layer.json()).try_init();
            } else {
                let _ = subscriber.with(fmt_layer.compact()).try_init();
            }
        }
        LogOutput::File => {
            let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
            let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(worker_guard);

            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            if settings.json {
                let _ = subscriber.with(fmt_layer.json()).try_init();
            } else {
                let _ = subscriber.with(fmt_layer).try_init();
            }
        }
        LogOutput::Off => {
            let _ = subscriber.try_init();
        }
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_output_parse() {
        assert_eq!(LogOutput::parse("file"), LogOutput::File);
        assert_eq!(LogOutput::parse("BOTH"), LogOutput::Both);
        assert_eq!(LogOutput::parse("off"), LogOutput::Off);
        assert_eq!(LogOutput::parse(""), LogOutput::Console);
        assert_eq!(LogOutput::parse("console"), LogOutput::Console);
    }

    #[test]
    fn test_tee_writes_to_both_sinks() {
        let mut tee = Tee {
            a: Vec::new(),
            b: Vec::new(),
        };
        tee.write_all(b"hello").unwrap();
        tee.flush().unwrap();
        assert_eq!(tee.a, b"hello");
        assert_eq!(tee.b, b"hello");
    }
}
