use core::fmt;

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

macro_rules! __log {
    ($log:ident, $o:ident $(, $($tt:tt)*)?) => {
        $( $o.$log(format_args!($($tt)*))?; )*
    };
}

pub(crate) use __log;

macro_rules! __debug { ($($tt:tt)*) => { $crate::out::__log!(debug, $($tt)*) }; }
macro_rules! __info { ($($tt:tt)*) => { $crate::out::__log!(info, $($tt)*) }; }
macro_rules! __warn { ($($tt:tt)*) => { $crate::out::__log!(warn, $($tt)*) }; }
macro_rules! __critical { ($($tt:tt)*) => { $crate::out::__log!(critical, $($tt)*) }; }

pub(crate) use __critical as critical;
pub(crate) use __debug as debug;
pub(crate) use __info as info;
pub(crate) use __warn as warn;

/// Severity of a reported line.
#[derive(Clone, Copy)]
pub(crate) enum Level {
    Debug,
    Info,
    Warn,
    Critical,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARNING",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

pub(crate) struct Colors {
    debug: ColorSpec,
    info: ColorSpec,
    warn: ColorSpec,
    critical: ColorSpec,
}

impl Colors {
    pub(crate) fn new() -> Self {
        let mut debug = ColorSpec::new();
        debug.set_fg(Some(termcolor::Color::Cyan));

        let mut info = ColorSpec::new();
        info.set_fg(Some(termcolor::Color::Green)).set_bold(true);

        let mut warn = ColorSpec::new();
        warn.set_fg(Some(termcolor::Color::Yellow)).set_bold(true);

        let mut critical = ColorSpec::new();
        critical.set_fg(Some(termcolor::Color::Red)).set_bold(true);

        Colors {
            debug,
            info,
            warn,
            critical,
        }
    }

    fn spec(&self, level: Level) -> &ColorSpec {
        match level {
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warn => &self.warn,
            Level::Critical => &self.critical,
        }
    }
}

/// Writer which mirrors every line to the console and to the log file.
pub(crate) struct Out<'a> {
    c: &'a Colors,
    o: &'a mut dyn WriteColor,
    log: &'a mut dyn io::Write,
}

impl<'a> Out<'a> {
    pub(crate) fn new(
        c: &'a Colors,
        o: &'a mut dyn WriteColor,
        log: &'a mut dyn io::Write,
    ) -> Out<'a> {
        Out { c, o, log }
    }

    pub(crate) fn debug(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.line(Level::Debug, m)
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.line(Level::Info, m)
    }

    pub(crate) fn warn(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.line(Level::Warn, m)
    }

    pub(crate) fn critical(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.line(Level::Critical, m)
    }

    /// Write one `{timestamp} [{level}] {message}` line to both sinks. Only
    /// the console copy is colored.
    fn line(&mut self, level: Level, m: impl fmt::Display) -> io::Result<()> {
        let ts = jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S").to_string();

        writeln!(self.log, "{ts} [{level}] {m}")?;
        self.log.flush()?;

        write!(self.o, "{ts} ")?;
        self.o.set_color(self.c.spec(level))?;
        write!(self.o, "[{level}]")?;
        self.o.reset()?;
        writeln!(self.o, " {m}")?;
        self.o.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use super::*;

    #[test]
    fn lines_reach_both_sinks() {
        let c = Colors::new();
        let mut o = NoColor::new(Vec::new());
        let mut log = Vec::new();

        {
            let mut out = Out::new(&c, &mut o, &mut log);
            out.info("hello").unwrap();
            out.warn("careful").unwrap();
        }

        let console = String::from_utf8(o.into_inner()).unwrap();
        let log = String::from_utf8(log).unwrap();

        assert!(console.contains("[INFO] hello"));
        assert!(console.contains("[WARNING] careful"));
        assert!(log.contains("[INFO] hello"));
        assert!(log.contains("[WARNING] careful"));
    }

    #[test]
    fn lines_carry_a_timestamp_prefix() {
        let c = Colors::new();
        let mut o = NoColor::new(Vec::new());
        let mut log = Vec::new();

        {
            let mut out = Out::new(&c, &mut o, &mut log);
            out.critical("boom").unwrap();
        }

        let log = String::from_utf8(log).unwrap();
        let line = log.lines().next().unwrap();

        // `YYYY-MM-DD HH:MM:SS [CRITICAL] boom`
        let (ts, rest) = line.split_at(19);
        assert_eq!(rest, " [CRITICAL] boom");
        assert_eq!(ts.as_bytes()[4], b'-');
        assert_eq!(ts.as_bytes()[10], b' ');
        assert_eq!(ts.as_bytes()[13], b':');
        assert!(ts.chars().filter(|c| c.is_ascii_digit()).count() == 14);
    }
}
