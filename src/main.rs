use std::io::{self, Write};
use std::thread;

use text_logger::{source_loc, DefaultFormatter, Formatter, Level, LogRecord};
use tracing_subscriber::EnvFilter;

const RESET: &[u8] = b"\x1b[m";

fn level_color(level: Level) -> &'static [u8] {
    match level {
        Level::Trace => b"\x1b[37m",
        Level::Debug => b"\x1b[36m",
        Level::Info => b"\x1b[32m",
        Level::Warn => b"\x1b[33m\x1b[1m",
        Level::Error => b"\x1b[31m\x1b[1m",
        Level::Critical => b"\x1b[1m\x1b[41m",
        Level::Off => b"",
    }
}

/// Formats `record` and writes it with the level name colored.
fn print_colored(
    formatter: &mut dyn Formatter,
    record: &LogRecord<'_>,
    buf: &mut Vec<u8>,
    out: &mut impl Write,
) -> io::Result<()> {
    buf.clear();
    let range = formatter.format(record, buf);
    out.write_all(&buf[..range.start])?;
    out.write_all(level_color(record.level))?;
    out.write_all(&buf[range.as_range()])?;
    out.write_all(RESET)?;
    out.write_all(&buf[range.end..])
}

fn main() -> io::Result<()> {
    let (writer, _guard) = tracing_appender::non_blocking(io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .init();

    let mut formatter = DefaultFormatter::default();
    let mut buf = Vec::with_capacity(512);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for level in Level::ALL.into_iter().filter(|l| *l != Level::Off) {
        let payload = "formatted by the default layout";
        let record = LogRecord::with_source(source_loc!(), "demo", level, payload);
        print_colored(&mut formatter, &record, &mut buf, &mut out)?;
    }
    print_colored(
        &mut formatter,
        &LogRecord::new("", Level::Info, "no logger name, no source location"),
        &mut buf,
        &mut out,
    )?;
    drop(out);

    // Each worker owns a clone; clones share no cache with the original.
    let workers: Vec<_> = (0..2)
        .map(|id| {
            let mut formatter = formatter.clone_box();
            thread::spawn(move || -> io::Result<()> {
                let mut buf = Vec::with_capacity(512);
                let name = format!("worker-{}", id);
                let stdout = io::stdout();
                let mut out = stdout.lock();
                let record = LogRecord::new(&name, Level::Debug, "hello from a worker thread");
                print_colored(formatter.as_mut(), &record, &mut buf, &mut out)
            })
        })
        .collect();

    for worker in workers {
        worker.join().map_err(|_| io::Error::other("worker thread panicked"))??;
    }

    tracing::debug!("demo finished");
    Ok(())
}
