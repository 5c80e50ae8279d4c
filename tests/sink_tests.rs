use parking_lot::Mutex;
use std::fs::{self, File};
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, UNIX_EPOCH};
use tempfile::tempdir;
use text_logger::os::DEFAULT_EOL;
use text_logger::{DefaultFormatter, Formatter, Level, LogRecord, UtcZone};

/// Collects formatted lines from many threads, like a shared sink would.
struct SharedSink {
    lines: Arc<Mutex<Vec<u8>>>,
}

impl SharedSink {
    fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn write(&self, line: &[u8]) {
        self.lines.lock().extend_from_slice(line);
    }
}

#[test]
fn test_per_thread_formatter_clones() {
    let sink = Arc::new(SharedSink::new());
    let template: Box<dyn Formatter> = Box::new(DefaultFormatter::with_zone(UtcZone));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let sink = Arc::clone(&sink);
            let mut formatter = template.clone();
            thread::spawn(move || {
                let name = format!("w{}", worker);
                let mut buf = Vec::with_capacity(128);
                for i in 0..250u64 {
                    buf.clear();
                    let time = UNIX_EPOCH + Duration::from_millis(1_709_626_150_000 + i * 10);
                    let record = LogRecord::new(&name, Level::Info, "tick").at(time);
                    let range = formatter.format(&record, &mut buf);
                    assert_eq!(&buf[range.as_range()], b"info");
                    sink.write(&buf);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let data = sink.lines.lock();
    let text = std::str::from_utf8(&data).unwrap();
    let lines: Vec<_> = text.split_terminator(DEFAULT_EOL).collect();
    assert_eq!(lines.len(), 1000);
    for line in lines {
        assert!(line.starts_with("[2024-03-05 08:09:1"), "Unexpected line {:?}", line);
        assert!(line.ends_with("] [info] tick"));
    }
}

#[test]
fn test_formatted_lines_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("formatted.log");
    let mut file = File::create(&path).unwrap();

    let mut formatter = DefaultFormatter::with_zone(UtcZone);
    let mut buf = Vec::with_capacity(256);
    for (i, level) in [Level::Debug, Level::Info, Level::Error].into_iter().enumerate() {
        let time = UNIX_EPOCH + Duration::from_millis(1_709_626_150_000 + i as u64 * 400);
        formatter.format(&LogRecord::new("file", level, "to disk").at(time), &mut buf);
    }
    file.write_all(&buf).unwrap();
    drop(file);

    let contents = fs::read_to_string(&path).unwrap();
    let expected = [
        "[2024-03-05 08:09:10.000] [file] [debug] to disk",
        "[2024-03-05 08:09:10.400] [file] [info] to disk",
        "[2024-03-05 08:09:10.800] [file] [error] to disk",
    ]
    .iter()
    .map(|line| format!("{}{}", line, DEFAULT_EOL))
    .collect::<String>();
    assert_eq!(contents, expected);
}
