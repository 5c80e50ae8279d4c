use text_logger::fmt_helper::{append_int, append_str, append_uint, pad2, pad3};

fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_append_uint() {
    assert_eq!(render(|b| append_uint(0, b)), "0");
    assert_eq!(render(|b| append_uint(42, b)), "42");
    assert_eq!(render(|b| append_uint(u64::MAX, b)), "18446744073709551615");
}

#[test]
fn test_append_int() {
    assert_eq!(render(|b| append_int(2024, b)), "2024");
    assert_eq!(render(|b| append_int(-7, b)), "-7");
    assert_eq!(render(|b| append_int(i64::MIN, b)), "-9223372036854775808");
}

#[test]
fn test_pad2() {
    assert_eq!(render(|b| pad2(0, b)), "00");
    assert_eq!(render(|b| pad2(5, b)), "05");
    assert_eq!(render(|b| pad2(59, b)), "59");
    assert_eq!(render(|b| pad2(123, b)), "123");
}

#[test]
fn test_pad3() {
    assert_eq!(render(|b| pad3(7, b)), "007");
    assert_eq!(render(|b| pad3(70, b)), "070");
    assert_eq!(render(|b| pad3(999, b)), "999");
    assert_eq!(render(|b| pad3(1000, b)), "1000");
}

#[test]
fn test_appends_after_existing_content() {
    let mut buf = b"x=".to_vec();
    pad2(3, &mut buf);
    append_str(";", &mut buf);
    assert_eq!(buf, b"x=03;");
}
