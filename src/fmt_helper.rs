//! Allocation-free helpers for appending text and numbers to a byte buffer.
//!
//! Every function writes directly into the destination `Vec<u8>`. Growth of the
//! vector is the only possible allocation, and once the buffer has reached its
//! working size none of these helpers allocate.

/// Longest decimal rendering of a `u64`.
const MAX_U64_DIGITS: usize = 20;

#[inline(always)]
pub fn append_str(s: &str, dest: &mut Vec<u8>) {
    dest.extend_from_slice(s.as_bytes());
}

/// Appends `n` in decimal with its natural digit count.
pub fn append_uint(mut n: u64, dest: &mut Vec<u8>) {
    let mut digits = [0u8; MAX_U64_DIGITS];
    let mut pos = MAX_U64_DIGITS;
    loop {
        pos -= 1;
        digits[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    dest.extend_from_slice(&digits[pos..]);
}

/// Appends `n` in decimal, with a leading `-` when negative.
pub fn append_int(n: i64, dest: &mut Vec<u8>) {
    if n < 0 {
        dest.push(b'-');
    }
    append_uint(n.unsigned_abs(), dest);
}

/// Appends `n` zero-padded to two digits. Values of 100 and above are written
/// in full.
#[inline(always)]
pub fn pad2(n: u32, dest: &mut Vec<u8>) {
    if n < 100 {
        dest.push(b'0' + (n / 10) as u8);
        dest.push(b'0' + (n % 10) as u8);
    } else {
        append_uint(u64::from(n), dest);
    }
}

/// Appends `n` zero-padded to three digits. Values of 1000 and above are
/// written in full.
#[inline(always)]
pub fn pad3(n: u32, dest: &mut Vec<u8>) {
    if n < 1000 {
        dest.push(b'0' + (n / 100) as u8);
        dest.push(b'0' + (n / 10 % 10) as u8);
        dest.push(b'0' + (n % 10) as u8);
    } else {
        append_uint(u64::from(n), dest);
    }
}
