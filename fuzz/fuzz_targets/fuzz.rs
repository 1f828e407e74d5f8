#![no_main]

use libfuzzer_sys::fuzz_target;
use ulcompress::{BigUint, Shift, ShiftError, compress, decode, decompress, encode};

/// Verifies the file-to-integer bijection in both directions.
///
/// # Invariant
/// `decode(encode(data)) == data` and `encode(decode(n)) == n`
///
/// # Panics
/// Panics on any mismatch. These panics signal a fuzzing failure.
fn verify_bijection(data: &[u8]) {
    let value = encode(data);
    let restored = decode(&value);
    if restored != data {
        panic!(
            "File round-trip mismatch!\nInput len: {}\nDecoded len: {}",
            data.len(),
            restored.len()
        );
    }

    // Reinterpret the input as an arbitrary integer.
    let n = BigUint::from_bytes_le(data);
    let bytes = decode(&n);
    assert_eq!(encode(&bytes), n, "Integer round-trip mismatch");
}

/// Verifies that compressing by a small amount is undone by decompressing.
///
/// The first byte picks the shift so that guard errors are exercised too.
fn verify_shift_inverse(data: &[u8]) {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let shift = Shift::from(i64::from(first) - 128);

    match compress(rest, &shift) {
        Ok(shifted) => {
            let restored = decompress(&shifted, &shift)
                .unwrap_or_else(|e| panic!("Decompression rejected a valid shift: {e:?}"));
            assert_eq!(restored, rest, "Shift round-trip mismatch");
        }
        Err(ShiftError::EmptyFileOverCompress) => assert!(rest.is_empty()),
        Err(ShiftError::InsufficientValue { max }) => assert_eq!(max, encode(rest)),
    }
}

fuzz_target!(|data: &[u8]| {
    verify_bijection(data);
    verify_shift_inverse(data);
});
