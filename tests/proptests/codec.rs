//! Property tests for share text encoding/decoding

use horcrux::Share;
use horcrux::codec::{encode_share, parse_share};
use horcrux::domain::Threshold;
use num_bigint::BigUint;
use quickcheck_macros::quickcheck;

/// Test that an encoded share parses back to the same point and threshold
#[quickcheck]
fn prop_share_text_round_trip(threshold: usize, x: u64, y_digits: Vec<u32>) -> bool {
    let Ok(threshold) = Threshold::new(threshold) else {
        return true; // Skip zero threshold
    };
    if x == 0 {
        return true; // x = 0 is never a valid share
    }

    let share = Share::new(x, BigUint::new(y_digits));
    let encoded = encode_share(&share, threshold);

    let Ok((parsed_threshold, parsed_share)) = parse_share(encoded.as_str()) else {
        return false;
    };

    parsed_threshold == threshold && parsed_share == share
}

/// Test that arbitrary text never panics the parser
#[quickcheck]
fn prop_parse_never_panics(text: String) -> bool {
    let _ = parse_share(&text);
    true
}

/// Test that changing one digit of the threshold, x or y field of an encoded
/// share either fails to parse or parses to a different share
#[quickcheck]
fn prop_edited_field_is_detected(
    threshold: usize,
    x: u64,
    y: u64,
    field: u8,
    position: usize,
    shift: u8,
) -> bool {
    let Ok(threshold) = Threshold::new(threshold) else {
        return true; // Skip zero threshold
    };
    if x == 0 {
        return true; // x = 0 is never a valid share
    }

    let share = Share::new(x, y);
    let encoded = encode_share(&share, threshold);
    let mut fields: Vec<String> = encoded.as_str().split('-').map(str::to_owned).collect();

    let (index, radix) = match field % 3 {
        0 => (1, 10),
        1 => (2, 10),
        _ => (3, 16),
    };
    let mut digits: Vec<char> = fields[index].chars().collect();
    let position = position % digits.len();
    let Some(old) = digits[position].to_digit(radix) else {
        return false; // encoder wrote a non-digit
    };
    // shift by 1..radix, so the digit always changes
    let new = (old + 1 + u32::from(shift) % (radix - 1)) % radix;
    let Some(new) = char::from_digit(new, radix) else {
        return false;
    };
    digits[position] = new;
    fields[index] = digits.into_iter().collect();

    match parse_share(&fields.join("-")) {
        Err(_) => true,
        Ok(parsed) => parsed != (threshold, share),
    }
}

/// Test that separators and signs inside a field are rejected
#[quickcheck]
fn prop_decorated_digits_are_rejected(x: u64, y: u64, plus: bool) -> bool {
    if x < 10 {
        return true; // need two digits to put a separator between
    }
    let x_text = x.to_string();
    let decorated = if plus {
        format!("+{x_text}")
    } else {
        format!("{}_{}", &x_text[..1], &x_text[1..])
    };

    parse_share(&format!("horcrux-2-{decorated}-{y:x}")).is_err()
}
