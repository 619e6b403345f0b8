use crate::models::Number;

/// Pull the first number out of loosely formatted listing text.
///
/// Understands European formatting: `.` groups thousands and either `.` or
/// `,` introduces decimals, so `"1.234,56 €"` is 1234.56 and `"2.500"` is
/// 2500. After a lead of at most three digits each group takes three digits
/// and the match ends there, so `"1.2345"` is 1234. Shorter runs after the
/// separator are read as a fraction. Returns `None` when there is no digit.
pub fn extract_number(text: Option<&str>) -> Option<Number> {
    let text = text?.replace(',', ".");
    let bytes = text.as_bytes();

    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let mut pos = start;
    let mut integer = String::new();

    let lead = digit_run(bytes, pos);
    integer.push_str(&text[pos..pos + lead]);
    pos += lead;

    if lead <= 3 {
        while bytes.get(pos) == Some(&b'.') && digit_run(bytes, pos + 1) >= 3 {
            integer.push_str(&text[pos + 1..pos + 4]);
            pos += 4;
        }
    }

    let fraction = if bytes.get(pos) == Some(&b'.') {
        let len = digit_run(bytes, pos + 1);
        (len > 0).then(|| &text[pos + 1..pos + 1 + len])
    } else {
        None
    };

    match fraction {
        Some(fraction) => format!("{}.{}", integer, fraction).parse().ok().map(Number::Float),
        None => integer
            .parse::<i64>()
            .map(Number::Int)
            .ok()
            .or_else(|| integer.parse::<f64>().ok().map(Number::Float)),
    }
}

fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}
