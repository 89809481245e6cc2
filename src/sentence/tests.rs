use super::*;
use pretty_assertions::assert_eq;

fn segments(input: &str) -> Vec<&str> {
    let data = input.as_bytes();
    let mut pos = 0;
    let mut out = Vec::new();
    while pos < data.len() {
        let advance = split(&data[pos..], true);
        assert!(advance > 0, "split returned 0 at EOF");
        out.push(std::str::from_utf8(&data[pos..pos + advance]).unwrap());
        pos += advance;
    }
    out
}

#[test]
fn two_simple_sentences() {
    assert_eq!(segments("Hi. Bye."), &["Hi. ", "Bye."]);
}

#[test]
fn question_and_exclamation() {
    assert_eq!(
        segments("Really? Yes! Okay."),
        &["Really? ", "Yes! ", "Okay."]
    );
}

#[test]
fn abbreviation_does_not_break_before_lowercase() {
    // SB8: a period followed by a lowercase word doesn't start a new
    // sentence — it reads as an abbreviation, not a terminator.
    assert_eq!(segments("See Mr. smith today."), &["See Mr. smith today."]);
}

#[test]
fn quoted_close_before_terminator_context() {
    assert_eq!(
        segments("She said \"Hi.\" Then left."),
        &["She said \"Hi.\" ", "Then left."]
    );
}

#[test]
fn paragraph_separator_always_breaks() {
    assert_eq!(segments("One\nTwo"), &["One\n", "Two"]);
    assert_eq!(segments("One\r\nTwo"), &["One\r\n", "Two"]);
}

#[test]
fn decimal_number_after_aterm_continues() {
    // SB6: a period before a digit is a decimal point, not a terminator.
    assert_eq!(segments("Pi is 3.14 approx."), &["Pi is 3.14 approx."]);
}

#[test]
fn upper_after_aterm_with_upper_before_continues() {
    // SB7: single capital-letter abbreviations like "U.S." don't break.
    assert_eq!(segments("U.S. trade policy."), &["U.S. trade policy."]);
}

#[test]
fn byte_iterator_shell() {
    let input = "Hi. Bye.";
    let mut it = from_bytes(input.as_bytes());
    let mut out = Vec::new();
    while it.next() {
        out.push(std::str::from_utf8(it.value()).unwrap());
    }
    assert_eq!(out, segments(input));
}

#[test]
fn reader_scanner_shell() {
    let input = "Hi. Bye.";
    let mut scanner = from_reader(input.as_bytes());
    let mut out = Vec::new();
    while scanner.next().unwrap() {
        out.push(std::str::from_utf8(scanner.value()).unwrap().to_string());
    }
    assert_eq!(out, segments(input));
}

#[test]
fn streaming_equivalence() {
    let input = "Hi. Bye! Is this \"ok\"? Yes, it's fine.\nNext paragraph here.";
    let data = input.as_bytes();
    let one_shot = segments(input);
    for split_at in 0..=data.len() {
        let (a, b) = data.split_at(split_at);
        let mut buf = a.to_vec();
        let mut fed_b = false;
        let mut pos = 0;
        let mut got = Vec::new();
        loop {
            let at_eof = fed_b;
            let advance = split(&buf[pos..], at_eof);
            if advance == 0 {
                if !fed_b {
                    buf.extend_from_slice(b);
                    fed_b = true;
                    continue;
                }
                break;
            }
            got.push(buf[pos..pos + advance].to_vec());
            pos += advance;
            if pos == buf.len() && fed_b {
                break;
            }
        }
        let one_shot_bytes: Vec<Vec<u8>> = one_shot.iter().map(|s| s.as_bytes().to_vec()).collect();
        assert_eq!(got, one_shot_bytes, "mismatch splitting at byte {split_at}");
    }
}
