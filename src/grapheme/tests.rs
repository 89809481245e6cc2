use super::*;

// The tests here exercise the public `split`/`split_with` contract end to
// end over real strings. `state::tests` covers the GB rule transitions in
// isolation.

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
fn basics() {
    assert_eq!(
        segments("Hello!\r\nBeep 🧑‍🌾"),
        &["H", "e", "l", "l", "o", "!", "\r\n", "B", "e", "e", "p", " ", "🧑‍🌾"]
    );
}

#[test]
fn good_dog_scenario() {
    assert_eq!(
        segments("Good dog! 👍🏼🐶"),
        &["G", "o", "o", "d", " ", "d", "o", "g", "!", " ", "👍🏼", "🐶"]
    );
}

#[test]
fn regional_indicator_pairing() {
    // An even-length run of RI produces len/2 flags; odd leaves the last
    // one standing alone (§8).
    assert_eq!(segments("\u{1F1FA}\u{1F1F8}"), &["\u{1F1FA}\u{1F1F8}"]);
    assert_eq!(
        segments("\u{1F1FA}\u{1F1F8}\u{1F1EB}"),
        &["\u{1F1FA}\u{1F1F8}", "\u{1F1EB}"]
    );
}

#[test]
fn streaming_equivalence() {
    let input = "Hello!\r\nBeep 🧑‍🌾👍🏼";
    let data = input.as_bytes();
    for split_at in 0..=data.len() {
        let (a, b) = data.split_at(split_at);
        let mut got = Vec::new();
        let mut buf = Vec::new();
        buf.extend_from_slice(a);
        let mut fed_b = false;
        let mut pos = 0;
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
        let one_shot: Vec<Vec<u8>> = segments(input).into_iter().map(|s| s.as_bytes().to_vec()).collect();
        assert_eq!(got, one_shot, "mismatch splitting at byte {split_at}");
    }
}

#[test]
fn malformed_utf8_round_trips() {
    let data: &[u8] = b"ab\xFFcd";
    let mut pos = 0;
    let mut out = Vec::new();
    while pos < data.len() {
        let advance = split(&data[pos..], true);
        assert!(advance > 0);
        out.push(data[pos..pos + advance].to_vec());
        pos += advance;
    }
    let joined: Vec<u8> = out.concat();
    assert_eq!(joined, data);
    assert_eq!(out, vec![b"a".to_vec(), b"b".to_vec(), b"\xFF".to_vec(), b"c".to_vec(), b"d".to_vec()]);
}

#[test]
fn ansi_seven_bit_scenario() {
    let input = "\x1b[31mhi\x1b[0m";
    let data = input.as_bytes();
    let mut pos = 0;
    let mut out = Vec::new();
    while pos < data.len() {
        let advance = split_with(&data[pos..], true, AnsiOptions { seven_bit: true, eight_bit: false });
        assert!(advance > 0);
        out.push(std::str::from_utf8(&data[pos..pos + advance]).unwrap());
        pos += advance;
    }
    assert_eq!(out, &["\x1b[31m", "h", "i", "\x1b[0m"]);
}

#[test]
fn byte_iterator_shell() {
    let input = "Good dog! 👍🏼🐶";
    let mut it = from_bytes(input.as_bytes());
    let mut out = Vec::new();
    while it.next() {
        out.push(std::str::from_utf8(it.value()).unwrap());
    }
    assert_eq!(out, segments(input));
}

#[test]
fn string_iterator_shell() {
    let input = "Good dog! 👍🏼🐶";
    let mut it = from_string(input);
    let mut out = Vec::new();
    while it.next() {
        out.push(it.value());
    }
    assert_eq!(out, segments(input));
}

#[test]
fn reader_scanner_shell() {
    let input = "Good dog! 👍🏼🐶";
    let mut scanner = from_reader(input.as_bytes());
    let mut out = Vec::new();
    while scanner.next().unwrap() {
        out.push(std::str::from_utf8(scanner.value()).unwrap().to_string());
    }
    assert_eq!(out, segments(input));
}

#[test]
fn needs_more_at_grapheme_boundary() {
    // A ZWJ sequence split mid-cluster must request more input rather than
    // guess that the cluster is already complete.
    let full = "\u{1F9D1}\u{200D}\u{1F33E}".as_bytes();
    let prefix = &full[..full.len() - 1];
    assert_eq!(split(prefix, false), 0);
    assert_eq!(split(full, true), full.len());
}
