use super::*;

use pretty_assertions::assert_eq;

#[test]
fn character_categories() {
    // This is a very non-exhaustive and mostly arbitrary set of characters
    // to test just as a signal that the property lookup code is generally
    // working; `crate::grapheme::tests` exercises the full split() contract
    // over real strings.

    use super::super::GCBProperty::*;
    use std::assert_eq; // the standard one is better than "pretty" for this test
    fn prop(c: char) -> super::super::GCBProperty {
        super::super::CharProperties::for_char(c).gcb_property()
    }

    assert_eq!(prop(' '), None);
    assert_eq!(prop('\r'), CR);
    assert_eq!(prop('\n'), LF);
    assert_eq!(prop('\t'), Control);
    assert_eq!(prop('\u{200D}'), ZWJ);
    assert_eq!(prop('\u{1F1E6}'), RegionalIndicator);
    assert_eq!(prop('\u{1F9D1}'), ExtendedPictographic);
    assert_eq!(prop('\u{1F33E}'), ExtendedPictographic);
    assert_eq!(prop('\u{0C41}'), SpacingMark);
}

#[test]
fn crlf() {
    use State::*;
    let got: Vec<_> = transitions(&[
        CharProperties::None,
        CharProperties::CR,
        CharProperties::LF,
        CharProperties::None,
    ])
    .collect();
    assert_eq!(
        got,
        &[
            (true, CharProperties::None, Base),
            (true, CharProperties::CR, Base),
            (false, CharProperties::LF, Base),
            (true, CharProperties::None, Base)
        ]
    );
}

#[test]
fn emoji_flags() {
    use State::*;
    let got: Vec<_> = transitions(&[
        CharProperties::None,
        CharProperties::RegionalIndicator,
        CharProperties::None,
        CharProperties::RegionalIndicator,
        CharProperties::RegionalIndicator,
        CharProperties::None,
        CharProperties::RegionalIndicator,
        CharProperties::RegionalIndicator,
        CharProperties::RegionalIndicator,
        CharProperties::None,
        CharProperties::RegionalIndicator,
        CharProperties::RegionalIndicator,
        CharProperties::RegionalIndicator,
        CharProperties::RegionalIndicator,
        CharProperties::None,
    ])
    .collect();
    assert_eq!(
        got,
        &[
            (true, CharProperties::None, Base),
            (true, CharProperties::RegionalIndicator, AwaitEmojiFlag),
            (true, CharProperties::None, Base),
            (true, CharProperties::RegionalIndicator, AwaitEmojiFlag),
            (false, CharProperties::RegionalIndicator, Base),
            (true, CharProperties::None, Base),
            (true, CharProperties::RegionalIndicator, AwaitEmojiFlag),
            (false, CharProperties::RegionalIndicator, Base),
            (true, CharProperties::RegionalIndicator, AwaitEmojiFlag),
            (true, CharProperties::None, Base),
            (true, CharProperties::RegionalIndicator, AwaitEmojiFlag),
            (false, CharProperties::RegionalIndicator, Base),
            (true, CharProperties::RegionalIndicator, AwaitEmojiFlag),
            (false, CharProperties::RegionalIndicator, Base),
            (true, CharProperties::None, Base),
        ]
    );
}

#[test]
fn emoji_extend() {
    use State::*;
    let got: Vec<_> = transitions(&[
        CharProperties::None,
        //
        CharProperties::ExtendedPictographic,
        CharProperties::None,
        //
        CharProperties::ExtendedPictographic,
        CharProperties::ExtendedPictographic,
        CharProperties::None,
        //
        CharProperties::ExtendedPictographic,
        CharProperties::ZWJ,
        CharProperties::ExtendedPictographic,
        CharProperties::None,
        //
        CharProperties::ExtendedPictographic,
        CharProperties::Extend,
        CharProperties::ExtendedPictographic,
        CharProperties::None,
        //
        CharProperties::ExtendedPictographic,
        CharProperties::Extend,
        CharProperties::ZWJ,
        CharProperties::ExtendedPictographic,
        CharProperties::None,
        //
        CharProperties::ExtendedPictographic,
        CharProperties::Extend,
        CharProperties::Extend,
        CharProperties::ZWJ,
        CharProperties::ExtendedPictographic,
        CharProperties::None,
        //
        CharProperties::ExtendedPictographic,
        CharProperties::Extend,
        CharProperties::Extend,
        CharProperties::ZWJ,
        CharProperties::Extend,
        CharProperties::ExtendedPictographic,
        CharProperties::None,
    ])
    .collect();
    assert_eq!(
        got,
        &[
            (true, CharProperties::None, Base),
            //
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (true, CharProperties::None, Base),
            //
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (true, CharProperties::None, Base),
            //
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (false, CharProperties::ZWJ, GB11AfterZWJ),
            (false, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (true, CharProperties::None, Base),
            //
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (false, CharProperties::Extend, GB11BeforeZWJ),
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (true, CharProperties::None, Base),
            //
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (false, CharProperties::Extend, GB11BeforeZWJ),
            (false, CharProperties::ZWJ, GB11AfterZWJ),
            (false, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (true, CharProperties::None, Base),
            //
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (false, CharProperties::Extend, GB11BeforeZWJ),
            (false, CharProperties::Extend, GB11BeforeZWJ),
            (false, CharProperties::ZWJ, GB11AfterZWJ),
            (false, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (true, CharProperties::None, Base),
            //
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (false, CharProperties::Extend, GB11BeforeZWJ),
            (false, CharProperties::Extend, GB11BeforeZWJ),
            (false, CharProperties::ZWJ, GB11AfterZWJ),
            (false, CharProperties::Extend, Base),
            (true, CharProperties::ExtendedPictographic, GB11BeforeZWJ),
            (true, CharProperties::None, Base),
        ]
    );
}

fn transitions(
    cats: &[CharProperties],
) -> impl Iterator<Item = (bool, CharProperties, State)> + use<'_> {
    struct Iter<'a> {
        remain: &'a [CharProperties],
        state: State,
        prev: CharProperties,
    }
    impl<'a> Iterator for Iter<'a> {
        type Item = (bool, CharProperties, State);

        fn next(&mut self) -> Option<Self::Item> {
            let Some((next, remain)) = self.remain.split_first() else {
                return None;
            };
            let prev = self.prev;
            let next = *next;
            let (split, next_state) = self.state.transition(prev, next);
            self.remain = remain;
            self.state = next_state;
            self.prev = next;
            Some((split, next, next_state))
        }
    }

    Iter {
        remain: cats,
        state: State::Base,
        prev: CharProperties::None,
    }
}
