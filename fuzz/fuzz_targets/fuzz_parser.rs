#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use lazyjson::{ParserOptions, parse_with};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    eager: bool,
    /// Indices to read before serializing, so some branches resolve early.
    touch: Vec<u8>,
    text: &'a str,
}

fn parser(input: Input<'_>) {
    let Ok(mut doc) = parse_with(input.text, ParserOptions { eager: input.eager }) else {
        return;
    };

    for &i in &input.touch {
        let Ok(len) = doc.len() else { return };
        if len == 0 {
            break;
        }
        if doc.index(usize::from(i) % len).and_then(|child| child.resolve()).is_err() {
            return;
        }
    }

    // Rendering must agree with serializing, and a serialized tree must parse
    // back to the same text.
    let Ok(rendered) = doc.render() else { return };
    let serialized = doc.serialize().expect("render succeeded, so serialize must too");
    assert_eq!(rendered, serialized);

    let mut reparsed = parse_with(&serialized, ParserOptions::default())
        .expect("serialized output must parse");
    assert_eq!(reparsed.serialize().expect("reparsed tree must serialize"), serialized);
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary_take_rest(Unstructured::new(data)) {
        parser(input);
    }
});
