//! Fuzz target for the field tag grammar.
//!
//! Tags come from user source code and configuration, so the tokenizer and
//! the descriptor builder must reject malformed input with an error, never
//! a panic. Accepted tags must also survive a `to_tag` round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use velesdb_ogm::{FieldDescriptor, FieldType, Tag};

fuzz_target!(|data: &[u8]| {
    let Ok(tag) = std::str::from_utf8(data) else {
        return;
    };

    // Positions must always point inside the tag
    for token in Tag::parse(tag).tokens() {
        assert!(token.position <= tag.len());
    }

    let Ok(descriptor) = FieldDescriptor::from_tag("field", tag, None, FieldType::Any) else {
        return;
    };
    let _ = descriptor.validate();

    let rebuilt = FieldDescriptor::from_tag("field", &descriptor.to_tag(), None, FieldType::Any)
        .expect("serialized tags are grammatical");
    if !descriptor.is_ignored() {
        assert_eq!(rebuilt, descriptor);
    }
});
