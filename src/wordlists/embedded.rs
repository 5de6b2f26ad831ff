//! Embedded data
//!
//! Alphabet and practice words compiled into the binary at build time.

/// NATO phonetic alphabet as CSV: `letter,code_word[,alternate...]` under a header row
pub const NATO_CSV: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/alphabet.csv"));

// Include generated data from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
