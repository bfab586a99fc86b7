//! Persisting a flag set.
//!
//! `Flag` derives serde traits, so a flag set can be serialized once and
//! loaded by other tools (or embedded at build time). This example
//! round-trips a set through JSON and rebuilds a parser from it.
//!
//! ```bash
//! cargo run -p dashdash-examples --example save_flags
//! ```

use dashdash::{Flag, FlagParser, tokens_from};

fn main() {
    let flags = vec![
        Flag::new("input").with_short("i").at_index(0),
        Flag::new("quality").with_short("q").with_description("output quality"),
        Flag::new("verbose").with_short("v"),
    ];

    let json = serde_json::to_string_pretty(&flags).expect("flag sets serialize cleanly");
    println!("saved flag set:\n{json}\n");

    let loaded: Vec<Flag> = serde_json::from_str(&json).expect("round-trip");
    let mut parser = FlagParser::new();
    for flag in loaded {
        parser.register(flag);
    }

    parser.arguments = tokens_from("-i ./photos -q 0.9");
    println!("input   = {:?}", parser.string("input"));
    println!("quality = {:?}", parser.float("quality"));
}
