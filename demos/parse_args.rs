//! Flag registration and value resolution.
//!
//! Registers a small flag set, then resolves typed values from a few
//! sample invocations. In a real tool the argument vector would come from
//! `std::env::args().collect()`; here the invocations are built with
//! `tokens_from` so the example runs standalone.
//!
//! ```bash
//! cargo run -p dashdash-examples --example parse_args
//! ```

use dashdash::{Flag, FlagParser, tokens_from};

fn main() {
    let mut parser = FlagParser::new();
    parser.register(
        Flag::new("input")
            .with_short("i")
            .at_index(0)
            .with_description("file or directory to compress"),
    );
    parser.register(
        Flag::new("output")
            .with_short("o")
            .with_description("directory results are written to"),
    );
    parser.register(
        Flag::new("quality")
            .with_short("q")
            .with_description("output quality from 0.0 to 1.0"),
    );
    parser.register(Flag::new("verbose").with_short("v"));

    let invocations = [
        "--input ./photos --quality 0.8",
        "-i ./photos -o ./done -v",
        "./photos -q 0.5",
    ];

    for invocation in invocations {
        parser.arguments = tokens_from(invocation);
        println!("$ shrink {invocation}");
        println!("  input    = {:?}", parser.string("input"));
        println!("  output   = {:?}", parser.dir("output"));
        println!("  quality  = {:?}", parser.float("quality"));
        println!("  verbose  = {:?}", parser.is_present("verbose"));
        println!("  leftover = {:?}", parser.unflagged_arguments());
        println!();
    }
}
