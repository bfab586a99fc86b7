//! Help rendering.
//!
//! Builds a parser with a title, a description, and a handful of flags,
//! then prints the aligned, word-wrapped listing. Registering a `help`
//! flag is the host's choice; nothing is added implicitly.
//!
//! ```bash
//! cargo run -p dashdash-examples --example render_help
//! ```

use dashdash::{Flag, FlagParser, tokens_from};

fn main() {
    let mut parser = FlagParser::new()
        .with_title("shrink")
        .with_description(
            "Compresses images in place. Reads every file below the input \
             directory and rewrites it at the requested quality, keeping \
             the originals under a .backup suffix.",
        );

    parser.register(
        Flag::new("input")
            .with_short("i")
            .at_index(0)
            .with_description("file or directory to compress; may also be passed as the first bare argument"),
    );
    parser.register(
        Flag::new("quality")
            .with_short("q")
            .with_description("output quality from 0.0 (smallest) to 1.0 (best)"),
    );
    parser.register(Flag::new("verbose").with_short("v").with_description("log every file touched"));
    parser.register(Flag::new("help").with_short("h").with_description("show this message"));

    parser.arguments = tokens_from("-h");
    if parser.is_present("help") {
        parser.print_help();
    }
}
