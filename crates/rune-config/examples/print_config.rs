/// Example program to print the loaded configuration and wrap some text with it
///
/// Run with: cargo run -p rune-config --example print_config [-- path/to/text.txt]
///
/// Boxes are measured in grapheme clusters, so widths are in columns.
use anyhow::{Context, Result};
use rune_config::LineBreakConfig;
use rune_linebreak::text::{grapheme_width, paragraphs, words};
use rune_linebreak::{break_paragraph, format_monospace};

const SAMPLE: &str = "Alice was beginning to get very tired of sitting by her sister \
on the bank, and of having nothing to do: once or twice she had peeped into the book \
her sister was reading, but it had no pictures or conversations in it, 'and what is \
the use of a book,' thought Alice 'without pictures or conversation?'";

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // Load configuration from linebreak.toml plus environment overrides
    let config = LineBreakConfig::load();

    println!("=== Line Breaking Configuration ===\n");

    println!("Paragraph Settings:");
    println!("  Text Width: {}", config.paragraph.text_width);
    println!("  Direction: {:?}", config.paragraph.direction);
    println!("  Algorithm: {}", config.paragraph.algorithm);
    println!();

    println!("Glue Settings:");
    println!("  Width: {}", config.glue.width);
    println!("  Shrink: {}", config.glue.shrink);
    println!("  Expand: {}", config.glue.expand);
    println!();

    let options = config.to_options()?;

    let text = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?
        }
        None => SAMPLE.to_string(),
    };

    println!("=== Wrapped Text ===");
    let ruler = "-".repeat(options.text_width.max(0.0) as usize);
    println!("{ruler}");
    for paragraph in paragraphs(&text) {
        let boxes = words(paragraph, grapheme_width);
        let lines = break_paragraph(&boxes, &options, config.paragraph.algorithm)?;
        print!("{}", format_monospace(&lines));
    }
    println!("{ruler}");

    Ok(())
}
