use rs_ngram_core::io::{get_filename, read_text};
use rs_ngram_core::{AnalysisError, Analyzer, NgramOrder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Analyze the file given as first argument, or a built-in sentence
    let (name, text) = match std::env::args().nth(1) {
        Some(path) => (get_filename(&path)?, read_text(&path)?),
        None => ("pangram".to_owned(), "The quick brown fox jumps over the lazy dog".to_owned()),
    };

    // Keep only the 10 most frequent n-grams per order
    let analyzer = Analyzer::new(10);
    let result = analyzer.analyze(&text)?;

    println!("== {name} ==");
    println!("Total tokens:  {}", result.total_tokens);
    println!("Unique tokens: {}", result.unique_tokens);
    println!("Stop words:    {}", result.stop_words);
    println!("Entropy:       {} bits", result.entropy);

    // Perplexity is infinite when the text repeats a single word
    if result.perplexity.is_finite() {
        println!("Perplexity:    {}", result.perplexity);
    } else {
        println!("Perplexity:    ∞");
    }

    for order in NgramOrder::ALL {
        println!();
        println!("-- {} (top {}) --", order.label(), analyzer.top_k());
        let rows = result.ngrams.get(order);
        if rows.is_empty() {
            println!("(text too short)");
        }
        for row in rows {
            println!("{:>3}. {:<40} {:>5} {:>7.2}%", row.rank, row.token, row.count, row.probability);
        }
    }

    // Punctuation alone is rejected, not reported as an empty analysis
    match analyzer.analyze("!!! ??? ...") {
        Err(AnalysisError::NoTokens) => println!("\nPunctuation-only text has no tokens"),
        _ => println!("\nShould not happen"),
    }

    Ok(())
}
