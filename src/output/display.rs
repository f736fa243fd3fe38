//! Display functions for command results

use super::formatters::{create_progress_bar, format_chain, moves_label};
use crate::commands::{AnalysisResult, BenchmarkResult, CheckResult, GenerateResult, WordAnalysis};
use colored::Colorize;

/// Print generated puzzles
pub fn print_generate_result(result: &GenerateResult, show_path: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Generated {} in {:.2}ms ({} samples)",
        if result.puzzles.len() == 1 {
            "1 puzzle".to_string()
        } else {
            format!("{} puzzles", result.puzzles.len())
        },
        result.duration.as_secs_f64() * 1000.0,
        result.total_attempts()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, generated) in result.puzzles.iter().enumerate() {
        let puzzle = &generated.puzzle;
        println!(
            "\n{}. {} → {}  {}",
            i + 1,
            puzzle.start().text().to_uppercase().bright_cyan().bold(),
            puzzle.target().text().to_uppercase().bright_green().bold(),
            format!("({})", moves_label(puzzle.moves())).bright_black()
        );
        if show_path {
            println!("   {}", format_chain(puzzle.sample_path()));
        }
    }
    println!();
}

/// Print graph statistics
pub fn print_analysis_result(result: &AnalysisResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD GRAPH ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Graph:".bright_cyan().bold());
    println!("   Dictionary words: {}", result.dictionary_words);
    println!("   Candidates:       {}", stats.words);
    println!("   Edges:            {}", stats.edges);
    println!("   Mean degree:      {:.2}", stats.mean_degree);
    println!("   Max degree:       {}", stats.max_degree);

    println!("\n🧩 {}", "Components:".bright_cyan().bold());
    println!("   Count:            {}", stats.components);
    println!("   Isolated words:   {}", stats.isolated_words);

    let share = if stats.words == 0 {
        0.0
    } else {
        stats.largest_component as f64 / stats.words as f64
    };
    println!(
        "   Largest:          [{}] {}",
        create_progress_bar(share, 1.0, 30).green(),
        format!("{} words ({:.1}%)", stats.largest_component, share * 100.0).bright_yellow()
    );
    println!(
        "\n   Puzzles use {} playable words with {} to {}",
        result.playable_words,
        result.range.min(),
        moves_label(result.range.max())
    );
}

/// Print a single word's analysis
pub fn print_word_analysis(result: &WordAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let neighbors: Vec<String> = result.neighbors.iter().map(|w| w.to_uppercase()).collect();
    println!(
        "\n🔗 {} neighbors: {}",
        result.neighbors.len(),
        neighbors.join(", ")
    );

    println!("\n📈 {}", "Words by distance:".bright_cyan().bold());
    let widest = result.by_distance.iter().skip(1).copied().max().unwrap_or(0);
    for (distance, &count) in result.by_distance.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, widest as f64, 40);
        let marker = if result.range.contains(distance) {
            "●".green()
        } else {
            "○".bright_black()
        };
        println!("   {marker} {distance}: {} {count:4}", bar.green());
    }

    println!(
        "\n   {} possible targets at {} moves",
        result.puzzle_targets.to_string().bright_yellow().bold(),
        result.range
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🕸  {}", "Graph construction:".bright_cyan().bold());
    println!(
        "   Candidates:       {} ({} edges)",
        result.candidates, result.edges
    );
    println!(
        "   Pairwise:         {:.2}ms",
        result.pairwise_time.as_secs_f64() * 1000.0
    );
    println!(
        "   Bucketed:         {:.2}ms",
        result.bucketed_time.as_secs_f64() * 1000.0
    );
    println!(
        "   Builders agree:   {}",
        if result.builders_agree {
            "yes".green()
        } else {
            "NO".red().bold()
        }
    );

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.total_puzzles);
    if result.failures > 0 {
        println!(
            "   Failures:         {}",
            result.failures.to_string().red().bold()
        );
    }
    println!(
        "   Average samples:  {}",
        format!("{:.1}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Worst case:       {}",
        result.max_attempts.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    let solved = result.total_puzzles - result.failures;
    if solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut moves: Vec<usize> = result.distribution.keys().copied().collect();
    moves.sort_unstable();
    for move_count in moves {
        if let Some(&count) = result.distribution.get(&move_count) {
            let pct = (count as f64 / solved as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {move_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}

/// Print the result of a move check
pub fn print_check_result(result: &CheckResult) {
    let arrow = format!(
        "{} → {}",
        result.previous.to_uppercase(),
        result.candidate.to_uppercase()
    );

    match &result.verdict {
        Ok(()) => println!("{}", format!("✅ {arrow} is a valid move").green().bold()),
        Err(err) => println!("{}", format!("❌ {arrow}: {err}").red().bold()),
    }

    let distance = result
        .distance
        .map_or_else(|| "n/a (different lengths)".to_string(), |d| d.to_string());
    println!("   Letters changed:  {distance}");
    println!(
        "   In dictionary:    {}",
        if result.in_dictionary { "yes" } else { "no" }
    );
}
