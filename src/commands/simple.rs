//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one word per line.

use crate::game::{Session, SubmitOutcome};
use crate::output::formatters::{format_chain, moves_label};
use crate::puzzle::{GameWords, Puzzle, shortest_path};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// puzzle can be generated.
pub fn run_simple(game: &GameWords) -> Result<(), String> {
    play_lines(game, &mut io::stdin().lock())
}

/// Play reading one line per prompt from `input`; end of input quits
fn play_lines<R: BufRead>(game: &GameWords, input: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Morphology - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Change one letter at a time to turn the start word into the target.");
    println!("Every step must be a real word.\n");
    println!("Commands: 'quit' to exit, 'new' for new puzzle, 'undo' to take back a move,");
    println!("          'hint' for a next step, 'reveal' to show a solution\n");

    let generator = game.generator().map_err(|e| e.to_string())?;
    let mut rng = rand::rng();
    let mut session = Session::new(generator.generate(&mut rng).map_err(|e| e.to_string())?);
    print_puzzle(session.puzzle());

    loop {
        println!("  {}\n", format_chain(session.chain()).bright_white().bold());

        let Some(line) = get_user_input(input, "Next word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = Session::new(generator.generate(&mut rng).map_err(|e| e.to_string())?);
                println!("\n🔄 New puzzle!\n");
                print_puzzle(session.puzzle());
            }
            "undo" | "u" => match session.undo() {
                Ok(word) => println!("✓ Took back {}\n", word.text().to_uppercase()),
                Err(err) => println!("{err}\n"),
            },
            "hint" | "h" => {
                let path = shortest_path(
                    game.graph(),
                    session.current().text(),
                    session.puzzle().target().text(),
                    usize::MAX,
                );
                match path.as_deref() {
                    Some(steps @ [_, next, ..]) => println!(
                        "💡 Try {} ({} to go)\n",
                        next.text().to_uppercase().bright_yellow(),
                        moves_label(steps.len() - 1)
                    ),
                    _ => println!("💡 No route from here, try 'undo'\n"),
                }
            }
            "reveal" => {
                println!(
                    "One solution: {}\n",
                    format_chain(session.puzzle().sample_path())
                );
            }
            "" => {}
            word => match session.submit(word, game.dictionary()) {
                Ok(SubmitOutcome::Continue) => println!("✓\n"),
                Ok(SubmitOutcome::Solved) => {
                    print_celebration(&session);

                    match get_user_input(input, "Play again? (yes/no)")?
                        .unwrap_or_default()
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session = Session::new(
                                generator.generate(&mut rng).map_err(|e| e.to_string())?,
                            );
                            println!("\n🔄 New puzzle!\n");
                            print_puzzle(session.puzzle());
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
                Err(err) => println!("❌ {err}\n"),
            },
        }
    }
}

fn print_puzzle(puzzle: &Puzzle) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Start: {}   Target: {}   Par: {}",
        puzzle.start().text().to_uppercase().bright_cyan().bold(),
        puzzle.target().text().to_uppercase().bright_green().bold(),
        moves_label(puzzle.moves())
    );
    println!("────────────────────────────────────────────────────────────\n");
}

fn print_celebration(session: &Session) {
    let par = session.puzzle().moves();
    let moves = session.moves();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  M O R P H E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match moves.saturating_sub(par) {
        0 => ("🏆 Perfect!", "Matched the shortest route!"),
        1 => ("⭐ Excellent!", "Just one move over par!"),
        2 => ("✨ Good!", "Nice work!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solved in {} (par {})",
        moves_label(moves).bright_cyan().bold(),
        par
    );
    println!("\n  {}", format_chain(session.chain()));
    println!("\n{}", session.share_text().bright_black());
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
