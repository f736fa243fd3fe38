//! TUI rendering with ratatui
//!
//! Layout for the word-ladder play screen.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::moves_label;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 MORPHOLOGY - One Letter at a Time")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_chain(f, app, chunks[1]);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = app.session.puzzle();
    let bold = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(vec![
            Span::raw("Start:  "),
            Span::styled(puzzle.start().text().to_uppercase(), bold(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Target: "),
            Span::styled(puzzle.target().text().to_uppercase(), bold(Color::Green)),
        ]),
        Line::from(format!("Par:    {}", moves_label(puzzle.moves()))),
    ];

    if app.show_solution {
        let path: Vec<String> = puzzle
            .sample_path()
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        content.push(Line::from(Span::styled(
            format!("Route:  {}", path.join(" → ")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_chain(f: &mut Frame, app: &App, area: Rect) {
    let target = app.session.puzzle().target();
    let last = app.session.chain().len() - 1;

    let items: Vec<ListItem> = app
        .session
        .chain()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let style = if word == target {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if i == last {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{i:>2}. {}", word.text().to_uppercase())).style(style)
        })
        .collect();

    let chain = List::new(items).block(
        Block::default()
            .title(format!(" Chain ({}) ", moves_label(app.session.moves())))
            .borders(Borders::ALL),
    );

    f.render_widget(chain, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    render_distance(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_distance(f: &mut Frame, app: &App, area: Rect) {
    let par = app.session.puzzle().moves();
    let remaining = app.remaining_moves();

    let (percent, label) = match remaining {
        Some(0) => (100, "Target reached".to_string()),
        Some(left) => {
            let closer = par.saturating_sub(left);
            let pct = if par == 0 { 0 } else { closer * 100 / par };
            (pct.min(100) as u16, format!("{} to go", moves_label(left)))
        }
        None => (0, "No route to target".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Distance ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Typing => (
            format!(
                " Next Word ({} letters) | Enter to play | TAB for hint ",
                app.word_length()
            ),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let words_text = format!("Words: {}", app.game.words().len());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[0]);

    let stats_text = format!(
        "Solved: {}/{} | At par: {}",
        app.stats.games_won, app.stats.total_games, app.stats.par_games
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let average = if app.stats.games_won > 0 {
        app.stats.total_moves as f64 / app.stats.games_won as f64
    } else {
        0.0
    };
    let average_text = format!("Avg moves: {average:.1}");
    let average = Paragraph::new(average_text).alignment(Alignment::Center);
    f.render_widget(average, chunks[2]);

    let help_text = if app.input_mode == InputMode::WinCelebration {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | ^U: Undo | ^N: New | ^R: Route"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
