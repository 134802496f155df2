use std::io::{self, BufRead, Write};

use colored::Colorize;

use tz_core::{DICE_COUNT, FileStore, Game, TenziesConfig, WinReport};

pub fn run(config: TenziesConfig) -> Result<(), String> {
    let store = FileStore::open(&config.store_path);
    let mut line_game = LineGame::new(Game::new(Box::new(store), &config));

    println!("  {} Tenzies", "Starting".bold());
    println!("  Roll until all dice are the same.");
    println!("  Hold each die to freeze it at its current value between rolls.");
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", line_game.board());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match line_game.process(input) {
            Ok(Reply::Quit) => {
                println!("Goodbye!");
                break;
            }
            Ok(Reply::Text(output)) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

/// Outcome of one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Text(String),
    /// The player asked to leave.
    Quit,
}

/// Line-mode driver around a [`Game`].
pub struct LineGame {
    game: Game,
}

impl LineGame {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Process one line of input.
    pub fn process(&mut self, input: &str) -> Result<Reply, String> {
        let mut words = input.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Reply::Text(String::new()));
        };
        let cmd = first.to_lowercase();
        tracing::debug!(command = %cmd, "line command");

        match cmd.as_str() {
            "roll" | "r" => {
                let was_won = self.game.is_won();
                let report = self.game.primary_action();
                let mut out = String::new();
                if was_won {
                    out.push_str("New game!\n\n");
                }
                out.push_str(&self.board());
                Ok(Reply::Text(out + &win_banner(report)))
            }
            "hold" | "h" => {
                let indices: Vec<&str> = words.collect();
                self.hold(&indices)
            }
            "new" => {
                self.game.restart();
                Ok(Reply::Text(format!("New game!\n\n{}", self.board())))
            }
            "status" | "board" => Ok(Reply::Text(self.board())),
            "help" | "?" => Ok(Reply::Text(help_text())),
            "quit" | "q" | "exit" => Ok(Reply::Quit),
            _ if cmd.parse::<usize>().is_ok() => {
                let indices: Vec<&str> = input.split_whitespace().collect();
                self.hold(&indices)
            }
            other => Err(format!("unknown command: {other} (try 'help')")),
        }
    }

    fn hold(&mut self, args: &[&str]) -> Result<Reply, String> {
        if args.is_empty() {
            return Err(format!("usage: hold <1-{DICE_COUNT}> [...]"));
        }
        if self.game.is_won() {
            return Err("the game is won; type 'new' to play again".to_string());
        }
        let indices = args
            .iter()
            .map(|arg| parse_die_number(arg))
            .collect::<Result<Vec<_>, _>>()?;

        // Dice after a winning toggle are left alone.
        let report = indices
            .into_iter()
            .find_map(|index| self.game.toggle_hold_at(index));
        Ok(Reply::Text(self.board() + &win_banner(report)))
    }

    /// The dice, numbered, with the counters underneath.
    pub fn board(&self) -> String {
        let numbers: String = (1..=DICE_COUNT).map(|n| format!("{n:>3} ")).collect();
        let faces: String = self
            .game
            .dice()
            .iter()
            .map(|d| {
                let face = d.to_string();
                if d.is_held() {
                    format!(" {} ", face.green().bold())
                } else {
                    format!(" {face}")
                }
            })
            .collect();
        format!(
            "{}\n{}\nRoll Count: {}   Best score: {}   [{}]",
            numbers.trim_end().dimmed(),
            faces.trim_end(),
            self.game.roll_count(),
            self.game.best(),
            self.game.primary_label()
        )
    }
}

fn parse_die_number(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if (1..=DICE_COUNT).contains(&n) => Ok(n - 1),
        _ => Err(format!("no die {arg} (dice are numbered 1-{DICE_COUNT})")),
    }
}

fn win_banner(report: Option<WinReport>) -> String {
    let Some(report) = report else {
        return String::new();
    };
    let headline = format!("Tenzies! You won in {} rolls.", report.rolls);
    let record = if report.new_best {
        " New best!".to_string()
    } else {
        format!(" Best is still {}.", report.best)
    };
    format!(
        "\n\n{}{}\nType 'roll' or 'new' to play again.",
        headline.green().bold(),
        record
    )
}

fn help_text() -> String {
    [
        "Commands:",
        "  roll, r          Roll every unheld die (starts a new game once won)",
        "  hold N [N...]    Hold or release dice by number (1-10); bare numbers work too",
        "  new              Start a new game",
        "  status           Show the board",
        "  help             Show this help",
        "  quit, q          Leave",
    ]
    .join("\n")
}
