use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::{fs, path::PathBuf};
use sudogen::{count_solutions, solve_board, Board, Difficulty, Generator};

#[derive(Parser, Debug)]
#[command(name = "sudogen", version, about = "Sudoku puzzle generator with unique-solution guarantees")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a puzzle and its solution
    Generate {
        /// easy, medium, hard or expert; anything else means medium
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Seed the generator for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also print the solution grid
        #[arg(long)]
        solution: bool,

        /// Emit the puzzle/solution pair as JSON
        #[arg(long)]
        json: bool,
    },
    /// Solve a puzzle (81 chars, 0 or . for blanks) from a file or stdin
    Solve {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Report whether a puzzle is unsolvable, unique, or ambiguous
    Check {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn read_board(input: &Option<PathBuf>) -> Result<Board> {
    let text = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let board = Board::parse(&text).context("parse puzzle")?;
    if !board.is_valid() {
        bail!("puzzle clues conflict with each other");
    }
    Ok(board)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { difficulty, seed, solution, json } => {
            let difficulty = Difficulty::from_label(&difficulty);
            let mut generator = Generator::new(seed);
            let pair = generator.generate(difficulty);
            if json {
                println!("{}", serde_json::to_string_pretty(&pair)?);
            } else {
                println!(
                    "{} ({}, {} clues)",
                    "Puzzle".bold(),
                    difficulty,
                    pair.puzzle.clue_count()
                );
                print!("{}", pair.puzzle);
                println!("{}", pair.puzzle.to_compact());
                if solution {
                    println!("\n{}", "Solution".bold());
                    print!("{}", pair.solution);
                }
            }
        }
        Command::Solve { input } => {
            let board = read_board(&input)?;
            match solve_board(&board) {
                Some(solved) => print!("{solved}"),
                None => println!("{}", "no solution exists".red()),
            }
        }
        Command::Check { input } => {
            let board = read_board(&input)?;
            match count_solutions(&board, 0, 2) {
                0 => println!("{}", "unsolvable".red()),
                1 => println!("{}", "unique solution".green()),
                _ => println!("{}", "multiple solutions".yellow()),
            }
        }
    }
    Ok(())
}
