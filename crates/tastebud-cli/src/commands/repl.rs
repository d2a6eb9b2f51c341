//! Command parsing and line editing for the discover REPL.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::{Context as _, Result, anyhow, bail};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use tastebud_core::restaurant::PriceTier;

pub const COMMANDS: &[&str] = &[
    "like",
    "skip",
    "drag",
    "tag",
    "price",
    "query",
    "tier",
    "reset",
    "filters",
    "bookmarks",
    "unsave",
    "map",
    "directions",
    "review",
    "reviews",
    "help",
    "quit",
];

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Like,
    Skip,
    /// Press, drag horizontally by `dx`, release.
    Drag(f64),
    ToggleTag(String),
    Price { low: u32, high: u32 },
    /// Empty clears the search.
    Query(String),
    ToggleTier(PriceTier),
    Reset,
    Filters,
    Bookmarks,
    Unsave(String),
    Map,
    Directions(String),
    Review {
        id: String,
        rating: u8,
        comment: String,
    },
    Reviews(String),
    Help,
    Quit,
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("usage: {}", usage);
    }
    Ok(rest)
}

impl ReplCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map(|(h, r)| (h, r.trim()))
            .unwrap_or((line, ""));

        let command = match head.to_lowercase().as_str() {
            "like" | "l" | "right" => Self::Like,
            "skip" | "s" | "left" | "nope" => Self::Skip,
            "drag" | "d" => {
                let dx = required(rest, "drag <dx>")?
                    .parse::<f64>()
                    .with_context(|| format!("'{}' is not a distance", rest))?;
                Self::Drag(dx)
            }
            "tag" | "t" => Self::ToggleTag(required(rest, "tag <name>")?.to_string()),
            "price" => {
                let mut bounds = required(rest, "price <min> <max>")?.split_whitespace();
                let (Some(low), Some(high), None) = (bounds.next(), bounds.next(), bounds.next())
                else {
                    bail!("usage: price <min> <max>");
                };
                Self::Price {
                    low: low.parse().with_context(|| format!("'{}' is not a price", low))?,
                    high: high
                        .parse()
                        .with_context(|| format!("'{}' is not a price", high))?,
                }
            }
            "query" | "search" | "q" => Self::Query(rest.to_string()),
            "tier" => {
                let raw = required(rest, "tier <$|$$|$$$|$$$$>")?;
                Self::ToggleTier(
                    raw.parse()
                        .map_err(|_| anyhow!("'{}' is not a price tier", raw))?,
                )
            }
            "reset" => Self::Reset,
            "filters" | "f" => Self::Filters,
            "bookmarks" | "saved" | "b" => Self::Bookmarks,
            "unsave" => Self::Unsave(required(rest, "unsave <id>")?.to_string()),
            "map" | "m" => Self::Map,
            "directions" => Self::Directions(required(rest, "directions <id>")?.to_string()),
            "review" => {
                let usage = "review <id> <1-5> [comment]";
                let mut parts = required(rest, usage)?.splitn(3, char::is_whitespace);
                let id = parts.next().unwrap_or_default().to_string();
                let rating = parts
                    .next()
                    .ok_or_else(|| anyhow!("usage: {}", usage))?
                    .parse::<u8>()
                    .context("rating must be a number from 1 to 5")?;
                let comment = parts.next().unwrap_or_default().trim().to_string();
                Self::Review {
                    id,
                    rating,
                    comment,
                }
            }
            "reviews" => Self::Reviews(required(rest, "reviews <id>")?.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("Unknown command '{}'. Type 'help' for the list.", other),
        };
        Ok(command)
    }
}

pub fn print_help() {
    let rows = [
        ("like | l", "save the current card"),
        ("skip | s", "pass on the current card"),
        ("drag <dx>", "swipe by hand; past ±100 commits"),
        ("tag <name>", "toggle a taste tag filter"),
        ("price <min> <max>", "set the price range"),
        ("query [text]", "search name, cuisine and tags"),
        ("tier <$..$$$$>", "toggle a price tier"),
        ("reset", "clear every filter"),
        ("filters", "show the active filters"),
        ("bookmarks", "list saved restaurants"),
        ("unsave <id>", "remove a bookmark"),
        ("map", "filtered list with the nearest three"),
        ("directions <id>", "maps link for a restaurant"),
        ("review <id> <1-5> [text]", "rate a restaurant"),
        ("reviews <id>", "show reviews"),
        ("quit", "leave"),
    ];
    for (command, text) in rows {
        println!("  {:<26} {}", command.bright_cyan(), text.bright_black());
    }
}

/// Completion, highlighting and hints for REPL commands.
#[derive(Clone)]
pub struct ReplHelper {
    commands: Vec<String>,
}

impl ReplHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let head = line.split_whitespace().next().unwrap_or_default();
        if self.commands.iter().any(|c| c == head) {
            Owned(line.replacen(head, &head.bright_cyan().to_string(), 1))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ReplHelper {}
