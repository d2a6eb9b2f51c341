use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use tastebud_application::{AppContext, DiscoveryUseCase};
use tastebud_core::discovery::{DiscoveryAction, DiscoveryOutcome};
use tastebud_core::filter::PriceBounds;
use tastebud_core::restaurant::PriceTier;
use tastebud_core::review::ReviewDraft;
use tastebud_core::swipe::{SwipeDirection, SwipeEvent, SwipeInput};
use tastebud_infrastructure::TastebudPaths;

use super::catalog::print_map;
use super::render::{print_card, print_event, print_exhausted, print_feedback, print_row};
use super::repl::{ReplCommand, ReplHelper, print_help};

/// Filters given on the command line; they override the stored preferences.
pub struct StartFilters {
    pub tags: Vec<String>,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub query: Option<String>,
    pub tiers: Vec<PriceTier>,
}

impl StartFilters {
    /// A single bound given on its own keeps the other from `current`, or
    /// opens it fully when `current` would invert the range.
    fn actions(self, current: PriceBounds) -> Vec<DiscoveryAction> {
        let mut actions = Vec::new();
        if !self.tags.is_empty() {
            actions.push(DiscoveryAction::SetSelectedTags { tags: self.tags });
        }
        if self.min.is_some() || self.max.is_some() {
            let low = self.min.unwrap_or(match self.max {
                Some(max) if current.low() > max => 0,
                _ => current.low(),
            });
            let high = self.max.unwrap_or(match self.min {
                Some(min) if current.high() < min => u32::MAX,
                _ => current.high(),
            });
            actions.push(DiscoveryAction::SetPrice { low, high });
        }
        if let Some(query) = self.query {
            actions.push(DiscoveryAction::SetQuery { query });
        }
        for tier in self.tiers {
            actions.push(DiscoveryAction::TogglePriceTier { tier });
        }
        actions
    }
}

pub async fn run(paths: TastebudPaths, filters: StartFilters) -> Result<()> {
    let context = AppContext::load(paths).await;
    let discovery = &context.discovery;

    let current = discovery.snapshot().await.filter().price();
    for action in filters.actions(current) {
        if let DiscoveryOutcome::Rejected { message } = discovery.dispatch(action).await {
            eprintln!("{}", message.red());
        }
    }

    let profile = discovery.profile().await;
    println!(
        "{}",
        format!("=== Hey {}, let's find food ===", profile.greeting_name())
            .bright_magenta()
            .bold()
    );
    println!("{}", "Type 'help' for commands, 'quit' to leave.".bright_black());
    show_current(discovery).await;

    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());

        let command = match ReplCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                continue;
            }
        };
        if command == ReplCommand::Quit {
            break;
        }
        if let Err(e) = handle(discovery, command).await {
            eprintln!("{}", e.to_string().red());
        }
    }

    let saved = discovery.bookmarks().await.len();
    println!("{}", format!("Goodbye! {} saved this session.", saved).bright_green());
    Ok(())
}

async fn handle(discovery: &DiscoveryUseCase, command: ReplCommand) -> Result<()> {
    match command {
        ReplCommand::Like => swipe_button(discovery, SwipeDirection::Right).await,
        ReplCommand::Skip => swipe_button(discovery, SwipeDirection::Left).await,
        ReplCommand::Drag(dx) => drag(discovery, dx).await,
        ReplCommand::ToggleTag(tag) => {
            filter(discovery, DiscoveryAction::ToggleTag { tag }).await
        }
        ReplCommand::Price { low, high } => {
            filter(discovery, DiscoveryAction::SetPrice { low, high }).await
        }
        ReplCommand::Query(query) => filter(discovery, DiscoveryAction::SetQuery { query }).await,
        ReplCommand::ToggleTier(tier) => {
            filter(discovery, DiscoveryAction::TogglePriceTier { tier }).await
        }
        ReplCommand::Reset => filter(discovery, DiscoveryAction::ResetFilter).await,
        ReplCommand::Filters => show_filters(discovery).await,
        ReplCommand::Bookmarks => {
            let saved = discovery.bookmarks().await;
            if saved.is_empty() {
                println!("{}", "No bookmarks yet. Swipe right on something!".bright_black());
            }
            for record in &saved {
                print_row(record);
            }
        }
        ReplCommand::Unsave(id) => {
            let outcome = discovery
                .dispatch(DiscoveryAction::RemoveBookmark { id: id.clone() })
                .await;
            if let DiscoveryOutcome::BookmarkRemoved { removed: false } = outcome {
                println!("{}", format!("'{}' was not bookmarked", id).bright_black());
            } else {
                println!("{}", format!("Removed '{}'", id).green());
            }
        }
        ReplCommand::Map => print_map(&discovery.map_listing().await),
        ReplCommand::Directions(id) => println!("{}", discovery.directions(&id).await?),
        ReplCommand::Review {
            id,
            rating,
            comment,
        } => {
            let review = discovery
                .add_review(&id, ReviewDraft::new(rating, comment))
                .await?;
            println!("{}", format!("Thanks! Rated {} ★", review.rating).green());
        }
        ReplCommand::Reviews(id) => {
            let reviews = discovery.reviews(&id).await;
            if reviews.is_empty() {
                println!("{}", "No reviews yet".bright_black());
            }
            for review in reviews {
                println!(
                    "  {} {} {}",
                    "★".repeat(review.rating as usize).yellow(),
                    review.author.bright_white(),
                    review.comment
                );
            }
        }
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => {}
    }
    Ok(())
}

async fn swipe_button(discovery: &DiscoveryUseCase, direction: SwipeDirection) {
    let outcome = discovery
        .dispatch(DiscoveryAction::Swipe {
            input: SwipeInput::Button { direction },
        })
        .await;
    after_swipe(discovery, outcome).await;
}

async fn drag(discovery: &DiscoveryUseCase, dx: f64) {
    discovery
        .dispatch(DiscoveryAction::Swipe {
            input: SwipeInput::PointerDown { x: 0.0, y: 0.0 },
        })
        .await;
    discovery
        .dispatch(DiscoveryAction::Swipe {
            input: SwipeInput::PointerMove { x: dx, y: 0.0 },
        })
        .await;
    print_feedback(&discovery.snapshot().await.session().feedback());
    let outcome = discovery
        .dispatch(DiscoveryAction::Swipe {
            input: SwipeInput::PointerUp,
        })
        .await;
    after_swipe(discovery, outcome).await;
}

async fn after_swipe(discovery: &DiscoveryUseCase, outcome: DiscoveryOutcome) {
    if let DiscoveryOutcome::Swiped { event } = &outcome {
        print_event(event);
        if matches!(event, SwipeEvent::Ignored | SwipeEvent::Cancelled) {
            return;
        }
    }
    show_current(discovery).await;
}

async fn filter(discovery: &DiscoveryUseCase, action: DiscoveryAction) {
    match discovery.dispatch(action).await {
        DiscoveryOutcome::Rebuilt { queue_len } => {
            println!("{}", format!("{} restaurants match", queue_len).bright_black());
            show_current(discovery).await;
        }
        DiscoveryOutcome::Rejected { message } => eprintln!("{}", message.red()),
        _ => {}
    }
}

async fn show_filters(discovery: &DiscoveryUseCase) {
    let snapshot = discovery.snapshot().await;
    let filter = snapshot.filter();
    let tiers: Vec<String> = filter.price_tiers().iter().map(|t| t.to_string()).collect();
    println!("  tags:  {}", filter.selected_tags().join(", "));
    println!("  price: ₱{}-{}", filter.price().low(), filter.price().high());
    println!("  query: {}", filter.query());
    println!("  tiers: {}", tiers.join(" "));
}

async fn show_current(discovery: &DiscoveryUseCase) {
    let snapshot = discovery.snapshot().await;
    let session = snapshot.session();
    match session.current() {
        Some(record) => print_card(record, session.remaining()),
        None => print_exhausted(snapshot.bookmarks().len()),
    }
}
