use academy_progress::achievements::{
    count_by_category, get_achievement_def, unlock_percentage, ALL_ACHIEVEMENTS,
};
use academy_progress::build_info;
use academy_progress::{AchievementCategory, FileStore, ProgressionContext, Track};
use chrono::DateTime;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const RECENT_UNLOCKS_SHOWN: usize = 5;

const USAGE: &str = "Contract Academy - progression tracker

Usage: academy [command]

Commands:
  status                    Show level, XP and track progress (default)
  record <kind> [amount]    Record activity (sanctum_message, code_generation,
                            contract_deployed, concept_learned, quiz_streak)
  complete <track> <slug>   Mark a module complete (builder, explorer, founder, hacker)
  achievements              List all achievements
  reset                     Erase all saved progress
  --version                 Show version information
  --help                    Show this help message

Progress is stored in ~/.contract-academy (override with ACADEMY_DATA_DIR).";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["--version" | "-v"] => {
            println!("academy {}", build_info::version_line());
            return ExitCode::SUCCESS;
        }
        ["--help" | "-h"] => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let store = match FileStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Could not locate progress directory: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut ctx = ProgressionContext::open(store);
    if !ctx.hydration_errors().is_empty() {
        eprintln!("Warning: saved progress was unreadable and has been reset.");
    }

    match args.as_slice() {
        [] | ["status"] => print_status(&ctx),
        ["record", kind] => record(&mut ctx, kind, "1"),
        ["record", kind, amount] => record(&mut ctx, kind, amount),
        ["complete", track, slug] => complete(&mut ctx, track, slug),
        ["achievements"] => print_achievements(&ctx),
        ["reset"] => match ctx.reset() {
            Ok(()) => {
                println!(
                    "Progress reset. Cleared saves in {}",
                    ctx.store().config().data_dir.display()
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Could not reset progress: {}", e);
                ExitCode::FAILURE
            }
        },
        other => {
            eprintln!("Unknown command: {}", other.join(" "));
            eprintln!("Run 'academy --help' for usage.");
            ExitCode::FAILURE
        }
    }
}

fn record(ctx: &mut ProgressionContext<FileStore>, kind: &str, amount: &str) -> ExitCode {
    let Ok(amount) = amount.parse::<u64>() else {
        eprintln!("Amount must be a non-negative integer, got '{}'", amount);
        return ExitCode::FAILURE;
    };

    let before = ctx.level();
    let unlocked = ctx.record_activity_named(kind, amount);
    for def in unlocked {
        println!("🏆 Achievement unlocked: {} (+{} XP)", def.name, def.xp);
    }

    let after = ctx.level();
    if after.level > before.level {
        println!("⬆ Level up! You are now level {} ({})", after.level, after.title);
    }
    if !ctx.is_connected() {
        eprintln!("Warning: progress could not be saved.");
        return ExitCode::FAILURE;
    }
    print_status(ctx)
}

fn complete(ctx: &mut ProgressionContext<FileStore>, track: &str, slug: &str) -> ExitCode {
    let track = match track.parse::<Track>() {
        Ok(track) => track,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if ctx.mark_module_complete(track, slug) {
        println!("Completed {} / {}", track.name(), slug);
    } else {
        println!("{} / {} was already complete", track.name(), slug);
    }
    if !ctx.is_connected() {
        eprintln!("Warning: progress could not be saved.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_status(ctx: &ProgressionContext<FileStore>) -> ExitCode {
    let level = ctx.level();
    let filled = (level.progress / 5.0).round() as usize;

    println!("Level {} - {}", level.level, level.title);
    println!(
        "[{}{}] {:.0}%  ({} / {} XP)",
        "█".repeat(filled),
        "░".repeat(20 - filled.min(20)),
        level.progress,
        level.current_xp,
        level.next_level_xp
    );
    println!(
        "Total XP: {} (activity {}, achievements {})",
        ctx.total_xp(),
        ctx.activity_xp(),
        ctx.achievement_xp()
    );

    let c = ctx.counters();
    println!(
        "Messages {} · Generations {} · Deployments {} · Concepts {} · Best quiz streak {}",
        c.sanctum_messages,
        c.code_generations,
        c.contracts_deployed,
        c.concepts_learned,
        c.max_quiz_streak
    );

    for track in Track::ALL {
        println!(
            "{:<9} {} module(s) complete",
            track.name(),
            ctx.track(track).completed_count()
        );
    }
    ExitCode::SUCCESS
}

fn print_achievements(ctx: &ProgressionContext<FileStore>) -> ExitCode {
    let unlocked = ctx.unlocked();
    println!(
        "Achievements: {}/{} ({:.0}%)",
        ALL_ACHIEVEMENTS
            .iter()
            .filter(|a| unlocked.contains(a.id))
            .count(),
        ALL_ACHIEVEMENTS.len(),
        unlock_percentage(unlocked)
    );

    let recent = unlocked.recent(RECENT_UNLOCKS_SHOWN);
    if !recent.is_empty() {
        println!("\nRecently unlocked:");
        for (id, at) in recent {
            let name = get_achievement_def(id).map_or(id, |def| def.name);
            let when = at
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "unknown date".to_string());
            println!("  {:<18} {}", name, when);
        }
    }

    for category in AchievementCategory::ALL {
        let (done, total) = count_by_category(unlocked, category);
        println!("\n{} ({}/{})", category.name(), done, total);
        for def in ALL_ACHIEVEMENTS.iter().filter(|a| a.category == category) {
            let mark = if unlocked.contains(def.id) { "✔" } else { " " };
            println!(
                "  [{}] {:<18} {:>5} XP  {}",
                mark, def.name, def.xp, def.description
            );
        }
    }
    ExitCode::SUCCESS
}
