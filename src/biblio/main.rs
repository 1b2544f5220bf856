use biblio::api::{CmdMessage, LibraryApi, MessageLevel, SearchField, SortKey};
use biblio::commands::CmdResult;
use biblio::error::Result;
use biblio::seed;
use biblio::store::{Catalog, Membership};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

mod args;
mod render;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LibraryApi,
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Shell) | None => run_shell(&mut ctx),
        Some(command) => dispatch(&mut ctx, command),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let (catalog, membership) = if cli.empty {
        (Catalog::new(), Membership::new())
    } else {
        seed::demo_library()
    };
    AppContext {
        api: LibraryApi::new(catalog, membership),
        json: cli.json,
    }
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::AddBook {
            title,
            author,
            year,
            genre,
        } => {
            let result = ctx.api.add_book(&title, &author, year, &genre)?;
            print_messages(&result.messages);
        }
        Commands::DeleteBook { id } => {
            let result = ctx.api.delete_book(id)?;
            print_messages(&result.messages);
        }
        Commands::Books => {
            print_books(ctx, ctx.api.catalog().books());
        }
        Commands::Search { field, term } => {
            let field: SearchField = field.parse()?;
            let result = ctx.api.search_books(field, &term)?;
            print_books(ctx, &result.listed_books);
            print_messages(&result.messages);
        }
        Commands::Sort { key } => {
            let key: SortKey = key.parse()?;
            let result = ctx.api.sort_books(key)?;
            print_books(ctx, &result.listed_books);
        }
        Commands::RegisterUser { name, email } => {
            let result = ctx.api.register_user(&name, &email)?;
            print_messages(&result.messages);
        }
        Commands::Users => {
            let result = ctx.api.list_users()?;
            print_users(ctx, &result);
        }
        Commands::FindUser { email } => {
            let result = ctx.api.find_user(&email)?;
            print_users(ctx, &result);
        }
        Commands::DeleteUser { name, email } => {
            let result = ctx.api.delete_user(&name, &email)?;
            print_messages(&result.messages);
        }
        Commands::Lend { book_id, user_id } => {
            let result = ctx.api.lend(book_id, user_id)?;
            print_messages(&result.messages);
        }
        Commands::Return { book_id, user_id } => {
            let result = ctx.api.return_book(book_id, user_id)?;
            print_messages(&result.messages);
        }
        Commands::Available => {
            let result = ctx.api.available_books()?;
            print_books(ctx, &result.listed_books);
            print_messages(&result.messages);
        }
        Commands::Report => {
            let result = ctx.api.report()?;
            if let Some(report) = &result.report {
                if ctx.json {
                    println!("{}", serde_json::to_string_pretty(report)?);
                } else {
                    print!("{}", render::render_report(report));
                }
            }
            print_messages(&result.messages);
        }
        Commands::Stats => {
            let result = ctx.api.stats()?;
            if let Some(stats) = &result.stats {
                if ctx.json {
                    println!("{}", serde_json::to_string_pretty(stats)?);
                } else {
                    print!("{}", render::render_stats(stats));
                }
            }
        }
        Commands::LongTitles => {
            let result = ctx.api.long_titles()?;
            for title in &result.titles {
                println!("{title}");
            }
            print_messages(&result.messages);
        }
        Commands::Normalize => {
            let result = ctx.api.normalize()?;
            print_books(ctx, &result.listed_books);
            print_users(ctx, &result);
            print_messages(&result.messages);
        }
        Commands::Shell => {
            println!("{}", "Already inside a shell session".yellow());
        }
    }
    Ok(())
}

/// One command per line against a single session, so lends and returns
/// are visible to later commands. Domain failures are printed and the
/// session continues; only `exit`/`quit` (or EOF) ends it.
fn run_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    print_prompt();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            print_prompt();
            continue;
        }
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        let tokens = split_command_line(trimmed);
        let parsed = Cli::try_parse_from(std::iter::once("biblio".to_string()).chain(tokens));
        match parsed {
            Ok(Cli {
                command: Some(command),
                ..
            }) => {
                if let Err(e) = dispatch(ctx, command) {
                    println!("{}", e.to_string().red());
                }
            }
            Ok(Cli { command: None, .. }) => {}
            Err(e) => println!("{e}"),
        }
        print_prompt();
    }
    println!("Bye");
    Ok(())
}

fn print_prompt() {
    print!("biblio> ");
    let _ = io::stdout().flush();
}

/// Whitespace tokenizer with double-quote grouping, enough for titles and
/// names with spaces. No escape sequences.
fn split_command_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_books(ctx: &AppContext, books: &[biblio::model::Book]) {
    if books.is_empty() {
        return;
    }
    if ctx.json {
        match serde_json::to_string_pretty(books) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{} {}", "Error:".red(), e),
        }
    } else {
        print!("{}", render::book_table(books));
    }
}

fn print_users(ctx: &AppContext, result: &CmdResult) {
    if result.listed_users.is_empty() {
        return;
    }
    if ctx.json {
        match serde_json::to_string_pretty(&result.listed_users) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{} {}", "Error:".red(), e),
        }
    } else {
        print!(
            "{}",
            render::user_table(&result.listed_users, ctx.api.catalog())
        );
    }
}
