//! Table rendering for the terminal. Everything here consumes the
//! structured data a command returned; nothing below the binary prints.

use biblio::commands::users::held_summary;
use biblio::commands::{report::CatalogReport, stats::LibraryStats};
use biblio::model::{Book, User};
use biblio::store::Catalog;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub fn book_table(books: &[Book]) -> String {
    let header = ["ID", "Title", "Author", "Year", "Genre", "Available"];
    let rows: Vec<[String; 6]> = books
        .iter()
        .map(|b| {
            [
                b.id.to_string(),
                b.title.clone(),
                b.author.clone(),
                b.year.to_string(),
                b.genre.clone(),
                if b.available { "yes".into() } else { "no".into() },
            ]
        })
        .collect();
    table(&header, &rows)
}

pub fn user_table(users: &[User], catalog: &Catalog) -> String {
    let header = ["ID", "Name", "Email", "Held books"];
    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|u| {
            [
                u.id.to_string(),
                u.name.clone(),
                u.email.clone(),
                held_summary(u, catalog),
            ]
        })
        .collect();
    table(&header, &rows)
}

pub fn render_report(report: &CatalogReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total books:  {}\n", report.total));
    out.push_str(&format!("Lent out:     {}\n", report.lent));
    if let Some(oldest) = &report.oldest {
        out.push_str(&format!("Oldest:       {} ({})\n", oldest.title, oldest.year));
    }
    if let Some(newest) = &report.newest {
        out.push_str(&format!("Newest:       {} ({})\n", newest.title, newest.year));
    }
    if !report.genre_counts.is_empty() {
        out.push('\n');
        let rows: Vec<[String; 2]> = report
            .genre_counts
            .iter()
            .map(|(genre, count)| [genre.clone(), count.to_string()])
            .collect();
        out.push_str(&table(&["Genre", "Books"], &rows));
    }
    out
}

pub fn render_stats(stats: &LibraryStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total books:   {}\n", stats.total));
    out.push_str(&format!("Average year:  {}\n", stats.average_year));
    if let Some(oldest) = &stats.oldest {
        out.push_str(&format!("Oldest:        {} ({})\n", oldest.title, oldest.year));
    }
    if let Some(newest) = &stats.newest {
        out.push_str(&format!("Newest:        {} ({})\n", newest.title, newest.year));
    }
    out.push_str(&format!("Year gap:      {}\n", stats.year_gap));
    if !stats.year_counts.is_empty() {
        out.push('\n');
        let rows: Vec<[String; 2]> = stats
            .year_counts
            .iter()
            .map(|(year, count)| [year.to_string(), count.to_string()])
            .collect();
        out.push_str(&table(&["Year", "Books"], &rows));
    }
    out
}

fn table<const N: usize>(header: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths: [usize; N] = [0; N];
    for (i, h) in header.iter().enumerate() {
        widths[i] = h.width();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    let header_line = format_row(header.map(|h| h.to_string()), &widths);
    out.push_str(&format!("{}\n", header_line.bold()));
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.clone(), &widths));
        out.push('\n');
    }
    out
}

fn format_row<const N: usize>(cells: [String; N], widths: &[usize; N]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let padding = widths[i].saturating_sub(cell.width());
        line.push_str(cell);
        line.push_str(&" ".repeat(padding));
    }
    line.trim_end().to_string()
}
