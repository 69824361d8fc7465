use crate::domain::models::{Book, ErrorBody, JsonErr, JsonOut, Stats};
use serde::Serialize;

/// `1. Dune by Frank Herbert (1965) - Sci-Fi - Read`
pub fn book_line(index: usize, book: &Book) -> String {
    format!(
        "{}. {} by {} ({}) - {} - {}",
        index,
        book.title,
        book.author,
        book.year,
        book.genre,
        book.status()
    )
}

pub fn stats_lines(stats: &Stats) -> [String; 2] {
    [
        format!("Total books: {}", stats.total),
        format!("Percentage read: {:.1}%", stats.percent_read),
    ]
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(usize, &T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for (i, d) in data.iter().enumerate() {
            println!("{}", row(i + 1, d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_err_json(code: &str, message: &str) {
    let out = JsonErr {
        ok: false,
        error: ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
        },
    };
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{}", s),
        Err(e) => tracing::error!("failed to render error envelope: {}", e),
    }
}
