use crate::cli::{Cli, Commands};
use crate::domain::models::{Book, RemoveReport};
use crate::services::catalog::{parse_year, Catalog};
use crate::services::output::{book_line, print_one, print_out, stats_lines};
use crate::services::storage;

pub fn handle_runtime_commands(
    cli: &Cli,
    command: &Commands,
    catalog: &mut Catalog,
) -> anyhow::Result<()> {
    match command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => {
            let book = Book {
                title: title.clone(),
                author: author.clone(),
                year: parse_year(year)?,
                genre: genre.clone(),
                read: *read,
            };
            catalog.add(book.clone());
            storage::save(&cli.file, catalog.list_all())?;
            print_one(cli.json, book, |_| "Book added successfully!".to_string())?;
        }
        Commands::Remove { title } => {
            let removed = catalog.remove_by_title(title.trim());
            if removed > 0 {
                storage::save(&cli.file, catalog.list_all())?;
            }
            let report = RemoveReport {
                title: title.clone(),
                removed,
            };
            print_one(cli.json, report, |r| {
                if r.removed > 0 {
                    format!("removed {} entries", r.removed)
                } else {
                    "Book not found.".to_string()
                }
            })?;
        }
        Commands::Search { field, query } => {
            let hits: Vec<&Book> = catalog.search(*field, query.trim());
            if hits.is_empty() && !cli.json {
                println!("No matching books found.");
            } else {
                print_out(cli.json, &hits, |i, b| book_line(i, b))?;
            }
        }
        Commands::List => {
            if catalog.is_empty() && !cli.json {
                println!("Your library is empty.");
            } else {
                print_out(cli.json, catalog.list_all(), book_line)?;
            }
        }
        Commands::Stats => {
            print_one(cli.json, catalog.statistics(), |s| stats_lines(s).join("\n"))?;
        }
    }
    Ok(())
}
