//! filmlib Command Line Tool
//!
//! Provides commands for working with a film library server:
//! - list / filter: read the collection
//! - add / edit / favorite / rate / delete: mutate it
//! - whoami: show the identity bound to the current session
//!
//! The server is taken from `--server`, then the `FILMLIB_URL` environment
//! variable, then a localhost default. Sessions are cookie-based and live
//! only for the process, so pass `--username`/`--password` to log in before
//! the command runs.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use filmlib_core::{Credentials, Film};
use filmlib_http::FilmClient;

const DEFAULT_SERVER: &str = "http://localhost:3001/api";

#[derive(Parser)]
#[command(name = "filmlib")]
#[command(version)]
#[command(about = "filmlib Command Line Tool - Browse and edit a film library")]
#[command(long_about = None)]
struct Cli {
    /// Base URL of the film server (falls back to $FILMLIB_URL)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Log in as this user before running the command
    #[arg(long, global = true, requires = "password")]
    username: Option<String>,

    /// Password for --username
    #[arg(long, global = true, requires = "username")]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every film in the collection
    List,

    /// List the films matching a named filter
    #[command(about = "List films matching a named filter (name is case-insensitive)")]
    Filter {
        /// Filter name, e.g. favorites or best-rated
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Add a film to the collection
    Add {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        title: String,

        #[arg(long)]
        favorite: bool,

        /// Watch date as YYYY-MM-DD; omit if not yet watched
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        rating: Option<i64>,

        /// Owning user id
        #[arg(long)]
        user: i64,
    },

    /// Replace a film record (ownership stays with the server)
    Edit {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        title: String,

        #[arg(long)]
        favorite: bool,

        /// Watch date as YYYY-MM-DD; omit if not yet watched
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        rating: Option<i64>,
    },

    /// Toggle a film's favorite flag
    #[command(about = "Toggle a film's favorite flag (pass the value it currently has)")]
    Favorite {
        #[arg(value_name = "ID")]
        id: i64,

        /// The favorite value the film currently has; the server stores
        /// its negation
        #[arg(value_name = "CURRENT")]
        current: bool,
    },

    /// Set a film's rating
    Rate {
        #[arg(value_name = "ID")]
        id: i64,

        #[arg(value_name = "RATING")]
        rating: i64,
    },

    /// Delete a film from the collection
    Delete {
        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Show the identity bound to the current session
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_url = cli
        .server
        .clone()
        .or_else(|| std::env::var("FILMLIB_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let client = FilmClient::new(base_url);

    if let (Some(username), Some(password)) = (&cli.username, &cli.password) {
        client
            .log_in(&Credentials::new(username.clone(), password.clone()))
            .await
            .with_context(|| format!("Log-in as {username} failed"))?;
    }

    match cli.command {
        Commands::List => handle_list(&client).await,
        Commands::Filter { name } => handle_filter(&client, &name).await,
        Commands::Add {
            id,
            title,
            favorite,
            date,
            rating,
            user,
        } => {
            let film = Film {
                id,
                title,
                favorite,
                date,
                rating,
                user,
            };
            client.add_film(&film).await?;
            println!("Added film {}", film.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            favorite,
            date,
            rating,
        } => {
            // The edit path never sends ownership; the field is ignored.
            let film = Film {
                id,
                title,
                favorite,
                date,
                rating,
                user: 0,
            };
            client.update_film(&film).await?;
            println!("Updated film {id}");
            Ok(())
        }
        Commands::Favorite { id, current } => {
            client.toggle_favorite(id, current).await?;
            println!("Film {} is {} a favorite", id, if current { "no longer" } else { "now" });
            Ok(())
        }
        Commands::Rate { id, rating } => {
            client.update_rating(id, rating).await?;
            println!("Rated film {id}: {rating}");
            Ok(())
        }
        Commands::Delete { id } => {
            client.delete_film(id).await?;
            println!("Deleted film {id}");
            Ok(())
        }
        Commands::Whoami => handle_whoami(&client).await,
    }
}

async fn handle_list(client: &FilmClient) -> Result<()> {
    let films = client.list_all().await?;
    print_films(&films);
    Ok(())
}

async fn handle_filter(client: &FilmClient, name: &str) -> Result<()> {
    let films = client.list_filtered(name).await?;
    print_films(&films);
    Ok(())
}

async fn handle_whoami(client: &FilmClient) -> Result<()> {
    let identity = client.current_user().await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&identity).with_context(|| "Failed to render identity")?
    );
    Ok(())
}

fn print_films(films: &[Film]) {
    if films.is_empty() {
        println!("No films.");
        return;
    }

    for film in films {
        let favorite = if film.favorite { "*" } else { " " };
        let date = film
            .date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "not watched".to_string());
        let rating = film
            .rating
            .map(|rating| rating.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!("{:>4} {} {:<40} {:<12} {}", film.id, favorite, film.title, date, rating);
    }
}
