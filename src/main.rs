use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use std::path::PathBuf;
use todostore::{Config, Persisted, Search, Status, Store, logging, render};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Manage a todo list stored in a single JSON file")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Backing JSON file (default: config `file`, else ./todos.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Config file (default: <config dir>/todostore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new todo
    Add {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Remove a todo by id
    Remove { id: u32 },

    /// Toggle the completed status of a todo
    Toggle { id: u32 },

    /// Search for todos
    Search {
        #[command(subcommand)]
        by: SearchBy,
    },

    /// Display all todos
    List,
}

#[derive(Subcommand)]
enum SearchBy {
    /// Todo with the given id
    Id { id: u32 },

    /// First todo whose title contains the keyword
    Keyword {
        keyword: String,

        /// Show every matching todo instead of the first
        #[arg(short, long)]
        all: bool,
    },

    /// Completed or remaining todos
    Status { status: StatusArg },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Completed,
    Remaining,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Completed => Status::Completed,
            StatusArg::Remaining => Status::Remaining,
        }
    }
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let mut store = Store::open_with(config.resolve_file(cli.file.as_deref()), config.id_strategy);

    match cli.command {
        Commands::Add { title, description } => {
            let title = title.unwrap_or_else(|| config.default_title.clone());
            let description = description.unwrap_or_else(|| config.default_description.clone());

            let created = store.create(title, description)?;
            println!("{}", render::created(created.value));
            warn_unsaved(&created);
        }
        Commands::Remove { id } => {
            let removed = store.remove(id);
            if removed.value {
                println!("{}", render::removed(id));
            } else {
                println!("{}", render::not_found(id));
            }
            warn_unsaved(&removed);
        }
        Commands::Toggle { id } => {
            let toggled = store.toggle(id);
            if toggled.value {
                println!("{}", render::toggled(id));
            } else {
                println!("{}", render::not_found(id));
            }
            warn_unsaved(&toggled);
        }
        Commands::Search { by } => search(&store, by),
        Commands::List => {
            let todos = store.list_all();
            println!("{}", render::count(todos.len()));
            if !todos.is_empty() {
                println!("{}", render::todo_blocks(todos));
            }
        }
    }

    Ok(())
}

fn search(store: &Store, by: SearchBy) {
    match by {
        SearchBy::Id { id } => match store.search(&Search::Id(id)).first() {
            Some(todo) => println!("{}", render::todo_block(todo)),
            None => println!("{}", render::not_found(id)),
        },
        SearchBy::Keyword { keyword, all } => {
            let found = if all {
                store.search_all_by_title(&keyword)
            } else {
                store.search(&Search::Keyword(keyword.clone()))
            };
            if found.is_empty() {
                println!("{}", render::keyword_not_matched(&keyword));
            } else {
                println!("{}", render::todo_blocks(found));
            }
        }
        SearchBy::Status { status } => {
            let status = Status::from(status);
            let found = store.search(&Search::Status(status));
            if found.is_empty() {
                println!("{}", render::empty_status(status));
            } else {
                println!("{}", render::todo_blocks(found));
            }
        }
    }
}

fn warn_unsaved<T>(outcome: &Persisted<T>) {
    if let Some(err) = &outcome.error {
        eprintln!("{}", render::save_warning(err));
    }
}
