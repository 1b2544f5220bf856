use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(about = "In-memory library catalog and lending manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start with empty stores instead of the demo library
    #[arg(long, global = true)]
    pub empty: bool,

    /// Print listings as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the catalog
    #[command(alias = "ab")]
    AddBook {
        title: String,
        author: String,
        year: i32,
        /// Genre label (optional)
        #[arg(default_value = "")]
        genre: String,
    },

    /// Delete a book; refused while the book is lent out
    #[command(alias = "db")]
    DeleteBook { id: u32 },

    /// List every book in the catalog
    #[command(alias = "ls")]
    Books,

    /// Search books by field (title, author or genre)
    Search { field: String, term: String },

    /// Show the catalog sorted by a key (title or year), without reordering it
    Sort { key: String },

    /// Register a library user
    #[command(alias = "ru")]
    RegisterUser { name: String, email: String },

    /// List every registered user with their held books
    Users,

    /// Look a user up by email
    FindUser { email: String },

    /// Delete a user; refused while they hold books
    #[command(alias = "du")]
    DeleteUser { name: String, email: String },

    /// Lend an available book to a user
    Lend { book_id: u32, user_id: u32 },

    /// Return a lent book from the user who holds it
    Return { book_id: u32, user_id: u32 },

    /// List the books currently available for lending
    #[command(alias = "av")]
    Available,

    /// Catalog report: totals, loans, oldest/newest, genre breakdown
    Report,

    /// Publication-year statistics
    Stats,

    /// Titles with at least two words and no digits or punctuation
    LongTitles,

    /// Show normalized copies of all records (stores stay unchanged)
    Normalize,

    /// Read commands line by line from stdin against one shared session
    Shell,
}
