use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "portfolio-book")]
#[command(about = "Page through a résumé laid out as a book")]
#[command(long_about = "Portfolio Book presents a résumé as a seven-page book. Pages turn one at a time \
                       and a page turn in progress ignores further input. Start with 'portfolio-book browse'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the pages of the book
    Pages {
        /// Print the catalog as JSON
        #[arg(long, help = "Emit the page list as JSON")]
        json: bool,
    },
    /// Read the book interactively, one key per line on stdin
    Browse,
    /// Replay a sequence of keys, letting each page turn settle before the next
    Walk {
        /// Keys to press, e.g. "right,right,end,home,4,contact"
        #[arg(long, help = "Comma separated keys: left, right, home, end, contact or a page number")]
        keys: String,
        /// Fire all keys immediately instead of waiting for each page turn
        #[arg(long, help = "Do not wait for page turns to settle between keys")]
        no_wait: bool,
        /// Print every step as JSON
        #[arg(long, help = "Emit each step as a JSON line")]
        json: bool,
    },
}
