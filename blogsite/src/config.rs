use clap::{Parser, Subcommand, ValueEnum};

/// Inspect the blog's site identity and category icons
#[derive(Parser, Debug)]
#[command(name = "blogsite")]
#[command(about = "Prints the blog's static site configuration", long_about = None)]
pub struct Args {
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the author and site metadata
    Identity,
    /// Print the category to icon table
    Icons,
    /// Print identity and icons together
    Export,
    /// Print the icon for one category
    Icon {
        category: String,
        /// Printed instead of failing when the category has no icon
        #[arg(long)]
        fallback: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}
