use bulk_rename::commands::execute_rename;
use bulk_rename::core::{
    config::Config, name_generator::TempNameGenerator, print_error, print_warning,
};
use clap::Parser;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bulk-rename")]
#[command(about = "Rename files and directories by editing a list in your text editor")]
#[command(version = "0.1.0")]
struct Cli {
    /// Files and directories to rename
    #[arg(required = true)]
    paths: Vec<String>,

    /// List the contents of every directory given
    #[arg(short = 'e', long)]
    enumerate: bool,

    /// With --enumerate, list directory contents at every depth
    #[arg(short = 'r', long)]
    recursive: bool,

    /// With --enumerate, only list entries whose name matches this pattern (`*` and `?` wildcards)
    #[arg(short = 's', long, value_name = "PATTERN")]
    search_pattern: Option<String>,

    /// Editor to open the list with
    #[arg(short = 'c', long, value_name = "COMMAND")]
    editor_command: Option<String>,

    /// Editor arguments; {0} is replaced by the list file path
    #[arg(short = 'a', long, value_name = "ARGS", allow_hyphen_values = true)]
    editor_args: Option<String>,

    /// Spaces per nesting level in the list
    #[arg(short = 'i', long, value_name = "N")]
    indent_size: Option<usize>,

    /// Temporary name generator (GUID, AlphaNum<N>, AlphaNumVariableLength)
    #[arg(short = 't', long, value_name = "GENERATOR")]
    temp_name_gen: Option<TempNameGenerator>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Config file to use instead of the default one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Command-line values win over whatever the config file set.
    fn apply_to(&self, config: &mut Config) {
        config.enumerate |= self.enumerate;
        config.recursive |= self.recursive;
        config.verbose |= self.verbose;
        if let Some(pattern) = &self.search_pattern {
            config.search_pattern = pattern.clone();
        }
        if let Some(command) = &self.editor_command {
            config.editor_command = command.clone();
        }
        if let Some(args) = &self.editor_args {
            config.editor_args = args.clone();
        }
        if let Some(size) = self.indent_size {
            config.indent_size = size;
        }
        if let Some(generator) = self.temp_name_gen {
            config.temp_name_gen = generator;
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let (mut config, warnings) = Config::load(cli.config.as_deref());
    cli.apply_to(&mut config);

    // Configure logging based on --verbose flag
    if config.verbose {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    for warning in &warnings {
        print_warning(&warning.to_string());
    }

    if let Err(e) = execute_rename(&cli.paths, &config) {
        print_error(&e.to_string());
        if !e.is_pre_mutation() {
            print_warning("Some items were left with temporary names, see the log above.");
        }
        std::process::exit(1);
    }
}
