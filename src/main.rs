use clap::Parser;

use file_aging::cli::{AddArgs, ClearArgs, ClearLevel, Cli, Commands, ListArgs, RemoveArgs};
use file_aging::config::{AgingConfig, AgingRule};
use file_aging::output::{JsonFormatter, ListReport, OutputFormat, ReportFormatter, TextFormatter};
use file_aging::{AgingError, EXIT_NOT_FOUND, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Add(args) => run(run_add(args)),
        Commands::List(args) => run(run_list(args)),
        Commands::Remove(args) => run(run_remove(args)),
        Commands::Clear(args) => run(run_clear(args)),
        Commands::Run(_) => run(Err(AgingError::Unimplemented("run"))),
    };

    std::process::exit(exit_code);
}

fn run(result: file_aging::Result<i32>) -> i32 {
    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn run_add(args: &AddArgs) -> file_aging::Result<i32> {
    let mut config = AgingConfig::load(&args.folder)?;

    let mut rule = AgingRule::new(&args.pattern);
    rule.expire = args.expire;
    rule.keep = args.keep;

    config.insert_rule(args.position, rule)?;
    config.save()?;

    println!(
        "{}: rule '{}' added at position {}.",
        config.directory().display(),
        args.pattern,
        args.position
    );
    Ok(EXIT_SUCCESS)
}

fn run_list(args: &ListArgs) -> file_aging::Result<i32> {
    let config = AgingConfig::load(&args.folder)?;

    let report = if args.no_parent {
        if !config.exists() {
            println!("{}: Configuration does not exist.", config.directory().display());
            return Ok(EXIT_NOT_FOUND);
        }
        ListReport::own(&config)
    } else {
        if !config.effective_exists()? {
            println!("{}: Configuration does not exist.", config.directory().display());
            return Ok(EXIT_NOT_FOUND);
        }
        ListReport::effective(&config)?
    };

    let output = match args.format {
        OutputFormat::Text => TextFormatter.format(&report)?,
        OutputFormat::Json => JsonFormatter.format(&report)?,
    };
    print!("{output}");

    Ok(EXIT_SUCCESS)
}

fn run_remove(args: &RemoveArgs) -> file_aging::Result<i32> {
    let mut config = AgingConfig::load(&args.folder)?;

    if !config.exists() {
        println!("{}: Configuration does not exist.", config.directory().display());
        return Ok(EXIT_NOT_FOUND);
    }

    let removed = config.remove_rules(&args.positions)?;
    config.save()?;

    let patterns: Vec<String> = removed
        .iter()
        .map(|rule| format!("'{}'", rule.pattern()))
        .collect();
    println!(
        "{}: removed rules - {}",
        config.directory().display(),
        patterns.join(", ")
    );
    Ok(EXIT_SUCCESS)
}

fn run_clear(args: &ClearArgs) -> file_aging::Result<i32> {
    let mut config = AgingConfig::load(&args.folder)?;

    if !config.exists() {
        println!("{}: Configuration does not exist.", config.directory().display());
        return Ok(EXIT_NOT_FOUND);
    }

    let directory = config.directory().display().to_string();
    if args.includes(ClearLevel::Log) {
        config.clear_log()?;
        println!("{directory}: cleared log");
    }
    if args.includes(ClearLevel::Archive) {
        config.clear_archive()?;
        println!("{directory}: cleared archive");
    }
    if args.includes(ClearLevel::Rules) {
        config.clear_rules();
        config.save()?;
        println!("{directory}: cleared rules");
    }
    if args.includes(ClearLevel::All) {
        config.delete()?;
        println!("{directory}: cleared all");
    }

    Ok(EXIT_SUCCESS)
}
