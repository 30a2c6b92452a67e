// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result, bail};
use config::Config;
use opsdesk_api::Client;
use runtime::{ScreenAction, ScreenDefaults, ScreenOptions};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `opsdesk --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let client = Client::new(config.base_url(), config.token(), config.timeout()?)
        .with_context(|| {
            format!(
                "invalid [api] config in {}; fix base_url/timeout values",
                options.config_path.display()
            )
        })?;

    if options.check_only {
        return Ok(());
    }

    let Some(collection) = options.collection else {
        print_help();
        return Ok(());
    };

    let defaults = ScreenDefaults {
        items_per_page: config.items_per_page(),
        sort_key: config.sort().to_owned(),
    };

    let output = match collection {
        Collection::Invoices => runtime::run_invoices(&client, &options.screen, &defaults)?,
        Collection::Projects => runtime::run_projects(&client, &options.screen, &defaults)?,
    };
    print!("{output}");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Invoices,
    Projects,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
    collection: Option<Collection>,
    screen: ScreenOptions,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
        collection: None,
        screen: ScreenOptions::default(),
    };

    fn set_action(screen: &mut ScreenOptions, action: ScreenAction) -> Result<()> {
        if screen.action != ScreenAction::List {
            bail!("choose at most one of --show/--create/--update/--delete");
        }
        screen.action = action;
        Ok(())
    }

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            "invoices" => {
                options.collection = Some(Collection::Invoices);
            }
            "projects" => {
                options.collection = Some(Collection::Projects);
            }
            "--page" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--page requires a page number"))?;
                options.screen.page = value
                    .as_ref()
                    .parse()
                    .with_context(|| format!("invalid page number {:?}", value.as_ref()))?;
                if options.screen.page == 0 {
                    bail!("--page numbering starts at 1");
                }
            }
            "--search" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--search requires a query"))?;
                options.screen.search = Some(value.as_ref().to_owned());
            }
            "--sort" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--sort requires a sort key"))?;
                options.screen.sort = Some(value.as_ref().to_owned());
            }
            "--show" => {
                let id = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--show requires an id"))?;
                set_action(
                    &mut options.screen,
                    ScreenAction::Show(id.as_ref().to_owned()),
                )?;
            }
            "--create" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--create requires a form file path"))?;
                set_action(
                    &mut options.screen,
                    ScreenAction::Create(PathBuf::from(path.as_ref())),
                )?;
            }
            "--update" => {
                let id = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--update requires an id and a form file"))?;
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--update requires a form file after the id"))?;
                set_action(
                    &mut options.screen,
                    ScreenAction::Update(id.as_ref().to_owned(), PathBuf::from(path.as_ref())),
                )?;
            }
            "--delete" => {
                let id = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--delete requires an id"))?;
                set_action(
                    &mut options.screen,
                    ScreenAction::Delete(id.as_ref().to_owned()),
                )?;
            }
            unknown => {
                bail!("unknown argument {unknown:?}; run with --help to see supported options");
            }
        }
    }

    if options.collection.is_none() && options.screen != ScreenOptions::default() {
        bail!("choose a collection first: opsdesk <invoices|projects> [options]");
    }

    Ok(options)
}

fn print_help() {
    println!("opsdesk <invoices|projects> [options]");
    println!("  --page <n>               Page to display (starts at 1)");
    println!("  --search <query>         Filter the current page's rows");
    println!("  --sort <key>             Server sort key (default -createdAt)");
    println!("  --show <id>              Print one record");
    println!("  --create <file>          Create from a TOML form file");
    println!("  --update <id> <file>     Update from a TOML form file");
    println!("  --delete <id>            Delete a record");
    println!();
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config + API client setup");
    println!("  --help                   Show this help");
}
