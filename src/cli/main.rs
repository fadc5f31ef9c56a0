//! Command-line interface entry point for `campuserp`

mod args;
mod commands;

use args::{Cli, Command};
use campus_erp::config::Config;
use campus_erp::core::session::{Credentials, DemoAuthenticator, Session};
use campus_erp::info;
use campus_erp::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use clap::Parser;
use commands::admit::AdmitArgs;
use commands::lists::{StudentArgs, TeacherArgs};
use commands::{fail, Context};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins, then config logging.level, then warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Config commands work without a catalog
    let command = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            return;
        }
        other => other,
    };

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => fail(&format!("Failed to load catalog: {e}")),
    };
    if let Err(broken) = catalog.validate_links() {
        for link in &broken {
            campus_erp::warn!("Catalog: {link}");
        }
    }

    let mut session = Session::new();
    if let (Some(user_id), Some(role)) = (args.user, args.role) {
        let credentials = Credentials {
            user_id,
            password: args.password.unwrap_or_default(),
            role: role.into(),
        };
        match session.login(&DemoAuthenticator::new(&catalog), &credentials) {
            Ok(identity) => info!("Signed in as {} ({})", identity.id, identity.role),
            Err(e) => fail(&format!("Sign-in failed: {e}")),
        }
    }

    let ctx = Context {
        config,
        catalog,
        session,
    };

    match command {
        Command::Config { .. } => {} // handled above
        Command::Academics { subcommand } => commands::academics::run(&ctx, subcommand),
        Command::Roll {
            batch,
            branch,
            serial,
        } => commands::roll::run(&ctx, batch, &branch, serial),
        Command::Students {
            degree,
            branch,
            semester,
            batch,
            status,
            list,
        } => commands::lists::students(
            &ctx,
            &StudentArgs {
                degree,
                branch,
                semester,
                batch,
                status,
            },
            &list,
        ),
        Command::Teachers {
            department,
            designation,
            subject,
            status,
            list,
        } => commands::lists::teachers(
            &ctx,
            &TeacherArgs {
                department,
                designation,
                subject,
                status,
            },
            &list,
        ),
        Command::Events { from, to, list } => commands::lists::events(&ctx, from, to, &list),
        Command::Library {
            category,
            stock,
            list,
        } => commands::lists::library(&ctx, category.as_deref(), stock, &list),
        Command::Leave { subcommand } => commands::leave::run(&ctx, subcommand),
        Command::Admit {
            name,
            email,
            branch,
            batch,
            semester,
        } => commands::admit::run(
            &ctx,
            AdmitArgs {
                name,
                email,
                branch,
                batch,
                semester,
            },
        ),
        Command::Page {
            path,
            save,
            list,
            criteria,
        } => commands::page::run(&ctx, &path, save, list, &criteria),
        Command::Dashboard => commands::dashboard::run(&ctx),
    }
}
