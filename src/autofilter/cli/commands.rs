use super::render::{
    print_config, print_definition, print_fields, print_filter_names, print_messages, print_status,
};
use super::setup::{Cli, Commands};
use autofilter::api::{AutofilterPaths, ConfigAction, FilterManager};
use autofilter::config::AutofilterConfig;
use autofilter::error::Result;
use autofilter::model::FieldSelection;
use autofilter::project::fs::FileProject;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

const CONFIG_DIR_ENV: &str = "AUTOFILTER_CONFIG_DIR";

struct AppContext {
    api: FilterManager<FileProject>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Save {
            name,
            fields,
            condition,
        }) => handle_save(&mut ctx, name, fields, condition),
        Some(Commands::Show { name }) => handle_show(&ctx, name),
        Some(Commands::Delete { names }) => handle_delete(&mut ctx, names),
        Some(Commands::Apply { names }) => handle_apply(&mut ctx, names),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Fields { query }) => handle_fields(&ctx, query),
        Some(Commands::Status) => handle_status(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "autofilter", "autofilter").map(|d| d.config_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir();
    let config = match &config_dir {
        Some(dir) => AutofilterConfig::load(dir)?,
        None => AutofilterConfig::default(),
    };

    let project_path = cli
        .project
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.project_file));
    log::debug!("using project {}", project_path.display());

    let api = FilterManager::new(FileProject::new(project_path), config)
        .with_paths(AutofilterPaths { config_dir });

    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let names = ctx.api.list_definition_names()?;
    print_filter_names(&names);
    Ok(())
}

fn handle_save(
    ctx: &mut AppContext,
    name: String,
    fields: Vec<String>,
    condition: String,
) -> Result<()> {
    let selection: FieldSelection = fields.into_iter().collect();
    let result = ctx
        .api
        .save_filter(&name, selection.into_fields(), &condition)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: String) -> Result<()> {
    let definition = ctx.api.load_for_edit(&name)?;
    print_definition(&definition);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, names: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_filters(&names)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_apply(ctx: &mut AppContext, names: Vec<String>) -> Result<()> {
    let result = ctx.api.apply_filters(&names)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_filters()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fields(ctx: &AppContext, query: Option<String>) -> Result<()> {
    let fields = match query {
        Some(q) => ctx.api.search(&q)?,
        None => ctx.api.all_filterable_fields()?,
    };
    print_fields(&fields);
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let statuses = ctx.api.status()?;
    print_status(&statuses);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
