use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use catalog_common::browse::{BrowsePage, BrowseState};
use catalog_common::filter::category_counts;
use catalog_common::pagination::{PageMarker, ResetPolicy};
use catalog_common::sort::SortKey;
use catalog_common::types::{Blueprint, BlueprintList, CatalogItem};
use catalog_common::product::{ProductCreationRequest, ProductDraft};
use catalog_common::variants::{group_by_color, sizes_for_color, variant_ids_for, Variant};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Parser, Debug)]
#[command(name = "catalog-tool")]
#[command(about = "Browse a print catalog dump from the command line")]
struct Cli {
    /// Config file (default: ~/.config/printlab/catalog-tool.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter, sort and print one page of blueprints
    Browse {
        /// Blueprint dump: `{"data": [...]}` or a bare array
        #[arg(long, short)]
        catalog: PathBuf,
        /// Case-insensitive text matched against name, brand, model and description
        #[arg(long, short, default_value = "")]
        query: String,
        /// Exact brand to keep
        #[arg(long, short, default_value = "")]
        brand: String,
        /// name, brand or recent
        #[arg(long, short)]
        sort: Option<SortKey>,
        #[arg(long, short, default_value_t = 1)]
        page: i64,
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// List brands with their blueprint counts
    Brands {
        #[arg(long, short)]
        catalog: PathBuf,
    },
    /// Show the available sizes per color of a variant dump
    Sizes {
        /// JSON array of variants
        #[arg(long, short)]
        variants: PathBuf,
        /// Only this color
        #[arg(long)]
        color: Option<String>,
    },
    /// Validate a product draft and print the creation request as JSON
    Draft(DraftArgs),
}

#[derive(Args, Debug)]
struct DraftArgs {
    /// JSON array of the provider's variants for the blueprint
    #[arg(long, short)]
    variants: PathBuf,
    #[arg(long, short)]
    title: String,
    #[arg(long, short, default_value = "")]
    description: String,
    /// Saved image to print
    #[arg(long, short)]
    image_url: String,
    #[arg(long, short)]
    blueprint: Option<u64>,
    /// Print provider id
    #[arg(long, short)]
    provider: Option<u64>,
    #[arg(long, short)]
    color: String,
    /// Repeat for each size, e.g. `--size S --size M`
    #[arg(long = "size", short)]
    sizes: Vec<String>,
}

/// Defaults read from the TOML config file. Flags win over these.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct ToolConfig {
    page_size: Option<usize>,
    sort: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDump {
    Envelope(BlueprintList),
    Bare(Vec<Blueprint>),
}

fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("printlab");
    p.push("catalog-tool.toml");
    Some(p)
}

fn load_config(path: Option<&Path>) -> Result<ToolConfig, Box<dyn Error>> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ToolConfig::default()),
        },
    };
    tracing::debug!("Reading config from {}", path.display());
    Ok(toml::from_str(&fs::read_to_string(&path)?)?)
}

/// Page size and sort key after applying flags over the config file.
fn resolve_settings(
    page_size: Option<usize>,
    sort: Option<SortKey>,
    config: &ToolConfig,
) -> Result<(usize, SortKey), Box<dyn Error>> {
    let size = page_size.or(config.page_size).unwrap_or(DEFAULT_PAGE_SIZE);
    let key = match (sort, config.sort.as_deref()) {
        (Some(key), _) => key,
        (None, Some(raw)) => raw.parse()?,
        (None, None) => SortKey::default(),
    };
    Ok((size, key))
}

fn read_catalog(path: &Path) -> Result<Vec<CatalogItem>, Box<dyn Error>> {
    let dump: CatalogDump = serde_json::from_str(&fs::read_to_string(path)?)?;
    let blueprints = match dump {
        CatalogDump::Envelope(list) => list.data,
        CatalogDump::Bare(list) => list,
    };
    tracing::info!("Loaded {} blueprints from {}", blueprints.len(), path.display());
    Ok(blueprints.iter().map(CatalogItem::from).collect())
}

fn browse_page(
    items: &[CatalogItem],
    query: &str,
    brand: &str,
    sort: SortKey,
    page: i64,
    page_size: usize,
) -> Result<BrowsePage, Box<dyn Error>> {
    let mut state = BrowseState::with_policy(page_size, ResetPolicy::ResetOnChange)?;
    state.set_query(query);
    state.set_category(brand);
    state.set_sort_key(sort);
    // First pass fixes the list identity, second pass lands on the page.
    state.recompute(items);
    state.paginator.go_to_page(page);
    Ok(state.recompute(items))
}

fn render_window(window: &[PageMarker], current: usize) -> String {
    window
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(n) if *n == current => format!("[{}]", n),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_page(page: &BrowsePage) {
    for item in &page.items {
        println!("{:>6}  {:<40}  {:<16}  {}", item.id, item.name, item.brand, item.model);
    }
    println!(
        "page {}/{} ({} matches)",
        page.info.current_page,
        page.info.total_pages.max(1),
        page.matched
    );
    if page.info.total_pages > 1 {
        println!("{}", render_window(&page.window, page.info.current_page));
    }
}

fn print_sizes(variants: &[Variant], color: Option<&str>) {
    for (group_color, _) in group_by_color(variants) {
        if color.is_some_and(|c| c != group_color) {
            continue;
        }
        let sizes = sizes_for_color(variants, &group_color);
        if sizes.is_empty() {
            println!("{}: (none available)", group_color);
        } else {
            println!("{}: {}", group_color, sizes.join(", "));
        }
    }
}

/// Walk the wizard with the given choices; the first missing one is reported.
fn build_request(
    variants: &[Variant],
    args: &DraftArgs,
) -> Result<ProductCreationRequest, Box<dyn Error>> {
    let mut draft = ProductDraft::new(&args.title, &args.description, &args.image_url);
    if let Some(blueprint) = args.blueprint {
        draft.select_blueprint(blueprint);
    }
    if let Some(provider) = args.provider {
        draft.select_provider(provider);
    }
    draft.select_color(&args.color);

    let ids = variant_ids_for(variants, &args.color, &args.sizes);
    if ids.is_empty() {
        tracing::warn!("No available variant for {} in {:?}", args.color, args.sizes);
    }
    for id in ids {
        draft.toggle_variant(id);
    }
    tracing::debug!("Draft reached {:?}", draft.step());
    Ok(draft.to_request()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Browse {
            catalog,
            query,
            brand,
            sort,
            page,
            page_size,
        } => {
            let (size, key) = resolve_settings(page_size, sort, &config)?;
            let items = read_catalog(&catalog)?;
            let result = browse_page(&items, &query, &brand, key, page, size)?;
            print_page(&result);
        }
        Commands::Brands { catalog } => {
            let items = read_catalog(&catalog)?;
            for count in category_counts(&items) {
                println!("{:<24} {}", count.category, count.count);
            }
        }
        Commands::Sizes { variants, color } => {
            let variants: Vec<Variant> = serde_json::from_str(&fs::read_to_string(&variants)?)?;
            print_sizes(&variants, color.as_deref());
        }
        Commands::Draft(args) => {
            let variants: Vec<Variant> =
                serde_json::from_str(&fs::read_to_string(&args.variants)?)?;
            let request = build_request(&variants, &args)?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
    }
    Ok(())
}
