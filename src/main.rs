use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stayloft::config::{generate_default_config, Config};
use stayloft::editor::PropertyDraft;
use stayloft::filters::{format_rupees, summarize, FilterState};
use stayloft::images::{FileImageSource, ImageSource};
use stayloft::listings::{search, ListingSource, MockCatalog};
use stayloft::models::{Amenity, Furnishing, Gender, PropertyType, UserRole};
use stayloft::session::{LoginForm, SessionContext};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stayloft")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find flats, PGs and hostels, and manage your listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ~/.config/stayloft/config.toml or ./stayloft.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the listing catalog
    Search {
        /// Property kind (default from config)
        #[arg(short, long, value_enum)]
        kind: Option<PropertyType>,
        /// City, locality or landmark
        #[arg(short, long, default_value = "")]
        location: String,
        #[arg(long, default_value_t = 0)]
        min_price: i64,
        #[arg(long, default_value_t = stayloft::filters::MAX_PRICE as i64)]
        max_price: i64,
        /// Required amenities (repeatable); only those shown in the filter panel
        /// are accepted
        #[arg(short, long, value_enum)]
        amenity: Vec<Amenity>,
        /// Minimum bedrooms (flats only)
        #[arg(long)]
        bedrooms: Option<u8>,
        /// Minimum bathrooms (flats only)
        #[arg(long)]
        bathrooms: Option<u8>,
        /// Furnishing (flats only)
        #[arg(long, value_enum)]
        furnishing: Option<Furnishing>,
        /// Gender (PGs and hostels only)
        #[arg(long, value_enum)]
        gender: Option<Gender>,
        /// Where to save matching listings as JSON (default from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load images into the property editor and apply edits
    Images {
        /// Image files to upload as one batch
        files: Vec<PathBuf>,
        /// Start from an existing listing's images
        #[arg(short, long)]
        property: Option<String>,
        /// Indexes to remove, applied in order
        #[arg(short, long)]
        remove: Vec<usize>,
        /// Index to mark as thumbnail, applied after removals
        #[arg(short, long)]
        thumbnail: Option<usize>,
    },

    /// Log in as a tenant or property owner
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long, value_enum, default_value = "tenant")]
        role: UserRole,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::load(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::load_default(),
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Search {
            kind,
            location,
            min_price,
            max_price,
            amenity,
            bedrooms,
            bathrooms,
            furnishing,
            gender,
            output,
        } => {
            let kind = kind.unwrap_or(config.search.default_kind);

            let mut filters = FilterState::new();
            filters.set_location(location);
            filters.set_price_range(min_price, max_price);
            for a in amenity {
                if !a.is_filterable() {
                    anyhow::bail!("{} is not offered as a search filter", a.label());
                }
                filters.toggle_amenity(a, true);
            }
            filters.set_bedrooms(bedrooms);
            filters.set_bathrooms(bathrooms);
            filters.set_furnishing(furnishing);
            filters.set_gender(gender);

            let catalog = MockCatalog::new();
            info!("🏠 StayLoft - searching {} listings from {}", kind, catalog.source_name());

            let tags = summarize(&filters, kind);
            if !tags.is_empty() {
                let labels: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
                println!("Active Filters: {}", labels.join(" | "));
                println!();
            }

            let listings = catalog.fetch_all().await?;
            let query = filters.compose(kind);
            let results = search(&listings, kind, &query);

            info!("✅ Found {} matching properties", results.len());

            for (i, property) in results.iter().enumerate() {
                println!("{}. {} ({}/month)", i + 1, property.title, format_rupees(property.price));
                println!("   {}, {}", property.location.area, property.location.city);
                if let Some(bedrooms) = property.bedrooms {
                    println!("   {} bed, {} bath", bedrooms, property.bathrooms.unwrap_or(0));
                }
                if let Some(gender) = property.gender {
                    println!("   For: {}", gender);
                }
                let amenities: Vec<&str> = property.amenities.iter().map(|a| a.label()).collect();
                println!("   Amenities: {}", amenities.join(", "));
                if let Some(rating) = property.rating {
                    println!("   Rating: {:.1} ({} reviews)", rating, property.num_reviews.unwrap_or(0));
                }
                println!("   ID: {}", property.id);
                println!();
            }

            let path = output.unwrap_or(config.search.results_file);
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "kind": kind,
                "filters": query,
                "results": results,
            }))?;
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("💾 Saved search results to {}", path.display());
        }

        Commands::Images {
            files,
            property,
            remove,
            thumbnail,
        } => {
            let mut draft = match property {
                Some(id) => {
                    let listing = MockCatalog::new()
                        .find(&id)
                        .await?
                        .with_context(|| format!("Property {} not found", id))?;
                    PropertyDraft::from_property(&listing)
                }
                None => PropertyDraft::new(),
            };

            let source = FileImageSource::new();
            let batch = source.load_batch(&files).await?;
            draft.images_mut().upload(batch)?;

            for index in remove {
                draft.images_mut().remove(index)?;
            }
            if let Some(index) = thumbnail {
                draft.images_mut().set_thumbnail(index)?;
            }

            let images = draft.images();
            println!("{} image(s), {} slot(s) left", images.len(), images.remaining_capacity());
            for (i, entry) in images.list().iter().enumerate() {
                let marker = if entry.is_thumbnail() { "★" } else { " " };
                let url: String = entry.url().chars().take(48).collect();
                println!("{} {}. {}…", marker, i, url);
            }
        }

        Commands::Login {
            email,
            password,
            role,
            name,
        } => {
            let mut session = SessionContext::init(&config.session.file).await;
            let active = session
                .login(LoginForm {
                    email,
                    password,
                    role,
                    name,
                })
                .await?;
            println!("Welcome, {}! Continue at {}", active.user_name, active.landing_route());
        }

        Commands::Logout => {
            let mut session = SessionContext::init(&config.session.file).await;
            session.logout().await?;
            println!("Logged out");
        }

        Commands::Whoami => {
            let session = SessionContext::init(&config.session.file).await;
            match session.current() {
                Some(active) => println!(
                    "{} <{}> as {:?} since {}",
                    active.user_name,
                    active.email,
                    active.role,
                    active.logged_in_at.format("%Y-%m-%d %H:%M")
                ),
                None => println!("Not logged in"),
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    tokio::fs::write(&path, content).await?;
                    info!("💾 Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
