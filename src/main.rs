use clap::{Parser, Subcommand};
use notebook_portfolio::preview::PreviewState;
use notebook_portfolio::router::{HashRouter, MemoryNavigator};
use notebook_portfolio::settings::{JsonFileStore, Settings, SettingsError, SettingsSession};
use notebook_portfolio::{catalog, config, generate, output, render};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "notebook-portfolio")]
#[command(about = "Single-page notebook-style portfolio generator")]
#[command(long_about = "\
Single-page notebook-style portfolio generator

The site has four sections (About, Resume, Projects, Blogs) selected by the
location hash. Resume entries, past projects and publications are edited as
plain lines in the settings store:

  2023–2024 — Technical Consultant, Indiana University | What I did there
  Slack Bot | Django-backed Slack agent | https://github.com/...
  Parallel SVM Model for Forest Fire Prediction | https://doi.org/...

Project layout:

  ./
  ├── portfolio.toml               # Site config (optional)
  ├── .portfolio/settings.json     # Editable settings (created on first save)
  └── assets/                      # Headshot, CSV previews → copied to output root

Run 'notebook-portfolio gen-config' to generate a documented portfolio.toml.")]
#[command(version)]
struct Cli {
    /// Project root containing portfolio.toml and assets/
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file to use instead of <root>/portfolio.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site into an output directory
    Build {
        /// Output directory (defaults to <root>/dist)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the HTML document for one route, e.g. `#/resume` or `/blogs/slug`
    Render {
        route: String,
        /// Print only the page's main element, without header, footer or styles
        #[arg(long)]
        fragment: bool,
    },
    /// List every routable path and the page it shows
    Routes,
    /// Parse all content and report an inventory without building
    Check,
    /// Inspect or edit the settings store
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Print a stock portfolio.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print every field
    Show,
    /// Print one field, e.g. `resumeLines`
    Get { field: String },
    /// Set one field and save. Use `-` as the value to read it from stdin
    Set { field: String, value: String },
    /// Restore the default content and save
    Reset,
}

/// Config, paths and settings for one project root.
struct Project {
    root: PathBuf,
    config: config::PortfolioConfig,
    store_path: PathBuf,
    assets_dir: PathBuf,
    session: SettingsSession<JsonFileStore>,
}

impl Project {
    fn open(root: &Path, config_file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let config = match config_file {
            Some(path) => config::load_config_file(path)?,
            None => config::load_config(root)?,
        };
        let store_path = root.join(&config.store_path);
        let assets_dir = root.join(&config.assets_dir);
        let session = SettingsSession::open(JsonFileStore::new(&store_path));
        Ok(Self {
            root: root.to_path_buf(),
            config,
            store_path,
            assets_dir,
            session,
        })
    }

    fn previews(&self) -> BTreeMap<String, PreviewState> {
        generate::load_previews(
            catalog::projects(),
            &self.assets_dir,
            self.config.preview.max_rows,
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }
    let mut project = Project::open(&cli.root, cli.config.as_deref())?;

    match cli.command {
        Command::Build { output: out } => {
            let output_dir = out.unwrap_or_else(|| project.root.join("dist"));
            println!("==> Generating site \u{2192} {}", output_dir.display());
            let report = generate::generate(
                project.session.settings(),
                &project.config,
                &project.root,
                &output_dir,
            )?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", output_dir.display());
        }
        Command::Render { route, fragment } => {
            let router = HashRouter::new(MemoryNavigator::new(&route));
            let page = router.page();
            let previews = project.previews();
            let ctx = render::RenderContext {
                settings: project.session.settings(),
                config: &project.config,
                projects: catalog::projects(),
                blogs: catalog::blogs(),
                previews: &previews,
                year: generate::current_year(),
            };
            let markup = if fragment {
                render::render_page(&page, &ctx)
            } else {
                render::render_document(&page, &ctx, &generate::site_css(&project.config))
            };
            println!("{}", markup.into_string());
        }
        Command::Routes => {
            let routes = generate::known_routes(catalog::projects(), catalog::blogs());
            output::print_routes(&routes, &generate::fallback_routes());
        }
        Command::Check => {
            println!("==> Checking {}", project.root.display());
            output::print_check_output(
                project.session.settings(),
                &project.store_path,
                catalog::projects(),
                catalog::blogs(),
                &project.previews(),
            );
            println!("==> Content is valid");
        }
        Command::Settings(command) => run_settings(command, &mut project)?,
        Command::GenConfig => {}
    }

    Ok(())
}

fn run_settings(
    command: SettingsCommand,
    project: &mut Project,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = &mut project.session;
    let store_path = project.store_path.as_path();
    match command {
        SettingsCommand::Show => output::print_settings(session.settings()),
        SettingsCommand::Get { field } => match session.settings().field(&field) {
            Some(value) => println!("{value}"),
            None => return Err(SettingsError::UnknownField(field).into()),
        },
        SettingsCommand::Set { field, value } => {
            let value = if value == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf.trim_end_matches(['\n', '\r']).to_string()
            } else {
                value
            };
            let mut next = session.settings().clone();
            next.set_field(&field, &value)?;
            report_save(session.save(next), store_path);
        }
        SettingsCommand::Reset => {
            report_save(session.save(Settings::default()), store_path);
        }
    }
    Ok(())
}

/// A failed save is not fatal: the edit still applied to this run.
fn report_save(saved: bool, store_path: &Path) {
    if saved {
        println!("Saved {}", store_path.display());
    } else {
        eprintln!(
            "Warning: could not write {}; the change was not persisted",
            store_path.display()
        );
    }
}
