mod host;

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use superpowers_hooks::{BootstrapMode, HookEvent, SessionHooks};
use superpowers_skills::{Resolution, SkillLibrary};
use superpowers_tools::{SKILL_TOOLS, ToolContext};

use crate::host::StdoutHost;

#[derive(Parser)]
#[command(name = "superpowers", about = "Skill library for AI coding agents")]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short, long, global = true)]
    working_dir: Option<String>,

    /// Config directory (defaults to $OPENCODE_CONFIG_DIR or ~/.config/opencode)
    #[arg(long, global = true)]
    config_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available skills
    Find {
        /// Print descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load a skill the way the use_skill tool does
    Use {
        /// Skill name (e.g. "brainstorming", "project:deploy", "superpowers:tdd")
        skill: String,

        /// Session to attribute the load to
        #[arg(short, long, default_value = "cli")]
        session: String,
    },
    /// Show where a skill name resolves to
    Resolve {
        /// Skill name
        skill: String,
    },
    /// Print the session bootstrap payload
    Bootstrap {
        /// Print the post-compaction variant
        #[arg(long)]
        compact: bool,
    },
    /// Run a session hook and print what would be injected
    Hook {
        /// Lifecycle event
        event: HookKind,

        /// Session ID
        session_id: String,
    },
    /// Read a raw host event as JSON from stdin and run the matching hook
    Event,
    /// Show the configured skill roots
    Roots,
    /// Print the tool definitions as JSON
    Tools,
}

#[derive(Clone, Copy, ValueEnum)]
enum HookKind {
    SessionCreated,
    SessionCompacted,
}

struct App {
    library: Arc<SkillLibrary>,
    hooks: SessionHooks,
    config_dir: PathBuf,
}

impl App {
    fn load(working_dir: Option<String>, config_dir: Option<String>) -> anyhow::Result<Self> {
        let wd = match working_dir {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };
        let config_dir = config_dir.map(PathBuf::from);
        let settings = superpowers_config::load_settings(&wd, config_dir.as_deref())
            .context("failed to load configuration")?;

        let library = Arc::new(
            SkillLibrary::new(settings.roots).with_max_depth(settings.max_depth),
        );
        let hooks = SessionHooks::new(library.clone(), settings.bootstrap_skill);

        Ok(Self {
            library,
            hooks,
            config_dir: settings.config_dir,
        })
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries tool output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let app = App::load(cli.working_dir, cli.config_dir)?;

    match cli.command {
        Commands::Find { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&app.library.resolve_all())?);
            } else {
                let ctx = ToolContext::new("cli", app.library.clone());
                let output = superpowers_tools::execute("find_skills", &ctx, &serde_json::json!({}))?;
                print!("{}", output.text);
            }
        }
        Commands::Use { skill, session } => {
            let ctx = ToolContext::new(session, app.library.clone());
            let output = superpowers_tools::execute(
                "use_skill",
                &ctx,
                &serde_json::json!({ "skill_name": skill }),
            )?;
            println!("{}", output.deliver(&ctx, &StdoutHost));
        }
        Commands::Resolve { skill } => match app.library.resolve_one(&skill) {
            Resolution::Found(resolved) => {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            }
            Resolution::NotFound => anyhow::bail!("skill \"{skill}\" not found"),
        },
        Commands::Bootstrap { compact } => {
            let mode = if compact {
                BootstrapMode::Compact
            } else {
                BootstrapMode::Full
            };
            match app.hooks.bootstrap_content(mode) {
                Some(text) => println!("{text}"),
                None => anyhow::bail!("bootstrap skill is not installed"),
            }
        }
        Commands::Hook { event, session_id } => {
            let event = match event {
                HookKind::SessionCreated => HookEvent::SessionCreated { session_id },
                HookKind::SessionCompacted => HookEvent::SessionCompacted { session_id },
            };
            run_hook(&app, &event);
        }
        Commands::Event => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            let value: serde_json::Value =
                serde_json::from_str(&raw).context("stdin is not valid JSON")?;
            match HookEvent::from_host_event(&value) {
                Some(event) => run_hook(&app, &event),
                None => tracing::debug!("Ignoring host event"),
            }
        }
        Commands::Roots => {
            let roots = app.library.roots();
            println!("config dir:  {}", app.config_dir.display());
            println!("project:     {}", roots.project.display());
            println!("personal:    {}", roots.personal.display());
            println!("superpowers: {}", roots.superpowers.display());
            println!("max depth:   {}", app.library.max_depth());
        }
        Commands::Tools => {
            println!("{}", serde_json::to_string_pretty(&*SKILL_TOOLS)?);
        }
    }

    Ok(())
}

fn run_hook(app: &App, event: &HookEvent) {
    if let Some(injection) = app.hooks.handle(event) {
        superpowers_hooks::deliver(&injection, &StdoutHost);
    }
}
