#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use issuelink_core::output::json_format::safe_output_escape;
use issuelink_core::output::OutputWriter;
use issuelink_core::{resolve_metadata, Args, Commit, ErrorKind, Metadata};
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

#[derive(Parser)]
#[command(name = "issuelink", version, about = "Issue tracker metadata extraction for CI pipelines")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Resolve issue keys, instance name, and environment from build context
    Resolve(ResolveArgs),
}

#[derive(clap::Args)]
struct ResolveArgs {
    /// Commit message to scan for issue keys
    #[arg(long, env = "DRONE_COMMIT_MESSAGE")]
    commit_message: Option<String>,

    /// Issue key prefix (TEST matches TEST-123)
    #[arg(long, env = "PLUGIN_PROJECT")]
    project: Option<String>,

    /// Tracker URL or hostname the instance name is derived from
    #[arg(long, env = "PLUGIN_INSTANCE")]
    instance: Option<String>,

    /// Deployment environment id
    #[arg(long, env = "PLUGIN_ENVIRONMENT_ID")]
    environment_id: Option<String>,

    /// Deployment environment type
    #[arg(long, env = "PLUGIN_ENVIRONMENT_TYPE")]
    environment_type: Option<String>,

    /// Directory to additionally write issues.txt / issues.json into
    #[arg(long, env = "PLUGIN_OUTPUT_DIR")]
    output_dir: Option<String>,

    /// Output format: env, json, text (default: auto-detect)
    #[arg(long, env = "PLUGIN_OUTPUT_FORMAT")]
    output_format: Option<String>,
}

/// Output format for the CLI
enum OutputFormat {
    /// CI runner: append KEY=value lines to $DRONE_OUTPUT + summary to stdout
    Env,
    /// Full JSON to stdout
    Json,
    /// Human-readable text to stdout
    Text,
}

impl OutputFormat {
    fn detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("env") => OutputFormat::Env,
            Some("json") => OutputFormat::Json,
            Some("text") => OutputFormat::Text,
            _ => {
                if std::env::var("DRONE").is_ok() {
                    OutputFormat::Env
                } else {
                    OutputFormat::Text
                }
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Resolve(args) => run_resolve(args),
    };
    std::process::exit(code);
}

/// Filter empty string from Option (env vars may produce "" for unset values)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn run_resolve(args: ResolveArgs) -> i32 {
    let output_format = OutputFormat::detect(args.output_format.as_deref());

    // Clean env var inputs (CI runners set empty strings for unset settings)
    let commit_message = clean_opt(&args.commit_message).unwrap_or("");
    let project = clean_opt(&args.project).unwrap_or("");
    let instance = clean_opt(&args.instance).unwrap_or("");
    let environment_id = clean_opt(&args.environment_id).unwrap_or("");
    let environment_type = clean_opt(&args.environment_type).unwrap_or("");

    // Build Args — borrowing from the CLI inputs (zero-copy)
    let input = Args {
        commit: Commit {
            message: Cow::Borrowed(commit_message),
        },
        project: Cow::Borrowed(project),
        instance: Cow::Borrowed(instance),
        environment_id: Cow::Borrowed(environment_id),
        environment_type: Cow::Borrowed(environment_type),
    };

    let metadata = match resolve_metadata(&input) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if let Some(dir) = clean_opt(&args.output_dir) {
        let issues: Vec<&str> = metadata.issues.iter().map(String::as_str).collect();
        let written = OutputWriter::write_text(Path::new(dir), "issues", &issues, "\n")
            .and_then(|()| OutputWriter::write_json(Path::new(dir), "issues", &issues));
        if let Err(e) = written {
            eprintln!("Error: {e}");
            return match e.kind() {
                ErrorKind::Config => 2,
                _ => 1,
            };
        }
    }

    match output_format {
        OutputFormat::Env => write_env_output(&metadata),
        OutputFormat::Json => write_json_output(&metadata),
        OutputFormat::Text => write_text_output(&metadata),
    }

    0
}

/// Write outputs as KEY=value lines to the file named by $DRONE_OUTPUT
fn write_env_output(metadata: &Metadata) {
    let output_file = match std::env::var("DRONE_OUTPUT") {
        Ok(f) => f,
        Err(_) => {
            eprintln!("Warning: DRONE_OUTPUT not set, falling back to stdout");
            write_json_output(metadata);
            return;
        }
    };

    let mut f = match std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&output_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: cannot open DRONE_OUTPUT ({output_file}): {e}");
            return;
        }
    };

    let issues = metadata.issues.join(",");
    let _ = writeln!(f, "issues={}", safe_output_escape(&issues));
    let _ = writeln!(f, "issue_count={}", metadata.issues.len());
    let _ = writeln!(f, "instance={}", safe_output_escape(&metadata.instance));
    let _ = writeln!(
        f,
        "environment_id={}",
        safe_output_escape(&metadata.environment_id)
    );
    let _ = writeln!(
        f,
        "environment_type={}",
        safe_output_escape(&metadata.environment_type)
    );

    // Summary to stdout (visible in the step log)
    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    let _ = writeln!(w, "Issuelink Results");
    let _ = writeln!(w, "=================");
    let _ = writeln!(w, "Issues: {}", metadata.issues.len());
    let _ = writeln!(w, "Instance: {}", metadata.instance);
    let _ = writeln!(
        w,
        "Environment: {} ({})",
        metadata.environment_id, metadata.environment_type
    );
}

/// Write the full metadata record as JSON to stdout
fn write_json_output(metadata: &Metadata) {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let _ = serde_json::to_writer(&mut lock, metadata);
    let _ = writeln!(lock);
}

/// Write human-readable text to stdout
fn write_text_output(metadata: &Metadata) {
    let stdout = std::io::stdout();
    let mut w = stdout.lock();

    let _ = writeln!(w, "Issuelink Results");
    let _ = writeln!(w, "=================");
    let _ = writeln!(w);

    if metadata.issues.is_empty() {
        let _ = writeln!(w, "Issues: none");
    } else {
        let _ = writeln!(w, "Issues ({}):", metadata.issues.len());
        for key in &metadata.issues {
            let _ = writeln!(w, "  - {key}");
        }
    }

    let _ = writeln!(w, "Instance: {}", metadata.instance);
    let _ = writeln!(w, "Environment id: {}", metadata.environment_id);
    let _ = writeln!(w, "Environment type: {}", metadata.environment_type);
}
