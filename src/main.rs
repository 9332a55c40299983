#![forbid(unsafe_code)]

//! `workbasket` — console companion for the work-item API.
//!
//! Drives the data-access layer from the command line: basket listings,
//! full-bestand search, item detail, context views, actions, and document
//! uploads.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use workbasket::api::ApiClient;
use workbasket::models::{
    BasketScope, ContextView, DomainObjectType, Page, UploadDocumentCommand, WorkItem,
    WorkItemAction, WorkItemActionCommand, WorkItemStatus,
};
use workbasket::worklist::{compose_basket, compose_global_search, BasketFilter, GlobalSearchFilter};
use workbasket::{AppError, GlobalConfig, Result, WorkItemService};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "workbasket", about = "Work-item console", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// API base URL; overrides the configuration file.
    #[arg(long)]
    base_url: Option<String>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Print raw JSON instead of formatted output.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List a basket of work items.
    Basket {
        /// Visibility scope.
        #[arg(long, value_enum, default_value_t = BasketScope::My)]
        scope: BasketScope,
        /// Colleague name; required for the colleague scope.
        #[arg(long)]
        colleague: Option<String>,
        /// Status filter.
        #[arg(long, value_enum)]
        status: Option<WorkItemStatus>,
        /// Free-text filter.
        #[arg(long)]
        q: Option<String>,
        /// Zero-based page number.
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Page size; defaults to the configured worklist page size.
        #[arg(long)]
        size: Option<u32>,
    },

    /// Search the full bestand (always team-wide visibility).
    Search {
        /// Query text, at least two characters.
        q: String,
        /// Status filter.
        #[arg(long, value_enum)]
        status: Option<WorkItemStatus>,
        /// Zero-based page number.
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Page size; defaults to the configured worklist page size.
        #[arg(long)]
        size: Option<u32>,
    },

    /// Show one work item.
    Show {
        /// Work item id.
        id: String,
    },

    /// Show the aggregate view of a business object.
    Context {
        /// Kind of business object.
        #[arg(value_enum)]
        object_type: DomainObjectType,
        /// Business object id.
        object_id: String,
    },

    /// Apply an action to a work item.
    Act {
        /// Work item id.
        id: String,
        /// Action to apply.
        #[arg(value_enum)]
        action: WorkItemAction,
        /// Receiving clerk, for forward.
        #[arg(long)]
        assignee: Option<String>,
        /// New follow-up deadline (RFC 3339), for reschedule.
        #[arg(long)]
        follow_up: Option<String>,
        /// Free-text remark.
        #[arg(long)]
        comment: Option<String>,
    },

    /// Upload a document to a business object.
    Upload {
        /// Kind of business object.
        #[arg(value_enum)]
        object_type: DomainObjectType,
        /// Business object id.
        object_id: String,
        /// Original file name.
        #[arg(long)]
        file_name: String,
        /// MIME type.
        #[arg(long, default_value = "application/octet-stream")]
        mime_type: String,
        /// File size in bytes.
        #[arg(long, default_value_t = 0)]
        size_bytes: u64,
        /// Index keyword; repeatable, order is index order.
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        /// Uploading user.
        #[arg(long, default_value = "")]
        uploaded_by: String,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.base_url.clone())?;
    let service = WorkItemService::new(ApiClient::new(&config.api)?);
    let default_size = config.worklist.page_size;

    match args.command {
        Command::Basket {
            scope,
            colleague,
            status,
            q,
            page,
            size,
        } => {
            let filter = BasketFilter {
                q,
                status,
                colleague,
                object_type: None,
                object_id: None,
            };
            let params = compose_basket(scope, &filter, page, size.unwrap_or(default_size))?;
            let result = service.search_work_items(&params).await?;
            print_page(&result, args.json)?;
        }
        Command::Search {
            q,
            status,
            page,
            size,
        } => {
            let filter = GlobalSearchFilter { q, status };
            let params = compose_global_search(&filter, page, size.unwrap_or(default_size))?;
            let result = service.search_work_items(&params).await?;
            print_page(&result, args.json)?;
        }
        Command::Show { id } => {
            let item = service.get_work_item(&id).await?;
            print_item(&item, args.json)?;
        }
        Command::Context {
            object_type,
            object_id,
        } => {
            let view = service.get_context_view(object_type, &object_id).await?;
            print_context(&view, args.json)?;
        }
        Command::Act {
            id,
            action,
            assignee,
            follow_up,
            comment,
        } => {
            let follow_up_at = follow_up.map(|raw| parse_timestamp(&raw)).transpose()?;
            let command = WorkItemActionCommand {
                action,
                assignee,
                follow_up_at,
                comment,
            };
            let item = service.apply_work_item_action(&id, &command).await?;
            println!("applied {action} to {id}");
            print_item(&item, args.json)?;
        }
        Command::Upload {
            object_type,
            object_id,
            file_name,
            mime_type,
            size_bytes,
            keywords,
            uploaded_by,
        } => {
            let command = UploadDocumentCommand {
                file_name,
                mime_type,
                size_in_bytes: size_bytes,
                index_keywords: keywords,
                uploaded_by,
            };
            let document = service
                .upload_document(object_type, &object_id, &command)
                .await?;
            println!(
                "uploaded {} ({} bytes) as {}",
                document.file_name, document.size_in_bytes, document.id
            );
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>, base_url: Option<String>) -> Result<GlobalConfig> {
    match (path, base_url) {
        (_, Some(url)) => Ok(GlobalConfig::for_base_url(url)),
        (Some(path), None) => GlobalConfig::load(path),
        (None, None) => Err(AppError::Config(
            "provide --config or --base-url".into(),
        )),
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .map_err(|err| AppError::Validation(format!("invalid follow-up timestamp '{raw}': {err}")))
}

fn print_page(page: &Page<WorkItem>, json: bool) -> Result<()> {
    if json {
        return print_json(page);
    }
    for item in &page.items {
        println!(
            "{:<10} {:<12} P{} {}  {} ({})",
            item.id,
            item.status,
            item.priority,
            item.received_at.format("%Y-%m-%d"),
            item.title,
            item.assigned_to
        );
    }
    println!("{} of {} item(s)", page.items.len(), page.total);
    Ok(())
}

fn print_item(item: &WorkItem, json: bool) -> Result<()> {
    if json {
        return print_json(item);
    }
    println!("{}  {}", item.id, item.title);
    println!("  object:   {} {} ({})", item.object_type, item.object_id, item.object_label);
    println!("  status:   {}  priority {}", item.status, item.priority);
    println!("  assigned: {} / {}", item.assigned_to, item.team);
    println!("  received: {}", item.received_at.to_rfc3339());
    println!("  due:      {}", item.due_at.to_rfc3339());
    if !item.description.is_empty() {
        println!("  {}", item.description);
    }
    Ok(())
}

fn print_context(view: &ContextView, json: bool) -> Result<()> {
    if json {
        return print_json(view);
    }
    println!("{} {}  {}", view.object_type, view.object_id, view.title);
    if !view.subtitle.is_empty() {
        println!("{}", view.subtitle);
    }
    println!("tasks ({}):", view.tasks.len());
    for task in &view.tasks {
        println!("  {:<10} {:<12} {}", task.id, task.status, task.title);
    }
    println!("documents ({}):", view.documents.len());
    for document in &view.documents {
        println!(
            "  {:<10} {} [{}]",
            document.id,
            document.file_name,
            document.index_keywords.join(", ")
        );
    }
    println!("protocol ({}):", view.protocol_entries.len());
    for entry in &view.protocol_entries {
        println!(
            "  {} {}: {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.source,
            entry.message
        );
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Decode(err.to_string()))?;
    println!("{text}");
    Ok(())
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt().with_env_filter(env_filter);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
