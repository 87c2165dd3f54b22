use clap::Parser;
use colored::*;
use picstash::api::{CmdMessage, ConfigAction, MessageLevel, PicstashApi};
use picstash::config::PicstashConfig;
use picstash::error::{PicstashError, Result};
use picstash::fetch::Fetcher;
use picstash::model::{Layout, SlotInfo, CANONICAL_IMAGE};
use picstash::publish::GitPublisher;
use picstash::store::SlotStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        match e {
            PicstashError::Usage(message) => eprintln!("{}", message),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

struct AppContext {
    api: PicstashApi<GitPublisher>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match &cli.command {
        Some(Commands::Add { url }) => handle_add(&ctx, url, !cli.no_publish),
        Some(Commands::Next) => handle_next(&ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Config { key, value }) => {
            handle_config(&ctx, key.clone(), value.clone())
        }
        None => match &cli.url {
            Some(url) => handle_add(&ctx, url, !cli.no_publish),
            None => Err(PicstashError::Usage(
                "Usage: picstash <image-url>".to_string(),
            )),
        },
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().map_err(PicstashError::Io)?,
    };

    let config = PicstashConfig::load(&root).unwrap_or_default();
    let layout = if cli.items {
        Layout::Items
    } else {
        config.layout
    };

    let store = SlotStore::new(root.clone(), layout);
    let fetcher = Fetcher::from_config(&config)?;
    let publisher = GitPublisher::new(root);
    let api = PicstashApi::new(store, fetcher, publisher, config.jpeg_quality);

    Ok(AppContext { api })
}

fn handle_add(ctx: &AppContext, url: &str, publish: bool) -> Result<()> {
    let result = ctx.api.add_image(url, publish)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_next(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.next_slot()?;
    if let Some(id) = result.next_id {
        println!("{}", id);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_slots()?;
    print_slots(&result.listed_slots);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("layout"), None) => ConfigAction::ShowKey("layout".to_string()),
        (Some("layout"), Some(v)) => ConfigAction::SetLayout(v.parse()?),
        (Some("quality"), None) => ConfigAction::ShowKey("quality".to_string()),
        (Some("quality"), Some(v)) => {
            let quality = v.parse().map_err(|_| {
                PicstashError::Usage(format!("Invalid quality value: {}", v))
            })?;
            ConfigAction::SetQuality(quality)
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        match key.as_deref() {
            Some("layout") => println!("layout = {}", config.layout),
            Some("quality") => println!("quality = {}", config.jpeg_quality),
            _ => {
                println!("layout = {}", config.layout);
                println!("quality = {}", config.jpeg_quality);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_slots(slots: &[SlotInfo]) {
    if slots.is_empty() {
        println!("No slots found.");
        return;
    }

    for slot in slots {
        match slot.image_size {
            Some(size) => {
                let size = format!("{} bytes", size);
                println!("{:>6}  {}  {}", slot.id, CANONICAL_IMAGE, size.dimmed());
            }
            None => println!("{:>6}  {}", slot.id, "(missing image)".yellow()),
        }
    }
}
