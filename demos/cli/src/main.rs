use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use portfolio_core::{render_fragment_html, render_timeline_item, ElementRegistry, RenderConfig};
use portfolio_data::ProjectRegistry;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-cli",
    about = "Dựng khối timeline-item từ danh sách dự án portfolio."
)]
struct Args {
    /// File JSON danh sách dự án (mặc định: danh sách đi kèm).
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Tên thẻ custom element.
    #[arg(long, global = true)]
    tag_name: Option<String>,

    /// Nhãn của liên kết dự án.
    #[arg(long, global = true)]
    link_label: Option<String>,

    /// In dạng JSON thay vì văn bản.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Liệt kê các dự án.
    List,
    /// In nội dung shadow root của một dự án.
    Render {
        /// Vị trí dự án trong danh sách (bắt đầu từ 0).
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
    /// In toàn bộ host element với declarative shadow root.
    Page,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let registry = load_registry(args.data.as_ref())?;

    let mut config = RenderConfig::default();
    if let Some(tag_name) = args.tag_name {
        portfolio_core::validate_tag_name(&tag_name)?;
        config.tag_name = tag_name;
    }
    if let Some(label) = args.link_label {
        config.link_label = label;
    }

    match args.command {
        Command::List => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(registry.records())?);
            } else {
                for (index, record) in registry.iter().enumerate() {
                    println!(
                        "{index}: {} ({}) - {} media",
                        record.title,
                        record.date,
                        record.images.len()
                    );
                }
            }
        }
        Command::Render { index } => {
            let record = registry
                .get(index)
                .with_context(|| format!("Không có dự án ở vị trí {index}"))?;
            let outcome = render_timeline_item(&record.to_attributes()?, &config);
            for diagnostic in &outcome.diagnostics {
                log::warn!("{}: {}", record.title, diagnostic.message);
            }

            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", render_fragment_html(&outcome.view));
            }
        }
        Command::Page => {
            let mut elements = ElementRegistry::new();
            println!("{}", registry.render_page(&config, &mut elements)?);
        }
    }

    Ok(())
}

fn load_registry(path: Option<&PathBuf>) -> anyhow::Result<ProjectRegistry> {
    let Some(path) = path else {
        return Ok(ProjectRegistry::builtin()?);
    };

    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Không đọc được file {path:?}"))?;
    ProjectRegistry::from_json_str(&data)
        .with_context(|| format!("File {path:?} không phải danh sách dự án hợp lệ"))
}
