use clap::Parser;
use college_catalog::core::{export, ConfigProvider};
use college_catalog::utils::{logger, validation::Validate};
use college_catalog::{CatalogEngine, CatalogPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-catalog")]
#[command(about = "Catalog search driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "catalog.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override the query from the config file
    #[arg(short, long)]
    query: Option<String>,

    /// Show the resolved configuration without loading fixtures
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based catalog search");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(query) = &args.query {
        config.search.query = Some(query.clone());
        tracing::info!("🔧 Query overridden to: {}", query);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - fixtures will not be loaded");
        return Ok(());
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CatalogPipeline::new(storage, config);
    let engine = CatalogEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            print!("{}", export::render_text(&report.result.results));
            if let Some(path) = report.output_path {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Catalog run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    let query = config.search_query();

    println!("📋 Configuration Summary:");
    println!("  Courses fixture: {}", config.courses_path());
    println!("  Professors fixture: {}", config.professors_path());
    println!("  Query: \"{}\"", query.text);
    println!("  Department: {}", query.department);
    println!("  Scope: {}", query.scope.as_str());
    match config.quick_limit() {
        Some(limit) => println!("  Mode: quick (limit {})", limit),
        None => println!("  Mode: {}", query.mode.as_str()),
    }

    let formats: Vec<&str> = config.output_formats().iter().map(|f| f.as_str()).collect();
    if formats.is_empty() {
        println!("  Output: terminal only");
    } else {
        println!("  Output: {} ({})", config.output_path(), formats.join(", "));
    }
    if let Some(zip_name) = config.compression_filename() {
        println!("  Compression: {} (ZIP)", zip_name);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
