use clap::Parser;
use college_catalog::core::{export, Pipeline};
use college_catalog::utils::{logger, validation::Validate};
use college_catalog::{Catalog, CatalogEngine, CatalogError, CatalogPipeline, CliConfig, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting college-catalog CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let department_id = config.department_id.clone();
    let storage = LocalStorage::new(".".to_string());
    let pipeline = CatalogPipeline::new(storage, config);

    // 單一系所頁面
    if let Some(id) = department_id {
        match pipeline.extract().await {
            Ok(catalog) => print_department(&catalog, &id),
            Err(e) => fail(e),
        }
        return Ok(());
    }

    let engine = CatalogEngine::new(pipeline);
    match engine.run().await {
        Ok(report) => {
            print!("{}", export::render_text(&report.result.results));
            if let Some(path) = report.output_path {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn print_department(catalog: &Catalog, id: &str) {
    let Some(department) = catalog.department(id) else {
        tracing::warn!("Department '{}' not found", id);
        println!("لم يتم العثور على القسم");
        return;
    };

    println!("{}", department.name);
    if !department.description.is_empty() {
        println!("{}", department.description);
    }
    if let Some(head) = &department.head {
        println!("رئيس القسم: {} ({})", head.name, head.title);
    }

    let professors = catalog.department_professors(id);
    println!("أعضاء هيئة التدريس ({})", professors.len());
    for professor in professors {
        println!("  - {} | {}", professor.name, professor.title);
    }
}

fn fail(e: CatalogError) -> ! {
    tracing::error!(
        "❌ Catalog run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code().max(1));
}
