use anyhow::Result;
use college_catalog::core::Pipeline;
use college_catalog::{CatalogEngine, CatalogPipeline, CliConfig, LocalStorage};
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn cli_config(output_path: &str) -> CliConfig {
    CliConfig {
        courses_path: fixture("courses-data.json"),
        professors_path: fixture("professors-data.json"),
        query: String::new(),
        department: "all".to_string(),
        scope: "all".to_string(),
        list_all: false,
        quick: false,
        limit: 5,
        department_id: None,
        output_path: output_path.to_string(),
        formats: vec![],
        compress: false,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_search_with_exports() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(&output_path);
    config.query = "أحمد".to_string();
    config.formats = vec!["json".to_string(), "csv".to_string(), "tsv".to_string()];

    let pipeline = CatalogPipeline::new(LocalStorage::new(".".to_string()), config);
    let report = CatalogEngine::new(pipeline).run().await?;

    let ids: Vec<u64> = report.result.results.professors.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 5]);
    assert!(report.result.results.courses.is_empty());
    assert_eq!(report.output_path.as_deref(), Some(output_path.as_str()));

    for name in [
        "results.json",
        "professors.csv",
        "courses.csv",
        "professors.tsv",
        "courses.tsv",
    ] {
        assert!(temp_dir.path().join(name).exists(), "missing {}", name);
    }

    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("results.json"))?)?;
    assert_eq!(json["query"]["text"], "أحمد");
    assert_eq!(json["query"]["mode"], "search");
    assert_eq!(json["professors"].as_array().unwrap().len(), 2);

    let csv = std::fs::read_to_string(temp_dir.path().join("professors.csv"))?;
    assert_eq!(csv.lines().count(), 3);

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_compressed_list_all() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(&output_path);
    config.list_all = true;
    config.scope = "courses".to_string();
    config.formats = vec!["csv".to_string()];
    config.compress = true;

    let pipeline = CatalogPipeline::new(LocalStorage::new(".".to_string()), config);
    let report = CatalogEngine::new(pipeline).run().await?;

    assert!(report.result.results.professors.is_empty());
    assert_eq!(report.result.results.courses.len(), 10);

    let zip_path = temp_dir.path().join("catalog_output.zip");
    assert_eq!(report.output_path, Some(zip_path.to_str().unwrap().to_string()));

    let archive = zip::ZipArchive::new(std::io::Cursor::new(std::fs::read(&zip_path)?))?;
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort();
    assert_eq!(names, vec!["courses.csv", "professors.csv"]);

    Ok(())
}

#[tokio::test]
async fn test_empty_query_without_list_all_finds_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = cli_config(temp_dir.path().to_str().unwrap());

    let pipeline = CatalogPipeline::new(LocalStorage::new(".".to_string()), config);
    let report = CatalogEngine::new(pipeline).run().await?;

    assert!(report.result.results.is_empty());
    assert_eq!(report.output_path, None);
    // 沒有指定格式就不寫檔
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_department_directory_from_fixtures() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = cli_config(temp_dir.path().to_str().unwrap());

    let pipeline = CatalogPipeline::new(LocalStorage::new(".".to_string()), config);
    let catalog = pipeline.extract().await?;

    let technology: Vec<u64> = catalog
        .department_professors("technology")
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(technology, vec![1, 4]);
    assert_eq!(
        catalog.department("technology").and_then(|d| d.head.as_ref()).map(|h| h.name.as_str()),
        Some("أ.د. أحمد عبد الحميد")
    );
    assert_eq!(catalog.courses_in("level4", "semester2")[0].id, "graduation-project-extended");

    Ok(())
}

#[tokio::test]
async fn test_missing_fixture_reports_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = cli_config(temp_dir.path().to_str().unwrap());
    config.courses_path = temp_dir.path().join("nope.json").to_str().unwrap().to_string();

    let pipeline = CatalogPipeline::new(LocalStorage::new(".".to_string()), config);
    let err = CatalogEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, college_catalog::CatalogError::IoError(_)));
    assert_eq!(err.severity().exit_code(), 3);
}
