use crate::domain::model::{
    FlattenedCourse, OutputFormat, Professor, SearchQuery, SearchResults, TransformResult,
};
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const NO_RESULTS_MESSAGE: &str = "لا توجد نتائج مطابقة";

const PROFESSOR_HEADERS: [&str; 7] = ["id", "name", "title", "department", "email", "phone", "profile"];
const COURSE_HEADERS: [&str; 6] = ["id", "title", "description", "level", "semester", "image"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub data: Vec<u8>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    query: &'a SearchQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    quick_limit: Option<usize>,
    professors: &'a [Professor],
    courses: &'a [FlattenedCourse],
}

#[derive(Serialize)]
struct ProfessorRow<'a> {
    id: u64,
    name: &'a str,
    title: &'a str,
    department: &'a str,
    email: &'a str,
    phone: &'a str,
    profile: &'a str,
}

impl<'a> From<&'a Professor> for ProfessorRow<'a> {
    fn from(p: &'a Professor) -> Self {
        Self {
            id: p.id,
            name: &p.name,
            title: &p.title,
            department: p.department_label(),
            email: &p.email,
            phone: &p.phone,
            profile: p.profile.as_deref().unwrap_or(""),
        }
    }
}

/// 產生所有指定格式的輸出
///
/// JSON 為單一報告，CSV 與 TSV 則教師與課程各一個檔案
pub fn render(result: &TransformResult, formats: &[OutputFormat]) -> Result<Vec<OutputFile>> {
    let mut files = Vec::new();

    for format in formats {
        match format {
            OutputFormat::Json => files.push(OutputFile {
                name: "results.json".to_string(),
                data: render_json(result)?,
            }),
            OutputFormat::Csv | OutputFormat::Tsv => {
                let (delimiter, extension) = match format {
                    OutputFormat::Tsv => (b'\t', "tsv"),
                    _ => (b',', "csv"),
                };
                files.push(OutputFile {
                    name: format!("professors.{}", extension),
                    data: render_delimited(
                        &PROFESSOR_HEADERS,
                        result.results.professors.iter().map(ProfessorRow::from),
                        delimiter,
                    )?,
                });
                files.push(OutputFile {
                    name: format!("courses.{}", extension),
                    data: render_delimited(&COURSE_HEADERS, &result.results.courses, delimiter)?,
                });
            }
        }
    }

    Ok(files)
}

pub fn render_json(result: &TransformResult) -> Result<Vec<u8>> {
    let report = JsonReport {
        generated_at: result.generated_at.to_rfc3339(),
        query: &result.query,
        quick_limit: result.quick_limit,
        professors: &result.results.professors,
        courses: &result.results.courses,
    };
    Ok(serde_json::to_vec_pretty(&report)?)
}

fn render_delimited<T, I>(headers: &[&str], rows: I, delimiter: u8) -> Result<Vec<u8>>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    // 標題列自己寫，空結果也保留欄位名稱
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| CatalogError::IoError(e.into_error()))
}

/// 終端機用的純文字列表
pub fn render_text(results: &SearchResults) -> String {
    if results.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    let mut out = String::new();
    if !results.professors.is_empty() {
        out.push_str(&format!("أعضاء هيئة التدريس ({})\n", results.professors.len()));
        for p in &results.professors {
            out.push_str(&format!("  - {} | {} | {}\n", p.name, p.title, p.department_label()));
        }
    }
    if !results.courses.is_empty() {
        out.push_str(&format!("المقررات ({})\n", results.courses.len()));
        for c in &results.courses {
            out.push_str(&format!("  - {} | {} | {}\n", c.title, c.level, c.semester));
        }
    }
    out
}

/// 將輸出檔案打包成單一 zip
pub fn bundle(files: &[OutputFile]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    for file in files {
        zip.start_file::<_, ()>(file.name.as_str(), FileOptions::default())?;
        zip.write_all(&file.data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
