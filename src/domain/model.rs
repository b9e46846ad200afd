use crate::utils::error::CatalogError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// 沒有所屬系所時顯示的標籤
pub const NO_DEPARTMENT_LABEL: &str = "بدون قسم";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bio: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub publications: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub courses: Vec<String>,
}

impl Professor {
    /// 系所名稱，缺少或空字串時為 `None`
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref().filter(|d| !d.is_empty())
    }

    pub fn has_department(&self) -> bool {
        self.department().is_some()
    }

    pub fn department_label(&self) -> &str {
        self.department().unwrap_or(NO_DEPARTMENT_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

/// 附上年級、學期名稱與圖片路徑的課程
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenedCourse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: String,
    pub semester: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentColor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub bg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentHead {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vision: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mission: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<DepartmentColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<DepartmentHead>,
    /// 教師編號，不檢查是否存在於教師清單
    #[serde(default)]
    pub professors: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemesterBucket {
    pub key: String,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelBucket {
    pub key: String,
    pub semesters: Vec<SemesterBucket>,
}

/// 年級 → 學期 → 課程，保留資料檔中的順序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseCatalog {
    pub levels: Vec<LevelBucket>,
}

impl CourseCatalog {
    /// 從原始 JSON 建立課程目錄，格式不符的分支會被略過
    pub fn from_value(value: &Value) -> Self {
        let Some(levels) = value.as_object() else {
            tracing::warn!("Course fixture is not an object, ignoring it");
            return Self::default();
        };

        let levels = levels
            .iter()
            .filter_map(|(level_key, semesters)| {
                let Some(semesters) = semesters.as_object() else {
                    tracing::warn!("Skipping level '{}': expected an object of semesters", level_key);
                    return None;
                };

                let semesters = semesters
                    .iter()
                    .filter_map(|(semester_key, courses)| {
                        let Some(courses) = courses.as_array() else {
                            tracing::warn!(
                                "Skipping {}/{}: expected a list of courses",
                                level_key,
                                semester_key
                            );
                            return None;
                        };
                        Some(SemesterBucket {
                            key: semester_key.clone(),
                            courses: parse_entries(courses, "course"),
                        })
                    })
                    .collect();

                Some(LevelBucket {
                    key: level_key.clone(),
                    semesters,
                })
            })
            .collect();

        Self { levels }
    }

    pub fn semester(&self, level_key: &str, semester_key: &str) -> Option<&SemesterBucket> {
        self.levels
            .iter()
            .find(|level| level.key == level_key)?
            .semesters
            .iter()
            .find(|semester| semester.key == semester_key)
    }

    pub fn course_count(&self) -> usize {
        self.levels
            .iter()
            .flat_map(|level| &level.semesters)
            .map(|semester| semester.courses.len())
            .sum()
    }
}

/// `professors-data.json`：教師資料與系所目錄
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessorsFixture {
    pub professors: Vec<Professor>,
    pub departments: Vec<Department>,
}

impl ProfessorsFixture {
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            tracing::warn!("Professors fixture is not an object, ignoring it");
            return Self::default();
        };

        Self {
            professors: parse_entries(fixture_list(object, "professors"), "professor"),
            departments: parse_entries(fixture_list(object, "departments"), "department"),
        }
    }
}

fn fixture_list<'a>(object: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    match object.get(key) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            tracing::warn!("'{}' in professors fixture is not a list, ignoring it", key);
            &[]
        }
        None => &[],
    }
}

// 個別紀錄解析失敗時只略過該筆
fn parse_entries<T: DeserializeOwned>(items: &[Value], kind: &str) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match T::deserialize(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping malformed {} #{}: {}", kind, index, e);
                None
            }
        })
        .collect()
}

// 欄位為 null 或型別不符時當作空值，整筆紀錄仍保留
fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

fn lenient_strings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// 與關鍵字一起套用的系所篩選
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DepartmentFilter {
    #[default]
    All,
    NoDepartment,
    Contains(String),
}

impl DepartmentFilter {
    pub fn as_str(&self) -> &str {
        match self {
            DepartmentFilter::All => "all",
            DepartmentFilter::NoDepartment => "no-department",
            DepartmentFilter::Contains(value) => value,
        }
    }
}

impl FromStr for DepartmentFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "all" => DepartmentFilter::All,
            "no-department" => DepartmentFilter::NoDepartment,
            other => DepartmentFilter::Contains(other.to_string()),
        })
    }
}

impl From<String> for DepartmentFilter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "all" => DepartmentFilter::All,
            "no-department" => DepartmentFilter::NoDepartment,
            _ => DepartmentFilter::Contains(value),
        }
    }
}

impl From<DepartmentFilter> for String {
    fn from(filter: DepartmentFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 查詢要回傳哪些類別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    Professors,
    Courses,
}

impl SearchScope {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Professors => "professors",
            SearchScope::Courses => "courses",
        }
    }

    pub fn includes_professors(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Professors)
    }

    pub fn includes_courses(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Courses)
    }
}

impl FromStr for SearchScope {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchScope::All),
            "professors" => Ok(SearchScope::Professors),
            "courses" => Ok(SearchScope::Courses),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "search.scope".to_string(),
                value: other.to_string(),
                reason: "Expected one of: all, professors, courses".to_string(),
            }),
        }
    }
}

/// 空白查詢時 `Search` 不回傳任何結果，`ListAll` 回傳全部
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    #[default]
    Search,
    ListAll,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Search => "search",
            SearchMode::ListAll => "list-all",
        }
    }
}

impl FromStr for SearchMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "search" => Ok(SearchMode::Search),
            "list-all" => Ok(SearchMode::ListAll),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "search.mode".to_string(),
                value: other.to_string(),
                reason: "Expected one of: search, list-all".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    #[serde(default)]
    pub department: DepartmentFilter,
    #[serde(default)]
    pub scope: SearchScope,
    #[serde(default)]
    pub mode: SearchMode,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_department(mut self, department: DepartmentFilter) -> Self {
        self.department = department;
        self
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub professors: Vec<Professor>,
    pub courses: Vec<FlattenedCourse>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.professors.is_empty() && self.courses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.professors.len() + self.courses.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Tsv];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(CatalogError::InvalidConfigValueError {
                field: "output_formats".to_string(),
                value: s.to_string(),
                reason: "Expected one of: json, csv, tsv".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub query: SearchQuery,
    /// 使用快速搜尋時記錄筆數上限
    pub quick_limit: Option<usize>,
    pub results: SearchResults,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_catalog_keeps_document_order() {
        let value = json!({
            "level2": { "semester2": [{"id": "b"}], "semester1": [{"id": "a"}] },
            "level1": { "semester1": [{"id": "c", "title": "T", "description": "D"}] }
        });

        let catalog = CourseCatalog::from_value(&value);
        let keys: Vec<(&str, &str)> = catalog
            .levels
            .iter()
            .flat_map(|l| l.semesters.iter().map(move |s| (l.key.as_str(), s.key.as_str())))
            .collect();

        assert_eq!(
            keys,
            vec![("level2", "semester2"), ("level2", "semester1"), ("level1", "semester1")]
        );
        assert_eq!(catalog.course_count(), 3);
    }

    #[test]
    fn test_course_catalog_skips_malformed_branches() {
        let value = json!({
            "level1": { "semester1": [{"id": "ok"}, {"title": "no id"}, 42], "semester2": "oops" },
            "level2": [],
            "level3": { "semester1": null }
        });

        let catalog = CourseCatalog::from_value(&value);
        assert_eq!(catalog.levels.len(), 2);
        assert_eq!(catalog.course_count(), 1);
        assert_eq!(catalog.semester("level1", "semester1").unwrap().courses[0].id, "ok");
        assert!(catalog.semester("level1", "semester2").is_none());
        assert!(catalog.semester("level3", "semester1").is_none());

        assert_eq!(CourseCatalog::from_value(&json!([1, 2])), CourseCatalog::default());
    }

    #[test]
    fn test_professors_fixture_tolerates_missing_fields() {
        let value = json!({
            "professors": [
                {"id": 1, "name": "أحمد", "title": "أستاذ", "department": ""},
                {"id": 2, "name": "سارة"},
                {"name": "no id"}
            ],
            "departments": [
                {"id": "psychology", "name": "علم النفس", "professors": [2]}
            ]
        });

        let fixture = ProfessorsFixture::from_value(&value);
        assert_eq!(fixture.professors.len(), 2);
        assert!(!fixture.professors[0].has_department());
        assert_eq!(fixture.professors[1].department_label(), NO_DEPARTMENT_LABEL);
        assert!(fixture.professors[1].publications.is_empty());
        assert_eq!(fixture.departments[0].professors, vec![2]);
    }

    #[test]
    fn test_department_filter_parsing() {
        assert_eq!("all".parse::<DepartmentFilter>().unwrap(), DepartmentFilter::All);
        assert_eq!(
            "no-department".parse::<DepartmentFilter>().unwrap(),
            DepartmentFilter::NoDepartment
        );
        assert_eq!(
            "علم النفس".parse::<DepartmentFilter>().unwrap(),
            DepartmentFilter::Contains("علم النفس".to_string())
        );

        let query = SearchQuery::new("x").with_department(DepartmentFilter::NoDepartment);
        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(encoded["department"], "no-department");
        assert_eq!(encoded["mode"], "search");
    }

    #[test]
    fn test_scope_and_mode_parsing() {
        assert_eq!("courses".parse::<SearchScope>().unwrap(), SearchScope::Courses);
        assert!("teachers".parse::<SearchScope>().is_err());
        assert_eq!("list-all".parse::<SearchMode>().unwrap(), SearchMode::ListAll);
        assert!("everything".parse::<SearchMode>().is_err());
        assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
    }

    #[test]
    fn test_null_or_mistyped_fields_keep_the_record() {
        let value = json!({
            "professors": [
                {"id": 1, "name": "أحمد", "department": null},
                {"id": 2, "name": "سارة", "title": null, "department": 7, "publications": "none"},
                {"id": 3, "name": ["x"], "department": "علم النفس", "courses": ["a", 1, "b"]}
            ]
        });

        let fixture = ProfessorsFixture::from_value(&value);
        assert_eq!(fixture.professors.len(), 3);
        assert_eq!(fixture.professors[0].department, None);
        assert_eq!(fixture.professors[1].department, None);
        assert_eq!(fixture.professors[1].title, "");
        assert!(fixture.professors[1].publications.is_empty());
        assert_eq!(fixture.professors[2].name, "");
        assert_eq!(fixture.professors[2].department(), Some("علم النفس"));
        assert_eq!(fixture.professors[2].courses, vec!["a", "b"]);
    }

    #[test]
    fn test_course_with_null_description_is_kept() {
        let catalog = CourseCatalog::from_value(&json!({
            "level1": { "semester1": [
                {"id": "e-learning", "title": "التعليم الإلكتروني", "description": null},
                {"id": "photography", "title": 5}
            ] }
        }));

        let courses = &catalog.semester("level1", "semester1").unwrap().courses;
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].description, "");
        assert_eq!(courses[1].title, "");
    }
}
