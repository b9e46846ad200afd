use crate::core::filter;
use crate::core::flatten::flatten_courses;
use crate::domain::model::{
    Course, CourseCatalog, Department, DepartmentFilter, FlattenedCourse, Professor,
    ProfessorsFixture, SearchQuery, SearchResults,
};
use crate::utils::error::{CatalogError, Result};
use serde_json::Value;

/// 已載入資料的唯讀檢視
///
/// 攤平後的課程清單只在建立時計算一次，之後每次查詢共用
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: CourseCatalog,
    flattened: Vec<FlattenedCourse>,
    professors: Vec<Professor>,
    departments: Vec<Department>,
}

impl Catalog {
    pub fn new(courses: CourseCatalog, fixture: ProfessorsFixture) -> Self {
        let flattened = flatten_courses(&courses);
        Self {
            courses,
            flattened,
            professors: fixture.professors,
            departments: fixture.departments,
        }
    }

    /// 解析兩份資料檔，只有 JSON 本身無效才回傳錯誤，格式不符的紀錄直接略過
    pub fn from_json_str(courses_json: &str, professors_json: &str) -> Result<Self> {
        let courses = parse_fixture("courses-data.json", courses_json)?;
        let professors = parse_fixture("professors-data.json", professors_json)?;

        Ok(Self::new(
            CourseCatalog::from_value(&courses),
            ProfessorsFixture::from_value(&professors),
        ))
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn flattened_courses(&self) -> &[FlattenedCourse] {
        &self.flattened
    }

    pub fn course_catalog(&self) -> &CourseCatalog {
        &self.courses
    }

    pub fn search(&self, query: &str, department: &DepartmentFilter) -> SearchResults {
        filter::search(&self.professors, &self.flattened, query, department)
    }

    pub fn list_all(&self, query: &str, department: &DepartmentFilter) -> SearchResults {
        filter::list_all(&self.professors, &self.flattened, query, department)
    }

    pub fn run(&self, query: &SearchQuery) -> SearchResults {
        filter::run_query(&self.professors, &self.flattened, query)
    }

    pub fn quick_search(&self, query: &str, limit: usize) -> SearchResults {
        filter::quick_search(&self.professors, &self.flattened, query, limit)
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    /// 系所所屬教師，依教師資料檔的順序
    pub fn department_professors(&self, id: &str) -> Vec<&Professor> {
        let Some(department) = self.department(id) else {
            return Vec::new();
        };
        self.professors
            .iter()
            .filter(|p| department.professors.contains(&p.id))
            .collect()
    }

    /// 單一年級與學期的課程，找不到時回傳空清單
    pub fn courses_in(&self, level_key: &str, semester_key: &str) -> &[Course] {
        self.courses
            .semester(level_key, semester_key)
            .map(|bucket| bucket.courses.as_slice())
            .unwrap_or(&[])
    }
}

fn parse_fixture(name: &str, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| CatalogError::FixtureError {
        fixture: name.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COURSES: &str = r#"{
        "level1": {
            "semester1": [
                {"id": "e-learning", "title": "التعليم الإلكتروني", "description": "مقدمة"},
                {"id": "photography", "title": "التصوير الفوتوغرافي", "description": "أساسيات"}
            ],
            "semester2": [
                {"id": "educational-robotics", "title": "الروبوتات التعليمية", "description": "روبوت"}
            ]
        }
    }"#;

    const PROFESSORS: &str = r#"{
        "professors": [
            {"id": 1, "name": "أحمد محمد", "title": "أستاذ", "department": "تكنولوجيا التعليم"},
            {"id": 2, "name": "سارة علي", "title": "مدرس", "department": "علم النفس"},
            {"id": 3, "name": "منى خالد", "title": "مدرس مساعد", "department": ""}
        ],
        "departments": [
            {"id": "technology", "name": "تكنولوجيا التعليم", "professors": [3, 1, 99]}
        ]
    }"#;

    fn catalog() -> Catalog {
        Catalog::from_json_str(COURSES, PROFESSORS).unwrap()
    }

    #[test]
    fn test_load_and_flatten_once() {
        let catalog = catalog();
        assert_eq!(catalog.professors().len(), 3);
        assert_eq!(catalog.flattened_courses().len(), 3);
        assert_eq!(catalog.flattened_courses()[2].semester, "الفصل الدراسي الثاني");
        assert_eq!(catalog.course_catalog().course_count(), 3);
    }

    #[test]
    fn test_invalid_json_is_fixture_error() {
        let err = Catalog::from_json_str("{not json", PROFESSORS).unwrap_err();
        match err {
            CatalogError::FixtureError { fixture, .. } => assert_eq!(fixture, "courses-data.json"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_fields_are_listed_but_never_match() {
        let catalog = Catalog::from_json_str(
            r#"{"level1": {"semester1": [{"id": "e-learning", "title": "التعليم", "description": null}]}}"#,
            r#"{"professors": [
                {"id": 1, "name": "أحمد", "department": "علم النفس"},
                {"id": 2, "name": "سارة", "department": 7}
            ]}"#,
        )
        .unwrap();

        let listed = catalog.list_all("", &DepartmentFilter::All);
        let ids: Vec<u64> = listed.professors.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(listed.courses.len(), 1);

        let by_department = catalog.list_all("", &DepartmentFilter::Contains("7".to_string()));
        assert!(by_department.professors.is_empty());
        assert!(catalog.search("مقدمة", &DepartmentFilter::All).courses.is_empty());
    }

    #[test]
    fn test_department_professors_follow_fixture_order() {
        let catalog = catalog();
        let ids: Vec<u64> = catalog
            .department_professors("technology")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(catalog.department_professors("unknown").is_empty());
        assert_eq!(catalog.department("technology").unwrap().name, "تكنولوجيا التعليم");
    }

    #[test]
    fn test_courses_in_bucket() {
        let catalog = catalog();
        assert_eq!(catalog.courses_in("level1", "semester1").len(), 2);
        assert_eq!(catalog.courses_in("level1", "semester2")[0].id, "educational-robotics");
        assert!(catalog.courses_in("level4", "semester1").is_empty());
    }

    #[test]
    fn test_search_through_catalog() {
        let catalog = catalog();
        let results = catalog.search("التعليم", &DepartmentFilter::All);
        assert_eq!(results.professors.len(), 1);
        assert_eq!(results.courses.len(), 2);

        let results = catalog.list_all("", &DepartmentFilter::NoDepartment);
        assert_eq!(results.professors.len(), 1);
        assert_eq!(results.professors[0].id, 3);
        assert_eq!(results.courses.len(), 3);

        assert!(catalog.search("", &DepartmentFilter::All).is_empty());
        assert_eq!(catalog.quick_search("التصوير", 5).courses.len(), 1);
    }
}
