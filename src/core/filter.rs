//! 教師與課程的關鍵字及系所篩選
//!
//! 比對採區分大小寫的子字串比對，缺少的欄位一律不符合。
//!
//! [`search`] 與 [`list_all`] 只差在空白查詢的處理：
//! 前者回傳空結果，後者回傳所有通過系所篩選的紀錄。

use crate::domain::model::{
    DepartmentFilter, FlattenedCourse, Professor, SearchMode, SearchQuery, SearchResults,
};

impl DepartmentFilter {
    pub fn matches(&self, professor: &Professor) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::NoDepartment => !professor.has_department(),
            DepartmentFilter::Contains(value) => professor
                .department()
                .is_some_and(|department| department.contains(value.as_str())),
        }
    }
}

pub fn professor_matches_query(professor: &Professor, query: &str) -> bool {
    professor.name.contains(query)
        || professor.title.contains(query)
        || professor
            .department()
            .is_some_and(|department| department.contains(query))
}

pub fn course_matches_query(course: &FlattenedCourse, query: &str) -> bool {
    course.title.contains(query)
        || course.description.contains(query)
        || course.level.contains(query)
        || course.semester.contains(query)
}

pub fn filter_professors<'a>(
    professors: &'a [Professor],
    query: &'a str,
    department: &'a DepartmentFilter,
) -> impl Iterator<Item = &'a Professor> + 'a {
    professors
        .iter()
        .filter(move |p| professor_matches_query(p, query) && department.matches(p))
}

pub fn filter_courses<'a>(
    courses: &'a [FlattenedCourse],
    query: &'a str,
) -> impl Iterator<Item = &'a FlattenedCourse> + 'a {
    courses
        .iter()
        .filter(move |c| course_matches_query(c, query))
}

/// 綜合搜尋，空白查詢回傳空結果
pub fn search(
    professors: &[Professor],
    courses: &[FlattenedCourse],
    query: &str,
    department: &DepartmentFilter,
) -> SearchResults {
    if query.is_empty() {
        return SearchResults::default();
    }
    list_all(professors, courses, query, department)
}

/// 分類列表，空白查詢符合所有紀錄
pub fn list_all(
    professors: &[Professor],
    courses: &[FlattenedCourse],
    query: &str,
    department: &DepartmentFilter,
) -> SearchResults {
    SearchResults {
        professors: filter_professors(professors, query, department)
            .cloned()
            .collect(),
        courses: filter_courses(courses, query).cloned().collect(),
    }
}

/// 依 [`SearchQuery`] 的模式與範圍執行查詢
pub fn run_query(
    professors: &[Professor],
    courses: &[FlattenedCourse],
    query: &SearchQuery,
) -> SearchResults {
    // 範圍外的集合視為空
    let professors: &[Professor] = if query.scope.includes_professors() {
        professors
    } else {
        &[]
    };
    let courses: &[FlattenedCourse] = if query.scope.includes_courses() {
        courses
    } else {
        &[]
    };

    match query.mode {
        SearchMode::Search => search(professors, courses, &query.text, &query.department),
        SearchMode::ListAll => list_all(professors, courses, &query.text, &query.department),
    }
}

/// 快速搜尋：不分大小寫比對教師姓名與課程名稱，兩邊各取前 `limit` 筆
pub fn quick_search(
    professors: &[Professor],
    courses: &[FlattenedCourse],
    query: &str,
    limit: usize,
) -> SearchResults {
    // 空白查詢符合所有名稱，取前 limit 筆
    let needle = query.to_lowercase();

    SearchResults {
        professors: professors
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect(),
        courses: courses
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect(),
    }
}
