use crate::core::labels::{course_image, level_label, semester_label};
use crate::domain::model::{Course, CourseCatalog, FlattenedCourse};
use serde_json::Value;

/// 將年級 → 學期 → 課程攤平成單一清單，依序保留年級、學期與課程的順序
pub fn flatten_courses(catalog: &CourseCatalog) -> Vec<FlattenedCourse> {
    catalog
        .levels
        .iter()
        .flat_map(|level| {
            let level_name = level_label(&level.key);
            level.semesters.iter().flat_map(move |semester| {
                let semester_name = semester_label(&semester.key);
                semester
                    .courses
                    .iter()
                    .map(move |course| annotate(course, level_name, semester_name))
            })
        })
        .collect()
}

/// 與 [`flatten_courses`] 相同，但直接使用原始 JSON
pub fn flatten_value(value: &Value) -> Vec<FlattenedCourse> {
    flatten_courses(&CourseCatalog::from_value(value))
}

fn annotate(course: &Course, level: &str, semester: &str) -> FlattenedCourse {
    FlattenedCourse {
        id: course.id.clone(),
        title: course.title.clone(),
        description: course.description.clone(),
        level: level.to_string(),
        semester: semester.to_string(),
        image: course_image(&course.id).to_string(),
    }
}
