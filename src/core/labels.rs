//! 顯示用的靜態對照表：年級與學期名稱、課程圖片以及系所篩選選項

/// 找不到對應圖片時使用的預設路徑
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=200";

/// 年級分頁，依課程頁面的顯示順序
pub const LEVELS: [(&str, &str); 4] = [
    ("level1", "المستوى الأول"),
    ("level2", "المستوى الثاني"),
    ("level3", "المستوى الثالث"),
    ("level4", "المستوى الرابع"),
];

pub const SEMESTERS: [(&str, &str); 2] = [
    ("semester1", "الفصل الدراسي الأول"),
    ("semester2", "الفصل الدراسي الثاني"),
];

/// 系所下拉選單的 `(篩選值, 顯示名稱)`
pub const DEPARTMENT_FILTER_OPTIONS: [(&str, &str); 7] = [
    ("all", "جميع الأقسام"),
    ("أصول التربية", "أصول التربية"),
    ("مناهج وطرق تدريس", "مناهج وطرق تدريس"),
    ("علم النفس", "علم النفس"),
    ("تكنولوجيا التعليم", "تكنولوجيا التعليم"),
    ("رياض أطفال", "قسم رياض الأطفال"),
    ("no-department", "بدون قسم"),
];

const COURSE_IMAGES: &[(&str, &str)] = &[
    ("educational-tv-programs-design-and-production", "/تصميم-وانتاج-برامج-التليفزيون.jpg"),
    ("augmented-reality-technology", "/تكنولوجيا-الواقع-المعزز.jpg"),
    ("educational-games-design-and-production", "/تصميم-وانتاج-الالعاب-التعليمية.jpg"),
    ("educational-websites-design-and-production", "/تصميم-وانتاج-المواقع-التعليمية.jpg"),
    ("e-book-design", "/تصميم-كتاب-الكتروني.jpg"),
    ("simulation-methods-and-design", "/اساليب-المحاكاه.jpg"),
    ("digital-images-production-and-processing", "/الصور-الرقمية.jpg"),
    ("adaptive-learning-environments", "/بيئات-التعليم-التكيفيه.jpg"),
    ("digital-applications-in-education", "/توظيف-التطبيقات-الرقمية-في-التعليم.jpg"),
    ("graduation-project-extended", "/مشروع-التخرج.jpg"),
    ("action-research-extended", "/بحوث-الفعل.jpg"),
    ("cybersecurity-in-education", "/الامن-السيبراني.jpg"),
    ("field-training-4", "/تدريب-ميداني.jpg"),
    ("field-training-5", "/تدريب-ميداني.jpg"),
    ("digital-empowerment", "/مصادر-ثلاثيه-الابعاد.jpg"),
    ("3d-learning-resources", "/مصادر-ثلاثيه-الابعاد.jpg"),
    ("programming-and-applications", "/البرمجة-وتطبيقاتها.jpg"),
    ("learning-analytics-in-educational-environments", "/تحليلات-التعلم.jpg"),
    ("e-courses-design-and-production", "/تصميم-المقررات-وانتاجها.jpg"),
    ("educational-robotics", "/الروبوتات.jpg"),
    ("digital-content-management-systems", "/نظم-ادارة-المحتوي-الرقمي.jpg"),
    ("educational-game-motivators", "/محفزات-الالعاب.jpg"),
    ("theoretical-foundations-for-special-groups", "/الاسس-النظرية-لتعليم-ذوي-الفئات-الخاصة.jpg"),
    ("digital-learning-resource-centers", "/مركز-مصادر-التعلم-الرقمي.jpg"),
    ("photography", "/التصوير-الفوتوغرافي.jpg"),
    ("introduction-to-instructional-design", "/مدخل-الي-التصميم-التعليمي.jpg"),
    ("theoretical-foundations-of-integrated-media", "/الاسس-النظرية-للوسائط-المتكاملة.jpg"),
    ("radio-and-audio-recordings", "/الاذاعة-والتسجيلات-الصوتية.jpg"),
    ("e-learning", "/التعليم-الالكتروني.jpg"),
    ("digital-educational-communication", "/الاتصال-التعليمي-الرقمي.jpg"),
    ("educational-computer-networks", "/شبكات-الكمبيوتر-التعليمية.jpg"),
    ("e-learning-environments", "/بيئات-التعلم-الالكتروني.jpg"),
    ("static-and-animated-educational-graphics", "/الرسوم-التعليمية-المتحركة-والثابته.jpg"),
    ("readings-in-english", "/قراءات-في-التخصص-باللغه-الانحليزية.jpg"),
    ("multimedia-environments-for-special-groups", "/تصميم-وانتاج-بيئات-الوسائط-المتكاملة-للفئات-الخاصه.jpg"),
    ("accelerated-learning-and-smart-surfaces", "/التعليم-المعجل.jpg"),
    ("user-interfaces-in-virtual-learning-environments", "/وجهات-المستخدم.jpg"),
    ("interactive-video-environments", "/بيئات-الفيديو-التفاعلي.jpg"),
    ("educational-virtual-museums", "/المتاحف-الافتراضية.jpg"),
    ("educational-websites-production", "/انتاج-المواقع-التعليمية.jpg"),
    ("digital-learning-environments-and-tools", "/بيئات-التعلم-الرقمي-وادواتها.jpg"),
    ("interactive-virtual-technology", "/التكنولوجيا-الافتراضية-التفاعلية.jpg"),
    ("learning-resources-for-special-groups", "/مصادر-التعلم-للفئات-الخاصة.png"),
];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

/// 年級顯示名稱，未知的鍵原樣回傳
pub fn level_label(key: &str) -> &str {
    lookup(&LEVELS, key).unwrap_or(key)
}

/// 學期顯示名稱，未知的鍵原樣回傳
pub fn semester_label(key: &str) -> &str {
    lookup(&SEMESTERS, key).unwrap_or(key)
}

pub fn course_image(course_id: &str) -> &'static str {
    lookup(COURSE_IMAGES, course_id).unwrap_or(PLACEHOLDER_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(level_label("level1"), "المستوى الأول");
        assert_eq!(level_label("level4"), "المستوى الرابع");
        assert_eq!(semester_label("semester2"), "الفصل الدراسي الثاني");
    }

    #[test]
    fn test_unknown_labels_pass_through() {
        assert_eq!(level_label("level9"), "level9");
        assert_eq!(semester_label("summer"), "summer");
    }

    #[test]
    fn test_course_images() {
        assert_eq!(course_image("e-learning"), "/التعليم-الالكتروني.jpg");
        assert_eq!(course_image("photography"), "/التصوير-الفوتوغرافي.jpg");
        // 兩門實習課共用同一張圖
        assert_eq!(course_image("field-training-4"), course_image("field-training-5"));
        assert_eq!(course_image("no-such-course"), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_image_table_has_unique_ids() {
        let mut ids: Vec<&str> = COURSE_IMAGES.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), COURSE_IMAGES.len());
    }
}
