//! User-facing feedback strings. The form is Arabic, right-to-left.

pub const CATEGORIES_FETCH_FAILED: &str = "Failed to fetch categories. Please try again later.";
pub const ARTICLE_ADDED: &str = "تم إضافة المقال بنجاح";
pub const ARTICLE_ADD_FAILED: &str = "فشل في إضافة المقال. يرجى المحاولة مرة أخرى.";
pub const REQUIRED_FIELDS_MISSING: &str = "يرجى ملء جميع الحقول المطلوبة.";
