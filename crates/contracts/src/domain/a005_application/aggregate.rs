use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор отклика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub Uuid);

impl ApplicationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Комментарий рецензента к отклику
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComment {
    pub id: Uuid,
    pub text: String,
}

/// Отклик кандидата на вакансию. Принадлежит серверу; клиент меняет только
/// рецензентские поля и только через авторизованный патч (см. review.rs).
///
/// Рецензентские поля хранятся строками с серверным плейсхолдером "NONE"
/// для незаполненных значений.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: Option<Uuid>,
    pub applicant_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,

    // Поля, доступные рецензентам
    pub short_list_status: String,
    pub cal_status: String,
    pub mailed: String,
    pub designation: String,
    pub test_result: String,
    pub level: String,
    pub profile: String,
    pub hiring_type: String,
    pub intern_ship_probation_salary: String,
    pub final_salary: String,
    pub hiring_status: String,
    #[serde(default)]
    pub joining: Option<String>,
    #[serde(default)]
    pub comment: Option<ReviewComment>,

    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Application {
    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}
