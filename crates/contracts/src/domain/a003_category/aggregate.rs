use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Категория вакансий. Также источник значений для полей-ссылок анкеты.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// DTO для создания/обновления категории
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub name: String,
}
