use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Статус из справочника статусов откликов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// DTO для создания/обновления статуса
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusDto {
    pub id: Option<String>,
    pub name: String,
}
