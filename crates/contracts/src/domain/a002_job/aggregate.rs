use crate::domain::a001_job_form::{CollectedField, JobFormId};
use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор вакансии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
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

/// Вакансия. Может ссылаться на шаблон анкеты, по которому собираются отклики.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    #[serde(rename = "statusId")]
    pub status_id: Option<String>,
    #[serde(rename = "formId")]
    pub form_id: Option<JobFormId>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Шаблоны, на которые ссылается хотя бы одна вакансия, считаются
/// «закрытыми»: редактирование и удаление для них блокируются в UI
pub fn referenced_form_ids(jobs: &[Job]) -> HashSet<JobFormId> {
    jobs.iter().filter_map(|job| job.form_id).collect()
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Запрос на создание вакансии: либо прямые поля, либо шаблон анкеты
/// вместе с собранными по нему значениями
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewJobRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(rename = "statusId", skip_serializing_if = "Option::is_none")]
    pub status_id: Option<String>,
    #[serde(rename = "formId", skip_serializing_if = "Option::is_none")]
    pub form_id: Option<JobFormId>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fields: Vec<CollectedField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with_form(form_id: Option<JobFormId>) -> Job {
        Job {
            id: JobId::new_v4(),
            title: "Rust-разработчик".to_string(),
            description: String::new(),
            category_id: None,
            status_id: None,
            form_id,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn test_referenced_form_ids_collects_only_linked() {
        let used = JobFormId::new_v4();
        let jobs = vec![
            job_with_form(Some(used)),
            job_with_form(None),
            job_with_form(Some(used)),
        ];
        let ids = referenced_form_ids(&jobs);
        assert_eq!(ids.len(), 1);
        assert!(ids.contains(&used));
    }

    #[test]
    fn test_new_job_request_omits_empty_template_part() {
        let request = NewJobRequest {
            title: "Тестировщик".to_string(),
            description: "Ручное тестирование".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("formId").is_none());
        assert!(json.get("fields").is_none());
    }
}
