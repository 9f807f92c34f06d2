use super::schema::{ColumnSpan, FieldControl, JobForm};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Проверенное значение одного поля анкеты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedValue {
    Number(f64),
    Date(NaiveDate),
    /// Текст, значение выбранного варианта или id категории
    Text(String),
}

/// Одно собранное поле: значение вместе с метаданными дескриптора —
/// сервер ожидает схему поля обратно рядом со значением
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedField {
    #[serde(rename = "descriptorId")]
    pub descriptor_id: Uuid,
    pub title: String,
    pub required: bool,
    pub column: ColumnSpan,
    #[serde(flatten)]
    pub control: FieldControl,
    pub value: SubmittedValue,
}

/// Нарушение правил заполнения одного поля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "fieldId")]
    pub field_id: Uuid,
    pub title: String,
    pub message: String,
}

/// Ошибка сбора анкеты: все нарушения сразу, чтобы форма подсветила
/// каждое проблемное поле
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    pub violations: Vec<Violation>,
}

impl SubmissionError {
    /// Сообщение для поля, если оно нарушено
    pub fn message_for(&self, field_id: Uuid) -> Option<&str> {
        self.violations
            .iter()
            .find(|v| v.field_id == field_id)
            .map(|v| v.message.as_str())
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Анкета заполнена с ошибками: {}", self.violations.len())
    }
}

impl std::error::Error for SubmissionError {}

/// Собрать заполненную анкету: проверить каждое значение по схеме и вернуть
/// поля в порядке шаблона. `category_ids` — допустимые id категорий для
/// полей-ссылок.
pub fn collect_submission(
    form: &JobForm,
    raw_values: &HashMap<Uuid, String>,
    category_ids: &[String],
) -> Result<Vec<CollectedField>, SubmissionError> {
    let mut collected = Vec::with_capacity(form.fields.len());
    let mut violations = Vec::new();

    for descriptor in &form.fields {
        let raw = raw_values
            .get(&descriptor.id)
            .map(|v| v.trim())
            .unwrap_or("");

        if raw.is_empty() {
            if descriptor.required {
                violations.push(Violation {
                    field_id: descriptor.id,
                    title: descriptor.title.clone(),
                    message: format!("«{}» обязательно для заполнения", descriptor.title),
                });
            } else {
                collected.push(to_collected(descriptor, SubmittedValue::Text(String::new())));
            }
            continue;
        }

        let value = match &descriptor.control {
            FieldControl::Text => Ok(SubmittedValue::Text(raw.to_string())),
            // число приводится при сборе, а не на каждом нажатии клавиши
            FieldControl::Number => raw
                .parse::<f64>()
                .map(SubmittedValue::Number)
                .map_err(|_| format!("«{}»: ожидается число", descriptor.title)),
            FieldControl::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(SubmittedValue::Date)
                .map_err(|_| format!("«{}»: некорректная дата", descriptor.title)),
            FieldControl::Radio { options } | FieldControl::Select { options } => {
                if options.iter().any(|o| o.value == raw) {
                    Ok(SubmittedValue::Text(raw.to_string()))
                } else {
                    Err(format!("«{}»: значение вне списка вариантов", descriptor.title))
                }
            }
            FieldControl::CategoryReference => {
                if category_ids.iter().any(|id| id == raw) {
                    Ok(SubmittedValue::Text(raw.to_string()))
                } else {
                    Err(format!("«{}»: неизвестная категория", descriptor.title))
                }
            }
        };

        match value {
            Ok(value) => collected.push(to_collected(descriptor, value)),
            Err(message) => violations.push(Violation {
                field_id: descriptor.id,
                title: descriptor.title.clone(),
                message,
            }),
        }
    }

    if violations.is_empty() {
        Ok(collected)
    } else {
        Err(SubmissionError { violations })
    }
}

fn to_collected(
    descriptor: &super::schema::FieldDescriptor,
    value: SubmittedValue,
) -> CollectedField {
    CollectedField {
        descriptor_id: descriptor.id,
        title: descriptor.title.clone(),
        required: descriptor.required,
        column: descriptor.column,
        control: descriptor.control.clone(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_job_form::schema::{FieldDescriptor, FieldOption};

    fn sample_form() -> JobForm {
        JobForm::new_for_insert(
            "Анкета разработчика".to_string(),
            vec![
                FieldDescriptor {
                    id: Uuid::new_v4(),
                    title: "Full Name".to_string(),
                    required: true,
                    column: ColumnSpan::Full,
                    control: FieldControl::Text,
                },
                FieldDescriptor {
                    id: Uuid::new_v4(),
                    title: "Level".to_string(),
                    required: false,
                    column: ColumnSpan::Half,
                    control: FieldControl::Select {
                        options: vec![
                            FieldOption::from_label("Level A"),
                            FieldOption::from_label("Level B"),
                        ],
                    },
                },
            ],
        )
    }

    #[test]
    fn test_collect_preserves_order_and_length() {
        let form = sample_form();
        let mut raw = HashMap::new();
        raw.insert(form.fields[0].id, "Jane Doe".to_string());
        raw.insert(form.fields[1].id, "level_b".to_string());

        let collected = collect_submission(&form, &raw, &[]).unwrap();

        assert_eq!(collected.len(), form.fields.len());
        assert_eq!(collected[0].value, SubmittedValue::Text("Jane Doe".to_string()));
        assert_eq!(collected[1].value, SubmittedValue::Text("level_b".to_string()));
        assert_eq!(collected[0].descriptor_id, form.fields[0].id);
        // метаданные дескриптора возвращаются серверу вместе со значением
        assert_eq!(collected[1].column, ColumnSpan::Half);
        assert_eq!(collected[1].control, form.fields[1].control);
    }

    #[test]
    fn test_required_field_blank_fails_with_one_violation() {
        let form = sample_form();
        let mut raw = HashMap::new();
        raw.insert(form.fields[0].id, "".to_string());
        raw.insert(form.fields[1].id, "level_b".to_string());

        let err = collect_submission(&form, &raw, &[]).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field_id, form.fields[0].id);
        assert!(err.message_for(form.fields[0].id).is_some());
    }

    #[test]
    fn test_optional_blank_field_passes_through_empty() {
        let form = sample_form();
        let mut raw = HashMap::new();
        raw.insert(form.fields[0].id, "Jane Doe".to_string());

        let collected = collect_submission(&form, &raw, &[]).unwrap();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1].value, SubmittedValue::Text(String::new()));
    }

    #[test]
    fn test_choice_value_outside_options_is_rejected() {
        let form = sample_form();
        let mut raw = HashMap::new();
        raw.insert(form.fields[0].id, "Jane Doe".to_string());
        raw.insert(form.fields[1].id, "level_c".to_string());

        let err = collect_submission(&form, &raw, &[]).unwrap_err();
        assert_eq!(err.violations[0].field_id, form.fields[1].id);
    }

    #[test]
    fn test_number_and_date_coercion() {
        let number_id = Uuid::new_v4();
        let date_id = Uuid::new_v4();
        let form = JobForm::new_for_insert(
            "Сроки".to_string(),
            vec![
                FieldDescriptor {
                    id: number_id,
                    title: "Опыт, лет".to_string(),
                    required: true,
                    column: ColumnSpan::Third,
                    control: FieldControl::Number,
                },
                FieldDescriptor {
                    id: date_id,
                    title: "Дата выхода".to_string(),
                    required: true,
                    column: ColumnSpan::Third,
                    control: FieldControl::Date,
                },
            ],
        );

        let mut raw = HashMap::new();
        raw.insert(number_id, "3.5".to_string());
        raw.insert(date_id, "2026-09-01".to_string());
        let collected = collect_submission(&form, &raw, &[]).unwrap();
        assert_eq!(collected[0].value, SubmittedValue::Number(3.5));
        assert_eq!(
            collected[1].value,
            SubmittedValue::Date(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );

        // обе ошибки типов приходят одним списком
        raw.insert(number_id, "abc".to_string());
        raw.insert(date_id, "2026-02-30".to_string());
        let err = collect_submission(&form, &raw, &[]).unwrap_err();
        assert_eq!(err.violations.len(), 2);
    }

    #[test]
    fn test_category_reference_checked_against_supplied_ids() {
        let field_id = Uuid::new_v4();
        let form = JobForm::new_for_insert(
            "Категория".to_string(),
            vec![FieldDescriptor {
                id: field_id,
                title: "Направление".to_string(),
                required: true,
                column: ColumnSpan::Full,
                control: FieldControl::CategoryReference,
            }],
        );
        let categories = vec!["cat-1".to_string(), "cat-2".to_string()];

        let mut raw = HashMap::new();
        raw.insert(field_id, "cat-2".to_string());
        assert!(collect_submission(&form, &raw, &categories).is_ok());

        raw.insert(field_id, "cat-9".to_string());
        assert!(collect_submission(&form, &raw, &categories).is_err());
    }

    #[test]
    fn test_draft_commit_then_collect_round_trip() {
        use crate::domain::a001_job_form::draft::FieldDraft;
        use crate::domain::a001_job_form::schema::FieldKind;

        let mut fields = Vec::new();
        let mut draft = FieldDraft::begin(FieldKind::Text);
        draft.set_title("Город".to_string());
        draft.set_required(true);
        draft.commit(&mut fields).unwrap();

        draft.set_kind(FieldKind::Radio);
        draft.set_title("Формат".to_string());
        draft.set_option_label(0, "Офис");
        draft.add_option();
        draft.set_option_label(1, "Удалённо");
        draft.commit(&mut fields).unwrap();

        let form = JobForm::new_for_insert("Анкета".to_string(), fields);
        let mut raw = HashMap::new();
        raw.insert(form.fields[0].id, "Казань".to_string());
        raw.insert(form.fields[1].id, "удалённо".to_string());

        let collected = collect_submission(&form, &raw, &[]).unwrap();
        assert_eq!(collected.len(), form.fields.len());
        assert_eq!(collected[1].value, SubmittedValue::Text("удалённо".to_string()));
    }
}
