use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор шаблона анкеты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobFormId(pub Uuid);

impl JobFormId {
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
// Field schema
// ============================================================================

/// Вариант ответа для поля с выбором (radio / select)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    /// Пустой вариант — начальное состояние в черновике
    pub fn empty() -> Self {
        Self::default()
    }

    /// Вариант с value, выведенным из label
    pub fn from_label(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: slugify(label),
        }
    }
}

/// Служебное значение варианта: нижний регистр, серии пробелов заменяются
/// одним подчёркиванием. "Senior  Engineer" -> "senior_engineer"
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Вид поля — плоский дискриминант для селектора типа в конструкторе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
    Radio,
    Select,
    CategoryReference,
}

impl FieldKind {
    pub fn code(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Radio => "radio",
            FieldKind::Select => "select",
            FieldKind::CategoryReference => "category_reference",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Текст",
            FieldKind::Number => "Число",
            FieldKind::Date => "Дата",
            FieldKind::Radio => "Переключатель",
            FieldKind::Select => "Выпадающий список",
            FieldKind::CategoryReference => "Категория",
        }
    }

    pub fn all() -> Vec<FieldKind> {
        vec![
            FieldKind::Text,
            FieldKind::Number,
            FieldKind::Date,
            FieldKind::Radio,
            FieldKind::Select,
            FieldKind::CategoryReference,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "text" => Some(FieldKind::Text),
            "number" => Some(FieldKind::Number),
            "date" => Some(FieldKind::Date),
            "radio" => Some(FieldKind::Radio),
            "select" => Some(FieldKind::Select),
            "category_reference" => Some(FieldKind::CategoryReference),
            _ => None,
        }
    }

    /// Поля с вариантами ответа (radio / select)
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Radio | FieldKind::Select)
    }
}

/// Управляющий элемент поля. Варианты ответа существуют только у radio и
/// select — скалярное поле с options не представимо этим типом.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldControl {
    Text,
    Number,
    Date,
    Radio { options: Vec<FieldOption> },
    Select { options: Vec<FieldOption> },
    CategoryReference,
}

impl FieldControl {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldControl::Text => FieldKind::Text,
            FieldControl::Number => FieldKind::Number,
            FieldControl::Date => FieldKind::Date,
            FieldControl::Radio { .. } => FieldKind::Radio,
            FieldControl::Select { .. } => FieldKind::Select,
            FieldControl::CategoryReference => FieldKind::CategoryReference,
        }
    }

    /// Варианты ответа; для скалярных полей — пустой срез
    pub fn options(&self) -> &[FieldOption] {
        match self {
            FieldControl::Radio { options } | FieldControl::Select { options } => options,
            _ => &[],
        }
    }
}

/// Ширина поля на 12-колоночной сетке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum ColumnSpan {
    #[default]
    Full,
    Half,
    Third,
}

impl ColumnSpan {
    pub fn units(&self) -> u8 {
        match self {
            ColumnSpan::Full => 12,
            ColumnSpan::Half => 6,
            ColumnSpan::Third => 4,
        }
    }

    pub fn all() -> Vec<ColumnSpan> {
        vec![ColumnSpan::Full, ColumnSpan::Half, ColumnSpan::Third]
    }

    /// Разбор из сырого значения `<select>` (строка с числом колонок)
    pub fn from_raw(raw: &str) -> Option<Self> {
        let units: u8 = raw.trim().parse().ok()?;
        Self::try_from(units).ok()
    }
}

impl From<ColumnSpan> for u8 {
    fn from(span: ColumnSpan) -> u8 {
        span.units()
    }
}

impl TryFrom<u8> for ColumnSpan {
    type Error = String;

    fn try_from(units: u8) -> Result<Self, Self::Error> {
        match units {
            12 => Ok(ColumnSpan::Full),
            6 => Ok(ColumnSpan::Half),
            4 => Ok(ColumnSpan::Third),
            other => Err(format!("Недопустимая ширина поля: {}", other)),
        }
    }
}

/// Описание одного поля анкеты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: Uuid,
    pub title: String,
    pub required: bool,
    pub column: ColumnSpan,
    #[serde(flatten)]
    pub control: FieldControl,
}

impl FieldDescriptor {
    /// Проверка корректности схемы поля
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Название поля не может быть пустым".into());
        }
        if self.control.kind().is_choice() {
            let options = self.control.options();
            if options.is_empty() {
                return Err("Поле с выбором должно иметь хотя бы один вариант".into());
            }
            for (i, option) in options.iter().enumerate() {
                if option.label.trim().is_empty() {
                    return Err(format!("Вариант {} не может быть пустым", i + 1));
                }
                if options[..i].iter().any(|prev| prev.value == option.value) {
                    return Err(format!("Вариант {} дублирует значение", i + 1));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Шаблон анкеты вакансии: упорядоченный набор описаний полей
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobForm {
    pub id: JobFormId,
    pub title: String,
    pub fields: Vec<FieldDescriptor>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl JobForm {
    /// Создать новый шаблон для вставки в БД
    pub fn new_for_insert(title: String, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            id: JobFormId::new_v4(),
            title,
            fields,
            metadata: EntityMetadata::new(),
        }
    }

}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления шаблона анкеты
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobFormDto {
    pub id: Option<String>,
    pub title: String,
    pub fields: Vec<FieldDescriptor>,
}

impl JobFormDto {
    /// Валидация данных перед сохранением
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Название анкеты не может быть пустым".into());
        }
        for field in &self.fields {
            field.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_collapses_whitespace() {
        assert_eq!(slugify("Senior  Engineer"), "senior_engineer");
        assert_eq!(slugify("Level A"), "level_a");
        assert_eq!(slugify("  Junior\tQA  "), "junior_qa");
        assert_eq!(slugify("plain"), "plain");
    }

    #[test]
    fn test_control_wire_format_carries_type_tag() {
        let control = FieldControl::Radio {
            options: vec![FieldOption::from_label("Level A")],
        };
        let json = serde_json::to_value(&control).unwrap();
        assert_eq!(json["type"], "radio");
        assert_eq!(json["options"][0]["value"], "level_a");

        let scalar = serde_json::to_value(&FieldControl::CategoryReference).unwrap();
        assert_eq!(scalar["type"], "category_reference");
        assert!(scalar.get("options").is_none());
    }

    #[test]
    fn test_descriptor_round_trip_preserves_column() {
        let descriptor = FieldDescriptor {
            id: Uuid::new_v4(),
            title: "Уровень".to_string(),
            required: false,
            column: ColumnSpan::Half,
            control: FieldControl::Select {
                options: vec![FieldOption::from_label("Level A")],
            },
        };
        let json = serde_json::to_string(&descriptor).unwrap();
        let back: FieldDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
        assert_eq!(back.column.units(), 6);
    }

    #[test]
    fn test_column_span_from_raw() {
        assert_eq!(ColumnSpan::from_raw("12"), Some(ColumnSpan::Full));
        assert_eq!(ColumnSpan::from_raw(" 6 "), Some(ColumnSpan::Half));
        assert_eq!(ColumnSpan::from_raw("4"), Some(ColumnSpan::Third));
        assert_eq!(ColumnSpan::from_raw("5"), None);
        assert_eq!(ColumnSpan::from_raw("abc"), None);
    }

    #[test]
    fn test_descriptor_validate_rejects_blank_and_duplicate_options() {
        let mut descriptor = FieldDescriptor {
            id: Uuid::new_v4(),
            title: "Смена".to_string(),
            required: true,
            column: ColumnSpan::Full,
            control: FieldControl::Radio {
                options: vec![
                    FieldOption::from_label("День"),
                    FieldOption::from_label("день"),
                ],
            },
        };
        assert!(descriptor.validate().is_err());

        descriptor.control = FieldControl::Radio {
            options: vec![FieldOption::empty()],
        };
        assert!(descriptor.validate().is_err());

        descriptor.control = FieldControl::Radio {
            options: vec![
                FieldOption::from_label("День"),
                FieldOption::from_label("Ночь"),
            ],
        };
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_dto_validate_checks_title_and_fields() {
        let mut dto = JobFormDto {
            id: None,
            title: "  ".to_string(),
            fields: vec![],
        };
        assert_eq!(
            dto.validate(),
            Err("Название анкеты не может быть пустым".to_string())
        );

        dto.title = "Анкета курьера".to_string();
        assert!(dto.validate().is_ok());

        dto.fields.push(FieldDescriptor {
            id: Uuid::new_v4(),
            title: String::new(),
            required: false,
            column: ColumnSpan::Full,
            control: FieldControl::Text,
        });
        assert_eq!(
            dto.validate(),
            Err("Название поля не может быть пустым".to_string())
        );
    }
}
