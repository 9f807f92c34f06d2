use super::schema::{ColumnSpan, FieldControl, FieldDescriptor, FieldKind, FieldOption};
use uuid::Uuid;

/// Ошибка валидации черновика поля. Валидация возвращает весь список,
/// чтобы диалог показал все проблемы сразу.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Пустое название поля
    Title,
    /// Некорректный вариант ответа (пустой label или дубликат значения)
    Option(usize),
}

impl DraftError {
    /// Ключ поля диалога, к которому относится ошибка
    pub fn field_key(&self) -> String {
        match self {
            DraftError::Title => "title".to_string(),
            DraftError::Option(i) => format!("option-{}", i),
        }
    }

    pub fn message(&self) -> String {
        match self {
            DraftError::Title => "Название поля обязательно для заполнения".to_string(),
            DraftError::Option(i) => format!("Вариант {} пустой или дублируется", i + 1),
        }
    }
}

/// Черновик описания поля — явное значение, которым владеет конструктор
/// анкеты. Вид поля сохраняется между добавлениями, чтобы оператору не
/// приходилось выбирать его заново.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDraft {
    pub title: String,
    pub required: bool,
    pub column: ColumnSpan,
    pub kind: FieldKind,
    pub options: Vec<FieldOption>,
}

impl FieldDraft {
    /// Начать новый черновик, сохранив вид предыдущего поля
    pub fn begin(previous_kind: FieldKind) -> Self {
        Self {
            title: String::new(),
            required: false,
            column: ColumnSpan::Full,
            kind: previous_kind,
            options: Self::default_options_for(previous_kind),
        }
    }

    /// Начальные варианты ответа: один пустой для полей с выбором
    pub fn default_options_for(kind: FieldKind) -> Vec<FieldOption> {
        if kind.is_choice() {
            vec![FieldOption::empty()]
        } else {
            Vec::new()
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Смена вида поля сбрасывает варианты: их семантика зависит от вида
    pub fn set_kind(&mut self, kind: FieldKind) {
        self.kind = kind;
        self.options = Self::default_options_for(kind);
    }

    /// Ширина приходит сырой строкой из `<select>`; нераспознанное значение
    /// игнорируется
    pub fn set_column_raw(&mut self, raw: &str) {
        if let Some(span) = ColumnSpan::from_raw(raw) {
            self.column = span;
        }
    }

    /// Переписать вариант: value выводится из label
    pub fn set_option_label(&mut self, index: usize, label: &str) {
        if let Some(option) = self.options.get_mut(index) {
            *option = FieldOption::from_label(label);
        }
    }

    pub fn add_option(&mut self) {
        self.options.push(FieldOption::empty());
    }

    /// Минимум в один вариант движок не навязывает: за это отвечает
    /// вызывающая сторона (кнопка удаления гаснет на последнем варианте)
    pub fn remove_option(&mut self, index: usize) {
        if index < self.options.len() {
            self.options.remove(index);
        }
    }

    /// Проверить черновик, вернув все найденные ошибки. Черновик не меняется.
    pub fn validate(&self) -> Vec<DraftError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(DraftError::Title);
        }
        if self.kind.is_choice() {
            for (i, option) in self.options.iter().enumerate() {
                if option.label.trim().is_empty() {
                    errors.push(DraftError::Option(i));
                } else if self.options[..i].iter().any(|prev| prev.value == option.value) {
                    errors.push(DraftError::Option(i));
                }
            }
        }
        errors
    }

    /// Зафиксировать черновик: при успехе дескриптор с новым id добавляется
    /// в конец схемы, а черновик сбрасывается с сохранением вида поля.
    /// При ошибках ничего не меняется — диалог остаётся открытым.
    pub fn commit(&mut self, fields: &mut Vec<FieldDescriptor>) -> Result<(), Vec<DraftError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        fields.push(self.to_descriptor());
        *self = Self::begin(self.kind);
        Ok(())
    }

    fn to_descriptor(&self) -> FieldDescriptor {
        let control = match self.kind {
            FieldKind::Text => FieldControl::Text,
            FieldKind::Number => FieldControl::Number,
            FieldKind::Date => FieldControl::Date,
            FieldKind::Radio => FieldControl::Radio {
                options: self.options.clone(),
            },
            FieldKind::Select => FieldControl::Select {
                options: self.options.clone(),
            },
            FieldKind::CategoryReference => FieldControl::CategoryReference,
        };
        FieldDescriptor {
            id: Uuid::new_v4(),
            title: self.title.clone(),
            required: self.required,
            column: self.column,
            control,
        }
    }
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self::begin(FieldKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_resets_everything_except_kind() {
        let draft = FieldDraft::begin(FieldKind::Select);
        assert_eq!(draft.title, "");
        assert!(!draft.required);
        assert_eq!(draft.column, ColumnSpan::Full);
        assert_eq!(draft.kind, FieldKind::Select);
        assert_eq!(draft.options, vec![FieldOption::empty()]);

        let scalar = FieldDraft::begin(FieldKind::Date);
        assert!(scalar.options.is_empty());
    }

    #[test]
    fn test_fresh_draft_validation_errors() {
        // пустой черновик с выбором: пустое название + один пустой вариант
        let draft = FieldDraft::begin(FieldKind::Radio);
        assert_eq!(
            draft.validate(),
            vec![DraftError::Title, DraftError::Option(0)]
        );

        // скалярное поле с названием проходит без ошибок
        let mut scalar = FieldDraft::begin(FieldKind::Number);
        scalar.set_title("Ожидаемая зарплата".to_string());
        assert!(scalar.validate().is_empty());
    }

    #[test]
    fn test_set_kind_replaces_options() {
        let mut draft = FieldDraft::begin(FieldKind::Radio);
        draft.set_option_label(0, "День");
        draft.add_option();
        draft.set_option_label(1, "Ночь");
        assert_eq!(draft.options.len(), 2);

        draft.set_kind(FieldKind::Text);
        assert!(draft.options.is_empty());

        draft.set_kind(FieldKind::Select);
        assert_eq!(draft.options, vec![FieldOption::empty()]);
    }

    #[test]
    fn test_option_label_derives_value() {
        let mut draft = FieldDraft::begin(FieldKind::Select);
        draft.set_option_label(0, "Senior  Engineer");
        assert_eq!(draft.options[0].label, "Senior  Engineer");
        assert_eq!(draft.options[0].value, "senior_engineer");
    }

    #[test]
    fn test_validate_reports_all_blank_options() {
        let mut draft = FieldDraft::begin(FieldKind::Radio);
        draft.set_title("Смена".to_string());
        draft.add_option();
        draft.add_option();
        assert_eq!(
            draft.validate(),
            vec![
                DraftError::Option(0),
                DraftError::Option(1),
                DraftError::Option(2)
            ]
        );
    }

    #[test]
    fn test_validate_flags_duplicate_option_values() {
        let mut draft = FieldDraft::begin(FieldKind::Select);
        draft.set_title("Уровень".to_string());
        draft.set_option_label(0, "Level A");
        draft.add_option();
        // другой label, но тот же slug
        draft.set_option_label(1, "level  a");
        assert_eq!(draft.validate(), vec![DraftError::Option(1)]);
    }

    #[test]
    fn test_commit_appends_and_resets() {
        let mut fields = Vec::new();
        let mut draft = FieldDraft::begin(FieldKind::Text);
        draft.set_title("Полное имя".to_string());
        draft.set_required(true);
        draft.set_column_raw("6");

        draft.commit(&mut fields).unwrap();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].title, "Полное имя");
        assert!(fields[0].required);
        assert_eq!(fields[0].column, ColumnSpan::Half);
        assert_eq!(fields[0].control, FieldControl::Text);
        // черновик сброшен, вид сохранён
        assert_eq!(draft.title, "");
        assert_eq!(draft.kind, FieldKind::Text);
        assert_eq!(draft.column, ColumnSpan::Full);
    }

    #[test]
    fn test_commit_on_invalid_draft_changes_nothing() {
        let mut fields = Vec::new();
        let mut draft = FieldDraft::begin(FieldKind::Radio);
        let before = draft.clone();

        let errors = draft.commit(&mut fields).unwrap_err();

        assert!(fields.is_empty());
        assert_eq!(draft, before);
        assert_eq!(errors, vec![DraftError::Title, DraftError::Option(0)]);
    }

    #[test]
    fn test_committed_descriptors_get_distinct_ids() {
        let mut fields = Vec::new();
        let mut draft = FieldDraft::begin(FieldKind::Text);
        draft.set_title("A".to_string());
        draft.commit(&mut fields).unwrap();
        draft.set_title("B".to_string());
        draft.commit(&mut fields).unwrap();
        assert_ne!(fields[0].id, fields[1].id);
    }
}
