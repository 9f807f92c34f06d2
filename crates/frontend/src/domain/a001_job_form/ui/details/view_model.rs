use super::model;
use contracts::domain::a001_job_form::{DraftError, FieldDraft, FieldKind, JobFormDto};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel конструктора анкеты. Черновик поля — явное значение,
/// принадлежащее конструктору; диалог добавления видит его по ссылке
/// и фиксирует через commit_draft.
#[derive(Clone)]
pub struct JobFormDetailsViewModel {
    pub form: RwSignal<JobFormDto>,
    pub draft: RwSignal<FieldDraft>,
    pub draft_errors: RwSignal<Vec<DraftError>>,
    pub show_dialog: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl JobFormDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(JobFormDto::default()),
            draft: RwSignal::new(FieldDraft::default()),
            draft_errors: RwSignal::new(Vec::new()),
            show_dialog: RwSignal::new(false),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(aggregate) => {
                        form.set(JobFormDto {
                            id: Some(aggregate.id.as_string()),
                            title: aggregate.title,
                            fields: aggregate.fields,
                        });
                    }
                    Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            });
        }
    }

    /// Открыть диалог добавления поля; черновик сохраняет вид поля,
    /// выбранный при прошлом добавлении
    pub fn open_field_dialog(&self) {
        self.draft_errors.set(Vec::new());
        self.show_dialog.set(true);
    }

    pub fn close_field_dialog(&self) {
        let kind = self.draft.get().kind;
        self.draft.set(FieldDraft::begin(kind));
        self.draft_errors.set(Vec::new());
        self.show_dialog.set(false);
    }

    /// Зафиксировать черновик. При ошибках валидации диалог остаётся
    /// открытым и показывает их все; схема не меняется.
    pub fn commit_draft(&self) {
        let mut draft = self.draft.get();
        let mut outcome = Ok(());
        self.form.update(|f| outcome = draft.commit(&mut f.fields));
        match outcome {
            Ok(()) => {
                self.draft.set(draft);
                self.draft_errors.set(Vec::new());
                self.show_dialog.set(false);
            }
            Err(errors) => self.draft_errors.set(errors),
        }
    }

    /// Сообщение об ошибке для элемента диалога ("title" / "option-<i>")
    pub fn draft_error_for(&self, key: &str) -> Option<String> {
        self.draft_errors
            .get()
            .iter()
            .find(|e| e.field_key() == key)
            .map(|e| e.message())
    }

    pub fn remove_field(&self, index: usize) {
        self.form.update(|f| {
            if index < f.fields.len() {
                f.fields.remove(index);
            }
        });
    }

    pub fn set_draft_kind(&self, code: &str) {
        if let Some(kind) = FieldKind::from_code(code) {
            self.draft.update(|d| d.set_kind(kind));
        }
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }

        let on_saved_cb = on_saved.clone();
        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(()) => on_saved_cb(()),
                Err(e) => error.set(Some(format!("Ошибка сохранения: {}", e))),
            }
            is_saving.set(false);
        });
    }
}
