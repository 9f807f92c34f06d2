//! Job Creation UI Module
//!
//! - model.rs: API functions (fetch, create)
//! - mod.rs: screen component

pub mod model;

use contracts::domain::a001_job_form::{collect_submission, JobForm, Violation};
use contracts::domain::a002_job::{Job, NewJobRequest};
use leptos::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::a001_job_form::ui::details::model as form_model;
use crate::domain::a001_job_form::ui::render::FormRenderer;
use crate::domain::a003_category::ui::list::model as category_model;
use crate::domain::a004_status::ui::list::model as status_model;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::notification::use_notifications;

/// Экран вакансий: форма создания с необязательной анкетой плюс список.
/// Выбор шаблона подтягивает его схему; значения анкеты собираются и
/// проверяются целиком перед отправкой.
#[component]
pub fn JobCreate() -> impl IntoView {
    let notifications = use_notifications();

    let request = RwSignal::new(NewJobRequest::default());
    let (jobs, set_jobs) = signal::<Vec<Job>>(Vec::new());
    let (form_options, set_form_options) = signal::<Vec<(String, String)>>(Vec::new());
    let (category_options, set_category_options) = signal::<Vec<(String, String)>>(Vec::new());
    let (status_options, set_status_options) = signal::<Vec<(String, String)>>(Vec::new());

    let selected_form = RwSignal::new(Option::<JobForm>::None);
    let selected_form_id = RwSignal::new(String::new());
    let values = RwSignal::new(HashMap::<Uuid, String>::new());
    let violations = RwSignal::new(Vec::<Violation>::new());
    let (is_saving, set_is_saving) = signal(false);

    // Счётчик поколений: ответ на устаревший выбор шаблона игнорируется
    let load_generation = StoredValue::new(0u32);

    let fetch_jobs = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_jobs().await {
                Ok(list) => set_jobs.set(list),
                Err(e) => notifications.error(format!("Ошибка загрузки вакансий: {}", e)),
            }
        });
    };

    wasm_bindgen_futures::spawn_local(async move {
        match form_model::fetch_forms().await {
            Ok(forms) => set_form_options.set(
                forms
                    .into_iter()
                    .map(|f| (f.id.as_string(), f.title))
                    .collect(),
            ),
            Err(e) => notifications.error(format!("Ошибка загрузки анкет: {}", e)),
        }
        match category_model::fetch_categories().await {
            Ok(list) => set_category_options.set(
                list.into_iter().map(|c| (c.id, c.name)).collect(),
            ),
            Err(e) => notifications.error(format!("Ошибка загрузки категорий: {}", e)),
        }
        match status_model::fetch_statuses().await {
            Ok(list) => set_status_options.set(
                list.into_iter().map(|s| (s.id, s.name)).collect(),
            ),
            Err(e) => notifications.error(format!("Ошибка загрузки статусов: {}", e)),
        }
    });
    fetch_jobs();

    let select_template = move |form_id: String| {
        selected_form_id.set(form_id.clone());
        values.set(HashMap::new());
        violations.set(Vec::new());
        let generation = load_generation.get_value() + 1;
        load_generation.set_value(generation);

        if form_id.is_empty() {
            selected_form.set(None);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let result = form_model::fetch_by_id(form_id).await;
            // между запросом и ответом выбрали другой шаблон
            if load_generation.get_value() != generation {
                return;
            }
            match result {
                Ok(form) => selected_form.set(Some(form)),
                Err(e) => {
                    selected_form.set(None);
                    notifications.error(format!("Ошибка загрузки анкеты: {}", e));
                }
            }
        });
    };

    let submit = move || {
        let mut payload = request.get();
        if payload.title.trim().is_empty() {
            notifications.error("Название вакансии обязательно для заполнения");
            return;
        }

        if let Some(form) = selected_form.get() {
            let category_ids: Vec<String> = category_options
                .get()
                .into_iter()
                .map(|(id, _)| id)
                .collect();
            match collect_submission(&form, &values.get(), &category_ids) {
                Ok(fields) => {
                    violations.set(Vec::new());
                    payload.form_id = Some(form.id);
                    payload.fields = fields;
                }
                Err(err) => {
                    violations.set(err.violations);
                    notifications.error("Анкета заполнена с ошибками");
                    return;
                }
            }
        }

        set_is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::create_job(&payload).await {
                Ok(()) => {
                    notifications.info("Вакансия создана");
                    request.set(NewJobRequest::default());
                    selected_form.set(None);
                    selected_form_id.set(String::new());
                    values.set(HashMap::new());
                    violations.set(Vec::new());
                    fetch_jobs();
                }
                Err(e) => notifications.error(format!("Ошибка сохранения: {}", e)),
            }
            set_is_saving.set(false);
        });
    };

    let template_options = Signal::derive(move || {
        let mut list = vec![(String::new(), "Без анкеты".to_string())];
        list.extend(form_options.get());
        list
    });
    let category_select = Signal::derive(move || {
        let mut list = vec![(String::new(), "— не выбрано —".to_string())];
        list.extend(category_options.get());
        list
    });
    let status_select = Signal::derive(move || {
        let mut list = vec![(String::new(), "— не выбрано —".to_string())];
        list.extend(status_options.get());
        list
    });

    view! {
        <div class="page jobs-page">
            <div class="page__header">
                <h2>"Вакансии"</h2>
            </div>

            <div class="card editor-card">
                <Input
                    label="Название"
                    value=Signal::derive(move || request.get().title)
                    on_input=Callback::new(move |v| request.update(|r| r.title = v))
                    required=true
                />
                <Input
                    label="Описание"
                    value=Signal::derive(move || request.get().description)
                    on_input=Callback::new(move |v| request.update(|r| r.description = v))
                />
                <Select
                    label="Категория"
                    value=Signal::derive(move || {
                        request.get().category_id.unwrap_or_default()
                    })
                    options=category_select
                    on_change=Callback::new(move |id: String| request.update(|r| {
                        r.category_id = if id.is_empty() { None } else { Some(id) };
                    }))
                />
                <Select
                    label="Статус"
                    value=Signal::derive(move || request.get().status_id.unwrap_or_default())
                    options=status_select
                    on_change=Callback::new(move |id: String| request.update(|r| {
                        r.status_id = if id.is_empty() { None } else { Some(id) };
                    }))
                />
                <Select
                    label="Анкета для откликов"
                    value=Signal::derive(move || selected_form_id.get())
                    options=template_options
                    on_change=Callback::new(select_template)
                />

                {move || selected_form.get().map(|form| view! {
                    <div class="card form-preview">
                        <h4>{form.title.clone()}</h4>
                        <FormRenderer
                            form=form
                            values=values
                            category_options=category_options
                            violations=violations
                        />
                    </div>
                })}

                <div class="editor-card__actions">
                    <Button
                        disabled=Signal::derive(move || is_saving.get())
                        on_click=Callback::new(move |_| submit())
                    >
                        {move || if is_saving.get() { "Сохраняем…" } else { "Создать" }}
                    </Button>
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Название"</th>
                        <th>"Описание"</th>
                        <th>"Анкета"</th>
                        <th>"Создана"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || jobs.get()
                        key=|job| job.id.as_string()
                        children=move |job| {
                            let has_form = if job.form_id.is_some() { "да" } else { "—" };
                            view! {
                                <tr>
                                    <td>{job.title.clone()}</td>
                                    <td>{job.description.clone()}</td>
                                    <td>{has_form}</td>
                                    <td>{format_optional_datetime(Some(&job.metadata.created_at))}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
