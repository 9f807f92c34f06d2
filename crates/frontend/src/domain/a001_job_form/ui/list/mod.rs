use contracts::domain::a001_job_form::{JobForm, JobFormId};
use contracts::domain::a002_job::referenced_form_ids;
use leptos::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;

use super::details::{model, JobFormDetails};
use crate::domain::a002_job::ui::details::model as job_model;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::notification::use_notifications;

/// Список шаблонов анкет. Шаблон, на который ссылается хотя бы одна
/// вакансия, считается использованным: его нельзя ни редактировать,
/// ни удалять, чтобы не менять анкету под уже собранными откликами.
#[component]
pub fn JobFormList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<JobForm>>(Vec::new());
    let (used_ids, set_used_ids) = signal::<HashSet<JobFormId>>(HashSet::new());
    // None — список; Some(None) — создание; Some(Some(id)) — редактирование
    let editing = RwSignal::new(Option::<Option<String>>::None);
    let notifications = use_notifications();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_forms().await {
                Ok(list) => set_items.set(list),
                Err(e) => notifications.error(format!("Ошибка загрузки анкет: {}", e)),
            }
            match job_model::fetch_jobs().await {
                Ok(jobs) => set_used_ids.set(referenced_form_ids(&jobs)),
                Err(e) => notifications.error(format!("Ошибка загрузки вакансий: {}", e)),
            }
        });
    };
    fetch();

    let (is_deleting, set_is_deleting) = signal(false);
    let delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Удалить шаблон анкеты?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_is_deleting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete_form(&id).await {
                Ok(()) => {
                    notifications.info("Шаблон удалён");
                    fetch();
                }
                Err(e) => notifications.error(format!("Ошибка удаления: {}", e)),
            }
            set_is_deleting.set(false);
        });
    };

    view! {
        <div class="page job-forms-page">
            {move || match editing.get() {
                Some(id) => {
                    let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| {
                        editing.set(None);
                        notifications.info("Анкета сохранена");
                        fetch();
                    });
                    let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| editing.set(None));
                    view! {
                        <JobFormDetails id=id on_saved=on_saved on_cancel=on_cancel />
                    }
                    .into_any()
                }
                None => view! {
                    <div class="page__header">
                        <h2>"Анкеты"</h2>
                        <Button on_click=Callback::new(move |_| editing.set(Some(None)))>
                            "Добавить"
                        </Button>
                    </div>

                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Название"</th>
                                <th>"Полей"</th>
                                <th>"Изменена"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|form| form.id.as_string()
                                children=move |form| {
                                    let form_id = form.id;
                                    let id = form.id.as_string();
                                    let edit_id = id.clone();
                                    let delete_id = id.clone();
                                    let used =
                                        Signal::derive(move || used_ids.get().contains(&form_id));
                                    view! {
                                        <tr>
                                            <td>
                                                {form.title.clone()}
                                                {move || used.get().then(|| view! {
                                                    <span
                                                        class="data-table__hint"
                                                        title="Анкета используется вакансией"
                                                    >
                                                        " (используется)"
                                                    </span>
                                                })}
                                            </td>
                                            <td>{form.fields.len()}</td>
                                            <td>{format_optional_datetime(Some(&form.metadata.updated_at))}</td>
                                            <td class="data-table__actions">
                                                <Button
                                                    variant="ghost"
                                                    disabled=used
                                                    on_click=Callback::new(move |_| {
                                                        editing.set(Some(Some(edit_id.clone())));
                                                    })
                                                >
                                                    "Изменить"
                                                </Button>
                                                <Button
                                                    variant="ghost"
                                                    disabled=Signal::derive(move || {
                                                        used.get() || is_deleting.get()
                                                    })
                                                    on_click=Callback::new(move |_| {
                                                        delete(delete_id.clone())
                                                    })
                                                >
                                                    "Удалить"
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </div>
    }
}
