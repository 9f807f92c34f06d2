pub mod model;

use contracts::domain::a004_status::{Status, StatusDto};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::notification::use_notifications;

/// Справочник статусов найма. Доступен только администратору.
#[component]
pub fn StatusList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Status>>(Vec::new());
    let editing = RwSignal::new(Option::<StatusDto>::None);
    let (is_saving, set_is_saving) = signal(false);
    let notifications = use_notifications();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_statuses().await {
                Ok(list) => set_items.set(list),
                Err(e) => notifications.error(format!("Ошибка загрузки: {}", e)),
            }
        });
    };
    fetch();

    let save = move || {
        let Some(dto) = editing.get() else { return };
        if dto.name.trim().is_empty() {
            notifications.error("Название обязательно для заполнения");
            return;
        }
        set_is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_status(&dto).await {
                Ok(()) => {
                    editing.set(None);
                    notifications.info("Статус сохранён");
                    fetch();
                }
                Err(e) => notifications.error(format!("Ошибка сохранения: {}", e)),
            }
            set_is_saving.set(false);
        });
    };

    let (is_deleting, set_is_deleting) = signal(false);
    let delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| win.confirm_with_message("Удалить статус?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_is_deleting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete_status(&id).await {
                Ok(()) => fetch(),
                Err(e) => notifications.error(format!("Ошибка удаления: {}", e)),
            }
            set_is_deleting.set(false);
        });
    };

    view! {
        <div class="page statuses-page">
            <div class="page__header">
                <h2>"Статусы"</h2>
                <Button on_click=Callback::new(move |_| {
                    editing.set(Some(StatusDto::default()));
                })>
                    "Добавить"
                </Button>
            </div>

            {move || editing.get().map(|dto| {
                let dto_signal = RwSignal::new(dto);
                view! {
                    <div class="card editor-card">
                        <Input
                            label="Название"
                            value=Signal::derive(move || dto_signal.get().name)
                            on_input=Callback::new(move |v| dto_signal.update(|d| d.name = v))
                            required=true
                        />
                        <div class="editor-card__actions">
                            <Button
                                disabled=Signal::derive(move || is_saving.get())
                                on_click=Callback::new(move |_| {
                                    editing.set(Some(dto_signal.get()));
                                    save();
                                })
                            >
                                {move || if is_saving.get() { "Сохраняем…" } else { "Сохранить" }}
                            </Button>
                            <Button
                                variant="secondary"
                                on_click=Callback::new(move |_| editing.set(None))
                            >
                                "Отмена"
                            </Button>
                        </div>
                    </div>
                }
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Название"</th>
                        <th>"Создан"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|status| status.id.clone()
                        children=move |status| {
                            let edit_dto = StatusDto {
                                id: Some(status.id.clone()),
                                name: status.name.clone(),
                            };
                            let delete_id = status.id.clone();
                            view! {
                                <tr>
                                    <td>{status.name.clone()}</td>
                                    <td>{format_optional_datetime(Some(&status.metadata.created_at))}</td>
                                    <td class="data-table__actions">
                                        <Button
                                            variant="ghost"
                                            on_click=Callback::new(move |_| {
                                                editing.set(Some(edit_dto.clone()));
                                            })
                                        >
                                            "Изменить"
                                        </Button>
                                        <Button
                                            variant="ghost"
                                            disabled=Signal::derive(move || is_deleting.get())
                                            on_click=Callback::new(move |_| delete(delete_id.clone()))
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
        </div>
    }
}
