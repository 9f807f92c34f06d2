use contracts::enums::Role;
use contracts::system::auth::ModeratorDto;
use leptos::prelude::*;

use super::api;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::notification::use_notifications;

/// Учётные записи модераторов: список плюс встроенная форма
/// создания/редактирования. Пункт меню показывается только администратору.
#[component]
pub fn ModeratorList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ModeratorDto>>(Vec::new());
    let editing = RwSignal::new(Option::<ModeratorDto>::None);
    let (is_saving, set_is_saving) = signal(false);
    let notifications = use_notifications();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_moderators().await {
                Ok(list) => set_items.set(list),
                Err(e) => notifications.error(format!("Ошибка загрузки: {}", e)),
            }
        });
    };
    fetch();

    let save = move || {
        let Some(dto) = editing.get() else { return };
        if dto.username.trim().is_empty() {
            notifications.error("Логин обязателен для заполнения");
            return;
        }
        set_is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_moderator(&dto).await {
                Ok(()) => {
                    editing.set(None);
                    notifications.info("Учётная запись сохранена");
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
            .map(|win| {
                win.confirm_with_message("Удалить учётную запись?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_is_deleting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_moderator(&id).await {
                Ok(()) => fetch(),
                Err(e) => notifications.error(format!("Ошибка удаления: {}", e)),
            }
            set_is_deleting.set(false);
        });
    };

    let (role_options, _) = signal::<Vec<(String, String)>>(
        Role::all()
            .into_iter()
            .map(|r| (r.code().to_string(), r.display_name().to_string()))
            .collect(),
    );

    view! {
        <div class="page moderators-page">
            <div class="page__header">
                <h2>"Модераторы"</h2>
                <Button on_click=Callback::new(move |_| {
                    editing.set(Some(ModeratorDto {
                        role: Some(Role::Moderator),
                        ..Default::default()
                    }));
                })>
                    "Добавить"
                </Button>
            </div>

            {move || editing.get().map(|dto| {
                let dto_signal = RwSignal::new(dto);
                view! {
                    <div class="card editor-card">
                        <Input
                            label="Логин"
                            value=Signal::derive(move || dto_signal.get().username)
                            on_input=Callback::new(move |v| dto_signal.update(|d| d.username = v))
                            required=true
                        />
                        <Input
                            label="Полное имя"
                            value=Signal::derive(move || {
                                dto_signal.get().full_name.unwrap_or_default()
                            })
                            on_input=Callback::new(move |v: String| dto_signal.update(|d| {
                                d.full_name = if v.is_empty() { None } else { Some(v) };
                            }))
                        />
                        <Input
                            label="E-mail"
                            value=Signal::derive(move || dto_signal.get().email.unwrap_or_default())
                            on_input=Callback::new(move |v: String| dto_signal.update(|d| {
                                d.email = if v.is_empty() { None } else { Some(v) };
                            }))
                        />
                        <Select
                            label="Роль"
                            value=Signal::derive(move || {
                                dto_signal
                                    .get()
                                    .role
                                    .map(|r| r.code().to_string())
                                    .unwrap_or_default()
                            })
                            options=role_options
                            on_change=Callback::new(move |code: String| {
                                dto_signal.update(|d| d.role = Role::from_code(&code));
                            })
                        />
                        <Input
                            label="Пароль"
                            input_type="password"
                            value=Signal::derive(move || {
                                dto_signal.get().password.unwrap_or_default()
                            })
                            on_input=Callback::new(move |v: String| dto_signal.update(|d| {
                                d.password = if v.is_empty() { None } else { Some(v) };
                            }))
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
                        <th>"Логин"</th>
                        <th>"Полное имя"</th>
                        <th>"E-mail"</th>
                        <th>"Роль"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|dto| dto.id.clone().unwrap_or_default()
                        children=move |dto| {
                            let edit_dto = dto.clone();
                            let delete_id = dto.id.clone().unwrap_or_default();
                            view! {
                                <tr>
                                    <td>{dto.username.clone()}</td>
                                    <td>{dto.full_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{dto.email.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{dto.role.map(|r| r.display_name()).unwrap_or("-")}</td>
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
