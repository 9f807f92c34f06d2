pub mod model;

use contracts::domain::a005_application::{
    authorize_edit, completeness_score, sort_for_review, Application, ReviewField, ReviewPatch,
};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::current_role;

/// Текстовое рецензентское поле. Контрол выключен, если роль не имеет
/// права менять поле; при отправке такое поле всё равно закрепляется
/// текущим значением в authorize_edit.
fn review_input(
    label: &'static str,
    patch: RwSignal<ReviewPatch>,
    get: fn(&ReviewPatch) -> String,
    set: fn(&mut ReviewPatch, String),
    editable: bool,
) -> impl IntoView {
    view! {
        <Input
            label=label
            value=Signal::derive(move || get(&patch.get()))
            on_input=Callback::new(move |v| patch.update(|p| set(p, v)))
            disabled=!editable
        />
    }
}

/// Отклики кандидатов: отсортированный список и построчное рецензирование.
/// Права на поля определяет единая таблица ReviewField::editable_by.
#[component]
pub fn ApplicationList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Application>::new());
    // (id записи, редактируемый патч)
    let editing = RwSignal::new(Option::<(String, RwSignal<ReviewPatch>)>::None);
    let (is_saving, set_is_saving) = signal(false);
    let notifications = use_notifications();
    let role = current_role();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_applications().await {
                Ok(mut list) => {
                    sort_for_review(&mut list);
                    items.set(list);
                }
                Err(e) => notifications.error(format!("Ошибка загрузки: {}", e)),
            }
        });
    };
    fetch();

    let save = move || {
        let Some(role) = role else { return };
        let Some((id, patch_signal)) = editing.get() else { return };
        let Some(current) = items
            .get()
            .into_iter()
            .find(|a| a.to_string_id() == id)
        else {
            return;
        };

        let authorized = authorize_edit(role, &current, &patch_signal.get());
        set_is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::update_application(&id, &authorized).await {
                Ok(updated) => {
                    items.update(|list| {
                        if let Some(slot) =
                            list.iter_mut().find(|a| a.to_string_id() == id)
                        {
                            *slot = updated;
                        }
                        sort_for_review(list);
                    });
                    editing.set(None);
                    notifications.info("Отклик обновлён");
                }
                Err(e) => notifications.error(format!("Ошибка сохранения: {}", e)),
            }
            set_is_saving.set(false);
        });
    };

    let can = move |field: ReviewField| role.map(|r| field.editable_by(r)).unwrap_or(false);

    view! {
        <div class="page applications-page">
            <div class="page__header">
                <h2>"Отклики"</h2>
            </div>

            {move || editing.get().map(|(id, patch)| {
                let applicant = items
                    .get()
                    .iter()
                    .find(|a| a.to_string_id() == id)
                    .map(|a| a.applicant_name.clone())
                    .unwrap_or_default();
                view! {
                    <div class="card editor-card review-editor">
                        <h3>{applicant}</h3>
                        <div class="review-editor__grid">
                            {review_input(
                                "Шорт-лист",
                                patch,
                                |p| p.short_list_status.clone(),
                                |p, v| p.short_list_status = v,
                                can(ReviewField::ShortListStatus),
                            )}
                            {review_input(
                                "Звонок",
                                patch,
                                |p| p.cal_status.clone(),
                                |p, v| p.cal_status = v,
                                can(ReviewField::CalStatus),
                            )}
                            {review_input(
                                "Письмо отправлено",
                                patch,
                                |p| p.mailed.clone(),
                                |p, v| p.mailed = v,
                                can(ReviewField::Mailed),
                            )}
                            {review_input(
                                "Должность",
                                patch,
                                |p| p.designation.clone(),
                                |p, v| p.designation = v,
                                can(ReviewField::Designation),
                            )}
                            {review_input(
                                "Тестовое задание",
                                patch,
                                |p| p.test_result.clone(),
                                |p, v| p.test_result = v,
                                can(ReviewField::TestResult),
                            )}
                            {review_input(
                                "Уровень",
                                patch,
                                |p| p.level.clone(),
                                |p, v| p.level = v,
                                can(ReviewField::Level),
                            )}
                            {review_input(
                                "Профиль",
                                patch,
                                |p| p.profile.clone(),
                                |p, v| p.profile = v,
                                can(ReviewField::Profile),
                            )}
                            {review_input(
                                "Тип найма",
                                patch,
                                |p| p.hiring_type.clone(),
                                |p, v| p.hiring_type = v,
                                can(ReviewField::HiringType),
                            )}
                            {review_input(
                                "Оклад на испытательный срок",
                                patch,
                                |p| p.intern_ship_probation_salary.clone(),
                                |p, v| p.intern_ship_probation_salary = v,
                                can(ReviewField::InternShipProbationSalary),
                            )}
                            {review_input(
                                "Итоговый оклад",
                                patch,
                                |p| p.final_salary.clone(),
                                |p, v| p.final_salary = v,
                                can(ReviewField::FinalSalary),
                            )}
                            {review_input(
                                "Статус найма",
                                patch,
                                |p| p.hiring_status.clone(),
                                |p, v| p.hiring_status = v,
                                can(ReviewField::HiringStatus),
                            )}
                            <Input
                                label="Дата выхода"
                                input_type="date"
                                value=Signal::derive(move || {
                                    patch.get().joining.unwrap_or_default()
                                })
                                on_input=Callback::new(move |v: String| patch.update(|p| {
                                    p.joining = if v.is_empty() { None } else { Some(v) };
                                }))
                                disabled=!can(ReviewField::Joining)
                            />
                            {review_input(
                                "Комментарий",
                                patch,
                                |p| p.comment.clone(),
                                |p, v| p.comment = v,
                                can(ReviewField::Comment),
                            )}
                        </div>
                        <div class="editor-card__actions">
                            <Button
                                disabled=Signal::derive(move || is_saving.get())
                                on_click=Callback::new(move |_| save())
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
                        <th>"Кандидат"</th>
                        <th>"E-mail"</th>
                        <th>"Статус найма"</th>
                        <th>"Заполнено"</th>
                        <th>"Обновлён"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|application| application.to_string_id()
                        children=move |application| {
                            let id = application.to_string_id();
                            let patch = ReviewPatch::from_application(&application);
                            let score = completeness_score(&application);
                            view! {
                                <tr>
                                    <td>{application.applicant_name.clone()}</td>
                                    <td>{application.email.clone()}</td>
                                    <td>{application.hiring_status.clone()}</td>
                                    <td>{format!("{}/13", score)}</td>
                                    <td>
                                        {format_optional_datetime(
                                            application.updated_at.as_ref(),
                                        )}
                                    </td>
                                    <td class="data-table__actions">
                                        <Button
                                            variant="ghost"
                                            disabled=role.is_none()
                                            on_click=Callback::new(move |_| {
                                                editing.set(Some((
                                                    id.clone(),
                                                    RwSignal::new(patch.clone()),
                                                )));
                                            })
                                        >
                                            "Рецензировать"
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
