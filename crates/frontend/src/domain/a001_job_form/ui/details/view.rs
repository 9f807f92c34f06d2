use super::view_model::JobFormDetailsViewModel;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use contracts::domain::a001_job_form::{ColumnSpan, FieldKind};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn JobFormDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = JobFormDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    let (kind_options, _) = signal::<Vec<(String, String)>>(
        FieldKind::all()
            .into_iter()
            .map(|k| (k.code().to_string(), k.display_name().to_string()))
            .collect(),
    );
    let (column_options, _) = signal::<Vec<(String, String)>>(
        ColumnSpan::all()
            .into_iter()
            .map(|c| (c.units().to_string(), format!("{} из 12", c.units())))
            .collect(),
    );

    view! {
        <div class="details-container job-form-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование анкеты" } else { "Новая анкета" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <Input
                    label="Название анкеты"
                    value={
                        let vm = vm_clone.clone();
                        Signal::derive(move || vm.form.get().title)
                    }
                    on_input={
                        let vm = vm_clone.clone();
                        Callback::new(move |v| vm.form.update(|f| f.title = v))
                    }
                    placeholder="Например: Анкета Rust-разработчика"
                    required=true
                />

                // Предпросмотр схемы: поля в порядке добавления
                <div class="field-list">
                    {
                        let vm = vm_clone.clone();
                        move || {
                            let fields = vm.form.get().fields;
                            if fields.is_empty() {
                                return view! {
                                    <div class="field-list__empty">"Полей пока нет"</div>
                                }.into_any();
                            }
                            fields
                                .iter()
                                .enumerate()
                                .map(|(index, field)| {
                                    let vm = vm.clone();
                                    let badge = format!(
                                        "{} · {} колонок{}",
                                        field.control.kind().display_name(),
                                        field.column.units(),
                                        if field.required { " · обязательное" } else { "" },
                                    );
                                    view! {
                                        <div class="field-list__row">
                                            <span class="field-list__title">{field.title.clone()}</span>
                                            <span class="field-list__badge">{badge}</span>
                                            <button
                                                class="field-list__remove"
                                                on:click=move |_| vm.remove_field(index)
                                            >
                                                "Убрать"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }
                </div>

                <Button
                    variant="secondary"
                    on_click={
                        let vm = vm_clone.clone();
                        Callback::new(move |_| vm.open_field_dialog())
                    }
                >
                    "Добавить поле"
                </Button>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.show_dialog.get().then(|| {
                    let vm = vm.clone();
                    view! { <FieldDialog vm=vm kind_options=kind_options column_options=column_options /> }
                })
            }

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.is_saving.get()
                    }
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                >
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_saving.get() { "Сохраняем…" } else { "Сохранить" }
                    }
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    "Отмена"
                </button>
            </div>
        </div>
    }
}

/// Диалог добавления поля. При ошибках валидации не закрывается:
/// commit_draft оставляет черновик как есть и подсвечивает каждую проблему.
#[component]
fn FieldDialog(
    vm: JobFormDetailsViewModel,
    kind_options: ReadSignal<Vec<(String, String)>>,
    column_options: ReadSignal<Vec<(String, String)>>,
) -> impl IntoView {
    let vm_clone = vm.clone();

    view! {
        <div class="dialog-backdrop">
            <div class="dialog field-dialog">
                <h4>"Новое поле"</h4>

                <Select
                    label="Тип поля"
                    value={
                        let vm = vm_clone.clone();
                        Signal::derive(move || vm.draft.get().kind.code().to_string())
                    }
                    options=kind_options
                    on_change={
                        let vm = vm_clone.clone();
                        Callback::new(move |code: String| vm.set_draft_kind(&code))
                    }
                />

                <Input
                    label="Название"
                    value={
                        let vm = vm_clone.clone();
                        Signal::derive(move || vm.draft.get().title)
                    }
                    on_input={
                        let vm = vm_clone.clone();
                        Callback::new(move |v| vm.draft.update(|d| d.set_title(v)))
                    }
                    error={
                        let vm = vm_clone.clone();
                        Signal::derive(move || vm.draft_error_for("title"))
                    }
                    required=true
                />

                <Checkbox
                    label="Обязательное поле"
                    checked={
                        let vm = vm_clone.clone();
                        Signal::derive(move || vm.draft.get().required)
                    }
                    on_change={
                        let vm = vm_clone.clone();
                        Callback::new(move |checked| vm.draft.update(|d| d.set_required(checked)))
                    }
                />

                <Select
                    label="Ширина"
                    value={
                        let vm = vm_clone.clone();
                        Signal::derive(move || vm.draft.get().column.units().to_string())
                    }
                    options=column_options
                    on_change={
                        let vm = vm_clone.clone();
                        Callback::new(move |raw: String| {
                            vm.draft.update(|d| d.set_column_raw(&raw));
                        })
                    }
                />

                // Редактор вариантов — только для полей с выбором
                {
                    let vm = vm_clone.clone();
                    move || {
                        let draft = vm.draft.get();
                        draft.kind.is_choice().then(|| {
                            let vm = vm.clone();
                            let single = draft.options.len() == 1;
                            view! {
                                <div class="option-editor">
                                    <span class="form__label">"Варианты ответа"</span>
                                    {draft
                                        .options
                                        .iter()
                                        .enumerate()
                                        .map(|(index, option)| {
                                            let vm_input = vm.clone();
                                            let vm_remove = vm.clone();
                                            let error = vm
                                                .draft_error_for(&format!("option-{}", index));
                                            view! {
                                                <div class="option-editor__row">
                                                    <input
                                                        class=if error.is_some() {
                                                            "form__input form__input--invalid"
                                                        } else {
                                                            "form__input"
                                                        }
                                                        type="text"
                                                        prop:value=option.label.clone()
                                                        placeholder="Текст варианта"
                                                        on:input=move |ev| {
                                                            vm_input.draft.update(|d| {
                                                                d.set_option_label(
                                                                    index,
                                                                    &event_target_value(&ev),
                                                                );
                                                            });
                                                        }
                                                    />
                                                    // последний вариант убрать нельзя:
                                                    // у поля с выбором должен остаться хотя бы один
                                                    <button
                                                        class="option-editor__remove"
                                                        disabled=single
                                                        on:click=move |_| {
                                                            vm_remove.draft.update(|d| {
                                                                d.remove_option(index);
                                                            });
                                                        }
                                                    >
                                                        "×"
                                                    </button>
                                                    {error.map(|e| view! {
                                                        <span class="form__error">{e}</span>
                                                    })}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                    <button
                                        class="option-editor__add"
                                        on:click={
                                            let vm = vm.clone();
                                            move |_| vm.draft.update(|d| d.add_option())
                                        }
                                    >
                                        "Добавить вариант"
                                    </button>
                                </div>
                            }
                        })
                    }
                }

                <div class="dialog__actions">
                    <Button
                        on_click={
                            let vm = vm_clone.clone();
                            Callback::new(move |_| vm.commit_draft())
                        }
                    >
                        "Добавить"
                    </Button>
                    <Button
                        variant="secondary"
                        on_click={
                            let vm = vm_clone.clone();
                            Callback::new(move |_| vm.close_field_dialog())
                        }
                    >
                        "Отмена"
                    </Button>
                </div>
            </div>
        </div>
    }
}
