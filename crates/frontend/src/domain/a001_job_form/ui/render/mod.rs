use contracts::domain::a001_job_form::{FieldControl, FieldDescriptor, JobForm, Violation};
use leptos::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::components::ui::{Input, Radio, Select};

/// Generic renderer for a form template. Renders every descriptor in schema
/// order on a 12-column grid; the parent owns the raw values map and the
/// violation list, so the same renderer serves preview and real submission.
#[component]
pub fn FormRenderer(
    form: JobForm,
    values: RwSignal<HashMap<Uuid, String>>,
    /// (id, name) пары категорий для полей-ссылок
    #[prop(into)]
    category_options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    violations: Signal<Vec<Violation>>,
) -> impl IntoView {
    view! {
        <div class="form-grid">
            {form
                .fields
                .iter()
                .map(|descriptor| {
                    let descriptor = descriptor.clone();
                    let field_id = descriptor.id;
                    let error = Signal::derive(move || {
                        violations
                            .get()
                            .iter()
                            .find(|v| v.field_id == field_id)
                            .map(|v| v.message.clone())
                    });
                    view! {
                        <DynamicField
                            descriptor=descriptor
                            values=values
                            category_options=category_options
                            error=error
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Одно поле анкеты: элемент управления выбирается по описанию поля
#[component]
fn DynamicField(
    descriptor: FieldDescriptor,
    values: RwSignal<HashMap<Uuid, String>>,
    #[prop(into)] category_options: Signal<Vec<(String, String)>>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let field_id = descriptor.id;
    let value = Signal::derive(move || {
        values
            .get()
            .get(&field_id)
            .cloned()
            .unwrap_or_default()
    });
    let set_value = Callback::new(move |v: String| {
        values.update(|map| {
            map.insert(field_id, v);
        });
    });
    let wrapper_class = format!("form-grid__item form-grid__item--{}", descriptor.column.units());

    let control = match descriptor.control {
        FieldControl::Text => view! {
            <Input
                label=descriptor.title.clone()
                value=value
                on_input=set_value
                required=descriptor.required
                error=error
            />
        }
        .into_any(),
        FieldControl::Number => view! {
            <Input
                label=descriptor.title.clone()
                input_type="number"
                value=value
                on_input=set_value
                required=descriptor.required
                error=error
            />
        }
        .into_any(),
        FieldControl::Date => view! {
            <Input
                label=descriptor.title.clone()
                input_type="date"
                value=value
                on_input=set_value
                required=descriptor.required
                error=error
            />
        }
        .into_any(),
        FieldControl::Radio { ref options } => {
            let group_name = format!("field-{}", field_id);
            view! {
                <div class="form__group">
                    <span class="form__label">{descriptor.title.clone()}</span>
                    {options
                        .iter()
                        .map(|option| {
                            view! {
                                <Radio
                                    label=option.label.clone()
                                    value=option.value.clone()
                                    checked_value=value
                                    on_change=set_value
                                    name=group_name.clone()
                                />
                            }
                        })
                        .collect_view()}
                    {move || error.get().map(|e| view! {
                        <span class="form__error">{e}</span>
                    })}
                </div>
            }
            .into_any()
        }
        FieldControl::Select { ref options } => {
            let mut list = vec![(String::new(), "— не выбрано —".to_string())];
            list.extend(options.iter().map(|o| (o.value.clone(), o.label.clone())));
            let (select_options, _) = signal(list);
            view! {
                <div class="form__group">
                    <Select
                        label=descriptor.title.clone()
                        value=value
                        options=select_options
                        on_change=set_value
                        required=descriptor.required
                    />
                    {move || error.get().map(|e| view! {
                        <span class="form__error">{e}</span>
                    })}
                </div>
            }
            .into_any()
        }
        FieldControl::CategoryReference => {
            let options = Signal::derive(move || {
                let mut list = vec![(String::new(), "— не выбрано —".to_string())];
                list.extend(category_options.get());
                list
            });
            view! {
                <div class="form__group">
                    <Select
                        label=descriptor.title.clone()
                        value=value
                        options=options
                        on_change=set_value
                        required=descriptor.required
                    />
                    {move || error.get().map(|e| view! {
                        <span class="form__error">{e}</span>
                    })}
                </div>
            }
            .into_any()
        }
    };

    view! { <div class=wrapper_class>{control}</div> }
}
