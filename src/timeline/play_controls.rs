//! Numeric entry for the current time and the total duration.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::constants::{
    BG_SURFACE, BORDER_DEFAULT, MAX_DURATION, MIN_DURATION, STEP, TEXT_DIM, TEXT_MUTED,
    TEXT_PRIMARY,
};
use crate::core::field_edit::{classify_edit, FieldEditState, FieldEffect, StepDirection};
use crate::state::TimelineStore;

/// The control strip in the panel's top-left cell: the current-time field,
/// a separator, and the duration field.
#[component]
pub fn PlayControls(mut store: Signal<TimelineStore>) -> Element {
    let time = store.read().current_time();
    let duration = store.read().max_duration();

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                gap: 8px; padding: 0 8px;
                border-bottom: 1px solid {BORDER_DEFAULT};
                border-right: 1px solid {BORDER_DEFAULT};
                background-color: {BG_SURFACE};
            ",
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                span { style: "font-size: 11px; color: {TEXT_MUTED};", "Current" }
                TimeField {
                    id: "current-time-input",
                    value: time,
                    min: 0,
                    max: duration,
                    on_commit: move |raw: String| store.write().set_current_time(raw),
                }
            }
            span { style: "color: {TEXT_DIM};", "-" }
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                TimeField {
                    id: "duration-input",
                    value: duration,
                    min: MIN_DURATION,
                    max: MAX_DURATION,
                    on_commit: move |raw: String| store.write().set_max_duration(raw),
                }
                span { style: "font-size: 11px; color: {TEXT_MUTED};", "Duration" }
            }
        }
    }
}

/// One numeric input backed by a [`FieldEditState`]. Typing only edits the
/// draft; Enter commits, Escape/blur revert, and the −/+ steppers (also
/// ArrowUp/ArrowDown) commit immediately. Native number spinners are hidden
/// by the global CSS so every change reaching the controller has an
/// explicit classification.
#[component]
fn TimeField(
    id: &'static str,
    value: ReadOnlySignal<i64>,
    min: i64,
    max: i64,
    on_commit: EventHandler<String>,
) -> Element {
    let mut field = use_signal(|| FieldEditState::new(value()));
    let mut input_el = use_signal(|| None::<Rc<MountedData>>);

    // Reconcile with commits landing from anywhere (this field, the other
    // field's clamping, scrubbing).
    use_effect(move || {
        field.write().sync_committed(value());
    });

    let apply_effect = move |effect: FieldEffect| {
        if let Some(raw) = effect.commit {
            on_commit.call(raw);
        }
        if effect.select_all {
            let _ = document::eval(&format!(
                "document.getElementById('{id}')?.select();"
            ));
        }
        if effect.release_focus {
            if let Some(element) = input_el() {
                spawn(async move {
                    let _ = element.set_focus(false).await;
                });
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 2px;",
            input {
                id: "{id}",
                r#type: "number",
                min: "{min}",
                max: "{max}",
                step: "{STEP}",
                value: "{field.read().draft()}",
                style: "
                    width: 64px; padding: 4px 6px; font-size: 12px;
                    background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    outline: none; user-select: text;
                ",
                onmounted: move |e| input_el.set(Some(e.data())),
                onfocus: move |_| apply_effect(field.read().focus()),
                oninput: move |e| {
                    let text = e.value();
                    let kind = classify_edit(field.read().draft(), &text);
                    let effect = field.write().change(kind, &text);
                    apply_effect(effect);
                },
                onkeydown: move |e: KeyboardEvent| match e.key() {
                    Key::Enter => apply_effect(field.write().submit()),
                    Key::Escape => apply_effect(field.write().cancel()),
                    Key::ArrowUp => {
                        e.prevent_default();
                        apply_effect(field.read().step(StepDirection::Up));
                    }
                    Key::ArrowDown => {
                        e.prevent_default();
                        apply_effect(field.read().step(StepDirection::Down));
                    }
                    _ => {}
                },
                onblur: move |_| field.write().blur(),
            }
            StepperBtn { label: "−", on_click: move |_| apply_effect(field.read().step(StepDirection::Down)) }
            StepperBtn { label: "+", on_click: move |_| apply_effect(field.read().step(StepDirection::Up)) }
        }
    }
}

#[component]
fn StepperBtn(label: &'static str, on_click: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            style: "
                width: 18px; height: 18px; border: none; border-radius: 3px;
                background: transparent; color: {TEXT_MUTED}; font-size: 11px;
                cursor: pointer; display: flex; align-items: center; justify-content: center;
            ",
            onclick: move |e| on_click.call(e),
            "{label}"
        }
    }
}
