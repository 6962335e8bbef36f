//! Category selector

use leptos::prelude::*;

use crate::types::{ControlStyle, Selection};

/// One selector button: its label and how it is styled right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryControl {
    /// Selection this control emits
    pub label: Selection,
    /// Selected when `label` is the active selection
    pub style: ControlStyle,
}

impl CategoryControl {
    /// Control for `label` while `current` is active.
    pub fn resolve(label: Selection, current: &Selection) -> Self {
        let style = ControlStyle::resolve(&label, current);
        Self { label, style }
    }

    /// Report this control's label. Called once per activation.
    pub fn activate(&self, on_select: impl FnOnce(Selection)) {
        on_select(self.label.clone());
    }
}

/// Row of category buttons.
///
/// Holds no state: the active selection comes in through `selection` and
/// clicks go out through `on_select`.
#[component]
pub fn CategorySelector(
    categories: Vec<Selection>,
    #[prop(into)] selection: Signal<Selection>,
    #[prop(into)] on_select: Callback<Selection>,
) -> impl IntoView {
    view! {
        <div class="category-selector">
            {categories.into_iter().map(|label| {
                let text = label.to_string();
                let data = text.clone();
                let control = Signal::derive(move || {
                    CategoryControl::resolve(label.clone(), &selection.get())
                });
                view! {
                    <button
                        type="button"
                        class=move || control.with(|control| control.style.class())
                        data-selection=data
                        on:click=move |_| {
                            control.with_untracked(|control| {
                                control.activate(|label| on_select.run(label));
                            });
                        }
                    >
                        {text}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn resolves_style_from_current() {
        let current = Selection::from("Clothing");
        let clothing = CategoryControl::resolve(Selection::from("Clothing"), &current);
        let all = CategoryControl::resolve(Selection::All, &current);
        assert_eq!(clothing.style, ControlStyle::Selected);
        assert_eq!(all.style, ControlStyle::Unselected);
    }

    #[test]
    fn activation_reports_label_once() {
        let control = CategoryControl::resolve(Selection::from("Electronics"), &Selection::All);
        let received = RefCell::new(Vec::new());

        control.activate(|label| received.borrow_mut().push(label));
        assert_eq!(*received.borrow(), vec![Selection::from("Electronics")]);

        control.activate(|label| received.borrow_mut().push(label));
        assert_eq!(received.borrow().len(), 2);
    }
}
