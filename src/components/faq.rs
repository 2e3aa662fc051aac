//! FAQ accordion on the sell page.

use leptos::prelude::*;

use crate::components::icons::{IconChevronDown, IconChevronUp};
use crate::data;

/// Accordion over the selling FAQ; one entry open at a time
#[component]
pub fn Faq() -> impl IntoView {
    let active = RwSignal::new(Option::<usize>::None);

    view! {
        <section class="faq">
            <h1>"Frequently asked questions"</h1>
            <p>"Find answers to common questions about listing items on BuyShop."</p>
            <div class="faq-list">
                {data::FAQ_ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! {
                            <div class="faq-item">
                                <button
                                    class="faq-question"
                                    on:click=move |_| active.update(|a| *a = toggled(*a, index))
                                >
                                    {entry.question}
                                    {move || {
                                        if active.get() == Some(index) {
                                            view! { <IconChevronUp /> }.into_any()
                                        } else {
                                            view! { <IconChevronDown /> }.into_any()
                                        }
                                    }}
                                </button>
                                <Show when=move || active.get() == Some(index)>
                                    <div class="faq-answer">{entry.answer}</div>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Open entry after clicking `index`; clicking the open entry closes it.
fn toggled(active: Option<usize>, index: usize) -> Option<usize> {
    if active == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        assert_eq!(toggled(None, 2), Some(2));
        assert_eq!(toggled(Some(2), 2), None);
    }

    #[test]
    fn test_toggle_switches_between_entries() {
        assert_eq!(toggled(Some(1), 3), Some(3));
    }

    #[test]
    fn test_double_toggle_restores_initial_state() {
        let start = Option::<usize>::None;
        assert_eq!(toggled(toggled(start, 0), 0), start);
    }
}
