use std::collections::{HashMap, HashSet};

use scraper::{ElementRef, Html, Selector};

use crate::constants::PICKER_DATE_FORMAT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangePickerOptions {
    pub format: String,
    pub show_on_focus: bool,
}

impl Default for DateRangePickerOptions {
    fn default() -> Self {
        DateRangePickerOptions {
            format: PICKER_DATE_FORMAT.to_string(),
            show_on_focus: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedPicker {
    pub container_id: String,
    pub options: DateRangePickerOptions,
}

/// An `<input>` found in dialog markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub id: String,
    pub name: Option<String>,
    pub placeholder: Option<String>,
}

/// Markup shown inside a custom dialog plus the edits the open/close hooks
/// made to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContent {
    markup: String,
    removed: HashSet<(String, String)>,
    pickers: Vec<AttachedPicker>,
}

impl DialogContent {
    pub fn new(markup: impl Into<String>) -> Self {
        DialogContent {
            markup: markup.into(),
            removed: HashSet::new(),
            pickers: Vec::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        let html = Html::parse_fragment(&self.markup);
        find_by_id(&html, id).is_some()
    }

    pub fn has_attribute(&self, id: &str, attr: &str) -> bool {
        if self.removed.contains(&(id.to_string(), attr.to_string())) {
            return false;
        }
        let html = Html::parse_fragment(&self.markup);
        find_by_id(&html, id).is_some_and(|el| el.value().attr(attr).is_some())
    }

    /// Returns false when no element has that id.
    pub fn remove_attribute(&mut self, id: &str, attr: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.removed.insert((id.to_string(), attr.to_string()));
        true
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.has_attribute(id, "disabled")
    }

    pub fn attach_date_range_picker(
        &mut self,
        container_id: &str,
        options: DateRangePickerOptions,
    ) -> bool {
        if !self.contains(container_id) {
            return false;
        }
        self.pickers.push(AttachedPicker {
            container_id: container_id.to_string(),
            options,
        });
        true
    }

    pub fn pickers(&self) -> &[AttachedPicker] {
        &self.pickers
    }

    pub fn inputs(&self) -> Vec<FormInput> {
        let html = Html::parse_fragment(&self.markup);
        let Ok(selector) = Selector::parse("input[id]") else {
            return Vec::new();
        };

        html.select(&selector)
            .filter_map(|el| {
                let element = el.value();
                Some(FormInput {
                    id: element.id()?.to_string(),
                    name: element.attr("name").map(str::to_string),
                    placeholder: element.attr("placeholder").map(str::to_string),
                })
            })
            .collect()
    }

    /// Freezes the content with what the user typed, keyed by input id.
    pub fn submit<I, K, V>(&self, values: I) -> SubmittedForm
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        SubmittedForm {
            markup: self.markup.clone(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A confirmed dialog form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedForm {
    markup: String,
    values: HashMap<String, String>,
}

impl SubmittedForm {
    /// Trimmed value of the element with `id`: what the user typed, or the
    /// `value` attribute from the markup when they left it alone.
    pub fn value(&self, id: &str) -> Option<String> {
        if let Some(value) = self.values.get(id) {
            return Some(value.trim().to_string());
        }

        let html = Html::parse_fragment(&self.markup);
        let element = find_by_id(&html, id)?;
        Some(
            element
                .value()
                .attr("value")
                .unwrap_or_default()
                .trim()
                .to_string(),
        )
    }
}

fn find_by_id<'a>(html: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!(r#"[id="{id}"]"#)).ok()?;
    html.select(&selector).next()
}
