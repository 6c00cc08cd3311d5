// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The attribute dropdown.

use choro_data::AttributeSet;
use thiserror::Error;

/// Why a dropdown value was refused.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// The disabled placeholder cannot be chosen.
    #[error("{0:?} is the placeholder, not an attribute")]
    Placeholder(String),
    /// The value is not one of the attributes.
    #[error("unknown attribute {0:?}")]
    Unknown(String),
}

/// One `<option>` of the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropdownOption<'a> {
    /// Submitted value; `None` for the placeholder.
    pub value: Option<&'a str>,
    /// Displayed text.
    pub label: &'a str,
    /// Whether the option can be chosen.
    pub disabled: bool,
    /// Whether the option is the current choice.
    pub selected: bool,
}

/// A single-choice list of attributes behind a disabled placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dropdown {
    placeholder: String,
    attributes: Vec<String>,
    selected: Option<usize>,
}

impl Dropdown {
    /// Lists `attributes` in order after `placeholder`. Nothing is selected yet.
    pub fn new(placeholder: impl Into<String>, attributes: &AttributeSet) -> Self {
        Self {
            placeholder: placeholder.into(),
            attributes: attributes.iter().map(str::to_owned).collect(),
            selected: None,
        }
    }

    /// Chooses `value`, returning the index of the chosen attribute.
    ///
    /// The placeholder and unknown values are refused and leave the choice unchanged.
    pub fn select(&mut self, value: &str) -> Result<usize, SelectError> {
        if let Some(index) = self.attributes.iter().position(|a| a == value) {
            self.selected = Some(index);
            return Ok(index);
        }
        if value == self.placeholder {
            return Err(SelectError::Placeholder(value.to_owned()));
        }
        Err(SelectError::Unknown(value.to_owned()))
    }

    /// The chosen attribute, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.attributes.get(i))
            .map(String::as_str)
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Options in display order, placeholder first.
    pub fn options(&self) -> impl Iterator<Item = DropdownOption<'_>> {
        let placeholder = DropdownOption {
            value: None,
            label: &self.placeholder,
            disabled: true,
            selected: self.selected.is_none(),
        };
        let attributes = self.attributes.iter().enumerate().map(|(i, a)| DropdownOption {
            value: Some(a),
            label: a,
            disabled: false,
            selected: self.selected == Some(i),
        });
        core::iter::once(placeholder).chain(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown() -> Dropdown {
        Dropdown::new("Select Year", &AttributeSet::new(["2015", "2016", "2017"]).unwrap())
    }

    #[test]
    fn placeholder_comes_first_and_is_disabled() {
        let d = dropdown();
        let options: Vec<_> = d.options().collect();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].label, "Select Year");
        assert!(options[0].disabled && options[0].selected);
        assert_eq!(
            options[1..].iter().map(|o| o.value).collect::<Vec<_>>(),
            [Some("2015"), Some("2016"), Some("2017")]
        );
    }

    #[test]
    fn select_marks_the_choice() {
        let mut d = dropdown();
        assert_eq!(d.select("2016"), Ok(1));
        assert_eq!(d.selected(), Some("2016"));
        let selected: Vec<_> = d.options().filter(|o| o.selected).map(|o| o.label).collect();
        assert_eq!(selected, ["2016"]);
    }

    #[test]
    fn placeholder_and_unknown_values_are_refused() {
        let mut d = dropdown();
        d.select("2017").unwrap();
        assert_eq!(
            d.select("Select Year"),
            Err(SelectError::Placeholder("Select Year".into()))
        );
        assert_eq!(d.select("1999"), Err(SelectError::Unknown("1999".into())));
        assert_eq!(d.selected(), Some("2017"));
    }
}
