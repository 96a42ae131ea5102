//! Presentation metadata of settings, and constructors for the widgets that
//! the settings GUI knows about.
//!
//! Nothing in here affects how values are encoded or when settings are
//! disabled. The widget constructors only preconfigure a [`SettingBuilder`]
//! with the value type, choices and range that fit the widget.

use super::{bitwidth::NumericRange, ChoiceKey, ChoiceSet, Map, SettingBuilder, Value, ValueType};

/// The kind of widget a setting is displayed with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum WidgetKind {
    /// A button that triggers an action. Holds no value.
    Button,
    /// Static text. Holds no value.
    Textbox,
    /// A checkbox toggling a boolean.
    Checkbutton,
    /// A dropdown to pick one of the choices.
    Combobox,
    /// A group of radio buttons to pick one of the choices.
    Radiobutton,
    /// A file path input.
    Fileinput,
    /// A directory path input.
    Directoryinput,
    /// A free-form text input.
    Textinput,
    /// A slider over a stepped numeric range.
    Scale,
    /// A free-form number input, optionally bounded.
    Numberinput,
    /// A list of checkboxes to pick any number of choices.
    MultipleSelect,
    /// A searchable list to pick any number of choices.
    SearchBox,
}

/// Free-form parameters of the GUI element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuiParams {
    /// The numeric range of the widget, if it has one.
    pub range: Option<NumericRange>,
    /// The weighted options a random value is picked from.
    pub distribution: Vec<(Value, u32)>,
    /// Any additional parameters.
    pub extra: Map,
}

impl GuiParams {
    /// Returns the additional parameter stored under the key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Returns the weighted options a random value is picked from, in
    /// declaration order.
    #[inline]
    pub fn distribution(&self) -> &[(Value, u32)] {
        &self.distribution
    }
}

/// Everything about a setting that only matters for displaying it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuiInfo {
    /// The label of the setting.
    pub text: String,
    /// The tooltip explaining the setting.
    pub tooltip: String,
    /// The widget the setting is displayed with.
    pub widget: Option<WidgetKind>,
    /// Additional parameters of the widget.
    pub params: GuiParams,
}

/// The option of a setting that disables other settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DisableOption {
    /// The value the setting is compared against.
    pub value: Value,
    /// If set, the other settings are disabled whenever the setting does
    /// **not** have the value.
    pub negate: bool,
}

impl DisableOption {
    /// Disables the targets while the setting has the value. A string value
    /// starting with `!` is negated instead, disabling the targets while the
    /// setting has any other value.
    pub fn parse(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::String(s) if s.starts_with('!') => Self {
                value: Value::String(s[1..].to_owned()),
                negate: true,
            },
            value => Self {
                value,
                negate: false,
            },
        }
    }

    /// Disables the targets while the setting does not have the value.
    pub fn not(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            negate: true,
        }
    }
}

/// The settings, sections and tabs that get disabled by an option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisableTargets {
    /// Names of individual settings.
    pub settings: Vec<String>,
    /// Names of sections, disabling every setting in them.
    pub sections: Vec<String>,
    /// Names of tabs, disabling every setting in all of their sections.
    pub tabs: Vec<String>,
}

impl DisableTargets {
    /// Targets the given settings.
    pub fn settings<S: Into<String>>(settings: impl IntoIterator<Item = S>) -> Self {
        Self {
            settings: settings.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Additionally targets the given sections.
    pub fn with_sections<S: Into<String>>(mut self, sections: impl IntoIterator<Item = S>) -> Self {
        self.sections.extend(sections.into_iter().map(Into::into));
        self
    }

    /// Additionally targets the given tabs.
    pub fn with_tabs<S: Into<String>>(mut self, tabs: impl IntoIterator<Item = S>) -> Self {
        self.tabs.extend(tabs.into_iter().map(Into::into));
        self
    }
}

/// Describes which other settings a setting disables, per option. Entries
/// keep the order they were declared in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisableMap(Vec<(DisableOption, DisableTargets)>);

impl DisableMap {
    /// Creates an empty disable map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the targets that get disabled by the option.
    #[inline]
    pub fn insert(&mut self, option: DisableOption, targets: DisableTargets) {
        self.0.push((option, targets));
    }

    /// Returns [`true`] if the setting disables nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the options and their targets.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &(DisableOption, DisableTargets)> + '_ {
        self.0.iter()
    }
}

/// A button that triggers an action. It is not a setting and holds no value.
pub fn button(name: &str, text: &str) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::None)
        .widget(WidgetKind::Button)
        .text(text)
}

/// Static text. It is not a setting and holds no value.
pub fn textbox(name: &str, text: &str) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::None)
        .widget(WidgetKind::Textbox)
        .text(text)
}

/// A checkbox toggling a boolean setting. It defaults to unchecked.
pub fn checkbutton(name: &str, text: &str) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::Bool)
        .widget(WidgetKind::Checkbutton)
        .text(text)
        .choice_set(ChoiceSet::from_labeled([(true, "checked"), (false, "unchecked")]))
}

/// A dropdown to pick one of the string choices.
pub fn combobox<K: Into<ChoiceKey>>(
    name: &str,
    text: &str,
    choices: impl IntoIterator<Item = K>,
    default: impl Into<Value>,
) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::String)
        .widget(WidgetKind::Combobox)
        .text(text)
        .choices(choices)
        .default(default)
}

/// Radio buttons to pick one of the string choices.
pub fn radiobutton<K: Into<ChoiceKey>>(
    name: &str,
    text: &str,
    choices: impl IntoIterator<Item = K>,
    default: impl Into<Value>,
) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::String)
        .widget(WidgetKind::Radiobutton)
        .text(text)
        .choices(choices)
        .default(default)
}

/// A free-form text input.
pub fn textinput(name: &str, text: &str) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::String)
        .widget(WidgetKind::Textinput)
        .text(text)
}

/// A file path input.
pub fn fileinput(name: &str, text: &str) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::String)
        .widget(WidgetKind::Fileinput)
        .text(text)
}

/// A directory path input.
pub fn directoryinput(name: &str, text: &str) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::String)
        .widget(WidgetKind::Directoryinput)
        .text(text)
}

/// A dropdown to pick one of the integer choices.
pub fn combobox_int<K: Into<ChoiceKey>>(
    name: &str,
    text: &str,
    choices: impl IntoIterator<Item = K>,
    default: i64,
) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::Integer)
        .widget(WidgetKind::Combobox)
        .text(text)
        .choices(choices)
        .default(default)
}

/// A slider over the stepped range from `min` to `max`, inclusive. Every
/// reachable value becomes a choice.
pub fn scale(name: &str, text: &str, default: i64, min: i64, max: i64, step: i64) -> SettingBuilder {
    let range = NumericRange::with_step(min, max, step);
    SettingBuilder::new(name, ValueType::Integer)
        .widget(WidgetKind::Scale)
        .text(text)
        .choices(range.values())
        .range(range)
        .default(default)
}

/// A free-form number input. Only if both bounds are given does the setting
/// get a range to be encoded with.
pub fn numberinput(
    name: &str,
    text: &str,
    default: i64,
    min: Option<i64>,
    max: Option<i64>,
) -> SettingBuilder {
    let builder = SettingBuilder::new(name, ValueType::Integer)
        .widget(WidgetKind::Numberinput)
        .text(text)
        .default(default);
    match (min, max) {
        (Some(min), Some(max)) => builder.range(NumericRange::new(min, max)),
        (min, max) => {
            let builder = match min {
                Some(min) => builder.param("min", min),
                None => builder,
            };
            match max {
                Some(max) => builder.param("max", max),
                None => builder,
            }
        }
    }
}

/// A list of checkboxes to pick any number of the choices.
pub fn multiple_select<K: Into<ChoiceKey>>(
    name: &str,
    text: &str,
    choices: impl IntoIterator<Item = K>,
    default: impl Into<Value>,
) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::List)
        .widget(WidgetKind::MultipleSelect)
        .text(text)
        .choices(choices)
        .default(default)
}

/// A searchable list to pick any number of the choices.
pub fn search_box<K: Into<ChoiceKey>>(
    name: &str,
    text: &str,
    choices: impl IntoIterator<Item = K>,
    default: impl Into<Value>,
) -> SettingBuilder {
    SettingBuilder::new(name, ValueType::List)
        .widget(WidgetKind::SearchBox)
        .text(text)
        .choices(choices)
        .default(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negated_options() {
        let option = DisableOption::parse("!off");
        assert_eq!(option.value, Value::from("off"));
        assert!(option.negate);

        let option = DisableOption::parse(true);
        assert_eq!(option.value, Value::Bool(true));
        assert!(!option.negate);

        assert!(DisableOption::not(3).negate);
    }

    #[test]
    fn scale_turns_range_into_choices() {
        let info = scale("damage", "Damage", 2, 0, 8, 2).shared().build().unwrap();
        let keys: Vec<_> = info.choices().keys().cloned().collect();
        assert_eq!(keys, [0, 2, 4, 6, 8].map(ChoiceKey::Int));
        assert_eq!(info.gui().params.range, Some(NumericRange::with_step(0, 8, 2)));
        assert_eq!(info.bitwidth(), 3);
    }

    #[test]
    fn numberinput_range_needs_both_bounds() {
        let bounded = numberinput("hearts", "Hearts", 3, Some(0), Some(7)).shared().build().unwrap();
        assert_eq!(bounded.bitwidth(), 3);
        assert!(bounded.choices().is_empty());

        let open = numberinput("seed", "Seed", 0, Some(0), None).shared().build().unwrap();
        assert_eq!(open.bitwidth(), 0);
        assert_eq!(open.gui().params.get("min"), Some(&Value::I64(0)));
    }

    #[test]
    fn checkbutton_choices() {
        let info = checkbutton("open_door", "Open Door").build().unwrap();
        assert_eq!(info.choices().label(&ChoiceKey::Bool(true)), Some("checked"));
        assert_eq!(info.choices().key_for_label("unchecked"), Some(&ChoiceKey::Bool(false)));
        assert_eq!(info.gui().widget, Some(WidgetKind::Checkbutton));
    }
}
